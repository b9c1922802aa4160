mod bridge;
mod cell;
mod component;
mod config;
mod error;
mod grid;
mod marker;
mod menu;
mod selection;
mod state;
mod theme;

use std::io::{self, BufReader};
use std::thread;

use anyhow::Result;
use gpui::*;
use log::{error, info, warn};

use bridge::{BridgeNotifier, JsonLinesChannel, RenderArgs};
use component::PositionComponent;
use config::Config;
use grid::*;
use theme::Theme;

fn main() -> Result<()> {
    // Logs go to stderr; stdout is the host channel
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let config = Config::from_env()?;
    info!("Position picker starting");

    let mut notifier = BridgeNotifier::new(Box::new(JsonLinesChannel::new(io::stdout())));
    notifier.handshake(config.frame_height);

    let mut input = BufReader::new(io::stdin());
    let args = match bridge::read_first_render(&mut input) {
        Ok(Some(args)) => args,
        Ok(None) => {
            warn!("Host closed the channel before rendering; starting without restrictions");
            RenderArgs::default()
        }
        Err(e) => {
            warn!("{e}; starting without restrictions");
            RenderArgs::default()
        }
    };
    info!("First render received with {} positions", args.positions.len());

    let component = PositionComponent::new(&args, &config.marker(), notifier);
    thread::spawn(move || bridge::drain_events(input));

    let frame_height = config.frame_height as f32;

    Application::new().run(move |cx| {
        Theme::init(cx);
        menu::setup_menu(cx);

        cx.bind_keys([
            KeyBinding::new("up", MoveUp, Some("PositionGrid")),
            KeyBinding::new("down", MoveDown, Some("PositionGrid")),
            KeyBinding::new("left", MoveLeft, Some("PositionGrid")),
            KeyBinding::new("right", MoveRight, Some("PositionGrid")),
            KeyBinding::new("k", MoveUp, Some("PositionGrid")),
            KeyBinding::new("j", MoveDown, Some("PositionGrid")),
            KeyBinding::new("h", MoveLeft, Some("PositionGrid")),
            KeyBinding::new("l", MoveRight, Some("PositionGrid")),
            KeyBinding::new("space", ClickFocused, Some("PositionGrid")),
            KeyBinding::new("enter", ClickFocused, Some("PositionGrid")),
            KeyBinding::new("cmd-q", Quit, None),
        ]);

        cx.on_action::<Quit>(|_, cx| {
            cx.quit();
        });

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(WINDOW_WIDTH), px(frame_height)),
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some("Position Picker".into()),
                appears_transparent: false,
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let view = cx.new(|cx| PositionGrid::new(component, cx));
            view.focus_handle(cx).focus(window);
            view
        });
        if let Err(e) = opened {
            error!("Failed to open window: {e}");
            cx.quit();
        }
    });

    Ok(())
}

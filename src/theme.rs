use gpui::*;

#[cfg(target_os = "macos")]
use objc2::rc::Retained;
#[cfg(target_os = "macos")]
use objc2_app_kit::NSColor;

pub struct Theme {
    pub text: Rgba,
    pub subtext0: Rgba,
    pub surface1: Rgba,
    pub surface0: Rgba,
    pub base: Rgba,
    pub mantle: Rgba,
    pub accent: Rgba,
    pub restricted: Rgba,
    pub restricted_text: Rgba,
}

impl Global for Theme {}

/// The user's accent color, when the platform exposes one.
#[cfg(target_os = "macos")]
fn system_accent() -> Option<Rgba> {
    let accent: Retained<NSColor> = NSColor::controlAccentColor();
    let srgb = accent.colorUsingColorSpace(objc2_app_kit::NSColorSpace::sRGBColorSpace().as_ref())?;
    let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Some(rgba(u32::from_be_bytes([
        channel(srgb.redComponent()),
        channel(srgb.greenComponent()),
        channel(srgb.blueComponent()),
        channel(srgb.alphaComponent()),
    ])))
}

#[cfg(not(target_os = "macos"))]
fn system_accent() -> Option<Rgba> {
    None
}

impl Theme {
    pub fn init(app: &mut App) {
        app.set_global(Theme::get_dark());
    }

    // Catppuccin Mocha, with the host's occupied-position red
    pub fn get_dark() -> Theme {
        Theme {
            text: rgb(0xcdd6f4),
            subtext0: rgb(0xa6adc8),
            surface1: rgb(0x45475a),
            surface0: rgb(0x313244),
            base: rgb(0x1e1e2e),
            mantle: rgb(0x181825),
            accent: system_accent().unwrap_or_else(|| gpui::blue().into()),
            restricted: rgb(0xff6666),
            restricted_text: rgb(0xffffff),
        }
    }
}

use gpui::prelude::FluentBuilder;
use gpui::*;
use log::debug;

use crate::Theme;
use crate::component::PositionComponent;
use crate::error::SelectionError;
use crate::state::{GRID_COLS, GRID_ROWS, Position};

pub const CELL_WIDTH: f32 = 140.0;
pub const CELL_HEIGHT: f32 = 44.0;
pub const GRID_GAP: f32 = 6.0;
pub const SUMMARY_HEIGHT: f32 = 32.0;

pub const WINDOW_WIDTH: f32 = GRID_COLS as f32 * (CELL_WIDTH + GRID_GAP) + GRID_GAP;

// Keyboard cursor actions
actions!(
    position_grid,
    [
        MoveUp,
        MoveDown,
        MoveLeft,
        MoveRight,
        ClickFocused,
    ]
);

// Global actions
actions!(position_picker, [Quit]);

/// The 7x3 position grid with its selection summary
pub struct PositionGrid {
    focus_handle: FocusHandle,
    component: PositionComponent,
    cursor: Position,
}

impl PositionGrid {
    pub fn new(component: PositionComponent, cx: &mut Context<Self>) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            component,
            cursor: Position::new(1, 1),
        }
    }

    fn move_up(&mut self, _: &MoveUp, _window: &mut Window, cx: &mut Context<Self>) {
        self.move_cursor(-1, 0, cx);
    }

    fn move_down(&mut self, _: &MoveDown, _window: &mut Window, cx: &mut Context<Self>) {
        self.move_cursor(1, 0, cx);
    }

    fn move_left(&mut self, _: &MoveLeft, _window: &mut Window, cx: &mut Context<Self>) {
        self.move_cursor(0, -1, cx);
    }

    fn move_right(&mut self, _: &MoveRight, _window: &mut Window, cx: &mut Context<Self>) {
        self.move_cursor(0, 1, cx);
    }

    fn move_cursor(&mut self, delta_row: isize, delta_col: isize, cx: &mut Context<Self>) {
        let row = (self.cursor.row as isize + delta_row).clamp(1, GRID_ROWS as isize) as usize;
        let col = (self.cursor.col as isize + delta_col).clamp(1, GRID_COLS as isize) as usize;
        self.cursor = Position::new(row, col);
        cx.notify();
    }

    fn click_focused(&mut self, _: &ClickFocused, _window: &mut Window, cx: &mut Context<Self>) {
        self.on_cell_click(self.cursor, cx);
    }

    fn on_cell_click(&mut self, position: Position, cx: &mut Context<Self>) {
        self.cursor = position;
        if let Err(e) = self.component.click(position) {
            show_notice(&e);
        }
        cx.notify();
    }

    fn render_row(&self, row: usize, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();

        div()
            .flex()
            .flex_row()
            .gap(px(GRID_GAP))
            .children(self.component.grid().row(row).into_iter().flatten().map(|cell| {
                let position = cell.position;
                let is_cursor = position == self.cursor;
                let (background, foreground) = if cell.restricted {
                    (theme.restricted, theme.restricted_text)
                } else if cell.selected {
                    (theme.accent, theme.base)
                } else {
                    (theme.surface0, theme.text)
                };

                div()
                    .id(ElementId::Name(format!("cell-{}-{}", position.row, position.col).into()))
                    .w(px(CELL_WIDTH))
                    .h(px(CELL_HEIGHT))
                    .flex_none()
                    .flex()
                    .items_center()
                    .justify_center()
                    .rounded(px(4.))
                    .border_1()
                    .border_color(if is_cursor { theme.accent } else { theme.surface1 })
                    .when(is_cursor, |d| d.border_2())
                    .bg(background)
                    .text_color(foreground)
                    .text_size(px(14.))
                    .when(cell.selected, |d| d.font_weight(FontWeight::BOLD))
                    .on_mouse_down(MouseButton::Left, {
                        let entity = cx.entity().clone();
                        move |_, _, app| {
                            entity.update(app, |this, cx| {
                                this.on_cell_click(position, cx);
                            });
                        }
                    })
                    .child(cell.label.clone())
            }))
    }

    fn render_summary(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();

        div()
            .flex()
            .items_center()
            .w_full()
            .h(px(SUMMARY_HEIGHT))
            .px(px(8.))
            .bg(theme.mantle)
            .rounded(px(4.))
            .text_size(px(13.))
            .text_color(theme.subtext0)
            .child(self.component.summary().to_string())
    }
}

/// Blocking warning dialog for a refused click.
fn show_notice(error: &SelectionError) {
    debug!("Showing notice: {error}");
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title(error.title())
        .set_description(error.to_string())
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

impl Render for PositionGrid {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (base, text) = {
            let theme = cx.global::<Theme>();
            (theme.base, theme.text)
        };
        let rows: Vec<AnyElement> = (1..=GRID_ROWS)
            .map(|row| self.render_row(row, cx).into_any_element())
            .collect();

        div()
            .flex()
            .flex_col()
            .size_full()
            .p(px(GRID_GAP))
            .gap(px(GRID_GAP))
            .bg(base)
            .text_color(text)
            .key_context("PositionGrid")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::move_up))
            .on_action(cx.listener(Self::move_down))
            .on_action(cx.listener(Self::move_left))
            .on_action(cx.listener(Self::move_right))
            .on_action(cx.listener(Self::click_focused))
            .children(rows)
            .child(self.render_summary(cx))
    }
}

impl Focusable for PositionGrid {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

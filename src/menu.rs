use gpui::*;

use crate::grid::Quit;

/// Set up the application menu bar
pub fn setup_menu(cx: &mut App) {
    cx.set_menus(vec![Menu {
        name: "Position Picker".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

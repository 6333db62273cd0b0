use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_detail_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Right | KeyCode::Char('l') => app.select_next_location(),
        KeyCode::Left | KeyCode::Char('h') => app.select_previous_location(),
        KeyCode::Esc | KeyCode::Backspace => app.select_overview(),
        _ => {}
    }
}

use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Enter => app.submit_search(),
        KeyCode::Backspace => {
            if let Some(search) = app.search.as_mut() {
                search.query.pop();
            }
        }
        KeyCode::Char(ch) => {
            if let Some(search) = app.search.as_mut() {
                search.query.push(ch);
            }
        }
        _ => {}
    }
}

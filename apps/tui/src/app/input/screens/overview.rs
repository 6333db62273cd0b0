use crate::app::input::helpers::Step;
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_overview_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l' | 'j') => app.focus_card(Step::Forward),
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'k') => app.focus_card(Step::Back),
        KeyCode::Home => app.card_index = 0,
        KeyCode::End => app.card_index = app.catalog.len().saturating_sub(1),
        KeyCode::Enter => app.open_focused_card(),
        _ => {}
    }
}

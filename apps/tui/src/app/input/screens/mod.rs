use crate::app::state::App;
use crossterm::event::KeyCode;
use trade_area_dashboard::ActiveView;

mod detail;
mod help;
mod overview;
mod search;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if app.search.is_some() {
        search::handle_search_input(app, key);
        return;
    }

    if help::handle_overlay_keys(app, key) {
        return;
    }

    if handle_global_input(app, key) {
        return;
    }

    match app.active_view() {
        ActiveView::Overview => overview::handle_overview_input(app, key),
        ActiveView::Detail => detail::handle_detail_input(app, key),
    }
}

fn handle_global_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Tab | KeyCode::BackTab => app.toggle_view(),
        KeyCode::Char('1') => app.select_overview(),
        KeyCode::Char('2') => app.select_detail_tab(),
        KeyCode::Char('/') => app.start_search(),
        _ => return false,
    }
    true
}

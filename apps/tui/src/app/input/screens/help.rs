use crate::app::state::App;
use crossterm::event::KeyCode;

/// Keys that work on top of any view. Returns true when the key was consumed.
pub fn handle_overlay_keys(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::F(1) | KeyCode::Char('?') => app.show_help = !app.show_help,
        KeyCode::Esc if app.show_help => app.show_help = false,
        KeyCode::Char(' ') => app.toggle_animation_pause(),
        // The help popup swallows everything else
        _ => return app.show_help,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use trade_area_dashboard::Catalog;

    fn app() -> App {
        App::new(Catalog::builtin().unwrap())
    }

    #[test]
    fn question_mark_and_f1_toggle_help() {
        let mut app = app();
        assert!(handle_overlay_keys(&mut app, KeyCode::Char('?')));
        assert!(app.show_help);
        assert!(handle_overlay_keys(&mut app, KeyCode::F(1)));
        assert!(!app.show_help);
    }

    #[test]
    fn esc_only_consumed_while_help_open() {
        let mut app = app();
        assert!(!handle_overlay_keys(&mut app, KeyCode::Esc));

        app.show_help = true;
        assert!(handle_overlay_keys(&mut app, KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn space_pauses_animation_even_with_help_open() {
        let mut app = app();
        app.show_help = true;
        assert!(handle_overlay_keys(&mut app, KeyCode::Char(' ')));
        assert!(app.animation_paused);
        assert!(app.show_help);
    }
}

// UI module for trade-area-dashboard
// Lays out the shared chrome and hands the content area to the active view

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::App;
use crate::ui::theme::{frame_block, key_style, ACCENT, FRAME, MUTED};
use crate::ui::widgets::popup::{centered_band, ClearWidget};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Paragraph, Tabs, Wrap};
use ratatui::Frame;
use tachyonfx::EffectRenderer;
use trade_area_dashboard::ActiveView;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let pill_height = match app.active_view() {
        ActiveView::Overview => 0,
        ActiveView::Detail => 3,
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Market title and view tabs
            Constraint::Length(pill_height), // Location pills
            Constraint::Min(10),             // Active view
            Constraint::Length(6),           // Capability framework
            Constraint::Length(1),           // Status
            Constraint::Length(1),           // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_nav(app, f, layout[0]);
    if pill_height > 0 {
        render_location_pills(app, f, layout[1]);
    }

    match app.active_view() {
        ActiveView::Overview => screens::overview::render_overview(app, f, layout[2]),
        ActiveView::Detail => screens::detail::render_detail(app, f, layout[2]),
    }
    render_view_effect(app, f, layout[2]);

    render_capability_framework(app, f, layout[3]);
    render_status(app, f, layout[4]);
    render_shortcuts(f, layout[5]);

    if app.search.is_some() {
        render_search_prompt(app, f);
    }

    if app.show_help {
        let area = f.area();
        screens::help::render_help_popup(f, area);
    }
}

fn render_nav(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(34)])
        .split(area);

    let title = Paragraph::new(TextLine::from(vec![Span::styled(
        app.catalog.market().to_string(),
        Style::default().fg(FRAME).add_modifier(Modifier::BOLD),
    )]))
    .block(frame_block(""));
    f.render_widget(title, chunks[0]);

    let tabs = Tabs::new(ActiveView::TITLES)
        .select(app.active_view().index())
        .block(frame_block(""))
        .style(Style::default().fg(MUTED))
        .highlight_style(
            Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    f.render_widget(tabs, chunks[1]);
}

fn render_location_pills(app: &App, f: &mut Frame<'_>, area: Rect) {
    let names: Vec<String> = app
        .catalog
        .locations()
        .iter()
        .map(|location| format!(" {} ", location.name))
        .collect();

    // Tab 2 without a selection still shows the first location
    let selected = app.view.selected_index().unwrap_or(0);

    let pills = Tabs::new(names)
        .select(selected)
        .block(frame_block(" Locations (← →) "))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(pills, area);
}

fn render_view_effect(app: &App, f: &mut Frame<'_>, area: Rect) {
    let mut slot = app.view_fx.borrow_mut();
    if let Some(effect) = slot.as_mut() {
        f.buffer_mut().render_effect(effect, area, app.last_tick);
        if effect.done() {
            *slot = None;
        }
    }
}

fn render_capability_framework(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = frame_block(" Capability Framework ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let definitions = app.catalog.definitions();
    if definitions.is_empty() {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Fill(1); definitions.len()])
        .split(inner);

    for (definition, column) in definitions.iter().zip(columns.iter()) {
        let color = theme::capability_color(&definition.style);
        let lines = vec![
            TextLine::from(vec![
                Span::styled(
                    format!("{} ", definition.category.label()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(definition.title.clone(), Style::default().fg(color)),
            ]),
            TextLine::from(Span::styled(
                definition.subtitle.clone(),
                Style::default().fg(Color::White),
            )),
            TextLine::from(Span::styled(
                definition.description.clone(),
                Style::default().fg(MUTED),
            )),
        ];

        f.render_widget(
            Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true }),
            column.inner(Margin::new(1, 0)),
        );
    }
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status = if app.status_message.is_empty() {
        Span::styled(
            if app.animation_paused {
                "Animation paused"
            } else {
                ""
            },
            Style::default().fg(MUTED),
        )
    } else {
        let style = if app.status_message.starts_with("Error") {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        Span::styled(app.status_message.clone(), style)
    };

    f.render_widget(Paragraph::new(status), area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let shortcuts = [
        ("Tab", "Switch view"),
        ("Enter", "Open"),
        ("← →", "Move"),
        ("/", "Search"),
        ("?", "Help"),
        ("q", "Quit"),
    ];

    let mut spans = Vec::new();
    for (key, action) in shortcuts {
        spans.push(Span::styled(key, key_style()));
        spans.push(Span::raw(format!(": {action}  ")));
    }

    f.render_widget(
        Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_search_prompt(app: &App, f: &mut Frame<'_>) {
    let Some(search) = app.search.as_ref() else {
        return;
    };

    let area = centered_band(50, 3, f.area());
    f.render_widget(ClearWidget, area);

    let prompt = Paragraph::new(TextLine::from(vec![
        Span::styled("/ ", key_style()),
        Span::raw(search.query.clone()),
        Span::styled(
            cursor_char(app.animation_counter, app.animation_paused),
            Style::default().fg(ACCENT),
        ),
    ]))
    .block(frame_block(" Search Locations (Enter to open, Esc to cancel) "));
    f.render_widget(prompt, area);
}

fn cursor_char(animation_counter: f64, paused: bool) -> &'static str {
    if paused || (animation_counter * 2.0).sin() >= 0.0 {
        "_"
    } else {
        " "
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use trade_area_dashboard::Catalog;

    pub fn sample_app() -> App {
        App::new(Catalog::builtin().unwrap())
    }

    /// Draws one frame and returns the screen as newline-separated rows
    pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui(app, f)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    #[test]
    fn overview_shows_every_location() {
        let app = sample_app();
        let screen = render_to_string(&app, 180, 60);

        assert!(screen.contains("Richmond Trade Area Analysis"));
        for name in [
            "Church Hill Surrounds",
            "The Current",
            "Willow Place",
            "The Village",
        ] {
            assert!(screen.contains(name), "missing {name}");
        }
        assert!(screen.contains("Discretionary Spending Power"));
        assert!(screen.contains("excluded from direct comparison"));
    }

    #[test]
    fn footer_lists_capability_framework() {
        let app = sample_app();
        let screen = render_to_string(&app, 180, 60);

        assert!(screen.contains("Capability Framework"));
        assert!(screen.contains("Category E"));
    }

    #[test]
    fn search_prompt_echoes_query() {
        let mut app = sample_app();
        crate::app::handle_input(&mut app, KeyCode::Char('/'));
        for c in "wil".chars() {
            crate::app::handle_input(&mut app, KeyCode::Char(c));
        }
        let screen = render_to_string(&app, 180, 60);

        assert!(screen.contains("Search Locations"));
        assert!(screen.contains("/ wil_"));
    }

    #[test]
    fn cursor_blinks_unless_paused() {
        assert_eq!(cursor_char(0.0, false), "_");
        assert_eq!(cursor_char(2.0, false), " ");
        assert_eq!(cursor_char(2.0, true), "_");
    }

    #[test]
    fn help_popup_covers_the_screen() {
        let mut app = sample_app();
        app.show_help = true;
        let screen = render_to_string(&app, 180, 60);

        assert!(screen.contains("Help & Keyboard Shortcuts"));
        assert!(screen.contains("Press ? or Esc to close"));
    }

    #[test]
    fn small_terminals_do_not_panic() {
        let mut app = sample_app();
        render_to_string(&app, 40, 12);
        app.select_location("the_village");
        render_to_string(&app, 40, 12);
    }
}

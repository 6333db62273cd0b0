use crate::cli::CliArgs;
use crate::ui::theme::{key_style, FRAME, KEY, MUTED};
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const SHORTCUTS: [(&str, &str); 10] = [
    ("Tab", "Switch between Overview and Location Details"),
    ("1 / 2", "Jump to Overview / Location Details"),
    ("← → ↑ ↓", "Move card focus on the overview"),
    ("Enter", "Open the focused location"),
    ("← →", "Previous / next location in the detail view"),
    ("Esc", "Back to the overview"),
    ("/", "Search locations by name"),
    ("Space", "Pause or resume animations"),
    ("? / F1", "Toggle this help popup"),
    ("q", "Quit"),
];

pub fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(80, 80, area);
    f.render_widget(ClearWidget, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(Style::default().fg(KEY).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(KEY));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: false });

    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(MUTED),
    ))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };

    f.render_widget(hint, hint_area);
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "Trade Area Dashboard",
            Style::default().fg(FRAME).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(
            "Compare candidate retail locations by income, age and spending, then drill into one.",
        ),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    for (key, action) in SHORTCUTS {
        lines.push(TextLine::from(vec![
            Span::styled(format!("  {key}"), key_style()),
            Span::raw(format!(" - {action}")),
        ]));
    }

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        "Command line:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for line in CliArgs::help_text().lines() {
        lines.push(TextLine::from(Span::styled(
            format!("  {line}"),
            Style::default().fg(MUTED),
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_shortcuts_and_flags() {
        let text: String = build_help_lines()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        assert!(text.contains("Search locations by name"));
        assert!(text.contains("--headless"));
    }
}

use ratatui::style::{Color, Modifier, Style};
use trade_area_dashboard::Tone;

pub const ACCENT: Color = Color::Rgb(59, 130, 246);
pub const ACCENT_SOFT: Color = Color::Rgb(147, 197, 253);
pub const FRAME: Color = Color::Cyan;
pub const MUTED: Color = Color::Gray;
pub const KEY: Color = Color::Yellow;

/// Young, prime and mature, by segment position
pub const AGE_COLORS: [Color; 3] = [
    Color::Rgb(129, 140, 248),
    Color::Rgb(99, 102, 241),
    Color::Rgb(55, 48, 163),
];

/// Dining out, entertainment and apparel
pub const SPENDING_COLORS: [Color; 3] = [
    Color::Rgb(244, 114, 182),
    Color::Rgb(167, 139, 250),
    Color::Rgb(52, 211, 153),
];

pub const INCOME_COLORS: [Color; 2] = [ACCENT, ACCENT_SOFT];

pub const fn age_color(slot: usize) -> Color {
    AGE_COLORS[slot % AGE_COLORS.len()]
}

pub const fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Favorable => Color::Green,
        Tone::Caution => Color::Yellow,
        Tone::Alert => Color::Red,
    }
}

/// Maps a capability definition's style token onto a badge colour
pub fn capability_color(style: &str) -> Color {
    match style {
        "blue" => Color::Rgb(96, 165, 250),
        "green" => Color::Rgb(74, 222, 128),
        "purple" => Color::Rgb(192, 132, 252),
        "indigo" => Color::Rgb(129, 140, 248),
        _ => Color::Gray,
    }
}

pub fn key_style() -> Style {
    Style::default().fg(KEY).add_modifier(Modifier::BOLD)
}

pub fn heading_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn frame_block(title: impl Into<String>) -> ratatui::widgets::Block<'static> {
    ratatui::widgets::Block::default()
        .title(title.into())
        .borders(ratatui::widgets::Borders::ALL)
        .border_style(Style::default().fg(FRAME))
}

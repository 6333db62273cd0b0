use crate::app::App;
use crate::ui::theme::{
    capability_color, frame_block, heading_style, ACCENT_SOFT, MUTED, SPENDING_COLORS,
};
use crate::ui::widgets::cards::{render_metric_card, render_ring_table};
use crate::ui::widgets::charts::{render_age_donut, render_income_distribution};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use trade_area_dashboard::catalog::Spending;
use trade_area_dashboard::format::currency;
use trade_area_dashboard::projection::{detail, Detail, SPENDING_SERIES};

pub fn render_detail(app: &App, f: &mut Frame<'_>, area: Rect) {
    let location = app.view.current_detail_location();
    let detail = detail(location, app.catalog.definitions());

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(10)])
        .split(area);

    render_header(&detail, f, layout[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(layout[1]);

    render_main_column(&detail, f, body[0]);
    render_sidebar(&detail, f, body[1]);
}

fn render_header(detail: &Detail, f: &mut Frame<'_>, area: Rect) {
    let badge_color = capability_color(&detail.badge.style);

    let mut title = vec![
        Span::styled(
            detail.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", detail.badge.label),
            Style::default()
                .fg(Color::Black)
                .bg(badge_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", detail.badge.subtitle),
            Style::default().fg(badge_color),
        ),
    ];
    if let Some(subtitle) = &detail.subtitle {
        title.push(Span::styled(
            format!("   {subtitle}"),
            Style::default().fg(MUTED),
        ));
    }

    let mut chips = vec![Span::styled("Supports: ", Style::default().fg(MUTED))];
    for support in &detail.supports {
        chips.push(Span::styled(
            format!(" {support} "),
            Style::default().fg(Color::Black).bg(ACCENT_SOFT),
        ));
        chips.push(Span::raw(" "));
    }

    let lines = vec![
        TextLine::from(title),
        TextLine::from(""),
        TextLine::from(detail.details.clone()),
        TextLine::from(chips),
    ];

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(frame_block(" Location Profile "))
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_main_column(detail: &Detail, f: &mut Frame<'_>, area: Rect) {
    let mut constraints = vec![Constraint::Length(4), Constraint::Min(10)];
    if detail.spending_spotlight.is_some() {
        constraints.push(Constraint::Length(5));
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let metric_columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Fill(1); detail.metrics.len().max(1)])
        .split(rows[0]);
    for (card, column) in detail.metrics.iter().zip(metric_columns.iter()) {
        render_metric_card(card, f, *column);
    }

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);
    render_income_distribution(&detail.income_distribution, f, charts[0]);
    render_age_donut(&detail.age_segments, f, charts[1]);

    if let Some(spending) = &detail.spending_spotlight {
        render_spending_spotlight(spending, f, rows[2]);
    }
}

fn render_spending_spotlight(spending: &Spending, f: &mut Frame<'_>, area: Rect) {
    let values = [spending.dining, spending.entertainment, spending.apparel];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1); 3])
        .split(frame_block("").inner(area));

    f.render_widget(frame_block("Consumer Spending Spotlight (Avg Annual)"), area);

    for (index, column) in columns.iter().enumerate() {
        let lines = vec![
            TextLine::from(Span::styled(
                SPENDING_SERIES[index],
                Style::default().fg(SPENDING_COLORS[index]),
            )),
            TextLine::from(Span::styled(currency(values[index]), heading_style())),
        ];
        f.render_widget(
            Paragraph::new(Text::from(lines)).alignment(Alignment::Center),
            *column,
        );
    }
}

/// Borders plus header row around one line per ring
fn ring_table_height(rings: usize) -> u16 {
    u16::try_from(rings).unwrap_or(u16::MAX).saturating_add(3)
}

fn render_sidebar(detail: &Detail, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ring_table_height(detail.rings.len())),
            Constraint::Min(5),
        ])
        .split(area);

    render_ring_table(&detail.rings, f, rows[0]);

    let take = Paragraph::new(Text::from(vec![TextLine::from(Span::styled(
        detail.analyst_take.clone(),
        Style::default().fg(Color::White),
    ))]))
    .block(frame_block("Analyst Take"))
    .wrap(Wrap { trim: true });
    f.render_widget(take, rows[1]);
}

use crate::ui::theme::{frame_block, heading_style, tone_color, ACCENT, MUTED};
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;
use trade_area_dashboard::format::{currency, thousands};
use trade_area_dashboard::projection::{MetricCard, OverviewCard, RingRow};

pub fn render_location_card(card: &OverviewCard, focused: bool, f: &mut Frame<'_>, area: Rect) {
    let mut block = frame_block(format!(" {} ", card.name));
    if focused {
        block = block
            .border_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .title_style(heading_style());
    }

    let lines = vec![
        TextLine::from(vec![
            Span::styled("Category ", Style::default().fg(MUTED)),
            Span::styled(card.capability.clone(), heading_style()),
        ]),
        TextLine::from(vec![
            Span::styled("Risk ", Style::default().fg(MUTED)),
            Span::styled(
                card.risk.label(),
                Style::default()
                    .fg(tone_color(card.risk_tone))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        TextLine::from(vec![
            Span::styled("Med. Income ", Style::default().fg(MUTED)),
            Span::raw(card.median_income.clone()),
        ]),
        TextLine::from(vec![
            Span::styled("Median Age ", Style::default().fg(MUTED)),
            Span::raw(card.median_age.clone()),
        ]),
    ];

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

pub fn render_metric_card(card: &MetricCard, f: &mut Frame<'_>, area: Rect) {
    let value_style = card.tone.map_or_else(heading_style, |tone| {
        Style::default()
            .fg(tone_color(tone))
            .add_modifier(Modifier::BOLD)
    });

    let mut lines = vec![TextLine::from(Span::styled(card.value.clone(), value_style))];
    if let Some(subtext) = card.subtext {
        lines.push(TextLine::from(Span::styled(
            subtext,
            Style::default().fg(MUTED),
        )));
    }

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(frame_block(card.title))
            .alignment(Alignment::Center),
        area,
    );
}

/// Radius rings, nearest first, with the highlighted ring drawn selected
pub fn render_ring_table(rings: &[RingRow], f: &mut Frame<'_>, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Radius"),
        Cell::from("Population"),
        Cell::from("Med. Income"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows = rings.iter().map(|ring| {
        let style = if ring.highlighted {
            Style::default()
                .bg(Color::Rgb(0, 0, 238))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        Row::new(vec![
            Cell::from(ring.distance.clone()),
            Cell::from(thousands(ring.population)),
            Cell::from(currency(ring.median_income)),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Min(11),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(frame_block("Radius Breakdown"))
        .column_spacing(1);

    f.render_widget(table, area);
}

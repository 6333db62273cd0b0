use crate::ui::theme::{age_color, frame_block, INCOME_COLORS, MUTED, SPENDING_COLORS};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph};
use ratatui::Frame;
use trade_area_dashboard::catalog::Share;
use trade_area_dashboard::format::{currency, currency_k, percent};
use trade_area_dashboard::projection::{
    AgePoint, IncomePoint, Segment, SpendingPoint, AGE_SERIES, SPENDING_SERIES,
};

/// Percentages are charted in tenths so one decimal place survives `u64` bars
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn tenths(value: f64) -> u64 {
    (value.max(0.0) * 10.0).round() as u64
}

fn render_empty(f: &mut Frame<'_>, area: Rect, title: &str, message: &str) {
    let paragraph = Paragraph::new(message.to_string())
        .block(frame_block(title))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn value_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn render_income_comparison(points: &[IncomePoint], f: &mut Frame<'_>, area: Rect) {
    let title = "Income Comparison (3 Mile Radius)";
    if points.is_empty() {
        render_empty(f, area, title, "No locations available");
        return;
    }

    let groups: Vec<Vec<Bar<'static>>> = points
        .iter()
        .map(|point| {
            [
                ("Median", point.median_income),
                ("Avg", point.average_income),
            ]
            .iter()
            .enumerate()
            .map(|(index, (label, value))| {
                Bar::default()
                    .value(*value)
                    .label(TextLine::from(*label))
                    .text_value(currency_k(*value))
                    .style(Style::default().fg(INCOME_COLORS[index]))
                    .value_style(value_style())
            })
            .collect()
        })
        .collect();

    let max_value = points
        .iter()
        .map(|point| point.median_income.max(point.average_income))
        .max()
        .unwrap_or(0)
        .max(1);

    let mut chart = BarChart::default()
        .block(frame_block(title))
        .direction(Direction::Horizontal)
        .max(max_value)
        .bar_width(1)
        .bar_gap(0)
        .group_gap(1);

    for (point, bars) in points.iter().zip(&groups) {
        chart = chart.data(
            BarGroup::default()
                .label(TextLine::from(point.name.clone()))
                .bars(bars),
        );
    }

    f.render_widget(chart, area);
}

pub fn render_age_comparison(points: &[AgePoint], f: &mut Frame<'_>, area: Rect) {
    let title = "Age Distribution Profile";
    if points.is_empty() {
        render_empty(f, area, title, "No locations available");
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let groups: Vec<Vec<Bar<'static>>> = points
        .iter()
        .map(|point| {
            point
                .values()
                .iter()
                .enumerate()
                .map(|(slot, value)| {
                    Bar::default()
                        .value(tenths(*value))
                        .text_value(percent(*value))
                        .style(Style::default().fg(age_color(slot)))
                        .value_style(value_style())
                })
                .collect()
        })
        .collect();

    let mut chart = BarChart::default()
        .block(frame_block(title))
        .max(tenths(100.0).min(
            points
                .iter()
                .flat_map(|point| point.values())
                .map(tenths)
                .max()
                .unwrap_or(1)
                .max(1),
        ))
        .bar_width(5)
        .bar_gap(1)
        .group_gap(3);

    for (point, bars) in points.iter().zip(&groups) {
        chart = chart.data(
            BarGroup::default()
                .label(TextLine::from(point.name.clone()))
                .bars(bars),
        );
    }

    f.render_widget(chart, chunks[0]);
    f.render_widget(
        Paragraph::new(legend_line(&AGE_SERIES, &[age_color(0), age_color(1), age_color(2)]))
            .alignment(Alignment::Center),
        chunks[1],
    );
}

pub fn render_spending_comparison(
    points: &[SpendingPoint],
    excluded: &[String],
    f: &mut Frame<'_>,
    area: Rect,
) {
    let title = "Discretionary Spending Power (Avg Household / Year)";
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    if points.is_empty() {
        render_empty(f, chunks[0], title, "No comparable spending data");
    } else {
        let groups: Vec<Vec<Bar<'static>>> = points
            .iter()
            .map(|point| {
                point
                    .values()
                    .iter()
                    .enumerate()
                    .map(|(index, value)| {
                        Bar::default()
                            .value(*value)
                            .text_value(currency(*value))
                            .style(Style::default().fg(SPENDING_COLORS[index]))
                            .value_style(value_style())
                    })
                    .collect()
            })
            .collect();

        let max_value = points
            .iter()
            .flat_map(SpendingPoint::values)
            .max()
            .unwrap_or(0)
            .max(1);

        let mut chart = BarChart::default()
            .block(frame_block(title))
            .max(max_value)
            .bar_width(7)
            .bar_gap(1)
            .group_gap(4);

        for (point, bars) in points.iter().zip(&groups) {
            chart = chart.data(
                BarGroup::default()
                    .label(TextLine::from(point.name.clone()))
                    .bars(bars),
            );
        }

        f.render_widget(chart, chunks[0]);
    }

    f.render_widget(
        Paragraph::new(legend_line(&SPENDING_SERIES, &SPENDING_COLORS)).alignment(Alignment::Center),
        chunks[1],
    );

    if !excluded.is_empty() {
        let note = format!(
            "*{} excluded from direct comparison due to differing data source methodology.",
            excluded.join(", ")
        );
        f.render_widget(
            Paragraph::new(Span::styled(note, Style::default().fg(MUTED))),
            chunks[2],
        );
    }
}

pub fn render_income_distribution(shares: &[Share], f: &mut Frame<'_>, area: Rect) {
    let title = "Household Income";
    if shares.is_empty() {
        render_empty(f, area, title, "No income data");
        return;
    }

    let bars: Vec<Bar<'static>> = shares
        .iter()
        .map(|share| {
            Bar::default()
                .value(tenths(share.percentage))
                .label(TextLine::from(share.label.clone()))
                .text_value(percent(share.percentage))
                .style(Style::default().fg(INCOME_COLORS[0]))
                .value_style(value_style())
        })
        .collect();

    let max_value = shares
        .iter()
        .map(|share| tenths(share.percentage))
        .max()
        .unwrap_or(0)
        .max(1);

    let chart = BarChart::default()
        .block(frame_block(title))
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_width(10)
        .bar_gap(2);

    f.render_widget(chart, area);
}

/// Ring chart of the three age segments, with a legend on the right
pub fn render_age_donut(segments: &[Segment], f: &mut Frame<'_>, area: Rect) {
    let block = frame_block("Age Segments");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let slices = donut_points(segments);
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.1, 1.1])
        .y_bounds([-1.1, 1.1])
        .paint(|ctx| {
            for (slot, coords) in &slices {
                ctx.draw(&Points {
                    coords,
                    color: age_color(*slot),
                });
            }
        });
    f.render_widget(canvas, chunks[0]);

    let legend: Vec<TextLine<'static>> = segments
        .iter()
        .map(|segment| {
            TextLine::from(vec![
                Span::styled("■ ", Style::default().fg(age_color(segment.slot))),
                Span::raw(segment.label.clone()),
                Span::styled(
                    format!("  {}", percent(segment.percentage)),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(legend), chunks[1]);
}

/// Points filling each segment's arc, sized by its share of the segment total
fn donut_points(segments: &[Segment]) -> Vec<(usize, Vec<(f64, f64)>)> {
    const INNER: f64 = 0.55;
    const OUTER: f64 = 1.0;
    const RADIAL_STEP: f64 = 0.04;
    const ANGLE_STEP: f64 = 0.015;
    // Gap between slices, in radians
    const PADDING: f64 = 0.08;

    let total: f64 = segments.iter().map(|segment| segment.percentage).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = std::f64::consts::FRAC_PI_2;
    let mut slices = Vec::with_capacity(segments.len());

    for segment in segments {
        let sweep = segment.percentage / total * std::f64::consts::TAU;
        let end = start - sweep;
        let mut coords = Vec::new();

        let mut angle = start - PADDING / 2.0;
        while angle > end + PADDING / 2.0 {
            let mut radius = INNER;
            while radius <= OUTER {
                coords.push((radius * angle.cos(), radius * angle.sin()));
                radius += RADIAL_STEP;
            }
            angle -= ANGLE_STEP;
        }

        slices.push((segment.slot, coords));
        start = end;
    }

    slices
}

fn legend_line(labels: &[&str], colors: &[Color]) -> TextLine<'static> {
    let mut spans = Vec::new();
    for (label, color) in labels.iter().zip(colors) {
        spans.push(Span::styled("■ ", Style::default().fg(*color)));
        spans.push(Span::styled(format!("{label}   "), Style::default().fg(MUTED)));
    }
    TextLine::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(slot: usize, percentage: f64) -> Segment {
        Segment {
            label: format!("slot {slot}"),
            percentage,
            slot,
        }
    }

    #[test]
    fn tenths_keep_one_decimal() {
        assert_eq!(tenths(45.5), 455);
        assert_eq!(tenths(20.94), 209);
        assert_eq!(tenths(-3.0), 0);
    }

    #[test]
    fn donut_slices_scale_with_share() {
        let slices = donut_points(&[segment(0, 50.0), segment(1, 25.0), segment(2, 25.0)]);
        assert_eq!(slices.len(), 3);

        let sizes: Vec<usize> = slices.iter().map(|(_, coords)| coords.len()).collect();
        assert!(sizes[0] > sizes[1]);
        assert!(sizes.iter().all(|size| *size > 0));
    }

    #[test]
    fn donut_points_stay_inside_the_ring() {
        let slices = donut_points(&[segment(0, 30.0), segment(1, 25.0), segment(2, 23.0)]);
        for (_, coords) in slices {
            for (x, y) in coords {
                let radius = x.hypot(y);
                assert!((0.5..=1.01).contains(&radius));
            }
        }
    }

    #[test]
    fn empty_segments_draw_nothing() {
        assert!(donut_points(&[]).is_empty());
        assert!(donut_points(&[segment(0, 0.0)]).is_empty());
    }
}

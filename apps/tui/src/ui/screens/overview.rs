use crate::app::App;
use crate::ui::widgets::cards::render_location_card;
use crate::ui::widgets::charts::{
    render_age_comparison, render_income_comparison, render_spending_comparison,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;
use trade_area_dashboard::projection::{comparison, overview_cards};

pub fn render_overview(app: &App, f: &mut Frame<'_>, area: Rect) {
    let locations = app.catalog.locations();
    let cards = overview_cards(locations);
    let series = comparison(locations);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),      // Location cards
            Constraint::Percentage(55), // Income and age
            Constraint::Min(8),         // Spending
        ])
        .split(area);

    if !cards.is_empty() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Fill(1); cards.len()])
            .split(layout[0]);

        for (index, (card, column)) in cards.iter().zip(columns.iter()).enumerate() {
            render_location_card(card, index == app.card_index, f, *column);
        }
    }

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);

    render_income_comparison(&series.income, f, charts[0]);
    render_age_comparison(&series.age, f, charts[1]);
    render_spending_comparison(
        &series.spending,
        &series.excluded_from_spending,
        f,
        layout[2],
    );
}

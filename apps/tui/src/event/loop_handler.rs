use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use serde::Serialize;
use std::fmt::Write as _;
use trade_area_dashboard::catalog::CapabilityDefinition;
use trade_area_dashboard::format::{currency, percent, thousands};
use trade_area_dashboard::projection::{
    comparison, detail, overview_cards, Comparison, Detail, OverviewCard,
};

use crate::app::{handle_input, App};
use crate::terminal::Tui;
use crate::ui;

/// What the headless report should contain
#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    pub json: bool,
    pub location: Option<String>,
}

/// Run the application in headless mode (no UI)
pub fn run_headless(app: &mut App, options: &HeadlessOptions) -> Result<()> {
    if let Some(id) = options.location.as_deref() {
        app.view.select_location(id)?;
    }

    let report = build_headless_report(app);

    if options.json {
        let json = serde_json::to_string_pretty(&report)?;
        println!("{json}");
    } else {
        print!("{}", render_headless_text(&report));
    }

    Ok(())
}

fn build_headless_report(app: &App) -> HeadlessReport {
    let catalog = app.view.catalog();

    let detail = app
        .view
        .selected_location_id()
        .map(|_| detail(app.view.current_detail_location(), catalog.definitions()));

    HeadlessReport {
        market: catalog.market().to_string(),
        locations: overview_cards(catalog.locations()),
        comparison: comparison(catalog.locations()),
        detail,
        capabilities: catalog.definitions().to_vec(),
    }
}

fn render_headless_text(report: &HeadlessReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", report.market);
    let _ = writeln!(out, "{}", "=".repeat(report.market.chars().count()));

    let _ = writeln!(out, "\nLocations:");
    for card in &report.locations {
        let _ = writeln!(
            out,
            "- {} | Category {} | {} Risk | Med. Income {} | Median Age {}",
            card.name,
            card.capability,
            card.risk.label(),
            card.median_income,
            card.median_age
        );
    }

    let _ = writeln!(out, "\nIncome Comparison (3 Mile Radius):");
    for point in &report.comparison.income {
        let _ = writeln!(
            out,
            "- {}: median {} | avg {}",
            point.name,
            currency(point.median_income),
            currency(point.average_income)
        );
    }

    let _ = writeln!(out, "\nAge Distribution Profile:");
    for point in &report.comparison.age {
        let _ = writeln!(
            out,
            "- {}: young {} | prime {} | mature {}",
            point.name,
            percent(point.young),
            percent(point.prime),
            percent(point.mature)
        );
    }

    let _ = writeln!(out, "\nDiscretionary Spending Power (Avg Household / Year):");
    if report.comparison.spending.is_empty() {
        let _ = writeln!(out, "- (no comparable spending data)");
    }
    for point in &report.comparison.spending {
        let _ = writeln!(
            out,
            "- {}: dining {} | entertainment {} | apparel {}",
            point.name,
            currency(point.dining),
            currency(point.entertainment),
            currency(point.apparel)
        );
    }
    for name in &report.comparison.excluded_from_spending {
        let _ = writeln!(out, "  *{name} excluded: differing data source methodology");
    }

    if let Some(detail) = &report.detail {
        render_detail_text(&mut out, detail);
    }

    out
}

fn render_detail_text(out: &mut String, detail: &Detail) {
    let _ = writeln!(out, "\n{} ({})", detail.name, detail.badge.label);
    if let Some(subtitle) = &detail.subtitle {
        let _ = writeln!(out, "{subtitle}");
    }
    let _ = writeln!(out, "{}", detail.details);

    let _ = writeln!(out, "\nKey Metrics:");
    for card in &detail.metrics {
        let _ = writeln!(out, "- {}: {}", card.title, card.value);
    }

    let _ = writeln!(out, "\nHousehold Income:");
    for share in &detail.income_distribution {
        let _ = writeln!(out, "- {}: {}", share.label, percent(share.percentage));
    }

    let _ = writeln!(out, "\nAge Segments:");
    for segment in &detail.age_segments {
        let _ = writeln!(out, "- {}: {}", segment.label, percent(segment.percentage));
    }

    let _ = writeln!(out, "\nRadius Breakdown:");
    for ring in &detail.rings {
        let _ = writeln!(
            out,
            "- {}: population {} | med. income {}",
            ring.distance,
            thousands(ring.population),
            currency(ring.median_income)
        );
    }

    if let Some(spending) = &detail.spending_spotlight {
        let _ = writeln!(out, "\nConsumer Spending Spotlight (Avg Annual):");
        let _ = writeln!(
            out,
            "- Dining Out {} | Entertainment {} | Apparel {}",
            currency(spending.dining),
            currency(spending.entertainment),
            currency(spending.apparel)
        );
    }

    let _ = writeln!(out, "\nAnalyst Take: {}", detail.analyst_take);
    let _ = writeln!(out, "Supports: {}", detail.supports.join(", "));
}

#[derive(Serialize)]
struct HeadlessReport {
    market: String,
    locations: Vec<OverviewCard>,
    comparison: Comparison,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<Detail>,
    capabilities: Vec<CapabilityDefinition>,
}

/// Run the main application event loop
pub fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        // Update animations
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(_) | Err(_) => {
                    // Ignore key releases, mouse and focus events
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trade_area_dashboard::Catalog;

    fn app() -> App {
        App::new(Catalog::builtin().unwrap())
    }

    #[test]
    fn text_report_lists_locations_and_exclusions() {
        let app = app();
        let text = render_headless_text(&build_headless_report(&app));

        assert!(text.contains("Richmond Trade Area Analysis"));
        assert!(text.contains("- Willow Place | Category D | Low Risk | Med. Income $93k"));
        assert!(text.contains("The Village: dining $5,116"));
        assert!(!text.contains("Church Hill Surrounds: dining"));
        assert!(text.contains("*Church Hill Surrounds excluded"));
        assert!(!text.contains("Key Metrics"));
    }

    #[test]
    fn text_report_includes_selected_location() {
        let mut app = app();
        app.view.select_location("church_hill").unwrap();
        let text = render_headless_text(&build_headless_report(&app));

        assert!(text.contains("Church Hill Surrounds (Category A → B)"));
        assert!(text.contains("- Avg HH Income: $64k"));
        assert!(text.contains("- 5 miles: population 229,041 | med. income $51,441"));
        assert!(!text.contains("Consumer Spending Spotlight"));
    }

    #[test]
    fn json_report_omits_detail_without_selection() {
        let app = app();
        let json = serde_json::to_value(build_headless_report(&app)).unwrap();

        assert!(json.get("detail").is_none());
        assert_eq!(json["comparison"]["spending"].as_array().unwrap().len(), 3);
        assert_eq!(json["locations"][3]["risk"], "Very Low");
        assert_eq!(json["capabilities"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn headless_rejects_unknown_location() {
        let mut app = app();
        let options = HeadlessOptions {
            json: true,
            location: Some("atlantis".to_string()),
        };
        assert!(run_headless(&mut app, &options).is_err());
    }
}

use crate::catalog::{Catalog, LocationRecord};
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Overview,
    Detail,
}

impl ActiveView {
    pub const TITLES: [&'static str; 2] = ["Overview", "Location Details"];

    pub const fn index(self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Detail => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        Self::TITLES[self.index()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("unknown location: {0}")]
    InvalidLocation(String),
}

/// Decides which view is on screen and which location the detail view shows
#[derive(Debug, Clone)]
pub struct ViewController {
    catalog: Rc<Catalog>,
    active_view: ActiveView,
    selected_location_id: Option<String>,
}

impl ViewController {
    pub const fn new(catalog: Rc<Catalog>) -> Self {
        Self {
            catalog,
            active_view: ActiveView::Overview,
            selected_location_id: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub const fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn selected_location_id(&self) -> Option<&str> {
        self.selected_location_id.as_deref()
    }

    pub fn select_overview(&mut self) {
        self.active_view = ActiveView::Overview;
        self.selected_location_id = None;
        tracing::debug!("view: overview");
    }

    pub fn select_detail_tab(&mut self) {
        self.active_view = ActiveView::Detail;
        if self.selected_location_id.is_none() {
            self.selected_location_id = Some(self.catalog.first().id.clone());
        }
        tracing::debug!(location = ?self.selected_location_id, "view: detail");
    }

    /// Selects `id` and switches to the detail view. An unknown id leaves
    /// the state exactly as it was.
    pub fn select_location(&mut self, id: &str) -> Result<(), ViewError> {
        if !self.catalog.contains(id) {
            tracing::warn!(location = id, "ignoring selection of unknown location");
            return Err(ViewError::InvalidLocation(id.to_string()));
        }

        self.selected_location_id = Some(id.to_string());
        self.active_view = ActiveView::Detail;
        tracing::debug!(location = id, "view: detail");
        Ok(())
    }

    pub fn toggle_view(&mut self) {
        match self.active_view {
            ActiveView::Overview => self.select_detail_tab(),
            ActiveView::Detail => self.select_overview(),
        }
    }

    pub fn select_next_location(&mut self) {
        self.step_location(true);
    }

    pub fn select_previous_location(&mut self) {
        self.step_location(false);
    }

    fn step_location(&mut self, forward: bool) {
        let len = self.catalog.len();
        let next = match self.selected_index() {
            Some(index) if forward => (index + 1) % len,
            Some(index) => (index + len - 1) % len,
            None => 0,
        };
        let Some(location) = self.catalog.locations().get(next) else {
            return;
        };
        self.selected_location_id = Some(location.id.clone());
        self.active_view = ActiveView::Detail;
        tracing::debug!(location = %location.id, "view: detail");
    }

    /// Position of the current selection in catalog order
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_location_id
            .as_deref()
            .and_then(|id| self.catalog.position(id))
    }

    /// The selected record, or the first record when nothing is selected yet.
    pub fn current_detail_location(&self) -> &LocationRecord {
        self.selected_location_id
            .as_deref()
            .and_then(|id| self.catalog.get(id))
            .unwrap_or_else(|| self.catalog.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ViewController {
        ViewController::new(Rc::new(Catalog::builtin().unwrap()))
    }

    #[test]
    fn starts_on_overview_without_selection() {
        let view = controller();
        assert_eq!(view.active_view(), ActiveView::Overview);
        assert_eq!(view.selected_location_id(), None);
        assert_eq!(view.current_detail_location().id, "church_hill");
    }

    #[test]
    fn detail_tab_defaults_to_first_location() {
        let mut view = controller();
        view.select_detail_tab();
        assert_eq!(view.active_view(), ActiveView::Detail);
        assert_eq!(view.selected_location_id(), Some("church_hill"));
    }

    #[test]
    fn detail_tab_keeps_existing_selection() {
        let mut view = controller();
        view.select_location("the_village").unwrap();
        view.select_detail_tab();
        view.select_detail_tab();
        assert_eq!(view.selected_location_id(), Some("the_village"));
    }

    #[test]
    fn selecting_location_switches_to_detail() {
        let mut view = controller();
        view.select_location("willow_place").unwrap();
        assert_eq!(view.active_view(), ActiveView::Detail);
        assert_eq!(view.current_detail_location().capability.to_string(), "D");
    }

    #[test]
    fn unknown_location_is_ignored() {
        let mut view = controller();
        view.select_location("the_current").unwrap();

        let result = view.select_location("atlantis");
        assert_eq!(
            result,
            Err(ViewError::InvalidLocation("atlantis".to_string()))
        );
        assert_eq!(view.selected_location_id(), Some("the_current"));
        assert_eq!(view.active_view(), ActiveView::Detail);
    }

    #[test]
    fn unknown_location_from_overview_stays_on_overview() {
        let mut view = controller();
        assert!(view.select_location("atlantis").is_err());
        assert_eq!(view.active_view(), ActiveView::Overview);
        assert_eq!(view.selected_location_id(), None);
    }

    #[test]
    fn overview_clears_selection() {
        let mut view = controller();
        view.select_location("the_village").unwrap();
        view.select_overview();
        assert_eq!(view.active_view(), ActiveView::Overview);
        assert_eq!(view.selected_location_id(), None);

        view.select_overview();
        assert_eq!(view.selected_location_id(), None);
    }

    #[test]
    fn cycling_wraps_in_catalog_order() {
        let mut view = controller();
        view.select_previous_location();
        assert_eq!(view.selected_location_id(), Some("church_hill"));

        view.select_previous_location();
        assert_eq!(view.selected_location_id(), Some("the_village"));

        view.select_next_location();
        assert_eq!(view.selected_location_id(), Some("church_hill"));

        view.select_next_location();
        assert_eq!(view.selected_location_id(), Some("the_current"));
    }

    #[test]
    fn toggle_alternates_views() {
        let mut view = controller();
        view.toggle_view();
        assert_eq!(view.active_view(), ActiveView::Detail);
        assert_eq!(view.selected_location_id(), Some("church_hill"));

        view.toggle_view();
        assert_eq!(view.active_view(), ActiveView::Overview);
        assert_eq!(view.selected_location_id(), None);
    }

    #[test]
    fn stepping_from_overview_opens_first_location() {
        let mut view = controller();
        view.select_next_location();
        assert_eq!(view.active_view(), ActiveView::Detail);
        assert_eq!(view.selected_location_id(), Some("church_hill"));

        view.select_overview();
        view.select_previous_location();
        assert_eq!(view.active_view(), ActiveView::Detail);
        assert_eq!(view.selected_location_id(), Some("church_hill"));
    }

    #[test]
    fn tab_titles_follow_view_order() {
        assert_eq!(ActiveView::Overview.label(), "Overview");
        assert_eq!(ActiveView::Detail.label(), "Location Details");
    }
}

use crate::app::input::helpers::{step_index, Step};
use ratatui::style::Color;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tachyonfx::{fx, Effect, Interpolation};
use trade_area_dashboard::catalog::search::best_match;
use trade_area_dashboard::{ActiveView, Catalog, ViewController};

const VIEW_FADE_MS: u32 = 450;

/// Text typed into the `/` location search prompt
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
}

pub struct App {
    pub running: bool,
    pub catalog: Rc<Catalog>,
    pub view: ViewController,
    /// Card highlighted on the overview; cosmetic, never part of the view state
    pub card_index: usize,
    pub search: Option<SearchState>,
    pub status_message: String,
    pub show_help: bool,
    pub animation_counter: f64,
    pub animation_paused: bool,
    pub last_frame: Instant,
    pub last_tick: Duration,
    pub view_fx: RefCell<Option<Effect>>,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        let catalog = Rc::new(catalog);
        Self {
            running: true,
            view: ViewController::new(Rc::clone(&catalog)),
            catalog,
            card_index: 0,
            search: None,
            status_message: String::new(),
            show_help: false,
            animation_counter: 0.0,
            animation_paused: false,
            last_frame: Instant::now(),
            last_tick: Duration::ZERO,
            view_fx: RefCell::new(None),
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.animation_paused {
            self.last_tick = Duration::ZERO;
            return;
        }
        self.last_tick = delta;

        // Update animation counter (cycles between 0 and 2*PI)
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }
    }

    pub fn toggle_animation_pause(&mut self) {
        self.animation_paused = !self.animation_paused;
        self.status_message = if self.animation_paused {
            "Animations paused".to_string()
        } else {
            "Animations resumed".to_string()
        };
    }

    pub const fn active_view(&self) -> ActiveView {
        self.view.active_view()
    }

    pub fn select_overview(&mut self) {
        let before = self.active_view();
        self.view.select_overview();
        self.status_message.clear();
        self.after_transition(before);
    }

    pub fn select_detail_tab(&mut self) {
        let before = self.active_view();
        self.view.select_detail_tab();
        self.status_message.clear();
        self.after_transition(before);
    }

    pub fn toggle_view(&mut self) {
        let before = self.active_view();
        self.view.toggle_view();
        self.status_message.clear();
        self.after_transition(before);
    }

    /// Unknown ids keep the current screen and only report the problem
    pub fn select_location(&mut self, id: &str) {
        let before = self.active_view();
        match self.view.select_location(id) {
            Ok(()) => {
                self.status_message.clear();
                if let Some(index) = self.catalog.position(id) {
                    self.card_index = index;
                }
                self.after_transition(before);
            }
            Err(e) => {
                self.status_message = format!("Error: {e}");
            }
        }
    }

    pub fn select_next_location(&mut self) {
        self.view.select_next_location();
        self.sync_card_index();
    }

    pub fn select_previous_location(&mut self) {
        self.view.select_previous_location();
        self.sync_card_index();
    }

    pub fn focus_card(&mut self, step: Step) {
        self.card_index = step_index(self.card_index, self.catalog.len(), step);
    }

    pub fn open_focused_card(&mut self) {
        if let Some(location) = self.catalog.locations().get(self.card_index) {
            let id = location.id.clone();
            self.select_location(&id);
        }
    }

    pub fn start_search(&mut self) {
        self.search = Some(SearchState::default());
        self.status_message.clear();
    }

    pub fn cancel_search(&mut self) {
        self.search = None;
    }

    /// Jumps to the best fuzzy match for the typed query
    pub fn submit_search(&mut self) {
        let Some(search) = self.search.take() else {
            return;
        };

        let matched = best_match(&self.catalog, &search.query).map(|location| location.id.clone());
        match matched {
            Some(id) => self.select_location(&id),
            None => {
                tracing::debug!(query = %search.query, "search found no location");
                self.status_message = format!("No location matches \"{}\"", search.query.trim());
            }
        }
    }

    fn sync_card_index(&mut self) {
        if let Some(index) = self.view.selected_index() {
            self.card_index = index;
        }
    }

    fn after_transition(&mut self, before: ActiveView) {
        if before != self.active_view() && !self.animation_paused {
            let effect = fx::fade_from_fg(Color::Black, (VIEW_FADE_MS, Interpolation::QuadOut));
            self.view_fx.replace(Some(effect));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Catalog::builtin().unwrap())
    }

    #[test]
    fn opening_a_card_selects_its_location() {
        let mut app = app();
        app.focus_card(Step::Forward);
        app.focus_card(Step::Forward);
        app.open_focused_card();

        assert_eq!(app.active_view(), ActiveView::Detail);
        assert_eq!(app.view.selected_location_id(), Some("willow_place"));
    }

    #[test]
    fn card_focus_wraps() {
        let mut app = app();
        app.focus_card(Step::Back);
        assert_eq!(app.card_index, 3);
        app.focus_card(Step::Forward);
        assert_eq!(app.card_index, 0);
    }

    #[test]
    fn unknown_location_reports_and_keeps_state() {
        let mut app = app();
        app.select_location("the_current");
        app.select_location("nowhere");

        assert_eq!(app.view.selected_location_id(), Some("the_current"));
        assert!(app.status_message.contains("nowhere"));
    }

    #[test]
    fn search_jumps_to_best_match() {
        let mut app = app();
        app.start_search();
        if let Some(search) = app.search.as_mut() {
            search.query.push_str("village");
        }
        app.submit_search();

        assert!(app.search.is_none());
        assert_eq!(app.view.selected_location_id(), Some("the_village"));
        assert_eq!(app.card_index, 3);
    }

    #[test]
    fn search_without_match_is_fail_soft() {
        let mut app = app();
        app.start_search();
        if let Some(search) = app.search.as_mut() {
            search.query.push_str("qqq");
        }
        app.submit_search();

        assert_eq!(app.active_view(), ActiveView::Overview);
        assert_eq!(app.view.selected_location_id(), None);
        assert!(app.status_message.contains("qqq"));
    }

    #[test]
    fn switching_views_arms_fade() {
        let mut app = app();
        assert!(app.view_fx.borrow().is_none());
        app.select_detail_tab();
        assert!(app.view_fx.borrow().is_some());
    }

    #[test]
    fn toggling_views_arms_fade_each_way() {
        let mut app = app();
        app.status_message = "stale".to_string();
        app.toggle_view();
        assert_eq!(app.active_view(), ActiveView::Detail);
        assert_eq!(app.view.selected_location_id(), Some("church_hill"));
        assert!(app.status_message.is_empty());
        assert!(app.view_fx.borrow_mut().take().is_some());

        app.toggle_view();
        assert_eq!(app.active_view(), ActiveView::Overview);
        assert_eq!(app.view.selected_location_id(), None);
        assert!(app.view_fx.borrow().is_some());
    }

    #[test]
    fn paused_animations_skip_fade() {
        let mut app = app();
        app.toggle_animation_pause();
        app.select_detail_tab();
        assert!(app.view_fx.borrow().is_none());
    }
}

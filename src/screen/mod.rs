//! Screen controller: search, direction and single-row expansion over the fetched books.

pub mod animation;
pub mod format;
pub mod localization;
pub mod row;

use std::collections::HashMap;
use std::time::Duration;

use crate::books_client::FetchFailure;
use crate::data_source::{DataSource, FetchState};
use crate::domain::Book;
use animation::TransitionKind;
use localization::{Direction, TitleTranslations, UiStrings};
use row::{RowContext, RowController, RowView};

/// State owned by one screen instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenState {
    pub direction: Direction,
    pub search_query: String,
    pub expanded_id: Option<String>,
}

impl ScreenState {
    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
    }

    /// Collapse `id` if it is the expanded row, otherwise make it the only expanded row.
    pub fn toggle_expansion(&mut self, id: &str) {
        if self.expanded_id.as_deref() == Some(id) {
            self.expanded_id = None;
        } else {
            self.expanded_id = Some(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_id.as_deref() == Some(id)
    }
}

/// Discrete user input the renderer forwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    SearchChanged(String),
    InsertChar(char),
    Backspace,
    ToggleDirection,
    TapRow(String),
    TapSelected,
    SelectNext,
    SelectPrev,
    Retry,
    Quit,
}

#[derive(Debug, Clone)]
pub struct ScreenSettings {
    pub cover_base_url: String,
    pub expand_duration: Duration,
    pub titles: TitleTranslations,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        ScreenSettings {
            cover_base_url: "https://dev.iqrakitab.net".into(),
            expand_duration: Duration::from_millis(300),
            titles: TitleTranslations::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListStatus {
    Loading,
    Failed(FetchFailure),
    Empty,
    Ready,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenView {
    pub direction: Direction,
    pub strings: &'static UiStrings,
    pub search_query: String,
    pub status: ListStatus,
    pub rows: Vec<RowView>,
}

#[derive(Debug)]
pub struct ScreenController {
    state: ScreenState,
    data: DataSource,
    rows: HashMap<String, RowController>,
    settings: ScreenSettings,
    selected: usize,
    should_quit: bool,
}

impl ScreenController {
    pub fn new(data: DataSource, settings: ScreenSettings) -> Self {
        ScreenController {
            state: ScreenState::default(),
            data,
            rows: HashMap::new(),
            settings,
            selected: 0,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn data(&self) -> &DataSource {
        &self.data
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn handle(&mut self, event: ScreenEvent) {
        tracing::trace!(?event, "screen event");
        match event {
            ScreenEvent::SearchChanged(text) => self.set_search_query(text),
            ScreenEvent::InsertChar(c) => {
                let mut text = self.state.search_query.clone();
                text.push(c);
                self.set_search_query(text);
            }
            ScreenEvent::Backspace => {
                let mut text = self.state.search_query.clone();
                text.pop();
                self.set_search_query(text);
            }
            ScreenEvent::ToggleDirection => self.toggle_direction(),
            ScreenEvent::TapRow(id) => {
                self.tap_row(&id);
            }
            ScreenEvent::TapSelected => self.tap_selected(),
            ScreenEvent::SelectNext => self.select_next(),
            ScreenEvent::SelectPrev => self.select_prev(),
            ScreenEvent::Retry => {
                self.data.retry();
            }
            ScreenEvent::Quit => self.should_quit = true,
        }
    }

    pub fn toggle_direction(&mut self) {
        self.state.toggle_direction();
        tracing::debug!(direction = ?self.state.direction, "direction toggled");
        // displayed titles changed, so the filter result may have too
        self.clamp_selection();
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.state.search_query = text.into();
        self.clamp_selection();
    }

    pub fn toggle_expansion(&mut self, id: &str) {
        self.state.toggle_expansion(id);
        tracing::debug!(expanded = ?self.state.expanded_id, "expansion changed");
    }

    /// Books that pass the search filter, in API order.
    pub fn filtered_books(&self) -> Vec<&Book> {
        let query = self.state.search_query.trim().to_lowercase();
        self.data
            .data()
            .iter()
            .filter(|book| self.matches(book, &query))
            .collect()
    }

    fn matches(&self, book: &Book, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let shown = self
            .settings
            .titles
            .display_title(&book.title, self.state.direction);
        book.title.to_lowercase().contains(query) || shown.to_lowercase().contains(query)
    }

    /// Forward a tap to the row; the expansion commits when its transition ends.
    pub fn tap_row(&mut self, id: &str) -> bool {
        if !self.data.data().iter().any(|b| b.id == id) {
            tracing::debug!(%id, "tap on unknown row");
            return false;
        }
        let is_expanded = self.state.is_expanded(id);
        let duration = self.settings.expand_duration;
        self.rows
            .entry(id.to_string())
            .or_insert_with(|| RowController::new(id, duration))
            .on_tap(is_expanded)
    }

    pub fn tap_selected(&mut self) {
        let id = self
            .filtered_books()
            .get(self.selected)
            .map(|b| b.id.clone());
        if let Some(id) = id {
            self.tap_row(&id);
        }
    }

    pub fn select_next(&mut self) {
        let len = self.filtered_books().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.filtered_books().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Pull in a finished fetch and advance every row transition by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        if self.data.poll() {
            self.clamp_selection();
        }

        let mut finished = Vec::new();
        for row in self.rows.values_mut() {
            row.advance(dt, |id, kind| finished.push((id.to_string(), kind)));
        }
        for (id, kind) in finished {
            self.commit_transition(&id, kind);
        }
    }

    /// A finished transition flips the row, unless another commit already put
    /// it where the transition was heading.
    fn commit_transition(&mut self, id: &str, kind: TransitionKind) {
        let expanded = self.state.is_expanded(id);
        let needs_flip = match kind {
            TransitionKind::Expanding => !expanded,
            TransitionKind::Collapsing => expanded,
        };
        if needs_flip {
            self.toggle_expansion(id);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.rows.values().any(RowController::is_animating)
    }

    pub fn view(&self) -> ScreenView {
        let direction = self.state.direction;
        let ctx = RowContext {
            direction,
            titles: &self.settings.titles,
            cover_base_url: &self.settings.cover_base_url,
        };

        let rows: Vec<RowView> = self
            .filtered_books()
            .into_iter()
            .enumerate()
            .map(|(idx, book)| {
                let is_expanded = self.state.is_expanded(&book.id);
                let mut view = match self.rows.get(&book.id) {
                    Some(row) => row.view(book, ctx, is_expanded),
                    None => row::idle_view(book, ctx, is_expanded),
                };
                view.selected = idx == self.selected;
                view
            })
            .collect();

        let status = match self.data.state() {
            FetchState::Loading => ListStatus::Loading,
            FetchState::Failed(e) => ListStatus::Failed(e.clone()),
            FetchState::Ready(_) if rows.is_empty() => ListStatus::Empty,
            FetchState::Ready(_) => ListStatus::Ready,
        };

        ScreenView {
            direction,
            strings: direction.strings(),
            search_query: self.state.search_query.clone(),
            status,
            rows,
        }
    }
}

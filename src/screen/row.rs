//! Per-row controller: owns the row's transition and derives its display strings.

use std::time::Duration;

use super::animation::{ExpansionAnimation, TransitionKind};
use super::format::format_date;
use super::localization::{Direction, TitleTranslations};
use crate::domain::Book;

/// Inputs shared by every row in a frame.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    pub direction: Direction,
    pub titles: &'a TitleTranslations,
    pub cover_base_url: &'a str,
}

/// Render-ready state for one row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: String,
    pub title: String,
    pub author_line: String,
    pub created_line: String,
    /// `None` renders the missing-cover placeholder
    pub cover_url: Option<String>,
    pub details: Option<RowDetails>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowDetails {
    pub published_line: String,
    pub language_line: String,
    pub description: String,
    /// How much of the detail area is open, in `[0, 1]`
    pub factor: f32,
}

#[derive(Debug, Clone)]
pub struct RowController {
    id: String,
    animation: ExpansionAnimation,
}

impl RowController {
    pub fn new(id: impl Into<String>, duration: Duration) -> Self {
        RowController {
            id: id.into(),
            animation: ExpansionAnimation::new(duration),
        }
    }

    /// Start opening or closing, depending on the committed state. Taps while a
    /// transition is running are dropped.
    pub fn on_tap(&mut self, is_expanded: bool) -> bool {
        let kind = if is_expanded {
            TransitionKind::Collapsing
        } else {
            TransitionKind::Expanding
        };
        let started = self.animation.start(kind);
        if started {
            tracing::debug!(id = %self.id, ?kind, "row transition started");
        } else {
            tracing::trace!(id = %self.id, "tap ignored, transition in flight");
        }
        started
    }

    /// Advance the transition; `on_toggle` runs once, when it completes.
    pub fn advance(&mut self, dt: Duration, on_toggle: impl FnOnce(&str, TransitionKind)) {
        if let Some(kind) = self.animation.advance(dt) {
            tracing::debug!(id = %self.id, ?kind, "row transition finished");
            on_toggle(&self.id, kind);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Open fraction of the detail area. Details are drawn only while the row
    /// is committed as expanded.
    pub fn detail_factor(&self, is_expanded: bool) -> Option<f32> {
        if !is_expanded {
            return None;
        }
        match self.animation.kind() {
            Some(_) => Some(self.animation.value()),
            None => Some(1.0),
        }
    }

    pub fn view(&self, book: &Book, ctx: RowContext<'_>, is_expanded: bool) -> RowView {
        build_view(book, ctx, self.detail_factor(is_expanded))
    }
}

/// View for a row that has never been tapped.
pub fn idle_view(book: &Book, ctx: RowContext<'_>, is_expanded: bool) -> RowView {
    build_view(book, ctx, is_expanded.then_some(1.0))
}

fn build_view(book: &Book, ctx: RowContext<'_>, factor: Option<f32>) -> RowView {
    let s = ctx.direction.strings();
    let details = factor.map(|factor| RowDetails {
        published_line: format!(
            "{}{}",
            s.published,
            if book.is_published { s.yes } else { s.no }
        ),
        language_line: format!(
            "{}{}",
            s.language,
            if book.is_arabic { s.arabic } else { s.non_arabic }
        ),
        description: book.description.clone(),
        factor,
    });

    RowView {
        id: book.id.clone(),
        title: ctx
            .titles
            .display_title(&book.title, ctx.direction)
            .to_string(),
        author_line: format!("{}{}", s.by_author, book.author.name),
        created_line: format!("{}{}", s.created_at, format_date(&book.author.created_at)),
        cover_url: cover_url(ctx.cover_base_url, book.cover_photo_uri.as_deref()),
        details,
        selected: false,
    }
}

/// `<base>/<uri>`, joined with a literal slash and no encoding.
pub fn cover_url(base: &str, uri: Option<&str>) -> Option<String> {
    uri.map(|uri| format!("{}/{}", base, uri))
}

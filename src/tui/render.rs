//! Paints a [`ScreenView`] with ratatui.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::screen::localization::{Direction, UiStrings};
use crate::screen::row::RowView;
use crate::screen::{ListStatus, ScreenView};

const TOGGLE_WIDTH: u16 = 7;

pub fn draw(frame: &mut Frame, view: &ScreenView) {
    let [header, search, list] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(frame.area());

    draw_header(frame, header, view);
    draw_search_row(frame, search, view);
    draw_list(frame, list, view);
}

fn alignment(direction: Direction) -> Alignment {
    match direction {
        Direction::Ltr => Alignment::Left,
        Direction::Rtl => Alignment::Right,
    }
}

fn draw_header(frame: &mut Frame, area: Rect, view: &ScreenView) {
    let header = Paragraph::new(Line::from(view.strings.header).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn draw_search_row(frame: &mut Frame, area: Rect, view: &ScreenView) {
    let (search_area, toggle_area) = match view.direction {
        Direction::Ltr => {
            let [search, toggle] =
                Layout::horizontal([Constraint::Min(0), Constraint::Length(TOGGLE_WIDTH)])
                    .areas(area);
            (search, toggle)
        }
        Direction::Rtl => {
            let [toggle, search] =
                Layout::horizontal([Constraint::Length(TOGGLE_WIDTH), Constraint::Min(0)])
                    .areas(area);
            (search, toggle)
        }
    };

    let query = if view.search_query.is_empty() {
        Span::styled(
            view.strings.search_placeholder,
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(view.search_query.clone())
    };
    let search = Paragraph::new(Line::from(query))
        .alignment(alignment(view.direction))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(search, search_area);

    let toggle = Paragraph::new(view.strings.toggle_label)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().bg(Color::Gray).fg(Color::Black));
    frame.render_widget(toggle, toggle_area);
}

fn draw_list(frame: &mut Frame, area: Rect, view: &ScreenView) {
    let align = alignment(view.direction);
    let message = match &view.status {
        ListStatus::Loading => Some(Text::from(view.strings.loading)),
        ListStatus::Failed(reason) => Some(Text::from(vec![
            Line::from(view.strings.fetch_failed).fg(Color::Red).bold(),
            Line::from(reason.to_string()).fg(Color::Red),
            Line::from(view.strings.retry_hint).fg(Color::DarkGray),
        ])),
        ListStatus::Empty => Some(Text::from(view.strings.no_results)),
        ListStatus::Ready => None,
    };

    if let Some(message) = message {
        let p = Paragraph::new(message)
            .alignment(align)
            .wrap(Wrap { trim: true });
        frame.render_widget(p, area);
        return;
    }

    let items: Vec<ListItem> = view
        .rows
        .iter()
        .map(|row| ListItem::new(row_text(row, view.strings, align)))
        .collect();
    let selected = view.rows.iter().position(|r| r.selected);
    let list = List::new(items).highlight_style(
        Style::default()
            .bg(Color::Rgb(0xF3, 0xEE, 0xEE))
            .fg(Color::Black),
    );
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

/// Lines of the detail area visible at `factor` open.
pub fn visible_detail_lines(factor: f32, total: usize) -> usize {
    let shown = (factor.clamp(0.0, 1.0) * total as f32).ceil() as usize;
    shown.min(total)
}

pub fn row_text(row: &RowView, strings: &UiStrings, align: Alignment) -> Text<'static> {
    let mut lines = vec![
        Line::from(row.title.clone()).bold(),
        match &row.cover_url {
            Some(url) => Line::from(url.clone()).fg(Color::Blue),
            None => Line::from(strings.no_cover).fg(Color::DarkGray),
        },
        Line::from(row.author_line.clone()).fg(Color::Gray),
    ];

    if let Some(details) = &row.details {
        let detail_lines = [
            Line::from(details.published_line.clone()),
            Line::from(details.language_line.clone()),
            Line::from(details.description.clone()).add_modifier(Modifier::ITALIC),
        ];
        let shown = visible_detail_lines(details.factor, detail_lines.len());
        lines.extend(detail_lines.into_iter().take(shown));
    }

    lines.push(Line::from(row.created_line.clone()).fg(Color::DarkGray));
    lines.push(Line::default());

    Text::from(
        lines
            .into_iter()
            .map(|line| line.alignment(align))
            .collect::<Vec<_>>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books_client::FetchFailure;
    use crate::screen::localization::ENGLISH;
    use crate::screen::row::RowDetails;
    use ratatui::{Terminal, backend::TestBackend};

    fn row(details: Option<RowDetails>) -> RowView {
        RowView {
            id: "a".into(),
            title: "KHUTBAT".into(),
            author_line: "By Maududi".into(),
            created_line: "Created At: 05-01-2023".into(),
            cover_url: None,
            details,
            selected: true,
        }
    }

    fn details(factor: f32) -> RowDetails {
        RowDetails {
            published_line: "Published: Yes".into(),
            language_line: "Language: Non-Arabic".into(),
            description: "Sermons".into(),
            factor,
        }
    }

    fn render(view: &ScreenView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|frame| draw(frame, view)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn view(status: ListStatus, rows: Vec<RowView>) -> ScreenView {
        ScreenView {
            direction: Direction::Ltr,
            strings: &ENGLISH,
            search_query: String::new(),
            status,
            rows,
        }
    }

    #[test]
    fn detail_lines_scale_with_factor() {
        assert_eq!(visible_detail_lines(0.0, 3), 0);
        assert_eq!(visible_detail_lines(0.2, 3), 1);
        assert_eq!(visible_detail_lines(0.5, 3), 2);
        assert_eq!(visible_detail_lines(1.0, 3), 3);
        assert_eq!(visible_detail_lines(7.0, 3), 3);
    }

    #[test]
    fn collapsed_row_has_no_detail_lines() {
        let text = row_text(&row(None), &ENGLISH, Alignment::Left);
        // title, cover, author, created, spacer
        assert_eq!(text.lines.len(), 5);
        assert_eq!(text.lines[1].to_string(), "[no cover]");
    }

    #[test]
    fn expanded_row_grows_with_factor() {
        let half = row_text(&row(Some(details(0.5))), &ENGLISH, Alignment::Left);
        let full = row_text(&row(Some(details(1.0))), &ENGLISH, Alignment::Right);
        assert_eq!(half.lines.len(), 7);
        assert_eq!(full.lines.len(), 8);
        assert_eq!(full.lines[3].to_string(), "Published: Yes");
        assert_eq!(full.lines[0].alignment, Some(Alignment::Right));
    }

    #[test]
    fn draws_header_search_and_rows() {
        let screen = render(&view(ListStatus::Ready, vec![row(None)]));
        assert!(screen.contains("Books"));
        assert!(screen.contains("Search by book name"));
        assert!(screen.contains("RTL"));
        assert!(screen.contains("KHUTBAT"));
        assert!(screen.contains("By Maududi"));
    }

    #[test]
    fn failed_fetch_still_draws_controls_and_error() {
        let screen = render(&view(
            ListStatus::Failed(FetchFailure::Status(502)),
            Vec::new(),
        ));
        assert!(screen.contains("Search by book name"));
        assert!(screen.contains("RTL"));
        assert!(screen.contains("Could not load books"));
        assert!(screen.contains("Ctrl+R"));
    }

    #[test]
    fn loading_and_empty_states() {
        assert!(render(&view(ListStatus::Loading, Vec::new())).contains("Loading books"));
        assert!(render(&view(ListStatus::Empty, Vec::new())).contains("No books found"));
    }
}

use chrono::{DateTime, Local, NaiveDate};
use jobboard_core::{AppViewModel, JobCardView, LoadState, ScoreClass, View};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap};

use super::constants::*;
use super::keymap::InputMode;
use super::layout;

const POSTED_FORMAT: &str = "%d %b %Y";

pub fn draw(frame: &mut Frame, view: &AppViewModel, mode: InputMode) {
    let regions = layout::split(frame.area());
    draw_tabs(frame, regions.tabs, view);
    draw_filters(frame, regions.filters, view, mode);
    draw_body(frame, regions.body, view);
    draw_footer(frame, regions.footer, mode);
}

fn draw_tabs(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let titles = vec![
        TAB_ALL.to_string(),
        format!("{} ({})", TAB_SAVED, view.saved_count),
    ];
    let selected = match view.view {
        View::All => 0,
        View::Saved => 1,
    };
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(APP_TITLE))
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_filters(frame: &mut Frame, area: Rect, view: &AppViewModel, mode: InputMode) {
    let (search_area, category_area) = layout::split_filters(area);

    let searching = mode == InputMode::Search;
    let search_line = if searching {
        Line::from(vec![
            Span::raw(view.search_term.clone()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ])
    } else if view.search_term.is_empty() {
        Line::from(Span::styled(
            "Search by title or company (/)",
            Style::default().fg(COLOR_MUTED),
        ))
    } else {
        Line::from(view.search_term.clone())
    };
    let border = if searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let search = Paragraph::new(search_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Search "),
    );
    frame.render_widget(search, search_area);

    let category = Paragraph::new(view.category.label().to_string()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Category ({}) ", view.category_options.len().saturating_sub(1))),
    );
    frame.render_widget(category, category_area);
}

fn draw_body(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    match &view.load {
        LoadState::Loading => draw_notice(frame, area, LOADING_TEXT),
        LoadState::Failed { message, detail } => {
            draw_error(frame, area, message, detail.as_deref())
        }
        LoadState::Ready if view.cards.is_empty() => draw_notice(frame, area, NO_JOBS_TEXT),
        LoadState::Ready => {
            let (list_area, detail_area) = layout::split_body(area);
            draw_card_list(frame, list_area, view);
            draw_card_detail(frame, detail_area, view.selected_card());
        }
    }
}

fn draw_notice(frame: &mut Frame, area: Rect, text: &str) {
    let boxed = layout::centered(area, text.len() as u16 + 4, 3);
    let notice = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(COLOR_MUTED))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(notice, boxed);
}

fn draw_error(frame: &mut Frame, area: Rect, message: &str, detail: Option<&str>) {
    let mut lines = vec![Line::from(Span::styled(
        message.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(detail) = detail {
        lines.push(Line::from(detail.to_string()));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        RELOAD_HINT,
        Style::default().fg(COLOR_MUTED),
    )));

    let width = area.width.saturating_sub(4).min(72);
    let boxed = layout::centered(area, width, lines.len() as u16 + 4);
    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Error "),
        );
    frame.render_widget(panel, boxed);
}

fn draw_card_list(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let items: Vec<ListItem> = view
        .cards
        .iter()
        .map(|card| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", saved_mark(card))),
                score_badge(card),
                Span::raw(format!(" {}", card.title)),
                Span::styled(format!("  {}", card.company), Style::default().fg(COLOR_MUTED)),
            ]))
        })
        .collect();

    let title = match view.view {
        View::All => format!(" Jobs ({}/{}) ", view.cards.len(), view.total_jobs),
        View::Saved => format!(" Saved jobs ({}) ", view.cards.len()),
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(COLOR_MUTED)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(view.selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_card_detail(frame: &mut Frame, area: Rect, card: Option<&JobCardView>) {
    let text = match card {
        Some(card) => Text::from(card_lines(card)),
        None => Text::raw("No job selected"),
    };
    let detail = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(" Details "))
        .wrap(Wrap { trim: false });
    frame.render_widget(detail, area);
}

fn card_lines(card: &JobCardView) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            card.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            card.company.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(vec![Span::raw("Trust score: "), score_badge(card)]),
        Line::from(Span::styled(
            format!("Flags: {}", card.flags_text),
            Style::default().fg(COLOR_MUTED),
        )),
        Line::from(format!("Category: {}", card.category)),
    ];
    if let Some(posted) = &card.posted_date {
        lines.push(Line::from(format!("Posted: {}", format_posted(posted))));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(card.summary.clone()));
    lines.push(Line::from(""));
    if let Some(url) = &card.original_url {
        lines.push(Line::from(vec![
            Span::raw("View original post: "),
            Span::styled(
                url.clone(),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }
    let save_hint = if card.is_saved {
        format!("{SAVED_MARK} Saved (s to unsave)")
    } else {
        format!("{UNSAVED_MARK} Not saved (s to save)")
    };
    lines.push(Line::from(save_hint));
    lines
}

fn draw_footer(frame: &mut Frame, area: Rect, mode: InputMode) {
    let (text, style) = match mode {
        InputMode::Search => (HELP_SEARCH, Style::default().fg(Color::Yellow)),
        InputMode::Browse => (HELP_BROWSE, Style::default().fg(COLOR_MUTED)),
    };
    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn saved_mark(card: &JobCardView) -> &'static str {
    if card.is_saved {
        SAVED_MARK
    } else {
        UNSAVED_MARK
    }
}

fn score_badge(card: &JobCardView) -> Span<'static> {
    match (card.score, card.score_class) {
        (Some(score), Some(class)) => Span::styled(
            format!("{score:>3}%"),
            Style::default()
                .fg(score_color(class))
                .add_modifier(Modifier::BOLD),
        ),
        _ => Span::styled("  --", Style::default().fg(COLOR_MUTED)),
    }
}

fn score_color(class: ScoreClass) -> Color {
    match class {
        ScoreClass::High => COLOR_SCORE_HIGH,
        ScoreClass::Medium => COLOR_SCORE_MEDIUM,
        ScoreClass::Low => COLOR_SCORE_LOW,
    }
}

/// Local calendar date for RFC 3339 timestamps or plain `YYYY-MM-DD` dates;
/// anything else is shown as received.
fn format_posted(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp
            .with_timezone(&Local)
            .format(POSTED_FORMAT)
            .to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(POSTED_FORMAT).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::{update, AppState, Job, Msg};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(view: &AppViewModel, mode: InputMode) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, view, mode)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn loaded_view() -> AppViewModel {
        let jobs = vec![
            Job::new("a")
                .with_title("Remote Writer")
                .with_company("Acme")
                .with_category("Writing")
                .with_posted_date("2024-05-01")
                .with_scam_analysis(92, vec!["no red flags".to_string()]),
            Job::new("b").with_title("Data Entry").with_company("Acme"),
        ];
        let (state, _) = update(AppState::new(), Msg::JobsLoaded(jobs));
        let (state, _) = update(
            state,
            Msg::SaveToggled {
                job_id: "a".to_string(),
            },
        );
        state.view()
    }

    #[test]
    fn renders_cards_with_badge_and_saved_count() {
        let text = screen_text(&loaded_view(), InputMode::Browse);
        assert!(text.contains("Remote Writer"));
        assert!(text.contains("Data Entry"));
        assert!(text.contains(" 92%"));
        assert!(text.contains("Saved (1)"));
        assert!(text.contains("Posted: 01 May 2024"));
        assert!(text.contains("Category: Writing"));
    }

    #[test]
    fn renders_loading_notice() {
        let text = screen_text(&AppState::new().view(), InputMode::Browse);
        assert!(text.contains(LOADING_TEXT));
    }

    #[test]
    fn renders_error_panel() {
        let (state, _) = update(
            AppState::new(),
            Msg::JobsFailed {
                message: "Failed to load jobs.".to_string(),
                detail: Some("http status 500".to_string()),
            },
        );
        let text = screen_text(&state.view(), InputMode::Browse);
        assert!(text.contains("Failed to load jobs."));
        assert!(text.contains("http status 500"));
        assert!(text.contains(RELOAD_HINT));
    }

    #[test]
    fn renders_no_jobs_notice() {
        let (state, _) = update(AppState::new(), Msg::JobsLoaded(Vec::new()));
        let text = screen_text(&state.view(), InputMode::Browse);
        assert!(text.contains(NO_JOBS_TEXT));
    }

    #[test]
    fn search_mode_changes_footer() {
        let text = screen_text(&loaded_view(), InputMode::Search);
        assert!(text.contains("Enter:done"));
    }

    #[test]
    fn posted_dates_are_formatted_or_passed_through() {
        assert_eq!(format_posted("2024-05-01"), "01 May 2024");
        assert_eq!(format_posted("last week"), "last week");
        assert!(!format_posted("2024-05-01T12:00:00Z").is_empty());
    }
}

//! ratatui renderer for the session view model.
//!
//! All styling lives here, driven by the `[ui]` section of the config.

use std::str::FromStr;

use polygo_core::input::Scroller;
use polygo_core::session::RANKING_INTRO;
use polygo_core::storage::UiConfig;
use polygo_core::{DurationField, Screen, StoredMessage, ViewModel};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tracing::warn;

/// Resolved colors for one run.
#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Color,
    pub cursor_line: Color,
    pub capture_border: Color,
    pub ledger_border: Color,
    pub ranking_border: Color,
    pub favorites_border: Color,
    pub polishing_border: Color,
    pub help: Color,
    pub show_help: bool,
}

impl Theme {
    pub fn from_config(ui: &UiConfig) -> Self {
        Self {
            header: parse_color("ui.header_color", &ui.header_color),
            cursor_line: parse_color("ui.cursor_line_color", &ui.cursor_line_color),
            capture_border: parse_color("ui.capture_border_color", &ui.capture_border_color),
            ledger_border: parse_color("ui.ledger_border_color", &ui.ledger_border_color),
            ranking_border: parse_color("ui.ranking_border_color", &ui.ranking_border_color),
            favorites_border: parse_color("ui.favorites_border_color", &ui.favorites_border_color),
            polishing_border: parse_color("ui.polishing_border_color", &ui.polishing_border_color),
            help: parse_color("ui.help_color", &ui.help_color),
            show_help: ui.show_help,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}

fn parse_color(key: &str, value: &str) -> Color {
    Color::from_str(value).unwrap_or_else(|_| {
        warn!(key, value, "unrecognised color, using terminal default");
        Color::Reset
    })
}

/// Draw `view` and return how many lines of the ledger panel overflow it
/// (zero outside the capture screen).
pub fn draw(frame: &mut Frame, view: &ViewModel, theme: &Theme) -> usize {
    let help_height = if theme.show_help {
        view.help.len() as u16 + 1
    } else {
        0
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(help_height),
        ])
        .split(frame.area());

    let header = Line::from(vec![
        Span::styled(view.header, Style::default().fg(theme.header)),
        Span::raw(" "),
        Span::styled(view.phase_label, Style::default().fg(theme.help)),
    ]);
    frame.render_widget(Paragraph::new(header), layout[0]);

    let overflow = match &view.screen {
        Screen::Setup {
            minutes,
            seconds,
            focused,
        } => {
            render_setup(frame, layout[1], minutes, seconds, *focused, theme);
            0
        }
        Screen::Capture {
            time_remaining,
            capture,
            ledger_so_far,
            ledger_scroll,
        } => render_capture(
            frame,
            layout[1],
            time_remaining,
            capture,
            ledger_so_far,
            *ledger_scroll,
            theme,
        ),
        Screen::Ranking {
            favorites,
            current,
            needs_polishing,
        } => {
            render_ranking(frame, layout[1], favorites, current, needs_polishing, theme);
            0
        }
        Screen::Stored(message) => {
            render_stored(frame, layout[1], message);
            0
        }
    };

    if theme.show_help {
        let lines: Vec<Line> = std::iter::once(Line::default())
            .chain(view.help.iter().map(|h| Line::from(*h)))
            .collect();
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().fg(theme.help)),
            layout[2],
        );
    }
    overflow
}

fn render_setup(
    frame: &mut Frame,
    area: Rect,
    minutes: &str,
    seconds: &str,
    focused: Option<DurationField>,
    theme: &Theme,
) {
    let field = |value: &str, which: DurationField| {
        let style = if focused == Some(which) {
            Style::default()
                .bg(theme.cursor_line)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        Span::styled(value.to_string(), style)
    };

    let text = vec![
        Line::from("Set timer:"),
        Line::from(vec![
            field(minutes, DurationField::Minutes),
            Span::raw(": "),
            field(seconds, DurationField::Seconds),
        ]),
    ];
    frame.render_widget(Paragraph::new(text), area);
}

fn render_capture(
    frame: &mut Frame,
    area: Rect,
    time_remaining: &str,
    capture: &str,
    ledger_so_far: &str,
    scroll: Scroller,
    theme: &Theme,
) -> usize {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);
    frame.render_widget(
        Paragraph::new(format!("Time left: {time_remaining}")),
        rows[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let mut lines: Vec<Line> = capture.split('\n').map(|l| Line::from(l.to_string())).collect();
    if let Some(last) = lines.last_mut() {
        last.spans.push(Span::styled(
            " ",
            Style::default().bg(theme.cursor_line),
        ));
    }
    let input = Paragraph::new(lines)
        .block(panel(theme.capture_border))
        .wrap(Wrap { trim: false });
    frame.render_widget(input, columns[0]);

    let (ledger, overflow) = scrolled(ledger_so_far, scroll, columns[1], theme.ledger_border);
    frame.render_widget(ledger, columns[1]);
    overflow
}

fn render_ranking(
    frame: &mut Frame,
    area: Rect,
    favorites: &str,
    current: &str,
    needs_polishing: &str,
    theme: &Theme,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(RANKING_INTRO.len() as u16 + 1),
            Constraint::Min(3),
        ])
        .split(area);
    let intro: Vec<Line> = RANKING_INTRO.iter().map(|l| Line::from(*l)).collect();
    frame.render_widget(Paragraph::new(intro), rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);

    let pinned = Scroller::default();
    let (favorites, _) = scrolled(favorites, pinned, columns[0], theme.favorites_border);
    frame.render_widget(favorites, columns[0]);
    frame.render_widget(
        Paragraph::new(current.to_string())
            .block(panel(theme.ranking_border))
            .wrap(Wrap { trim: false }),
        columns[1],
    );
    let (polishing, _) = scrolled(needs_polishing, pinned, columns[2], theme.polishing_border);
    frame.render_widget(polishing, columns[2]);
}

fn render_stored(frame: &mut Frame, area: Rect, message: &StoredMessage) {
    let title_style = if message.is_failure() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let text = Text::from(vec![
        Line::from(Span::styled(format!("# {}", message.title()), title_style)),
        Line::default(),
        Line::from(message.body()),
    ]);
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), area);
}

fn panel(border: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
}

/// Bordered, wrapped panel showing `text` at the scroll position of
/// `scroll`, plus the number of wrapped lines that do not fit.
fn scrolled(
    text: &str,
    scroll: Scroller,
    area: Rect,
    border: Color,
) -> (Paragraph<'static>, usize) {
    let inner_height = area.height.saturating_sub(2) as usize;
    let inner_width = area.width.saturating_sub(2);
    let paragraph = Paragraph::new(text.to_string()).wrap(Wrap { trim: false });
    let total = paragraph.line_count(inner_width);
    let top = scroll.top_line(total, inner_height);
    let paragraph = paragraph
        .block(panel(border))
        .scroll((u16::try_from(top).unwrap_or(u16::MAX), 0));
    (paragraph, total.saturating_sub(inner_height))
}

//! TUI rendering with ratatui
//!
//! Board, keyboard, and status panels for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Feedback, MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::GameState;
use crate::wordlists::IndexSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui<S: IndexSource>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard + messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Tile colors for a feedback value
#[must_use]
pub fn feedback_style(feedback: Feedback) -> Style {
    let bg = match feedback {
        Feedback::Exact => Color::Green,
        Feedback::Present => Color::Yellow,
        Feedback::Absent => Color::DarkGray,
    };
    Style::default()
        .bg(bg)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<S: IndexSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let history = app.session.history();
    let mut lines: Vec<Line> = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for row in 0..MAX_ATTEMPTS {
        let spans: Vec<Span> = if let Some(turn) = history.get(row) {
            turn.guess
                .chars()
                .iter()
                .zip(turn.verdict.feedback())
                .flat_map(|(&letter, &feedback)| {
                    [
                        Span::styled(
                            format!(" {} ", char::from(letter.to_ascii_uppercase())),
                            feedback_style(feedback),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect()
        } else if row == history.len() && app.input_mode == InputMode::Guessing {
            // Current row shows what is being typed
            let typed: Vec<char> = app.input_buffer.chars().collect();
            (0..WORD_LENGTH)
                .flat_map(|i| {
                    let cell = typed.get(i).map_or_else(
                        || " _ ".to_string(),
                        |c| format!(" {} ", c.to_ascii_uppercase()),
                    );
                    [
                        Span::styled(
                            cell,
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect()
        } else {
            (0..WORD_LENGTH)
                .flat_map(|_| {
                    [
                        Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                        Span::raw(" "),
                    ]
                })
                .collect()
        };

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = match app.session.state() {
        GameState::InProgress { attempt } => format!(" Attempt {attempt}/{MAX_ATTEMPTS} "),
        GameState::Won { attempts } => format!(" Solved in {attempts} "),
        GameState::Lost => format!(
            " The word was {} ",
            app.session.secret().text().to_uppercase()
        ),
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel<S: IndexSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard<S: IndexSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let states = app.letter_states();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| {
                    let label = format!("{}", char::from(letter.to_ascii_uppercase()));
                    let style = states.get(&letter).map_or_else(
                        || Style::default().fg(Color::White),
                        |&fb| feedback_style(fb),
                    );
                    Span::styled(label, style)
                })
                .flat_map(|span| [span, Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages<S: IndexSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<S: IndexSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type your guess | Enter to submit | Esc to quit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S: IndexSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let pool_text = format!("Words left in pool: {}", app.pool.len());
    let pool = Paragraph::new(pool_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(pool, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordPool;
    use crate::wordlists::loader::words_from_slice;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Cell};

    struct First;

    impl IndexSource for First {
        fn pick_index(&mut self, _len: usize) -> usize {
            0
        }
    }

    fn screen_text<S: IndexSource>(app: &App<S>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_board_with_guesses() {
        let pool = WordPool::new(words_from_slice(&["brook", "crane"]));
        let mut app = App::new(pool, First).unwrap();
        for c in "books".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let text = screen_text(&app);
        assert!(text.contains("Attempt 2/6"));
        assert!(text.contains(" B "));
        assert!(text.contains("Words left in pool: 1"));
    }

    #[test]
    fn feedback_colors_are_distinct() {
        let exact = feedback_style(Feedback::Exact);
        let present = feedback_style(Feedback::Present);
        let absent = feedback_style(Feedback::Absent);

        assert_ne!(exact, present);
        assert_ne!(present, absent);
        assert_ne!(exact, absent);
    }
}

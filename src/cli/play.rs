//! Play command implementation - Interactive TUI.

use super::{load_layout, resolve_seed, CliError, RuleArgs};
use blastgrid::game::{Cell, ItemKind};
use blastgrid::render::{tile_glyph, Glyph, LEGEND};
use blastgrid::{Coord, GameStatus, Session};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Lines of message history kept in the log panel.
const LOG_CAPACITY: usize = 200;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the layout cannot be loaded or the TUI fails.
#[allow(clippy::needless_pass_by_value)]
pub(crate) fn execute(
    layout: Option<PathBuf>,
    seed: Option<u64>,
    rules: RuleArgs,
) -> Result<(), CliError> {
    let layout = load_layout(layout.as_deref())?;
    let rules = rules.to_rules()?;
    let seed = resolve_seed(seed);

    let session = Session::seeded(layout, rules, seed);
    run_tui(App::new(session, seed))
}

/// App state for the TUI.
struct App {
    session: Session,
    seed: u64,
    input: String,
    log: Vec<String>,
}

impl App {
    fn new(session: Session, seed: u64) -> Self {
        let log = session.messages().to_vec();
        Self {
            session,
            seed,
            input: String::new(),
            log,
        }
    }

    fn submit(&mut self, command: &str) {
        self.log.push(format!("> {command}"));
        let messages = self.session.handle(command).to_vec();
        self.log.extend(messages);
        if self.log.len() > LOG_CAPACITY {
            let excess = self.log.len() - LOG_CAPACITY;
            self.log.drain(..excess);
        }
    }

    fn submit_typed(&mut self) {
        let command = std::mem::take(&mut self.input);
        if !command.trim().is_empty() {
            self.submit(command.trim());
        }
    }
}

fn run_tui(mut app: App) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    loop {
        app.session.clear_expired_explosions(Instant::now());

        // Draw
        terminal.draw(|f| ui(f, &app)).map_err(|e| CliError::new(e.to_string()))?;

        // Handle input with timeout so explosions clear on schedule
        if event::poll(Duration::from_millis(50)).map_err(|e| CliError::new(e.to_string()))?
            && let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))?
            && key.kind == KeyEventKind::Press
        {
            // Single-key shortcuts only apply while nothing is being typed
            let idle = app.input.is_empty();
            match key.code {
                KeyCode::Esc => break,
                KeyCode::Up => app.submit("move up"),
                KeyCode::Down => app.submit("move down"),
                KeyCode::Left => app.submit("move left"),
                KeyCode::Right => app.submit("move right"),
                KeyCode::Char(' ') if idle => app.submit("bomb"),
                KeyCode::Char('.') if idle => app.submit("wait"),
                KeyCode::Enter => app.submit_typed(),
                KeyCode::Backspace => {
                    app.input.pop();
                }
                KeyCode::Char(c) => app.input.push(c),
                _ => {}
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and stats
            Constraint::Length(8), // Message log
            Constraint::Length(3), // Input
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, main_chunks[0], app);
    render_stats(f, main_chunks[1], app);
    render_log(f, chunks[2], app);
    render_input(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let state = app.session.state();
    let (status, color) = match state.status {
        GameStatus::StartScreen => ("PRESS START", Color::Cyan),
        GameStatus::Playing => ("PLAYING", Color::Green),
        GameStatus::Win => ("YOU ESCAPED", Color::Yellow),
        GameStatus::Lose => ("GAME OVER", Color::Red),
    };

    let title = format!(
        " Blastgrid | Turn {} | {} | Seed: {} ",
        state.turn, status, app.seed
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let state = app.session.state();
    let width = i32::from(state.grid.width());
    let height = i32::from(state.grid.height());

    let lines: Vec<Line> = (0..height)
        .map(|y| {
            let spans: Vec<Span> = (0..width)
                .map(|x| {
                    let glyph = tile_glyph(state, Coord::new(x, y));
                    Span::styled(format!("{} ", glyph.char()), glyph_style(glyph))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Board "));

    f.render_widget(board, area);
}

fn glyph_style(glyph: Glyph) -> Style {
    let style = Style::default();
    match glyph {
        Glyph::Explosion => style.fg(Color::LightRed).add_modifier(Modifier::BOLD),
        Glyph::Player => style.fg(Color::LightBlue).add_modifier(Modifier::BOLD),
        Glyph::Enemy | Glyph::Item(ItemKind::FireUp) => style.fg(Color::Red),
        Glyph::Bomb | Glyph::Item(ItemKind::BombUp) => style.fg(Color::Yellow),
        Glyph::Terrain(Cell::BreakableBlock) => style.fg(Color::Rgb(150, 100, 40)),
        Glyph::Terrain(Cell::Goal) => style.fg(Color::Green).add_modifier(Modifier::BOLD),
        Glyph::Terrain(Cell::UnbreakableBlock) => style.fg(Color::Gray),
        Glyph::Terrain(Cell::Empty) => style.fg(Color::DarkGray),
    }
}

fn render_stats(f: &mut Frame, area: Rect, app: &App) {
    let state = app.session.state();
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(""),
        Line::from(vec![Span::styled("Turn:       ", bold), Span::raw(state.turn.to_string())]),
        Line::from(vec![
            Span::styled("Fire power: ", bold),
            Span::raw(state.stats.fire_power.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Bombs:      ", bold),
            Span::raw(format!("{}/{}", state.live_bomb_count(), state.stats.max_bombs)),
        ]),
        Line::from(vec![
            Span::styled("Enemies:    ", bold),
            Span::raw(state.enemies.len().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Exit:       ", bold),
            Span::raw(if state.goal_visible { "revealed" } else { "hidden" }),
        ]),
        Line::from(""),
        Line::from(Span::styled(LEGEND, Style::default().fg(Color::Gray))),
    ];

    let stats = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Player "))
        .wrap(Wrap { trim: false });

    f.render_widget(stats, area);
}

fn render_log(f: &mut Frame, area: Rect, app: &App) {
    let visible = usize::from(area.height.saturating_sub(2));
    let start = app.log.len().saturating_sub(visible);
    let lines: Vec<Line> = app.log[start..]
        .iter()
        .map(|entry| {
            if entry.starts_with('>') {
                Line::from(Span::styled(entry.as_str(), Style::default().fg(Color::Cyan)))
            } else {
                Line::from(entry.as_str())
            }
        })
        .collect();

    let log = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Messages "));

    f.render_widget(log, area);
}

fn render_input(f: &mut Frame, area: Rect, app: &App) {
    let hint = if app.session.state().status == GameStatus::Playing {
        " [←↑↓→] Move  [Space] Bomb  [.] Wait  [Enter] Submit  [Esc] Quit "
    } else {
        " Type start / restart  [Enter] Submit  [Esc] Quit "
    };

    let input = Paragraph::new(format!("> {}", app.input))
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title(hint));

    f.render_widget(input, area);
}

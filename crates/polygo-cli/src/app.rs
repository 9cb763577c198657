//! Terminal session driver.
//!
//! Keyboard input and countdown ticks are both funnelled into one channel.
//! The loop takes one message, hands it to the session, carries out the
//! returned commands and redraws before looking at the next message.

use std::error::Error;
use std::io::{self, Stdout};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as TermEvent};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use polygo_core::{Command, Config, Event, ExportStatus, Input, Session, SessionExporter};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use crate::keys;
use crate::render::{self, Theme};

/// How long the input thread blocks before checking whether the loop is gone.
const INPUT_POLL: Duration = Duration::from_millis(250);

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug)]
enum Message {
    Terminal(TermEvent),
    Tick,
    /// The input thread could not read the terminal and has stopped.
    InputFailed(io::Error),
}

/// Session input for one queued message. A dead input thread is fatal:
/// without it the operator cannot even quit.
fn to_session_input(message: Message) -> io::Result<Option<Input>> {
    match message {
        Message::Tick => Ok(Some(Input::Tick)),
        Message::Terminal(event) => Ok(keys::to_input(&event)),
        Message::InputFailed(e) => Err(e),
    }
}

pub async fn run(config: Config) -> Result<(), Box<dyn Error>> {
    let theme = Theme::from_config(&config.ui);
    let exporter = config.exporter();

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &theme, &exporter).await;
    restore_terminal(&mut terminal)?;

    result
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e);
    }
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn event_loop(
    terminal: &mut Tui,
    theme: &Theme,
    exporter: &SessionExporter,
) -> Result<(), Box<dyn Error>> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_input_reader(tx.clone());

    let mut session = Session::new();
    let mut ticker: Option<JoinHandle<()>> = None;
    info!(output = %exporter.path().display(), "session opened");

    loop {
        let view = session.view()?;
        let mut overflow = 0;
        terminal.draw(|frame| overflow = render::draw(frame, &view, theme))?;
        session.set_ledger_overflow(overflow);

        let Some(message) = rx.recv().await else {
            warn!("event channel closed");
            break;
        };

        let input = to_session_input(message).inspect_err(|e| {
            error!(error = %e, "terminal input lost");
        })?;
        let Some(input) = input else {
            continue;
        };

        let transition = session.handle(input).inspect_err(|e| {
            error!(error = %e, phase = ?session.phase(), "session state corrupted");
        })?;
        transition.events.iter().for_each(log_event);

        for command in transition.commands {
            match command {
                Command::StartTimer { interval } => {
                    if let Some(old) = ticker.replace(spawn_ticker(tx.clone(), interval)) {
                        old.abort();
                    }
                }
                Command::StopTimer => {
                    if let Some(handle) = ticker.take() {
                        handle.abort();
                    }
                }
                Command::Export(times) => {
                    session.export_with(exporter, &times)?;
                    match session.export_status() {
                        ExportStatus::Saved(path) => info!(path = %path.display(), "ideas saved"),
                        ExportStatus::Skipped => info!("no ideas captured, nothing written"),
                        ExportStatus::Failed(reason) => error!(%reason, "failed to save ideas"),
                        ExportStatus::Pending => {}
                    }
                }
                Command::Quit => {
                    info!(phase = ?session.phase(), "quit requested");
                    if let Some(handle) = ticker.take() {
                        handle.abort();
                    }
                    return Ok(());
                }
            }
        }
    }

    Ok(())
}

/// Forward terminal events from a plain thread; crossterm reads block.
fn spawn_input_reader(tx: UnboundedSender<Message>) {
    thread::spawn(move || {
        while !tx.is_closed() {
            match event::poll(INPUT_POLL) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if tx.send(Message::Terminal(event)).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "failed to read terminal event");
                        let _ = tx.send(Message::InputFailed(e));
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    warn!(error = %e, "failed to poll terminal");
                    let _ = tx.send(Message::InputFailed(e));
                    break;
                }
            }
        }
    });
}

fn spawn_ticker(tx: UnboundedSender<Message>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticks = tokio::time::interval(interval);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticks.tick().await;
        loop {
            ticks.tick().await;
            if tx.send(Message::Tick).is_err() {
                break;
            }
        }
    })
}

fn log_event(event: &Event) {
    let json = serde_json::to_string(event).unwrap_or_default();
    debug!(kind = event.kind(), %json);
}

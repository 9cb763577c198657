//! Phase controller.
//!
//! A [`Session`] owns every piece of state of one brainstorming run and is
//! mutated by exactly one [`Input`] at a time. Each call to
//! [`Session::handle`] returns a [`Transition`]: the events that happened and
//! the commands the caller has to carry out (start the ticker, write the
//! document, quit). The session itself never touches the terminal, a clock
//! source or the filesystem.
//!
//! ## Phases
//!
//! ```text
//! SettingMinutes <-> SettingSeconds -> Capturing -> Ranking -> Stored
//!                                          (timeout)   (all ranked)
//! ```

mod view;

pub use view::{Screen, StoredMessage, ViewModel, HEADER, RANKING_INTRO};

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::events::Event;
use crate::export::{ExportOutcome, SessionExporter, SessionTimestamps};
use crate::input::{CaptureField, DurationInput, Scroller};
use crate::ledger::IdeaLedger;
use crate::ranking::{Bucket, Ranking};
use crate::timer::{Countdown, TICK_INTERVAL};

/// Lines moved by PageUp/PageDown in the ledger panel.
const PAGE_LINES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    SettingMinutes,
    SettingSeconds,
    Capturing,
    Ranking,
    /// Terminal. Only the quit signal does anything here.
    Stored,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::SettingMinutes => "Setting minutes",
            Phase::SettingSeconds => "Setting seconds",
            Phase::Capturing => "Capturing ideas",
            Phase::Ranking => "Ranking ideas",
            Phase::Stored => "Stored",
        }
    }
}

/// One unit of operator or timer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Submit (Enter).
    Confirm,
    /// Move on (Tab).
    Advance,
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Backspace,
    Char(char),
    /// One countdown interval has passed.
    Tick,
    Quit,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Begin feeding `Input::Tick` every `interval`.
    StartTimer { interval: Duration },
    /// The countdown has expired; ticks are no longer needed.
    StopTimer,
    /// Write the session document.
    Export(SessionTimestamps),
    Quit,
}

#[derive(Debug, Default)]
pub struct Transition {
    pub events: Vec<Event>,
    pub commands: Vec<Command>,
}

impl Transition {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.commands.is_empty()
    }

    pub fn export_request(&self) -> Option<&SessionTimestamps> {
        self.commands.iter().find_map(|command| match command {
            Command::Export(times) => Some(times),
            _ => None,
        })
    }

    pub fn quits(&self) -> bool {
        self.commands.contains(&Command::Quit)
    }
}

/// What happened to the session document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    /// Not closed yet, or closed and waiting for the write.
    Pending,
    Saved(PathBuf),
    /// Nothing was captured.
    Skipped,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
    duration_input: DurationInput,
    capture: CaptureField,
    ledger_view: Scroller,
    countdown: Option<Countdown>,
    ledger: IdeaLedger,
    ranking: Ranking,
    started_at: Option<DateTime<Local>>,
    closed_at: Option<DateTime<Local>>,
    export_status: ExportStatus,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: Phase::SettingMinutes,
            duration_input: DurationInput::new(),
            capture: CaptureField::default(),
            ledger_view: Scroller::default(),
            countdown: None,
            ledger: IdeaLedger::new(),
            ranking: Ranking::new(),
            started_at: None,
            closed_at: None,
            export_status: ExportStatus::Pending,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ledger(&self) -> &IdeaLedger {
        &self.ledger
    }

    pub fn ranking(&self) -> &Ranking {
        &self.ranking
    }

    pub fn duration_input(&self) -> &DurationInput {
        &self.duration_input
    }

    pub fn capture(&self) -> &CaptureField {
        &self.capture
    }

    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    pub fn timer_running(&self) -> bool {
        self.countdown.as_ref().is_some_and(Countdown::running)
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }

    pub fn closed_at(&self) -> Option<DateTime<Local>> {
        self.closed_at
    }

    pub fn export_status(&self) -> &ExportStatus {
        &self.export_status
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Apply one input.
    ///
    /// # Errors
    ///
    /// Only on a broken ranking invariant, which the phase rules prevent.
    pub fn handle(&mut self, input: Input) -> Result<Transition> {
        let mut transition = Transition::default();
        match input {
            Input::Quit => transition.commands.push(Command::Quit),
            Input::Tick => self.on_tick(&mut transition),
            _ => match self.phase {
                Phase::SettingMinutes => self.on_setting_minutes(input),
                Phase::SettingSeconds => self.on_setting_seconds(input, &mut transition),
                Phase::Capturing => self.on_capturing(input, &mut transition),
                Phase::Ranking => self.on_ranking(input, &mut transition)?,
                Phase::Stored => {}
            },
        }
        Ok(transition)
    }

    /// Record how the write requested by `Command::Export` went.
    ///
    /// Persistence failures become a visible status. Invariant violations
    /// are handed back to the caller.
    pub fn record_export(&mut self, result: Result<ExportOutcome>) -> Result<()> {
        self.export_status = match result {
            Ok(ExportOutcome::Written { path, .. }) => ExportStatus::Saved(path),
            Ok(ExportOutcome::Skipped) => ExportStatus::Skipped,
            Err(e) if e.is_invariant_violation() => return Err(e),
            Err(e) => ExportStatus::Failed(e.to_string()),
        };
        Ok(())
    }

    /// Tell the session how many lines of the ledger panel do not fit on
    /// screen. Up/PageUp never scroll further than this.
    pub fn set_ledger_overflow(&mut self, lines: usize) {
        self.ledger_view.set_overflow(lines);
    }

    /// Run `exporter` for a closed session and record the outcome.
    pub fn export_with(&mut self, exporter: &SessionExporter, times: &SessionTimestamps) -> Result<()> {
        let result = exporter.export(&self.ledger, &self.ranking, times);
        self.record_export(result)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn on_tick(&mut self, transition: &mut Transition) {
        // Ticks reach the countdown in every phase; only the expiry matters.
        let Some(event) = self.countdown.as_mut().and_then(Countdown::tick) else {
            return;
        };
        let expired = matches!(event, Event::TimerExpired { .. });
        transition.events.push(event);
        if expired {
            transition.commands.push(Command::StopTimer);
            if self.phase == Phase::Capturing {
                self.begin_ranking(transition);
            }
        }
    }

    fn on_setting_minutes(&mut self, input: Input) {
        match input {
            Input::Confirm | Input::Advance => {
                self.duration_input.focus_seconds();
                self.phase = Phase::SettingSeconds;
            }
            Input::Char(c) => self.duration_input.push(c),
            Input::Backspace => self.duration_input.backspace(),
            _ => {}
        }
    }

    fn on_setting_seconds(&mut self, input: Input, transition: &mut Transition) {
        match input {
            Input::Confirm => self.begin_capture(transition),
            Input::Advance => {
                self.duration_input.focus_minutes();
                self.phase = Phase::SettingMinutes;
            }
            Input::Char(c) => self.duration_input.push(c),
            Input::Backspace => self.duration_input.backspace(),
            _ => {}
        }
    }

    fn begin_capture(&mut self, transition: &mut Transition) {
        self.duration_input.blur();

        let mut countdown = Countdown::new(self.duration_input.duration(), TICK_INTERVAL);
        transition.events.extend(countdown.start());
        transition.commands.push(Command::StartTimer {
            interval: countdown.interval(),
        });
        self.countdown = Some(countdown);

        self.started_at = Some(Local::now());
        self.capture.focus();
        self.phase = Phase::Capturing;
    }

    fn on_capturing(&mut self, input: Input, transition: &mut Transition) {
        match input {
            Input::Advance => self.commit_capture(transition),
            Input::Confirm => self.capture.newline(),
            Input::Char(c) => self.capture.push(c),
            Input::Backspace => self.capture.backspace(),
            Input::Up => self.ledger_view.up(1),
            Input::Down => self.ledger_view.down(1),
            Input::PageUp => self.ledger_view.up(PAGE_LINES),
            Input::PageDown => self.ledger_view.down(PAGE_LINES),
            _ => {}
        }
    }

    fn commit_capture(&mut self, transition: &mut Transition) {
        let Some(text) = self.capture.committable().map(str::to_owned) else {
            return;
        };
        let index = self.ledger.add(&text);
        self.capture.reset();
        self.ledger_view.to_bottom();
        transition.events.push(Event::IdeaCaptured {
            index,
            at: Utc::now(),
        });
    }

    fn begin_ranking(&mut self, transition: &mut Transition) {
        let dropped = self.capture.reset();
        self.capture.blur();
        if dropped > 0 {
            transition.events.push(Event::CaptureDiscarded {
                chars: dropped,
                at: Utc::now(),
            });
        }

        self.phase = Phase::Ranking;
        transition.events.push(Event::RankingStarted {
            ideas: self.ledger.len(),
            at: Utc::now(),
        });

        if self.ranking.is_complete(&self.ledger) {
            self.close(transition);
        }
    }

    fn on_ranking(&mut self, input: Input, transition: &mut Transition) -> Result<()> {
        let bucket = match input {
            Input::Left => Bucket::Favorite,
            Input::Right => Bucket::NeedsPolishing,
            _ => return Ok(()),
        };

        let index = self.ranking.classify(&self.ledger, bucket)?;
        transition.events.push(Event::IdeaRanked {
            index,
            bucket,
            at: Utc::now(),
        });

        if self.ranking.is_complete(&self.ledger) {
            self.close(transition);
        }
        Ok(())
    }

    fn close(&mut self, transition: &mut Transition) {
        let closed_at = Local::now();
        self.closed_at = Some(closed_at);
        self.phase = Phase::Stored;

        let times = SessionTimestamps {
            started_at: self.started_at.unwrap_or(closed_at),
            closed_at,
        };
        transition.events.push(Event::SessionClosed {
            ideas: self.ledger.len(),
            favorites: self.ranking.indices(Bucket::Favorite).len(),
            needs_polishing: self.ranking.indices(Bucket::NeedsPolishing).len(),
            at: Utc::now(),
        });
        transition.commands.push(Command::Export(times));
    }
}

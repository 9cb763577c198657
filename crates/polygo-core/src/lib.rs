//! # Polygo Core Library
//!
//! This library holds everything a Polygo brainstorming session does apart
//! from drawing it. A session runs through four stages: set a countdown,
//! capture ideas until it expires, sort every idea into "favorites" or
//! "needs polishing", then write the result to `IDEAS.md`.
//!
//! ## Architecture
//!
//! - **Session**: the phase controller. One owned struct, one input at a
//!   time, returning events and commands instead of performing side effects
//! - **Countdown**: a tick-driven timer that expires exactly once
//! - **Ledger / Ranking**: append-only idea store and the single-pass
//!   classifier over it
//! - **Export**: renders and writes the session document
//! - **Storage**: TOML configuration under `~/.config/polygo`
//!
//! ## Key Components
//!
//! - [`Session`]: Phase state machine
//! - [`Countdown`]: Countdown timer
//! - [`IdeaLedger`]: Captured ideas
//! - [`Ranking`]: Favorites / needs-polishing classification
//! - [`SessionExporter`]: Session document writer
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod export;
pub mod input;
pub mod ledger;
pub mod ranking;
pub mod session;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError};
pub use events::Event;
pub use export::{ExportOutcome, SessionExporter, SessionTimestamps};
pub use input::{parse_duration, DurationField};
pub use ledger::IdeaLedger;
pub use ranking::{Bucket, Ranking};
pub use session::{Command, ExportStatus, Input, Phase, Screen, Session, StoredMessage, Transition, ViewModel};
pub use storage::Config;
pub use timer::{Countdown, CountdownState, TICK_INTERVAL};

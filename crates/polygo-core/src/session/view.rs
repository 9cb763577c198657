//! Renderable content of a session.
//!
//! The renderer gets plain text blocks per phase and decides on its own how
//! to lay them out and style them.

use crate::error::Result;
use crate::input::{DurationField, Scroller};
use crate::ranking::Bucket;

use super::{ExportStatus, Phase, Session};

pub const HEADER: &str = "//// Polygo /////////////////////////////";

pub const RANKING_INTRO: &[&str] = &[
    "Time's up!",
    "Let's sort ideas ✨",
    "Swipe left for the fav ones, right for the nahs.",
];

const SETUP_HELP: &[&str] = &[
    "[⇄] TAB - jump between minutes and seconds",
    "[⏎] ENTER - start a session",
    "[Ctrl+C] - exit",
];
const CAPTURE_HELP: &[&str] = &["[⇄] TAB - store an idea"];
const RANKING_HELP: &[&str] = &[
    "[←] LEFT - like",
    "[→] RIGHT - need polishing",
    "[Ctrl+C] - exit",
];
const STORED_HELP: &[&str] = &["[Ctrl+C] - exit"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub header: &'static str,
    pub phase_label: &'static str,
    pub screen: Screen,
    pub help: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Setup {
        minutes: String,
        seconds: String,
        focused: Option<DurationField>,
    },
    Capture {
        time_remaining: String,
        capture: String,
        ledger_so_far: String,
        ledger_scroll: Scroller,
    },
    Ranking {
        favorites: String,
        current: String,
        needs_polishing: String,
    },
    Stored(StoredMessage),
}

/// Final screen content. A failed write never looks like a saved one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredMessage {
    /// Still waiting on the write.
    Saving,
    Saved { file: String },
    NothingToSave,
    Failed { reason: String },
}

impl StoredMessage {
    pub fn title(&self) -> &'static str {
        match self {
            StoredMessage::Saving => "SAVING",
            StoredMessage::Saved { .. } | StoredMessage::NothingToSave => "DONE",
            StoredMessage::Failed { .. } => "NOT SAVED",
        }
    }

    pub fn body(&self) -> String {
        match self {
            StoredMessage::Saving => "Writing your ideas...".to_string(),
            StoredMessage::Saved { file } => format!("File `{file}` is saved!"),
            StoredMessage::NothingToSave => "No ideas were captured, nothing to save.".to_string(),
            StoredMessage::Failed { reason } => format!("Could not save your ideas: {reason}"),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, StoredMessage::Failed { .. })
    }
}

impl Session {
    /// Content for the current phase.
    ///
    /// # Errors
    ///
    /// Only when a bucket refers to an index the ledger does not have.
    pub fn view(&self) -> Result<ViewModel> {
        let (screen, help) = match self.phase {
            Phase::SettingMinutes | Phase::SettingSeconds => (
                Screen::Setup {
                    minutes: self.duration_input.field(DurationField::Minutes).display().to_string(),
                    seconds: self.duration_input.field(DurationField::Seconds).display().to_string(),
                    focused: self.duration_input.focused(),
                },
                SETUP_HELP,
            ),
            Phase::Capturing => (
                Screen::Capture {
                    time_remaining: self
                        .countdown
                        .as_ref()
                        .map(|c| c.display())
                        .unwrap_or_default(),
                    capture: self.capture.value().to_string(),
                    ledger_so_far: self.ledger.joined(),
                    ledger_scroll: self.ledger_view,
                },
                CAPTURE_HELP,
            ),
            Phase::Ranking => (
                Screen::Ranking {
                    favorites: self.bucket_text(Bucket::Favorite)?,
                    current: self.ranking.current(&self.ledger).unwrap_or_default().to_string(),
                    needs_polishing: self.bucket_text(Bucket::NeedsPolishing)?,
                },
                RANKING_HELP,
            ),
            Phase::Stored => (Screen::Stored(self.stored_message()), STORED_HELP),
        };

        Ok(ViewModel {
            header: HEADER,
            phase_label: self.phase.label(),
            screen,
            help,
        })
    }

    fn bucket_text(&self, bucket: Bucket) -> Result<String> {
        Ok(self.ranking.bucket_contents(&self.ledger, bucket)?.join("---"))
    }

    fn stored_message(&self) -> StoredMessage {
        match &self.export_status {
            ExportStatus::Pending => StoredMessage::Saving,
            ExportStatus::Saved(path) => StoredMessage::Saved {
                file: path.display().to_string(),
            },
            ExportStatus::Skipped => StoredMessage::NothingToSave,
            ExportStatus::Failed(reason) => StoredMessage::Failed {
                reason: reason.clone(),
            },
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ranking::Bucket;

/// Every state change in a session produces an Event.
/// The CLI logs them; nothing in the core depends on them being consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    TimerTicked {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// Emitted exactly once per countdown.
    TimerExpired {
        at: DateTime<Utc>,
    },
    IdeaCaptured {
        index: usize,
        at: DateTime<Utc>,
    },
    /// Uncommitted capture text thrown away by the timeout.
    CaptureDiscarded {
        chars: usize,
        at: DateTime<Utc>,
    },
    RankingStarted {
        ideas: usize,
        at: DateTime<Utc>,
    },
    IdeaRanked {
        index: usize,
        bucket: Bucket,
        at: DateTime<Utc>,
    },
    SessionClosed {
        ideas: usize,
        favorites: usize,
        needs_polishing: usize,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Short name used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::TimerStarted { .. } => "timer_started",
            Event::TimerTicked { .. } => "timer_ticked",
            Event::TimerExpired { .. } => "timer_expired",
            Event::IdeaCaptured { .. } => "idea_captured",
            Event::CaptureDiscarded { .. } => "capture_discarded",
            Event::RankingStarted { .. } => "ranking_started",
            Event::IdeaRanked { .. } => "idea_ranked",
            Event::SessionClosed { .. } => "session_closed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let event = Event::IdeaRanked {
            index: 2,
            bucket: Bucket::NeedsPolishing,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "IdeaRanked");
        assert_eq!(json["index"], 2);
        assert_eq!(json["bucket"], "needs_polishing");
    }
}

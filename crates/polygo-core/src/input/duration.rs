use std::time::Duration;

use super::digit_field::DigitField;

/// Largest duration the two-digit fields can express (99:99).
pub const MAX_DURATION: Duration = Duration::from_secs(99 * 60 + 99);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationField {
    Minutes,
    Seconds,
}

/// The minutes and seconds fields of the setup screen.
#[derive(Debug, Clone, Default)]
pub struct DurationInput {
    minutes: DigitField,
    seconds: DigitField,
}

impl DurationInput {
    pub fn new() -> Self {
        let mut input = Self::default();
        input.focus_minutes();
        input
    }

    pub fn focus_minutes(&mut self) {
        self.seconds.blur();
        self.minutes.focus();
    }

    pub fn focus_seconds(&mut self) {
        self.minutes.blur();
        self.seconds.focus();
    }

    pub fn blur(&mut self) {
        self.minutes.blur();
        self.seconds.blur();
    }

    pub fn focused(&self) -> Option<DurationField> {
        if self.minutes.focused() {
            Some(DurationField::Minutes)
        } else if self.seconds.focused() {
            Some(DurationField::Seconds)
        } else {
            None
        }
    }

    pub fn field(&self, which: DurationField) -> &DigitField {
        match which {
            DurationField::Minutes => &self.minutes,
            DurationField::Seconds => &self.seconds,
        }
    }

    pub fn value(&self, which: DurationField) -> &str {
        self.field(which).value()
    }

    /// Route a typed character to whichever field has focus.
    pub fn push(&mut self, c: char) {
        if let Some(field) = self.focused_mut() {
            field.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_mut() {
            field.backspace();
        }
    }

    pub fn duration(&self) -> Duration {
        parse_duration(self.minutes.value(), self.seconds.value())
    }

    fn focused_mut(&mut self) -> Option<&mut DigitField> {
        match self.focused()? {
            DurationField::Minutes => Some(&mut self.minutes),
            DurationField::Seconds => Some(&mut self.seconds),
        }
    }
}

/// Text that is not a number counts as zero.
pub fn parse_field(text: &str) -> u64 {
    text.parse::<u64>().unwrap_or(0)
}

pub fn parse_duration(minutes: &str, seconds: &str) -> Duration {
    let total = parse_field(seconds).saturating_add(parse_field(minutes).saturating_mul(60));
    Duration::from_secs(total)
}

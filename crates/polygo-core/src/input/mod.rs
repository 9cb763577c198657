//! Operator-editable fields.
//!
//! None of these fields decide their own focus; the session moves focus
//! between them as the phase changes.

mod capture;
mod digit_field;
mod duration;
mod scroll;

pub use capture::CaptureField;
pub use digit_field::{DigitField, FIELD_WIDTH};
pub use duration::{parse_duration, parse_field, DurationField, DurationInput, MAX_DURATION};
pub use scroll::Scroller;

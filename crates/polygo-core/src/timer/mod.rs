mod countdown;

pub use countdown::{format_remaining, Countdown, CountdownState, TICK_INTERVAL};

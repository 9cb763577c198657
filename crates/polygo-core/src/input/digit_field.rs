/// Character limit of the minutes and seconds fields.
pub const FIELD_WIDTH: usize = 2;

const PLACEHOLDER: &str = "00";

/// A single-line field that only takes ASCII digits, up to a fixed width.
///
/// Input past the width is dropped rather than rejected with an error.
#[derive(Debug, Clone)]
pub struct DigitField {
    value: String,
    width: usize,
    focused: bool,
}

impl DigitField {
    pub fn new(width: usize) -> Self {
        Self {
            value: String::with_capacity(width),
            width,
            focused: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Returns `true` when the character was taken.
    pub fn push(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() || self.value.len() >= self.width {
            return false;
        }
        self.value.push(c);
        true
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    /// What the renderer shows: the value, or the `00` placeholder.
    pub fn display(&self) -> &str {
        if self.value.is_empty() {
            PLACEHOLDER
        } else {
            &self.value
        }
    }
}

impl Default for DigitField {
    fn default() -> Self {
        Self::new(FIELD_WIDTH)
    }
}

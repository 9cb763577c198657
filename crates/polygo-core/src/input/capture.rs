/// Multi-line free-text field used while the countdown runs.
#[derive(Debug, Clone, Default)]
pub struct CaptureField {
    value: String,
    focused: bool,
}

impl CaptureField {
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

    pub fn push(&mut self, c: char) {
        if !c.is_control() {
            self.value.push(c);
        }
    }

    pub fn newline(&mut self) {
        self.value.push('\n');
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    /// Trimmed text ready to become an idea, or `None` if there is nothing
    /// but whitespace.
    pub fn committable(&self) -> Option<&str> {
        let trimmed = self.value.trim();
        let trimmed = trimmed.strip_suffix('\n').unwrap_or(trimmed);
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    /// Empty the field. Returns the number of characters dropped.
    pub fn reset(&mut self) -> usize {
        let dropped = self.value.chars().count();
        self.value.clear();
        dropped
    }
}

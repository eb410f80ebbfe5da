/// The not-yet-saved free-text buffer
///
/// Transient by design: scoped to the running editing session, reset to
/// empty after a successful save or an explicit clear, never persisted.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    text: String,
}

impl Draft {
    /// Create a new empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole buffer (the "load entry into draft" path)
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append a line to the buffer
    pub fn push_line(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
    }

    /// Reset the buffer to empty
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// The buffer with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// True when the buffer is empty after trimming
    ///
    /// A whitespace-only draft counts as empty: it can neither be saved nor
    /// meaningfully cleared.
    pub fn is_empty(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Raw buffer contents
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

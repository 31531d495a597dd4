//! Screen buffer types
//!
//! Provides a character-based screen buffer for text-mode displays.

use heapless::String;

/// Number of character rows on the display
pub const SCREEN_ROWS: usize = 4;

/// Number of character columns on the display
pub const SCREEN_COLS: usize = 20;

/// Maximum characters per line
pub const LINE_LEN: usize = SCREEN_COLS;

/// Screen buffer for text-mode displays
///
/// Holds one string per display row. Content is ASCII; anything longer
/// than a row is cut at the row width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    /// Current display content
    lines: [String<LINE_LEN>; SCREEN_ROWS],
    /// Whether the screen changed since the last render
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            dirty: true,
        }
    }

    /// Clear the entire screen
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.dirty = true;
    }

    /// Set the content of a specific row
    ///
    /// Non-ASCII characters are replaced with `?` so the byte count always
    /// equals the column count.
    pub fn set_line(&mut self, row: usize, text: &str) {
        if let Some(line) = self.lines.get_mut(row) {
            line.clear();
            for ch in text.chars().take(LINE_LEN) {
                let ch = if ch.is_ascii() { ch } else { '?' };
                // Cannot overflow: at most LINE_LEN single-byte chars
                let _ = line.push(ch);
            }
            self.dirty = true;
        }
    }

    /// Get the content of a specific row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Get all lines as an iterator
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }

    /// Every line right-padded with spaces to exactly `SCREEN_COLS`
    pub fn padded_lines(&self) -> [String<LINE_LEN>; SCREEN_ROWS] {
        core::array::from_fn(|row| {
            let mut line = self.lines[row].clone();
            while line.len() < LINE_LEN {
                let _ = line.push(' ');
            }
            line
        })
    }

    /// Take over the content of `next`
    ///
    /// Only marks the screen dirty when some line actually changed, so an
    /// unchanged layout is not redrawn.
    pub fn update(&mut self, next: Screen) {
        if self.lines != next.lines {
            self.lines = next.lines;
            self.dirty = true;
        }
    }
}

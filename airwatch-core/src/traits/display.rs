//! Character display trait

use core::fmt;

/// Number of lines on the character display
pub const DISPLAY_LINES: usize = 4;

/// Errors that can occur with display communication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError<E> {
    /// Bus transaction failed; the remaining bytes were not sent
    Bus(E),
}

impl<E> From<E> for DisplayError<E> {
    fn from(e: E) -> Self {
        DisplayError::Bus(e)
    }
}

impl<E: fmt::Display> fmt::Display for DisplayError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::Bus(e) => write!(f, "display bus error: {}", e),
        }
    }
}

/// Trait for streamed character displays
///
/// The display is a dumb terminal: text layout (padding, truncation) is
/// the caller's job. Lines are sent back to back, so each line must already
/// be exactly one display row wide.
pub trait CharacterDisplay {
    /// Bus error type
    type Error;

    /// Power-up wait, then clear the screen and home the cursor
    fn init(&mut self) -> Result<(), DisplayError<Self::Error>>;

    /// Clear the screen and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError<Self::Error>>;

    /// Stream text at the cursor
    fn write_str(&mut self, text: &str) -> Result<(), DisplayError<Self::Error>>;

    /// Clear, then stream all lines in order
    fn render(&mut self, lines: &[&str; DISPLAY_LINES]) -> Result<(), DisplayError<Self::Error>> {
        self.clear()?;
        for line in lines {
            self.write_str(line)?;
        }
        Ok(())
    }
}

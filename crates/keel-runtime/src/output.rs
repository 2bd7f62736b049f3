//! Output plumbing
//!
//! Program output goes through a shared writer so embedders and tests can
//! redirect it; new machines default to stdout. Fault reports are colored
//! with termcolor and respect NO_COLOR.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use termcolor::ColorChoice;

/// Shared output writer for program output
///
/// Shared so a caller can keep a handle to a capture buffer while the
/// machine writes into it.
pub type OutputWriter = Arc<Mutex<dyn Write + Send>>;

/// Writer backed by stdout (the default for new machines)
pub fn stdout_writer() -> OutputWriter {
    Arc::new(Mutex::new(io::stdout()))
}

/// Token separator emitted after each output instruction
///
/// Defaults to [`Separator::None`]: no implicit separator, callers
/// control formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    /// No separator
    #[default]
    None,
    /// Single ASCII space
    Space,
    /// Line feed
    Newline,
}

impl Separator {
    /// Bytes to emit after an output instruction
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            Separator::None => b"",
            Separator::Space => b" ",
            Separator::Newline => b"\n",
        }
    }
}

/// Color mode for fault reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Always use colors
    Always,
    /// Never use colors
    Never,
    /// Auto-detect terminal capabilities
    Auto,
}

impl ColorMode {
    /// Resolve to a termcolor ColorChoice
    pub fn to_color_choice(self) -> ColorChoice {
        // Always respect NO_COLOR (https://no-color.org)
        if std::env::var("NO_COLOR").is_ok() {
            return ColorChoice::Never;
        }
        match self {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto => ColorChoice::Auto,
        }
    }
}

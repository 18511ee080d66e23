//! ANSI color formatting that only reaches for escape codes when the
//! destination is an interactive terminal.

pub mod color;
pub mod formatter;
pub mod terminal;

pub use color::Color;
pub use formatter::Formatter;
pub use terminal::{ColorChoice, Output, TerminalDetector};

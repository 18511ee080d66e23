use std::fs::File;
use std::io::{self, Cursor, IsTerminal, Write};

/// A writable destination that can tell whether it is an interactive terminal.
pub trait Output: Write {
    fn is_terminal(&self) -> bool;
}

impl Output for io::Stdout {
    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl Output for io::StdoutLock<'_> {
    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl Output for io::Stderr {
    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl Output for io::StderrLock<'_> {
    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl Output for File {
    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl Output for Vec<u8> {
    fn is_terminal(&self) -> bool {
        false
    }
}

impl<T> Output for Cursor<T>
where
    Cursor<T>: Write,
{
    fn is_terminal(&self) -> bool {
        false
    }
}

impl<W: Output + ?Sized> Output for &mut W {
    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }
}

/// Decides whether escape codes should be written to a destination.
pub trait TerminalDetector {
    fn is_terminal(&self, out: &dyn Output) -> bool;
}

impl<F> TerminalDetector for F
where
    F: Fn(&dyn Output) -> bool,
{
    fn is_terminal(&self, out: &dyn Output) -> bool {
        self(out)
    }
}

/// User preference for colored output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Colorize if the destination is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl TerminalDetector for ColorChoice {
    fn is_terminal(&self, out: &dyn Output) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            // Respect NO_COLOR standard (https://no-color.org/)
            ColorChoice::Auto => std::env::var_os("NO_COLOR").is_none() && out.is_terminal(),
        }
    }
}

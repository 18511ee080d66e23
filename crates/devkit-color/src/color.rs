use std::fmt::{self, Display, Write as _};

const RESET: &str = "\x1b[0m";

/// A foreground color with a fixed SGR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightPurple,
}

impl Color {
    pub fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Purple => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::LightRed => 91,
            Color::LightGreen => 92,
            Color::LightYellow => 93,
            Color::LightBlue => 94,
            Color::LightPurple => 95,
        }
    }

    /// Wraps `text` in this color's escape sequence, regardless of where the
    /// string ends up.
    pub fn sprint(self, text: impl Display) -> String {
        format!("\x1b[{}m{}{}", self.code(), text, RESET)
    }

    /// Like [`Color::sprint`] but takes `format_args!` output.
    pub fn sprintf(self, args: fmt::Arguments<'_>) -> String {
        self.sprint(args)
    }

    /// Joins the operands with single spaces, wraps them, and terminates the
    /// line after the reset code.
    pub fn sprintln(self, operands: &[&dyn Display]) -> String {
        let mut line = self.sprint(join_operands(operands));
        line.push('\n');
        line
    }
}

pub(crate) fn join_operands(operands: &[&dyn Display]) -> String {
    let mut joined = String::new();
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            joined.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(joined, "{}", operand);
    }
    joined
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

use crate::color::{join_operands, Color};
use crate::terminal::{Output, TerminalDetector};
use std::fmt::{self, Display};
use std::io;

/// Writes colored text to streams, consulting a [`TerminalDetector`] to decide
/// whether escape codes are emitted at all.
#[derive(Debug, Clone)]
pub struct Formatter<D> {
    detector: D,
}

impl<D: TerminalDetector> Formatter<D> {
    pub fn new(detector: D) -> Self {
        Self { detector }
    }

    pub fn is_terminal(&self, out: &dyn Output) -> bool {
        self.detector.is_terminal(out)
    }

    /// Writes `text`, wrapped in `color` only on a terminal. Returns the
    /// number of bytes written.
    pub fn fprint(
        &self,
        out: &mut dyn Output,
        color: Color,
        text: impl Display,
    ) -> io::Result<usize> {
        let s = if self.is_terminal(out) {
            color.sprint(text)
        } else {
            text.to_string()
        };
        write_str(out, &s)
    }

    pub fn fprintf(
        &self,
        out: &mut dyn Output,
        color: Color,
        args: fmt::Arguments<'_>,
    ) -> io::Result<usize> {
        self.fprint(out, color, args)
    }

    /// Space-joins `operands` and ends the line. On a terminal the newline
    /// follows the reset code.
    pub fn fprintln(
        &self,
        out: &mut dyn Output,
        color: Color,
        operands: &[&dyn Display],
    ) -> io::Result<usize> {
        let s = if self.is_terminal(out) {
            color.sprintln(operands)
        } else {
            let mut line = join_operands(operands);
            line.push('\n');
            line
        };
        write_str(out, &s)
    }
}

fn write_str(out: &mut dyn Output, s: &str) -> io::Result<usize> {
    out.write_all(s.as_bytes())?;
    Ok(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::ColorChoice;
    use std::io::Write;

    fn tty() -> Formatter<ColorChoice> {
        Formatter::new(ColorChoice::Always)
    }

    fn no_tty() -> Formatter<ColorChoice> {
        Formatter::new(ColorChoice::Never)
    }

    fn compare_text(expected: &str, actual: &[u8], expected_n: usize, result: io::Result<usize>) {
        let n = result.expect("did not expect error when formatting text");
        assert_eq!(n, expected_n, "unexpected byte count");
        assert_eq!(String::from_utf8_lossy(actual), expected);
    }

    #[test]
    fn fprint_on_terminal() {
        let mut b: Vec<u8> = Vec::new();
        let n = tty().fprint(&mut b, Color::Green, "It's not easy being");
        compare_text("\x1b[32mIt's not easy being\x1b[0m", &b, 28, n);
    }

    #[test]
    fn fprintln_on_terminal() {
        let mut b: Vec<u8> = Vec::new();
        let n = tty().fprintln(&mut b, Color::Green, &[&"2", &"less", &"chars!"]);
        compare_text("\x1b[32m2 less chars!\x1b[0m\n", &b, 23, n);
    }

    #[test]
    fn fprintf_on_terminal() {
        let mut b: Vec<u8> = Vec::new();
        let n = tty().fprintf(
            &mut b,
            Color::Green,
            format_args!("It's been {} {}", 1, "week"),
        );
        compare_text("\x1b[32mIt's been 1 week\x1b[0m", &b, 25, n);
    }

    #[test]
    fn fprint_without_terminal() {
        let mut b: Vec<u8> = Vec::new();
        let n = no_tty().fprint(&mut b, Color::Green, "It's not easy being");
        compare_text("It's not easy being", &b, 19, n);
    }

    #[test]
    fn fprintln_without_terminal() {
        let mut b: Vec<u8> = Vec::new();
        let n = no_tty().fprintln(&mut b, Color::Green, &[&"2", &"less", &"chars!"]);
        compare_text("2 less chars!\n", &b, 14, n);
    }

    #[test]
    fn fprintf_without_terminal() {
        let mut b: Vec<u8> = Vec::new();
        let n = no_tty().fprintf(
            &mut b,
            Color::Green,
            format_args!("It's been {} {}", 1, "week"),
        );
        compare_text("It's been 1 week", &b, 16, n);
    }

    #[test]
    fn terminal_output_matches_sprint() {
        let mut b: Vec<u8> = Vec::new();
        tty().fprint(&mut b, Color::Cyan, "same").unwrap();
        assert_eq!(String::from_utf8(b).unwrap(), Color::Cyan.sprint("same"));
    }

    #[test]
    fn injected_detector_is_consulted() {
        let formatter = Formatter::new(|out: &dyn Output| !out.is_terminal());
        let mut b: Vec<u8> = Vec::new();
        formatter.fprint(&mut b, Color::Red, "x").unwrap();
        assert_eq!(b, b"\x1b[31mx\x1b[0m");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Output for BrokenPipe {
        fn is_terminal(&self) -> bool {
            true
        }
    }

    #[test]
    fn write_errors_propagate_unchanged() {
        let err = tty().fprint(&mut BrokenPipe, Color::Red, "lost").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(err.to_string(), "closed");
    }
}

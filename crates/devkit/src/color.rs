use crate::cli::ColorChoice;
use std::io::IsTerminal;

/// Initialize color mode based on CLI choice and environment, returning the
/// detector used for formatted stdout output
pub fn init(choice: ColorChoice) -> devkit_color::ColorChoice {
    // `colored` only styles diagnostics, which go to stderr
    colored::control::set_override(stderr_colored(choice));

    match choice {
        ColorChoice::Always => devkit_color::ColorChoice::Always,
        ColorChoice::Never => devkit_color::ColorChoice::Never,
        ColorChoice::Auto => devkit_color::ColorChoice::Auto,
    }
}

pub fn stderr_colored(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            // Respect NO_COLOR standard (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                false
            } else {
                std::io::stderr().is_terminal()
            }
        }
    }
}

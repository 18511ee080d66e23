use colored::Colorize;

pub fn output_error(err: &anyhow::Error) {
    eprintln!("{}: {:#}", "Error".red().bold(), err);
}

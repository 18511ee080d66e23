use std::io;

/// Opens a URL for the user.
pub trait Launcher {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Launches the user's default web browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl Launcher for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        open::that(url)
    }
}

impl<F> Launcher for F
where
    F: Fn(&str) -> io::Result<()>,
{
    fn open(&self, url: &str) -> io::Result<()> {
        self(url)
    }
}

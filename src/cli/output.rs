//! Colored terminal output for task progress.
//!
//! Everything goes to stdout except errors, which go to stderr and ignore
//! `--quiet`.

use std::io::{self, Write};
use termcolor::{Buffer, BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

fn spec(fg: Option<Color>, bold: bool) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(fg).set_bold(bold);
    spec
}

/// Writes `<marker> <message>` with the marker and message in their own colors
fn marked_line(
    buffer: &mut Buffer,
    marker: &str,
    marker_spec: &ColorSpec,
    message: &str,
    message_spec: Option<&ColorSpec>,
) -> io::Result<()> {
    buffer.set_color(marker_spec)?;
    write!(buffer, "{}", marker)?;
    buffer.reset()?;
    if let Some(message_spec) = message_spec {
        buffer.set_color(message_spec)?;
    }
    writeln!(buffer, " {}", message)?;
    buffer.reset()
}

/// Progress and diagnostic printer honoring `--verbose` and `--quiet`
#[derive(Debug)]
pub struct OutputManager {
    stdout: BufferWriter,
    verbose: bool,
    quiet: bool,
}

impl Clone for OutputManager {
    fn clone(&self) -> Self {
        Self::new(self.verbose, self.quiet)
    }
}

impl OutputManager {
    /// Create a new output manager
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            stdout: BufferWriter::stdout(ColorChoice::Auto),
            verbose,
            quiet,
        }
    }

    fn print(&self, fill: impl FnOnce(&mut Buffer) -> io::Result<()>) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut buffer = self.stdout.buffer();
        fill(&mut buffer)?;
        self.stdout.print(&buffer)
    }

    /// Echo a command line before it runs
    pub fn command(&self, line: &str) -> io::Result<()> {
        self.print(|b| {
            marked_line(b, "$", &spec(Some(Color::Cyan), true), line, Some(&spec(None, true)))
        })
    }

    /// Print a success message
    pub fn success(&self, message: &str) -> io::Result<()> {
        self.print(|b| marked_line(b, "✓", &spec(Some(Color::Green), true), message, None))
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) -> io::Result<()> {
        let yellow = Some(Color::Yellow);
        self.print(|b| marked_line(b, "⚠", &spec(yellow, true), message, Some(&spec(yellow, false))))
    }

    /// Print an error message to stderr, even when quiet
    pub fn error(&self, message: &str) {
        let stderr = BufferWriter::stderr(ColorChoice::Auto);
        let mut buffer = stderr.buffer();
        let red = Some(Color::Red);
        let printed = marked_line(&mut buffer, "✗", &spec(red, true), message, Some(&spec(red, false)))
            .and_then(|()| stderr.print(&buffer));
        if printed.is_err() {
            eprintln!("✗ {}", message);
        }
    }

    /// Print a message only in verbose mode
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.verbose {
            return Ok(());
        }
        self.print(|b| marked_line(b, "→", &spec(Some(Color::Blue), false), message, None))
    }

    /// Print a section header
    pub fn section(&self, title: &str) -> io::Result<()> {
        self.print(|b| {
            writeln!(b)?;
            b.set_color(&spec(Some(Color::Cyan), true))?;
            writeln!(b, "═══ {} ═══", title)?;
            b.reset()
        })
    }

    /// Print an indented sub-item
    pub fn indent(&self, message: &str) -> io::Result<()> {
        self.print(|b| writeln!(b, "    {}", message))
    }
}

//! Colored terminal output for asset generation
//!
//! `generate` prints a section header per asset kind (color sets, image sets,
//! app icon, bundle files), a progress line while an image or icon set is
//! rendered and a success mark for each set or file written. `validate` uses
//! the success and error marks for each check, with recovery suggestions
//! indented under a failure. Everything except errors is silenced by
//! `--quiet`; `--verbose` adds per-platform and per-path detail.

use std::io::Write;
use termcolor::{Buffer, BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Marker printed before a line, with its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Success,
    Warning,
    Error,
    Verbose,
    Progress,
}

impl Mark {
    fn symbol(self) -> &'static str {
        match self {
            Mark::Success => "✓",
            Mark::Warning => "⚠",
            Mark::Error => "✗",
            Mark::Verbose => "→",
            Mark::Progress => "⋯",
        }
    }

    fn color(self) -> Color {
        match self {
            Mark::Success => Color::Green,
            Mark::Warning => Color::Yellow,
            Mark::Error => Color::Red,
            Mark::Verbose => Color::Blue,
            Mark::Progress => Color::Magenta,
        }
    }

    /// Warnings and errors color the message too, not only the marker.
    fn tints_message(self) -> bool {
        matches!(self, Mark::Warning | Mark::Error)
    }

    fn bold(self) -> bool {
        matches!(self, Mark::Success | Mark::Warning | Mark::Error)
    }
}

/// Writes `<mark> <message>` into `buffer`.
fn write_marked(buffer: &mut Buffer, mark: Mark, message: &str) -> std::io::Result<()> {
    buffer.set_color(ColorSpec::new().set_fg(Some(mark.color())).set_bold(mark.bold()))?;
    write!(buffer, "{}", mark.symbol())?;
    buffer.reset()?;
    if mark.tints_message() {
        buffer.set_color(ColorSpec::new().set_fg(Some(mark.color())))?;
    }
    writeln!(buffer, " {}", message)?;
    buffer.reset()
}

/// Writes a blank line followed by `═══ <title> ═══`.
fn write_section(buffer: &mut Buffer, title: &str) -> std::io::Result<()> {
    writeln!(buffer)?;
    buffer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    writeln!(buffer, "═══ {} ═══", title)?;
    buffer.reset()
}

/// Output manager shared by the `generate` and `validate` commands
#[derive(Debug)]
pub struct OutputManager {
    bufwtr: BufferWriter,
    verbose: bool,
    quiet: bool,
}

impl Clone for OutputManager {
    fn clone(&self) -> Self {
        Self::new(self.verbose, self.quiet)
    }
}

impl OutputManager {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            bufwtr: BufferWriter::stdout(ColorChoice::Auto),
            verbose,
            quiet,
        }
    }

    fn print_marked(&self, mark: Mark, message: &str) -> std::io::Result<()> {
        let mut buffer = self.bufwtr.buffer();
        write_marked(&mut buffer, mark, message)?;
        self.bufwtr.print(&buffer)
    }

    /// A set or bundle file was written, or a validation check passed.
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.print_marked(Mark::Success, message)
    }

    /// Non-fatal condition, such as a manifest with no asset tables.
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.print_marked(Mark::Warning, message)
    }

    /// A failed check or command. Written to stderr even when quiet.
    pub fn error(&self, message: &str) {
        let bufwtr = BufferWriter::stderr(ColorChoice::Auto);
        let mut buffer = bufwtr.buffer();

        if write_marked(&mut buffer, Mark::Error, message).is_err() || bufwtr.print(&buffer).is_err() {
            // Stderr failed - fallback to stdout as last resort
            println!("[STDERR ERROR] ✗ {}", message);
        }
    }

    /// Detail shown with `--verbose`: enabled icon platforms, written paths.
    pub fn verbose(&self, message: &str) -> std::io::Result<()> {
        if !self.verbose || self.quiet {
            return Ok(());
        }
        self.print_marked(Mark::Verbose, message)
    }

    /// Printed before an image or icon set is resized and encoded.
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.print_marked(Mark::Progress, message)
    }

    /// Header for one kind of asset.
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        let mut buffer = self.bufwtr.buffer();
        write_section(&mut buffer, title)?;
        self.bufwtr.print(&buffer)
    }

    /// Sub-item under the previous line, e.g. a recovery suggestion.
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.println(&format!("    {}", message))
    }

    /// Plain line (respects quiet mode)
    pub fn println(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        let mut buffer = self.bufwtr.buffer();
        writeln!(&mut buffer, "{}", message)?;
        self.bufwtr.print(&buffer)
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

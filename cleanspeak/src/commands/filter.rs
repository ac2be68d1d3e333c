//! The filter command: reads input, prints the filtered text and reports statistics.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use cleanspeak_core::{FilterOutcome, ProfanityEngine, TextFilter};

use crate::ui::output_format;
use crate::ui::summary;
use crate::ui::theme::ThemeMap;

/// Options for [`run_filter_opts`].
#[derive(Debug, Default, Clone)]
pub struct FilterOptions {
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    /// Which rendering goes to stdout.
    pub rendering: Rendering,
    pub line_buffered: bool,
    pub stats: bool,
    pub stats_json: bool,
    pub quiet: bool,
}

/// Rendering shown on stdout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Rendering {
    /// Console when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    Console,
    Plain,
}

impl Rendering {
    fn use_console(self) -> bool {
        match self {
            Rendering::Auto => io::stdout().is_terminal(),
            Rendering::Console => true,
            Rendering::Plain => false,
        }
    }
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing success messages to stderr.
pub fn success_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Where filtered output goes: stdout plus an optional file for the plain rendering.
struct Sinks {
    stdout: io::StdoutLock<'static>,
    console: bool,
    persisted: Option<BufWriter<File>>,
    /// True when the last text written to stdout did not end with a newline.
    open_line: bool,
}

impl Sinks {
    fn write(&mut self, outcome: &FilterOutcome) -> Result<()> {
        let shown = if self.console { &outcome.console } else { &outcome.plain };
        self.stdout.write_all(shown.as_bytes())?;
        if !shown.is_empty() {
            self.open_line = !shown.ends_with('\n');
        }
        if let Some(file) = self.persisted.as_mut() {
            file.write_all(outcome.plain.as_bytes())?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        if let Some(file) = self.persisted.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

/// The main operation runner for the filter command.
pub fn run_filter_opts(engine: &ProfanityEngine, opts: &FilterOptions, theme: &ThemeMap) -> Result<()> {
    info!("Starting cleanspeak filter run.");

    let mut reader: Box<dyn BufRead> = match &opts.input_path {
        Some(path) => {
            if !opts.quiet {
                info_msg(format!("Reading input from file: {}", path.display()), theme);
            }
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let persisted = match &opts.output_path {
        Some(path) => {
            if !opts.quiet {
                info_msg(format!("Writing plain rendering to file: {}", path.display()), theme);
            }
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Some(BufWriter::new(file))
        }
        None => None,
    };

    let mut sinks = Sinks {
        stdout: io::stdout().lock(),
        console: opts.rendering.use_console(),
        persisted,
        open_line: false,
    };
    debug!("Console rendering on stdout: {}", sinks.console);

    engine.reset_statistics();
    if opts.line_buffered {
        filter_lines(engine, &mut reader, &mut sinks)?;
    } else {
        let mut input = Vec::new();
        reader.read_to_end(&mut input).context("Failed to read input")?;
        let outcome = engine.render_bytes(&input).context("Failed to filter input")?;
        sinks.write(&outcome)?;
    }
    sinks.flush()?;

    let snapshot = engine.statistics();
    if opts.stats_json {
        let json = serde_json::to_string_pretty(&snapshot)
            .context("Failed to serialize statistics")?;
        if sinks.open_line {
            writeln!(sinks.stdout)?;
        }
        writeln!(sinks.stdout, "{}", json)?;
        sinks.stdout.flush()?;
    }
    if opts.stats {
        let stderr_supports_color = io::stderr().is_terminal();
        summary::print_summary(&snapshot, &mut io::stderr(), theme, stderr_supports_color)?;
    }
    if let (Some(path), false) = (&opts.output_path, opts.quiet) {
        let written = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        success_msg(format!("Wrote {} bytes to {}", written, path.display()), theme);
    }

    info!(
        "Cleanspeak run completed: {} words processed, {} filtered.",
        snapshot.words_processed, snapshot.words_filtered
    );
    Ok(())
}

/// Filters input one line at a time, flushing after each line.
fn filter_lines(engine: &ProfanityEngine, reader: &mut dyn BufRead, sinks: &mut Sinks) -> Result<()> {
    let mut line = Vec::new();
    let mut line_number = 0usize;
    loop {
        line.clear();
        let read = reader.read_until(b'\n', &mut line).context("Failed to read input line")?;
        if read == 0 {
            break;
        }
        line_number += 1;
        let outcome = engine
            .render_bytes(&line)
            .with_context(|| format!("Failed to filter line {}", line_number))?;
        sinks.write(&outcome)?;
        sinks.flush()?;
    }
    debug!("Line-buffered run processed {} lines.", line_number);
    Ok(())
}

use std::{
    io::{self, Write},
    time::Duration,
};

use chrono::Local;
use filetop_fs::FileRecord;
use filetop_report::format_size;
use filetop_runtime::DISPLAY_TIME_FORMAT;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output with optional colors.
    #[default]
    Human,
    /// NDJSON (newline-delimited JSON) for machine consumption.
    Json,
}

/// Color handling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Color the listing when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Unknown values fall back to `Auto`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }

    /// Settle `Auto` once it is known whether stdout is a terminal.
    pub fn resolve(self, is_terminal: bool) -> Self {
        match self {
            ColorChoice::Auto if is_terminal => ColorChoice::Always,
            ColorChoice::Auto => ColorChoice::Never,
            other => other,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PrinterConfig {
    pub format: OutputFormat,
    pub color: ColorChoice,
    /// Whether to show the timing summary on stderr.
    pub show_timing: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: ColorChoice::Auto,
            show_timing: true,
        }
    }
}

/// Static context about a print run.
#[derive(Debug)]
pub struct PrintContext<'a> {
    /// Header naming the sort order.
    pub label: &'a str,
    /// Number of files the user asked for.
    pub requested: usize,
    /// Number of files collected before truncation.
    pub total: usize,
    pub truncated: bool,
    pub elapsed: Option<Duration>,
}

/// One line of the listing.
#[derive(Debug)]
pub struct ReportRow<'a> {
    /// 1-based position in the sorted listing.
    pub rank: usize,
    pub record: &'a FileRecord,
}

/// Receives the sorted listing one row at a time.
pub trait ReportPrinter {
    /// Called once before any rows, also when there are none.
    fn begin(&mut self, ctx: &PrintContext) -> io::Result<()>;

    fn print_row(&mut self, row: &ReportRow<'_>, ctx: &PrintContext) -> io::Result<()>;

    /// Called once after the last row for footers and timing.
    fn finish(&mut self, ctx: &PrintContext) -> io::Result<()>;
}

/// Human-readable printer with optional color support.
pub struct HumanPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    cfg: PrinterConfig,
    use_color: bool,
}

impl<W: Write, E: Write> HumanPrinter<W, E> {
    /// `Auto` never colors here since the writers may not be terminals,
    /// see [`ColorChoice::resolve`].
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        let use_color = cfg.color == ColorChoice::Always;

        Self {
            out,
            err,
            cfg,
            use_color,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    #[inline]
    fn format_path(&self, path: &str) -> String {
        if self.use_color {
            format!("\x1b[32m{}\x1b[0m", path)
        } else {
            path.to_owned()
        }
    }
}

impl<W: Write, E: Write> ReportPrinter for HumanPrinter<W, E> {
    fn begin(&mut self, ctx: &PrintContext) -> io::Result<()> {
        writeln!(self.out, "{}:", ctx.label)?;
        writeln!(self.out, "Top {} files:", ctx.requested)
    }

    fn print_row(&mut self, row: &ReportRow<'_>, _ctx: &PrintContext) -> io::Result<()> {
        let rec = row.record;
        let path = self.format_path(&rec.full_path.to_string_lossy());
        let modified = rec.modified.with_timezone(&Local).format(DISPLAY_TIME_FORMAT);

        writeln!(
            self.out,
            "path: {}, name: {}, size: {}, modified: {}",
            path,
            rec.name,
            format_size(rec.size),
            modified
        )
    }

    fn finish(&mut self, ctx: &PrintContext) -> io::Result<()> {
        if ctx.truncated {
            let remaining = ctx.total.saturating_sub(ctx.requested);
            writeln!(self.out, "... and {} more files", remaining)?;
        }

        if self.cfg.show_timing
            && let Some(elapsed) = ctx.elapsed
        {
            writeln!(
                self.err,
                "\n[scan] {} files in {:.2}ms",
                ctx.total,
                elapsed.as_secs_f64() * 1000.0,
            )?;
        }

        Ok(())
    }
}

pub struct JsonPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    cfg: PrinterConfig,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    rank: usize,
    #[serde(flatten)]
    record: &'a FileRecord,
    size_human: String,
}

impl<W: Write, E: Write> JsonPrinter<W, E> {
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        Self { out, err, cfg }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: Write, E: Write> ReportPrinter for JsonPrinter<W, E> {
    fn begin(&mut self, _ctx: &PrintContext) -> io::Result<()> {
        Ok(())
    }

    fn print_row(&mut self, row: &ReportRow<'_>, _ctx: &PrintContext) -> io::Result<()> {
        let obj = JsonRow {
            rank: row.rank,
            record: row.record,
            size_human: format_size(row.record.size),
        };
        serde_json::to_writer(&mut self.out, &obj)?;
        writeln!(self.out)
    }

    fn finish(&mut self, ctx: &PrintContext) -> io::Result<()> {
        if self.cfg.show_timing {
            let obj = serde_json::json!({
                "type": "summary",
                "sort": ctx.label,
                "requested": ctx.requested,
                "total": ctx.total,
                "truncated": ctx.truncated,
                "timing_ms": ctx.elapsed.map(|d| d.as_secs_f64() * 1000.0),
            });
            writeln!(self.err, "{}", obj)?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;

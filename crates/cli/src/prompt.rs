use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use filetop_fs::TimeWindow;
use filetop_report::{ReportConfig, SortMode};
use filetop_runtime::DEFAULT_SCAN_ROOT;
use log::warn;

use crate::args::Cli;

/// Sequential question/answer session on a pair of streams.
///
/// Each answer is one line of input with surrounding whitespace removed.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.out, "{question}: ")?;
        self.out.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .with_context(|| format!("failed to read answer to {question:?}"))?;
        if read == 0 {
            bail!("input ended before {question:?} was answered");
        }

        Ok(line.trim().to_owned())
    }

    /// An empty answer scans the current directory.
    pub fn ask_root(&mut self) -> Result<PathBuf> {
        let answer = self.ask("Path to scan")?;
        if answer.is_empty() {
            return Ok(PathBuf::from(DEFAULT_SCAN_ROOT));
        }
        Ok(PathBuf::from(answer))
    }

    pub fn ask_count(&mut self) -> Result<usize> {
        let answer = self.ask("Number of files to show")?;
        Ok(parse_count(&answer))
    }

    pub fn ask_sort(&mut self) -> Result<i64> {
        writeln!(self.out, "Sort by:")?;
        for mode in [SortMode::BySize, SortMode::ByRecency] {
            let text = match mode {
                SortMode::BySize => "Size",
                SortMode::ByRecency => "Modification time",
            };
            writeln!(self.out, "{}. {}", mode.selector(), text)?;
        }
        let answer = self.ask("Choice")?;
        Ok(parse_selector(&answer))
    }

    pub fn ask_date(&mut self, which: &str) -> Result<String> {
        self.ask(&format!("{which} date (YYYY-MM-DD)"))
    }
}

/// Unreadable counts become 0 and negative counts show nothing.
pub fn parse_count(raw: &str) -> usize {
    match raw.trim().parse::<i64>() {
        Ok(n) => clamp_count(n),
        Err(e) => {
            warn!("[prompt] count {raw:?} is not a number ({e}); showing 0 files");
            0
        }
    }
}

/// Negative counts show nothing.
pub fn clamp_count(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// Unreadable selections become 0, which is rejected later as invalid.
pub fn parse_selector(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("[prompt] selection {raw:?} is not a number ({e})");
        0
    })
}

/// Build the run configuration, prompting for whatever `cli` leaves open.
///
/// The sort selection is validated as soon as it is known, so an invalid
/// choice never triggers a scan.
pub fn gather_config<R: BufRead, W: Write>(
    cli: &Cli,
    prompter: &mut Prompter<R, W>,
) -> Result<ReportConfig> {
    let root = match &cli.path {
        Some(path) => path.clone(),
        None => prompter.ask_root()?,
    };

    let count = match cli.count {
        Some(n) => clamp_count(n),
        None => prompter.ask_count()?,
    };

    let selector = match cli.sort {
        Some(s) => s,
        None => prompter.ask_sort()?,
    };
    let sort = SortMode::try_from(selector)?;

    let window = match sort {
        SortMode::ByRecency => {
            let from = match &cli.from {
                Some(s) => s.clone(),
                None => prompter.ask_date("Start")?,
            };
            let to = match &cli.to {
                Some(s) => s.clone(),
                None => prompter.ask_date("End")?,
            };
            let window = TimeWindow::from_dates(&from, &to);
            if window.is_empty() {
                warn!("[prompt] start date {from:?} is after end date {to:?}; no file can match");
            }
            Some(window)
        }
        SortMode::BySize => None,
    };

    Ok(ReportConfig::new(root, count, sort, window))
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;

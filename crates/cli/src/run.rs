use std::{
    io::{self, BufRead, IsTerminal, Write},
    process::ExitCode,
};

use anyhow::Result;
use filetop_report::{Report, ReportError, build_report};
use log::error;

use crate::{
    args::Cli,
    printer::{
        HumanPrinter, JsonPrinter, OutputFormat, PrintContext, PrinterConfig, ReportPrinter,
        ReportRow,
    },
    prompt::{Prompter, gather_config},
};

pub fn run(cli: Cli) -> ExitCode {
    let mut cfg = cli.output.printer_config();
    cfg.color = cfg.color.resolve(io::stdout().is_terminal());

    let result = execute(&cli, io::stdin().lock(), io::stdout(), io::stderr(), cfg);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("[error] {e:#}");
            eprintln!("[error] {e:#}");
            ExitCode::from(exit_status(&e))
        }
    }
}

/// Gather the configuration, run the scan and print the listing.
///
/// Prompts share stdout with the human listing. With NDJSON output they go
/// to `err` so that `out` carries nothing but JSON lines.
pub fn execute<R: BufRead, W: Write, E: Write>(
    cli: &Cli,
    input: R,
    mut out: W,
    mut err: E,
    cfg: PrinterConfig,
) -> Result<()> {
    let report_cfg = {
        let prompts: &mut dyn Write = match cfg.format {
            OutputFormat::Human => &mut out,
            OutputFormat::Json => &mut err,
        };
        let mut prompter = Prompter::new(input, prompts);
        gather_config(cli, &mut prompter)?
    };

    let report = build_report(&report_cfg)?;

    match cfg.format {
        OutputFormat::Human => {
            let mut printer = HumanPrinter::new(out, err, cfg);
            print_report(&report, report_cfg.count, &mut printer)?;
        }
        OutputFormat::Json => {
            let mut printer = JsonPrinter::new(out, err, cfg);
            print_report(&report, report_cfg.count, &mut printer)?;
        }
    }
    Ok(())
}

pub fn print_report(
    report: &Report,
    requested: usize,
    printer: &mut dyn ReportPrinter,
) -> io::Result<()> {
    let ctx = PrintContext {
        label: report.sort.label(),
        requested,
        total: report.total,
        truncated: report.is_truncated(),
        elapsed: Some(report.elapsed),
    };

    printer.begin(&ctx)?;
    for (i, record) in report.records.iter().enumerate() {
        let row = ReportRow {
            rank: i + 1,
            record,
        };
        printer.print_row(&row, &ctx)?;
    }
    printer.finish(&ctx)
}

/// 1 for a rejected sort selection, 2 for everything else.
pub fn exit_status(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<ReportError>() {
        Some(ReportError::InvalidSelection(_)) => 1,
        _ => 2,
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

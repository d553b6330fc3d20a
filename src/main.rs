mod config;
mod error;
mod filter;
mod input;
mod logging;
mod model;
mod report;
mod uninstall;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{ReportConfig, load_config};
use crate::error::{ReportError, Result};
use crate::filter::StatusRule;
use crate::input::{load_events, load_report_data};
use crate::model::ReportEvent;
use crate::model::uninstall::UninstallScope;
use crate::report::{EnrollmentReport, write_reports};
use crate::uninstall::UninstallDialog;

#[derive(Debug, Parser)]
#[command(name = "devmgt-report", version, about)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply filter events to an enrollment report and write params.json/report.txt.
    Report(ReportArgs),
    /// Build an uninstall request for an application release.
    Uninstall(UninstallArgs),
}

#[derive(Debug, Args)]
struct ReportArgs {
    /// Report data JSON (`duration`, optional `segments`), optionally gzipped.
    #[arg(long)]
    data: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// Tab-separated `kind<TAB>value` events applied in order.
    #[arg(long)]
    events: Option<PathBuf>,
    /// Raw `KEY=VALUE` filter change, applied after the events file.
    #[arg(long = "filter", value_name = "KEY=VALUE")]
    filters: Vec<String>,
    #[arg(long)]
    status: Option<String>,
    #[arg(long)]
    ownership: Option<String>,
    /// Pie-chart segment click, applied last.
    #[arg(long)]
    chart: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    status_rule: Option<StatusRule>,
    #[arg(long, default_value_t = 0)]
    offset: u32,
    #[arg(long)]
    limit: Option<u32>,
}

#[derive(Debug, Args)]
struct UninstallArgs {
    #[arg(long)]
    uuid: String,
    #[arg(long, default_value = "device")]
    scope: UninstallScope,
    #[arg(long, default_value = "android")]
    device_type: String,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Device ids, user names, role names or group names.
    #[arg(required = true)]
    targets: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Report(args) => run_report(args),
        Command::Uninstall(args) => run_uninstall(args),
    }
}

fn resolve_config(
    path: Option<&PathBuf>,
    status_rule: Option<StatusRule>,
) -> Result<ReportConfig> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => ReportConfig::default(),
    };
    if let Some(rule) = status_rule {
        config.status_rule = rule;
    }
    if config.status_rule == StatusRule::DropTruthy {
        tracing::warn!(
            "status rule drop-truthy in effect; status filters never reach the device query"
        );
    }
    Ok(config)
}

fn split_filter_arg(raw: &str) -> Result<(&str, Option<&str>)> {
    let (key, value) = raw.split_once('=').ok_or_else(|| {
        ReportError::InvalidInput(format!("--filter expects KEY=VALUE, got '{raw}'"))
    })?;
    let value = Some(value.trim()).filter(|v| !v.is_empty());
    Ok((key.trim(), value))
}

fn flag_events(args: &ReportArgs) -> Vec<ReportEvent> {
    let mut events = Vec::new();
    if let Some(status) = &args.status {
        events.push(ReportEvent::StatusChanged(Some(status.clone())));
    }
    if let Some(ownership) = &args.ownership {
        events.push(ReportEvent::OwnershipChanged(Some(ownership.clone())));
    }
    if let Some(segment) = &args.chart {
        events.push(ReportEvent::ChartSegmentClicked(segment.clone()));
    }
    events
}

fn run_report(args: ReportArgs) -> Result<()> {
    let config = resolve_config(args.config.as_ref(), args.status_rule)?;
    let data = load_report_data(&args.data)?;
    let file_events = match &args.events {
        Some(path) => load_events(path)?,
        None => Vec::new(),
    };

    let mut report = EnrollmentReport::new(config, data);
    report.handle_all(&file_events)?;
    for raw in &args.filters {
        let (key, value) = split_filter_arg(raw)?;
        report.set_filter_named(key, value)?;
    }
    report.handle_all(&flag_events(&args))?;

    let query = report.device_query(args.offset, args.limit);
    write_reports(&report, &query, &args.out)?;
    println!("{}", query.to_path(report.config()));
    Ok(())
}

fn run_uninstall(args: UninstallArgs) -> Result<()> {
    let config = resolve_config(args.config.as_ref(), None)?;

    let mut dialog = UninstallDialog::new(&args.uuid, &args.device_type);
    dialog.open();
    dialog.select_tab(args.scope.tab_key())?;

    let targets = args.targets.iter().map(String::as_str).collect::<Vec<_>>();
    let request = dialog.request(&targets)?;
    dialog.set_loading(true);

    println!("POST {}", request.endpoint(&config));
    println!("{}", request.payload()?);
    tracing::info!(
        title = UninstallDialog::TITLE,
        uuid = dialog.uuid(),
        tab = dialog.active_tab().tab_title(),
        device_type = dialog.device_type(),
        targets = request.targets.len(),
        visible = dialog.is_visible(),
        loading = dialog.is_loading(),
        "uninstall request prepared"
    );
    dialog.close();
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;

mod cli;
mod explain;
mod render;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use raid_model::catalog;
use raid_model::layout::{self, Layout};
use raid_model::level::RaidLevel;
use raid_model::metrics::{self, Metrics};

use crate::cli::{ArrayArgs, Cli, Command, OutputFormat, ProviderArgs, ReportArgs};
use crate::explain::{Explanation, ExplanationProvider, HttpExplanationProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Metrics(args) => run_metrics(&args),
        Command::Layout(args) => run_layout(&args),
        Command::Explain(args) => run_explain(args.raid.level(), &args.provider).await,
        Command::Report(args) => run_report(&args).await,
    }
}

fn run_metrics(args: &ArrayArgs) -> anyhow::Result<()> {
    let level = args.raid.level();
    let disks = checked_disk_count(level, args.disks);
    let metrics = metrics::compute(level, disks as u64, args.disk_size);

    match args.format {
        OutputFormat::Table => print!("{}", render::metrics_table(level, &metrics)),
        OutputFormat::Json => print_json(&metrics)?,
    }
    Ok(())
}

fn run_layout(args: &ArrayArgs) -> anyhow::Result<()> {
    let level = args.raid.level();
    let disks = checked_disk_count(level, args.disks);
    let layout = layout::generate(level, disks);

    match args.format {
        OutputFormat::Table => print!("{}", render::layout_grid(level, &layout)),
        OutputFormat::Json => print_json(&layout)?,
    }
    Ok(())
}

async fn run_explain(level: RaidLevel, provider: &ProviderArgs) -> anyhow::Result<()> {
    let provider = HttpExplanationProvider::new(provider).context("build explanation provider")?;
    let explanation = provider
        .explain(level)
        .await
        .with_context(|| format!("fetch explanation for {level}"))?;

    print!("{}", render::explanation_text(&explanation));
    Ok(())
}

#[derive(Serialize)]
struct Report {
    level: RaidLevel,
    metrics: Metrics,
    layout: Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<Explanation>,
}

async fn run_report(args: &ReportArgs) -> anyhow::Result<()> {
    let level = args.array.raid.level();
    let disks = checked_disk_count(level, args.array.disks);

    let metrics = metrics::compute(level, disks as u64, args.array.disk_size);
    let layout = layout::generate(level, disks);

    // A provider failure degrades the report to a warning instead of
    // aborting it; the local figures are still worth printing.
    let explanation = if args.explain {
        match fetch_explanation(level, &args.provider).await {
            Ok(explanation) => Some(explanation),
            Err(err) => {
                warn!("explanation unavailable: {err:#}");
                None
            }
        }
    } else {
        None
    };

    match args.array.format {
        OutputFormat::Table => {
            print!("{}", render::metrics_table(level, &metrics));
            println!();
            print!("{}", render::layout_grid(level, &layout));
            if let Some(explanation) = &explanation {
                println!();
                print!("{}", render::explanation_text(explanation));
            }
        }
        OutputFormat::Json => print_json(&Report {
            level,
            metrics,
            layout,
            explanation,
        })?,
    }
    Ok(())
}

async fn fetch_explanation(
    level: RaidLevel,
    provider: &ProviderArgs,
) -> anyhow::Result<Explanation> {
    let provider = HttpExplanationProvider::new(provider).context("build explanation provider")?;
    Ok(provider.explain(level).await?)
}

/// The core computes whatever it is handed; disk counts are clamped to the
/// catalog constraints here, before any call into it.
fn checked_disk_count(level: RaidLevel, requested: usize) -> usize {
    let adjusted = catalog::clamp_disk_count(level, requested);
    if adjusted != requested {
        warn!("{requested} disk(s) is not a valid {level} shape; using {adjusted}");
    }
    adjusted
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("encode output as JSON")?
    );
    Ok(())
}

use clap::{Args, Parser, Subcommand, ValueEnum};

use raid_model::level::RaidLevel;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Capacity and performance figures for an array shape.
    Metrics(ArrayArgs),

    /// Block placement grid across disks and stripes.
    Layout(ArrayArgs),

    /// Natural-language explanation of a RAID level, fetched from the
    /// explanation service.
    Explain(ExplainArgs),

    /// Combined view: metrics, layout, and optionally an explanation.
    Report(ReportArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ArrayArgs {
    #[arg(long, value_enum, default_value_t = RaidMode::Raid5)]
    pub raid: RaidMode,

    #[arg(long, default_value_t = 4)]
    pub disks: usize,

    /// Per-disk capacity in gigabytes.
    #[arg(long, default_value_t = 1024)]
    pub disk_size: u64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct ExplainArgs {
    #[arg(long, value_enum, default_value_t = RaidMode::Raid5)]
    pub raid: RaidMode,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ProviderArgs {
    #[arg(
        long,
        env = "EXPLAIN_API_URL",
        default_value = "http://localhost:8087/v1/explain"
    )]
    pub explain_url: String,

    #[arg(long, env = "EXPLAIN_API_TOKEN", default_value = "")]
    pub explain_token: String,

    #[arg(long, env = "EXPLAIN_TIMEOUT_MS", default_value_t = 5000)]
    pub explain_timeout_ms: u64,
}

#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub array: ArrayArgs,

    /// Also fetch the natural-language explanation.
    #[arg(long)]
    pub explain: bool,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum RaidMode {
    Raid0,
    Raid1,
    Raid4,
    Raid5,
    Raid6,
    Raid10,
}

impl RaidMode {
    #[must_use]
    pub const fn level(self) -> RaidLevel {
        match self {
            Self::Raid0 => RaidLevel::Raid0,
            Self::Raid1 => RaidLevel::Raid1,
            Self::Raid4 => RaidLevel::Raid4,
            Self::Raid5 => RaidLevel::Raid5,
            Self::Raid6 => RaidLevel::Raid6,
            Self::Raid10 => RaidLevel::Raid10,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

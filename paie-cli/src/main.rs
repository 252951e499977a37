mod output;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use paie_core::models::{Country, FamilyProfile, FamilyStatus, SalaryComponents};
use paie_core::simulation::{Direction, SimulationRequest, simulate};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Payroll simulator for Bénin and Togo.
///
/// Computes the statutory deductions between a gross salary and the net
/// actually paid, in either direction, and prints the full breakdown.
#[derive(Debug, Parser)]
#[command(name = "paie", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format.
    #[arg(long, default_value = "table", global = true)]
    output: OutputFormat,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute the net salary from a base salary and bonuses.
    GrossToNet(GrossToNetArgs),

    /// Find the base salary that yields a target net.
    NetToGross(NetToGrossArgs),
}

#[derive(Debug, Args)]
struct GrossToNetArgs {
    /// Monthly base salary in FCFA.
    #[arg(long)]
    base: Decimal,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Debug, Args)]
struct NetToGrossArgs {
    /// Target monthly net salary in FCFA.
    #[arg(long)]
    net: Decimal,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Debug, Args)]
struct CommonArgs {
    /// Jurisdiction: benin (bj) or togo (tg).
    #[arg(long, value_parser = parse_country)]
    country: Country,

    /// Monthly transport bonus in FCFA.
    #[arg(long, default_value = "0")]
    transport: Decimal,

    /// Monthly housing bonus in FCFA.
    #[arg(long, default_value = "0")]
    housing: Decimal,

    /// Monthly in-kind benefits in FCFA.
    #[arg(long, default_value = "0")]
    in_kind: Decimal,

    /// Monthly performance bonus in FCFA.
    #[arg(long, default_value = "0")]
    performance: Decimal,

    /// Exceptional bonus in FCFA.
    #[arg(long, default_value = "0")]
    exceptional: Decimal,

    /// Family status: single, married, divorced or widowed.
    #[arg(long, value_parser = parse_status, default_value = "single")]
    status: FamilyStatus,

    /// Number of dependent children.
    #[arg(long, default_value = "0")]
    children: u8,
}

impl CommonArgs {
    fn bonuses(&self) -> SalaryComponents {
        SalaryComponents {
            base_salary: Decimal::ZERO,
            transport_bonus: self.transport,
            housing_bonus: self.housing,
            in_kind_benefits: self.in_kind,
            performance_bonus: self.performance,
            exceptional_bonus: self.exceptional,
        }
    }

    fn family(&self) -> FamilyProfile {
        FamilyProfile {
            status: self.status,
            children_count: self.children,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

fn parse_country(s: &str) -> Result<Country, String> {
    Country::parse(s).ok_or_else(|| format!("unknown country `{s}` (expected benin or togo)"))
}

fn parse_status(s: &str) -> Result<FamilyStatus, String> {
    FamilyStatus::parse(s).ok_or_else(|| {
        format!("unknown family status `{s}` (expected single, married, divorced or widowed)")
    })
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `warn` so normal runs print only the payslip.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let request = match &cli.command {
        Command::GrossToNet(args) => SimulationRequest {
            country: args.common.country,
            direction: Direction::GrossToNet,
            amount: args.base,
            bonuses: args.common.bonuses(),
            family: args.common.family(),
        },
        Command::NetToGross(args) => SimulationRequest {
            country: args.common.country,
            direction: Direction::NetToGross,
            amount: args.net,
            bonuses: args.common.bonuses(),
            family: args.common.family(),
        },
    };

    debug!(country = request.country.as_str(), "running simulation");
    let report = simulate(&request);

    match cli.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print!("{}", output::render_table(&report)),
    }

    Ok(())
}

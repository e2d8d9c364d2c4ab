use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use u_staffing::io::{self, Format};
use u_staffing::scheduler::{PoolConfig, ScheduleKpi, Scheduler};
use u_staffing::validation::validate_input;
use u_staffing::StaffingError;

/// Command-line spelling of [`Format`].
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Format::Text,
            FormatArg::Json => Format::Json,
        }
    }
}

#[derive(Parser)]
#[command(version, about = "Greedy skill-based project staffing")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Staff projects and write the schedule.
    Solve {
        #[arg(long)]
        input: PathBuf,
        /// Defaults to stdout.
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = FormatArg::Text)]
        input_format: FormatArg,
        #[arg(long, value_enum, default_value_t = FormatArg::Text)]
        output_format: FormatArg,
        /// Levels below a role's minimum admitted to the candidate search.
        #[arg(long)]
        mentor_slack: Option<u32>,
        /// Print staffing KPIs as JSON to stderr.
        #[arg(long)]
        report: bool,
    },
    /// Check an input file without staffing it.
    Validate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = FormatArg::Text)]
        input_format: FormatArg,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "u_staffing=debug"
    } else {
        "u_staffing=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Solve {
            input,
            output,
            input_format,
            output_format,
            mentor_slack,
            report,
        } => {
            let mut request = io::load(&input, input_format.into())
                .with_context(|| format!("failed to load {}", input.display()))?;
            if let Some(slack) = mentor_slack {
                request.pool = PoolConfig::default().with_mentor_slack(slack);
            }
            validate_input(&request.workers, &request.projects)
                .map_err(StaffingError::from)
                .context("input rejected")?;

            let roster_size = request.workers.len();
            let mut scheduler = Scheduler::from_request(request);
            let schedule = scheduler.run().context("staffing run failed")?;

            match output {
                Some(path) => io::save(&schedule, &path, output_format.into())
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => {
                    let stdout = std::io::stdout();
                    let mut out = stdout.lock();
                    io::write(&schedule, output_format.into(), &mut out)?;
                    out.flush()?;
                }
            }

            if report {
                let kpi = ScheduleKpi::calculate(&schedule, scheduler.projects(), roster_size);
                eprintln!("{}", serde_json::to_string_pretty(&kpi)?);
            }
        }
        Command::Validate { input, input_format } => {
            let request = io::load(&input, input_format.into())
                .with_context(|| format!("failed to load {}", input.display()))?;
            match validate_input(&request.workers, &request.projects) {
                Ok(()) => info!(
                    workers = request.workers.len(),
                    projects = request.projects.len(),
                    "input is valid"
                ),
                Err(errors) => {
                    for e in &errors {
                        warn!(kind = ?e.kind, "{}", e.message);
                    }
                    return Err(StaffingError::from(errors)).context("input rejected");
                }
            }
        }
    }

    Ok(())
}

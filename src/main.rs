//! CLI entry point for the grade solver.
//!
//! Provides subcommands for grading a single student from flags and for
//! grading a whole roster CSV.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use grade_solver::cohort::aggregate::summarize;
use grade_solver::cohort::roster::{grade_roster, read_roster_file};
use grade_solver::output::{summary_json, write_records, write_records_file};
use grade_solver::{GradeInputs, GradeReport};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "grade_solver")]
#[command(about = "Computes final grades and mentions from exam, list and project scores", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a single student
    Calc {
        /// Written exam score (P), 0 to 110
        #[arg(short, long, default_value_t = 0.0)]
        exam: f64,

        /// The exercise list (L) was handed in and accepted
        #[arg(short, long, default_value_t = false)]
        list: bool,

        /// Final project score (T), 0 to 100. Omit if no project was done
        #[arg(short, long)]
        project: Option<f64>,

        /// Show the intermediate terms of the formula
        #[arg(short, long, default_value_t = false)]
        details: bool,

        /// Clamp out-of-range scores instead of rejecting them
        #[arg(long, default_value_t = false)]
        clamp: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Grade every student in a roster CSV
    Batch {
        /// Roster with columns student,exam_score,list_completed,project_score
        #[arg(value_name = "ROSTER_CSV")]
        input: PathBuf,

        /// CSV file to write results to (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also report cohort statistics
        #[arg(short, long, default_value_t = false)]
        summary: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/grade_solver.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("grade_solver.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", "info"));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(env_filter("RUST_LOG_JSON", "debug"));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Calc {
            exam,
            list,
            project,
            details,
            clamp,
            format,
        } => {
            let mut inputs = GradeInputs::new(exam, list, project);
            if clamp {
                let clamped = inputs.clamped();
                if clamped != inputs {
                    info!(?inputs, ?clamped, "Scores clamped into range");
                }
                inputs = clamped;
            }

            let report = GradeReport::new(inputs)?;
            debug!(mention = %report.mention, passed = report.passed, "Student graded");

            match format {
                Format::Text => print!("{}", report.render_text(details)),
                Format::Json => println!("{}", report.to_json()?),
            }
        }
        Commands::Batch {
            input,
            output,
            summary,
        } => {
            let rows = read_roster_file(&input)?;
            let records = grade_roster(&rows);

            match &output {
                Some(path) => {
                    write_records_file(path, &records)?;
                    info!(path = %path.display(), records = records.len(), "Results written");
                }
                None => write_records(std::io::stdout().lock(), &records)?,
            }

            if summary {
                let cohort = summarize(&records);
                if output.is_some() {
                    println!("{}", summary_json(&cohort)?);
                } else {
                    // stdout already carries the CSV.
                    info!(
                        students = cohort.students,
                        graded = cohort.graded,
                        errors = cohort.errors,
                        passed = cohort.passed,
                        pass_rate = cohort.pass_rate,
                        mean_grade = cohort.mean_grade,
                        stddev_grade = cohort.stddev_grade,
                        mentions = %serde_json::to_string(&cohort.mentions)?,
                        "Cohort summary"
                    );
                }
            }
        }
    }

    Ok(())
}

/// Filter read from `var`, falling back to `default` when the variable is
/// unset or unparsable.
fn env_filter(var: &str, default: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new(default))
}

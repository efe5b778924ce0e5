use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use status_monitor::health::heartbeat::classify_heartbeats;
use status_monitor::health::{evaluate, HealthVerdict};
use status_monitor::render;
use status_monitor::status::report::{StatusReport, TaskExecutorStatus};

#[derive(Parser)]
#[command(name = "status-cli")]
#[command(about = "Inspect collected system-status documents", long_about = None)]
struct Cli {
    /// Path to the status document (JSON).
    #[arg(short, long, default_value = "status.json")]
    document: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the document and print the full report
    Report {
        /// Print the evaluation as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the overall verdict; exit code reflects it
    Check,
    /// Classify task-executor heartbeats
    Heartbeats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let report = load_document(&cli.document)?;
    let evaluation = evaluate(&report);

    match &cli.command {
        Commands::Report { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(&evaluation)?);
            } else {
                print!("{}", render::render_text(&report, &evaluation));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check => {
            println!("{}", evaluation.overall);
            Ok(match evaluation.overall {
                HealthVerdict::Healthy => ExitCode::SUCCESS,
                HealthVerdict::Degraded => ExitCode::from(1),
                HealthVerdict::Unknown => ExitCode::from(2),
            })
        }
        Commands::Heartbeats => {
            match &report.task_executor_heartbeats {
                Some(TaskExecutorStatus::Heartbeats(snapshot)) => {
                    println!("Verdict: {}", classify_heartbeats(snapshot));
                    print!("{}", render::heartbeat_lines(snapshot));
                }
                Some(TaskExecutorStatus::Error(e)) => {
                    println!("Verdict: {}", HealthVerdict::Degraded);
                    println!("  Error: {}", e.error);
                }
                None => {
                    println!("Verdict: {}", HealthVerdict::Unknown);
                    println!("  No data");
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_document(path: &Path) -> Result<StatusReport, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

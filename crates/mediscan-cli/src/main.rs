//! MediScan AI CLI

mod runner;

use clap::{Parser, Subcommand};
use mediscan_core::catalog::findings;
use mediscan_core::report::{self, ReportFormat};
use mediscan_core::{ProgressDriver, ReportType, SelectedFile, SimulationConfig, UploadProgress, UploadSelection};
use runner::{HostEvent, RunOutcome};
use std::io::Write;
use std::time::Duration;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "mediscan")]
#[command(about = "Terminal preview of the MediScan AI report analysis demo")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulated analysis
    Simulate {
        /// Report type id (mri, ct, ultrasound, endoscopy, blood)
        #[arg(short, long)]
        report_type: Option<String>,

        /// Name of the file to pretend to upload
        #[arg(short, long)]
        file: Option<String>,

        /// Pretend file size in bytes
        #[arg(long, default_value = "1048576")]
        size: u64,

        /// Milliseconds between progress ticks
        #[arg(long)]
        tick_ms: Option<u64>,

        /// Percentage points per tick
        #[arg(long)]
        step: Option<u8>,

        /// Milliseconds between 100% and completion
        #[arg(long)]
        settle_ms: Option<u64>,
    },

    /// Print the findings report
    Findings {
        /// Output format (json, markdown)
        #[arg(short, long, default_value = "markdown")]
        output: String,
    },

    /// List supported report types
    ReportTypes,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    match cli.command {
        Commands::Simulate { report_type, file, size, tick_ms, step, settle_ms } => {
            let defaults = SimulationConfig::default();
            let config = SimulationConfig {
                tick_interval: tick_ms.map(Duration::from_millis).unwrap_or(defaults.tick_interval),
                step: step.unwrap_or(defaults.step),
                completion_delay: settle_ms.map(Duration::from_millis).unwrap_or(defaults.completion_delay),
            };
            cmd_simulate(report_type, file, size, config).await;
        }
        Commands::Findings { output } => {
            cmd_findings(output);
        }
        Commands::ReportTypes => {
            cmd_report_types();
        }
    }
}

async fn cmd_simulate(report_type: Option<String>, file: Option<String>, size: u64, config: SimulationConfig) {
    let mut driver = match ProgressDriver::new(config) {
        Ok(driver) => driver,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut selection = UploadSelection::default();
    if let Some(id) = report_type {
        match ReportType::from_id(&id) {
            Some(report_type) => selection.select_type(report_type),
            None => {
                error!("Unknown report type: {}", id);
                cmd_report_types();
                std::process::exit(1);
            }
        }
    }
    if let Some(name) = file {
        selection.select_file(SelectedFile::from_name(name, size));
    }

    if let Some(file) = &selection.file {
        if !file.is_supported_format() {
            info!("{} is not a PDF, JPG or PNG file", file.name);
        }
    }

    let shutdown = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    let result = runner::run(&mut driver, &selection, shutdown, print_event).await;

    match result {
        Ok(RunOutcome::Completed(route)) => {
            info!("Analysis complete, showing {}", route);
            println!();
            print!("{}", report::markdown::generate(findings()));
        }
        Ok(RunOutcome::Interrupted { percent }) => {
            println!();
            info!("Analysis interrupted at {}%", percent);
            std::process::exit(130);
        }
        Err(e) => {
            if let Some(notification) = e.notification() {
                eprintln!("✕ {}", notification);
            }
            error!("Analysis not started: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_event(event: HostEvent) {
    match event {
        HostEvent::Progress(progress) => print_progress(progress),
        HostEvent::Notified(notification) => {
            let mark = if notification.is_error() { "✕" } else { "✓" };
            println!("\n{} {}", mark, notification);
        }
        HostEvent::Navigated(route) => {
            tracing::debug!(%route, "navigated");
        }
    }
}

fn print_progress(progress: UploadProgress) {
    if !progress.is_uploading {
        return;
    }
    let filled = usize::from(progress.percent / 5);
    print!(
        "\rAnalyzing report... [{}{}] {:>3}%",
        "#".repeat(filled),
        " ".repeat(20 - filled),
        progress.percent
    );
    let _ = std::io::stdout().flush();
}

fn cmd_findings(output_format: String) {
    let format = match output_format.parse::<ReportFormat>() {
        Ok(format) => format,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    match report::generate_report(findings(), format) {
        Ok(content) => println!("{}", content),
        Err(e) => {
            error!("Failed to generate report: {}", e);
            std::process::exit(1);
        }
    }
}

fn cmd_report_types() {
    println!("\nSupported Report Types\n{}", "=".repeat(50));
    for report_type in ReportType::ALL {
        println!("  {:<12} {} {}", report_type.id(), report_type.icon(), report_type.name());
    }
}

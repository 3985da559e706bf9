//! CLI entry point for the student performance toolkit.
//!
//! Provides subcommands for cleaning the raw survey export, training the
//! exam-score model, predicting a single score, and summarizing average
//! scores by attendance and screen time.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use student_performance::aggregate::{RecordFilter, summarize};
use student_performance::cleaning::process;
use student_performance::config::Settings;
use student_performance::dataset::load_records;
use student_performance::model::{PredictionService, Trainer};
use student_performance::output::{print_json, print_pretty};
use tracing::{error, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "student_performance")]
#[command(about = "Clean student habit data, fit an exam-score model and query it", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean the raw dataset and write the processed CSV
    Clean {
        /// Raw CSV to read [env: RAW_DATA_PATH]
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Processed CSV to write [env: CLEAN_DATA_PATH]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Fit the exam-score model on the processed dataset
    Train {
        /// Processed CSV to train on [env: CLEAN_DATA_PATH]
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Where to write the model artifact [env: MODEL_PATH]
        #[arg(short, long)]
        model: Option<PathBuf>,
    },
    /// Predict an exam score for one student
    Predict {
        /// Study hours per day
        #[arg(long)]
        study_hours: f64,

        /// Social media plus streaming hours per day
        #[arg(long)]
        screen_time: f64,

        /// Attendance percentage
        #[arg(long)]
        attendance: f64,

        /// Model artifact to load [env: MODEL_PATH]
        #[arg(short, long)]
        model: Option<PathBuf>,
    },
    /// Average exam score by attendance range and screen-time band
    Summary {
        /// Processed CSV to summarize [env: CLEAN_DATA_PATH]
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Keep only these genders (repeatable); all when omitted
        #[arg(short, long)]
        gender: Vec<String>,

        /// Youngest age to keep
        #[arg(long)]
        min_age: Option<i64>,

        /// Oldest age to keep
        #[arg(long)]
        max_age: Option<i64>,

        /// Log the summary as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/student_performance.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("student_performance.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let settings = Settings::from_env();
    let cli = Cli::parse();

    match cli.command {
        Commands::Clean { input, output } => {
            let input = input.unwrap_or(settings.raw_data_path);
            let output = output.unwrap_or(settings.clean_data_path);

            let dataset = process(&input, &output)?;
            let report = &dataset.report;
            print_pretty(report);

            info!(
                rows = report.final_rows,
                columns = report.final_columns,
                duplicates_removed = report.duplicates_removed,
                critical_rows_dropped = report.critical_rows_dropped,
                imputed_columns = report.imputations.len(),
                coercion_warnings = report.coercion_warnings.len(),
                "Cleaning finished"
            );
            if let Some(failure) = &report.persistence_error {
                warn!(path = %failure.path.display(), "Processed dataset was not persisted");
            }
        }
        Commands::Train { data, model } => {
            let data = data.unwrap_or(settings.clean_data_path);
            let model_path = model.unwrap_or(settings.model_path);

            let records = load_records(&data)?;
            let model = Trainer::new().train(&records)?;

            if let Err(e) = model.save(&model_path) {
                error!(path = %model_path.display(), error = %format!("{e:#}"), "Failed to save model");
            }
            print_json(&model)?;
        }
        Commands::Predict {
            study_hours,
            screen_time,
            attendance,
            model,
        } => {
            if study_hours < 0.0 || screen_time < 0.0 || attendance < 0.0 {
                bail!("inputs must be non-negative");
            }
            let model_path = model.unwrap_or(settings.model_path);

            let service = PredictionService::load(&model_path)?;
            let score = service.predict(study_hours, screen_time, attendance);

            info!(study_hours, screen_time, attendance, score, "Predicted exam score");
            println!("{score:.2}");
        }
        Commands::Summary {
            data,
            gender,
            min_age,
            max_age,
            json,
        } => {
            let data = data.unwrap_or(settings.clean_data_path);
            let records = load_records(&data)?;

            let mut filter = RecordFilter::default().with_age_range(min_age, max_age);
            if !gender.is_empty() {
                filter = filter.with_genders(gender);
            }
            let selected = filter.apply(&records);
            info!(total = records.len(), selected = selected.len(), "Students selected");

            let summary = summarize(&selected);
            if json {
                print_json(&summary)?;
            } else {
                for bin in &summary.by_attendance {
                    info!(attendance = %bin.label, students = bin.count, avg_exam_score = bin.mean, stddev = bin.stddev, "Attendance range");
                }
                for band in &summary.by_screen_time {
                    info!(screen_time = %band.label, students = band.count, avg_exam_score = band.mean, stddev = band.stddev, "Screen time band");
                }
            }
        }
    }

    Ok(())
}

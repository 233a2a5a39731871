//! Guard CLI - Command-line front end for HealthGuard
//!
//! Commands:
//! - scan: Run simulated health scans and print the reports
//! - voice: Analyze a voice clip or run a batch of voice simulations
//! - text: Scan free text for stress keywords
//! - assess: Score a self-assessment form
//! - analytics: Print 30-day statistics, export CSV, print the monthly report
//! - doctor: Check configuration and environment

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use healthguard::alerts::{check_thresholds, dashboard_banner, vital_sign_rows};
use healthguard::analytics::{
    default_history_start, generate_history, generate_shift_trend, write_csv, AnalyticsSummary,
    HISTORY_DAYS,
};
use healthguard::assessment::{DiscomfortArea, SelfAssessment};
use healthguard::sensors::{voice_care_tips, SimulatedSignalGenerator, VitalSignSource};
use healthguard::text::analyze_text;
use healthguard::types::HydrationLevel;
use healthguard::{ClampPolicy, GuardError, HealthMonitor, MonitorConfig, GUARD_VERSION, PRODUCT_NAME};

/// Guard - Worker health and wellness monitoring
#[derive(Parser)]
#[command(name = "guard")]
#[command(version = GUARD_VERSION)]
#[command(about = "Simulated worker vital-sign scoring and analytics", long_about = None)]
struct Cli {
    /// Monitor configuration file (JSON), read by scan and doctor
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run health scans and print the reports
    Scan {
        /// Camera frame to analyze (read but not inspected)
        #[arg(long)]
        image: Option<PathBuf>,

        /// Voice clip to include in the scan
        #[arg(long)]
        audio: Option<PathBuf>,

        /// Number of scans to run in one session
        #[arg(long, default_value = "1")]
        count: usize,

        /// Seed for reproducible readings
        #[arg(long)]
        seed: Option<u64>,

        /// Override the configured clamp policy
        #[arg(long)]
        clamp: Option<ClampArg>,

        /// Override the heart rate alert limit (80-120)
        #[arg(long)]
        max_heart_rate: Option<i32>,

        /// Override the posture alert limit (50-90)
        #[arg(long)]
        min_posture: Option<i32>,

        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,
    },

    /// Analyze voice health
    Voice {
        /// Voice clip to analyze (read but not inspected)
        #[arg(long)]
        audio: Option<PathBuf>,

        /// Run this many simulations and print a comparison table instead
        #[arg(long)]
        simulate: Option<usize>,

        /// Seed for reproducible readings
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,
    },

    /// Scan free text for stress keywords
    Text {
        /// Text to analyze; read from stdin when omitted
        #[arg(long)]
        text: Option<String>,

        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,
    },

    /// Score a self-assessment
    Assess {
        /// Energy level (1-10)
        #[arg(long, default_value = "7")]
        energy: u8,

        /// Stress level (1-10)
        #[arg(long, default_value = "4")]
        stress: u8,

        /// Hours slept (0-12)
        #[arg(long, default_value = "7.0")]
        hours_slept: f64,

        /// Breaks taken (0-10)
        #[arg(long, default_value = "2")]
        breaks: u8,

        /// Hydration level
        #[arg(long, default_value = "poor")]
        hydration: HydrationArg,

        /// Areas of discomfort (repeatable)
        #[arg(long = "discomfort")]
        discomfort: Vec<DiscomfortArg>,

        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,
    },

    /// Print 30-day analytics
    Analytics {
        /// Seed for reproducible history
        #[arg(long)]
        seed: Option<u64>,

        /// Export the history as CSV (use - for stdout)
        #[arg(long)]
        export: Option<PathBuf>,

        /// Print the monthly report
        #[arg(long)]
        report: bool,

        /// Print the hourly shift trend
        #[arg(long)]
        trend: bool,

        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,
    },

    /// Check configuration and environment
    Doctor {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text
    Text,
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

#[derive(Clone, Copy, ValueEnum)]
enum ClampArg {
    /// Clamp each component to 0-100 before summing
    Components,
    /// Use the raw weighted formula
    Unclamped,
}

impl From<ClampArg> for ClampPolicy {
    fn from(arg: ClampArg) -> Self {
        match arg {
            ClampArg::Components => ClampPolicy::Components,
            ClampArg::Unclamped => ClampPolicy::Unclamped,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum HydrationArg {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl From<HydrationArg> for HydrationLevel {
    fn from(arg: HydrationArg) -> Self {
        match arg {
            HydrationArg::Poor => HydrationLevel::Poor,
            HydrationArg::Fair => HydrationLevel::Fair,
            HydrationArg::Good => HydrationLevel::Good,
            HydrationArg::Excellent => HydrationLevel::Excellent,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DiscomfortArg {
    None,
    Back,
    Neck,
    Shoulders,
    Eyes,
    Legs,
}

impl From<DiscomfortArg> for DiscomfortArea {
    fn from(arg: DiscomfortArg) -> Self {
        match arg {
            DiscomfortArg::None => DiscomfortArea::None,
            DiscomfortArg::Back => DiscomfortArea::Back,
            DiscomfortArg::Neck => DiscomfortArea::Neck,
            DiscomfortArg::Shoulders => DiscomfortArea::Shoulders,
            DiscomfortArg::Eyes => DiscomfortArea::Eyes,
            DiscomfortArg::Legs => DiscomfortArea::Legs,
        }
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), GuardCliError> {
    match cli.command {
        Commands::Scan {
            image,
            audio,
            count,
            seed,
            clamp,
            max_heart_rate,
            min_posture,
            output_format,
        } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(clamp) = clamp {
                config.clamp_policy = clamp.into();
            }
            if let Some(limit) = max_heart_rate {
                config.max_heart_rate_alert = limit;
            }
            if let Some(limit) = min_posture {
                config.min_posture_score = limit;
            }
            config.validate()?;

            cmd_scan(
                &config,
                image.as_deref(),
                audio.as_deref(),
                count,
                seed,
                output_format,
            )
        }

        Commands::Voice {
            audio,
            simulate,
            seed,
            output_format,
        } => cmd_voice(audio.as_deref(), simulate, seed, output_format),

        Commands::Text {
            text,
            output_format,
        } => cmd_text(text, output_format),

        Commands::Assess {
            energy,
            stress,
            hours_slept,
            breaks,
            hydration,
            discomfort,
            output_format,
        } => {
            let form = SelfAssessment {
                energy,
                stress,
                hours_slept,
                breaks_taken: breaks,
                hydration: hydration.into(),
                discomfort: discomfort.into_iter().map(DiscomfortArea::from).collect(),
            };
            cmd_assess(&form, output_format)
        }

        Commands::Analytics {
            seed,
            export,
            report,
            trend,
            output_format,
        } => cmd_analytics(seed, export.as_deref(), report, trend, output_format),

        Commands::Doctor { json } => cmd_doctor(cli.config.as_deref(), json),
    }
}

fn load_config(path: Option<&Path>) -> Result<MonitorConfig, GuardCliError> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            Ok(MonitorConfig::from_json(&json)?)
        }
        None => Ok(MonitorConfig::default()),
    }
}

fn cmd_scan(
    config: &MonitorConfig,
    image: Option<&Path>,
    audio: Option<&Path>,
    count: usize,
    seed: Option<u64>,
    output_format: OutputFormat,
) -> Result<(), GuardCliError> {
    if count == 0 {
        return Err(GuardCliError::NothingToDo("--count must be at least 1"));
    }

    let image_bytes = read_media(image)?;
    let audio_bytes = match audio {
        Some(path) => Some(fs::read(path)?),
        None => None,
    };

    let mut monitor = HealthMonitor::simulated(seed, config.clamp_policy);
    let mut outcomes = Vec::with_capacity(count);
    for _ in 0..count {
        outcomes.push(monitor.scan(&image_bytes, audio_bytes.as_deref()));
    }

    let session = monitor.session();
    let banner = dashboard_banner(session.state());
    let alerts = check_thresholds(session.state(), config);

    match output_format {
        OutputFormat::Text => {
            println!("{} Scan", PRODUCT_NAME);
            println!("==============");
            println!("Worker: {}", config.profile_line());
            for (index, outcome) in outcomes.iter().enumerate() {
                let report = &outcome.report;
                println!("\nScan {} of {}", index + 1, count);
                for row in vital_sign_rows(report) {
                    println!(
                        "  {:<7} {:<15} {}",
                        row.indicator.symbol(),
                        row.metric,
                        row.value
                    );
                }
                println!("  Recommendation: {}", report.recommendation);
                for tip in &outcome.posture_recommendations {
                    println!("  - {}", tip);
                }
            }

            println!("\nSession {}", session.session_id());
            println!("  Scans recorded: {}", session.history().len());
            println!("  {}", banner.message);
            if config.auto_health_checks {
                for alert in &alerts {
                    println!("  [ALERT] {}", serde_json::to_string(alert)?);
                }
            } else {
                println!("  Automatic health checks are off; threshold alerts skipped");
            }
        }
        _ => {
            let reports: Vec<_> = outcomes
                .iter()
                .map(|outcome| outcome.report.to_field_map())
                .collect();
            let payload = ScanOutput {
                worker_id: &config.worker_id,
                department: config.department.label(),
                shift: config.shift.label(),
                session_id: session.session_id().to_string(),
                reports,
                banner,
                alerts,
            };
            print_json(&payload, output_format)?;
        }
    }

    Ok(())
}

fn cmd_voice(
    audio: Option<&Path>,
    simulate: Option<usize>,
    seed: Option<u64>,
    output_format: OutputFormat,
) -> Result<(), GuardCliError> {
    let mut generator = match seed {
        Some(seed) => SimulatedSignalGenerator::from_seed(seed),
        None => SimulatedSignalGenerator::from_entropy(),
    };

    if let Some(runs) = simulate {
        if runs == 0 {
            return Err(GuardCliError::NothingToDo("--simulate must be at least 1"));
        }
        let rows = generator.simulate_voice_batch(runs);

        match output_format {
            OutputFormat::Text => {
                println!("{:<8} {:>7} {:>8} {:>12} {:>7}", "Run", "Stress", "Fatigue", "Speech Rate", "Health");
                for row in &rows {
                    println!(
                        "{:<8} {:>6.0}% {:>8.0} {:>8.0} WPM {:>7.0}",
                        row.label, row.stress, row.fatigue, row.speech_rate, row.health
                    );
                }
                if let Some(latest) = rows.last() {
                    println!("\nLatest voice health: {}", latest.health_label().as_str());
                }
            }
            _ => print_json(&rows, output_format)?,
        }
        return Ok(());
    }

    let audio_bytes = read_media(audio)?;
    let reading = generator.produce_voice_reading(&audio_bytes);
    let tips = voice_care_tips(&reading);

    match output_format {
        OutputFormat::Text => {
            println!("Voice Analysis");
            println!("==============");
            println!("Vocal stress:  {:.0}%", reading.vocal_stress * 100.0);
            println!("Speech rate:   {:.0} WPM", reading.speech_rate);
            println!("Fatigue level: {}", reading.fatigue_level.as_str());
            println!("Voice health:  {}", reading.voice_health.as_str());
            println!();
            match &tips.warning {
                Some(warning) => println!("[WARN] {}", warning),
                None => println!("[OK] Voice appears healthy"),
            }
            for tip in &tips.tips {
                println!("  - {}", tip);
            }
        }
        _ => print_json(
            &VoiceOutput {
                reading: &reading,
                tips: &tips,
            },
            output_format,
        )?,
    }

    Ok(())
}

fn cmd_text(text: Option<String>, output_format: OutputFormat) -> Result<(), GuardCliError> {
    let text = match text {
        Some(text) => text,
        None => {
            if atty::is(atty::Stream::Stdin) {
                return Err(GuardCliError::NothingToDo(
                    "pass --text or pipe text on stdin",
                ));
            }
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let analysis = analyze_text(&text);

    match output_format {
        OutputFormat::Text => {
            println!("Word count:      {}", analysis.word_count);
            println!("Stress keywords: {}", analysis.keyword_hits);
            println!("Stress ratio:    {:.3}", analysis.stress_ratio);
            println!("Text stress:     {}", analysis.stress_level);
            println!("\n{}", analysis.headline);
            for recommendation in &analysis.recommendations {
                println!("  - {}", recommendation);
            }
        }
        _ => print_json(&analysis, output_format)?,
    }

    Ok(())
}

fn cmd_assess(form: &SelfAssessment, output_format: OutputFormat) -> Result<(), GuardCliError> {
    let result = form.score()?;

    match output_format {
        OutputFormat::Text => {
            println!("Estimated Health Score: {:.0}/100", result.overall_score);
            println!("Condition: {:?}", result.condition);
            if !result.recommendations.is_empty() {
                println!("\nRecommendations:");
                for recommendation in &result.recommendations {
                    println!("  - {}", recommendation);
                }
            }
        }
        _ => print_json(&result, output_format)?,
    }

    Ok(())
}

fn cmd_analytics(
    seed: Option<u64>,
    export: Option<&Path>,
    report: bool,
    trend: bool,
    output_format: OutputFormat,
) -> Result<(), GuardCliError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let history = generate_history(&mut rng, default_history_start(), HISTORY_DAYS);
    let summary = AnalyticsSummary::from_records(&history);

    if let Some(path) = export {
        if path.to_string_lossy() == "-" {
            write_csv(&history, io::stdout().lock())?;
            return Ok(());
        }
        write_csv(&history, fs::File::create(path)?)?;
    }

    let shift_trend = if trend {
        Some(generate_shift_trend(&mut rng))
    } else {
        None
    };

    match output_format {
        OutputFormat::Text => {
            println!("Health Statistics ({} days)", summary.days);
            println!("  Avg Health Score: {:.1}", summary.average_health);
            println!("  Lowest Score:     {:.1}", summary.lowest_health);
            println!("  Healthy Days:     {}", summary.healthy_days);
            println!("  30-Day Change:    {:+.1}", summary.change);

            if let Some(points) = &shift_trend {
                println!("\nShift Trend");
                println!("  {:>4} {:>10} {:>7} {:>8}", "Hour", "Heart Rate", "Stress", "Posture");
                for point in points {
                    println!(
                        "  {:>4} {:>10} {:>7} {:>8}",
                        point.hour, point.heart_rate, point.stress_score, point.posture_score
                    );
                }
            }

            if report {
                println!("\n{}", summary.monthly_report());
            }
        }
        _ => {
            let payload = AnalyticsOutput {
                summary: &summary,
                shift_trend: shift_trend.as_deref(),
                report: report.then(|| summary.monthly_report()),
            };
            print_json(&payload, output_format)?;
        }
    }

    Ok(())
}

fn cmd_doctor(config_path: Option<&Path>, json: bool) -> Result<(), GuardCliError> {
    let mut checks: Vec<DoctorCheck> = Vec::new();

    checks.push(DoctorCheck {
        name: "guard_version".to_string(),
        status: CheckStatus::Ok,
        message: format!("{} version {}", PRODUCT_NAME, GUARD_VERSION),
    });

    checks.extend(config_checks(config_path));

    checks.push(DoctorCheck {
        name: "signal_source".to_string(),
        status: CheckStatus::Warning,
        message: "Readings are simulated; media content is not analyzed".to_string(),
    });

    let report = DoctorReport {
        product: PRODUCT_NAME.to_string(),
        version: GUARD_VERSION.to_string(),
        checks,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Guard Doctor Report");
        println!("===================");
        println!("Product: {}", report.product);
        println!("Version: {}", report.version);
        println!("\nChecks:");

        for check in &report.checks {
            let status_icon = match check.status {
                CheckStatus::Ok => "[OK]",
                CheckStatus::Warning => "[WARN]",
                CheckStatus::Error => "[ERR]",
            };
            println!("  {} {}: {}", status_icon, check.name, check.message);
        }
    }

    let has_errors = report
        .checks
        .iter()
        .any(|c| matches!(c.status, CheckStatus::Error));
    if has_errors {
        Err(GuardCliError::DoctorFailed)
    } else {
        Ok(())
    }
}

/// Load and validate the config file, reporting each problem as a check
fn config_checks(config_path: Option<&Path>) -> Vec<DoctorCheck> {
    let path = match config_path {
        Some(path) => path,
        None => {
            let mut checks = vec![DoctorCheck {
                name: "config".to_string(),
                status: CheckStatus::Warning,
                message: "No config file given, using defaults".to_string(),
            }];
            checks.extend(settings_checks(&MonitorConfig::default()));
            return checks;
        }
    };

    let loaded = if path.exists() {
        fs::read_to_string(path)
            .map_err(|e| format!("Cannot read {}: {}", path.display(), e))
            .and_then(|content| {
                MonitorConfig::from_json(&content).map_err(|e| match e {
                    GuardError::JsonError(e) => format!("Invalid config JSON: {}", e),
                    e => e.to_string(),
                })
            })
    } else {
        Err(format!("Config file not found: {}", path.display()))
    };

    match loaded {
        Ok(config) => {
            let mut checks = vec![DoctorCheck {
                name: "config".to_string(),
                status: CheckStatus::Ok,
                message: format!("Loaded {}", path.display()),
            }];
            checks.extend(settings_checks(&config));
            checks
        }
        Err(message) => vec![DoctorCheck {
            name: "config".to_string(),
            status: CheckStatus::Error,
            message,
        }],
    }
}

fn settings_checks(config: &MonitorConfig) -> Vec<DoctorCheck> {
    vec![
        DoctorCheck {
            name: "worker".to_string(),
            status: CheckStatus::Ok,
            message: config.profile_line(),
        },
        DoctorCheck {
            name: "thresholds".to_string(),
            status: CheckStatus::Ok,
            message: format!(
                "Heart rate alert above {} bpm, posture alert below {}",
                config.max_heart_rate_alert, config.min_posture_score
            ),
        },
        if config.auto_health_checks {
            DoctorCheck {
                name: "auto_health_checks".to_string(),
                status: CheckStatus::Ok,
                message: "Threshold alerts enabled".to_string(),
            }
        } else {
            DoctorCheck {
                name: "auto_health_checks".to_string(),
                status: CheckStatus::Warning,
                message: "Automatic health checks are off; no threshold alerts".to_string(),
            }
        },
    ]
}

// Helper functions

fn read_media(path: Option<&Path>) -> Result<Vec<u8>, GuardCliError> {
    match path {
        Some(path) => Ok(fs::read(path)?),
        None => Ok(Vec::new()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<(), GuardCliError> {
    let rendered = match format {
        OutputFormat::JsonPretty => serde_json::to_string_pretty(value)?,
        _ => serde_json::to_string(value)?,
    };
    println!("{}", rendered);
    Ok(())
}

// Output types

#[derive(Serialize)]
struct ScanOutput<'a> {
    worker_id: &'a str,
    department: &'static str,
    shift: &'static str,
    session_id: String,
    reports: Vec<serde_json::Map<String, serde_json::Value>>,
    banner: healthguard::alerts::DashboardBanner,
    alerts: Vec<healthguard::alerts::ThresholdAlert>,
}

#[derive(Serialize)]
struct VoiceOutput<'a> {
    reading: &'a healthguard::types::VoiceReading,
    tips: &'a healthguard::sensors::VoiceCareTips,
}

#[derive(Serialize)]
struct AnalyticsOutput<'a> {
    summary: &'a AnalyticsSummary,
    shift_trend: Option<&'a [healthguard::analytics::HourlyTrendPoint]>,
    report: Option<String>,
}

// Error types

#[derive(Debug)]
enum GuardCliError {
    Io(io::Error),
    Guard(GuardError),
    Json(serde_json::Error),
    NothingToDo(&'static str),
    DoctorFailed,
}

impl From<io::Error> for GuardCliError {
    fn from(e: io::Error) -> Self {
        GuardCliError::Io(e)
    }
}

impl From<GuardError> for GuardCliError {
    fn from(e: GuardError) -> Self {
        GuardCliError::Guard(e)
    }
}

impl From<serde_json::Error> for GuardCliError {
    fn from(e: serde_json::Error) -> Self {
        GuardCliError::Json(e)
    }
}

#[derive(Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<GuardCliError> for CliError {
    fn from(e: GuardCliError) -> Self {
        match e {
            GuardCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            GuardCliError::Guard(GuardError::InvalidAssessment(msg)) => CliError {
                code: "INVALID_ASSESSMENT".to_string(),
                message: msg,
                hint: Some("Run 'guard assess --help' for accepted ranges".to_string()),
            },
            GuardCliError::Guard(GuardError::InvalidConfig(msg)) => CliError {
                code: "INVALID_CONFIG".to_string(),
                message: msg,
                hint: Some("Run 'guard --config <file> doctor' to see every failing check".to_string()),
            },
            GuardCliError::Guard(e) => CliError {
                code: "GUARD_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
            GuardCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            GuardCliError::NothingToDo(msg) => CliError {
                code: "NOTHING_TO_DO".to_string(),
                message: msg.to_string(),
                hint: None,
            },
            GuardCliError::DoctorFailed => CliError {
                code: "DOCTOR_FAILED".to_string(),
                message: "One or more checks failed".to_string(),
                hint: Some("Review the doctor report for details".to_string()),
            },
        }
    }
}

// Report types

#[derive(Serialize)]
struct DoctorReport {
    product: String,
    version: String,
    checks: Vec<DoctorCheck>,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: String,
    status: CheckStatus,
    message: String,
}

#[derive(Debug, PartialEq, Serialize)]
enum CheckStatus {
    Ok,
    Warning,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_doctor_reports_out_of_range_config() {
        let file = config_file(r#"{"max_heart_rate_alert": 150}"#);

        let checks = config_checks(Some(file.path()));
        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].status, CheckStatus::Error);
        assert!(checks[0].message.contains("max_heart_rate_alert"));

        let result = cmd_doctor(Some(file.path()), true);
        assert!(matches!(result, Err(GuardCliError::DoctorFailed)));
    }

    #[test]
    fn test_doctor_reports_bad_json_and_missing_file() {
        let file = config_file("{ not json");
        let checks = config_checks(Some(file.path()));
        assert_eq!(checks[0].status, CheckStatus::Error);
        assert!(checks[0].message.starts_with("Invalid config JSON"));

        let missing = file.path().with_extension("missing");
        let checks = config_checks(Some(missing.as_path()));
        assert_eq!(checks[0].status, CheckStatus::Error);
        assert!(checks[0].message.starts_with("Config file not found"));
    }

    #[test]
    fn test_doctor_shows_worker_profile() {
        let file = config_file(
            r#"{"worker_id": "WRK-003", "department": "packaging", "auto_health_checks": false}"#,
        );
        let checks = config_checks(Some(file.path()));

        let find = |name: &str| checks.iter().find(|c| c.name == name).unwrap();
        assert_eq!(find("config").status, CheckStatus::Ok);
        assert_eq!(
            find("worker").message,
            "WRK-003 | Packaging | Morning (6AM-2PM)"
        );
        assert_eq!(find("auto_health_checks").status, CheckStatus::Warning);

        assert!(cmd_doctor(Some(file.path()), true).is_ok());
    }

    #[test]
    fn test_only_scan_reads_the_config() {
        let file = config_file(r#"{"max_heart_rate_alert": 150}"#);
        let path = file.path().to_str().unwrap();

        assert!(run(parse(&["guard", "--config", path, "text", "--text", "hi"])).is_ok());
        assert!(run(parse(&["guard", "--config", path, "assess"])).is_ok());
        assert!(run(parse(&["guard", "--config", path, "voice", "--seed", "1"])).is_ok());

        let result = run(parse(&["guard", "--config", path, "scan", "--seed", "1"]));
        assert!(matches!(
            result,
            Err(GuardCliError::Guard(GuardError::InvalidConfig(_)))
        ));
    }
}

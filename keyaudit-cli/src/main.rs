mod formatter;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use formatter::{format_json, format_text};
use keyaudit_core::{AuditMode, AuditRunner};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keyaudit")]
#[command(version)]
#[command(
    about = "Audit SSH key and AWS credential storage for weak permissions and unencrypted keys",
    long_about = None
)]
struct Cli {
    /// Which credential stores to audit
    #[arg(short, long, value_enum, default_value_t = Mode::All)]
    mode: Mode,

    /// Directory to scan for SSH keys [default: home directory]
    #[arg(long)]
    ssh_dir: Option<PathBuf>,

    /// AWS credentials directory [default: ~/.aws]
    #[arg(long)]
    aws_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Exit with status 1 when any finding is present
    #[arg(long)]
    check: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// AWS credentials file only
    Aws,
    /// SSH key storage only
    Ssh,
    /// Both checks
    All,
}

impl From<Mode> for AuditMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Aws => AuditMode::Aws,
            Mode::Ssh => AuditMode::Ssh,
            Mode::All => AuditMode::All,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
    /// JSON with pretty printing
    JsonPretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let home = dirs::home_dir().context("could not determine the home directory")?;
    let ssh_root = cli.ssh_dir.unwrap_or_else(|| home.clone());
    let aws_dir = cli.aws_dir.unwrap_or_else(|| home.join(".aws"));

    let runner = AuditRunner::new(cli.mode.into(), ssh_root, aws_dir);
    let report = runner.run();

    let output = match cli.format {
        OutputFormat::Text => format_text(&report),
        OutputFormat::Json => format_json(&report, false)?,
        OutputFormat::JsonPretty => format_json(&report, true)?,
    };

    if let Some(path) = cli.output {
        std::fs::write(&path, output)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
    } else {
        print!("{}", output);
    }

    if cli.check && report.has_findings() {
        std::process::exit(1);
    }

    Ok(())
}

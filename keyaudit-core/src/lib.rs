pub mod error;
pub mod modules;
pub mod types;

use chrono::Utc;
use std::path::PathBuf;

pub use error::AuditError;
use modules::{AwsCredentialChecker, SshKeyScanner};
use types::{AuditMetadata, AuditReport, SshReport};

/// Which credential stores to audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditMode {
    Aws,
    Ssh,
    All,
}

impl AuditMode {
    pub fn includes_ssh(&self) -> bool {
        matches!(self, AuditMode::Ssh | AuditMode::All)
    }

    pub fn includes_aws(&self) -> bool {
        matches!(self, AuditMode::Aws | AuditMode::All)
    }
}

/// Main orchestrator: runs the requested analyzers and assembles a report.
pub struct AuditRunner {
    mode: AuditMode,
    ssh_root: PathBuf,
    aws_dir: PathBuf,
}

impl AuditRunner {
    pub fn new(mode: AuditMode, ssh_root: impl Into<PathBuf>, aws_dir: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            ssh_root: ssh_root.into(),
            aws_dir: aws_dir.into(),
        }
    }

    /// Check if running as root
    fn is_root() -> bool {
        nix::unistd::Uid::effective().is_root()
    }

    /// Get hostname
    fn get_hostname() -> String {
        nix::unistd::gethostname()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Run the audit and assemble the complete report.
    ///
    /// Infallible: a missing scan root becomes part of the report, and every
    /// per-file failure is absorbed by the analyzers. A missing root for one
    /// mode never stops the other.
    pub fn run(&self) -> AuditReport {
        let metadata = AuditMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            hostname: Self::get_hostname(),
            run_as_root: Self::is_root(),
        };

        let ssh = self.mode.includes_ssh().then(|| {
            match SshKeyScanner::new().scan(&self.ssh_root) {
                Ok(result) => SshReport::Scanned {
                    root: self.ssh_root.clone(),
                    result,
                },
                Err(AuditError::DirectoryNotFound(root)) => SshReport::RootMissing { root },
            }
        });

        let aws = self
            .mode
            .includes_aws()
            .then(|| AwsCredentialChecker::new().check(&self.aws_dir));

        AuditReport { metadata, ssh, aws }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_selects_sections() {
        assert!(AuditMode::All.includes_ssh());
        assert!(AuditMode::All.includes_aws());
        assert!(AuditMode::Ssh.includes_ssh());
        assert!(!AuditMode::Ssh.includes_aws());
        assert!(AuditMode::Aws.includes_aws());
        assert!(!AuditMode::Aws.includes_ssh());
    }

    #[test]
    fn aws_only_run_has_no_ssh_section() {
        let runner = AuditRunner::new(AuditMode::Aws, "/nonexistent", "/also/nonexistent");
        let report = runner.run();
        assert!(report.ssh.is_none());
        assert!(report.aws.is_some());
    }
}

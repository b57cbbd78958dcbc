use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::PermissionViolation;

/// Violated permission bits for a single file.
///
/// Created once per flagged file during a scan and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionFinding {
    pub path: PathBuf,
    pub violations: Vec<PermissionViolation>,
}

/// Outcome of one key-directory scan.
///
/// Both lists are in directory-walk discovery order. A path may appear in
/// both: an unencrypted key with loose permissions is listed twice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanResult {
    pub unencrypted_keys: Vec<PathBuf>,
    pub permission_findings: Vec<PermissionFinding>,
}

impl ScanResult {
    pub fn is_secure(&self) -> bool {
        self.unencrypted_keys.is_empty() && self.permission_findings.is_empty()
    }
}

/// Outcome of the AWS credentials check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AwsAuditResult {
    /// Directory absent, no entry named `credentials`, or the entry is not a
    /// regular file. The causes are not distinguished.
    Missing,
    Audited {
        path: PathBuf,
        violations: Vec<PermissionViolation>,
        /// Set when the credentials file could not be inspected. Counts as
        /// insecure rather than as a silent pass.
        inspect_failed: bool,
    },
}

impl AwsAuditResult {
    pub fn is_insecure(&self) -> bool {
        match self {
            AwsAuditResult::Missing => false,
            AwsAuditResult::Audited {
                violations,
                inspect_failed,
                ..
            } => *inspect_failed || !violations.is_empty(),
        }
    }
}

/// Outcome of the SSH key sub-scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SshReport {
    /// The requested root directory does not exist; nothing was scanned.
    RootMissing { root: PathBuf },
    Scanned { root: PathBuf, result: ScanResult },
}

impl SshReport {
    pub fn has_findings(&self) -> bool {
        match self {
            SshReport::RootMissing { .. } => false,
            SshReport::Scanned { result, .. } => !result.is_secure(),
        }
    }
}

/// Metadata about when and where the audit ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditMetadata {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub hostname: String,
    pub run_as_root: bool,
}

/// Complete audit output. Sections are present only for the requested modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub metadata: AuditMetadata,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh: Option<SshReport>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws: Option<AwsAuditResult>,
}

impl AuditReport {
    /// True when any sub-check produced a security finding.
    pub fn has_findings(&self) -> bool {
        self.ssh.as_ref().is_some_and(|s| s.has_findings())
            || self.aws.as_ref().is_some_and(|a| a.is_insecure())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aws_inspect_failure_counts_as_insecure() {
        let result = AwsAuditResult::Audited {
            path: PathBuf::from("/home/user/.aws/credentials"),
            violations: Vec::new(),
            inspect_failed: true,
        };
        assert!(result.is_insecure());
    }

    #[test]
    fn aws_missing_is_not_a_finding() {
        assert!(!AwsAuditResult::Missing.is_insecure());
    }

    #[test]
    fn empty_scan_result_is_secure() {
        assert!(ScanResult::default().is_secure());
    }
}

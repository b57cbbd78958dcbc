use anyhow::Result;
use colored::Colorize;
use keyaudit_core::types::{AuditReport, AwsAuditResult, ScanResult, SshReport};

/// Format the audit report as human-readable text
pub fn format_text(report: &AuditReport) -> String {
    let mut output = String::new();

    // Header
    output.push_str("═══════════════════════════════════════════════════════════════\n");
    output.push_str("              Credential Storage Audit\n");
    output.push_str("═══════════════════════════════════════════════════════════════\n\n");

    output.push_str(&format!("Version: {}\n", report.metadata.version));
    output.push_str(&format!(
        "Timestamp: {}\n",
        report.metadata.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!("Hostname: {}\n", report.metadata.hostname));
    output.push_str(&format!(
        "Run as root: {}\n",
        if report.metadata.run_as_root { "Yes" } else { "No" }
    ));
    output.push('\n');

    if let Some(ref ssh) = report.ssh {
        output.push_str("─────────────────────────────────────────────────────────────\n");
        output.push_str("SSH KEY STORAGE\n");
        output.push_str("─────────────────────────────────────────────────────────────\n");
        format_ssh_section(&mut output, ssh);
        output.push('\n');
    }

    if let Some(ref aws) = report.aws {
        output.push_str("─────────────────────────────────────────────────────────────\n");
        output.push_str("AWS KEY STORAGE\n");
        output.push_str("─────────────────────────────────────────────────────────────\n");
        format_aws_section(&mut output, aws);
        output.push('\n');
    }

    output.push_str("═══════════════════════════════════════════════════════════════\n");
    if report.has_findings() {
        output.push_str(&format!(
            "{}\n",
            "Findings present. Review the sections above.".red().bold()
        ));
    } else {
        output.push_str(&format!("{}\n", "No findings.".green().bold()));
    }
    output.push_str("═══════════════════════════════════════════════════════════════\n");

    output
}

fn format_ssh_section(output: &mut String, ssh: &SshReport) {
    match ssh {
        SshReport::RootMissing { root } => {
            output.push_str(&format!(
                "{}\n",
                format!("Can't find key directory {}", root.display()).yellow()
            ));
        }
        SshReport::Scanned { root, result } => {
            output.push_str(&format!("Scanned: {}\n\n", root.display()));
            format_scan_result(output, result);
        }
    }
}

fn format_scan_result(output: &mut String, result: &ScanResult) {
    if result.is_secure() {
        output.push_str(&format!("{}\n", "Your SSH key storage is secure!".green().bold()));
        return;
    }

    output.push_str(&format!("{}\n", "Your SSH key storage isn't secure!".red().bold()));

    if !result.unencrypted_keys.is_empty() {
        output.push_str(&format!(
            "\n{}\n",
            "The following key files are unencrypted:".red()
        ));
        for path in &result.unencrypted_keys {
            output.push_str(&format!("  {}\n", path.display().to_string().yellow()));
        }
        output.push_str("  → Add a passphrase with `ssh-keygen -p -f <file>`\n");
    }

    if !result.permission_findings.is_empty() {
        output.push_str(&format!(
            "\n{}\n",
            "Some of your files have unnecessary permissions. They might be \
             accessed by any process launched with your user account."
                .red()
        ));
        for finding in &result.permission_findings {
            let labels: Vec<&str> = finding.violations.iter().map(|v| v.label()).collect();
            output.push_str(&format!(
                "  {} — {}\n",
                finding.path.display().to_string().yellow(),
                labels.join(", ")
            ));
        }

        let paths: Vec<String> = result
            .permission_findings
            .iter()
            .map(|finding| finding.path.display().to_string())
            .collect();
        output.push_str(&format!("  → Run `chmod 600 {}` to fix this issue\n", paths.join(" ")));
    }
}

fn format_aws_section(output: &mut String, aws: &AwsAuditResult) {
    match aws {
        AwsAuditResult::Missing => {
            output.push_str(&format!(
                "{}\n",
                "Can't find AWS key storage or permissions properly configured".yellow()
            ));
        }
        AwsAuditResult::Audited {
            path,
            violations,
            inspect_failed,
        } => {
            output.push_str(&format!("Checked: {}\n\n", path.display()));

            if *inspect_failed {
                output.push_str(&format!(
                    "{}\n",
                    "AWS credentials file could not be inspected — treating as insecure."
                        .red()
                        .bold()
                ));
                return;
            }

            if violations.is_empty() {
                output.push_str(&format!("{}\n", "Your AWS key storage is secure!".green().bold()));
            } else {
                output.push_str(&format!("{}\n", "Your AWS key storage isn't secure.".red().bold()));
                let labels: Vec<&str> = violations.iter().map(|v| v.label()).collect();
                output.push_str(&format!("  {} — {}\n", path.display(), labels.join(", ")));
                output.push_str(&format!(
                    "  → Run `chmod 600 {}` to fix this issue\n",
                    path.display()
                ));
            }
        }
    }
}

/// Format the audit report as JSON
pub fn format_json(report: &AuditReport, pretty: bool) -> Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(serde_json::to_string(report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyaudit_core::{AuditMode, AuditRunner};

    fn report_for_missing_targets() -> AuditReport {
        AuditRunner::new(AuditMode::All, "/no/such/home", "/no/such/home/.aws").run()
    }

    #[test]
    fn text_report_mentions_missing_targets() {
        let text = format_text(&report_for_missing_targets());
        assert!(text.contains("Can't find key directory"));
        assert!(text.contains("Can't find AWS key storage"));
        assert!(text.contains("No findings."));
    }

    #[test]
    fn json_report_round_trips() {
        let report = report_for_missing_targets();
        let json = format_json(&report, true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["ssh"]["status"], "root_missing");
        assert_eq!(parsed["aws"]["status"], "missing");
    }
}

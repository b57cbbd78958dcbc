use crate::types::PermissionViolation;

/// File permission auditor.
///
/// Evaluates unix mode bits against the owner-read/owner-write baseline
/// shared by the SSH and AWS checks: a credential file may be readable and
/// writable by its owner only, and executable by nobody.
pub struct PermissionAuditor;

impl PermissionAuditor {
    pub fn new() -> Self {
        Self
    }

    /// Return the policy bits set in `mode`, in policy order.
    ///
    /// Pure function of the mode value; bits outside the policy (file type,
    /// setuid, sticky) are ignored rather than rejected.
    pub fn evaluate(&self, mode: u32) -> Vec<PermissionViolation> {
        PermissionViolation::POLICY
            .iter()
            .copied()
            .filter(|violation| mode & violation.mode_bit() != 0)
            .collect()
    }
}

impl Default for PermissionAuditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_read_write_only_is_clean() {
        let auditor = PermissionAuditor::new();
        for mode in [0o600, 0o400, 0o200, 0o000] {
            assert!(auditor.evaluate(mode).is_empty(), "mode {:o} flagged", mode);
        }
    }

    #[test]
    fn each_policy_bit_is_flagged_individually() {
        let auditor = PermissionAuditor::new();
        for violation in PermissionViolation::POLICY {
            let flagged = auditor.evaluate(violation.mode_bit());
            assert_eq!(flagged, vec![*violation]);
        }
    }

    #[test]
    fn world_readable_key_mode_reports_both_reads() {
        let auditor = PermissionAuditor::new();
        let flagged = auditor.evaluate(0o644);
        assert_eq!(
            flagged,
            vec![
                PermissionViolation::GroupRead,
                PermissionViolation::EveryoneRead
            ]
        );
    }

    #[test]
    fn fully_open_mode_reports_entire_policy() {
        let auditor = PermissionAuditor::new();
        assert_eq!(auditor.evaluate(0o777), PermissionViolation::POLICY.to_vec());
    }

    #[test]
    fn file_type_and_special_bits_are_ignored() {
        let auditor = PermissionAuditor::new();
        // st_mode of a regular file with setuid and sticky bits, 0600 perms.
        assert!(auditor.evaluate(0o100_600 | 0o4000 | 0o1000).is_empty());
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// A permission bit that must never be set on a credential file.
///
/// The policy baseline is owner-read/owner-write only: a key or credentials
/// file may be read and written by its owner and nothing else, and must not
/// be executable by anyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionViolation {
    GroupRead,
    EveryoneRead,
    UserExecute,
    GroupExecute,
    GroupWrite,
    EveryoneWrite,
    EveryoneExecute,
}

impl PermissionViolation {
    /// The full policy, in the order violations are checked and reported.
    pub const POLICY: &'static [PermissionViolation] = &[
        PermissionViolation::GroupRead,
        PermissionViolation::EveryoneRead,
        PermissionViolation::UserExecute,
        PermissionViolation::GroupExecute,
        PermissionViolation::GroupWrite,
        PermissionViolation::EveryoneWrite,
        PermissionViolation::EveryoneExecute,
    ];

    /// Unix mode bit this violation corresponds to.
    pub fn mode_bit(&self) -> u32 {
        match self {
            PermissionViolation::GroupRead => 0o040,
            PermissionViolation::EveryoneRead => 0o004,
            PermissionViolation::UserExecute => 0o100,
            PermissionViolation::GroupExecute => 0o010,
            PermissionViolation::GroupWrite => 0o020,
            PermissionViolation::EveryoneWrite => 0o002,
            PermissionViolation::EveryoneExecute => 0o001,
        }
    }

    /// Human-readable label for reports, e.g. "Group read".
    pub fn label(&self) -> &'static str {
        match self {
            PermissionViolation::GroupRead => "Group read",
            PermissionViolation::EveryoneRead => "Everyone read",
            PermissionViolation::UserExecute => "User execute",
            PermissionViolation::GroupExecute => "Group execute",
            PermissionViolation::GroupWrite => "Group write",
            PermissionViolation::EveryoneWrite => "Everyone write",
            PermissionViolation::EveryoneExecute => "Everyone execute",
        }
    }
}

impl fmt::Display for PermissionViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_covers_every_non_owner_rw_bit() {
        let covered: u32 = PermissionViolation::POLICY
            .iter()
            .map(|v| v.mode_bit())
            .fold(0, |acc, bit| acc | bit);
        // Everything in the low nine bits except owner-read and owner-write.
        assert_eq!(covered, 0o777 & !0o600);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(PermissionViolation::GroupRead.label(), "Group read");
        assert_eq!(PermissionViolation::EveryoneRead.label(), "Everyone read");
        assert_eq!(PermissionViolation::UserExecute.label(), "User execute");
    }
}

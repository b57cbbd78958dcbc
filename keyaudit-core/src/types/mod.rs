pub mod report;
pub mod violation;

pub use report::*;
pub use violation::PermissionViolation;

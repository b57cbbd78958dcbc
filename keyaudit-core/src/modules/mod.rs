pub mod aws;
pub mod permissions;
pub mod ssh_keys;

pub use aws::AwsCredentialChecker;
pub use permissions::PermissionAuditor;
pub use ssh_keys::SshKeyScanner;

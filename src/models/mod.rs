// src/models/mod.rs

pub mod amr;
pub mod claim;

// Re-exports

pub use amr::{AuthenticationMethod, LookupMode, LEGACY_FINGERPRINT_CODE};
pub use claim::AmrClaim;

// src/lib.rs

pub mod cli;
pub mod config;
pub mod error;
pub mod models;

pub use error::{AmrError, ConfigError};
pub use models::{AmrClaim, AuthenticationMethod, LookupMode};

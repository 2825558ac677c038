//! Core types, combinators, and preset configuration for Vigil.
//!
//! This crate provides the shared foundation used by the review crate and
//! the binary:
//! - [`AppError`] — closed error union using `thiserror`
//! - Combinators over fallible operations: [`handle_error`], [`map_error`],
//!   [`safe_operation`], [`recover_with`], [`retry`], [`to_option`],
//!   [`from_option`], [`safe_compose`]
//! - Preset resolution: [`Preset`], [`ReviewerConfig`], [`ReviewerOptions`]
//! - [`VigilConfig`] — settings loaded from `.vigil.toml`
//! - Shared types: [`SupportedLanguage`], [`AnalysisInput`]

mod combinators;
mod config;
mod error;
mod types;

pub use combinators::{
    from_option, handle_error, map_error, recover_with, retry, safe_compose, safe_operation,
    to_option, Step, StepFuture,
};
pub use config::{
    create_reviewer_config, get_config, LlmSettings, Preset, ReviewerConfig, ReviewerOptions,
    VigilConfig,
};
pub use error::{format_error, log_error, log_success, AppError};
pub use types::{AnalysisInput, SupportedLanguage};

/// A convenience `Result` type for Vigil operations.
pub type Result<T> = std::result::Result<T, AppError>;

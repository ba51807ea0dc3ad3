//! Error types emitted by the `wdp` CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use wdp_core::SolveError;
use wdp_data::GenerateError;

/// Errors emitted by the `wdp` CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Opening the auction file failed.
    #[error("failed to open auction at {path:?}: {source}")]
    OpenAuction {
        /// Path that could not be opened.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The auction file is not a valid auction document.
    #[error("failed to parse auction JSON at {path:?}: {source}")]
    ParseAuction {
        /// Path of the rejected document.
        path: Utf8PathBuf,
        /// Decoding or validation error.
        #[source]
        source: serde_json::Error,
    },
    /// Generating a random auction failed.
    #[error("failed to generate auction: {0}")]
    Generate(#[from] GenerateError),
    /// A solver rejected the auction or its configuration.
    #[error("{solver} solver failed: {source}")]
    Solve {
        /// Name of the failing solver.
        solver: &'static str,
        /// Error reported by the solver.
        #[source]
        source: SolveError,
    },
    /// Serialising output to JSON failed.
    #[error("failed to serialise output: {0}")]
    Serialise(#[source] serde_json::Error),
    /// Writing the output file failed.
    #[error("failed to write {path:?}: {source}")]
    WriteFile {
        /// Destination path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

//! Error types emitted by the basket splitter CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use basket_core::{BasketError, CoverageError, InvalidConfigurationError};
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the basket splitter CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field}, {env}, or pass --interactive)")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the input.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the input.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the input.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the delivery configuration failed.
    #[error("failed to open delivery configuration at {path:?}: {source}")]
    OpenConfiguration {
        /// Configuration file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Delivery configuration JSON could not be decoded.
    #[error("failed to parse delivery configuration JSON at {path:?}: {source}")]
    ParseConfiguration {
        /// Configuration file path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The delivery configuration decoded but is not usable.
    #[error("delivery configuration in {path:?} is invalid: {source}")]
    InvalidConfiguration {
        /// Configuration file path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: InvalidConfigurationError,
    },
    /// Opening the basket failed.
    #[error("failed to open basket at {path:?}: {source}")]
    OpenBasket {
        /// Basket file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Basket JSON could not be decoded.
    #[error("failed to parse basket JSON at {path:?}: {source}")]
    ParseBasket {
        /// Basket file path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The basket decoded but holds an unusable entry.
    #[error("basket in {path:?} is invalid: {source}")]
    InvalidBasket {
        /// Basket file path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: BasketError,
    },
    /// The solver could not cover the basket.
    #[error("split failed: {source}")]
    Split {
        /// Coverage failure reported by the solver.
        #[source]
        source: CoverageError,
    },
    /// Serialising the cover failed.
    #[error("failed to serialise cover: {0}")]
    SerialiseCover(#[source] serde_json::Error),
    /// Creating the output file failed.
    #[error("failed to create output file {path:?}: {source}")]
    CreateOutput {
        /// Output file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing the cover failed.
    #[error("failed to write cover: {0}")]
    WriteCover(#[source] std::io::Error),
    /// Reading a prompt answer or writing the prompt failed.
    #[error("failed to prompt for input: {0}")]
    Prompt(#[source] std::io::Error),
    /// The user answered a prompt with an empty line.
    #[error("no {field} path was entered")]
    EmptyPromptResponse {
        /// Option the prompt asked for.
        field: &'static str,
    },
}

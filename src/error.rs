//! Error types for asset catalog, property list and entitlement generation.
//!
//! Provides contextual error chaining, filesystem-specific errors and the
//! validation failures raised by the builders.
//!
//! # Features
//!
//! - **Context trait**: Add context to errors similar to anyhow
//! - **ErrorExt trait**: Filesystem operations with automatic path context
//! - **bail! macro**: Early return with formatted error messages
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_assets::error::{Context, ErrorExt, Result};
//! use std::path::Path;
//!
//! fn read_manifest(path: &Path) -> Result<toml::Table> {
//!     let contents = std::fs::read_to_string(path)
//!         .fs_context("reading asset manifest", path)?;
//!
//!     let table: toml::Table = toml::from_str(&contents)
//!         .map_err(kodegen_bundler_assets::Error::from)
//!         .context("parsing asset manifest")?;
//!
//!     Ok(table)
//! }
//! ```

use std::{fmt::Display, io, path::PathBuf};
use thiserror::Error as DeriveError;

/// Errors returned by the asset builders.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// Error with context. Created by the [`Context`] trait.
    #[error("{0}: {1}")]
    Context(String, Box<Self>),

    /// File system error with path context.
    ///
    /// Created by the [`ErrorExt`] trait's `fs_context` method.
    #[error("{context} {path}: {error}")]
    Fs {
        /// Context describing the operation (e.g., "writing Contents.json")
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// Generic I/O error.
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// Image decoding or encoding error.
    #[error("{0}")]
    ImageError(#[from] image::ImageError),

    /// JSON serialization error (Contents.json).
    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    /// Property list serialization error.
    #[error("{0}")]
    Plist(#[from] plist::Error),

    /// Asset manifest parsing error.
    #[error("{0}")]
    Toml(#[from] toml::de::Error),

    /// HTTP client error (downloading remote image sources).
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("{0}")]
    UrlParse(#[from] url::ParseError),

    /// A numeric setting is outside its legal range.
    #[error("{field} is invalid ({value}), must be between {min} and {max}")]
    OutOfRange {
        /// Name of the offending field (e.g. "RGB.red")
        field: &'static str,
        /// The rejected value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// Hex color string could not be parsed.
    #[error("invalid hex color {0:?}, expected #RGB or #RRGGBB")]
    InvalidHex(String),

    /// A color or asset set has no definitions.
    #[error("no {kind} defined for {name}")]
    NoDefinitions {
        /// "colors", "assets"
        kind: &'static str,
        /// Name of the set
        name: String,
    },

    /// Two definitions claim the same device and appearance slot.
    #[error(
        "definitions #{first} and #{second} overlap (devices: {}; appearances: {}) - they must be unique",
        devices.join(","),
        appearances.join(",")
    )]
    Overlap {
        /// Index of the first definition
        first: usize,
        /// Index of the second definition
        second: usize,
        /// Shared idiom tokens
        devices: Vec<String>,
        /// Shared appearance categories
        appearances: Vec<String>,
    },

    /// An icon slot or asset has no file or URL source.
    #[error("no URL or file location specified for {0}")]
    MissingSource(String),

    /// Source image is smaller than required.
    #[error("{source_name} dimensions ({width}x{height}) are less than the minimum required ({min_width}x{min_height})")]
    SourceTooSmall {
        /// Source file name or URL
        source_name: String,
        /// Decoded width
        width: u32,
        /// Decoded height
        height: u32,
        /// Required width
        min_width: u32,
        /// Required height
        min_height: u32,
    },

    /// Source image aspect ratio differs from the desired size.
    #[error("{source_name} aspect ratio ({desired_width}x{desired_height}) does not match the provided image aspect ratio ({width}x{height})")]
    AspectRatioMismatch {
        /// Source file name or URL
        source_name: String,
        /// Desired 1x width
        desired_width: u32,
        /// Desired 1x height
        desired_height: u32,
        /// Decoded width
        width: u32,
        /// Decoded height
        height: u32,
    },

    /// A required Info.plist property is missing.
    #[error("Missing property: {0}")]
    MissingProperty(String),

    /// The destination directory passed to `save_to` does not exist.
    #[error("destination does not exist: {0}")]
    DestinationMissing(PathBuf),

    /// The output directory already exists and overwrite was not requested.
    #[error("{0} already exists (pass overwrite to replace it)")]
    DestinationExists(PathBuf),

    /// Generic error with custom message.
    #[error("{0}")]
    GenericError(String),
}

impl Error {
    /// Returns the innermost error, skipping [`Error::Context`] wrappers.
    pub fn root(&self) -> &Self {
        match self {
            Error::Context(_, inner) => inner.root(),
            other => other,
        }
    }

    /// Get actionable recovery suggestions for this error.
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self.root() {
            Error::Overlap { first, second, .. } => vec![
                format!(
                    "Give definitions #{} and #{} disjoint devices or disjoint appearances",
                    first, second
                ),
                "Remember that dark appearance also claims the any slot".to_string(),
            ],
            Error::NoDefinitions { .. } => {
                vec!["Add at least one variant to the set in the manifest".to_string()]
            }
            Error::SourceTooSmall { min_width, min_height, .. } => vec![format!(
                "Provide a source image of at least {}x{} pixels",
                min_width, min_height
            )],
            Error::AspectRatioMismatch { .. } => vec![
                "Crop the source image to the aspect ratio of the configured size".to_string(),
            ],
            Error::DestinationExists(_) => {
                vec!["Re-run with --overwrite to replace the existing output".to_string()]
            }
            Error::DestinationMissing(path) => {
                vec![format!("Create the directory first: mkdir -p {}", path.display())]
            }
            Error::HttpError(_) => vec![
                "Check network connectivity and that the image URL is reachable".to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}

/// Convenient type alias for Result.
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for adding context to errors.
///
/// Similar to `anyhow::Context` but integrated with this crate's Error type.
/// Works with both `Result<T, E>` and `Option<T>`.
pub trait Context<T> {
    /// Add context to an error.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;

    /// Add context to an error using a closure (lazy evaluation).
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T> Context<T> for Result<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Context(context.to_string(), Box::new(e)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| Error::Context(f().to_string(), Box::new(e)))
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| Error::GenericError(f().to_string()))
    }
}

/// Extension trait for filesystem operations with automatic path context.
pub trait ErrorExt<T> {
    /// Add filesystem context to an I/O error.
    ///
    /// The `context` should be a present-tense verb phrase describing the operation,
    /// e.g., "reading file", "creating directory".
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

/// Macro for early return with error.
///
/// Converts the message into a [`Error::GenericError`] and returns immediately.
///
/// ```ignore
/// bail!("operation failed");
/// bail!("invalid value: {}", value);
/// ```
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::error::Error::GenericError($msg.into()))
    };
    ($err:expr $(,)?) => {
        return Err($crate::error::Error::GenericError($err.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::GenericError(format!($fmt, $($arg)*)))
    };
}

//=========================================================================
// Scene Errors
//=========================================================================
//
// Failures raised while turning a configuration file into a live scene.
//
// `ConfigNotFound` and `FontNotFound` are fatal in every mode. The
// remaining variants are only produced by `ParseMode::Strict`; lenient
// parsing logs and continues instead.
//
//=========================================================================

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading a scene description.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The configuration file could not be opened or read.
    #[error("config `{}` could not be opened", path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The font named by a `Font` directive could not be loaded.
    #[error("font `{path}` could not be loaded: {reason}")]
    FontNotFound { path: String, reason: String },

    /// A directive the scene cannot run without never appeared.
    #[error("config has no `{0}` directive")]
    MissingDirective(&'static str),

    /// Strict mode: a token that is neither a directive nor a shape kind.
    #[error("line {line}: unknown directive `{token}`")]
    UnknownDirective { token: String, line: usize },

    /// Strict mode: the file ended in the middle of a record.
    #[error("config ended while reading `{field}`")]
    UnexpectedEnd { field: &'static str },

    /// Strict mode: a field could not be parsed as a number.
    #[error("line {line}: `{token}` is not a valid {expected} for `{field}`")]
    InvalidNumber {
        token: String,
        line: usize,
        field: &'static str,
        expected: &'static str,
    },

    /// Strict mode: a color channel outside `0..=255`.
    #[error("line {line}: color channel `{field}` is {value}, expected 0-255")]
    ColorOutOfRange {
        value: u32,
        line: usize,
        field: &'static str,
    },
}

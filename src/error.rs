//! Error types returned by the library.
//!
//! Most public APIs return [`crate::Result`], which uses [`Error`] as the
//! error type. Disassembly itself is infallible: corrupt input is
//! represented inline as a `RAW` sentinel line, never as an `Err`.

use std::io;

use thiserror::Error;

/// Convenient result alias for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top level error surfaced by the library APIs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Errors encountered while assembling text lines back into bytecode.
    #[error(transparent)]
    Assemble(#[from] AssembleError),

    /// Errors encountered in the JSON extraction/import layer.
    #[error(transparent)]
    JsonLayer(#[from] JsonLayerError),

    /// Errors encountered while parsing CLI arguments or paths.
    #[error(transparent)]
    Cli(#[from] CliError),

    /// I/O failures when reading or writing files.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// JSON (de)serialization failures.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Configuration file failures.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors returned while assembling textual instruction lines into bytes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssembleError {
    /// A non-blank, non-comment, non-label line did not match the grammar.
    #[error("line {line}: unrecognised instruction syntax: {text:?}")]
    MalformedLine {
        /// 1-based source line number.
        line: usize,
        /// The offending line text.
        text: String,
    },

    /// The JSON argument array did not match the opcode's signature.
    #[error("{context}: opcode {opcode:02X} argument mismatch: {reason}")]
    ArgumentMismatch {
        /// The instruction's label or other identifying context.
        context: String,
        opcode: u8,
        reason: String,
    },

    /// The hex payload of a `RAW` line was not valid hexadecimal.
    #[error("line {line}: invalid hex in RAW line: {source}")]
    InvalidHex {
        line: usize,
        #[source]
        source: hex::FromHexError,
    },

    /// The JSON arguments portion of a line failed to parse.
    #[error("line {line}: invalid argument JSON: {source}")]
    InvalidArgsJson {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// An opcode byte in assembly source is not present in the opcode table.
    #[error("{context}: unknown opcode {opcode:02X}")]
    UnknownOpcode { context: String, opcode: u8 },
}

/// Errors returned by the JSON extraction/import layer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JsonLayerError {
    /// The JSON array did not contain enough entries for the script's
    /// textual opcodes.
    #[error("json input exhausted: needed an entry for {context}, but none remained")]
    EntryExhausted { context: String },

    /// A dialogue entry referenced by index was structurally invalid.
    #[error("json entry {index} is malformed: {reason}")]
    MalformedEntry { index: usize, reason: String },
}

/// Errors returned while parsing CLI arguments or validating paths.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliError {
    /// The input path did not exist.
    #[error("path not found: {path}")]
    PathNotFound { path: String },

    /// Import was given a directory WS2 input paired with a single JSON
    /// file, or vice versa.
    #[error("mode mismatch: {reason}")]
    ModeMismatch { reason: String },

    /// No `.ws2` files were found under the given input path.
    #[error("no .ws2 files found under {path}")]
    NoInputFiles { path: String },
}

/// Errors returned while loading [`crate::config::ToolConfig`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

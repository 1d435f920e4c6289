//! Query shell errors.

use boundless_core::{CoordsParseError, IndexError};
use boundless_rules::VariantError;

/// Errors that can occur while parsing or executing a shell command.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// A command is missing a required argument.
    #[error("{command}: missing {argument}")]
    MissingArgument {
        /// The command being parsed.
        command: &'static str,
        /// What was expected.
        argument: &'static str,
    },

    /// A player token is not one of `w`, `b`, `n` or their long forms.
    #[error("invalid player: {value}")]
    InvalidPlayer {
        /// The token that failed to parse.
        value: String,
    },

    /// A piece name does not match any kind.
    #[error("invalid piece kind: {value}")]
    InvalidKind {
        /// The token that failed to parse.
        value: String,
    },

    /// A coordinate token is malformed.
    #[error("invalid coordinates: {source}")]
    InvalidCoords {
        /// The underlying parse error.
        #[from]
        source: CoordsParseError,
    },

    /// A numeric argument could not be parsed.
    #[error("invalid value for {param}: {value}")]
    InvalidNumber {
        /// The argument name.
        param: &'static str,
        /// The token that failed to parse.
        value: String,
    },

    /// `variant` names no known variant.
    #[error("unknown variant: {name}")]
    UnknownVariant {
        /// The requested name.
        name: String,
    },

    /// `setoption` names no known option.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The requested option name.
        name: String,
    },

    /// `setoption` value does not fit the option.
    #[error("invalid value for option {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// Loading a variant failed.
    #[error("variant error: {source}")]
    Variant {
        /// The underlying variant error.
        #[from]
        source: VariantError,
    },

    /// The spatial index refused an update.
    #[error("index error: {source}")]
    Index {
        /// The underlying index error.
        #[from]
        source: IndexError,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

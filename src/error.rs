//! Defines the crate-wide error type.

use std::result;

use thiserror::Error;

/// A result type to use throughout this crate.
pub type Result<T> = result::Result<T, Error>;

/// All errors that can occur in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The radiotap header has an unsupported version.
    #[error("unsupported radiotap version `{version}`")]
    UnsupportedVersion { version: u8 },

    /// The buffer ended before a required field could be read.
    #[error("`{context}` requires {required} byte(s) but only {available} remain")]
    Truncated {
        context: &'static str,
        required: usize,
        available: usize,
    },

    /// The radiotap length field is inconsistent with the buffer.
    #[error("radiotap length `{length}` is invalid for a buffer of {actual} bytes")]
    InvalidLength { length: usize, actual: usize },

    /// A presence bit was set that has no catalog entry.
    #[error("no field is defined for presence bit `{bit}`")]
    UnknownField { bit: u32 },

    /// The protected flag is set but the header matches no known cipher.
    #[error("protected frame matches no known encryption header")]
    MalformedCrypt,

    /// The frame uses a construct this crate does not decode.
    #[error("`{0}` is not supported")]
    Unsupported(&'static str),
}

impl Error {
    pub(crate) fn truncated(required: usize, available: usize) -> Self {
        Self::Truncated {
            context: "",
            required,
            available,
        }
    }
}

/// Attaches a field name to truncation errors.
pub(crate) trait ResultExt<T> {
    fn context(self, context: &'static str) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| match e {
            Error::Truncated {
                required,
                available,
                ..
            } => Error::Truncated {
                context,
                required,
                available,
            },
            e => e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_attaches_to_truncated() {
        let result: Result<()> = Err(Error::truncated(4, 1));
        let error = result.context("seqctrl").unwrap_err();
        assert_eq!(
            error,
            Error::Truncated {
                context: "seqctrl",
                required: 4,
                available: 1
            }
        );
        assert_eq!(
            error.to_string(),
            "`seqctrl` requires 4 byte(s) but only 1 remain"
        );
    }

    #[test]
    fn context_leaves_other_errors() {
        let result: Result<()> = Err(Error::MalformedCrypt);
        assert_eq!(result.context("crypt").unwrap_err(), Error::MalformedCrypt);
    }
}

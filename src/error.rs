//! Error types for the conversion engine.
//!
//! Every failure carries the name of the operation that raised it, so a
//! caller can show e.g. `"hex_to_address: ..."` without extra context.

use std::fmt;
use thiserror::Error;

/// Result alias used by every engine operation.
pub type Result<T> = std::result::Result<T, NetcalcError>;

/// Root category of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong length, non-numeric characters or a bad delimiter.
    InvalidFormat,
    /// Input does not parse as an IP (or IPv4) address.
    InvalidAddress,
    /// Numeric value outside the accepted range (e.g. prefix > 32).
    OutOfRange,
}

/// Which input of a multi-argument operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    Host,
    Mask,
    FirstOperand,
    SecondOperand,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Argument::Host => "host address",
            Argument::Mask => "network mask",
            Argument::FirstOperand => "first operand",
            Argument::SecondOperand => "second operand",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetcalcError {
    #[error("{op}: {input:?} has an invalid format: {reason}")]
    InvalidFormat {
        op: &'static str,
        input: String,
        reason: &'static str,
    },
    #[error("{op}: {input:?} is not a valid {family} address")]
    InvalidAddress {
        op: &'static str,
        input: String,
        family: &'static str,
    },
    #[error("{op}: {input:?} is out of range: {reason}")]
    OutOfRange {
        op: &'static str,
        input: String,
        reason: &'static str,
    },
    #[error("{op}: {arg} is invalid: {source}")]
    Argument {
        op: &'static str,
        arg: Argument,
        #[source]
        source: Box<NetcalcError>,
    },
}

impl NetcalcError {
    pub(crate) fn format(op: &'static str, input: &str, reason: &'static str) -> Self {
        NetcalcError::InvalidFormat {
            op,
            input: input.to_string(),
            reason,
        }
    }

    pub(crate) fn ipv4(op: &'static str, input: &str) -> Self {
        NetcalcError::InvalidAddress {
            op,
            input: input.to_string(),
            family: "IPv4",
        }
    }

    pub(crate) fn ip(op: &'static str, input: &str) -> Self {
        NetcalcError::InvalidAddress {
            op,
            input: input.to_string(),
            family: "IP",
        }
    }

    pub(crate) fn range(op: &'static str, input: &str, reason: &'static str) -> Self {
        NetcalcError::OutOfRange {
            op,
            input: input.to_string(),
            reason,
        }
    }

    /// Wrap an error raised while processing one argument of `op`.
    pub(crate) fn argument(op: &'static str, arg: Argument, source: NetcalcError) -> Self {
        NetcalcError::Argument {
            op,
            arg,
            source: Box::new(source),
        }
    }

    /// Root category, looking through [`NetcalcError::Argument`] wrappers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NetcalcError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            NetcalcError::InvalidAddress { .. } => ErrorKind::InvalidAddress,
            NetcalcError::OutOfRange { .. } => ErrorKind::OutOfRange,
            NetcalcError::Argument { source, .. } => source.kind(),
        }
    }

    /// The failing argument, if the error was attributed to one.
    pub fn argument_name(&self) -> Option<Argument> {
        match self {
            NetcalcError::Argument { arg, .. } => Some(*arg),
            _ => None,
        }
    }
}

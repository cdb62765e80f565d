//! IPv4 addressing calculator.
//!
//! A stateless engine converting and validating IPv4 addressing data:
//! - [`convert`] - dotted decimal to hex / binary, mask to CIDR, network address
//! - [`classify`] - private / loopback / link-local / multicast predicates
//! - [`numeric`] - integer base conversion, nibble grouping, binary AND
//!
//! Every operation is a pure function of its string input. [`adapter`] holds
//! the interaction state a graphical front end needs on top of it, and
//! [`output`], [`config`] and [`logging`] serve the command line binary.

pub mod adapter;
pub mod classify;
pub mod config;
pub mod convert;
pub mod error;
pub mod logging;
pub mod models;
pub mod numeric;
pub mod output;

pub use error::{Argument, ErrorKind, NetcalcError, Result};

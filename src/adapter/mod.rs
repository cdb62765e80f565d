//! Front-end adapter layer.
//!
//! Holds the mutable interaction state (field text, change tracking,
//! invalid flags, copy actions) on top of the pure engine. Nothing in the
//! engine modules depends on this one.

mod field;
mod panels;

pub use field::Field;
pub use panels::{
    AddressPanel, AndPanel, Calculator, Clipboard, InfoFlag, InfoPanel, MaskPanel, NetworkPanel,
    NumberPanel,
};

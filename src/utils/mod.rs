//! Utility modules.

pub mod xml;

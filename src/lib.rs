//! Parlandim - front-end core of the Parlandim<dev> blog.
//!
//! - [`seo`]: resolve page metadata and render the document head tags
//! - [`theme`]: light/dark preference with detector input and persisted toggles
//! - [`home`]: recent post cards for the home page

pub mod cli;
pub mod commands;
pub mod config;
pub mod home;
pub mod logger;
pub mod seo;
pub mod theme;
pub mod utils;

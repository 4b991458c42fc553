//! `siteconf` - Typed site configuration for a personal blog
//!
//! This library models the record a static-site generator reads at build
//! time: site identity, navigation menu, and author profile. It loads the
//! record from layered sources, checks it, and exports it for the generator.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod contacts;
pub mod error;
pub mod export;
pub mod logging;
mod scalar;
pub mod validate;

pub use config::{Author, Config, MenuItem, SourceFormat};
pub use contacts::{ContactProvider, Contacts};
pub use error::{Error, Result};
pub use export::{export, ExportFormat};
pub use logging::init_logging;
pub use validate::Violation;

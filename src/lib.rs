//! Four object-modelling exercises: descriptive records, a library catalog,
//! book formats and a device hierarchy. Each lab has a demo binary in
//! `src/bin/`.

pub mod books;
pub mod config;
pub mod console;
pub mod devices;
pub mod error;
pub mod library;
pub mod logging;
pub mod records;
pub mod validate;

pub use error::{LabError, Result};

//! Source module - Declared objects read from configuration files.

mod files;

pub use files::*;

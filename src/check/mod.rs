//! Check module - Runs declared objects through fetch, diff and report.

mod checker;


pub use checker::*;

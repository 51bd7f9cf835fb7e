//! Report module - Where differences end up.
//!
//! A [`Reporter`] is told about every object as it is checked and about each
//! difference found for it. [`TextReporter`] writes as it goes,
//! [`JsonReporter`] collects everything and writes one document at the end.

mod json;
mod text;

pub use json::*;
pub use text::*;

use crate::diff::Difference;
use crate::object::KubeObject;
use std::io::{self, Write};

/// Reporter receives the results of a check run.
pub trait Reporter {
    /// Announces that `obj` is about to be checked.
    fn register(&mut self, obj: &KubeObject) -> io::Result<()>;

    /// Records one difference found for `obj`.
    fn record(&mut self, obj: &KubeObject, difference: &Difference) -> io::Result<()>;

    /// Called once after the last object has been checked.
    fn finalize(&mut self) -> io::Result<()>;
}

/// ReportFormat selects a [`Reporter`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    /// Builds the reporter for this format writing to `out`.
    pub fn reporter<'a, W: Write + 'a>(self, out: W) -> Box<dyn Reporter + 'a> {
        match self {
            ReportFormat::Text => Box::new(TextReporter::new(out)),
            ReportFormat::Json => Box::new(JsonReporter::new(out)),
        }
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn register(&mut self, obj: &KubeObject) -> io::Result<()> {
        (**self).register(obj)
    }

    fn record(&mut self, obj: &KubeObject, difference: &Difference) -> io::Result<()> {
        (**self).record(obj, difference)
    }

    fn finalize(&mut self) -> io::Result<()> {
        (**self).finalize()
    }
}

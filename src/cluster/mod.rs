//! Cluster module - Retrieval of live objects.

mod kubectl;

pub use kubectl::*;

use crate::object::KubeObject;
use crate::value::Value;
use thiserror::Error;

/// FetchError is returned when a live object cannot be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{output}")]
    Command { output: String },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse live object: {message}")]
    Parse { message: String },
}

impl FetchError {
    /// Creates a command failure carrying the command's output.
    pub fn command(output: impl Into<String>) -> Self {
        FetchError::Command {
            output: output.into(),
        }
    }
}

/// Fetcher retrieves the live state of an object.
pub trait Fetcher {
    fn fetch(&self, obj: &KubeObject) -> Result<Value, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, obj: &KubeObject) -> Result<Value, FetchError> {
        (**self).fetch(obj)
    }
}

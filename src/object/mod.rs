//! Object module - Identity of Kubernetes objects.

mod identity;

pub use identity::*;

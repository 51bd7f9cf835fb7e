//! # kubediff
//!
//! Checks that the objects running in a Kubernetes cluster match the YAML
//! configuration they were created from.
//!
//! Declared objects are compared one way against their live counterparts:
//! everything declared must be present and equal in the cluster, while fields
//! the cluster adds on its own are ignored.
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of YAML/JSON objects
//! - [`diff`] - Asymmetric comparison producing path-addressed differences
//! - [`object`] - Namespace/kind/name identity of declared objects
//! - [`report`] - Text and JSON reporting of differences
//! - [`cluster`] - Retrieval of live objects through `kubectl`
//! - [`source`] - Discovery and loading of declared YAML files
//! - [`check`] - Running declared objects through fetch, diff and report

pub mod check;
pub mod cluster;
pub mod diff;
pub mod object;
pub mod report;
pub mod source;
pub mod value;

pub use check::{CheckError, CheckSummary, Checker};
pub use cluster::{FetchError, Fetcher, Kubectl};
pub use diff::{diff, Difference, DifferenceKind};
pub use object::{IdentityError, KubeObject, DEFAULT_NAMESPACE};
pub use report::{JsonReporter, ReportFormat, Reporter, TextReporter};
pub use value::Value;

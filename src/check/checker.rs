//! Checking declared objects against a cluster.

use crate::cluster::Fetcher;
use crate::diff::{diff, Difference};
use crate::object::{IdentityError, KubeObject};
use crate::report::Reporter;
use crate::source::{self, SourceError};
use crate::value::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// CheckError is returned when a declared object cannot be checked.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("invalid object: {0}")]
    Identity(#[from] IdentityError),

    #[error("{}: invalid object: {source}", .path.display())]
    InvalidObject {
        path: PathBuf,
        #[source]
        source: IdentityError,
    },

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

/// CheckSummary is the outcome of checking a batch of objects.
#[derive(Debug, Default)]
pub struct CheckSummary {
    /// Number of objects compared with the cluster.
    pub objects: usize,
    /// Number of differences reported, fetch failures included.
    pub differences: usize,
    /// Files or objects that could not be checked at all.
    pub errors: Vec<CheckError>,
}

impl CheckSummary {
    /// Returns true if any difference was reported.
    pub fn has_differences(&self) -> bool {
        self.differences > 0
    }

    /// Returns true if anything had to be skipped.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Checker compares declared objects with their live counterparts.
#[derive(Debug, Clone)]
pub struct Checker<F> {
    fetcher: F,
}

impl<F: Fetcher> Checker<F> {
    pub fn new(fetcher: F) -> Self {
        Checker { fetcher }
    }

    /// Checks one declared object and returns the number of differences
    /// reported for it.
    ///
    /// A live object that cannot be fetched is reported as a single
    /// difference without a path and counts as one.
    pub fn check_object<R: Reporter + ?Sized>(
        &self,
        reporter: &mut R,
        declared: &Value,
    ) -> Result<usize, CheckError> {
        let obj = KubeObject::from_value(declared)?;
        self.check_identified(reporter, &obj, declared)
    }

    fn check_identified<R: Reporter + ?Sized>(
        &self,
        reporter: &mut R,
        obj: &KubeObject,
        declared: &Value,
    ) -> Result<usize, CheckError> {
        debug!(namespace = %obj.namespace, kind = %obj.kind, name = %obj.name, "checking object");
        reporter.register(obj)?;

        let live = match self.fetcher.fetch(obj) {
            Ok(live) => live,
            Err(err) => {
                warn!(object = %obj, error = %err, "could not fetch live object");
                reporter.record(obj, &Difference::broken_cluster(err.to_string()))?;
                return Ok(1);
            }
        };

        let differences = diff("", declared, &live);
        for difference in &differences {
            reporter.record(obj, difference)?;
        }
        Ok(differences.len())
    }

    /// Checks every object of a YAML file.
    ///
    /// All documents must identify an object; otherwise nothing in the file
    /// is checked. The reporter is not finalized.
    pub fn check_file<R: Reporter + ?Sized>(
        &self,
        reporter: &mut R,
        path: &Path,
    ) -> Result<CheckSummary, CheckError> {
        debug!(path = %path.display(), "checking file");
        let documents = source::load_documents(path)?;

        let objects = documents
            .iter()
            .map(|doc| KubeObject::from_value(doc).map(|obj| (obj, doc)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| CheckError::InvalidObject {
                path: path.to_path_buf(),
                source,
            })?;

        let mut summary = CheckSummary::default();
        for (obj, declared) in &objects {
            summary.differences += self.check_identified(reporter, obj, declared)?;
            summary.objects += 1;
        }
        Ok(summary)
    }

    /// Checks every YAML file found under `paths`, then finalizes the
    /// reporter.
    ///
    /// Files that cannot be read, parsed or identified are skipped and listed
    /// in [`CheckSummary::errors`]. Only failures to write the report abort
    /// the run.
    pub fn check_files<R: Reporter + ?Sized, P: AsRef<Path>>(
        &self,
        reporter: &mut R,
        paths: &[P],
    ) -> Result<CheckSummary, CheckError> {
        let mut summary = CheckSummary::default();

        for file in source::iter_files(paths) {
            let path = match file {
                Ok(path) => path,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable path");
                    summary.errors.push(err.into());
                    continue;
                }
            };
            if !source::is_yaml(&path) {
                debug!(path = %path.display(), "skipping non-YAML file");
                continue;
            }

            match self.check_file(reporter, &path) {
                Ok(file) => {
                    summary.objects += file.objects;
                    summary.differences += file.differences;
                }
                Err(CheckError::Report(err)) => return Err(CheckError::Report(err)),
                Err(err) => {
                    warn!(error = %err, "skipping file");
                    summary.errors.push(err);
                }
            }
        }

        reporter.finalize()?;
        Ok(summary)
    }

    /// Checks already decoded declared objects in order, then finalizes the
    /// reporter.
    pub fn check_objects<R, I>(&self, reporter: &mut R, objects: I) -> Result<CheckSummary, CheckError>
    where
        R: Reporter + ?Sized,
        I: IntoIterator<Item = Value>,
    {
        let mut summary = CheckSummary::default();

        for declared in objects {
            match self.check_object(reporter, &declared) {
                Ok(differences) => {
                    summary.objects += 1;
                    summary.differences += differences;
                }
                Err(CheckError::Report(err)) => return Err(CheckError::Report(err)),
                Err(err) => {
                    warn!(error = %err, "skipping object");
                    summary.errors.push(err);
                }
            }
        }

        reporter.finalize()?;
        Ok(summary)
    }
}

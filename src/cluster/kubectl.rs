//! Fetching live objects with `kubectl get`.

use super::{FetchError, Fetcher};
use crate::object::KubeObject;
use crate::value::{self, Value};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Program run when no other is configured.
pub const DEFAULT_KUBECTL: &str = "kubectl";

/// Kubectl fetches objects by running `kubectl get -o=yaml`.
///
/// Calls block until the command exits; there is no timeout.
#[derive(Debug, Clone)]
pub struct Kubectl {
    program: PathBuf,
    kubeconfig: Option<PathBuf>,
}

impl Default for Kubectl {
    fn default() -> Self {
        Kubectl::new()
    }
}

impl Kubectl {
    /// Uses `kubectl` from `PATH` and its default cluster.
    pub fn new() -> Self {
        Kubectl {
            program: PathBuf::from(DEFAULT_KUBECTL),
            kubeconfig: None,
        }
    }

    /// Sets the program to run instead of `kubectl`.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Targets the cluster described by the given kubeconfig file.
    pub fn with_kubeconfig(mut self, kubeconfig: Option<PathBuf>) -> Self {
        self.kubeconfig = kubeconfig;
        self
    }

    /// Returns the arguments passed to the program for `obj`.
    pub fn args(&self, obj: &KubeObject) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "get".into(),
            format!("--namespace={}", obj.namespace).into(),
            "-o=yaml".into(),
        ];
        if let Some(kubeconfig) = &self.kubeconfig {
            let mut arg = OsString::from("--kubeconfig=");
            arg.push(kubeconfig);
            args.push(arg);
        }
        args.push(obj.kind.clone().into());
        args.push(obj.name.clone().into());
        args
    }
}

impl Fetcher for Kubectl {
    fn fetch(&self, obj: &KubeObject) -> Result<Value, FetchError> {
        let args = self.args(obj);
        debug!(program = %self.program.display(), ?args, "fetching live object");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| FetchError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
            text.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(FetchError::command(text));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        value::from_yaml(&stdout).map_err(|e| FetchError::Parse {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_args() {
        let obj = KubeObject::new("frontend", "Deployment", "web");
        assert_eq!(
            strings(Kubectl::new().args(&obj)),
            vec!["get", "--namespace=frontend", "-o=yaml", "Deployment", "web"]
        );
    }

    #[test]
    fn test_args_with_kubeconfig() {
        let obj = KubeObject::new("default", "Service", "db");
        let kubectl = Kubectl::new().with_kubeconfig(Some(PathBuf::from("/tmp/kube.conf")));
        assert_eq!(
            strings(kubectl.args(&obj)),
            vec![
                "get",
                "--namespace=default",
                "-o=yaml",
                "--kubeconfig=/tmp/kube.conf",
                "Service",
                "db"
            ]
        );
    }

    #[test]
    fn test_missing_program() {
        let kubectl = Kubectl::new().with_program("/nonexistent/kubediff-test-kubectl");
        let err = kubectl
            .fetch(&KubeObject::new("default", "Service", "db"))
            .unwrap_err();
        assert!(matches!(err, FetchError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command_output() {
        // `false` ignores its arguments and exits non-zero.
        let kubectl = Kubectl::new().with_program("false");
        let err = kubectl
            .fetch(&KubeObject::new("default", "Service", "db"))
            .unwrap_err();
        assert!(matches!(err, FetchError::Command { .. }));
    }
}

//! Difference record types.

use crate::value::{Shape, Value};
use std::fmt;

/// DifferenceKind describes what was wrong at a given location.
#[derive(Debug, Clone, PartialEq)]
pub enum DifferenceKind {
    /// A key declared in a map is absent from the live map.
    MissingItem { key: String },
    /// Declared and live lists have different lengths.
    UnequalLengths { want: usize, have: usize },
    /// Declared and live scalars differ.
    NotEqual { want: Value, have: Value },
    /// The live value cannot be walked the way the declared one requires.
    TypeMismatch { expected: Shape, found: Shape },
    /// The live object could not be fetched at all.
    BrokenCluster { output: String },
}

/// Difference is one discrepancy between a declared and a live object.
///
/// `path` addresses the location inside the declared object (`.spec.ports[0]`);
/// it is `None` for problems that concern the object as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct Difference {
    pub path: Option<String>,
    pub kind: DifferenceKind,
}

impl Difference {
    /// Creates a missing item difference.
    pub fn missing_item(path: impl Into<String>, key: impl Into<String>) -> Self {
        Difference {
            path: Some(path.into()),
            kind: DifferenceKind::MissingItem { key: key.into() },
        }
    }

    /// Creates an unequal lengths difference.
    pub fn unequal_lengths(path: impl Into<String>, want: usize, have: usize) -> Self {
        Difference {
            path: Some(path.into()),
            kind: DifferenceKind::UnequalLengths { want, have },
        }
    }

    /// Creates a not equal difference.
    pub fn not_equal(path: impl Into<String>, want: &Value, have: &Value) -> Self {
        Difference {
            path: Some(path.into()),
            kind: DifferenceKind::NotEqual {
                want: want.clone(),
                have: have.clone(),
            },
        }
    }

    /// Creates a type mismatch difference.
    pub fn type_mismatch(path: impl Into<String>, expected: Shape, found: Shape) -> Self {
        Difference {
            path: Some(path.into()),
            kind: DifferenceKind::TypeMismatch { expected, found },
        }
    }

    /// Creates a difference for a live object that could not be retrieved.
    pub fn broken_cluster(output: impl Into<String>) -> Self {
        Difference {
            path: None,
            kind: DifferenceKind::BrokenCluster {
                output: output.into(),
            },
        }
    }

    /// Returns the message without the path prefix.
    pub fn message(&self) -> String {
        match &self.kind {
            DifferenceKind::MissingItem { key } => format!("'{}' missing", key),
            DifferenceKind::UnequalLengths { want, have } => {
                format!("Unequal lengths: {} != {}", want, have)
            }
            DifferenceKind::NotEqual { want, have } => format!("'{}' != '{}'", want, have),
            DifferenceKind::TypeMismatch { expected, found } => {
                format!("expected {}, found {}", expected, found)
            }
            DifferenceKind::BrokenCluster { output } => {
                format!("Unable to fetch live object: {}", output.trim_end())
            }
        }
    }

    /// Returns the message prefixed by `<path>: ` when there is a path.
    pub fn to_text(&self) -> String {
        match &self.path {
            Some(path) => format!("{}: {}", path, self.message()),
            None => self.message(),
        }
    }

    /// Returns the values substituted into the message.
    pub fn args(&self) -> Vec<Value> {
        match &self.kind {
            DifferenceKind::MissingItem { key } => vec![Value::from(key.as_str())],
            DifferenceKind::UnequalLengths { want, have } => {
                vec![Value::from(*want), Value::from(*have)]
            }
            DifferenceKind::NotEqual { want, have } => vec![want.clone(), have.clone()],
            DifferenceKind::TypeMismatch { expected, found } => {
                vec![Value::from(expected.as_str()), Value::from(found.as_str())]
            }
            DifferenceKind::BrokenCluster { output } => vec![Value::from(output.as_str())],
        }
    }

    /// Returns the structured form `[path, args...]` with a null path when absent.
    pub fn to_record(&self) -> Vec<Value> {
        let path = match &self.path {
            Some(path) => Value::from(path.as_str()),
            None => Value::Null,
        };
        let mut record = vec![path];
        record.extend(self.args());
        record
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_difference_text() {
        assert_eq!(
            Difference::missing_item(".spec", "replicas").to_text(),
            ".spec: 'replicas' missing"
        );
        assert_eq!(
            Difference::unequal_lengths(".spec.ports", 3, 2).to_text(),
            ".spec.ports: Unequal lengths: 3 != 2"
        );
        assert_eq!(
            Difference::not_equal(".spec.replicas", &Value::Int(3), &Value::Int(1)).to_text(),
            ".spec.replicas: '3' != '1'"
        );
        assert_eq!(
            Difference::type_mismatch(".spec.ports", Shape::List, Shape::Scalar).to_text(),
            ".spec.ports: expected list, found scalar"
        );
    }

    #[test]
    fn test_root_path_is_kept() {
        let d = Difference::missing_item("", "spec");
        assert_eq!(d.to_text(), ": 'spec' missing");
    }

    #[test]
    fn test_broken_cluster_has_no_path() {
        let d = Difference::broken_cluster("Error from server (NotFound)\n");
        assert_eq!(d.path, None);
        assert_eq!(
            d.to_text(),
            "Unable to fetch live object: Error from server (NotFound)"
        );
    }

    #[test]
    fn test_record() {
        let d = Difference::not_equal(".a", &Value::from("x"), &Value::Int(2));
        assert_eq!(
            d.to_record(),
            vec![Value::from(".a"), Value::from("x"), Value::Int(2)]
        );

        let d = Difference::broken_cluster("boom");
        assert_eq!(d.to_record(), vec![Value::Null, Value::from("boom")]);
    }
}

//! Namespace, kind and name of a declared object.

use crate::value::Value;
use std::fmt;
use thiserror::Error;

/// Namespace assumed for objects that do not declare one.
pub const DEFAULT_NAMESPACE: &str = "default";

/// IdentityError is returned when declared data does not identify an object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error("field {field} must be a {expected}")]
    InvalidField { field: String, expected: String },
}

impl IdentityError {
    /// Creates a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        IdentityError::MissingField {
            field: field.into(),
        }
    }

    /// Creates an invalid field error.
    pub fn invalid_field(field: impl Into<String>, expected: impl Into<String>) -> Self {
        IdentityError::InvalidField {
            field: field.into(),
            expected: expected.into(),
        }
    }
}

/// KubeObject labels a Kubernetes object by namespace, kind and name.
///
/// It is only used to address the live object and to group reported
/// differences; objects are never compared through it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KubeObject {
    pub namespace: String,
    pub kind: String,
    pub name: String,
}

impl KubeObject {
    /// Creates a new object identity.
    pub fn new(
        namespace: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        KubeObject {
            namespace: namespace.into(),
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Extracts the identity from decoded object data.
    ///
    /// `kind` and `metadata.name` are required; `metadata.namespace` falls back
    /// to [`DEFAULT_NAMESPACE`].
    pub fn from_value(data: &Value) -> Result<Self, IdentityError> {
        let kind = required_str(data.get("kind"), "kind")?;
        let metadata = data
            .get("metadata")
            .ok_or_else(|| IdentityError::missing_field("metadata"))?;
        if !metadata.is_map() {
            return Err(IdentityError::invalid_field("metadata", "map"));
        }
        let name = required_str(metadata.get("name"), "metadata.name")?;
        let namespace = match metadata.get("namespace") {
            None | Some(Value::Null) => DEFAULT_NAMESPACE,
            Some(v) => v
                .as_str()
                .ok_or_else(|| IdentityError::invalid_field("metadata.namespace", "string"))?,
        };

        Ok(KubeObject::new(namespace, kind, name))
    }
}

fn required_str<'a>(value: Option<&'a Value>, field: &str) -> Result<&'a str, IdentityError> {
    value
        .ok_or_else(|| IdentityError::missing_field(field))?
        .as_str()
        .ok_or_else(|| IdentityError::invalid_field(field, "string"))
}

impl fmt::Display for KubeObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}' in namespace '{}'", self.kind, self.name, self.namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::from_yaml;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_value() {
        let data = from_yaml("kind: Service\nmetadata:\n  name: web\n  namespace: frontend\n").unwrap();
        assert_eq!(
            KubeObject::from_value(&data).unwrap(),
            KubeObject::new("frontend", "Service", "web")
        );
    }

    #[test]
    fn test_default_namespace() {
        let data = from_yaml("kind: ConfigMap\nmetadata:\n  name: settings\n").unwrap();
        let obj = KubeObject::from_value(&data).unwrap();
        assert_eq!(obj.namespace, DEFAULT_NAMESPACE);
        assert_eq!(obj.namespace, "default");
    }

    #[test]
    fn test_missing_fields() {
        let data = from_yaml("metadata:\n  name: web\n").unwrap();
        assert_eq!(
            KubeObject::from_value(&data),
            Err(IdentityError::missing_field("kind"))
        );

        let data = from_yaml("kind: Service\n").unwrap();
        assert_eq!(
            KubeObject::from_value(&data),
            Err(IdentityError::missing_field("metadata"))
        );

        let data = from_yaml("kind: Service\nmetadata:\n  namespace: x\n").unwrap();
        assert_eq!(
            KubeObject::from_value(&data),
            Err(IdentityError::missing_field("metadata.name"))
        );
    }

    #[test]
    fn test_not_an_object() {
        let data = from_yaml("- a\n- b\n").unwrap();
        assert!(KubeObject::from_value(&data).is_err());
    }

    #[test]
    fn test_invalid_fields() {
        let data = from_yaml("kind: 3\nmetadata:\n  name: web\n").unwrap();
        assert_eq!(
            KubeObject::from_value(&data),
            Err(IdentityError::invalid_field("kind", "string"))
        );

        let data = from_yaml("kind: Service\nmetadata: web\n").unwrap();
        assert_eq!(
            KubeObject::from_value(&data),
            Err(IdentityError::invalid_field("metadata", "map"))
        );
    }

    #[test]
    fn test_display() {
        let obj = KubeObject::new("default", "Deployment", "api");
        assert_eq!(obj.to_string(), "Deployment 'api' in namespace 'default'");
    }
}

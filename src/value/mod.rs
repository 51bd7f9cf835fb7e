//! Value module - In-memory representation of YAML/JSON objects.
//!
//! Both declared configuration and live cluster objects are decoded into
//! [`Value`] trees before they are compared.

mod value;

pub use value::*;

//! Diff module - Asymmetric comparison of declared and live values.
//!
//! The engine checks that a live ("have") value contains everything a
//! declared ("want") value asks for. Anything present only on the live side
//! is ignored, since the API server fills in many fields nobody declares.

mod difference;
mod engine;


pub use difference::*;
pub use engine::*;

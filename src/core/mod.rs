//! Core-Domänentypen: Kontrollpunkte, Kinematik, geglättete Pfade.

/// Kontrollpfad mit Drift und Rand-Reflexion
pub mod control_path;
pub mod path_set;
pub mod smoothed_path;
pub mod vector;

pub use control_path::{ControlPath, ControlPoint};
pub use path_set::PathSet;
pub use smoothed_path::SmoothedPath;
pub use vector::CanvasVec;

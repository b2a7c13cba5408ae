//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen und reine Geometrie, die zwischen `core`, `app` und `ui`
//! geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod knot_geometry;
pub mod options;
mod render_scene;

pub use options::ScreensaverOptions;
pub use render_scene::{HelpEntry, PathScene, RenderScene};

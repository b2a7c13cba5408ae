//! UI-Komponenten: Canvas-Painter, Hilfe-Overlay, Status-Bar, Input-Handling.

/// Painter für Pfade und Kurven
pub mod canvas;
pub mod help_overlay;
pub mod input;
mod keyboard;
pub mod status;

pub use canvas::paint_scene;
pub use help_overlay::paint_help_overlay;
pub use input::collect_canvas_events;
pub use status::render_status_bar;

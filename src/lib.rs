//! Knot-Screensaver Library.
//! Kern (Kinematik + Kurvenglättung) und App-Schicht als Library exportiert
//! für Tests, Benchmarks und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use core::{CanvasVec, ControlPath, ControlPoint, PathSet, SmoothedPath};
pub use shared::{knot_geometry, PathScene, RenderScene, ScreensaverOptions};

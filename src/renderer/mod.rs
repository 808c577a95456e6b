//! Rendering module
//!
//! Entities become centered rectangles (`shapes`), which the wasm-only
//! `canvas` painter fills onto a 2D canvas context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use shapes::{RectCommand, frame};

//! Canvas 2D rendering module
//!
//! Immediate-mode drawing of the simulation state plus the DOM bits of the
//! HUD (score text, game-over overlay, controls hint).

pub mod canvas;
mod hud;

pub use canvas::CanvasRenderer;

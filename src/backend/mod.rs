//! Concrete rendering and input adapters.

#[cfg(feature = "sdl")]
pub mod sdl;

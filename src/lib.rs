//! A small retained-mode widget layer driven by an external frame loop.
//!
//! - [`gui`] - widgets, visitors, the widget container and the two-screen menu
//! - [`sequence`] - resettable forward cursor the container walks each frame
//! - [`option`] - total elimination of optional values
//! - [`adapter`] - traits a rendering/input backend implements
//! - [`backend`] - SDL2 adapters (feature `sdl`)
//! - [`text`] - procedural bitmap font
//! - [`config`] - JSON application config

pub mod adapter;
pub mod backend;
pub mod config;
pub mod gui;
pub mod option;
pub mod sequence;
pub mod text;

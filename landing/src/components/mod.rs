//! Reusable components.

mod parallax;

pub use parallax::{
    DEFAULT_ALT, DEFAULT_SPEED, ParallaxBackground, layer_style, parallax_offset,
    parallax_translate,
};

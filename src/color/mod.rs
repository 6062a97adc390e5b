mod hsv;
pub mod palette;

use smart_leds::RGB8;

pub use hsv::{hsv_to_rgb, wrap_unit};

pub type Rgb = RGB8;

/// The all-zero color; universal default for anything not lit.
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

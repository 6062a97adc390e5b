//! Named colors for show code
//!
//! Saturated primaries plus a few dimmed variants that read well on
//! diffused strips.

use super::Rgb;

const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb { r, g, b }
}

pub const RED: Rgb = rgb(255, 0, 0);
pub const DARK_RED: Rgb = rgb(80, 0, 0);
pub const ORANGE: Rgb = rgb(255, 40, 0);
pub const YELLOW: Rgb = rgb(255, 255, 0);
pub const GREEN: Rgb = rgb(0, 255, 0);
pub const DARK_GREEN: Rgb = rgb(0, 80, 0);
pub const CYAN: Rgb = rgb(0, 255, 255);
pub const BLUE: Rgb = rgb(0, 0, 255);
pub const DARK_BLUE: Rgb = rgb(0, 0, 80);
pub const PURPLE: Rgb = rgb(150, 0, 255);
pub const MAGENTA: Rgb = rgb(255, 0, 255);
pub const PINK: Rgb = rgb(255, 0, 80);
pub const WHITE: Rgb = rgb(255, 255, 255);
pub const GRAY: Rgb = rgb(100, 100, 100);
pub const BLACK: Rgb = rgb(0, 0, 0);

pub const RAINBOW: [Rgb; 6] = [RED, ORANGE, YELLOW, GREEN, BLUE, PURPLE];

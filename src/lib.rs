#![no_std]

pub mod color;
pub mod multi_segment;
pub mod rule;
pub mod segment;
pub mod strip;

pub use color::{OFF, Rgb, hsv_to_rgb, wrap_unit};
pub use multi_segment::MultiSegment;
pub use rule::{HueBasis, Rule, RuleError};
pub use segment::Segment;
pub use strip::{BoundsError, LightStrip, PixelStrip};

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to transmit a computed pixel buffer to physical
/// hardware. Wiring-specific quirks such as swapped color channels belong in
/// the driver, not in the rendering core.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

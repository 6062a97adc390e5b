//! Physical strip buffers
//!
//! A [`LightStrip`] owns the pixel buffer for one physical LED array. The
//! buffer sits behind a critical section so several segments (and the
//! hardware writer) can share the strip by plain reference on the single
//! control thread.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::OutputDriver;
use crate::color::{OFF, Rgb};
use crate::segment::Segment;

/// Error returned when a segment span lies outside its strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsError {
    /// Requested first pixel (as given, before any normalization).
    pub start: usize,
    /// Requested end pixel (exclusive).
    pub end: usize,
    /// Strip size the span was checked against.
    pub size: usize,
}

/// Indexed pixel access for one physical strip.
///
/// Segments hold strips through this trait, so runs of different lengths can
/// be mixed in one [`crate::MultiSegment`].
pub trait PixelStrip {
    /// Number of pixels on the strip.
    fn size(&self) -> usize;

    /// Read one pixel.
    fn pixel(&self, index: usize) -> Rgb;

    /// Write one pixel.
    ///
    /// Bounds are enforced once at segment creation, not here.
    fn set_pixel(&self, index: usize, color: Rgb);
}

/// One physical LED strip with `N` pixels.
pub struct LightStrip<const N: usize> {
    pixels: Mutex<RefCell<[Rgb; N]>>,
}

impl<const N: usize> LightStrip<N> {
    /// Create a strip with every pixel off.
    pub const fn new() -> Self {
        Self {
            pixels: Mutex::new(RefCell::new([OFF; N])),
        }
    }

    /// Create a segment over `[start, end)` of this strip.
    ///
    /// A `start` greater than `end` produces a reversed segment; a span past
    /// the end of the strip is a bounds error.
    pub fn segment(&self, start: usize, end: usize) -> Result<Segment<'_>, BoundsError> {
        Segment::new(self, start, end)
    }

    /// Copy the whole ordered buffer out, e.g. for assertions or double
    /// buffering.
    pub fn snapshot(&self) -> [Rgb; N] {
        critical_section::with(|cs| *self.pixels.borrow(cs).borrow())
    }

    /// Hand the whole ordered buffer to a hardware driver.
    pub fn write_to(&self, driver: &mut impl OutputDriver) {
        critical_section::with(|cs| {
            driver.write(self.pixels.borrow(cs).borrow().as_slice());
        });
    }

    /// Turn every pixel off.
    pub fn clear(&self) {
        critical_section::with(|cs| {
            self.pixels.borrow(cs).borrow_mut().fill(OFF);
        });
    }
}

impl<const N: usize> Default for LightStrip<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PixelStrip for LightStrip<N> {
    fn size(&self) -> usize {
        N
    }

    fn pixel(&self, index: usize) -> Rgb {
        critical_section::with(|cs| self.pixels.borrow(cs).borrow()[index])
    }

    fn set_pixel(&self, index: usize, color: Rgb) {
        critical_section::with(|cs| {
            self.pixels.borrow(cs).borrow_mut()[index] = color;
        });
    }
}

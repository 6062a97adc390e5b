//! Direction-aware views over one strip
//!
//! A [`Segment`] owns the rule installed on a bounded range of one strip and
//! writes evaluation results back into the strip's buffer once per frame.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{OFF, Rgb};
use crate::rule::{Rule, RuleError};
use crate::strip::{BoundsError, PixelStrip};

/// A bounded, possibly-reversed view over one strip.
///
/// Construction normalizes `start > end` into `start < end` plus
/// `reversed = true`. When reversed, any installed rule is transparently
/// flip-wrapped, so show code always authors patterns in the segment's own
/// forward-facing coordinate space regardless of wiring direction.
pub struct Segment<'a> {
    strip: &'a dyn PixelStrip,
    start: usize,
    end: usize,
    reversed: bool,
    rule: Option<Rule>,
}

impl<'a> Segment<'a> {
    /// Create a segment over `[start, end)` of `strip`.
    pub fn new(
        strip: &'a dyn PixelStrip,
        start: usize,
        end: usize,
    ) -> Result<Self, BoundsError> {
        let reversed = end < start;
        let (lo, hi) = if reversed { (end, start) } else { (start, end) };
        if hi > strip.size() {
            return Err(BoundsError {
                start,
                end,
                size: strip.size(),
            });
        }
        Ok(Self {
            strip,
            start: lo,
            end: hi,
            reversed,
            rule: None,
        })
    }

    /// Number of pixels this segment controls.
    pub const fn size(&self) -> usize {
        self.end - self.start
    }

    /// First controlled pixel on the strip (inclusive).
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Last controlled pixel on the strip (exclusive).
    pub const fn end(&self) -> usize {
        self.end
    }

    pub const fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Install the rule rendered on every [`Segment::render`] call.
    ///
    /// Reversed segments flip-wrap the rule here, which requires at least
    /// one primitive layer.
    pub fn set_rule(&mut self, rule: Rule) -> Result<(), RuleError> {
        #[cfg(feature = "esp32-log")]
        println!(
            "segment {}..{}: rule with {} layers",
            self.start,
            self.end,
            rule.layer_count()
        );
        self.rule = Some(if self.reversed { rule.flip()? } else { rule });
        Ok(())
    }

    /// Remove the installed rule; the segment then renders off.
    pub fn clear_rule(&mut self) {
        self.rule = None;
    }

    /// Read one pixel back, in segment-local coordinates.
    pub fn pixel(&self, index: usize) -> Rgb {
        self.strip.pixel(self.start + index)
    }

    /// Evaluate the installed rule for every pixel in range and write the
    /// results into the owning strip's buffer.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn render(&self, now: Instant) {
        let size = self.size();
        match &self.rule {
            Some(rule) => {
                for i in 0..size {
                    let color = rule.evaluate(i as i32, size, now);
                    self.strip.set_pixel(self.start + i, color);
                }
            }
            None => {
                for i in 0..size {
                    self.strip.set_pixel(self.start + i, OFF);
                }
            }
        }
    }
}

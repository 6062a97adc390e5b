//! Composable pixel-color rules
//!
//! A [`Rule`] is an ordered chain of layers evaluated per pixel, per frame.
//! The first layer must be a primitive (a base color generator); every layer
//! after it is a modifier that wraps the layer below, transforming the
//! incoming pixel coordinate and/or the outgoing color.
//!
//! All layers are stored in an enum to avoid heap allocations, and every
//! time-aware layer carries an explicit construction timestamp, so a rule
//! evaluated twice with the same `(pixel, size, now)` always produces the
//! same color.

mod basis;

use embassy_time::{Duration, Instant};
use heapless::Vec;
use libm::{roundf, sinf};

pub use basis::HueBasis;

use crate::color::{OFF, Rgb, hsv_to_rgb};

/// Maximum number of layers in one rule chain.
pub const MAX_LAYERS: usize = 16;

/// Maximum number of colors in a stripes palette.
pub const MAX_STRIPE_COLORS: usize = 8;

/// Error raised while building a rule chain.
///
/// These are scene-setup configuration mistakes; the core never tries to
/// recover from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleError {
    /// A modifier was appended before any primitive layer existed.
    MissingPrimitive,
    /// The chain is at [`MAX_LAYERS`].
    TooManyLayers,
    /// A stripes palette with no colors.
    EmptyPalette,
    /// A stripes palette above [`MAX_STRIPE_COLORS`].
    TooManyColors,
    /// A basis name outside the supported set.
    UnknownBasis,
}

/// Seconds between two instants as a float.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn elapsed_secs(epoch: Instant, now: Instant) -> f32 {
    now.duration_since(epoch).as_micros() as f32 / 1_000_000.0
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_channel(value: u8, fraction: f32) -> u8 {
    roundf(f32::from(value) * fraction) as u8
}

fn scale_color(color: Rgb, fraction: f32) -> Rgb {
    Rgb {
        r: scale_channel(color.r, fraction),
        g: scale_channel(color.g, fraction),
        b: scale_channel(color.b, fraction),
    }
}

/// One link of the rule chain.
///
/// Primitives produce a color outright; modifiers delegate to the layer
/// directly below them in the chain.
#[derive(Debug, Clone)]
enum Layer {
    Fill {
        color: Rgb,
        range: Option<(i32, i32)>,
    },
    HueLinear {
        frequency: f32,
        basis: HueBasis,
        epoch: Instant,
    },
    HueWave {
        low_hue: f32,
        high_hue: f32,
        frequency: f32,
        basis: HueBasis,
        epoch: Instant,
    },
    Stripes {
        colors: Vec<Rgb, MAX_STRIPE_COLORS>,
        width: u32,
    },
    Animate {
        speed: f32,
        epoch: Instant,
    },
    Blink {
        time_on: Duration,
        time_off: Duration,
        epoch: Instant,
    },
    Crop {
        first: Option<i32>,
        last: Option<i32>,
    },
    FadeIn {
        duration: Duration,
        delay: Duration,
        epoch: Instant,
    },
    FadeOut {
        duration: Duration,
        delay: Duration,
        epoch: Instant,
    },
    Flip,
    Offset {
        pixels: i32,
    },
}

/// An ordered chain of pixel-color layers.
///
/// Rules are built fluently at scene-setup time, are cheap to clone, and are
/// never mutated during evaluation. An empty rule evaluates to [`OFF`].
#[derive(Debug, Clone, Default)]
pub struct Rule {
    layers: Vec<Layer, MAX_LAYERS>,
}

impl Rule {
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    fn push_primitive(mut self, layer: Layer) -> Result<Self, RuleError> {
        self.layers
            .push(layer)
            .map_err(|_| RuleError::TooManyLayers)?;
        Ok(self)
    }

    fn push_modifier(mut self, layer: Layer) -> Result<Self, RuleError> {
        if self.layers.is_empty() {
            return Err(RuleError::MissingPrimitive);
        }
        self.layers
            .push(layer)
            .map_err(|_| RuleError::TooManyLayers)?;
        Ok(self)
    }

    // Primitives - base generators that ignore anything appended before them.

    /// Every pixel gets `color`.
    pub fn fill(self, color: Rgb) -> Result<Self, RuleError> {
        self.push_primitive(Layer::Fill { color, range: None })
    }

    /// Pixels in `[start, end)` get `color`, everything else is off.
    pub fn fill_range(self, color: Rgb, start: i32, end: i32) -> Result<Self, RuleError> {
        self.push_primitive(Layer::Fill {
            color,
            range: Some((start, end)),
        })
    }

    /// Hue rising linearly with the basis value; `frequency` is in hue
    /// degrees per basis unit.
    pub fn hue_linear(
        self,
        frequency: f32,
        basis: HueBasis,
        now: Instant,
    ) -> Result<Self, RuleError> {
        self.push_primitive(Layer::HueLinear {
            frequency,
            basis,
            epoch: now,
        })
    }

    /// Hue oscillating sinusoidally between `low_hue` and `high_hue`
    /// (degrees, 0-360).
    pub fn hue_wave(
        self,
        low_hue: f32,
        high_hue: f32,
        frequency: f32,
        basis: HueBasis,
        now: Instant,
    ) -> Result<Self, RuleError> {
        self.push_primitive(Layer::HueWave {
            low_hue,
            high_hue,
            frequency,
            basis,
            epoch: now,
        })
    }

    /// Repeating bands of `colors`, each `width` pixels wide.
    ///
    /// A zero `width` is treated as one.
    pub fn stripes(self, colors: &[Rgb], width: u32) -> Result<Self, RuleError> {
        if colors.is_empty() {
            return Err(RuleError::EmptyPalette);
        }
        let colors =
            Vec::from_slice(colors).map_err(|()| RuleError::TooManyColors)?;
        self.push_primitive(Layer::Stripes {
            colors,
            width: width.max(1),
        })
    }

    // Modifiers - each wraps the current terminal layer.

    /// Translate the wrapped pattern over time at `speed` pixels per second;
    /// the sign sets the direction.
    pub fn animate(self, speed: f32, now: Instant) -> Result<Self, RuleError> {
        self.push_modifier(Layer::Animate { speed, epoch: now })
    }

    /// Alternate between the wrapped color and off, `time_on` then
    /// `time_off`, starting at `now`.
    pub fn blink(
        self,
        time_on: Duration,
        time_off: Duration,
        now: Instant,
    ) -> Result<Self, RuleError> {
        self.push_modifier(Layer::Blink {
            time_on,
            time_off,
            epoch: now,
        })
    }

    /// Force off outside `[first, last)`; either bound may be open.
    pub fn crop(self, first: Option<i32>, last: Option<i32>) -> Result<Self, RuleError> {
        self.push_modifier(Layer::Crop { first, last })
    }

    /// Off until `delay` has passed, then ramp linearly to the wrapped color
    /// over `duration`. A zero duration jumps straight to full color.
    pub fn fade_in(
        self,
        duration: Duration,
        delay: Duration,
        now: Instant,
    ) -> Result<Self, RuleError> {
        self.push_modifier(Layer::FadeIn {
            duration,
            delay,
            epoch: now,
        })
    }

    /// Full wrapped color until `delay`, then ramp linearly to off over
    /// `duration`; off permanently afterwards.
    pub fn fade_out(
        self,
        duration: Duration,
        delay: Duration,
        now: Instant,
    ) -> Result<Self, RuleError> {
        self.push_modifier(Layer::FadeOut {
            duration,
            delay,
            epoch: now,
        })
    }

    /// Mirror the coordinate space: pixel `p` becomes `size - p`.
    ///
    /// Note the mapping is `size - p`, not `size - 1 - p`; installed wiring
    /// was tuned against this mapping, so it is kept as-is.
    pub fn flip(self) -> Result<Self, RuleError> {
        self.push_modifier(Layer::Flip)
    }

    /// Shift the coordinate space by `pixels` before delegating; used to
    /// stitch several physical ranges into one continuous run.
    pub fn offset(self, pixels: i32) -> Result<Self, RuleError> {
        self.push_modifier(Layer::Offset { pixels })
    }

    /// Evaluate the chain for one logical pixel.
    ///
    /// `size` is the logical run size (used by [`Rule::flip`]), `now` the
    /// current frame time. Safe to call once per pixel, every frame.
    pub fn evaluate(&self, pixel: i32, size: usize, now: Instant) -> Rgb {
        match self.layers.len() {
            0 => OFF,
            n => self.eval_layer(n - 1, pixel, size, now),
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn eval_layer(&self, index: usize, pixel: i32, size: usize, now: Instant) -> Rgb {
        // Modifiers recurse on index - 1; the builder guarantees a modifier
        // always has a layer below it.
        match &self.layers[index] {
            Layer::Fill { color, range } => match range {
                Some((start, end)) if pixel < *start || pixel >= *end => OFF,
                _ => *color,
            },
            Layer::HueLinear {
                frequency,
                basis,
                epoch,
            } => {
                let var = basis.value(pixel, *epoch, now);
                hsv_to_rgb(var * frequency / 360.0, 1.0, 1.0)
            }
            Layer::HueWave {
                low_hue,
                high_hue,
                frequency,
                basis,
                epoch,
            } => {
                let var = basis.value(pixel, *epoch, now);
                let mid = (low_hue + high_hue) / 720.0;
                let amplitude = (high_hue - low_hue) / 720.0;
                hsv_to_rgb(mid + amplitude * sinf(var * frequency), 1.0, 1.0)
            }
            Layer::Stripes { colors, width } => {
                let band = pixel.div_euclid(*width as i32);
                colors[band.rem_euclid(colors.len() as i32) as usize]
            }
            Layer::Animate { speed, epoch } => {
                let shift = roundf(elapsed_secs(*epoch, now) * speed) as i32;
                self.eval_layer(index - 1, pixel.saturating_sub(shift), size, now)
            }
            Layer::Blink {
                time_on,
                time_off,
                epoch,
            } => {
                let period = time_on.as_micros() + time_off.as_micros();
                if period == 0 {
                    return self.eval_layer(index - 1, pixel, size, now);
                }
                let since = now.duration_since(*epoch).as_micros() % period;
                if since < time_on.as_micros() {
                    self.eval_layer(index - 1, pixel, size, now)
                } else {
                    OFF
                }
            }
            Layer::Crop { first, last } => {
                if first.is_some_and(|f| pixel < f) || last.is_some_and(|l| pixel >= l) {
                    OFF
                } else {
                    self.eval_layer(index - 1, pixel, size, now)
                }
            }
            Layer::FadeIn {
                duration,
                delay,
                epoch,
            } => {
                let elapsed = now.duration_since(*epoch);
                if elapsed < *delay {
                    return OFF;
                }
                let full = self.eval_layer(index - 1, pixel, size, now);
                if elapsed >= *delay + *duration {
                    return full;
                }
                scale_color(full, fade_fraction(elapsed, *delay, *duration))
            }
            Layer::FadeOut {
                duration,
                delay,
                epoch,
            } => {
                let elapsed = now.duration_since(*epoch);
                if elapsed >= *delay + *duration {
                    return OFF;
                }
                let full = self.eval_layer(index - 1, pixel, size, now);
                if elapsed < *delay {
                    return full;
                }
                scale_color(full, 1.0 - fade_fraction(elapsed, *delay, *duration))
            }
            Layer::Flip => {
                self.eval_layer(index - 1, (size as i32).saturating_sub(pixel), size, now)
            }
            Layer::Offset { pixels } => {
                self.eval_layer(index - 1, pixel.saturating_add(*pixels), size, now)
            }
        }
    }
}

/// Progress through a fade window, 0-1 exclusive.
///
/// Callers have already ruled out the saturated ends, so `duration` is
/// non-zero here.
#[allow(clippy::cast_precision_loss)]
fn fade_fraction(elapsed: Duration, delay: Duration, duration: Duration) -> f32 {
    (elapsed - delay).as_micros() as f32 / duration.as_micros() as f32
}

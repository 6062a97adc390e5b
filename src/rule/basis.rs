use embassy_time::Instant;

use super::{RuleError, elapsed_secs};

const BASIS_NAME_PIXEL: &str = "pixel";
const BASIS_NAME_TIME: &str = "time";

/// Independent variable for the hue primitives: either the logical pixel
/// index, or the seconds elapsed since the layer was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueBasis {
    Pixel,
    Time,
}

impl HueBasis {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pixel => BASIS_NAME_PIXEL,
            Self::Time => BASIS_NAME_TIME,
        }
    }

    /// Parse a basis name coming from show configuration.
    ///
    /// Anything outside the supported set is a mode error.
    pub fn parse_from_str(s: &str) -> Result<Self, RuleError> {
        match s {
            BASIS_NAME_PIXEL => Ok(Self::Pixel),
            BASIS_NAME_TIME => Ok(Self::Time),
            _ => Err(RuleError::UnknownBasis),
        }
    }

    /// Resolve the basis value for one evaluation.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn value(self, pixel: i32, epoch: Instant, now: Instant) -> f32 {
        match self {
            Self::Pixel => pixel as f32,
            Self::Time => elapsed_secs(epoch, now),
        }
    }
}

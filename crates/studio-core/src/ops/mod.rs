//! The operation engine: pure raster-to-raster transforms and their
//! composition into pipelines.

pub mod color;
pub mod convolve;
pub mod geometry;
pub mod tone;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, StudioError};
use crate::raster::{CropRect, Raster};

/// Built-in color remaps in presentation order.
pub const BUILTIN_NAMES: [&str; 5] = ["None", "Grayscale", "Invert", "Sepia", "Funk"];

pub fn builtin_names() -> &'static [&'static str] {
    &BUILTIN_NAMES
}

/// A configured, stateless transform from one raster to another.
///
/// Applying the same operation to the same raster always yields identical
/// pixels. A `Pipeline` is itself an operation, so pipelines nest.
///
/// Out-of-range parameters are sanitized when the operation runs, so a
/// variant built directly or read from a script behaves exactly like the
/// same value passed through its constructor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    #[default]
    None,
    Grayscale,
    Invert,
    Sepia,
    Funk,
    Brightness { delta: f32 },
    Contrast { amount: f32 },
    GaussianBlur { radius: u32 },
    Sharpen,
    Rotate { degrees: f64 },
    FlipH,
    FlipV,
    Crop(CropRect),
    Pipeline { stages: Vec<Operation> },
}

impl Operation {
    pub fn none() -> Self {
        Self::None
    }

    pub fn grayscale() -> Self {
        Self::Grayscale
    }

    pub fn invert() -> Self {
        Self::Invert
    }

    pub fn sepia() -> Self {
        Self::Sepia
    }

    pub fn funk() -> Self {
        Self::Funk
    }

    /// `delta` is clamped into -1.0..=1.0; NaN becomes 0.
    pub fn brightness(delta: f32) -> Self {
        Self::Brightness {
            delta: tone::clamp_unit(delta),
        }
    }

    /// `amount` is clamped into -1.0..=1.0; NaN becomes 0.
    pub fn contrast(amount: f32) -> Self {
        Self::Contrast {
            amount: tone::clamp_unit(amount),
        }
    }

    /// Negative radii are treated as 0, which is the identity.
    pub fn gaussian_blur(radius: i32) -> Self {
        Self::GaussianBlur {
            radius: radius.max(0) as u32,
        }
    }

    pub fn sharpen() -> Self {
        Self::Sharpen
    }

    pub fn rotate(degrees: f64) -> Self {
        let degrees = if degrees.is_finite() { degrees } else { 0.0 };
        Self::Rotate { degrees }
    }

    pub fn flip_h() -> Self {
        Self::FlipH
    }

    pub fn flip_v() -> Self {
        Self::FlipV
    }

    pub fn crop(rect: CropRect) -> Self {
        Self::Crop(rect)
    }

    /// Sequence `ops` left to right, skipping absent entries.
    pub fn compose<I>(ops: I) -> Self
    where
        I: IntoIterator<Item = Option<Operation>>,
    {
        Self::Pipeline {
            stages: ops.into_iter().flatten().collect(),
        }
    }

    /// Sequence of `ops` with no absent entries.
    pub fn pipeline(stages: Vec<Operation>) -> Self {
        Self::Pipeline { stages }
    }

    /// `self` followed by `next`.
    pub fn then(self, next: Operation) -> Self {
        match self {
            Self::Pipeline { mut stages } => {
                stages.push(next);
                Self::Pipeline { stages }
            }
            first => Self::Pipeline {
                stages: vec![first, next],
            },
        }
    }

    /// Look up a built-in color remap. Unknown names resolve to `None`.
    pub fn named(name: &str) -> Self {
        Self::parse_name(name).unwrap_or(Self::None)
    }

    /// Strict variant of [`Operation::named`].
    pub fn parse_name(name: &str) -> Result<Self> {
        match name {
            "None" => Ok(Self::None),
            "Grayscale" => Ok(Self::Grayscale),
            "Invert" => Ok(Self::Invert),
            "Sepia" => Ok(Self::Sepia),
            "Funk" => Ok(Self::Funk),
            other => Err(StudioError::UnknownOperation(other.to_string())),
        }
    }

    /// True when the operation leaves every raster unchanged by construction.
    pub fn is_identity(&self) -> bool {
        match self {
            Self::None => true,
            Self::GaussianBlur { radius } => *radius == 0,
            Self::Brightness { delta } => tone::clamp_unit(*delta) == 0.0,
            Self::Contrast { amount } => tone::clamp_unit(*amount) == 0.0,
            Self::Rotate { degrees } => geometry::normalize_degrees(*degrees) == 0.0,
            Self::Pipeline { stages } => stages.iter().all(Operation::is_identity),
            _ => false,
        }
    }

    /// Run the operation, producing a new raster.
    pub fn apply(&self, src: &Raster) -> Raster {
        match self {
            Self::None => src.clone(),
            Self::Grayscale => color::grayscale(src),
            Self::Invert => color::invert(src),
            Self::Sepia => color::sepia(src),
            Self::Funk => color::funk(src),
            Self::Brightness { delta } => tone::brightness(src, *delta),
            Self::Contrast { amount } => tone::contrast(src, *amount),
            Self::GaussianBlur { radius } => convolve::gaussian_blur(src, *radius),
            Self::Sharpen => convolve::sharpen(src),
            Self::Rotate { degrees } => geometry::rotate(src, *degrees),
            Self::FlipH => geometry::flip_h(src),
            Self::FlipV => geometry::flip_v(src),
            Self::Crop(rect) => geometry::crop(src, rect),
            Self::Pipeline { stages } => {
                let mut current = src.clone();
                for stage in stages {
                    debug!(stage = %stage, "Applying stage");
                    current = stage.apply(&current);
                }
                current
            }
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Grayscale => write!(f, "Grayscale"),
            Self::Invert => write!(f, "Invert"),
            Self::Sepia => write!(f, "Sepia"),
            Self::Funk => write!(f, "Funk"),
            Self::Brightness { delta } => write!(f, "Brightness ({delta:+})"),
            Self::Contrast { amount } => write!(f, "Contrast ({amount:+})"),
            Self::GaussianBlur { radius } => write!(f, "Gaussian Blur (r={radius})"),
            Self::Sharpen => write!(f, "Sharpen"),
            Self::Rotate { degrees } => write!(f, "Rotate ({degrees}\u{b0})"),
            Self::FlipH => write!(f, "Flip Horizontal"),
            Self::FlipV => write!(f, "Flip Vertical"),
            Self::Crop(rect) => write!(f, "Crop ({rect})"),
            Self::Pipeline { stages } => {
                if stages.is_empty() {
                    return write!(f, "None");
                }
                for (i, stage) in stages.iter().enumerate() {
                    if i > 0 {
                        write!(f, " \u{2192} ")?;
                    }
                    write!(f, "{stage}")?;
                }
                Ok(())
            }
        }
    }
}

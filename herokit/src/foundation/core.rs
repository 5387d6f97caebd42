use std::time::Duration;

use crate::foundation::error::{HeroError, HeroResult};

pub use kurbo::{Affine, Point, Vec2};

/// Size of the host viewport in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Viewport width.
    pub width: f64,
    /// Viewport height; one viewport height is the scroll span of the hero.
    pub height: f64,
}

impl Viewport {
    /// Build a viewport, rejecting non-finite or non-positive sizes.
    pub fn new(width: f64, height: f64) -> HeroResult<Self> {
        let vp = Self { width, height };
        vp.validate()?;
        Ok(vp)
    }

    /// Validate the viewport geometry.
    pub fn validate(self) -> HeroResult<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(HeroError::validation("viewport width must be > 0"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(HeroError::validation("viewport height must be > 0"));
        }
        Ok(())
    }

    /// Center point of the viewport.
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1440.0,
            height: 900.0,
        }
    }
}

/// Normalized scroll progress, always within `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize)]
pub struct Progress(f64);

impl Progress {
    /// Progress at the start of the tracked span.
    pub const START: Self = Self(0.0);
    /// Progress at the end of the tracked span.
    pub const END: Self = Self(1.0);

    /// Clamp `value` into `[0, 1]`. NaN maps to [`Progress::START`].
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Raw progress value.
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Opaque 8-bit RGB color, serialized as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn parse_hex(s: &str) -> HeroResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(HeroError::validation(format!(
                "color '{s}' must be #rrggbb"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| HeroError::validation(format!("color '{s}': {e}")))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// CSS hex notation, uppercase.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = HeroError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Rgb8> for String {
    fn from(value: Rgb8) -> Self {
        value.to_hex()
    }
}

/// Layer transform as applied by the rendering layer: scale about `origin`, then offset.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerTransform {
    /// Translation applied after scaling.
    pub offset: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
    /// Scale pivot in layer space.
    pub origin: Point,
}

impl Default for LayerTransform {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
            origin: Point::ZERO,
        }
    }
}

impl LayerTransform {
    /// Resolve to an affine matrix.
    pub fn to_affine(self) -> Affine {
        let t_offset = Affine::translate(self.offset);
        let t_origin = Affine::translate(self.origin.to_vec2());
        let t_unorigin = Affine::translate(-self.origin.to_vec2());
        let t_scale = Affine::scale(self.scale);

        // T(offset) * T(origin) * S(scale) * T(-origin)
        t_offset * t_origin * t_scale * t_unorigin
    }
}

/// Whole milliseconds of a duration, saturating.
pub fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

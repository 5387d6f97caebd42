use crate::{
    animation::anim::KeyframePair,
    foundation::core::Progress,
    foundation::error::HeroResult,
};

/// Scroll-linked keyframes: each parameter is interpolated linearly over progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScrollKeyframes {
    /// Background layer scale.
    pub backdrop_scale: KeyframePair<f64>,
    /// Background layer vertical offset in px.
    pub backdrop_y: KeyframePair<f64>,
    /// Headline scale.
    pub headline_scale: KeyframePair<f64>,
    /// Headline opacity.
    pub headline_opacity: KeyframePair<f64>,
}

impl Default for ScrollKeyframes {
    fn default() -> Self {
        Self {
            backdrop_scale: KeyframePair::new(1.0, 0.7),
            backdrop_y: KeyframePair::new(0.0, -150.0),
            headline_scale: KeyframePair::new(1.0, 0.85),
            headline_opacity: KeyframePair::new(1.0, 0.3),
        }
    }
}

/// Visual parameters for one progress value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollTransforms {
    /// Progress these values were computed for.
    pub progress: f64,
    /// Background layer scale.
    pub backdrop_scale: f64,
    /// Background layer vertical offset in px.
    pub backdrop_y: f64,
    /// Headline scale.
    pub headline_scale: f64,
    /// Headline opacity.
    pub headline_opacity: f64,
}

impl ScrollKeyframes {
    /// Validate all keyframe endpoints.
    pub fn validate(&self) -> HeroResult<()> {
        self.backdrop_scale.validate("backdrop_scale")?;
        self.backdrop_y.validate("backdrop_y")?;
        self.headline_scale.validate("headline_scale")?;
        self.headline_opacity.validate("headline_opacity")
    }

    /// Map progress to visual parameters. Pure and idempotent.
    pub fn map(&self, progress: Progress) -> ScrollTransforms {
        ScrollTransforms {
            progress: progress.get(),
            backdrop_scale: self.backdrop_scale.sample(progress),
            backdrop_y: self.backdrop_y.sample(progress),
            headline_scale: self.headline_scale.sample(progress),
            headline_opacity: self.headline_opacity.sample(progress),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/mapper.rs"]
mod tests;

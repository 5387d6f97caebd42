use crate::foundation::core::{Progress, Viewport};

/// Vertical span being tracked, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrackedRegion {
    /// Document offset of the region's top edge.
    pub top: f64,
    /// Region height; progress reaches 1 once this much has scrolled past the top.
    pub height: f64,
}

impl TrackedRegion {
    /// The hero: starts at the document top and is one viewport tall.
    pub fn hero(viewport: Viewport) -> Self {
        Self {
            top: 0.0,
            height: viewport.height,
        }
    }
}

/// Progress of `scroll_y` through `region`.
///
/// 0 when the region's top is at the viewport top, 1 when its bottom reaches the
/// viewport top; anything beyond clamps.
pub fn progress_for(region: TrackedRegion, scroll_y: f64) -> Progress {
    if !(region.height > 0.0) {
        return if scroll_y > region.top {
            Progress::END
        } else {
            Progress::START
        };
    }
    Progress::new((scroll_y - region.top) / region.height)
}

/// Tracks scroll progress through the hero region.
#[derive(Clone, Debug)]
pub struct ScrollProgressTracker {
    region: TrackedRegion,
    scroll_y: f64,
    progress: Progress,
}

impl ScrollProgressTracker {
    /// Track the hero region for `viewport`, starting from `scroll_y`.
    pub fn new(viewport: Viewport, scroll_y: f64) -> Self {
        Self::with_region(TrackedRegion::hero(viewport), scroll_y)
    }

    /// Track an explicit region.
    pub fn with_region(region: TrackedRegion, scroll_y: f64) -> Self {
        Self {
            region,
            scroll_y,
            progress: progress_for(region, scroll_y),
        }
    }

    /// Record a new scroll offset.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Progress {
        self.scroll_y = scroll_y;
        self.recompute()
    }

    /// The hero is one viewport tall, so a resize changes the tracked span.
    pub fn on_resize(&mut self, viewport: Viewport) -> Progress {
        self.region = TrackedRegion::hero(viewport);
        self.recompute()
    }

    /// Latest progress.
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Latest scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Tracked region.
    pub fn region(&self) -> TrackedRegion {
        self.region
    }

    fn recompute(&mut self) -> Progress {
        self.progress = progress_for(self.region, self.scroll_y);
        tracing::trace!(
            scroll_y = self.scroll_y,
            progress = self.progress.get(),
            "scroll progress"
        );
        self.progress
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/scroll.rs"]
mod tests;

use crate::foundation::core::clamp_progress;

/// Upstream source of progress values.
///
/// Values may move in either direction and arrive at any frequency; throttling is the source's
/// concern. `None` means the source is exhausted.
pub trait ProgressSource {
    /// Next progress value, nominally in `[0, 1]`.
    fn next_progress(&mut self) -> Option<f64>;
}

impl<I> ProgressSource for I
where
    I: Iterator<Item = f64>,
{
    fn next_progress(&mut self) -> Option<f64> {
        self.next()
    }
}

/// Geometry of a tall scrollable region, in the host's scroll units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollGeometry {
    /// Scroll offset at which the region's top edge meets the viewport's top edge.
    pub region_top: f64,
    /// Full height of the region.
    pub region_height: f64,
    /// Height of the viewport.
    pub viewport_height: f64,
}

impl ScrollGeometry {
    /// Scroll distance over which progress runs from `0` to `1`.
    pub fn scrollable_extent(&self) -> f64 {
        (self.region_height - self.viewport_height).max(0.0)
    }

    /// Map a raw scroll offset to progress.
    ///
    /// Progress is `0` when the region's top reaches the viewport top and `1` when its bottom
    /// reaches the viewport bottom. A region no taller than the viewport jumps from `0` to `1`
    /// at `region_top`.
    pub fn progress_at(&self, scroll_offset: f64) -> f64 {
        let traveled = scroll_offset - self.region_top;
        let extent = self.scrollable_extent();
        if extent <= 0.0 || !extent.is_finite() {
            return if traveled >= 0.0 { 1.0 } else { 0.0 };
        }
        clamp_progress(traveled / extent)
    }
}

/// Adapts a stream of raw scroll offsets into progress values; usable as a [`ProgressSource`].
#[derive(Clone, Debug)]
pub struct ScrollProgress<I> {
    geometry: ScrollGeometry,
    offsets: I,
}

impl<I> ScrollProgress<I>
where
    I: Iterator<Item = f64>,
{
    /// Wrap `offsets` using `geometry`.
    pub fn new(geometry: ScrollGeometry, offsets: I) -> Self {
        Self { geometry, offsets }
    }
}

impl<I> Iterator for ScrollProgress<I>
where
    I: Iterator<Item = f64>,
{
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.offsets
            .next()
            .map(|offset| self.geometry.progress_at(offset))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/adapter/progress.rs"]
mod tests;

/// Shape of a phase's normalized position.
///
/// A curve is admissible for scroll-driven phases only if it is non-decreasing on `[0, 1]` and
/// pins `apply(0) == 0` and `apply(1) == 1`. Opacity and scale then move one way through each
/// phase, land exactly on their targets at the phase markers, and depend on progress alone, so
/// a backward scrub retraces the forward motion. Overshooting curves (back, elastic, bounce) are
/// not offered because they would make opacity or scale reverse direction mid-phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// `t`. Constant rate.
    Linear,
    /// `t²`. Slope grows from `0` to `2`; suits exits that start gently.
    InQuad,
    /// `1 - (1 - t)²`. Mirror of [`Ease::InQuad`]; slope falls from `2` to `0`.
    OutQuad,
    /// Two quadratic halves joined at `(0.5, 0.5)` with matching slope.
    InOutQuad,
    /// `t³`. Stays near `0` longer than [`Ease::InQuad`].
    InCubic,
    /// `1 - (1 - t)³`. Fast start that settles flat; suits enter phases.
    OutCubic,
    /// Two cubic halves joined at `(0.5, 0.5)`.
    InOutCubic,
    /// Hermite smoothstep `t²(3 - 2t)`. Zero slope at both ends.
    Smoothstep,
}

impl Ease {
    /// Every admissible curve, in declaration order.
    pub const ALL: [Ease; 8] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::Smoothstep,
    ];

    /// Map phase position `t` to eased position. `t` is clamped into `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - u * u,
            Self::InOutQuad if t < 0.5 => 2.0 * t * t,
            Self::InOutQuad => 1.0 - 2.0 * u * u,
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - u * u * u,
            Self::InOutCubic if t < 0.5 => 4.0 * t * t * t,
            Self::InOutCubic => 1.0 - 4.0 * u * u * u,
            Self::Smoothstep => t * t * (3.0 - 2.0 * t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;

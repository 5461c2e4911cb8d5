use crate::animation::ease::Ease;
use crate::foundation::error::{RevealError, RevealResult};

/// How much progress each reveal scene's slot consumes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneDuration {
    /// Fixed progress duration per scene. Total required progress grows with the scene count and
    /// construction fails once the sequence would run past `1.0`.
    Fixed(f64),
    /// Shrink the per-scene duration so the sequence exactly fills `[sequence_start_fraction, 1]`.
    FitToRange,
}

/// Timing configuration from which the window table is derived.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    /// End of the intro's fade-out, as a progress fraction.
    pub intro_exit_fraction: f64,
    /// Progress at which the first reveal scene begins entering.
    pub sequence_start_fraction: f64,
    /// Per-scene duration policy.
    pub scene_duration: SceneDuration,
    /// Fraction of each slot shared with the next scene, in `[0, 1)`.
    pub overlap: f64,
    /// Portion of a slot spent entering.
    pub enter_fraction: f64,
    /// Slot position at which the exit begins. `(enter_fraction, exit_start_fraction]` is the hold.
    pub exit_start_fraction: f64,
    /// Scale of a reveal scene before it enters.
    pub min_scale: f64,
    /// Scale of a reveal scene at the end of its forward-zoom exit.
    pub max_scale: f64,
    /// Scale the intro shrinks to as it fades.
    pub intro_end_scale: f64,
    /// Curve for the intro fade.
    pub intro_ease: Ease,
    /// Curve for reveal enter phases.
    pub enter_ease: Ease,
    /// Curve for reveal exit phases.
    pub exit_ease: Ease,
    /// Stacking order of reveal scene `0`; the intro sits one below.
    pub stacking_base: i32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            intro_exit_fraction: 0.5,
            sequence_start_fraction: 0.6,
            scene_duration: SceneDuration::FitToRange,
            overlap: 0.0,
            enter_fraction: 0.3,
            exit_start_fraction: 0.7,
            min_scale: 0.8,
            max_scale: 1.5,
            intro_end_scale: 0.9,
            intro_ease: Ease::OutQuad,
            enter_ease: Ease::OutCubic,
            exit_ease: Ease::InQuad,
            stacking_base: 10,
        }
    }
}

/// Per-scene slot geometry resolved for a concrete scene count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SlotLayout {
    /// Progress consumed by one scene's window.
    pub(crate) duration: f64,
    /// Distance between consecutive `enter_start` markers.
    pub(crate) spacing: f64,
}

impl TimingConfig {
    /// Validate field ranges that do not depend on the scene count.
    pub fn validate(&self) -> RevealResult<()> {
        let finite = [
            ("intro_exit_fraction", self.intro_exit_fraction),
            ("sequence_start_fraction", self.sequence_start_fraction),
            ("overlap", self.overlap),
            ("enter_fraction", self.enter_fraction),
            ("exit_start_fraction", self.exit_start_fraction),
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("intro_end_scale", self.intro_end_scale),
        ];
        for (name, v) in finite {
            if !v.is_finite() {
                return Err(invalid(name, "must be finite"));
            }
        }

        if !(self.intro_exit_fraction > 0.0 && self.intro_exit_fraction <= 1.0) {
            return Err(invalid("intro_exit_fraction", "must be in (0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.sequence_start_fraction) {
            return Err(invalid("sequence_start_fraction", "must be in [0, 1]"));
        }
        if !(0.0..1.0).contains(&self.overlap) {
            return Err(invalid("overlap", "must be in [0, 1)"));
        }
        if self.enter_fraction < 0.0 {
            return Err(invalid("enter_fraction", "must be >= 0"));
        }
        if self.enter_fraction >= self.exit_start_fraction {
            return Err(invalid(
                "enter_fraction",
                "must be < timing.exit_start_fraction",
            ));
        }
        if self.exit_start_fraction > 1.0 {
            return Err(invalid("exit_start_fraction", "must be <= 1"));
        }
        if !(self.min_scale > 0.0 && self.min_scale <= 1.0) {
            return Err(invalid("min_scale", "must be in (0, 1]"));
        }
        if self.max_scale < 1.0 {
            return Err(invalid("max_scale", "must be >= 1"));
        }
        if !(self.intro_end_scale > 0.0 && self.intro_end_scale <= 1.0) {
            return Err(invalid("intro_end_scale", "must be in (0, 1]"));
        }
        if let SceneDuration::Fixed(d) = self.scene_duration
            && (!d.is_finite() || d <= 0.0)
        {
            return Err(invalid("scene_duration", "fixed duration must be finite and > 0"));
        }
        Ok(())
    }

    /// Progress needed to finish a sequence of `reveal_count` scenes, measured from `0`.
    ///
    /// Only meaningful once [`TimingConfig::validate`] has passed.
    pub fn required_extent(&self, reveal_count: usize) -> f64 {
        let sequence_end = match self.slot_layout(reveal_count) {
            Some(slot) => {
                let last = (reveal_count - 1) as f64;
                self.sequence_start_fraction + last * slot.spacing + slot.duration
            }
            None => 0.0,
        };
        sequence_end.max(self.intro_exit_fraction)
    }

    /// Resolve duration and spacing for `reveal_count` scenes. `None` when there are no scenes.
    pub(crate) fn slot_layout(&self, reveal_count: usize) -> Option<SlotLayout> {
        if reveal_count == 0 {
            return None;
        }
        let step = 1.0 - self.overlap;
        let duration = match self.scene_duration {
            SceneDuration::Fixed(d) => d,
            SceneDuration::FitToRange => {
                let span = 1.0 - self.sequence_start_fraction;
                span / ((reveal_count - 1) as f64 * step + 1.0)
            }
        };
        Some(SlotLayout {
            duration,
            spacing: duration * step,
        })
    }
}

fn invalid(field: &str, msg: &str) -> RevealError {
    RevealError::invalid_configuration(format!("timing.{field}: {msg}"))
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/timing.rs"]
mod tests;

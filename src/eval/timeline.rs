use crate::foundation::core::{clamp_progress, lerp};
use crate::schedule::builder::{Schedule, ScheduledScene};

/// Sub-segment of a scene's window that a progress value falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Progress has not reached the window yet.
    Before,
    /// Fading and scaling in. Never reported for a zero-length enter phase.
    Enter,
    /// Fully visible at scale `1.0`. The intro is in this phase at progress `0`.
    Hold,
    /// Fading out while zooming.
    Exit,
    /// Progress is past the window.
    After,
}

/// Visual state of one scene at one progress value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SceneVisualState {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Scale multiplier, always `> 0`.
    pub scale: f64,
    /// `false` exactly when `opacity == 0`, so consumers can skip paint work.
    pub visible: bool,
    /// Paint order; higher values composite above lower ones.
    pub stacking: i32,
    /// Window phase the progress value falls into.
    pub phase: Phase,
}

/// Stateless evaluator from progress to per-scene visual state.
///
/// Output depends only on `(progress, schedule)`: scrubbing in either direction, skipping
/// frames, or revisiting a value always yields the same states.
pub struct TimelineEvaluator;

impl TimelineEvaluator {
    /// Evaluate every scene in `schedule` at `progress`, in table order.
    pub fn evaluate(progress: f64, schedule: &Schedule) -> Vec<SceneVisualState> {
        let mut out = Vec::with_capacity(schedule.len());
        Self::evaluate_into(progress, schedule, &mut out);
        out
    }

    /// Like [`TimelineEvaluator::evaluate`], reusing `out` to avoid per-frame allocation.
    #[tracing::instrument(level = "trace", skip(schedule, out))]
    pub fn evaluate_into(progress: f64, schedule: &Schedule, out: &mut Vec<SceneVisualState>) {
        let p = clamp_progress(progress);
        out.clear();
        out.extend(schedule.entries().iter().map(|row| eval_scene(p, row)));
    }
}

/// Evaluate a single table row at clamped progress `p`.
fn eval_scene(p: f64, row: &ScheduledScene) -> SceneVisualState {
    let w = row.window();
    let env = row.scale;

    let (phase, opacity, scale) = if p < w.enter_start {
        (Phase::Before, 0.0, env.before)
    } else if p <= w.enter_end && w.enter_start < w.enter_end {
        let e = row.enter_ease.apply(phase_t(p, w.enter_start, w.enter_end));
        (Phase::Enter, e, lerp(env.before, 1.0, e))
    } else if p <= w.hold_end {
        (Phase::Hold, 1.0, 1.0)
    } else if p <= w.exit_end {
        let e = row.exit_ease.apply(phase_t(p, w.hold_end, w.exit_end));
        (Phase::Exit, 1.0 - e, lerp(1.0, env.after, e))
    } else {
        (Phase::After, 0.0, env.after)
    };

    let opacity = opacity.clamp(0.0, 1.0);
    SceneVisualState {
        opacity,
        scale,
        visible: opacity > 0.0,
        stacking: row.stacking(),
        phase,
    }
}

/// Normalized position of `p` inside `[start, end]`; zero-length phases count as complete.
fn phase_t(p: f64, start: f64, end: f64) -> f64 {
    let len = end - start;
    if len <= 0.0 {
        1.0
    } else {
        ((p - start) / len).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/timeline.rs"]
mod tests;

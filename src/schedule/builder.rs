use std::collections::BTreeMap;

use crate::animation::ease::Ease;
use crate::foundation::core::{PROGRESS_EPSILON, SceneId};
use crate::foundation::error::{RevealError, RevealResult};
use crate::scene::model::{Scene, SceneList};
use crate::schedule::timing::{SlotLayout, TimingConfig};

/// Progress markers of one scene: `enter_start <= enter_end <= hold_end <= exit_end`, all in
/// `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TimeWindow {
    /// Progress at which the scene starts entering.
    pub enter_start: f64,
    /// Progress at which the scene is fully entered.
    pub enter_end: f64,
    /// Progress at which the exit begins.
    pub hold_end: f64,
    /// Progress at which the scene is fully gone.
    pub exit_end: f64,
}

impl TimeWindow {
    fn is_ordered(&self) -> bool {
        0.0 <= self.enter_start
            && self.enter_start <= self.enter_end
            && self.enter_end <= self.hold_end
            && self.hold_end <= self.exit_end
            && self.exit_end <= 1.0
    }
}

/// Scale targets at either end of a scene's window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ScaleEnvelope {
    /// Scale before entering; interpolates to `1.0` across the enter phase.
    pub(crate) before: f64,
    /// Scale after exiting; interpolated from `1.0` across the exit phase.
    pub(crate) after: f64,
}

/// One row of the window table.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScheduledScene {
    scene: Scene,
    window: TimeWindow,
    #[serde(skip)]
    pub(crate) scale: ScaleEnvelope,
    #[serde(skip)]
    pub(crate) enter_ease: Ease,
    #[serde(skip)]
    pub(crate) exit_ease: Ease,
    stacking: i32,
}

impl ScheduledScene {
    /// The scene this row belongs to.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Precomputed window.
    pub fn window(&self) -> &TimeWindow {
        &self.window
    }

    /// Stacking order; later reveal scenes always stack above earlier ones.
    pub fn stacking(&self) -> i32 {
        self.stacking
    }
}

/// Immutable window table: the intro followed by every reveal scene.
///
/// Built once per scene list and timing configuration. When either changes, build a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct Schedule {
    entries: Vec<ScheduledScene>,
    index_by_id: BTreeMap<SceneId, usize>,
    max_concurrent_reveals: usize,
}

impl Schedule {
    /// Table rows in evaluation order (intro first).
    pub fn entries(&self) -> &[ScheduledScene] {
        &self.entries
    }

    /// Number of rows (`N + 1`).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: the intro row is always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of reveal scenes (`N`).
    pub fn reveal_count(&self) -> usize {
        self.entries.len() - 1
    }

    /// Row index of a scene, if it belongs to this schedule.
    pub fn index_of(&self, id: &SceneId) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    /// Row for a scene id.
    pub fn get(&self, id: &SceneId) -> Option<&ScheduledScene> {
        self.index_of(id).map(|i| &self.entries[i])
    }

    /// Upper bound on simultaneously non-transparent reveal scenes at any progress value.
    pub fn max_concurrent_reveals(&self) -> usize {
        self.max_concurrent_reveals
    }
}

/// Build the window table for `scenes` under `timing`.
///
/// Every violation is reported here as [`RevealError::InvalidConfiguration`]; a returned
/// [`Schedule`] can always be evaluated.
#[tracing::instrument(skip(scenes, timing), fields(reveals = scenes.reveal_count()))]
pub fn build_schedule(scenes: &SceneList, timing: &TimingConfig) -> RevealResult<Schedule> {
    timing.validate()?;

    let n = scenes.reveal_count();
    let max_index = i32::try_from(n)
        .ok()
        .and_then(|n| timing.stacking_base.checked_add(n));
    let intro_stacking = timing.stacking_base.checked_sub(1);
    let (Some(_), Some(intro_stacking)) = (max_index, intro_stacking) else {
        return Err(RevealError::invalid_configuration(format!(
            "timing.stacking_base: {} with {n} scenes overflows i32 stacking order",
            timing.stacking_base
        )));
    };

    let mut entries = Vec::with_capacity(n + 1);
    entries.push(ScheduledScene {
        scene: scenes.intro().clone(),
        window: TimeWindow {
            enter_start: 0.0,
            enter_end: 0.0,
            hold_end: 0.0,
            exit_end: timing.intro_exit_fraction,
        },
        scale: ScaleEnvelope {
            before: 1.0,
            after: timing.intro_end_scale,
        },
        enter_ease: timing.intro_ease,
        exit_ease: timing.intro_ease,
        stacking: intro_stacking,
    });

    let mut max_concurrent_reveals = 0;
    if let Some(slot) = timing.slot_layout(n) {
        if slot.duration <= 0.0 {
            return Err(RevealError::invalid_configuration(
                "timing.sequence_start_fraction: no progress left for reveal scenes",
            ));
        }

        let extent = timing.required_extent(n);
        if extent > 1.0 + PROGRESS_EPSILON {
            return Err(RevealError::invalid_configuration(format!(
                "timing: {n} scenes need progress up to {extent:.6}, which exceeds 1.0"
            )));
        }

        let slots_per_window = 1.0 / (1.0 - timing.overlap);
        for scene in scenes.reveals() {
            let i = scene.index();
            entries.push(ScheduledScene {
                scene: scene.clone(),
                window: reveal_window(timing, slot, slots_per_window, i),
                scale: ScaleEnvelope {
                    before: timing.min_scale,
                    after: timing.max_scale,
                },
                enter_ease: timing.enter_ease,
                exit_ease: timing.exit_ease,
                // Bounded by the overflow check above.
                stacking: timing.stacking_base + i as i32,
            });
        }

        max_concurrent_reveals = (slots_per_window.ceil() as usize).clamp(1, n);
    }

    if let Some(bad) = entries.iter().find(|e| !e.window.is_ordered()) {
        return Err(RevealError::invalid_configuration(format!(
            "scene '{}': window markers out of order: {:?}",
            bad.scene.id(),
            bad.window
        )));
    }

    let index_by_id = entries
        .iter()
        .enumerate()
        .map(|(i, e)| (e.scene.id().clone(), i))
        .collect();

    tracing::debug!(
        rows = entries.len(),
        sequence_end = ?entries.last().map(|e| e.window.exit_end),
        max_concurrent_reveals,
        "built reveal schedule"
    );

    Ok(Schedule {
        entries,
        index_by_id,
        max_concurrent_reveals,
    })
}

fn reveal_window(
    timing: &TimingConfig,
    slot: SlotLayout,
    slots_per_window: f64,
    index: usize,
) -> TimeWindow {
    let start = timing.sequence_start_fraction;
    let i = index as f64;
    let enter_start = start + i * slot.spacing;
    // When a window spans a whole number of slots, its exit_end is computed exactly like the
    // enter_start of the scene it hands over to, so the two markers compare equal.
    let exit_end = if slots_per_window.fract() == 0.0 {
        start + (i + slots_per_window) * slot.spacing
    } else {
        enter_start + slot.duration
    };
    // Rounding only: real overflow was already rejected against the progress budget.
    let exit_end = exit_end.min(1.0);
    let hold_end = (enter_start + slot.duration * timing.exit_start_fraction).min(exit_end);
    let enter_end = (enter_start + slot.duration * timing.enter_fraction).min(hold_end);
    TimeWindow {
        enter_start: enter_start.min(enter_end),
        enter_end,
        hold_end,
        exit_end,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/builder.rs"]
mod tests;

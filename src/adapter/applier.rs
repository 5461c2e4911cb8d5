use std::collections::BTreeMap;

use crate::adapter::progress::ProgressSource;
use crate::eval::timeline::{SceneVisualState, TimelineEvaluator};
use crate::foundation::core::SceneId;
use crate::foundation::error::RevealResult;
use crate::scene::model::{Scene, SceneList};
use crate::schedule::builder::{Schedule, build_schedule};
use crate::schedule::timing::TimingConfig;

/// Downstream consumer of evaluated visual states.
pub trait StateApplier {
    /// Apply `state` to the presentation of `scene`.
    fn apply(&mut self, scene: &Scene, state: &SceneVisualState);

    /// Called whenever the driver switches to a freshly built schedule.
    fn reset(&mut self, _schedule: &Schedule) {}
}

impl<F> StateApplier for F
where
    F: FnMut(&Scene, &SceneVisualState),
{
    fn apply(&mut self, scene: &Scene, state: &SceneVisualState) {
        self(scene, state)
    }
}

/// Keeps the most recent state of every scene, keyed by id.
#[derive(Clone, Debug, Default)]
pub struct RecordingApplier {
    latest: BTreeMap<SceneId, SceneVisualState>,
    applied: u64,
}

impl RecordingApplier {
    /// Latest state recorded for `id`.
    pub fn get(&self, id: &SceneId) -> Option<&SceneVisualState> {
        self.latest.get(id)
    }

    /// All recorded states, ordered by id.
    pub fn latest(&self) -> &BTreeMap<SceneId, SceneVisualState> {
        &self.latest
    }

    /// Total `apply` calls since construction.
    pub fn applied(&self) -> u64 {
        self.applied
    }
}

impl StateApplier for RecordingApplier {
    fn apply(&mut self, scene: &Scene, state: &SceneVisualState) {
        self.latest.insert(scene.id().clone(), *state);
        self.applied += 1;
    }

    fn reset(&mut self, _schedule: &Schedule) {
        self.latest.clear();
    }
}

/// Per-scene presentation handle stored in a [`SceneTable`].
pub trait PresentationHandle {
    /// Push a new visual state to the underlying presentation object.
    fn present(&mut self, state: &SceneVisualState);
}

/// Fixed-size table of presentation handles, allocated from the schedule it serves.
///
/// Slots follow schedule row order and are addressed by stable [`SceneId`]. The table keeps its
/// handle factory: when a driver switches schedules, [`StateApplier::reset`] drops every handle
/// and allocates a fresh slot per row of the new schedule.
#[derive(Clone)]
pub struct SceneTable<H, F> {
    ids: Vec<SceneId>,
    handles: Vec<H>,
    slot_by_id: BTreeMap<SceneId, usize>,
    make: F,
}

impl<H, F> SceneTable<H, F> {
    /// Allocate one handle per schedule row with `make`.
    pub fn from_schedule(schedule: &Schedule, make: F) -> Self
    where
        F: FnMut(&Scene) -> H,
    {
        let mut table = Self {
            ids: Vec::new(),
            handles: Vec::new(),
            slot_by_id: BTreeMap::new(),
            make,
        };
        table.allocate(schedule);
        table
    }

    fn allocate(&mut self, schedule: &Schedule)
    where
        F: FnMut(&Scene) -> H,
    {
        self.ids = schedule
            .entries()
            .iter()
            .map(|row| row.scene().id().clone())
            .collect();
        self.handles = schedule
            .entries()
            .iter()
            .map(|row| (self.make)(row.scene()))
            .collect();
        self.slot_by_id = self
            .ids
            .iter()
            .enumerate()
            .map(|(slot, id)| (id.clone(), slot))
            .collect();
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// `true` when the table holds no handles.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Slot of `id`.
    pub fn slot(&self, id: &SceneId) -> Option<usize> {
        self.slot_by_id.get(id).copied()
    }

    /// Handle for `id`.
    pub fn get(&self, id: &SceneId) -> Option<&H> {
        self.slot(id).map(|slot| &self.handles[slot])
    }

    /// Mutable handle for `id`.
    pub fn get_mut(&mut self, id: &SceneId) -> Option<&mut H> {
        self.slot(id).map(|slot| &mut self.handles[slot])
    }

    /// `(id, handle)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&SceneId, &H)> {
        self.ids.iter().zip(self.handles.iter())
    }
}

impl<H: std::fmt::Debug, F> std::fmt::Debug for SceneTable<H, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneTable")
            .field("ids", &self.ids)
            .field("handles", &self.handles)
            .finish_non_exhaustive()
    }
}

impl<H, F> StateApplier for SceneTable<H, F>
where
    H: PresentationHandle,
    F: FnMut(&Scene) -> H,
{
    fn apply(&mut self, scene: &Scene, state: &SceneVisualState) {
        match self.get_mut(scene.id()) {
            Some(handle) => handle.present(state),
            None => tracing::debug!(scene = %scene.id(), "no presentation handle for scene"),
        }
    }

    fn reset(&mut self, schedule: &Schedule) {
        let dropped = self.handles.len();
        self.allocate(schedule);
        tracing::debug!(dropped, allocated = self.handles.len(), "reallocated scene table");
    }
}

/// Couples one schedule to a [`StateApplier`] and feeds it evaluated frames.
///
/// The schedule is only ever replaced whole; evaluation itself stays the pure
/// [`TimelineEvaluator`].
#[derive(Debug)]
pub struct RevealDriver<A> {
    schedule: Schedule,
    applier: A,
    states: Vec<SceneVisualState>,
}

impl<A: StateApplier> RevealDriver<A> {
    /// Create a driver for an already built schedule.
    pub fn new(schedule: Schedule, mut applier: A) -> Self {
        applier.reset(&schedule);
        let states = Vec::with_capacity(schedule.len());
        Self {
            schedule,
            applier,
            states,
        }
    }

    /// Build a schedule and wrap it in a driver.
    pub fn build(scenes: &SceneList, timing: &TimingConfig, applier: A) -> RevealResult<Self> {
        Ok(Self::new(build_schedule(scenes, timing)?, applier))
    }

    /// Current schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// States applied by the last update, in schedule order. Empty before the first update.
    pub fn states(&self) -> &[SceneVisualState] {
        &self.states
    }

    /// Borrow the applier.
    pub fn applier(&self) -> &A {
        &self.applier
    }

    /// Mutably borrow the applier.
    pub fn applier_mut(&mut self) -> &mut A {
        &mut self.applier
    }

    /// Consume the driver and return the applier.
    pub fn into_applier(self) -> A {
        self.applier
    }

    /// Evaluate `progress` and apply every scene's state.
    pub fn update(&mut self, progress: f64) -> &[SceneVisualState] {
        TimelineEvaluator::evaluate_into(progress, &self.schedule, &mut self.states);
        for (row, state) in self.schedule.entries().iter().zip(&self.states) {
            self.applier.apply(row.scene(), state);
        }
        &self.states
    }

    /// Pump `source` until it is exhausted. Returns the number of frames applied.
    pub fn drive<S: ProgressSource + ?Sized>(&mut self, source: &mut S) -> usize {
        let mut frames = 0;
        while let Some(p) = source.next_progress() {
            self.update(p);
            frames += 1;
        }
        frames
    }

    /// Replace the schedule after a scene list or timing change.
    ///
    /// On success the applier is reset against the new schedule before any frame reaches it. On
    /// error the previous schedule stays in effect and the applier is left untouched.
    #[tracing::instrument(skip_all, fields(reveals = scenes.reveal_count()))]
    pub fn rebuild(&mut self, scenes: &SceneList, timing: &TimingConfig) -> RevealResult<()> {
        let schedule = build_schedule(scenes, timing).inspect_err(|err| {
            tracing::warn!(error = %err, "rejected schedule rebuild");
        })?;
        self.applier.reset(&schedule);
        self.schedule = schedule;
        self.states.clear();
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/adapter/applier.rs"]
mod tests;

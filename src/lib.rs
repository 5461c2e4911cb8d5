//! `reveal-timeline` schedules scroll-synchronized sequential reveals.
//!
//! A tall scrollable region reports a single progress value in `[0, 1]`. From it, the crate
//! derives the opacity, scale, visibility and stacking order of an ordered sequence of scenes:
//! an intro that fades out, followed by `N` reveal scenes that enter, hold and zoom-exit one
//! after another.
//!
//! # Pipeline overview
//!
//! 1. **Build** (once per region): `SceneList + TimingConfig -> Schedule` via [`build_schedule`].
//!    This is the only fallible step; every configuration problem is reported here.
//! 2. **Evaluate** (per progress update): `progress + Schedule -> [SceneVisualState]` via
//!    [`TimelineEvaluator::evaluate`]. Pure and infallible, so scrubbing back and forth always
//!    lands on the same states.
//! 3. **Apply** (host side): hand states to a [`StateApplier`], e.g. a [`SceneTable`] of
//!    presentation handles, optionally through a [`RevealDriver`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Stateless evaluation**: progress is the only per-call input; nothing carries over between
//!   calls.
//! - **Whole rebuilds**: changing scenes or timing builds a new [`Schedule`]; tables are never
//!   patched.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod adapter;
mod animation;
mod eval;
mod foundation;
mod scene;
mod schedule;

pub use adapter::applier::{
    PresentationHandle, RecordingApplier, RevealDriver, SceneTable, StateApplier,
};
pub use adapter::progress::{ProgressSource, ScrollGeometry, ScrollProgress};
pub use animation::ease::Ease;
pub use eval::timeline::{Phase, SceneVisualState, TimelineEvaluator};
pub use foundation::core::{SceneId, clamp_progress};
pub use foundation::error::{RevealError, RevealResult};
pub use scene::def::RevealDoc;
pub use scene::model::{Scene, SceneKind, SceneList};
pub use schedule::builder::{Schedule, ScheduledScene, TimeWindow, build_schedule};
pub use schedule::timing::{SceneDuration, TimingConfig};

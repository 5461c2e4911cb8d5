//! Contracts toward the progress producer and the presentation layer.

pub(crate) mod applier;
pub(crate) mod progress;

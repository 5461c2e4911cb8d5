//! Construction-time window table.
//!
//! All configuration errors surface here; a built [`crate::Schedule`] never fails to evaluate.

pub(crate) mod builder;
pub(crate) mod timing;

//! Scene identities and the JSON-facing reveal document.

pub(crate) mod def;
pub(crate) mod model;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{RevealError, RevealResult};
use crate::scene::model::SceneList;
use crate::schedule::builder::{Schedule, build_schedule};
use crate::schedule::timing::TimingConfig;

/// JSON-facing description of one scrollable reveal region.
///
/// ```json
/// { "intro": "hero", "scenes": ["portal-a", "portal-b"], "timing": { "overlap": 0.2 } }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RevealDoc {
    /// Intro scene id.
    pub intro: String,
    /// Reveal scene ids in display order.
    #[serde(default)]
    pub scenes: Vec<String>,
    /// Timing configuration; omitted fields take their defaults.
    #[serde(default)]
    pub timing: TimingConfig,
}

impl RevealDoc {
    /// Parse a reveal document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> RevealResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| RevealError::serde(format!("parse reveal document JSON: {e}")))
    }

    /// Parse a reveal document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> RevealResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RevealError::serde(format!("open reveal document '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validated scene list described by this document.
    pub fn scene_list(&self) -> RevealResult<SceneList> {
        SceneList::new(self.intro.as_str(), self.scenes.iter().map(String::as_str))
    }

    /// Build the window table described by this document.
    pub fn build(&self) -> RevealResult<Schedule> {
        build_schedule(&self.scene_list()?, &self.timing)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/def.rs"]
mod tests;

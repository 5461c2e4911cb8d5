use std::collections::BTreeSet;

use crate::foundation::core::SceneId;
use crate::foundation::error::{RevealError, RevealResult};

/// Role of a scene inside a reveal sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// Introductory scene, fully visible at progress 0.
    Intro,
    /// One of the sequentially revealed "portal" scenes.
    Reveal,
}

/// One ordinal unit of the sequence. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Scene {
    id: SceneId,
    index: usize,
    kind: SceneKind,
}

impl Scene {
    /// Stable scene identifier.
    pub fn id(&self) -> &SceneId {
        &self.id
    }

    /// 0-based position within the scene's kind.
    ///
    /// Intro and reveal scenes use separate index spaces: the intro is always `0`, and reveal
    /// scenes count from `0` among themselves. Only `(kind, index)` is unique within a
    /// [`SceneList`]; use [`Scene::id`] for a single key across both.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Scene role.
    pub fn kind(&self) -> SceneKind {
        self.kind
    }
}

/// Ordered scene list: one intro followed by `N >= 0` reveal scenes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneList {
    intro: Scene,
    reveals: Vec<Scene>,
}

impl SceneList {
    /// Build a scene list from an intro id and the reveal ids in display order.
    ///
    /// Ids must be non-empty and unique across the whole list.
    pub fn new<I, S>(intro: impl Into<SceneId>, reveals: I) -> RevealResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<SceneId>,
    {
        let intro = intro.into();
        let mut seen = BTreeSet::new();
        check_id(&intro, "intro", &mut seen)?;

        let mut out = Vec::new();
        for (index, id) in reveals.into_iter().enumerate() {
            let id = id.into();
            check_id(&id, &format!("scenes[{index}]"), &mut seen)?;
            out.push(Scene {
                id,
                index,
                kind: SceneKind::Reveal,
            });
        }

        Ok(Self {
            intro: Scene {
                id: intro,
                index: 0,
                kind: SceneKind::Intro,
            },
            reveals: out,
        })
    }

    /// The intro scene.
    pub fn intro(&self) -> &Scene {
        &self.intro
    }

    /// Reveal scenes in display order.
    pub fn reveals(&self) -> &[Scene] {
        &self.reveals
    }

    /// Number of reveal scenes (`N`).
    pub fn reveal_count(&self) -> usize {
        self.reveals.len()
    }

    /// Intro followed by every reveal scene.
    pub fn iter(&self) -> impl Iterator<Item = &Scene> {
        std::iter::once(&self.intro).chain(self.reveals.iter())
    }
}

fn check_id(id: &SceneId, at: &str, seen: &mut BTreeSet<SceneId>) -> RevealResult<()> {
    if id.as_str().trim().is_empty() {
        return Err(RevealError::invalid_configuration(format!(
            "{at}: scene id must be non-empty"
        )));
    }
    if !seen.insert(id.clone()) {
        return Err(RevealError::invalid_configuration(format!(
            "{at}: duplicate scene id '{id}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;

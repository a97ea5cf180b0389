//! The immutable scene catalog and its load-time validation.
//!
//! A catalog is built once from authored content and never mutated. Referential
//! integrity (every `next_scene` resolves, labels unique per scene, start scene
//! present) is checked at construction rather than trusted at traversal time,
//! so sessions can follow edges without re-validating. Cycles are allowed: the
//! walk-based checks only follow edges, they never require the graph to be a
//! DAG.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Deserialize;

use crate::error::{CatalogError, CatalogResult, EngineError, EngineResult};
use crate::scene::Scene;

/// On-disk shape of an authored catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDoc {
    #[serde(default)]
    title: String,
    start: String,
    scenes: Vec<Scene>,
}

/// An immutable, validated collection of scenes keyed by identifier.
#[derive(Debug, Clone)]
pub struct Catalog {
    title: String,
    start: String,
    /// Scene ids in authored order, for listing.
    order: Vec<String>,
    scenes: HashMap<String, Scene>,
}

impl Catalog {
    /// Parse and validate a catalog from its JSON document.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let doc: CatalogDoc = serde_json::from_str(json)?;
        Self::from_scenes(doc.title, doc.start, doc.scenes)
    }

    /// Build and validate a catalog from already-constructed scenes.
    pub fn from_scenes(
        title: impl Into<String>,
        start: impl Into<String>,
        scenes: Vec<Scene>,
    ) -> CatalogResult<Self> {
        let mut order = Vec::with_capacity(scenes.len());
        let mut by_id = HashMap::with_capacity(scenes.len());
        for scene in scenes {
            let id = scene.id.clone();
            if by_id.insert(id.clone(), scene).is_some() {
                return Err(CatalogError::DuplicateScene(id));
            }
            order.push(id);
        }

        let catalog = Self {
            title: title.into(),
            start: start.into(),
            order,
            scenes: by_id,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog title, if the document carried one.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The fixed start scene identifier.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Look up a scene by identifier.
    pub fn get(&self, id: &str) -> Option<&Scene> {
        self.scenes.get(id)
    }

    /// Look up a scene, surfacing a miss as [`EngineError::SceneNotFound`].
    pub fn require(&self, id: &str) -> EngineResult<&Scene> {
        self.get(id)
            .ok_or_else(|| EngineError::SceneNotFound(id.to_string()))
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the catalog holds no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Iterate over scenes in authored order.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.order.iter().filter_map(|id| self.scenes.get(id))
    }

    /// Scene ids reachable from the start by following choice edges.
    ///
    /// Follows edges breadth-first; safe on cyclic catalogs.
    pub fn reachable(&self) -> HashSet<&str> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        if let Some(scene) = self.scenes.get(&self.start) {
            seen.insert(scene.id.as_str());
            queue.push_back(scene.id.as_str());
        }
        while let Some(id) = queue.pop_front() {
            if let Some(scene) = self.scenes.get(id) {
                for choice in &scene.options {
                    if seen.insert(choice.next_scene.as_str()) {
                        queue.push_back(choice.next_scene.as_str());
                    }
                }
            }
        }
        seen
    }

    /// Scene ids not reachable from the start, in authored order.
    ///
    /// Unreachable scenes are an authoring smell, not an error: the shipped
    /// story carries an island of retired chapters.
    pub fn unreachable(&self) -> Vec<&str> {
        let reachable = self.reachable();
        self.order
            .iter()
            .map(String::as_str)
            .filter(|id| !reachable.contains(id))
            .collect()
    }

    /// Summarize the catalog for diagnostics.
    pub fn report(&self) -> CatalogReport {
        let edges = self.scenes.values().map(|s| s.options.len()).sum();
        let terminals = self
            .scenes()
            .filter(|s| s.is_terminal())
            .map(|s| s.id.clone())
            .collect();
        let unreachable = self
            .unreachable()
            .into_iter()
            .map(str::to_string)
            .collect();
        CatalogReport {
            scenes: self.scenes.len(),
            edges,
            terminals,
            unreachable,
        }
    }

    /// Check referential integrity. Run once at construction.
    fn validate(&self) -> CatalogResult<()> {
        if !self.scenes.contains_key(&self.start) {
            return Err(CatalogError::StartNotFound(self.start.clone()));
        }
        for scene in self.scenes.values() {
            let mut labels = HashSet::new();
            for choice in &scene.options {
                if !labels.insert(choice.label) {
                    return Err(CatalogError::DuplicateLabel {
                        scene: scene.id.clone(),
                        label: choice.label,
                    });
                }
                if !self.scenes.contains_key(&choice.next_scene) {
                    return Err(CatalogError::DanglingReference {
                        scene: scene.id.clone(),
                        label: choice.label,
                        target: choice.next_scene.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Diagnostic summary of a loaded catalog.
#[derive(Debug, Clone)]
pub struct CatalogReport {
    /// Total scene count.
    pub scenes: usize,
    /// Total choice-edge count.
    pub edges: usize,
    /// Terminal scene ids, in authored order.
    pub terminals: Vec<String>,
    /// Scene ids unreachable from the start, in authored order.
    pub unreachable: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Choice, Label};

    fn label(c: char) -> Label {
        Label::new(c).unwrap()
    }

    fn choice(c: char, next: &str) -> Choice {
        Choice::new(label(c), format!("take {c}"), format!("took {c}"), next)
    }

    fn two_scene_catalog() -> Catalog {
        Catalog::from_scenes("Test", "start", vec![
            Scene::new("start", "At the start.").with_choice(choice('A', "end")),
            Scene::new("end", "Done."),
        ])
        .unwrap()
    }

    #[test]
    fn lookup_by_id() {
        let catalog = two_scene_catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("start").unwrap().description, "At the start.");
        assert!(catalog.get("missing").is_none());
        assert!(matches!(
            catalog.require("missing"),
            Err(EngineError::SceneNotFound(_))
        ));
    }

    #[test]
    fn scenes_iterate_in_authored_order() {
        let catalog = two_scene_catalog();
        let ids: Vec<_> = catalog.scenes().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["start", "end"]);
    }

    #[test]
    fn dangling_reference_rejected() {
        let err = Catalog::from_scenes("Test", "start", vec![
            Scene::new("start", "x").with_choice(choice('A', "nowhere")),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DanglingReference { .. }));
    }

    #[test]
    fn missing_start_rejected() {
        let err = Catalog::from_scenes("Test", "gone", vec![Scene::new("end", "x")]).unwrap_err();
        assert!(matches!(err, CatalogError::StartNotFound(_)));
    }

    #[test]
    fn duplicate_scene_rejected() {
        let err = Catalog::from_scenes("Test", "a", vec![
            Scene::new("a", "one"),
            Scene::new("a", "two"),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateScene(_)));
    }

    #[test]
    fn duplicate_label_rejected() {
        let err = Catalog::from_scenes("Test", "start", vec![
            Scene::new("start", "x")
                .with_choice(choice('A', "end"))
                .with_choice(choice('a', "end")),
            Scene::new("end", "y"),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateLabel { .. }));
    }

    #[test]
    fn cyclic_catalog_loads_and_reports() {
        let catalog = Catalog::from_scenes("Test", "a", vec![
            Scene::new("a", "x").with_choice(choice('A', "b")),
            Scene::new("b", "y").with_choice(choice('A', "a")),
        ])
        .unwrap();
        assert_eq!(catalog.reachable().len(), 2);
        assert!(catalog.report().terminals.is_empty());
    }

    #[test]
    fn unreachable_island_reported() {
        let catalog = Catalog::from_scenes("Test", "start", vec![
            Scene::new("start", "x").with_choice(choice('A', "end")),
            Scene::new("end", "y"),
            Scene::new("island", "z").with_choice(choice('A', "end")),
        ])
        .unwrap();
        assert_eq!(catalog.unreachable(), ["island"]);
        let report = catalog.report();
        assert_eq!(report.scenes, 3);
        assert_eq!(report.edges, 2);
        assert_eq!(report.terminals, ["end"]);
    }

    #[test]
    fn from_json_parses_document() {
        let json = r#"{
            "title": "Mini",
            "start": "s",
            "scenes": [
                {
                    "id": "s",
                    "description": "Start here.",
                    "options": [
                        {
                            "label": "A",
                            "text": "Finish",
                            "outcome": "Finished.",
                            "score_changes": {"harem": 1},
                            "next_scene": "t"
                        }
                    ]
                },
                {"id": "t", "description": "The end.", "options": []}
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.title(), "Mini");
        assert_eq!(catalog.start(), "s");
        let choice = catalog.get("s").unwrap().choice(label('A')).unwrap();
        assert_eq!(choice.score_changes.harem, 1);
        assert_eq!(choice.score_changes.divan, 0);
    }
}

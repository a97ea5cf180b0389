//! The per-playthrough session state machine.
//!
//! A [`Session`] owns all mutable playthrough state: the current-scene
//! pointer, the reputation totals, and the choice history. The catalog is
//! borrowed read-only, so any number of sessions can share one catalog.
//!
//! [`Session::choose`] checks its preconditions before touching anything, so a
//! rejected choice leaves the session exactly as it was. There is no partial
//! application and no undo; replay goes through [`Session::reset`].

use crate::catalog::Catalog;
use crate::error::{EngineError, EngineResult};
use crate::history::{History, HistoryEntry};
use crate::scene::{Label, Scene};
use crate::score::{ScoreDeltas, Scores};

/// What the session's current pointer resolves to.
#[derive(Debug, Clone, Copy)]
pub enum CurrentScene<'a> {
    /// The pointer resolves to a catalog scene (possibly terminal).
    Scene(&'a Scene),
    /// The pointer names a scene absent from the catalog.
    ///
    /// Play ends here exactly as on a terminal scene, but the marker lets the
    /// presentation layer tell a designed ending from an authoring bug.
    Missing {
        /// The identifier that failed to resolve.
        id: &'a str,
    },
}

impl<'a> CurrentScene<'a> {
    /// The scene, if the pointer resolved.
    pub fn scene(&self) -> Option<&'a Scene> {
        match self {
            CurrentScene::Scene(scene) => Some(scene),
            CurrentScene::Missing { .. } => None,
        }
    }

    /// Whether the pointer names a scene absent from the catalog.
    pub fn is_missing(&self) -> bool {
        matches!(self, CurrentScene::Missing { .. })
    }
}

/// The result of one accepted choice, ready for rendering.
#[derive(Debug, Clone)]
pub struct Turn {
    /// The choice text that was picked.
    pub choice: String,
    /// The narrative outcome text.
    pub outcome: String,
    /// The reputation deltas that were applied.
    pub deltas: ScoreDeltas,
    /// Where the session moved to.
    pub next_scene: String,
}

/// One playthrough of a catalog: pointer, scores, and history.
pub struct Session<'a> {
    catalog: &'a Catalog,
    /// Where this session began; [`Session::reset`] returns here.
    start: String,
    current: String,
    scores: Scores,
    history: History,
}

impl<'a> Session<'a> {
    /// Begin a playthrough at the catalog's start scene.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::start_at(catalog, catalog.start())
    }

    /// Begin a playthrough at an arbitrary scene.
    ///
    /// The identifier is not required to exist: pointing at a missing scene
    /// simply begins the session in the ended state, the same graceful end the
    /// player would reach through a dangling edge.
    pub fn start_at(catalog: &'a Catalog, id: impl Into<String>) -> Self {
        let start = id.into();
        Self {
            catalog,
            current: start.clone(),
            start,
            scores: Scores::new(),
            history: History::new(),
        }
    }

    /// The catalog this session plays.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// The current scene identifier, resolved or not.
    pub fn current_id(&self) -> &str {
        &self.current
    }

    /// Resolve the current pointer against the catalog.
    ///
    /// Reading never mutates the session; repeated calls return the same
    /// answer until a choice is accepted.
    pub fn current(&self) -> CurrentScene<'_> {
        match self.catalog.get(&self.current) {
            Some(scene) => CurrentScene::Scene(scene),
            None => CurrentScene::Missing { id: &self.current },
        }
    }

    /// Whether play has ended, by terminal scene or by a catalog miss.
    pub fn is_terminal(&self) -> bool {
        match self.current() {
            CurrentScene::Scene(scene) => scene.is_terminal(),
            CurrentScene::Missing { .. } => true,
        }
    }

    /// The running reputation totals.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// The choices accepted so far, oldest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Accept one choice: apply its deltas, record it, and advance.
    ///
    /// Rejects with [`EngineError::GameAlreadyEnded`] on a terminal or missing
    /// scene and [`EngineError::InvalidChoice`] on a label the current scene
    /// does not offer. Nothing is mutated on rejection.
    pub fn choose(&mut self, label: Label) -> EngineResult<Turn> {
        let catalog = self.catalog;
        let scene = catalog
            .get(&self.current)
            .ok_or_else(|| EngineError::GameAlreadyEnded(self.current.clone()))?;
        if scene.is_terminal() {
            return Err(EngineError::GameAlreadyEnded(self.current.clone()));
        }
        let choice = scene
            .choice(label)
            .ok_or_else(|| EngineError::InvalidChoice {
                scene: self.current.clone(),
                label,
            })?;

        self.scores.apply(&choice.score_changes);
        self.history.push(HistoryEntry {
            scene: self.current.clone(),
            label,
            choice: choice.text.clone(),
            outcome: choice.outcome.clone(),
        });
        let turn = Turn {
            choice: choice.text.clone(),
            outcome: choice.outcome.clone(),
            deltas: choice.score_changes,
            next_scene: choice.next_scene.clone(),
        };
        self.current = choice.next_scene.clone();
        Ok(turn)
    }

    /// Return to the session's start scene with zeroed scores and an empty
    /// history. The only supported way to replay.
    pub fn reset(&mut self) {
        self.current = self.start.clone();
        self.scores = Scores::new();
        self.history.clear();
    }
}

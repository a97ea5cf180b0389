//! Scene-graph engine for the Saray interactive narrative player.
//!
//! A story is a directed graph of [`Scene`]s, each offering a set of lettered
//! [`Choice`]s. Choosing one adjusts the player's reputation [`Scores`],
//! appends to the session history, and moves the current-scene pointer along
//! the chosen edge until a scene with no choices is reached. The catalog is
//! immutable after loading; all mutable state lives in a [`Session`].

/// The immutable scene catalog and its load-time validation.
pub mod catalog;
/// Error types for the engine.
pub mod error;
/// The append-only per-session choice history.
pub mod history;
/// Scene and choice data model.
pub mod scene;
/// Reputation score categories, totals, and deltas.
pub mod score;
/// The per-playthrough session state machine.
pub mod session;

pub use catalog::{Catalog, CatalogReport};
pub use error::{CatalogError, CatalogResult, EngineError, EngineResult};
pub use history::{History, HistoryEntry};
pub use scene::{CharacterCard, Choice, Label, ParseLabelError, Scene};
pub use score::{ScoreCategory, ScoreDeltas, Scores};
pub use session::{CurrentScene, Session, Turn};

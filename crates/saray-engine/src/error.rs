//! Error types for the engine.

use thiserror::Error;

use crate::scene::Label;

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors surfaced by catalog lookups and session transitions.
///
/// All of these are local conditions: the session never mutates any state
/// before returning one of them.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested scene identifier is not present in the catalog.
    #[error("scene not found: \"{0}\"")]
    SceneNotFound(String),

    /// The chosen label is not offered by the current scene.
    #[error("scene \"{scene}\" offers no choice {label}")]
    InvalidChoice {
        /// The scene the choice was made on.
        scene: String,
        /// The label that was not on offer.
        label: Label,
    },

    /// A choice was made after the playthrough already ended.
    #[error("the story has already ended at \"{0}\"")]
    GameAlreadyEnded(String),
}

/// Errors detected while loading or validating a scene catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document could not be parsed.
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two scenes share the same identifier.
    #[error("duplicate scene id: \"{0}\"")]
    DuplicateScene(String),

    /// A scene offers the same label twice.
    #[error("scene \"{scene}\" offers label {label} more than once")]
    DuplicateLabel {
        /// The offending scene.
        scene: String,
        /// The repeated label.
        label: Label,
    },

    /// The declared start scene does not exist.
    #[error("start scene \"{0}\" not found in catalog")]
    StartNotFound(String),

    /// A choice points at a scene that does not exist.
    #[error("scene \"{scene}\" choice {label} points at unknown scene \"{target}\"")]
    DanglingReference {
        /// The scene holding the bad edge.
        scene: String,
        /// The choice carrying the bad edge.
        label: Label,
        /// The identifier that failed to resolve.
        target: String,
    },
}

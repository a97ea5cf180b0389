//! Scene and choice data model.
//!
//! A [`Scene`] is one node of the narrative graph: a description, optional
//! character display metadata, and an ordered list of lettered [`Choice`]s.
//! A scene with no choices is terminal. The engine never interprets the
//! character metadata; it is carried for the presentation layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::score::ScoreDeltas;

/// A single-letter choice label (`A`..`Z`).
///
/// Labels are normalized to uppercase; parsing is case-insensitive. Authored
/// labels are not required to be contiguous — one scene may offer A–C,
/// another A–F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Label(char);

impl Label {
    /// Create a label from a letter, normalizing to uppercase.
    ///
    /// Returns `None` if the character is not an ASCII letter.
    pub fn new(letter: char) -> Option<Self> {
        letter
            .is_ascii_alphabetic()
            .then(|| Self(letter.to_ascii_uppercase()))
    }

    /// Parse a label from user input, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        let first = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::new(first)
    }

    /// The uppercase letter this label displays as.
    pub fn letter(self) -> char {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a character is not a valid choice label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid choice label: {0:?}")]
pub struct ParseLabelError(pub char);

impl TryFrom<char> for Label {
    type Error = ParseLabelError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ParseLabelError(value))
    }
}

impl From<Label> for char {
    fn from(label: Label) -> Self {
        label.0
    }
}

impl FromStr for Label {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseLabelError(s.chars().next().unwrap_or('\0')))
    }
}

/// Display metadata for the character fronting a scene.
///
/// Opaque to the engine; the image reference is resolved (or ignored) by the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCard {
    /// Character display name.
    pub name: String,
    /// Image reference (a path or asset key).
    pub image: String,
    /// A signature quote shown alongside the portrait.
    pub quote: String,
}

/// One user-selectable choice within a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// The letter the player picks this choice by.
    pub label: Label,
    /// The choice text shown to the player.
    pub text: String,
    /// Narrative result text shown after choosing.
    pub outcome: String,
    /// Reputation deltas applied when chosen. Omitted categories stay put.
    #[serde(default)]
    pub score_changes: ScoreDeltas,
    /// Identifier of the successor scene.
    pub next_scene: String,
}

impl Choice {
    /// Create a new choice.
    pub fn new(
        label: Label,
        text: impl Into<String>,
        outcome: impl Into<String>,
        next_scene: impl Into<String>,
    ) -> Self {
        Self {
            label,
            text: text.into(),
            outcome: outcome.into(),
            score_changes: ScoreDeltas::default(),
            next_scene: next_scene.into(),
        }
    }

    /// Set the reputation deltas.
    pub fn with_changes(mut self, changes: ScoreDeltas) -> Self {
        self.score_changes = changes;
        self
    }
}

/// One node of the narrative graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Unique scene identifier.
    pub id: String,
    /// Narrative text shown to the player.
    pub description: String,
    /// Character display metadata, if the scene fronts one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<CharacterCard>,
    /// Choices in authored order. Empty means the scene is terminal.
    #[serde(default)]
    pub options: Vec<Choice>,
}

impl Scene {
    /// Create a new scene with no choices (terminal until choices are added).
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            character: None,
            options: Vec::new(),
        }
    }

    /// Set the character card.
    pub fn with_character(mut self, character: CharacterCard) -> Self {
        self.character = Some(character);
        self
    }

    /// Add a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.options.push(choice);
        self
    }

    /// Look up a choice by label.
    pub fn choice(&self, label: Label) -> Option<&Choice> {
        self.options.iter().find(|c| c.label == label)
    }

    /// Whether this scene ends the playthrough (offers no choices).
    pub fn is_terminal(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(c: char) -> Label {
        Label::new(c).unwrap()
    }

    #[test]
    fn label_normalizes_case() {
        assert_eq!(Label::new('b'), Label::new('B'));
        assert_eq!(label('b').letter(), 'B');
        assert_eq!(Label::new('3'), None);
    }

    #[test]
    fn label_parse_from_input() {
        assert_eq!(Label::parse("  c "), Some(label('C')));
        assert_eq!(Label::parse("AB"), None);
        assert_eq!(Label::parse(""), None);
        assert_eq!("d".parse::<Label>(), Ok(label('D')));
    }

    #[test]
    fn scene_builder_and_lookup() {
        let scene = Scene::new("crossroads", "Two paths diverge.")
            .with_choice(Choice::new(label('A'), "Go left", "You go left.", "left"))
            .with_choice(Choice::new(label('B'), "Go right", "You go right.", "right"));

        assert!(!scene.is_terminal());
        assert_eq!(scene.choice(label('B')).unwrap().next_scene, "right");
        assert!(scene.choice(label('C')).is_none());
    }

    #[test]
    fn empty_scene_is_terminal() {
        assert!(Scene::new("end", "The end.").is_terminal());
    }

    #[test]
    fn choice_deserializes_without_score_changes() {
        let json = r#"{
            "label": "A",
            "text": "Wait",
            "outcome": "Nothing happens.",
            "next_scene": "end"
        }"#;
        let choice: Choice = serde_json::from_str(json).unwrap();
        assert_eq!(choice.score_changes, ScoreDeltas::default());
    }

    #[test]
    fn label_rejects_non_letters_in_json() {
        let json = r#"{"label": "1", "text": "x", "outcome": "y", "next_scene": "z"}"#;
        assert!(serde_json::from_str::<Choice>(json).is_err());
    }
}

//! Authored story content for the Saray interactive narrative player.
//!
//! Ships "Sarayda Bir Yolculuk", an Ottoman-court drama following Hürrem
//! Sultan through palace intrigue. The scene graph is embedded as a JSON
//! asset and exposed as a validated [`Catalog`]; the selectable protagonist
//! roster used by the presentation layer lives here too.
//!
//! The story runs from `bolum_1` to the terminal scene `final`. Chapters
//! `bolum_92` through `bolum_107` are a retired authoring island that no
//! reachable scene points at; they are kept as authored and surface in the
//! catalog's unreachable report.

use saray_engine::{Catalog, CatalogResult};

/// The embedded story document.
const STORY_JSON: &str = include_str!("../assets/sarayda_bir_yolculuk.json");

/// Parse and validate the embedded story catalog.
pub fn load() -> CatalogResult<Catalog> {
    Catalog::from_json(STORY_JSON)
}

/// A selectable protagonist, with presentation-layer asset references.
///
/// Purely cosmetic: the scene graph is the same whichever protagonist the
/// player fronts the story with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Protagonist {
    /// Display name.
    pub name: &'static str,
    /// Portrait image reference.
    pub image: &'static str,
    /// Selection sound reference.
    pub sound: &'static str,
}

/// The selectable protagonists, in presentation order.
pub const ROSTER: [Protagonist; 3] = [
    Protagonist {
        name: "Süleyman",
        image: "images/sultan.png",
        sound: "sounds/diger.mp3",
    },
    Protagonist {
        name: "Pargalı",
        image: "images/pargali.png",
        sound: "sounds/diger.mp3",
    },
    Protagonist {
        name: "Hürrem",
        image: "images/hurrem.jpg",
        sound: "sounds/hurrem.mp3",
    },
];

/// Find a protagonist by display name, case-insensitively.
pub fn protagonist(name: &str) -> Option<&'static Protagonist> {
    ROSTER
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use saray_engine::{Label, ScoreCategory, Scores, Session};

    use super::*;

    fn label(c: char) -> Label {
        Label::new(c).unwrap()
    }

    #[test]
    fn catalog_loads_and_validates() {
        let catalog = load().unwrap();
        assert_eq!(catalog.title(), "Sarayda Bir Yolculuk");
        assert_eq!(catalog.start(), "bolum_1");
        assert_eq!(catalog.len(), 81);
    }

    #[test]
    fn unreachable_set_is_the_retired_island() {
        let catalog = load().unwrap();
        let expected: Vec<String> = (92..=107).map(|n| format!("bolum_{n}")).collect();
        assert_eq!(catalog.unreachable(), expected);
    }

    #[test]
    fn final_scene_is_the_only_terminal() {
        let catalog = load().unwrap();
        let report = catalog.report();
        assert_eq!(report.terminals, ["final"]);
        assert!(catalog.get("final").unwrap().is_terminal());
    }

    #[test]
    fn character_cards_appear_from_chapter_51() {
        let catalog = load().unwrap();
        assert!(catalog.get("bolum_1").unwrap().character.is_none());
        let card = catalog.get("bolum_51").unwrap().character.as_ref().unwrap();
        assert_eq!(card.name, "Hatice Sultan");
        assert_eq!(card.image, "images/hatice_sultan.png");
    }

    #[test]
    fn opening_chapters_play_as_authored() {
        let catalog = load().unwrap();
        let mut session = Session::new(&catalog);

        let turn = session.choose(label('B')).unwrap();
        assert_eq!(turn.choice, "Usulsüzlükleri açıkça eleştir.");
        assert_eq!(session.current_id(), "bolum_2");
        assert_eq!(*session.scores(), Scores {
            harem: 2,
            suleyman: 1,
            divan: -2
        });
        assert_eq!(session.history().len(), 1);

        session.choose(label('C')).unwrap();
        assert_eq!(session.current_id(), "bolum_3");
        assert_eq!(*session.scores(), Scores {
            harem: 3,
            suleyman: 2,
            divan: -1
        });
    }

    #[test]
    fn story_reaches_the_final_scene() {
        let catalog = load().unwrap();
        let mut session = Session::new(&catalog);

        // Every chapter offers A; the authored graph converges on "final".
        let mut steps = 0;
        while !session.is_terminal() {
            session.choose(label('A')).unwrap();
            steps += 1;
            assert!(steps <= catalog.len(), "walk exceeded catalog size");
        }

        assert_eq!(session.current_id(), "final");
        assert!(!session.current().is_missing());
        assert!(
            session
                .choose(label('A'))
                .is_err_and(|e| e.to_string().contains("already ended"))
        );
    }

    #[test]
    fn late_game_scenes_route_to_final() {
        let catalog = load().unwrap();
        let mut session = Session::start_at(&catalog, "bolum_110");
        session.choose(label('C')).unwrap();
        assert_eq!(session.current_id(), "final");
        assert_eq!(session.scores().leading(), ScoreCategory::Harem);
    }

    #[test]
    fn roster_lookup_is_case_insensitive() {
        assert_eq!(protagonist("hürrem").unwrap().name, "Hürrem");
        assert_eq!(protagonist(" pargalı ").unwrap().name, "Pargalı");
        assert!(protagonist("Mahidevran").is_none());
    }
}

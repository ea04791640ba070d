//! Reference cues for common produce.
//!
//! Used to annotate a result with what the eye should look for; the model
//! is never constrained to these items.

use crate::models::SpoilageLevel;

/// Visual cues for one kind of produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProduceProfile {
    pub name: &'static str,
    pub fresh_signs: &'static [&'static str],
    pub spoiled_signs: &'static [&'static str],
}

/// How a single observed indicator reads against a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Fresh,
    Spoiled,
    Unknown,
}

pub const PRODUCE_CATALOG: &[ProduceProfile] = &[
    ProduceProfile {
        name: "apple",
        fresh_signs: &["red", "shiny", "firm", "smooth"],
        spoiled_signs: &["brown spots", "wrinkled", "soft", "mold"],
    },
    ProduceProfile {
        name: "banana",
        fresh_signs: &["yellow", "firm", "unblemished"],
        spoiled_signs: &["black spots", "brown", "mushy", "overripe"],
    },
    ProduceProfile {
        name: "tomato",
        fresh_signs: &["red", "firm", "smooth"],
        spoiled_signs: &["wrinkled", "soft spots", "mold", "discolored"],
    },
    ProduceProfile {
        name: "lettuce",
        fresh_signs: &["green", "crisp", "firm"],
        spoiled_signs: &["brown edges", "wilted", "slimy", "yellowing"],
    },
    ProduceProfile {
        name: "orange",
        fresh_signs: &["bright orange", "firm", "fragrant"],
        spoiled_signs: &["mold", "soft spots", "wrinkled", "discolored"],
    },
    ProduceProfile {
        name: "strawberry",
        fresh_signs: &["red", "firm", "fresh leaves"],
        spoiled_signs: &["mold", "mushy", "brown", "shriveled"],
    },
    ProduceProfile {
        name: "carrot",
        fresh_signs: &["orange", "firm", "crisp"],
        spoiled_signs: &["slimy", "soft", "white mold", "discolored"],
    },
    ProduceProfile {
        name: "broccoli",
        fresh_signs: &["dark green", "firm florets"],
        spoiled_signs: &["yellow", "brown spots", "limp", "odor"],
    },
];

/// Find the profile for a food type as reported by the model.
///
/// Case-insensitive and tolerant of plurals, so "Ripe Bananas" and
/// "strawberries" both match.
pub fn lookup(food_type: &str) -> Option<&'static ProduceProfile> {
    let lowered = food_type.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphabetic())
        .filter(|word| !word.is_empty())
        .find_map(|word| {
            PRODUCE_CATALOG
                .iter()
                .find(|profile| singular_matches(word, profile.name))
        })
}

fn singular_matches(word: &str, name: &str) -> bool {
    if word == name {
        return true;
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if name.strip_suffix('y') == Some(stem) {
            return true;
        }
    }
    if let Some(stem) = word.strip_suffix("es") {
        if stem == name {
            return true;
        }
    }
    word.strip_suffix('s') == Some(name)
}

impl ProduceProfile {
    /// Classify an observed indicator. Spoiled cues win over fresh ones,
    /// so "soft spots" is spoiled even though a profile lists "firm".
    pub fn classify(&self, indicator: &str) -> Cue {
        let indicator = indicator.to_lowercase();
        if self
            .spoiled_signs
            .iter()
            .any(|sign| indicator.contains(sign))
        {
            Cue::Spoiled
        } else if self.fresh_signs.iter().any(|sign| indicator.contains(sign)) {
            Cue::Fresh
        } else {
            Cue::Unknown
        }
    }

    /// Rough level suggested by a set of indicators, or `None` when none
    /// of them is recognised.
    pub fn suggest_level(&self, indicators: &[String]) -> Option<SpoilageLevel> {
        let (fresh, spoiled) =
            indicators
                .iter()
                .fold((0usize, 0usize), |(fresh, spoiled), indicator| {
                    match self.classify(indicator) {
                        Cue::Fresh => (fresh + 1, spoiled),
                        Cue::Spoiled => (fresh, spoiled + 1),
                        Cue::Unknown => (fresh, spoiled),
                    }
                });

        match (fresh, spoiled) {
            (0, 0) => None,
            (_, 0) => Some(SpoilageLevel::Fresh),
            (f, s) if f >= s => Some(SpoilageLevel::SlightlyAged),
            (0, s) if s >= 2 => Some(SpoilageLevel::HeavilySpoiled),
            _ => Some(SpoilageLevel::ModeratelySpoiled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eight_items() {
        assert_eq!(PRODUCE_CATALOG.len(), 8);
        assert!(PRODUCE_CATALOG
            .iter()
            .all(|p| !p.fresh_signs.is_empty() && !p.spoiled_signs.is_empty()));
    }

    #[test]
    fn test_lookup_exact_and_case() {
        assert_eq!(lookup("apple").unwrap().name, "apple");
        assert_eq!(lookup("Broccoli").unwrap().name, "broccoli");
        assert_eq!(lookup("Granny Smith Apple").unwrap().name, "apple");
    }

    #[test]
    fn test_lookup_plurals() {
        assert_eq!(lookup("bananas").unwrap().name, "banana");
        assert_eq!(lookup("tomatoes").unwrap().name, "tomato");
        assert_eq!(lookup("Strawberries").unwrap().name, "strawberry");
        assert_eq!(lookup("baby carrots").unwrap().name, "carrot");
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup("durian").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("pineapple").is_none());
    }

    #[test]
    fn test_classify_prefers_spoiled() {
        let apple = lookup("apple").unwrap();
        assert_eq!(apple.classify("Shiny red skin"), Cue::Fresh);
        assert_eq!(apple.classify("small brown spots near stem"), Cue::Spoiled);
        assert_eq!(apple.classify("sticker on side"), Cue::Unknown);

        let tomato = lookup("tomato").unwrap();
        assert_eq!(tomato.classify("firm but with soft spots"), Cue::Spoiled);
    }

    #[test]
    fn test_suggest_level() {
        let apple = lookup("apple").unwrap();
        let fresh = vec!["shiny".to_string(), "firm".to_string()];
        assert_eq!(apple.suggest_level(&fresh), Some(SpoilageLevel::Fresh));

        let mixed = vec!["shiny".to_string(), "wrinkled".to_string()];
        assert_eq!(apple.suggest_level(&mixed), Some(SpoilageLevel::SlightlyAged));

        let bad = vec!["mold".to_string(), "soft".to_string()];
        assert_eq!(apple.suggest_level(&bad), Some(SpoilageLevel::HeavilySpoiled));

        let one = vec!["mold".to_string()];
        assert_eq!(apple.suggest_level(&one), Some(SpoilageLevel::ModeratelySpoiled));

        assert_eq!(apple.suggest_level(&[]), None);
    }
}

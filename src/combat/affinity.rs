//! Elements and elemental affinity
//!
//! Every card carries an element and every enemy may carry one weakness
//! and one resistance:
//! - Weakness: takes 150% damage (rounded down)
//! - Resistance: takes 75% damage (rounded down)
//! - Anything else: takes 100% damage

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Card and creature elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Earth,
    Air,
    Neutral,
}

impl Element {
    /// The four elements that map onto card suits
    pub fn all() -> &'static [Element] {
        &[Element::Fire, Element::Water, Element::Earth, Element::Air]
    }

    /// Display glyph
    pub fn icon(&self) -> &'static str {
        match self {
            Element::Fire => "🔥",
            Element::Water => "💧",
            Element::Earth => "🌿",
            Element::Air => "💨",
            Element::Neutral => "⚪",
        }
    }
}

impl FromStr for Element {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fire" | "apoy" => Ok(Element::Fire),
            "water" | "tubig" => Ok(Element::Water),
            "earth" | "lupa" => Ok(Element::Earth),
            "air" | "hangin" | "wind" => Ok(Element::Air),
            "neutral" => Ok(Element::Neutral),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Neutral => "neutral",
        };
        write!(f, "{}", s)
    }
}

/// How an enemy reacts to an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AffinityModifier {
    /// Weak to the element - takes 150% damage
    Weakness,
    /// No special reaction - takes 100% damage
    Normal,
    /// Resists the element - takes 75% damage
    Resistance,
}

impl AffinityModifier {
    /// Apply this modifier to a damage amount
    pub fn apply(&self, damage: i32) -> i32 {
        match self {
            AffinityModifier::Weakness => damage * 3 / 2,
            AffinityModifier::Normal => damage,
            AffinityModifier::Resistance => damage * 3 / 4,
        }
    }

    /// Multiplier as a float
    pub fn multiplier(&self) -> f64 {
        match self {
            AffinityModifier::Weakness => 1.5,
            AffinityModifier::Normal => 1.0,
            AffinityModifier::Resistance => 0.75,
        }
    }
}

/// An enemy's elemental weakness and resistance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementalAffinity {
    pub weakness: Option<Element>,
    pub resistance: Option<Element>,
}

impl ElementalAffinity {
    /// Affinity with both sides set
    pub fn new(weakness: Element, resistance: Element) -> Self {
        Self {
            weakness: Some(weakness),
            resistance: Some(resistance),
        }
    }

    /// Affinity with no weakness or resistance
    pub fn none() -> Self {
        Self::default()
    }

    /// Modifier for an attacking element. Neutral and missing elements are normal.
    pub fn modifier_for(&self, element: Option<Element>) -> AffinityModifier {
        match element {
            Some(e) if Some(e) == self.weakness => AffinityModifier::Weakness,
            Some(e) if Some(e) == self.resistance => AffinityModifier::Resistance,
            _ => AffinityModifier::Normal,
        }
    }

    /// Apply the modifier for an attacking element to a damage amount
    pub fn apply(&self, damage: i32, element: Option<Element>) -> i32 {
        self.modifier_for(element).apply(damage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_apply() {
        assert_eq!(AffinityModifier::Weakness.apply(10), 15);
        assert_eq!(AffinityModifier::Normal.apply(10), 10);
        assert_eq!(AffinityModifier::Resistance.apply(10), 7);
        assert_eq!(AffinityModifier::Weakness.apply(7), 10);
    }

    #[test]
    fn test_affinity_lookup() {
        let affinity = ElementalAffinity::new(Element::Fire, Element::Air);

        assert_eq!(
            affinity.modifier_for(Some(Element::Fire)),
            AffinityModifier::Weakness
        );
        assert_eq!(
            affinity.modifier_for(Some(Element::Air)),
            AffinityModifier::Resistance
        );
        assert_eq!(
            affinity.modifier_for(Some(Element::Water)),
            AffinityModifier::Normal
        );
        assert_eq!(affinity.modifier_for(None), AffinityModifier::Normal);
    }

    #[test]
    fn test_no_affinity_is_neutral() {
        let affinity = ElementalAffinity::none();
        for element in Element::all() {
            assert_eq!(affinity.apply(20, Some(*element)), 20);
        }
    }

    #[test]
    fn test_element_parsing() {
        assert_eq!("fire".parse::<Element>(), Ok(Element::Fire));
        assert_eq!("Tubig".parse::<Element>(), Ok(Element::Water));
        assert_eq!("wind".parse::<Element>(), Ok(Element::Air));
        assert!("plasma".parse::<Element>().is_err());
    }
}

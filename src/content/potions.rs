use crate::items::{PotionConfig, PotionEffect, PotionRarity};

fn potion(
    id: &str,
    name: &str,
    description: &str,
    glyph: &str,
    effect: PotionEffect,
    rarity: PotionRarity,
) -> PotionConfig {
    PotionConfig {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        glyph: glyph.to_string(),
        lore: String::new(),
        sprite_key: None,
        effect,
        rarity,
    }
}

pub fn potions() -> Vec<PotionConfig> {
    use PotionEffect::*;
    use PotionRarity::*;

    vec![
        potion("healing_potion", "Healing Potion", "Heal 20 HP.", "❤️", Heal20Hp, Common),
        potion("clarity_potion", "Potion of Clarity", "Draw 3 cards.", "🧠", Draw3Cards, Common),
        potion("fortitude_potion", "Elixir of Fortitude", "Gain 15 Block.", "🛡️", Gain15Block, Common),
        potion(
            "swiftness_potion",
            "Draught of Swiftness",
            "Gain 1 Dexterity.",
            "💨",
            Gain1Dexterity,
            Common,
        ),
        potion(
            "elements_potion",
            "Phial of Elements",
            "Choose which element becomes dominant in your next hand.",
            "🌈",
            ChooseElement,
            Uncommon,
        ),
        potion(
            "regeneration_potion",
            "Tonic of Regeneration",
            "Gain 2 Regeneration.",
            "♻️",
            GainRegeneration,
            Uncommon,
        ),
        potion(
            "strength_potion",
            "Brew of Strength",
            "Gain 2 Strength.",
            "💪",
            Gain2Strength,
            Uncommon,
        ),
        potion(
            "resilience_potion",
            "Balm of Resilience",
            "Remove all debuffs.",
            "✨",
            RemoveDebuffs,
            Rare,
        ),
        potion(
            "divine_potion",
            "Divine Elixir",
            "Gain 10 temporary Max HP until end of combat.",
            "🌟",
            GainTempMaxHp,
            Rare,
        ),
        potion(
            "chaos_potion",
            "Mixture of Chaos",
            "Add 3 random cards to your hand.",
            "🌀",
            AddRandomCards,
            Rare,
        ),
    ]
}

use crate::items::{RelicConfig, RelicTiming, TriggerCondition};

use RelicTiming::*;

fn relic(
    id: &str,
    name: &str,
    description: &str,
    glyph: &str,
    timings: &[RelicTiming],
    trigger: TriggerCondition,
) -> RelicConfig {
    RelicConfig {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        glyph: glyph.to_string(),
        lore: String::new(),
        sprite_key: None,
        effect_types: timings.to_vec(),
        trigger_condition: trigger,
    }
}

/// Relic catalog. Relics without timings only matter outside combat.
pub fn relics() -> Vec<RelicConfig> {
    use TriggerCondition::*;

    vec![
        relic(
            "earthwardens_plate",
            "Earthwarden's Plate",
            "Forged from the sacred linga stones of the mountain spirits. Start each combat with 5 Block and gain 1 Block at the start of each turn.",
            "🛡️",
            &[StartOfCombat, StartOfTurn],
            Always,
        ),
        relic(
            "swift_wind_agimat",
            "Agimat of the Swift Wind",
            "A blessed talisman that captures the essence of Tikbalang's speed. Start each combat with 1 additional discard charge.",
            "💨",
            &[StartOfCombat],
            Always,
        ),
        relic(
            "umalagad_spirit",
            "Umalagad's Spirit",
            "The protective essence of a sea serpent that guides travelers. Gain 1 Dexterity at the start of each combat.",
            "🐍",
            &[StartOfCombat],
            Always,
        ),
        relic(
            "diwatas_crown",
            "Diwata's Crown",
            "A crown blessed by the benevolent nature spirits. Start each combat with 5 Block.",
            "👑",
            &[StartOfCombat],
            Always,
        ),
        relic(
            "stone_golem_heart",
            "Stone Golem's Heart",
            "The eternal heart of an earth guardian. Gain 8 Max HP. At the start of combat, gain 2 Block.",
            "❤️",
            &[OnAcquire, StartOfCombat],
            Always,
        ),
        relic(
            "ember_fetish",
            "Ember Fetish",
            "Carved from the heart of a banana tree at midnight and blessed by Apolaki's flame. At the start of your turn, if you have no Block, gain 1 Strength.",
            "🔥",
            &[StartOfTurn],
            WhenNoBlock,
        ),
        relic(
            "ancestral_blade",
            "Ancestral Blade",
            "A kampilan blessed by the spirits of your ancestors. Each time you play a Flush or better, gain 2 Strength.",
            "⚔️",
            &[AfterHandPlayed],
            OnFlush,
        ),
        relic(
            "sarimanok_feather",
            "Sarimanok Feather",
            "A radiant feather from the mythical bird that brings prosperity. Whenever you play a Straight or better, gain 1 Ginto.",
            "🦚",
            &[AfterHandPlayed],
            OnStraightOrBetter,
        ),
        relic(
            "lucky_charm",
            "Lucky Charm",
            "A mutya jewel that brings fortune to its bearer. Whenever you play a Straight or better, gain 1 Ginto.",
            "🍀",
            &[AfterHandPlayed],
            OnStraightOrBetter,
        ),
        relic(
            "tidal_amulet",
            "Tidal Amulet",
            "An enchanted piece of coral that pulses with the rhythm of the sea. At the end of your turn, heal 1 HP for each card in your hand.",
            "🌊",
            &[EndOfTurn],
            Always,
        ),
        relic(
            "tiyanak_tear",
            "Tiyanak Tear",
            "A crystallized tear of a lost infant spirit. Gain 1 Strength at the start of each turn.",
            "💧",
            &[StartOfTurn],
            Always,
        ),
        relic(
            "kapres_cigar",
            "Kapre's Cigar",
            "Still smoldering from the tree giant's lips. Your first attack each combat deals double damage.",
            "🚬",
            &[OnAttack],
            OncePerCombat,
        ),
        relic(
            "sigbin_heart",
            "Sigbin Heart",
            "A stolen heart turned into an agimat. Attacks deal 3 additional damage.",
            "🫀",
            &[OnAttack],
            Always,
        ),
        relic(
            "bungisngis_grin",
            "Bungisngis Grin",
            "The frozen laugh of a one-eyed giant. Attacks deal 5 additional damage to a debuffed enemy.",
            "😁",
            &[OnAttack, OnSpecial],
            WhenEnemyDebuffed,
        ),
        relic(
            "amomongo_claw",
            "Amomongo Claw",
            "A claw that tore through tin roofs. Attacks apply 1 Vulnerable.",
            "🦴",
            &[OnAttack],
            Always,
        ),
        relic(
            "duwende_charm",
            "Duwende Charm",
            "A pebble from a duwende mound. Defending grants 3 additional Block.",
            "🪨",
            &[OnDefend],
            Always,
        ),
        relic(
            "wind_veil",
            "Wind Veil",
            "A shawl woven from the breath of Amihan. Draw 1 additional card next turn for each Hangin card you play.",
            "🌬️",
            &[AfterHandPlayed],
            Always,
        ),
        relic(
            "babaylans_talisman",
            "Babaylan's Talisman",
            "A sacred amulet blessed by the ancient shamans. Your hand is always considered one tier higher when evaluating poker hands.",
            "📿",
            &[HandEvaluation],
            Always,
        ),
        relic(
            "tikbalangs_hoof",
            "Tikbalang's Hoof",
            "A hoof shed by the trickster of the crossroads. 10% chance to completely dodge enemy attacks.",
            "🐴",
            &[Passive],
            Always,
        ),
        relic(
            "balete_root",
            "Balete Root",
            "A root torn from the spirit tree. Defending grants 2 additional Block for each Lupa card played.",
            "🌳",
            &[OnDefend],
            Always,
        ),
        relic(
            "mangangaway_wand",
            "Mangangaway's Wand",
            "The crooked wand of a sorcerer. Special actions deal 5 additional damage.",
            "🪄",
            &[OnSpecial],
            Always,
        ),
        // Act 2
        relic(
            "sirenas_scale",
            "Sirena's Scale",
            "Heal 2 HP for each Tubig card played.",
            "🧜",
            &[AfterHandPlayed],
            Always,
        ),
        relic(
            "siyokoys_shell",
            "Siyokoy's Shell",
            "Gain 3 Block for each Apoy card played.",
            "🐚",
            &[AfterHandPlayed],
            Always,
        ),
        relic(
            "tidal_spirit_essence",
            "Tidal Spirit Essence",
            "At the end of your turn, if you have more than 50% HP, heal 3 HP.",
            "💧",
            &[EndOfTurn],
            WhenAboveHalfHealth,
        ),
        relic(
            "elemental_core",
            "Elemental Core",
            "Attacks deal 3 additional damage when the hand holds both Apoy and Tubig cards.",
            "🔮",
            &[OnAttack],
            Always,
        ),
        relic(
            "merfolk_trident",
            "Merfolk Trident",
            "When you play a Three of a Kind or better, deal 4 damage to the enemy.",
            "🔱",
            &[AfterHandPlayed],
            OnThreeOfAKindOrBetter,
        ),
        relic(
            "coral_ward",
            "Coral Ward",
            "Defending grants 3 additional Block for each different suit played.",
            "🪸",
            &[OnDefend],
            Always,
        ),
        relic(
            "bakunawa_fang",
            "Bakunawa Fang",
            "Attacks and specials deal 5 additional damage while you hold another relic.",
            "🦷",
            &[OnAttack, OnSpecial],
            Always,
        ),
        relic(
            "moonlight_pearl",
            "Moonlight Pearl",
            "At the start of your turn, draw 1 additional card.",
            "⚪",
            &[StartOfTurn],
            Always,
        ),
        relic(
            "depth_dwellers_lantern",
            "Depth Dweller's Lantern",
            "At the start of your turn, draw 2 additional cards.",
            "🏮",
            &[StartOfTurn],
            Always,
        ),
        relic(
            "tubig_diwa_shard",
            "Tubig Diwa Shard",
            "Infuse 1 additional card when visiting the shrine.",
            "🔷",
            &[],
            Always,
        ),
        // Act 3
        relic(
            "tigmamanukan_feather",
            "Tigmamanukan Feather",
            "Draw 1 additional card next turn when you play a Flush or better.",
            "🪶",
            &[AfterHandPlayed],
            OnFlush,
        ),
        relic(
            "heavenly_breeze",
            "Heavenly Breeze",
            "Gain 1 Dexterity when you play cards of 3 or more different suits.",
            "🍃",
            &[AfterHandPlayed],
            Always,
        ),
        relic(
            "cloud_spinner_silk",
            "Cloud Spinner's Silk",
            "When you play a Straight Flush or better, gain 5 Block.",
            "☁️",
            &[AfterHandPlayed],
            OnStraightFlushOrBetter,
        ),
        relic(
            "apolakis_spear",
            "Apolaki's Spear",
            "Attacks deal 5 additional damage when you play cards of 4 different suits.",
            "🗡️",
            &[OnAttack],
            Always,
        ),
        relic(
            "mayaris_bow",
            "Mayari's Bow",
            "When you play a Four of a Kind or better, deal 8 damage to the enemy.",
            "🏹",
            &[AfterHandPlayed],
            OnFourOfAKindOrBetter,
        ),
        relic(
            "false_gods_mask",
            "False God's Mask",
            "When you play a Five of a Kind, gain 10 Block and draw 2 additional cards next turn.",
            "🎭",
            &[AfterHandPlayed],
            OnFiveOfAKind,
        ),
        relic(
            "celestial_forge",
            "Celestial Forge",
            "When you play a Five of a Kind, upgrade a random card in your hand.",
            "⚒️",
            &[],
            Always,
        ),
        relic(
            "coconut_diwa",
            "Coconut Diwa",
            "Ignore 1 nullify effect each combat.",
            "🥥",
            &[],
            Always,
        ),
        relic(
            "skyward_diwa_shard",
            "Skyward Diwa Shard",
            "Infuse 2 additional cards when visiting the shrine.",
            "🔶",
            &[],
            Always,
        ),
        relic(
            "divine_spark",
            "Divine Spark",
            "At the start of combat, gain 1 Strength for each poker hand tier available.",
            "✨",
            &[],
            Always,
        ),
        // Shop
        relic(
            "merchants_scale",
            "Merchant's Scale",
            "A balance blessed by Lakambini to ensure fair trade. All shop items are 20% cheaper.",
            "⚖️",
            &[],
            Always,
        ),
        relic(
            "bargain_talisman",
            "Bargain Talisman",
            "A gemstone that negotiates with shopkeepers on your behalf. The first shop item you buy each act is free.",
            "💎",
            &[],
            Always,
        ),
    ]
}

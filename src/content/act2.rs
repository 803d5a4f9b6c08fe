//! Chapter 2: the submerged barangays

use crate::combat::{Element, ElementalAffinity};
use crate::entities::{EnemyConfig, EnemyTier};

use Element::{Earth, Fire, Water};
use EnemyTier::{Boss, Common, Elite};

pub fn enemies() -> Vec<EnemyConfig> {
    vec![
        EnemyConfig::new(
            "sirena_illusionist",
            "Sirena Illusionist",
            Common,
            2,
            240,
            18,
            &["heal", "stun", "attack"],
            "sirena",
        )
        .with_affinity(ElementalAffinity::new(Earth, Fire))
        .with_dialogue(
            "Songs lure to deep!",
            "My melody... fades...",
            "Mercy sings: Sirena, benevolent guardians, corrupted by false tides (Ramos, 1990).",
            "Silence my voice—fuel for shadow!",
        )
        .with_lore(
            "Enchanting mermaids who use illusions and healing magic. Once benevolent guardians of coastal waters.",
            "General, mermaids (Eugenio, 2001)",
            "Aswang Project – Lurers",
        ),
        EnemyConfig::new(
            "siyokoy_raider",
            "Siyokoy Raider",
            Common,
            2,
            320,
            27,
            &["defend", "attack", "attack"],
            "siyokoy",
        )
        .with_affinity(ElementalAffinity::new(Earth, Fire))
        .with_dialogue(
            "Scales claim drowned!",
            "My fins... fail...",
            "Grace spares: Siyokoy, malevolent mermen dragging victims (Samar, 2019).",
            "Drown my form—impostor rises!",
        )
        .with_lore(
            "Aggressive male sea creatures with webbed limbs and scales. Warriors of the deep who drag victims beneath the waves.",
            "General, scaled drowners (Ramos, 1990)",
            "Aswang Project – Webbed predators",
        ),
        EnemyConfig::new(
            "santelmo_flicker",
            "Santelmo Flicker",
            Common,
            2,
            160,
            21,
            &["attack", "defend", "attack"],
            "santelmo",
        )
        .with_affinity(ElementalAffinity::new(Water, Earth))
        .with_dialogue(
            "Flames ignite tides!",
            "My light... dims...",
            "Compassion reveals: Santelmo, soul fires aiding gods (Jocano, 1969).",
            "Extinguish me—shadow grows!",
        )
        .with_lore(
            "Fire spirits appearing as floating flames near water, based on St. Elmo's fire phenomenon.",
            "Visayan, St. Elmo's fire (Eugenio, 2001)",
            "Aswang Project – Upper world assistants",
        ),
        EnemyConfig::new(
            "berberoka_lurker",
            "Berberoka Lurker",
            Common,
            2,
            256,
            24,
            &["weaken", "attack", "defend"],
            "berberoka",
        )
        .with_affinity(ElementalAffinity::new(Earth, Fire))
        .with_dialogue(
            "Swamps swell to consume!",
            "My waters... recede...",
            "Pity uncovers: Berberoka, giants drowning prey (Ramos, 1990).",
            "Drain my essence—fuel for deceit!",
        )
        .with_lore(
            "Water creature that swallows victims whole, lurking in rivers and changing size to trap prey.",
            "Apayao, water suckers (Samar, 2019)",
            "Aswang Project – Size-changers",
        ),
        EnemyConfig::new(
            "magindara_swarm",
            "Magindara Swarm",
            Common,
            2,
            120,
            15,
            &["attack", "heal"],
            "magindara",
        )
        .with_affinity(ElementalAffinity::new(Earth, Fire))
        .with_dialogue(
            "Beauty veils venom!",
            "Our songs... end...",
            "Mercy lures truth: Magindara, vicious mermaids, once protective (Eugenio, 2001).",
            "Shatter our forms—shadow thrives!",
        )
        .with_lore(
            "Beautiful mermaids with enchanting voices that travel in swarms. Once protective, now flesh-eaters.",
            "Bicolano, flesh-eaters (Ramos, 1990)",
            "Aswang Project – Enchanting drowners",
        ),
        EnemyConfig::new(
            "kataw",
            "Kataw",
            Common,
            2,
            224,
            21,
            &["heal", "attack", "strengthen"],
            "kataw",
        )
        .with_affinity(ElementalAffinity::new(Earth, Fire))
        .with_dialogue(
            "Seas bow to my rule!",
            "My crown... sinks...",
            "Grace crowns: Kataw, merman kings commanding waves (Samar, 2019).",
            "Usurp my throne—false god rises!",
        )
        .with_lore(
            "Half-human half-fish sea rulers who command the waves. Guardians of the ocean depths.",
            "Bisaya, sea rulers (Ramos, 1990)",
            "Aswang Project – Water controllers",
        ),
        EnemyConfig::new(
            "berbalang",
            "Berbalang",
            Common,
            2,
            208,
            24,
            &["weaken", "attack", "attack"],
            "berbalang",
        )
        .with_affinity(ElementalAffinity::new(Fire, Water))
        .with_dialogue(
            "Ghoul hunger rises from depths!",
            "My spirit... scatters...",
            "Compassion spares: Berbalang, ghouls feeding on drowned (Ramos, 1990).",
            "Consume my form—impostor grows!",
        )
        .with_lore(
            "Vampire-like creature that can separate its upper body to hunt. Feeds on corpses and the drowned.",
            "Sulu, astral hunters (Eugenio, 2001)",
            "Aswang Project – Corpse-eaters",
        ),
        EnemyConfig::new(
            "sunken_bangkilan",
            "Sunken Bangkilan",
            Elite,
            2,
            420,
            33,
            &["weaken", "attack", "heal", "strengthen"],
            "sunkenbangkilan",
        )
        .with_affinity(ElementalAffinity::new(Earth, Fire))
        .with_dialogue(
            "Curses bubble from abyss!",
            "My shapes... dissolve...",
            "Mercy shifts: Bangkilan, shape-shifting sorceresses (Samar, 2019).",
            "Shatter my illusions—shadow rises!",
        )
        .with_lore(
            "Cursed spirits from sunken villages. Shape-shifting sorceresses seeking revenge on the living.",
            "Adaptation, Mangkukulam-related (Ramos, 1990)",
            "Aswang Project – Sea witches",
        ),
        EnemyConfig::new(
            "apoy_tubig_fury",
            "Apoy-Tubig Fury",
            Elite,
            2,
            408,
            30,
            &["poison", "attack", "heal", "attack"],
            "apoytubig",
        )
        .with_dialogue(
            "Elements clash in fury!",
            "My balance... breaks...",
            "Pity reveals: Elementals, feuding fire-water forces (Jocano, 1969).",
            "Quench my flames—fuel for deceit!",
        )
        .with_lore(
            "Elemental fusion of fire and water. Unstable and dangerous, representing the duality of Act 2.",
            "Visayan, elemental conflicts (Eugenio, 2001)",
            "Aswang Project – Elemental assistants",
        ),
        EnemyConfig::new(
            "bakunawa",
            "Bakunawa",
            Boss,
            2,
            900,
            42,
            &["weaken", "attack", "strengthen", "attack", "poison"],
            "bakunawa",
        )
        .with_affinity(ElementalAffinity::new(Earth, Fire))
        .with_dialogue(
            "Moons fall to my maw!",
            "My hunger... sated...",
            "Grace spares: Bakunawa, moon-eater causing eclipses (Ramos, 1990).",
            "Devour my essence—false god thrives!",
        )
        .with_lore(
            "The great serpent who devours the moon, causing eclipses. The lunar devourer of the submerged depths.",
            "Bicolano/Visayan, eclipse serpent (Eugenio, 2001)",
            "Aswang Project – Moon-swallower",
        ),
    ]
}

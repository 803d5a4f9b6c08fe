//! Chapter 3: the skyward citadel

use crate::combat::{Element, ElementalAffinity};
use crate::entities::{EnemyConfig, EnemyTier};

use Element::{Air, Earth, Fire, Water};
use EnemyTier::{Boss, Common, Elite};

pub fn enemies() -> Vec<EnemyConfig> {
    vec![
        EnemyConfig::new(
            "alan",
            "Alan",
            Common,
            3,
            192,
            27,
            &["attack", "attack", "strengthen"],
            "alan",
        )
        .with_affinity(ElementalAffinity::new(Earth, Air))
        .with_dialogue(
            "Half-bird fury descends!",
            "My wings... clip...",
            "Grace lifts: Alan, Bikol half-human birds adopting lost children (Samar, 2019).",
            "Ground me—shadow thrives!",
        )
        .with_lore(
            "Winged humanoid spirits with reversed toes. Once adopted lost children, now strike from corrupted skies.",
            "Bikol, bird-people (Ramos, 1990)",
            "Aswang Project – Cannibalistic hangers",
        ),
        EnemyConfig::new(
            "ekek",
            "Ekek",
            Common,
            3,
            176,
            21,
            &["attack", "weaken", "attack"],
            "ekek",
        )
        .with_affinity(ElementalAffinity::new(Fire, Air))
        .with_dialogue(
            "Blood calls from skies!",
            "My thirst... quenches...",
            "Compassion reveals: Ekek, bird vampires sucking tongues (Ramos, 1990).",
            "Drain my life—impostor rises!",
        )
        .with_lore(
            "Bird-like vampiric creature that hunts at night, feeding on blood and tongues of sleeping victims.",
            "General, nocturnal suckers (Eugenio, 2001)",
            "Aswang Project – Tongue-suckers",
        ),
        EnemyConfig::new(
            "diwata_sentinel",
            "Diwata Sentinel",
            Common,
            3,
            304,
            27,
            &["defend", "attack", "defend"],
            "diwata",
        )
        .with_affinity(ElementalAffinity::new(Fire, Water))
        .with_dialogue(
            "Sky wards against intruders!",
            "My guard... falters...",
            "Grace protects: Diwata, divine guardians owning deer/fish (Ramos, 1990).",
            "Banish my form—impostor thrives!",
        )
        .with_lore(
            "Divine nature spirits corrupted to guard the false god's citadel. Once guardians of sacred groves.",
            "Visayan, protectors (Eugenio, 2001)",
            "Aswang Project – Nature deities",
        ),
        EnemyConfig::new(
            "bulalakaw_flamewings",
            "Bulalakaw Flamewings",
            Common,
            3,
            264,
            27,
            &["poison", "attack", "defend"],
            "bulalakaw",
        )
        .with_affinity(ElementalAffinity::new(Water, Earth))
        .with_dialogue(
            "Comets blaze your doom!",
            "My streak... fades...",
            "Pity uncovers: Bulalakaw, comet-like omen birds (Ramos, 1990).",
            "Quench my fire—fuel for deceit!",
        )
        .with_lore(
            "Meteor spirits that streak across the sky, burning with celestial fire. Omens of illness and disaster.",
            "General, sky streakers (Eugenio, 2001)",
            "Aswang Project – Illness omens",
        ),
        EnemyConfig::new(
            "minokawa_harbinger",
            "Minokawa Harbinger",
            Common,
            3,
            224,
            24,
            &["weaken", "attack", "defend"],
            "minokawa",
        )
        .with_affinity(ElementalAffinity::new(Fire, Air))
        .with_dialogue(
            "Eclipses devour light!",
            "My maw... closes...",
            "Mercy spares: Minokawa, eclipse birds devouring sun/moon (Jocano, 1969).",
            "Swallow my essence—false god grows!",
        )
        .with_lore(
            "Giant bird that causes eclipses by swallowing the sun and moon. Herald of the false god.",
            "Bagobo, cosmic devourers (Ramos, 1990)",
            "Aswang Project – Eclipse causers",
        ),
        EnemyConfig::new(
            "sarimanok_keeper",
            "Sarimanok Keeper",
            Common,
            3,
            240,
            24,
            &["weaken", "strengthen", "attack"],
            "sarimanok",
        )
        .with_affinity(ElementalAffinity::new(Water, Earth))
        .with_dialogue(
            "Plumage shields false one!",
            "My fortune... lost...",
            "Compassion reveals: Sarimanok, ornate fortune birds (Samar, 2019).",
            "Pluck my feathers—shadow rises!",
        )
        .with_lore(
            "The legendary bird of good fortune, now twisted to serve the false god. Symbol of Maranao prosperity.",
            "Maranao, prosperity omens (Ramos, 1990)",
            "Aswang Project – Mindanao pantheon",
        ),
        EnemyConfig::new(
            "tigmamanukan_watcher",
            "Tigmamanukan Watcher",
            Common,
            3,
            208,
            24,
            &["strengthen", "attack", "attack"],
            "tigmamanukan",
        )
        .with_affinity(ElementalAffinity::new(Earth, Air))
        .with_dialogue(
            "Omens watch your path!",
            "My flight... ends...",
            "Mercy foretells: Tigmamanukan, prophetic birds of Bathala (Jocano, 1969).",
            "Clip my wings—fuel for shadow!",
        )
        .with_lore(
            "Celestial prophetic bird that lives at the edge of creation. Once a divine messenger of Bathala.",
            "Tagalog, divination birds (Eugenio, 2001)",
            "Aswang Project – Celestial signs",
        ),
        EnemyConfig::new(
            "apolaki_godling",
            "Apolaki Godling",
            Elite,
            3,
            510,
            36,
            &["strengthen", "attack", "weaken", "attack", "poison"],
            "apolaki",
        )
        .with_affinity(ElementalAffinity::new(Water, Earth))
        .with_dialogue(
            "Sun's wrath challenges you!",
            "My light... dims...",
            "Pity uncovers: Apolaki, war/sun deity rivaling Mayari (Jocano, 1969).",
            "Eclipse my form—fuel for deceit!",
        )
        .with_lore(
            "Lesser manifestation of Apolaki, god of sun and war. Corrupted by the false Bathala to guard the citadel.",
            "Tagalog, Bathala's son (Eugenio, 2001)",
            "Aswang Project – Moon feud",
        ),
        EnemyConfig::new(
            "ribung_linti_duo",
            "Ribung Linti Duo",
            Elite,
            3,
            270,
            30,
            &["attack", "strengthen", "attack", "defend"],
            "ribunglinti",
        )
        .with_affinity(ElementalAffinity::new(Earth, Air))
        .with_dialogue(
            "Storms strike in tandem!",
            "Our thunder... silences...",
            "Mercy echoes: Ribung Linti, Ilocano lightning spirits (Samar, 2019).",
            "Shatter our bolts—false god grows!",
        )
        .with_lore(
            "Twin lightning spirits that strike in perfect synchronization. Ilocano storm beings of devastating power.",
            "Ilocano, storm beings (Ramos, 1990)",
            "Aswang Project – Thunder tormentors",
        ),
        EnemyConfig::new(
            "false_bathala",
            "False Bathala",
            Boss,
            3,
            1200,
            48,
            &["stun", "weaken", "strengthen", "attack", "poison", "attack"],
            "falsebathala",
        )
        .with_dialogue(
            "Bow to merged god—serpent and wings as one!",
            "My fusion... fractures...",
            "Grace unmasks: False Bathala, engkanto-revived Ulilang Kaluluwa and Galang Kaluluwa, twisted from grave into impostor, perverting coconut tree's life gift (Treasury of Tagalog).",
            "Shatter my form—coconut tree's dark roots feed shadow!",
        )
        .with_lore(
            "The corrupted impostor claiming to be the supreme deity. Born from the fusion of Ulilang Kaluluwa (serpent) and Galang Kaluluwa (winged spirit), revived by the engkanto to pervert Bathala's throne.",
            "Tagalog myth adaptation (Jocano, 1969)",
            "Aswang Project – Cosmogony; Samar, 2019",
        ),
    ]
}

//! Chapter 1: the corrupted ancestral forests

use crate::combat::{Element, ElementalAffinity, StatusEffect};
use crate::entities::{EnemyConfig, EnemyTier};

use Element::{Air, Earth, Fire, Water};
use EnemyTier::{Boss, Common, Elite};

pub fn enemies() -> Vec<EnemyConfig> {
    vec![
        EnemyConfig::new(
            "tikbalang_scout",
            "Tikbalang Scout",
            Common,
            1,
            180,
            21,
            &["attack", "weaken", "attack"],
            "tikbalang",
        )
        .with_affinity(ElementalAffinity::new(Fire, Air))
        .with_dialogue(
            "Lost in my paths, seer? False one's whispers guide!",
            "My tricks... unravel...",
            "Spare me: Tikbalang were forest protectors, now misleading with backward hooves.",
            "End me—my essence feeds shadow!",
        )
        .with_lore(
            "Tikbalang are tall, bony creatures with the head and hooves of a horse. They are said to lead travelers astray, causing them to lose their way in the forests and mountains. Wearing one's shirt inside out is believed to protect against their tricks.",
            "Tagalog, mountain tricksters",
            "Aswang Project – Horse-headed deceivers",
        ),
        EnemyConfig::new(
            "balete_wraith",
            "Balete Wraith",
            Common,
            1,
            150,
            15,
            &["attack", "strengthen", "attack"],
            "balete",
        )
        .with_affinity(ElementalAffinity::new(Air, Water))
        .with_initial_effect(StatusEffect::vulnerable(1))
        .with_dialogue(
            "Roots entwine your fate!",
            "Grave... calls...",
            "Mercy reveals: Balete trees are anito portals, haunted by engkanto-twisted spirits.",
            "Strike true—my form feeds impostor!",
        )
        .with_lore(
            "The balete tree (strangler fig) is sacred in Filipino folklore. Its tangled aerial roots are said to house supernatural beings. Cutting down a balete without proper rituals invites misfortune, as the displaced spirits may seek vengeance.",
            "General, haunted figs",
            "Aswang Project – Spirit gateways",
        ),
        EnemyConfig::new(
            "sigbin_charger",
            "Sigbin Charger",
            Common,
            1,
            220,
            30,
            &["defend", "attack", "defend"],
            "sigbin",
        )
        .with_affinity(ElementalAffinity::new(Water, Earth))
        .with_dialogue(
            "Charge for shadow throne!",
            "My heart... stolen...",
            "Compassion uncovers: Sigbin steal hearts for amulets, once loyal to Bathala.",
            "Slay me—claim power for shadow!",
        )
        .with_lore(
            "The Sigbin resembles a hornless goat but walks backwards. Wealthy families in the Visayas were rumored to keep them as dark familiars. During Holy Week, they emerge to hunt for children's hearts to craft into powerful agimat (amulets).",
            "Visayan, goat-like eaters",
            "Aswang Project – Nocturnal stench-emitters",
        ),
        EnemyConfig::new(
            "duwende_trickster",
            "Duwende Trickster",
            Common,
            1,
            130,
            12,
            &["weaken", "attack", "weaken"],
            "duwende",
        )
        .with_affinity(ElementalAffinity::new(Air, Water))
        .with_dialogue(
            "Tricks abound in mounds!",
            "My fortune... fades...",
            "Spare, learn: Duwende grant boons/curses, warped by engkanto lies.",
            "End my mischief—fuel for impostor!",
        )
        .with_lore(
            "Duwende are small humanoid creatures, often classified as white (benevolent) or black (malevolent). Filipinos say 'Tabi tabi po' (excuse me) when passing areas where duwende might dwell, to avoid offending them.",
            "General, goblins",
            "Aswang Project – Magical omens",
        ),
        EnemyConfig::new(
            "tiyanak_ambusher",
            "Tiyanak Ambusher",
            Common,
            1,
            170,
            18,
            &["weaken", "attack", "attack"],
            "tiyanak",
        )
        .with_affinity(ElementalAffinity::new(Earth, Fire))
        .with_dialogue(
            "Wails lure to doom!",
            "My cry... silenced...",
            "Mercy shows: Tiyanak, lost infant spirits mimicking babies to attack.",
            "Slay innocent form—fuel for shadow!",
        )
        .with_lore(
            "The Tiyanak's wail mimics a helpless infant, preying on the compassion of travelers. To escape, one must turn their clothes inside out. Some believe they are the vengeful spirits of children denied proper burial rites.",
            "General, demon babies",
            "Aswang Project – Forest lurers",
        ),
        EnemyConfig::new(
            "amomongo",
            "Amomongo",
            Common,
            1,
            160,
            15,
            &["attack", "attack", "defend"],
            "amomongo",
        )
        .with_affinity(ElementalAffinity::new(Air, Water))
        .with_dialogue(
            "Nails rend unworthy!",
            "My fury... breaks...",
            "Grace spares: Amomongo, ape-like with long nails, attacking livestock.",
            "Crush me—shadow lives on!",
        )
        .with_lore(
            "In 2008, residents of La Castellana, Negros Occidental reported sightings of the Amomongo after livestock were found mutilated. The creature is described as standing over six feet tall, covered in dark fur, with claws capable of tearing through tin roofs.",
            "Visayan, cave-dweller",
            "Aswang Project – Negros terror",
        ),
        EnemyConfig::new(
            "bungisngis",
            "Bungisngis",
            Common,
            1,
            200,
            36,
            &["weaken", "attack", "strengthen"],
            "bungisngis",
        )
        .with_affinity(ElementalAffinity::new(Air, Water))
        .with_dialogue(
            "Laughter masks rage!",
            "My grin... cracks...",
            "Pity reveals: Bungisngis, one-eyed laughing giants, once jovial.",
            "Silence my mirth—fuel for deceit!",
        )
        .with_lore(
            "The Bungisngis's name comes from the Tagalog word 'ngisi' meaning grin. Their single eye sits in the middle of their forehead, and their upper lip is so large it can cover their face when flipped up. They are strong but easily outwitted.",
            "Tagalog/Cebuano, grinning giants",
            "Aswang Project – Strong laughers",
        ),
        EnemyConfig::new(
            "kapre_shade",
            "Kapre Shade",
            Elite,
            1,
            320,
            36,
            &["poison", "strengthen", "attack"],
            "kapre",
        )
        .with_affinity(ElementalAffinity::new(Water, Earth))
        .with_dialogue(
            "Smoke veils my wrath!",
            "My tree... falls...",
            "Compassion unlocks: Kapre, tree giants smoking cigars, loyal to Bathala.",
            "Burn me down—shadow rises!",
        )
        .with_lore(
            "Kapre stand 7-9 feet tall, with dark skin and a fondness for tricking travelers. They can make people lose their way or feel an inexplicable fear. Some Kapre befriend humans, particularly women, whom they may fall in love with and protect.",
            "General, smokers",
            "Aswang Project – Tree-lurkers",
        ),
        EnemyConfig::new(
            "tawong_lipod",
            "Tawong Lipod",
            Elite,
            1,
            300,
            30,
            &["stun", "attack", "defend"],
            "tawonglipod",
        )
        .with_affinity(ElementalAffinity::new(Fire, Air))
        .with_initial_effect(StatusEffect::dexterity(2))
        .with_dialogue(
            "Winds conceal—feel fury!",
            "Our veil... tears...",
            "Mercy whispers: Tawong Lipod, invisible Bikol wind beings, once harmonious.",
            "Scatter us—impostor grows!",
        )
        .with_lore(
            "In the Bikol region, sudden gusts of wind are attributed to Tawong Lipod passing by. Illnesses without apparent cause, especially when caught outdoors, are blamed on accidentally offending these invisible beings.",
            "Bikol, wind fairies",
            "Aswang Project – Invisible tormentors",
        ),
        EnemyConfig::new(
            "mangangaway",
            "Mangangaway",
            Boss,
            1,
            600,
            45,
            &["weaken", "poison", "strengthen", "attack"],
            "mangangaway",
        )
        .with_affinity(ElementalAffinity::new(Earth, Fire))
        .with_dialogue(
            "Fates reverse at my command!",
            "My hexes... unravel...",
            "Grace spares: Mangangaway, sorcerers casting evil spells.",
            "End my curses—fuel for false god!",
        )
        .with_lore(
            "Mangangaway were once healers who turned to dark magic, casting hexes and curses upon those who wronged their communities. They are said to wear necklaces of bones and can reverse fortune itself.",
            "Tagalog, witches",
            "Aswang Project – Skull-necklace bruha",
        ),
    ]
}

//! Enemy attack-pattern tokens and intents
//!
//! Each token in an enemy's attack pattern maps to exactly one move plan:
//! the player-visible intent plus the status effects the move applies.
//! The mapping is a closed table; tokens it does not recognise become a
//! plain attack using the enemy's base damage.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;
use tracing::warn;

use super::effects::StatusEffect;

/// Default block gained by a defend move
pub const DEFEND_BLOCK: i32 = 5;
/// Block gained by a charge or wait move
pub const PREPARE_BLOCK: i32 = 3;
/// Share of effective damage dealt by an area burn
pub const AOE_BURN_RATIO: f64 = 0.7;

/// One step of an enemy attack pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionToken {
    Attack,
    Defend,
    Strengthen,
    Poison,
    Weaken,
    Stun,
    Confuse,
    DisruptDraw,
    Fear,
    ConfuseTargeting,
    Charge,
    Wait,
    CurseCard,
    MimicElement,
    HexReversal,
    SmokeAttack,
    SummonMinion,
    SummonSmokeMinion,
    AoeBurn,
    /// Any token the table does not know
    Unknown(String),
}

impl ActionToken {
    /// Token as written in content data
    pub fn as_str(&self) -> &str {
        match self {
            ActionToken::Attack => "attack",
            ActionToken::Defend => "defend",
            ActionToken::Strengthen => "strengthen",
            ActionToken::Poison => "poison",
            ActionToken::Weaken => "weaken",
            ActionToken::Stun => "stun",
            ActionToken::Confuse => "confuse",
            ActionToken::DisruptDraw => "disrupt_draw",
            ActionToken::Fear => "fear",
            ActionToken::ConfuseTargeting => "confuse_targeting",
            ActionToken::Charge => "charge",
            ActionToken::Wait => "wait",
            ActionToken::CurseCard => "curse_card",
            ActionToken::MimicElement => "mimic_element",
            ActionToken::HexReversal => "hex_reversal",
            ActionToken::SmokeAttack => "smoke_attack",
            ActionToken::SummonMinion => "summon_minion",
            ActionToken::SummonSmokeMinion => "summon_smoke_minion",
            ActionToken::AoeBurn => "aoe_burn",
            ActionToken::Unknown(s) => s,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ActionToken::Unknown(_))
    }
}

/// Tokens match exactly, case included. Anything else is kept as `Unknown`.
impl FromStr for ActionToken {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = match s {
            "attack" => ActionToken::Attack,
            "defend" => ActionToken::Defend,
            "strengthen" => ActionToken::Strengthen,
            "poison" => ActionToken::Poison,
            "weaken" => ActionToken::Weaken,
            "stun" => ActionToken::Stun,
            "confuse" => ActionToken::Confuse,
            "disrupt_draw" => ActionToken::DisruptDraw,
            "fear" => ActionToken::Fear,
            "confuse_targeting" => ActionToken::ConfuseTargeting,
            "charge" => ActionToken::Charge,
            "wait" => ActionToken::Wait,
            "curse_card" => ActionToken::CurseCard,
            "mimic_element" => ActionToken::MimicElement,
            "hex_reversal" => ActionToken::HexReversal,
            "smoke_attack" => ActionToken::SmokeAttack,
            "summon_minion" => ActionToken::SummonMinion,
            "summon_smoke_minion" => ActionToken::SummonSmokeMinion,
            "aoe_burn" => ActionToken::AoeBurn,
            _ => ActionToken::Unknown(s.to_string()),
        };
        Ok(token)
    }
}

impl From<String> for ActionToken {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(token) => token,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for ActionToken {
    fn from(s: &str) -> Self {
        ActionToken::from(s.to_string())
    }
}

impl From<ActionToken> for String {
    fn from(token: ActionToken) -> Self {
        token.as_str().to_string()
    }
}

impl std::fmt::Display for ActionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Broad category of an enemy's next move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentType {
    Attack,
    Defend,
    Buff,
    Debuff,
}

impl std::fmt::Display for IntentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IntentType::Attack => "attack",
            IntentType::Defend => "defend",
            IntentType::Buff => "buff",
            IntentType::Debuff => "debuff",
        };
        write!(f, "{}", s)
    }
}

/// Player-visible preview of an enemy's next move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    #[serde(rename = "type")]
    pub kind: IntentType,
    pub value: i32,
    pub description: String,
    pub icon: String,
}

impl Intent {
    fn new(kind: IntentType, value: i32, description: String, icon: &str) -> Self {
        Self {
            kind,
            value,
            description,
            icon: icon.to_string(),
        }
    }
}

/// Full resolution of one pattern token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovePlan {
    /// What the player sees
    pub intent: Intent,
    /// Effects the enemy applies to itself
    pub self_effects: Vec<StatusEffect>,
    /// Effects the enemy applies to the player
    pub target_effects: Vec<StatusEffect>,
    /// Fraction of effective damage dealt by attack moves
    pub damage_ratio: f64,
}

impl MovePlan {
    fn from_intent(intent: Intent) -> Self {
        Self {
            intent,
            self_effects: Vec::new(),
            target_effects: Vec::new(),
            damage_ratio: 1.0,
        }
    }

    fn on_self(mut self, effect: StatusEffect) -> Self {
        self.self_effects.push(effect);
        self
    }

    fn on_target(mut self, effect: StatusEffect) -> Self {
        self.target_effects.push(effect);
        self
    }

    fn with_ratio(mut self, ratio: f64) -> Self {
        self.damage_ratio = ratio;
        self
    }
}

/// Resolve a pattern token into its move plan
pub fn plan_for(token: &ActionToken, base_damage: i32, name: &str) -> MovePlan {
    use IntentType::*;

    let intent = |kind, value, verb: &str, icon| {
        Intent::new(kind, value, format!("{} {}", name, verb), icon)
    };

    match token {
        ActionToken::Attack => MovePlan::from_intent(intent(Attack, base_damage, "attacks", "†")),
        ActionToken::Defend => {
            MovePlan::from_intent(intent(Defend, DEFEND_BLOCK, "defends", "⛨"))
        }
        ActionToken::Strengthen => {
            MovePlan::from_intent(intent(Buff, 2, "gains Strength", "💪"))
                .on_self(StatusEffect::strength(2))
        }
        ActionToken::Poison => MovePlan::from_intent(intent(Debuff, 2, "poisons", "☠️"))
            .on_target(StatusEffect::poison(2)),
        ActionToken::Weaken => MovePlan::from_intent(intent(Debuff, 1, "weakens", "⚠️"))
            .on_target(StatusEffect::weak(1)),
        ActionToken::Stun => MovePlan::from_intent(intent(Debuff, 2, "stuns", "💫"))
            .on_target(StatusEffect::frail(2)),
        ActionToken::Confuse
        | ActionToken::DisruptDraw
        | ActionToken::Fear
        | ActionToken::ConfuseTargeting => {
            MovePlan::from_intent(intent(Debuff, 1, "disrupts", "⚠️"))
                .on_target(StatusEffect::weak(1))
        }
        ActionToken::Charge | ActionToken::Wait => {
            MovePlan::from_intent(intent(Defend, PREPARE_BLOCK, "prepares", "⏳"))
        }
        ActionToken::CurseCard => {
            MovePlan::from_intent(intent(Debuff, 1, "curses cards", "🃏"))
                .on_target(StatusEffect::weak(1))
        }
        ActionToken::MimicElement => {
            MovePlan::from_intent(intent(Buff, 1, "mimics element", "🎭"))
                .on_self(StatusEffect::strength(1))
        }
        ActionToken::HexReversal => {
            MovePlan::from_intent(intent(Debuff, 1, "reverses fates", "🔄"))
                .on_target(StatusEffect::frail(2))
                .on_target(StatusEffect::weak(1))
        }
        ActionToken::SmokeAttack => {
            MovePlan::from_intent(intent(Attack, base_damage, "smoke attacks", "💨"))
                .on_target(StatusEffect::weak(1))
        }
        ActionToken::SummonMinion | ActionToken::SummonSmokeMinion => {
            MovePlan::from_intent(intent(Buff, 1, "summons", "👻"))
                .on_self(StatusEffect::strength(1))
        }
        ActionToken::AoeBurn => {
            MovePlan::from_intent(intent(Attack, base_damage, "burns all", "🔥"))
                .on_target(StatusEffect::poison(1))
                .with_ratio(AOE_BURN_RATIO)
        }
        ActionToken::Unknown(raw) => {
            warn!("Unknown attack pattern token '{}' for {}, treating as attack", raw, name);
            MovePlan::from_intent(intent(Attack, base_damage, "attacks", "†"))
        }
    }
}

/// Resolve a pattern token into its player-visible intent
pub fn intent_for(token: &ActionToken, base_damage: i32, name: &str) -> Intent {
    plan_for(token, base_damage, name).intent
}

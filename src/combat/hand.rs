//! Cards, hand types and hand scoring
//!
//! Scoring a played hand is a service the combat core consumes through
//! the `HandEvaluator` trait. `StandardHandEvaluator` is the built-in
//! scorer: chip values plus the hand bonus, times the hand multiplier.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use super::affinity::Element;

/// Card suits, each tied to an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Apoy,
    Tubig,
    Lupa,
    Hangin,
}

impl Suit {
    pub fn all() -> &'static [Suit] {
        &[Suit::Apoy, Suit::Tubig, Suit::Lupa, Suit::Hangin]
    }

    /// Element carried by cards of this suit
    pub fn element(&self) -> Element {
        match self {
            Suit::Apoy => Element::Fire,
            Suit::Tubig => Element::Water,
            Suit::Lupa => Element::Earth,
            Suit::Hangin => Element::Air,
        }
    }
}

impl FromStr for Suit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apoy" | "fire" => Ok(Suit::Apoy),
            "tubig" | "water" => Ok(Suit::Tubig),
            "lupa" | "earth" => Ok(Suit::Lupa),
            "hangin" | "air" => Ok(Suit::Hangin),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Suit::Apoy => "Apoy",
            Suit::Tubig => "Tubig",
            Suit::Lupa => "Lupa",
            Suit::Hangin => "Hangin",
        };
        write!(f, "{}", s)
    }
}

/// Card ranks from 1 through the three court ranks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const MANDIRIGMA: Rank = Rank(11);
    pub const BABAYLAN: Rank = Rank(12);
    pub const DATU: Rank = Rank(13);

    /// Rank from its ordinal (1..=13)
    pub fn new(value: u8) -> Option<Rank> {
        (1..=13).contains(&value).then_some(Rank(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Every rank in order
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }

    /// Chip value contributed to hand scoring
    pub fn chip_value(&self) -> i32 {
        match self.0 {
            1 => 6,
            2 | 3 => 2,
            4 | 5 => 3,
            6 | 7 => 4,
            8 | 9 => 5,
            10 | 11 => 6,
            _ => 7,
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            11 => write!(f, "Mandirigma"),
            12 => write!(f, "Babaylan"),
            13 => write!(f, "Datu"),
            n => write!(f, "{}", n),
        }
    }
}

/// A playing card
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub rank: Rank,
    pub suit: Suit,
    pub element: Element,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            id: format!("{}-{}", suit.to_string().to_lowercase(), rank.value()),
            rank,
            suit,
            element: suit.element(),
        }
    }

    /// One card of every rank in every suit
    pub fn standard_deck() -> Vec<Card> {
        Suit::all()
            .iter()
            .flat_map(|suit| Rank::all().map(move |rank| Card::new(rank, *suit)))
            .collect()
    }
}

/// Most represented suit among cards. Ties go to the earlier suit.
pub fn dominant_suit(cards: &[Card]) -> Option<Suit> {
    let mut best: Option<(Suit, usize)> = None;
    for suit in Suit::all() {
        let count = cards.iter().filter(|c| c.suit == *suit).count();
        if count > 0 && best.is_none_or(|(_, n)| count > n) {
            best = Some((*suit, count));
        }
    }
    best.map(|(suit, _)| suit)
}

/// Element of the dominant suit
pub fn dominant_element(cards: &[Card]) -> Option<Element> {
    dominant_suit(cards).map(|s| s.element())
}

/// Poker hand categories, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandType {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl HandType {
    /// Flat bonus added before the multiplier
    pub fn bonus(&self) -> i32 {
        match self {
            HandType::HighCard => 0,
            HandType::Pair => 3,
            HandType::TwoPair => 6,
            HandType::ThreeOfAKind => 10,
            HandType::Straight => 12,
            HandType::Flush => 15,
            HandType::FullHouse => 20,
            HandType::FourOfAKind => 25,
            HandType::FiveOfAKind => 38,
            HandType::StraightFlush => 35,
            HandType::RoyalFlush => 40,
        }
    }

    /// Multiplier applied to cards plus bonus
    pub fn multiplier(&self) -> f64 {
        match self {
            HandType::HighCard => 1.0,
            HandType::Pair => 1.2,
            HandType::TwoPair => 1.3,
            HandType::ThreeOfAKind => 1.5,
            HandType::Straight => 1.6,
            HandType::Flush => 1.7,
            HandType::FullHouse => 2.0,
            HandType::FourOfAKind => 2.2,
            HandType::FiveOfAKind => 2.6,
            HandType::StraightFlush => 2.5,
            HandType::RoyalFlush => 2.8,
        }
    }

    /// Whether this hand is at least as strong as another
    pub fn at_least(&self, other: HandType) -> bool {
        *self >= other
    }

    /// The next stronger hand type. The strongest stays where it is.
    pub fn next_tier(&self) -> HandType {
        match self {
            HandType::HighCard => HandType::Pair,
            HandType::Pair => HandType::TwoPair,
            HandType::TwoPair => HandType::ThreeOfAKind,
            HandType::ThreeOfAKind => HandType::Straight,
            HandType::Straight => HandType::Flush,
            HandType::Flush => HandType::FullHouse,
            HandType::FullHouse => HandType::FourOfAKind,
            HandType::FourOfAKind => HandType::FiveOfAKind,
            HandType::FiveOfAKind => HandType::StraightFlush,
            HandType::StraightFlush | HandType::RoyalFlush => HandType::RoyalFlush,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HandType::HighCard => "High Card",
            HandType::Pair => "Pair",
            HandType::TwoPair => "Two Pair",
            HandType::ThreeOfAKind => "Three of a Kind",
            HandType::Straight => "Straight",
            HandType::Flush => "Flush",
            HandType::FullHouse => "Full House",
            HandType::FourOfAKind => "Four of a Kind",
            HandType::FiveOfAKind => "Five of a Kind",
            HandType::StraightFlush => "Straight Flush",
            HandType::RoyalFlush => "Royal Flush",
        }
    }
}

impl std::fmt::Display for HandType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Score for a played hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandScore {
    pub hand_type: HandType,
    pub total_value: i32,
}

impl HandScore {
    pub fn new(hand_type: HandType, total_value: i32) -> Self {
        Self {
            hand_type,
            total_value,
        }
    }

    /// Re-score as the next hand tier. The card share of the total is
    /// recovered from the current bonus and multiplier.
    pub fn upgraded(&self) -> HandScore {
        let next = self.hand_type.next_tier();
        if next == self.hand_type {
            return *self;
        }
        let cards = self.total_value as f64 / self.hand_type.multiplier()
            - self.hand_type.bonus() as f64;
        let total = ((cards + next.bonus() as f64) * next.multiplier()).floor() as i32;
        HandScore::new(next, total.max(self.total_value))
    }
}

/// Scores a set of played cards
pub trait HandEvaluator {
    fn evaluate(&self, cards: &[Card]) -> HandScore;
}

/// Built-in poker-style scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardHandEvaluator;

impl StandardHandEvaluator {
    /// Classify up to five cards
    pub fn classify(cards: &[Card]) -> HandType {
        let mut counts: HashMap<Rank, usize> = HashMap::new();
        for card in cards {
            *counts.entry(card.rank).or_default() += 1;
        }
        let mut groups: Vec<usize> = counts.values().copied().collect();
        groups.sort_unstable_by(|a, b| b.cmp(a));

        let five = cards.len() == 5;
        let flush = five && cards.iter().all(|c| c.suit == cards[0].suit);
        let straight = five && groups.len() == 5 && Self::is_straight(cards);
        let royal = straight && {
            let mut values: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
            values.sort_unstable();
            values == [1, 10, 11, 12, 13]
        };

        match (groups.as_slice(), flush, straight) {
            (_, true, true) if royal => HandType::RoyalFlush,
            (_, true, true) => HandType::StraightFlush,
            ([5, ..], _, _) => HandType::FiveOfAKind,
            ([4, ..], _, _) => HandType::FourOfAKind,
            ([3, 2, ..], _, _) => HandType::FullHouse,
            (_, true, false) => HandType::Flush,
            (_, false, true) => HandType::Straight,
            ([3, ..], _, _) => HandType::ThreeOfAKind,
            ([2, 2, ..], _, _) => HandType::TwoPair,
            ([2, ..], _, _) => HandType::Pair,
            _ => HandType::HighCard,
        }
    }

    /// Five distinct consecutive ranks, with 1 also counting above Datu
    fn is_straight(cards: &[Card]) -> bool {
        let mut values: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
        values.sort_unstable();
        let consecutive = |v: &[u8]| v.windows(2).all(|w| w[1] == w[0] + 1);
        if consecutive(&values) {
            return true;
        }
        values == [1, 10, 11, 12, 13]
    }
}

impl HandEvaluator for StandardHandEvaluator {
    fn evaluate(&self, cards: &[Card]) -> HandScore {
        let hand_type = Self::classify(cards);
        let chips: i32 = cards.iter().map(|c| c.rank.chip_value()).sum();
        let total = ((chips + hand_type.bonus()) as f64 * hand_type.multiplier()).floor() as i32;
        HandScore::new(hand_type, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: u8, suit: Suit) -> Card {
        Card::new(Rank::new(rank).unwrap(), suit)
    }

    #[test]
    fn test_standard_deck() {
        let deck = Card::standard_deck();
        assert_eq!(deck.len(), 52);
        assert_eq!(deck[0].id, "apoy-1");
        assert_eq!(deck[0].element, Element::Fire);
    }

    #[test]
    fn test_rank_bounds() {
        assert!(Rank::new(0).is_none());
        assert!(Rank::new(14).is_none());
        assert_eq!(Rank::DATU.to_string(), "Datu");
    }

    #[test]
    fn test_classify_hands() {
        use Suit::*;
        let pair = [card(2, Apoy), card(2, Tubig), card(5, Lupa), card(7, Hangin), card(9, Apoy)];
        assert_eq!(StandardHandEvaluator::classify(&pair), HandType::Pair);

        let two_pair = [card(2, Apoy), card(2, Tubig), card(5, Lupa), card(5, Hangin), card(9, Apoy)];
        assert_eq!(StandardHandEvaluator::classify(&two_pair), HandType::TwoPair);

        let flush = [card(2, Apoy), card(4, Apoy), card(6, Apoy), card(8, Apoy), card(13, Apoy)];
        assert_eq!(StandardHandEvaluator::classify(&flush), HandType::Flush);

        let straight = [card(3, Apoy), card(4, Tubig), card(5, Lupa), card(6, Hangin), card(7, Apoy)];
        assert_eq!(StandardHandEvaluator::classify(&straight), HandType::Straight);

        let full = [card(3, Apoy), card(3, Tubig), card(3, Lupa), card(6, Hangin), card(6, Apoy)];
        assert_eq!(StandardHandEvaluator::classify(&full), HandType::FullHouse);

        let royal = [card(1, Lupa), card(10, Lupa), card(11, Lupa), card(12, Lupa), card(13, Lupa)];
        assert_eq!(StandardHandEvaluator::classify(&royal), HandType::RoyalFlush);

        let high = [card(1, Apoy), card(3, Tubig), card(5, Lupa), card(7, Hangin), card(9, Apoy)];
        assert_eq!(StandardHandEvaluator::classify(&high), HandType::HighCard);
    }

    #[test]
    fn test_evaluate_scores() {
        use Suit::*;
        // chips 2+2+3+4+5 = 16, pair bonus 3, x1.2 = 22.8
        let pair = [card(2, Apoy), card(2, Tubig), card(5, Lupa), card(7, Hangin), card(9, Apoy)];
        let score = StandardHandEvaluator.evaluate(&pair);
        assert_eq!(score.hand_type, HandType::Pair);
        assert_eq!(score.total_value, 22);
    }

    #[test]
    fn test_hand_ordering() {
        assert!(HandType::FullHouse.at_least(HandType::Flush));
        assert!(HandType::Flush.at_least(HandType::Flush));
        assert!(!HandType::Straight.at_least(HandType::Flush));
        assert!(HandType::RoyalFlush > HandType::StraightFlush);
    }

    #[test]
    fn test_upgraded_score() {
        let high = HandScore::new(HandType::HighCard, 10).upgraded();
        assert_eq!(high, HandScore::new(HandType::Pair, 15));

        // 22 / 1.2 - 3 = 15.33 card value, then (15.33 + 6) x 1.3
        let pair = HandScore::new(HandType::Pair, 22).upgraded();
        assert_eq!(pair, HandScore::new(HandType::TwoPair, 27));

        let royal = HandScore::new(HandType::RoyalFlush, 200);
        assert_eq!(royal.upgraded(), royal);
        assert_eq!(HandType::FourOfAKind.next_tier(), HandType::FiveOfAKind);
    }

    #[test]
    fn test_dominant_suit() {
        use Suit::*;
        let cards = [card(2, Tubig), card(3, Lupa), card(4, Lupa), card(5, Tubig), card(6, Lupa)];
        assert_eq!(dominant_suit(&cards), Some(Lupa));
        assert_eq!(dominant_element(&cards), Some(Element::Earth));
        assert_eq!(dominant_suit(&[]), None);
    }
}

//! Display items: the things the child counts each round.

use serde::{Deserialize, Serialize};

/// A countable item symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayItem {
    Apple,
    Bird,
    Elephant,
    Car,
    Star,
    Bear,
    Flower,
    Duck,
    Fish,
    Cat,
    Dog,
    Ball,
}

/// Items in round order. Round `n` shows `ITEMS[n - 1]`.
pub const ITEMS: [DisplayItem; 12] = [
    DisplayItem::Apple,
    DisplayItem::Bird,
    DisplayItem::Elephant,
    DisplayItem::Car,
    DisplayItem::Star,
    DisplayItem::Bear,
    DisplayItem::Flower,
    DisplayItem::Duck,
    DisplayItem::Fish,
    DisplayItem::Cat,
    DisplayItem::Dog,
    DisplayItem::Ball,
];

impl DisplayItem {
    /// Item shown in the given 1-based round.
    ///
    /// Falls back to the first item when the round has no entry.
    #[must_use]
    pub fn for_round(round: u32) -> Self {
        round
            .checked_sub(1)
            .and_then(|i| ITEMS.get(i as usize))
            .copied()
            .unwrap_or(ITEMS[0])
    }

    /// Stable identifier for asset lookup.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DisplayItem::Apple => "apple",
            DisplayItem::Bird => "bird",
            DisplayItem::Elephant => "elephant",
            DisplayItem::Car => "car",
            DisplayItem::Star => "star",
            DisplayItem::Bear => "bear",
            DisplayItem::Flower => "flower",
            DisplayItem::Duck => "duck",
            DisplayItem::Fish => "fish",
            DisplayItem::Cat => "cat",
            DisplayItem::Dog => "dog",
            DisplayItem::Ball => "ball",
        }
    }
}

impl std::fmt::Display for DisplayItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

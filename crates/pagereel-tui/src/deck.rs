//! Deck contents behind an injected data-source seam.
//!
//! The paging layout never owns its content: a [`DeckSource`] supplies the
//! card count, per-index card view models and the horizontal insets, so the
//! layout code stays decoupled from whatever is being paged.

use pagereel_core::config::DeckConfig;

/// Horizontal insets around the deck content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
}

impl Insets {
    pub fn symmetric(margin: f64) -> Self {
        Self {
            left: margin,
            right: margin,
        }
    }
}

/// View model for one card.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub body: Vec<String>,
}

/// Data source for the paged deck: item count, card content and insets.
pub trait DeckSource {
    fn item_count(&self) -> usize;
    fn card(&self, index: usize) -> Card;
    fn insets(&self) -> Insets;
}

/// The demo deck: a fixed number of placeholder cards.
#[derive(Debug, Clone)]
pub struct DemoDeck {
    card_count: usize,
    insets: Insets,
}

impl DemoDeck {
    pub fn new(config: &DeckConfig) -> Self {
        Self {
            card_count: config.card_count,
            insets: Insets::symmetric(config.margin),
        }
    }
}

impl DeckSource for DemoDeck {
    fn item_count(&self) -> usize {
        self.card_count
    }

    fn card(&self, index: usize) -> Card {
        Card {
            title: format!("Card {}", index + 1),
            body: vec![
                format!("{} of {}", index + 1, self.card_count),
                String::new(),
                "drag or flick to page".to_string(),
            ],
        }
    }

    fn insets(&self) -> Insets {
        self.insets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_deck_from_config() {
        let deck = DemoDeck::new(&DeckConfig::default());
        assert_eq!(deck.item_count(), 20);
        assert!((deck.insets().left - 4.0).abs() < 1e-9);
        assert!((deck.insets().right - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_demo_deck_cards_are_numbered() {
        let deck = DemoDeck::new(&DeckConfig {
            card_count: 3,
            ..Default::default()
        });
        assert_eq!(deck.card(0).title, "Card 1");
        assert_eq!(deck.card(2).title, "Card 3");
    }
}

//! Hover styling for dashboard cards.

use crate::dom::{warn_on_err, Page, Selector};

pub const CARD_HOVER_CLASS: &str = "card-hover";

/// Make sure every card marked for hover effects carries the hover class.
pub fn decorate_cards<P: Page>(page: &P) -> usize {
    let cards = page.query_all(Selector::Class(CARD_HOVER_CLASS));
    for card in &cards {
        warn_on_err(page.add_classes(card, &[CARD_HOVER_CLASS]), "decorate card");
    }
    cards.len()
}

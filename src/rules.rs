//! Pair detection and the asking protocol.

use alloc::vec;
use alloc::vec::Vec;

use log::trace;

use crate::card::{Card, Rank};
use crate::hand::{Hand, PairPile};

/// Two cards of the same rank, in the order they sat in the hand.
pub type Pair = (Card, Card);

/// Moves every pair in `hand` onto `pile`.
///
/// Within a rank, the earliest unpaired card is matched with the next card of
/// that rank, so three of a kind leaves the last one in the hand. Pairs are
/// reported and piled in the order of their first card's position. Cards that
/// are not paired keep their relative order.
///
/// Returns the pairs found; an empty list means the hand had none.
pub fn find_pairs(hand: &mut Hand, pile: &mut PairPile) -> Vec<Pair> {
    let cards = hand.cards_mut();

    let mut waiting: [Option<usize>; 13] = [None; 13];
    let mut matched: Vec<(usize, usize)> = Vec::new();
    for (index, card) in cards.iter().enumerate() {
        let slot = &mut waiting[card.rank.index()];
        match slot.take() {
            Some(first) => matched.push((first, index)),
            None => *slot = Some(index),
        }
    }

    if matched.is_empty() {
        return Vec::new();
    }

    matched.sort_unstable_by_key(|&(first, _)| first);

    let mut paired = vec![false; cards.len()];
    let mut pairs = Vec::with_capacity(matched.len());
    for (first, second) in matched {
        paired[first] = true;
        paired[second] = true;
        let pair = (cards[first], cards[second]);
        trace!("pair found: {} and {}", pair.0, pair.1);
        pile.push_pair(pair.0, pair.1);
        pairs.push(pair);
    }

    let mut position = 0;
    cards.retain(|_| {
        let keep = !paired[position];
        position += 1;
        keep
    });

    pairs
}

/// Asks `responder` for a card of `rank` on behalf of `asker`.
///
/// On a match, exactly the first card of that rank moves from the
/// responder's hand to the end of the asker's hand and is returned. Without a
/// match neither hand changes and `None` is returned.
pub fn ask_for_card(asker: &mut Hand, responder: &mut Hand, rank: Rank) -> Option<Card> {
    let card = responder.take_rank(rank)?;
    asker.add_card(card);
    Some(card)
}

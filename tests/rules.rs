//! Pair finder and asking protocol tests.

use gofish::{Card, Hand, PairPile, Rank, Suit, ask_for_card, find_pairs};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn hand(cards: &[Card]) -> Hand {
    Hand::from_cards(cards.to_vec())
}

#[test]
fn pairs_are_found_in_discovery_order() {
    let mut hand = hand(&[
        card(Rank::Two, Suit::Spades),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Two, Suit::Diamonds),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Five, Suit::Diamonds),
    ]);
    let mut pile = PairPile::new();

    let pairs = find_pairs(&mut hand, &mut pile);

    assert_eq!(pairs.len(), 2);
    assert_eq!(
        pile.cards(),
        &[
            card(Rank::Two, Suit::Spades),
            card(Rank::Two, Suit::Diamonds),
            card(Rank::Five, Suit::Hearts),
            card(Rank::Five, Suit::Diamonds),
        ]
    );
    assert_eq!(hand.cards(), &[card(Rank::Nine, Suit::Clubs)]);
    assert_eq!(pile.pairs(), 2);
}

#[test]
fn hand_without_pairs_is_untouched() {
    let cards = [
        card(Rank::Ace, Suit::Spades),
        card(Rank::Three, Suit::Hearts),
        card(Rank::Jack, Suit::Diamonds),
    ];
    let mut hand = hand(&cards);
    let mut pile = PairPile::new();

    assert!(find_pairs(&mut hand, &mut pile).is_empty());
    assert_eq!(hand.cards(), &cards);
    assert!(pile.is_empty());
}

#[test]
fn pairs_follow_the_position_of_their_first_card() {
    let mut hand = hand(&[
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Spades),
        card(Rank::King, Suit::Hearts),
        card(Rank::Ace, Suit::Hearts),
    ]);
    let mut pile = PairPile::new();

    find_pairs(&mut hand, &mut pile);

    assert!(hand.is_empty());
    assert_eq!(
        pile.cards(),
        &[
            card(Rank::Ace, Suit::Spades),
            card(Rank::Ace, Suit::Hearts),
            card(Rank::King, Suit::Spades),
            card(Rank::King, Suit::Hearts),
        ]
    );
}

#[test]
fn three_of_a_kind_leaves_the_last_card() {
    let mut hand = hand(&[
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Four, Suit::Spades),
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Seven, Suit::Diamonds),
    ]);
    let mut pile = PairPile::new();

    let pairs = find_pairs(&mut hand, &mut pile);

    assert_eq!(
        pairs,
        vec![(
            card(Rank::Seven, Suit::Clubs),
            card(Rank::Seven, Suit::Hearts)
        )]
    );
    assert_eq!(
        hand.cards(),
        &[
            card(Rank::Four, Suit::Spades),
            card(Rank::Seven, Suit::Diamonds),
        ]
    );
}

#[test]
fn four_of_a_kind_makes_two_pairs() {
    let mut hand = hand(&[
        card(Rank::Queen, Suit::Spades),
        card(Rank::Queen, Suit::Clubs),
        card(Rank::Queen, Suit::Hearts),
        card(Rank::Queen, Suit::Diamonds),
    ]);
    let mut pile = PairPile::new();

    assert_eq!(find_pairs(&mut hand, &mut pile).len(), 2);
    assert!(hand.is_empty());
    assert_eq!(pile.len(), 4);
    assert_eq!(pile.pairs(), 2);
}

#[test]
fn pair_pile_score_is_half_its_size() {
    let mut pile = PairPile::new();
    for rank in [Rank::Two, Rank::Six, Rank::Ten] {
        pile.push_pair(card(rank, Suit::Spades), card(rank, Suit::Clubs));
    }
    assert_eq!(pile.len(), 6);
    assert_eq!(pile.pairs(), 3);
}

#[test]
fn ask_moves_the_matching_card() {
    let mut asker = hand(&[card(Rank::Eight, Suit::Spades)]);
    let mut responder = hand(&[
        card(Rank::Two, Suit::Clubs),
        card(Rank::Eight, Suit::Hearts),
        card(Rank::Jack, Suit::Clubs),
    ]);

    let received = ask_for_card(&mut asker, &mut responder, Rank::Eight);

    assert_eq!(received, Some(card(Rank::Eight, Suit::Hearts)));
    assert_eq!(
        asker.cards(),
        &[
            card(Rank::Eight, Suit::Spades),
            card(Rank::Eight, Suit::Hearts),
        ]
    );
    assert_eq!(
        responder.cards(),
        &[card(Rank::Two, Suit::Clubs), card(Rank::Jack, Suit::Clubs)]
    );
}

#[test]
fn ask_moves_only_the_first_of_several_matches() {
    let mut asker = hand(&[card(Rank::Three, Suit::Spades)]);
    let mut responder = hand(&[
        card(Rank::Three, Suit::Hearts),
        card(Rank::Three, Suit::Diamonds),
    ]);

    ask_for_card(&mut asker, &mut responder, Rank::Three);

    assert_eq!(asker.len(), 2);
    assert_eq!(responder.cards(), &[card(Rank::Three, Suit::Diamonds)]);
}

#[test]
fn failed_ask_changes_nothing() {
    // The Ace of Spades must survive an unsuccessful ask.
    let asker_cards = [card(Rank::Nine, Suit::Clubs)];
    let responder_cards = [
        card(Rank::Ace, Suit::Spades),
        card(Rank::Four, Suit::Diamonds),
    ];
    let mut asker = hand(&asker_cards);
    let mut responder = hand(&responder_cards);

    assert_eq!(ask_for_card(&mut asker, &mut responder, Rank::Nine), None);
    assert_eq!(asker.cards(), &asker_cards);
    assert_eq!(responder.cards(), &responder_cards);
}

//! Selector tests.

use std::io::{self, Cursor, Write};

use gofish::{
    Card, HumanSelector, RandomSelector, Rank, ScriptedSelector, SelectionError, Selector, Suit,
    parse_selection,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn three_cards() -> Vec<Card> {
    vec![
        Card::new(Rank::Two, Suit::Spades),
        Card::new(Rank::Five, Suit::Hearts),
        Card::new(Rank::King, Suit::Clubs),
    ]
}

#[test]
fn parse_selection_is_one_based() {
    assert_eq!(parse_selection("1", 3), Ok(0));
    assert_eq!(parse_selection(" 3 \r\n", 3), Ok(2));
    assert_eq!(
        parse_selection("0", 3),
        Err(SelectionError::OutOfRange {
            choice: 0,
            hand_size: 3,
        })
    );
    assert_eq!(parse_selection("-1", 3), Err(SelectionError::NotANumber));
    assert_eq!(parse_selection("two", 3), Err(SelectionError::NotANumber));
    assert_eq!(parse_selection("", 3), Err(SelectionError::NotANumber));
}

#[test]
fn random_selector_stays_in_bounds() {
    let hand = three_cards();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut selector = RandomSelector;

    let mut seen = [false; 3];
    for _ in 0..200 {
        let index = selector.select(&hand, &mut rng).unwrap();
        assert!(index < hand.len());
        seen[index] = true;
    }
    assert_eq!(seen, [true; 3]);

    assert!(selector.select(&[], &mut rng).is_err());
}

#[test]
fn scripted_selector_replays_choices() {
    let hand = three_cards();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut selector = ScriptedSelector::new([2, 0, 5]);

    assert_eq!(selector.select(&hand, &mut rng), Ok(2));
    assert_eq!(selector.select(&hand, &mut rng), Ok(0));
    assert_eq!(
        selector.select(&hand, &mut rng),
        Err(SelectionError::OutOfRange {
            choice: 6,
            hand_size: 3,
        })
    );
    assert_eq!(selector.remaining(), 0);

    let mut far = ScriptedSelector::new([usize::MAX]);
    assert_eq!(
        far.select(&hand, &mut rng),
        Err(SelectionError::OutOfRange {
            choice: usize::MAX,
            hand_size: 3,
        })
    );
    assert_eq!(
        selector.select(&hand, &mut rng),
        Err(SelectionError::Exhausted)
    );
}

#[test]
fn human_selector_reprompts_until_valid() {
    let hand = three_cards();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let input = Cursor::new("abc\n9\n2\n");
    let mut selector = HumanSelector::new(input, Vec::new());

    assert_eq!(selector.select(&hand, &mut rng), Ok(1));

    let (_, output) = selector.into_inner();
    let output = String::from_utf8(output).unwrap();
    assert_eq!(output.matches("Invalid input.").count(), 2);
    assert!(output.contains("Which card would you like to try to pair?"));
}

#[test]
fn human_selector_reports_end_of_input() {
    let hand = three_cards();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut selector = HumanSelector::new(Cursor::new("7\n"), Vec::new());

    assert_eq!(
        selector.select(&hand, &mut rng),
        Err(SelectionError::Exhausted)
    );
}

struct ClosedTerminal;

impl Write for ClosedTerminal {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

#[test]
fn human_selector_stops_when_output_fails() {
    let hand = three_cards();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut selector = HumanSelector::new(Cursor::new("2\n"), ClosedTerminal);

    assert_eq!(
        selector.select(&hand, &mut rng),
        Err(SelectionError::Exhausted)
    );

    let (input, _) = selector.into_inner();
    assert_eq!(input.position(), 0);
}

//! Card selection policies.
//!
//! A [`Selector`] decides which card of the active hand to ask about. The
//! engine takes any implementation and only sees the resulting index.

use alloc::collections::VecDeque;

use rand::{Rng, RngCore};

use crate::card::Card;
use crate::error::SelectionError;

/// Chooses a card from a hand.
pub trait Selector {
    /// Returns a zero-based index into `hand`.
    ///
    /// `rng` is the game's random source; deterministic games depend on
    /// selectors drawing from it rather than from their own.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid choice could be obtained.
    fn select(&mut self, hand: &[Card], rng: &mut dyn RngCore) -> Result<usize, SelectionError>;
}

/// Picks a uniformly random card. Used for the computer opponent.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl Selector for RandomSelector {
    fn select(&mut self, hand: &[Card], rng: &mut dyn RngCore) -> Result<usize, SelectionError> {
        if hand.is_empty() {
            return Err(SelectionError::OutOfRange {
                choice: 0,
                hand_size: 0,
            });
        }
        Ok(rng.random_range(0..hand.len()))
    }
}

/// Replays a fixed list of zero-based choices.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSelector {
    choices: VecDeque<usize>,
}

impl ScriptedSelector {
    /// Creates a selector that returns `choices` in order.
    #[must_use]
    pub fn new<I: IntoIterator<Item = usize>>(choices: I) -> Self {
        Self {
            choices: choices.into_iter().collect(),
        }
    }

    /// Returns the number of choices left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.choices.len()
    }
}

impl Selector for ScriptedSelector {
    fn select(&mut self, hand: &[Card], _rng: &mut dyn RngCore) -> Result<usize, SelectionError> {
        let choice = self.choices.pop_front().ok_or(SelectionError::Exhausted)?;
        if choice >= hand.len() {
            return Err(SelectionError::OutOfRange {
                choice: choice.saturating_add(1),
                hand_size: hand.len(),
            });
        }
        Ok(choice)
    }
}

/// Parses a 1-based card number as typed by a player.
///
/// # Errors
///
/// Returns an error if the input is not a number or not between 1 and
/// `hand_size`.
///
/// # Example
///
/// ```
/// use gofish::{SelectionError, parse_selection};
///
/// assert_eq!(parse_selection(" 2\n", 3), Ok(1));
/// assert_eq!(
///     parse_selection("4", 3),
///     Err(SelectionError::OutOfRange { choice: 4, hand_size: 3 })
/// );
/// ```
pub fn parse_selection(input: &str, hand_size: usize) -> Result<usize, SelectionError> {
    let choice: usize = input
        .trim()
        .parse()
        .map_err(|_| SelectionError::NotANumber)?;
    if choice == 0 || choice > hand_size {
        return Err(SelectionError::OutOfRange { choice, hand_size });
    }
    Ok(choice - 1)
}

#[cfg(feature = "std")]
pub use human::HumanSelector;

#[cfg(feature = "std")]
mod human {
    use std::io::{BufRead, Write};

    use rand::RngCore;

    use super::{Selector, parse_selection};
    use crate::card::Card;
    use crate::error::SelectionError;

    /// Reads the player's choice from a line-oriented input.
    ///
    /// Invalid entries are answered with a short message and the prompt is
    /// repeated until a valid number arrives. Reaching the end of the input
    /// or failing to write the prompt ends the selection.
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[derive(Debug)]
    pub struct HumanSelector<R, W> {
        input: R,
        output: W,
    }

    impl<R: BufRead, W: Write> HumanSelector<R, W> {
        /// Creates a selector reading from `input` and prompting on `output`.
        pub const fn new(input: R, output: W) -> Self {
            Self { input, output }
        }

        /// Returns the reader and writer.
        pub fn into_inner(self) -> (R, W) {
            (self.input, self.output)
        }
    }

    impl<R: BufRead, W: Write> Selector for HumanSelector<R, W> {
        fn select(
            &mut self,
            hand: &[Card],
            _rng: &mut dyn RngCore,
        ) -> Result<usize, SelectionError> {
            write!(
                self.output,
                "\nWhich card would you like to try to pair? (Enter the number next to the card) "
            )
            .map_err(|_| SelectionError::Exhausted)?;
            loop {
                self.output
                    .flush()
                    .map_err(|_| SelectionError::Exhausted)?;

                let mut line = String::new();
                match self.input.read_line(&mut line) {
                    Ok(0) | Err(_) => return Err(SelectionError::Exhausted),
                    Ok(_) => {}
                }

                match parse_selection(&line, hand.len()) {
                    Ok(index) => return Ok(index),
                    Err(_) => {
                        writeln!(
                            self.output,
                            "Invalid input. Please enter the number next to the card you wish to choose."
                        )
                        .map_err(|_| SelectionError::Exhausted)?;
                    }
                }
            }
        }
    }
}

//! Game configuration options.

use crate::deck::{SHUFFLE_ROUNDS, SPLIT_JITTER};

/// Configuration options for a Go Fish match.
///
/// The defaults are the standard rules. Use the builder methods to adjust:
///
/// ```
/// use gofish::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(7)
///     .with_shuffle_rounds(6);
/// assert_eq!(options.hand_size, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Cards dealt to each hand at the start.
    pub hand_size: usize,
    /// Cards drawn when a hand runs out while the deck still has cards.
    pub replenish: usize,
    /// Riffle rounds performed when the deck is shuffled.
    pub shuffle_rounds: u8,
    /// Largest distance the riffle cut may move away from the midpoint.
    pub split_jitter: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 5,
            replenish: 3,
            shuffle_rounds: SHUFFLE_ROUNDS,
            split_jitter: SPLIT_JITTER,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each hand.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(7);
    /// assert_eq!(options.hand_size, 7);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the number of cards drawn into an empty hand.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_replenish(5);
    /// assert_eq!(options.replenish, 5);
    /// ```
    #[must_use]
    pub const fn with_replenish(mut self, replenish: usize) -> Self {
        self.replenish = replenish;
        self
    }

    /// Sets the number of riffle rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle_rounds(7);
    /// assert_eq!(options.shuffle_rounds, 7);
    /// ```
    #[must_use]
    pub const fn with_shuffle_rounds(mut self, rounds: u8) -> Self {
        self.shuffle_rounds = rounds;
        self
    }

    /// Sets the riffle cut jitter. Zero always cuts at the midpoint.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_split_jitter(0);
    /// assert_eq!(options.split_jitter, 0);
    /// ```
    #[must_use]
    pub const fn with_split_jitter(mut self, jitter: usize) -> Self {
        self.split_jitter = jitter;
        self
    }
}

//! A single play of the three-door game.

use rand::Rng;
use serde::Serialize;

use crate::core::{Door, Strategy};

/// The doors involved in one game, fixed before the player's final decision.
///
/// A `Trial` always satisfies the host invariant: `host_opens` differs from
/// both `player_choice` and `prize`. Values are created by [`Trial::deal`]
/// or validated by [`Trial::from_doors`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Trial {
    prize: Door,
    player_choice: Door,
    host_opens: Door,
}

impl Trial {
    /// Deal a random game.
    ///
    /// Prize and first pick are independent uniform draws. The host's door is
    /// drawn uniformly from all three and redrawn while it hits the pick or the
    /// prize, so when two doors are open to the host each gets probability 1/2.
    pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let prize = Door::random(rng);
        let player_choice = Door::random(rng);
        let host_opens = host_opens(prize, player_choice, rng);

        Self {
            prize,
            player_choice,
            host_opens,
        }
    }

    /// Build a trial from explicit doors, rejecting any where the host would
    /// open the prize door or the player's door.
    #[must_use]
    pub fn from_doors(prize: Door, player_choice: Door, host_opens: Door) -> Option<Self> {
        if host_opens == prize || host_opens == player_choice {
            return None;
        }
        Some(Self {
            prize,
            player_choice,
            host_opens,
        })
    }

    /// Door hiding the prize.
    #[must_use]
    pub fn prize(&self) -> Door {
        self.prize
    }

    /// The player's first pick.
    #[must_use]
    pub fn player_choice(&self) -> Door {
        self.player_choice
    }

    /// Door the host opened.
    #[must_use]
    pub fn host_opens(&self) -> Door {
        self.host_opens
    }

    /// The door the player ends on under `strategy`.
    #[must_use]
    pub fn final_choice(&self, strategy: Strategy) -> Door {
        match strategy {
            Strategy::Switch => Door::remaining(self.player_choice, self.host_opens),
            Strategy::Stay => self.player_choice,
        }
    }

    /// Whether `strategy` wins this game.
    #[must_use]
    pub fn wins(&self, strategy: Strategy) -> bool {
        self.final_choice(strategy) == self.prize
    }
}

/// Pick the host's door by uniform rejection sampling.
///
/// At most two of the three doors are forbidden, so each draw succeeds with
/// probability at least 1/3 and the loop terminates.
fn host_opens<R: Rng + ?Sized>(prize: Door, player_choice: Door, rng: &mut R) -> Door {
    loop {
        let door = Door::random(rng);
        if door != prize && door != player_choice {
            return door;
        }
    }
}

/// Play one game under `strategy` and report whether it was won.
pub fn run_trial<R: Rng + ?Sized>(strategy: Strategy, rng: &mut R) -> bool {
    Trial::deal(rng).wins(strategy)
}

//! Door identifiers for the three-door game.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of doors on stage.
pub const DOOR_COUNT: u8 = 3;

/// One of the three doors, indexed 0, 1 or 2.
///
/// The index is validated on construction, so every `Door` in the program
/// names a real door.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Door(u8);

impl Door {
    /// All doors in index order.
    pub const ALL: [Door; DOOR_COUNT as usize] = [Door(0), Door(1), Door(2)];

    /// Create a door from its index. Returns `None` for indices >= 3.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < DOOR_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Draw a door uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..DOOR_COUNT))
    }

    /// The door that is neither `a` nor `b`.
    ///
    /// Exactly one such door exists when `a != b`. When `a == b` there is no
    /// unique remaining door and `a` is returned.
    #[must_use]
    pub const fn remaining(a: Door, b: Door) -> Door {
        // Indices sum to 3 over all doors; starting from 6 keeps the u8 math non-negative.
        Door((2 * DOOR_COUNT - a.0 - b.0) % DOOR_COUNT)
    }
}

impl std::fmt::Display for Door {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Door({})", self.0)
    }
}

impl From<Door> for u8 {
    fn from(door: Door) -> Self {
        door.0
    }
}

impl TryFrom<u8> for Door {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Door::new(index).ok_or_else(|| format!("door index {index} out of range 0..{DOOR_COUNT}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SimRng;

    #[test]
    fn test_door_new() {
        assert_eq!(Door::new(0).map(Door::index), Some(0));
        assert_eq!(Door::new(2).map(Door::index), Some(2));
        assert!(Door::new(3).is_none());
        assert!(Door::new(255).is_none());
    }

    #[test]
    fn test_remaining_for_every_distinct_pair() {
        for a in Door::ALL {
            for b in Door::ALL {
                if a == b {
                    continue;
                }
                let third = Door::remaining(a, b);
                assert_ne!(third, a);
                assert_ne!(third, b);
            }
        }
    }

    #[test]
    fn test_remaining_same_door_returns_it() {
        for door in Door::ALL {
            assert_eq!(Door::remaining(door, door), door);
        }
    }

    #[test]
    fn test_random_covers_all_doors() {
        let mut rng = SimRng::new(42);
        let mut seen = [0u32; 3];

        for _ in 0..3_000 {
            seen[Door::random(&mut rng).index() as usize] += 1;
        }

        // Each door ~1000; a loose band is plenty to catch an off-by-one range
        for count in seen {
            assert!((800..1200).contains(&count), "counts: {:?}", seen);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Door::ALL[1]), "Door(1)");
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let door: Door = serde_json::from_str("2").unwrap();
        assert_eq!(door.index(), 2);
        assert!(serde_json::from_str::<Door>("3").is_err());
    }
}

//! The player's final-choice policy.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// What the player does after the host opens a door.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    /// Take the one remaining unopened door.
    Switch,
    /// Keep the original pick.
    Stay,
}

impl Strategy {
    /// Stream label used to derive this strategy's independent RNG stream.
    #[must_use]
    pub const fn stream_context(self) -> &'static str {
        match self {
            Strategy::Switch => "strategy/switch",
            Strategy::Stay => "strategy/stay",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_exactly_two_strategies() {
        let all: Vec<_> = Strategy::iter().collect();
        assert_eq!(all, vec![Strategy::Switch, Strategy::Stay]);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Strategy::Switch.to_string(), "switch");
        assert_eq!("stay".parse::<Strategy>().unwrap(), Strategy::Stay);
        assert!("swap".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_stream_contexts_differ() {
        assert_ne!(
            Strategy::Switch.stream_context(),
            Strategy::Stay.stream_context()
        );
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Strategy::Switch).unwrap();
        assert_eq!(json, "\"switch\"");
        let back: Strategy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Strategy::Switch);
    }
}

//! Targeting protocol directives.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A targeting directive.
///
/// Every protocol in a request acts as a filter (logical AND), but only the
/// first one picks the ranking order. Tags the service does not know are
/// kept as [`Protocol::Other`]: they pass every filter and leave the input
/// order untouched when ranking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Protocol {
    /// Rank by ascending distance from origin.
    ClosestEnemies,
    /// Rank by descending distance from origin.
    FurthestEnemies,
    /// Keep points with allies; rank by most allies, then closest.
    AssistAllies,
    /// Keep points without allies; rank by fewest allies.
    AvoidCrossfire,
    /// Keep mech points; rank mechs first.
    PrioritizeMech,
    /// Keep non-mech points; rank non-mechs first.
    AvoidMech,
    /// Unrecognized tag, preserved verbatim.
    Other(String),
}

impl Protocol {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "closest-enemies" => Protocol::ClosestEnemies,
            "furthest-enemies" => Protocol::FurthestEnemies,
            "assist-allies" => Protocol::AssistAllies,
            "avoid-crossfire" => Protocol::AvoidCrossfire,
            "prioritize-mech" => Protocol::PrioritizeMech,
            "avoid-mech" => Protocol::AvoidMech,
            other => Protocol::Other(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Protocol::ClosestEnemies => "closest-enemies",
            Protocol::FurthestEnemies => "furthest-enemies",
            Protocol::AssistAllies => "assist-allies",
            Protocol::AvoidCrossfire => "avoid-crossfire",
            Protocol::PrioritizeMech => "prioritize-mech",
            Protocol::AvoidMech => "avoid-mech",
            Protocol::Other(tag) => tag,
        }
    }
}

impl From<String> for Protocol {
    fn from(tag: String) -> Self {
        match Protocol::from_tag(&tag) {
            Protocol::Other(_) => Protocol::Other(tag),
            known => known,
        }
    }
}

impl From<Protocol> for String {
    fn from(protocol: Protocol) -> Self {
        match protocol {
            Protocol::Other(tag) => tag,
            known => known.tag().to_string(),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

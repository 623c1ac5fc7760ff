//! Rank ladders
//!
//! Static ordinal tables that turn a tier label into a comparable integer.
//! Distance between two labels is the number of tiers between them.

/// An ordered list of tier labels, lowest first
#[derive(Debug, Clone, Copy)]
pub struct RankLadder {
    tiers: &'static [&'static str],
}

/// Deadlock ranks, INITIATE (1) through ETERNUS (11)
pub const DEADLOCK: RankLadder = RankLadder::new(
    &[
        "INITIATE",
        "SEEKER",
        "ALCHEMIST",
        "ARCANIST",
        "RITUALIST",
        "EMISSARY",
        "ARCHON",
        "ORACLE",
        "PHANTOM",
        "ASCENDANT",
        "ETERNUS",
    ],
);

/// Valorant ranks, IRON (1) through RADIANT (9)
pub const VALORANT: RankLadder = RankLadder::new(
    &[
        "IRON",
        "BRONZE",
        "SILVER",
        "GOLD",
        "PLATINUM",
        "DIAMOND",
        "ASCENDANT",
        "IMMORTAL",
        "RADIANT",
    ],
);

impl RankLadder {
    pub const fn new(tiers: &'static [&'static str]) -> Self {
        Self { tiers }
    }

    /// 1-based position of `label`, or None if the label is not on the ladder
    ///
    /// Surrounding whitespace and ASCII case are ignored.
    pub fn ordinal(&self, label: &str) -> Option<u32> {
        let label = label.trim();
        self.tiers
            .iter()
            .position(|tier| tier.eq_ignore_ascii_case(label))
            .map(|idx| idx as u32 + 1)
    }

    /// Number of tiers between two labels
    pub fn distance(&self, a: &str, b: &str) -> Option<u32> {
        Some(self.ordinal(a)?.abs_diff(self.ordinal(b)?))
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

use core::fmt::{Display, Formatter};

use serde::ser::{Serialize, SerializeTuple, Serializer};

use crate::util::game::{GameRecord, Side};

/// A win-loss record. Serializes as `[wins, losses]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Standings {
    wins: u32,
    losses: u32,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pair(wins: u32, losses: u32) -> Self {
        Self { wins, losses }
    }

    pub fn win(&mut self) {
        self.wins += 1;
    }

    pub fn loss(&mut self) {
        self.losses += 1;
    }

    /// Credit `game` to the team that played on `side`.
    pub fn record(&mut self, game: &GameRecord, side: Side) {
        if game.who_won == side {
            self.win();
        } else {
            self.loss();
        }
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    /// The same games seen from the other dugout.
    pub fn reversed(self) -> Self {
        Self::from_pair(self.losses, self.wins)
    }
}

impl Display for Standings {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.wins(), self.losses())
    }
}

impl Serialize for Standings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.wins())?;
        pair.serialize_element(&self.losses())?;
        pair.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::game::game;

    #[test]
    fn records_by_side() {
        let won_at_home = game("a", 0, 0, ("A", 5), ("B", 1));
        let mut standings = Standings::new();
        standings.record(&won_at_home, Side::Home);
        standings.record(&won_at_home, Side::Away);
        standings.record(&won_at_home, Side::Home);
        assert_eq!(standings, Standings::from_pair(2, 1));
        assert_eq!(standings.reversed(), Standings::from_pair(1, 2));
        assert_eq!(standings.to_string(), "2-1");
    }

    #[test]
    fn serializes_as_pair() {
        assert_eq!(serde_json::to_string(&Standings::from_pair(32, 17)).unwrap(), "[32,17]");
    }
}

use core::fmt::{Display, Formatter};

use crate::util::game::GameRecord;
use crate::util::standings::Standings;

/// Head-to-head tally between two teams: wins, losses and runs scored by each side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordAgainst {
    our_team: String,
    their_team: String,
    record: Standings,
    our_runs: u32,
    their_runs: u32,
}

impl RecordAgainst {
    pub fn new(our_team: &str, their_team: &str) -> Self {
        Self {
            our_team: our_team.to_owned(),
            their_team: their_team.to_owned(),
            record: Standings::new(),
            our_runs: 0,
            their_runs: 0,
        }
    }

    /// Adds `game` if it was played between the two teams; returns whether it counted.
    pub fn add(&mut self, game: &GameRecord) -> bool {
        let Some(side) = game.matchup_side(&self.our_team, &self.their_team) else { return false };
        self.record.record(game, side);
        self.our_runs += game.score(side);
        self.their_runs += game.score(side.other());
        true
    }

    pub fn record(&self) -> Standings {
        self.record
    }

    /// `[runs by us, runs by them]`.
    pub fn runs(&self) -> [u32; 2] {
        [self.our_runs, self.their_runs]
    }
}

impl Display for RecordAgainst {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Self { our_team, their_team, record, our_runs, their_runs } = self;
        write!(f, "{our_team} {record} {their_team} ({our_runs}-{their_runs} runs)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::game::game;

    #[test]
    fn only_counts_the_matchup() {
        let mut record = RecordAgainst::new("A", "B");
        assert!(record.add(&game("1", 0, 0, ("A", 9), ("B", 0))));
        assert!(record.add(&game("2", 0, 1, ("B", 8), ("A", 0))));
        assert!(!record.add(&game("3", 0, 2, ("A", 3), ("C", 2))));
        assert_eq!(record.record(), Standings::from_pair(1, 1));
        assert_eq!(record.runs(), [9, 8]);
        assert_eq!(record.to_string(), "A 1-1 B (9-8 runs)");
    }
}

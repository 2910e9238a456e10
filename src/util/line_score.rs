use core::fmt::{Display, Formatter};

use crate::util::day::Day1;
use crate::util::game::{GameRecord, Side};

/// Final score of one game in a series.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineScore {
    day: Day1,
    home: (String, u32),
    away: (String, u32),
}

/// What a line score says about a pair of teams. A score for some other
/// matchup only knows about one of them, or neither.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Matchup {
    Both { ours: u32, theirs: u32 },
    OursOnly(u32),
    TheirsOnly(u32),
    Neither,
}

impl LineScore {
    pub fn new(game: &GameRecord) -> Self {
        Self {
            day: game.day0().one_indexed(),
            home: (game.team(Side::Home).to_owned(), game.score(Side::Home)),
            away: (game.team(Side::Away).to_owned(), game.score(Side::Away)),
        }
    }

    pub fn day(&self) -> Day1 {
        self.day
    }

    pub fn runs(&self, team: &str) -> Option<u32> {
        [&self.home, &self.away]
            .into_iter()
            .find(|(name, _)| name == team)
            .map(|&(_, runs)| runs)
    }

    pub fn matchup(&self, ours: &str, theirs: &str) -> Matchup {
        match (self.runs(ours), self.runs(theirs)) {
            (Some(ours), Some(theirs)) => Matchup::Both { ours, theirs },
            (Some(ours), None) => Matchup::OursOnly(ours),
            (None, Some(theirs)) => Matchup::TheirsOnly(theirs),
            (None, None) => Matchup::Neither,
        }
    }
}

impl Display for LineScore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Self { day, home: (home, home_runs), away: (away, away_runs) } = self;
        write!(f, "Day {day}: {away} {away_runs} @ {home} {home_runs}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::game::game;

    #[test]
    fn matchup_reports_missing_teams() {
        let score = LineScore::new(&game("g", 0, 4, ("A", 3), ("C", 2)));
        assert_eq!(score.day(), Day1(5));
        assert_eq!(score.matchup("A", "C"), Matchup::Both { ours: 3, theirs: 2 });
        assert_eq!(score.matchup("C", "A"), Matchup::Both { ours: 2, theirs: 3 });
        assert_eq!(score.matchup("A", "B"), Matchup::OursOnly(3));
        assert_eq!(score.matchup("B", "C"), Matchup::TheirsOnly(2));
        assert_eq!(score.matchup("B", "D"), Matchup::Neither);
        assert_eq!(score.to_string(), "Day 5: C 2 @ A 3");
    }
}

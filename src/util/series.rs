use log::debug;

use crate::util::day::{Day1, Season1};
use crate::util::line_score::{LineScore, Matchup};

/// Games making up one series, in day order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Series {
    pub season: Season1,
    /// Distinct opponents seen through the target day. `None` in the regular season.
    pub playoffs_round: Option<u32>,
    pub games: Vec<LineScore>,
}

/// Series wins and runs for two teams, both before the target day and over the whole series.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SeriesTally {
    pub score: [u32; 2],
    pub score_final: [u32; 2],
    pub runs: [u32; 2],
    pub runs_final: [u32; 2],
}

impl Series {
    pub fn days(&self) -> impl Iterator<Item = Day1> + '_ {
        self.games.iter().map(LineScore::day)
    }

    /// Tallies the series for `ours` and `theirs`. Days before `day` count toward the
    /// as-of figures, every day counts toward the final ones.
    pub fn tally(&self, ours: &str, theirs: &str, day: Day1) -> SeriesTally {
        let mut tally = SeriesTally::default();
        for line_score in &self.games {
            let matchup = line_score.matchup(ours, theirs);
            if line_score.day() < day {
                add(&mut tally.score, &mut tally.runs, matchup);
            }
            add(&mut tally.score_final, &mut tally.runs_final, matchup);
            if !matches!(matchup, Matchup::Both { .. }) {
                debug!("{line_score} is not between {ours} and {theirs}, no series win attributed");
            }
        }
        tally
    }
}

fn add(score: &mut [u32; 2], runs: &mut [u32; 2], matchup: Matchup) {
    match matchup {
        Matchup::Both { ours, theirs } => {
            if ours > theirs {
                score[0] += 1;
            } else if theirs > ours {
                score[1] += 1;
            }
            runs[0] += ours;
            runs[1] += theirs;
        }
        Matchup::OursOnly(ours) => runs[0] += ours,
        Matchup::TheirsOnly(theirs) => runs[1] += theirs,
        Matchup::Neither => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::game::game;

    fn series(games: &[crate::util::game::GameRecord]) -> Series {
        Series {
            season: Season1(1),
            playoffs_round: None,
            games: games.iter().map(LineScore::new).collect(),
        }
    }

    #[test]
    fn as_of_counts_only_earlier_days() {
        let series = series(&[
            game("1", 0, 0, ("A", 9), ("B", 0)),
            game("2", 0, 1, ("A", 0), ("B", 8)),
            game("3", 0, 2, ("B", 2), ("A", 3)),
        ]);
        let tally = series.tally("A", "B", Day1(2));
        assert_eq!(tally.score, [1, 0]);
        assert_eq!(tally.runs, [9, 0]);
        assert_eq!(tally.score_final, [2, 1]);
        assert_eq!(tally.runs_final, [12, 10]);
        assert_eq!(series.days().collect::<Vec<_>>(), vec![Day1(1), Day1(2), Day1(3)]);
    }

    #[test]
    fn ties_attribute_no_win() {
        let series = series(&[game("1", 0, 0, ("A", 4), ("B", 4))]);
        let tally = series.tally("A", "B", Day1(5));
        assert_eq!(tally.score, [0, 0]);
        assert_eq!(tally.runs, [4, 4]);
    }

    #[test]
    fn other_matchups_only_add_known_runs() {
        let series = series(&[
            game("1", 0, 100, ("A", 5), ("C", 1)),
            game("2", 0, 103, ("A", 2), ("B", 6)),
        ]);
        let tally = series.tally("A", "B", Day1(200));
        assert_eq!(tally.score_final, [0, 1]);
        assert_eq!(tally.runs_final, [7, 6]);
    }
}

use std::fmt::{Display, Formatter};

use crate::report::{SleuthReport, TeamPair};
use crate::util::game::Side;
use crate::util::teams::TeamNames;

pub struct TextView<'a> {
    report: &'a SleuthReport,
    names: &'a TeamNames,
}

impl<'a> TextView<'a> {
    pub fn new(report: &'a SleuthReport, names: &'a TeamNames) -> Self {
        Self { report, names }
    }
}

fn block<T: Display>(f: &mut Formatter<'_>, label: &str, pair: &TeamPair<T>, suffix: &str) -> std::fmt::Result {
    writeln!(f, "{label}:")?;
    for side in [Side::Away, Side::Home] {
        writeln!(f, "{team: <30}{value}{suffix}", team = pair.team(side), value = pair.get(side))?;
    }
    writeln!(f)
}

fn optional_block<T: Display>(f: &mut Formatter<'_>, label: &str, pair: &Option<TeamPair<T>>) -> std::fmt::Result {
    match pair {
        Some(pair) => block(f, label, pair, ""),
        None => Ok(()),
    }
}

impl Display for TextView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Self { report, names } = self;

        writeln!(f, "{} @ {}", names.full_name(&report.away_team), names.full_name(&report.home_team))?;
        writeln!(f, "Season {}, Day {}", report.season, report.day)?;
        writeln!(f, "Game {}, Best of {}", report.series_game_number(), report.best_of())?;
        if report.playoffs {
            writeln!(f, "Playoffs Round {}", report.playoffs_round)?;
        }
        writeln!(f)?;

        block(f, "Final Score", &report.final_score, "")?;
        block(f, "Odds", &report.odds, "%")?;
        block(f, "Overall WL Record (season, up to current game)", &report.overall_record, "")?;
        block(f, "Regular Season WL Record (up to current game)", &report.season_record, "")?;
        block(f, "Regular Season WL Record (final)", &report.season_record_final, "")?;
        optional_block(f, "Playoffs WL Record (up to current game)", &report.playoffs_record)?;
        optional_block(f, "Playoffs WL Record (final)", &report.playoffs_record_final)?;
        block(f, "Home/Away WL Record (season, up to current game)", &report.venue_record, "")?;
        block(f, "WL Record vs Opponent (season, up to current game)", &report.opponent_record, "")?;
        block(f, "WL Record vs Opponent (season, final)", &report.opponent_record_final, "")?;
        optional_block(f, "WL Record vs Opponent (playoffs, up to current game)", &report.opponent_playoffs_record)?;
        optional_block(f, "WL Record vs Opponent (playoffs, final)", &report.opponent_playoffs_record_final)?;
        block(f, "Runs vs Opponent (season, up to current game)", &report.runs_versus_opponent, "")?;
        block(f, "Runs vs Opponent (season, final)", &report.runs_versus_opponent_final, "")?;
        optional_block(f, "Runs vs Opponent (playoffs, up to current game)", &report.playoffs_runs_versus_opponent)?;
        optional_block(f, "Runs vs Opponent (playoffs, final)", &report.playoffs_runs_versus_opponent_final)?;
        block(f, "Runs vs Opponent (series, up to current game)", &report.series_runs_versus_opponent, "")?;
        block(f, "Runs vs Opponent (series, final)", &report.series_runs_versus_opponent_final, "")?;
        block(f, "Series Record (up to current game)", &report.series_score, "")?;
        block(f, "Series Record (final)", &report.series_score_final, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sleuth::Sleuth;
    use crate::util::game::{game, GameSelector};

    fn render(games: &[crate::util::game::GameRecord], id: &str) -> String {
        let report = Sleuth::new(games, &GameSelector::Id(id.to_owned())).unwrap().parse().unwrap();
        TextView::new(&report, &TeamNames::default()).to_string()
    }

    #[test]
    fn playoffs_games_show_round_and_playoffs_blocks() {
        let games = vec![
            game("p1", 0, 99, ("A", 4), ("B", 1)),
            game("p2", 0, 100, ("A", 2), ("B", 6)),
        ];
        let text = render(&games, "p2");
        assert!(text.starts_with("B @ A\nSeason 1, Day 101\nGame 2, Best of 5\nPlayoffs Round 1\n\n"));
        assert!(text.contains("Playoffs WL Record (up to current game):\nB                             0-1\nA                             1-0\n"));
        assert!(text.contains("Runs vs Opponent (playoffs, final):\nB                             7\nA                             6\n"));
    }

    #[test]
    fn regular_season_games_skip_playoffs_blocks() {
        let games = vec![
            game("1", 0, 0, ("A", 4), ("B", 1)),
            game("2", 0, 1, ("A", 2), ("B", 6)),
            game("3", 0, 2, ("A", 2), ("B", 3)),
        ];
        let text = render(&games, "1");
        assert!(!text.contains("Playoffs"));
        assert!(text.contains("Home/Away WL Record (season, up to current game):\nB                             0-0\nA                             0-0\n"));
        assert!(text.ends_with("Series Record (final):\nB                             2\nA                             1\n\n"));
    }
}

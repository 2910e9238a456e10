use thiserror::Error;

use crate::util::day::{Day1, Season1};
use crate::util::game::GameSelector;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SleuthError {
    #[error("no game matches {0}")]
    NoMatchingGame(GameSelector),

    #[error("could not determine the playoffs round of {team} on season {season}, day {day}: no playoffs game found for that day")]
    PlayoffsRoundUnknown { team: String, season: Season1, day: Day1 },

    #[error("{team} has no game on season {season}, day {day}, but every regular season series day should have one")]
    MissingSeriesGame { team: String, season: Season1, day: Day1 },

    #[error("day {0} is past the regular season")]
    NotRegularSeason(Day1),

    #[error("day {0} is not a playoffs day")]
    NotPlayoffs(Day1),
}

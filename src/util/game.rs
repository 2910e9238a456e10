use core::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::util::day::{Day0, Day1, Season0, Season1};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Self::Home => Self::Away,
            Self::Away => Self::Home,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Self::Home => "home",
            Self::Away => "away",
        })
    }
}

/// One finished game, as it appears in the games dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: String,
    pub season: u32,
    pub day: u32,
    #[serde(rename = "homeTeamNickname", alias = "homeTeam")]
    pub home_team: String,
    #[serde(rename = "awayTeamNickname", alias = "awayTeam")]
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub home_odds: f64,
    pub away_odds: f64,
    pub who_won: Side,
}

impl GameRecord {
    pub fn season0(&self) -> Season0 {
        Season0(self.season)
    }

    pub fn day0(&self) -> Day0 {
        Day0(self.day)
    }

    pub fn team(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home_score,
            Side::Away => self.away_score,
        }
    }

    /// Which side `team` played on, if it played at all.
    pub fn side_of(&self, team: &str) -> Option<Side> {
        if self.home_team == team {
            Some(Side::Home)
        } else if self.away_team == team {
            Some(Side::Away)
        } else {
            None
        }
    }

    /// The side `team` played on, provided `versus` was on the other side.
    pub fn matchup_side(&self, team: &str, versus: &str) -> Option<Side> {
        self.side_of(team).filter(|&side| self.team(side.other()) == versus)
    }

    pub fn opponent_of(&self, team: &str) -> Option<&str> {
        self.side_of(team).map(|side| self.team(side.other()))
    }
}

/// How the user picked the game to sleuth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameSelector {
    Id(String),
    TeamDay { team: String, season: Season1, day: Day1 },
}

impl Display for GameSelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "game id {id}"),
            Self::TeamDay { team, season, day } => write!(f, "{team} on season {season}, day {day}"),
        }
    }
}

#[cfg(test)]
pub(crate) fn game(id: &str, season: u32, day: u32, home: (&str, u32), away: (&str, u32)) -> GameRecord {
    GameRecord {
        id: id.to_owned(),
        season,
        day,
        home_team: home.0.to_owned(),
        away_team: away.0.to_owned(),
        home_score: home.1,
        away_score: away.1,
        home_odds: 0.5,
        away_odds: 0.5,
        who_won: if home.1 > away.1 { Side::Home } else { Side::Away },
    }
}

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::util::game::Side;
use crate::util::standings::Standings;

/// One value per team of the sleuthed game. Serializes as a map keyed by nickname, home team first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamPair<T> {
    home: (String, T),
    away: (String, T),
}

impl<T> TeamPair<T> {
    pub fn new(home_team: &str, home: T, away_team: &str, away: T) -> Self {
        Self {
            home: (home_team.to_owned(), home),
            away: (away_team.to_owned(), away),
        }
    }

    /// Builds a pair from a `[home, away]` array.
    pub fn from_array(home_team: &str, away_team: &str, [home, away]: [T; 2]) -> Self {
        Self::new(home_team, home, away_team, away)
    }

    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Home => &self.home.1,
            Side::Away => &self.away.1,
        }
    }

    pub fn team(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home.0,
            Side::Away => &self.away.0,
        }
    }
}

impl<T: Serialize> Serialize for TeamPair<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(&self.home.0, &self.home.1)?;
        map.serialize_entry(&self.away.0, &self.away.1)?;
        map.end()
    }
}

/// Everything computed about one game. Season and day are 1-indexed.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SleuthReport {
    pub home_team: String,
    pub away_team: String,
    pub winner: Side,
    pub season: u32,
    pub day: u32,
    pub playoffs: bool,
    /// 0 outside the playoffs.
    pub playoffs_round: u32,
    pub final_score: TeamPair<u32>,
    pub odds: TeamPair<i64>,
    pub overall_record: TeamPair<Standings>,
    pub season_record: TeamPair<Standings>,
    pub season_record_final: TeamPair<Standings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playoffs_record: Option<TeamPair<Standings>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playoffs_record_final: Option<TeamPair<Standings>>,
    pub venue_record: TeamPair<Standings>,
    pub opponent_record: TeamPair<Standings>,
    pub opponent_record_final: TeamPair<Standings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opponent_playoffs_record: Option<TeamPair<Standings>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opponent_playoffs_record_final: Option<TeamPair<Standings>>,
    pub runs_versus_opponent: TeamPair<u32>,
    pub runs_versus_opponent_final: TeamPair<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playoffs_runs_versus_opponent: Option<TeamPair<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playoffs_runs_versus_opponent_final: Option<TeamPair<u32>>,
    pub series_score: TeamPair<u32>,
    pub series_score_final: TeamPair<u32>,
    pub series_runs_versus_opponent: TeamPair<u32>,
    pub series_runs_versus_opponent_final: TeamPair<u32>,
}

impl SleuthReport {
    /// Which game of its series this was, counting decided games before it.
    pub fn series_game_number(&self) -> u32 {
        self.series_score.get(Side::Home) + self.series_score.get(Side::Away) + 1
    }

    pub fn best_of(&self) -> u32 {
        if self.playoffs { 5 } else { 3 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_pair_keeps_home_first() {
        let pair = TeamPair::new("Tigers", 2, "Crabs", 9);
        assert_eq!(serde_json::to_string(&pair).unwrap(), r#"{"Tigers":2,"Crabs":9}"#);
        assert_eq!(*pair.get(Side::Away), 9);
        assert_eq!(pair.team(Side::Home), "Tigers");
    }
}

use fxhash::FxHashMap;
use log::debug;

use crate::util::day::{Day0, Season0};
use crate::util::game::GameRecord;

/// Lookup of who played on which day, built once over the borrowed dataset.
pub struct Schedule<'a> {
    games: &'a [GameRecord],
    by_team_day: FxHashMap<(Season0, Day0, &'a str), usize>,
    last_day: FxHashMap<Season0, Day0>,
}

impl<'a> Schedule<'a> {
    pub fn new(games: &'a [GameRecord]) -> Self {
        let mut by_team_day = FxHashMap::default();
        let mut last_day = FxHashMap::<Season0, Day0>::default();
        for (idx, game) in games.iter().enumerate() {
            let (season, day) = (game.season0(), game.day0());
            for team in [&*game.home_team, &*game.away_team] {
                if *by_team_day.entry((season, day, team)).or_insert(idx) != idx {
                    debug!("{team} has more than one game on season {season:?} day {day:?}, keeping the first");
                }
            }
            last_day
                .entry(season)
                .and_modify(|last| *last = (*last).max(day))
                .or_insert(day);
        }
        Self { games, by_team_day, last_day }
    }

    /// The game `team` played on `day`, if any.
    pub fn game_on(&self, season: Season0, day: Day0, team: &str) -> Option<&'a GameRecord> {
        self.by_team_day
            .get(&(season, day, team))
            .map(|&idx| &self.games[idx])
    }

    /// Last 0-indexed day with any game in `season`.
    pub fn last_day(&self, season: Season0) -> Option<Day0> {
        self.last_day.get(&season).copied()
    }

    pub fn season_games(&self, season: Season0) -> impl Iterator<Item = &'a GameRecord> {
        let games = self.games;
        games.iter().filter(move |game| game.season0() == season)
    }
}

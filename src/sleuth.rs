use fxhash::FxHashSet;
use log::debug;

use crate::error::SleuthError;
use crate::report::{SleuthReport, TeamPair};
use crate::util::day::{Cutoff, Day0, Day1, Season0, Season1, SEASON_MAX};
use crate::util::game::{GameRecord, GameSelector, Side};
use crate::util::line_score::LineScore;
use crate::util::odds_percent;
use crate::util::record_against::RecordAgainst;
use crate::util::schedule::Schedule;
use crate::util::series::Series;
use crate::util::standings::Standings;
use crate::util::teams::same_team;

/// Which part of a season a record query looks at.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Window {
    /// Regular season and playoffs.
    Overall,
    RegularSeason,
    Playoffs,
}

impl Window {
    fn admits(self, day: Day0) -> bool {
        match self {
            Self::Overall => true,
            Self::RegularSeason => !day.is_playoffs(),
            Self::Playoffs => day.is_playoffs(),
        }
    }
}

/// Answers historical questions about one game against the whole game log.
///
/// Every query rescans the borrowed dataset; nothing is cached between calls.
pub struct Sleuth<'a> {
    schedule: Schedule<'a>,
    game: &'a GameRecord,
    last_day: Day1,
}

impl<'a> Sleuth<'a> {
    /// Finds the game `selector` points at.
    ///
    /// By id the first match wins. By team, season and day the game must involve the team
    /// (home or away) on exactly that day.
    pub fn new(games: &'a [GameRecord], selector: &GameSelector) -> Result<Self, SleuthError> {
        let game = match selector {
            GameSelector::Id(id) => games.iter().find(|game| game.id == *id),
            GameSelector::TeamDay { team, season, day } => games.iter().find(|game| {
                Some(game.season0()) == season.zero_indexed()
                    && Some(game.day0()) == day.zero_indexed()
                    && (same_team(&game.home_team, team) || same_team(&game.away_team, team))
            }),
        }
        .ok_or_else(|| SleuthError::NoMatchingGame(selector.clone()))?;

        let schedule = Schedule::new(games);
        let last_day = schedule.last_day(game.season0()).unwrap_or(game.day0()).one_indexed();
        debug!("Resolved {selector} to game {id}, season's last day is {last_day}", id = game.id);

        Ok(Self { schedule, game, last_day })
    }

    pub fn id(&self) -> &'a str {
        &self.game.id
    }

    /// 1 + the last 0-indexed day played in the game's season.
    pub fn last_day(&self) -> Day1 {
        self.last_day
    }

    fn games_before(&self, season: Season1, before: Cutoff, window: Window) -> impl Iterator<Item = &'a GameRecord> {
        let games = season.zero_indexed().map(|season| self.schedule.season_games(season));
        games
            .into_iter()
            .flatten()
            .filter(move |game| before.admits(game.day0()) && window.admits(game.day0()))
    }

    fn record(&self, team: &str, season: Season1, before: Cutoff, window: Window, venue: Option<Side>) -> Standings {
        let mut standings = Standings::new();
        for game in self.games_before(season, before, window) {
            match game.side_of(team) {
                Some(side) if venue.map_or(true, |venue| venue == side) => standings.record(game, side),
                _ => {}
            }
        }
        standings
    }

    /// W-L before `before`, regular season and playoffs together.
    pub fn overall_record(&self, team: &str, season: Season1, before: Cutoff) -> Standings {
        self.record(team, season, before, Window::Overall, None)
    }

    /// Regular season W-L before `before`. Pass `Cutoff::SEASON_FINAL` for the final record.
    pub fn season_record(&self, team: &str, season: Season1, before: Cutoff) -> Standings {
        self.record(team, season, before, Window::RegularSeason, None)
    }

    /// Playoffs W-L before `before`. Pass `Cutoff::PLAYOFFS_FINAL` for the final record.
    pub fn playoffs_record(&self, team: &str, season: Season1, before: Cutoff) -> Standings {
        self.record(team, season, before, Window::Playoffs, None)
    }

    /// W-L in games `team` hosted.
    pub fn home_record(&self, team: &str, season: Season1, before: Cutoff) -> Standings {
        self.record(team, season, before, Window::Overall, Some(Side::Home))
    }

    /// W-L in games `team` played on the road.
    pub fn away_record(&self, team: &str, season: Season1, before: Cutoff) -> Standings {
        self.record(team, season, before, Window::Overall, Some(Side::Away))
    }

    pub fn record_against(&self, team: &str, versus_team: &str, season: Season1, before: Cutoff, window: Window) -> RecordAgainst {
        let mut record = RecordAgainst::new(team, versus_team);
        for game in self.games_before(season, before, window) {
            record.add(game);
        }
        record
    }

    /// Regular season W-L of `team` against `versus_team`. The opponent's record is the reverse.
    pub fn opponent_record(&self, team: &str, versus_team: &str, season: Season1, before: Cutoff) -> Standings {
        self.record_against(team, versus_team, season, before, Window::RegularSeason).record()
    }

    pub fn opponent_playoffs_record(&self, team: &str, versus_team: &str, season: Season1, before: Cutoff) -> Standings {
        self.record_against(team, versus_team, season, before, Window::Playoffs).record()
    }

    /// `[runs by team, runs by versus_team]` in their regular season meetings.
    pub fn opponent_runs(&self, team: &str, versus_team: &str, season: Season1, before: Cutoff) -> [u32; 2] {
        self.record_against(team, versus_team, season, before, Window::RegularSeason).runs()
    }

    pub fn opponent_playoffs_runs(&self, team: &str, versus_team: &str, season: Season1, before: Cutoff) -> [u32; 2] {
        self.record_against(team, versus_team, season, before, Window::Playoffs).runs()
    }

    /// Scores of the 3-game regular season series `day` falls in.
    ///
    /// Series are aligned to the calendar, so this assumes `team` plays every day of the regular season.
    pub fn series_scores(&self, team: &str, season: Season1, day: Day1) -> Result<Series, SleuthError> {
        let day0 = day
            .zero_indexed()
            .filter(|day0| !day0.is_playoffs())
            .ok_or(SleuthError::NotRegularSeason(day))?;
        let (start, end) = day0.series_block();
        debug!("Regular season series for {team} on day {day} spans days {}-{}", start.one_indexed(), end.one_indexed());

        let games = (start.0..=end.0)
            .map(Day0)
            .map(|series_day| {
                season
                    .zero_indexed()
                    .and_then(|season0| self.schedule.game_on(season0, series_day, team))
                    .map(LineScore::new)
                    .ok_or_else(|| SleuthError::MissingSeriesGame {
                        team: team.to_owned(),
                        season,
                        day: series_day.one_indexed(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Series { season, playoffs_round: None, games })
    }

    /// Scores of `team`'s playoffs games against `versus_team`, plus the playoffs round of `day`.
    ///
    /// Playoffs series have no fixed length, so every playoffs day of the season is scanned. The
    /// round is the number of distinct opponents `team` has met up to and including `day`.
    pub fn series_scores_playoffs(&self, team: &str, versus_team: &str, season: Season1, day: Day1) -> Result<Series, SleuthError> {
        let day0 = day
            .zero_indexed()
            .filter(|day0| day0.is_playoffs())
            .ok_or(SleuthError::NotPlayoffs(day))?;
        let round_unknown = || SleuthError::PlayoffsRoundUnknown {
            team: team.to_owned(),
            season,
            day,
        };
        let season0 = season.zero_indexed().ok_or_else(round_unknown)?;
        let last_day = self.playoffs_last_day(season0);

        let mut opponents = FxHashSet::<&str>::default();
        let mut playoffs_round = 0;
        let mut games = Vec::new();
        for playoffs_day in (SEASON_MAX..=last_day.0).map(Day0) {
            let Some(game) = self.schedule.game_on(season0, playoffs_day, team) else { continue };
            let Some(opponent) = game.opponent_of(team) else { continue };
            opponents.insert(opponent);
            if playoffs_day == day0 {
                playoffs_round = opponents.len() as u32;
            }
            if opponent == versus_team {
                games.push(LineScore::new(game));
            }
        }

        if playoffs_round == 0 {
            return Err(round_unknown());
        }
        debug!("{team} is in playoffs round {playoffs_round} on day {day}, {} games against {versus_team}", games.len());

        Ok(Series { season, playoffs_round: Some(playoffs_round), games })
    }

    fn playoffs_last_day(&self, season: Season0) -> Day0 {
        if season == self.game.season0() {
            self.last_day.zero_indexed().unwrap_or(Day0(SEASON_MAX))
        } else {
            self.schedule.last_day(season).unwrap_or(Day0(SEASON_MAX))
        }
    }

    /// Computes every statistic about the sleuthed game.
    pub fn parse(&self) -> Result<SleuthReport, SleuthError> {
        let game = self.game;
        let (ht, at) = (&*game.home_team, &*game.away_team);
        let season = game.season0().one_indexed();
        let day0 = game.day0();
        let day = day0.one_indexed();
        let playoffs = day0.is_playoffs();
        let as_of = Cutoff::before(day0);

        let versus = |record: Standings| TeamPair::new(ht, record, at, record.reversed());
        let pair = |values: [u32; 2]| TeamPair::from_array(ht, at, values);

        let series = if playoffs {
            self.series_scores_playoffs(ht, at, season, day)?
        } else {
            self.series_scores(ht, season, day)?
        };
        let tally = series.tally(ht, at, day);
        debug!("Season {} series days {:?} tally {tally:?}", series.season, series.days().map(|day| day.0).collect::<Vec<_>>());

        Ok(SleuthReport {
            home_team: ht.to_owned(),
            away_team: at.to_owned(),
            winner: game.who_won,
            season: season.0,
            day: day.0,
            playoffs,
            playoffs_round: series.playoffs_round.unwrap_or(0),
            final_score: TeamPair::new(ht, game.score(Side::Home), at, game.score(Side::Away)),
            odds: TeamPair::new(ht, odds_percent(game.home_odds), at, odds_percent(game.away_odds)),
            overall_record: per_team(ht, at, |team| self.overall_record(team, season, as_of)),
            season_record: per_team(ht, at, |team| self.season_record(team, season, as_of)),
            season_record_final: per_team(ht, at, |team| self.season_record(team, season, Cutoff::SEASON_FINAL)),
            playoffs_record: playoffs.then(|| per_team(ht, at, |team| self.playoffs_record(team, season, as_of))),
            playoffs_record_final: playoffs.then(|| per_team(ht, at, |team| self.playoffs_record(team, season, Cutoff::PLAYOFFS_FINAL))),
            venue_record: TeamPair::new(
                ht,
                self.home_record(ht, season, as_of),
                at,
                self.away_record(at, season, as_of),
            ),
            opponent_record: versus(self.opponent_record(ht, at, season, as_of)),
            opponent_record_final: versus(self.opponent_record(ht, at, season, Cutoff::SEASON_FINAL)),
            opponent_playoffs_record: playoffs.then(|| versus(self.opponent_playoffs_record(ht, at, season, as_of))),
            opponent_playoffs_record_final: playoffs
                .then(|| versus(self.opponent_playoffs_record(ht, at, season, Cutoff::PLAYOFFS_FINAL))),
            runs_versus_opponent: pair(self.opponent_runs(ht, at, season, as_of)),
            runs_versus_opponent_final: pair(self.opponent_runs(ht, at, season, Cutoff::SEASON_FINAL)),
            playoffs_runs_versus_opponent: playoffs.then(|| pair(self.opponent_playoffs_runs(ht, at, season, as_of))),
            playoffs_runs_versus_opponent_final: playoffs
                .then(|| pair(self.opponent_playoffs_runs(ht, at, season, Cutoff::PLAYOFFS_FINAL))),
            series_score: pair(tally.score),
            series_score_final: pair(tally.score_final),
            series_runs_versus_opponent: pair(tally.runs),
            series_runs_versus_opponent_final: pair(tally.runs_final),
        })
    }
}

fn per_team<T>(home_team: &str, away_team: &str, query: impl Fn(&str) -> T) -> TeamPair<T> {
    TeamPair::new(home_team, query(home_team), away_team, query(away_team))
}

use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use fxhash::FxHashSet;
use log::{debug, info, warn};

use crate::util::game::GameRecord;
use crate::util::teams::sanitize_dale;

const FETCH_ATTEMPTS: usize = 3;

/// Where the games dataset comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    File(String),
    Url(String),
}

impl DataSource {
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            Self::Url(s.to_owned())
        } else {
            Self::File(s.to_owned())
        }
    }

    pub fn load(&self) -> Result<Vec<GameRecord>> {
        let games = match self {
            Self::File(path) => {
                let json = std::fs::read_to_string(Path::new(path))
                    .with_context(|| format!("Could not read games dataset {path}"))?;
                parse_games(&json).with_context(|| format!("Games dataset {path} was not valid"))?
            }
            Self::Url(url) => {
                let json = get_with_sleep(url, Duration::from_millis(3000))?;
                parse_games(&json).with_context(|| format!("Games dataset at {url} was not valid"))?
            }
        };
        info!("Loaded {} games from {self}", games.len());
        Ok(games)
    }
}

impl core::fmt::Display for DataSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{path}"),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

pub fn parse_games(json: &str) -> Result<Vec<GameRecord>> {
    serde_json::from_str::<Vec<GameRecord>>(json).context("Expected a JSON array of games")
}

fn get_with_sleep(url: &str, duration: Duration) -> Result<String> {
    let mut last_error = None;
    for attempt in 1..=FETCH_ATTEMPTS {
        match ureq::get(url).call() {
            Ok(response) => return response.into_string().context("Response was not valid text"),
            Err(e) => {
                warn!("Fetching {url} failed (attempt {attempt}/{FETCH_ATTEMPTS}): {e}");
                last_error = Some(e);
                if attempt < FETCH_ATTEMPTS {
                    std::thread::sleep(duration);
                }
            }
        }
    }
    Err(last_error.map_or_else(|| anyhow!("Could not fetch {url}"), |e| anyhow!("Could not fetch {url}: {e}")))
}

/// Every team nickname in the dataset, sorted, with Dale spelled plainly.
pub fn all_teams(games: &[GameRecord]) -> Vec<String> {
    let mut teams = games
        .iter()
        .flat_map(|game| [&*game.home_team, &*game.away_team])
        .map(sanitize_dale)
        .collect::<FxHashSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect::<Vec<_>>();
    teams.sort_unstable();
    debug!("Dataset knows {} teams", teams.len());
    teams
}

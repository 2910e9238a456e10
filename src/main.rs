use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use log::debug;

use crate::report::SleuthReport;
use crate::sleuth::Sleuth;
use crate::util::config::{Config, Format};
use crate::util::dataset::{all_teams, DataSource};
use crate::util::day::{Day1, Season1};
use crate::util::game::{GameRecord, GameSelector};
use crate::util::teams::{sanitize_dale, TeamNames};
use crate::views::View;

pub mod error;
pub mod report;
pub mod sleuth;
pub mod util;
pub mod views;

const DATA_ENV: &str = "SERIES_SLEUTH_DATA";

/// Get info about the series a blaseball game belongs to
#[derive(Parser, Debug)]
#[command(name = "series-sleuth", version)]
struct Cli {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Specify the game ID of the game to summarize
    #[arg(short, long)]
    game_id: Option<String>,

    /// Specify our team
    #[arg(long)]
    team: Option<String>,

    /// Specify season (1-indexed)
    #[arg(long)]
    season: Option<u32>,

    /// Specify day (1-indexed)
    #[arg(long)]
    day: Option<u32>,

    /// Print the summary as aligned plain text
    #[arg(long, conflicts_with = "json")]
    text: bool,

    /// Print the summary as JSON (default)
    #[arg(long)]
    json: bool,

    /// Games dataset, as a path or an http(s) URL
    #[arg(long)]
    data: Option<String>,

    /// JSON file mapping team nicknames to full names
    #[arg(long)]
    teams: Option<PathBuf>,

    /// Also copy the output to the clipboard
    #[arg(long)]
    copy: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Command line flags merged over the config file.
#[derive(Debug)]
struct Settings {
    selector: GameSelector,
    format: Format,
    source: DataSource,
    teams: Option<PathBuf>,
    copy: bool,
}

impl Settings {
    fn resolve(cli: Cli) -> Result<Self> {
        let config = Config::load_or_default(cli.config.as_deref())?;

        let game_id = cli.game_id.or(config.game_id);
        let team = cli.team.or(config.team);
        let season = cli.season.or(config.season);
        let day = cli.day.or(config.day);
        let selector = match (game_id, team, season, day) {
            (Some(id), ..) => GameSelector::Id(id),
            (None, Some(team), Some(season), Some(day)) => GameSelector::TeamDay {
                team,
                season: Season1(season),
                day: Day1(day),
            },
            _ => bail!("you must specify either --game-id or all three of --team/--season/--day"),
        };

        let format = if cli.text {
            Format::Text
        } else if cli.json {
            Format::Json
        } else {
            config.format.unwrap_or(Format::Json)
        };

        let source = cli
            .data
            .or(config.data)
            .or_else(|| std::env::var(DATA_ENV).ok())
            .map(|s| DataSource::parse(&s))
            .with_context(|| format!("No games dataset given; pass --data, set `data` in the config file, or set {DATA_ENV}"))?;

        Ok(Self {
            selector,
            format,
            source,
            teams: cli.teams.or(config.teams.map(PathBuf::from)),
            copy: cli.copy || config.copy,
        })
    }

    fn team_names(&self) -> Result<TeamNames> {
        match &self.teams {
            Some(path) => TeamNames::load(path),
            None => Ok(TeamNames::default()),
        }
    }

    fn view<'a>(&self, report: &'a SleuthReport, names: &'a TeamNames) -> View<'a> {
        match self.format {
            Format::Text => View::text(report, names),
            Format::Json => View::json(report),
        }
    }
}

fn validate_team(selector: &GameSelector, games: &[GameRecord]) -> Result<()> {
    let GameSelector::TeamDay { team, .. } = selector else { return Ok(()) };
    let teams = all_teams(games);
    if !teams.iter().any(|known| known == sanitize_dale(team)) {
        bail!("Unknown team '{team}', expected one of: {}", teams.join(", "));
    }
    Ok(())
}

fn build_report(settings: &Settings, games: &[GameRecord]) -> Result<SleuthReport> {
    validate_team(&settings.selector, games)?;
    let sleuth = Sleuth::new(games, &settings.selector)?;
    debug!("Sleuthing game {}", sleuth.id());
    Ok(sleuth.parse()?)
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .try_init();
}

/// Runs the command line with `args` (program name excluded) and returns what it would print.
pub fn series_sleuth<I, T>(args: I) -> Result<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cli = Cli::try_parse_from(std::iter::once(OsString::from("series-sleuth")).chain(args.into_iter().map(Into::into)))?;
    init_logging(cli.verbose);
    let settings = Settings::resolve(cli)?;
    let games = settings.source.load()?;
    let names = settings.team_names()?;
    let report = build_report(&settings, &games)?;
    let view = settings.view(&report, &names);
    if settings.copy {
        view.copy_to_clipboard()?;
    }
    Ok(view.to_string())
}

fn main() {
    if std::env::args_os().len() <= 1 {
        let _ = Cli::command().print_help();
        return;
    }
    match series_sleuth(std::env::args_os().skip(1)) {
        Ok(output) => println!("{output}"),
        Err(e) => match e.downcast::<clap::Error>() {
            Ok(e) => e.exit(),
            Err(e) => {
                eprintln!("Error while sleuthing series: {e:#}");
                std::process::exit(1);
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn dataset() -> NamedTempFile {
        write_temp(r#"[
            {"id": "g1", "season": 0, "day": 0, "homeTeamNickname": "Tigers", "awayTeamNickname": "Crabs",
             "homeScore": 9, "awayScore": 0, "homeOdds": 0.5432, "awayOdds": 0.4568, "whoWon": "home"},
            {"id": "g2", "season": 0, "day": 1, "homeTeamNickname": "Tigers", "awayTeamNickname": "Crabs",
             "homeScore": 0, "awayScore": 8, "homeOdds": 0.5, "awayOdds": 0.5, "whoWon": "away"},
            {"id": "g3", "season": 0, "day": 2, "homeTeamNickname": "Tigers", "awayTeamNickname": "Crabs",
             "homeScore": 3, "awayScore": 2, "homeOdds": 0.5, "awayOdds": 0.5, "whoWon": "home"}
        ]"#)
    }

    fn path(file: &NamedTempFile) -> String {
        file.path().to_string_lossy().into_owned()
    }

    #[test]
    fn json_by_game_id() {
        let data = dataset();
        let out = series_sleuth(["--game-id", "g2", "--data", &path(&data)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["homeTeam"], "Tigers");
        assert_eq!(value["day"], 2);
        assert_eq!(value["seriesScore"]["Tigers"], 1);
        assert_eq!(value["seriesScore"]["Crabs"], 0);
        assert_eq!(value["seriesScoreFinal"]["Tigers"], 2);
        assert_eq!(value["seriesRunsVersusOpponentFinal"]["Crabs"], 10);
        assert!(value.get("playoffsRecord").is_none());
    }

    #[test]
    fn text_by_team_season_day() {
        let data = dataset();
        let names = write_temp(r#"{"Tigers": "Hades Tigers", "Crabs": "Baltimore Crabs"}"#);
        let out = series_sleuth([
            "--team", "Crabs", "--season", "1", "--day", "1", "--text",
            "--data", &path(&data), "--teams", &path(&names),
        ]).unwrap();
        assert!(out.starts_with("Baltimore Crabs @ Hades Tigers\nSeason 1, Day 1\nGame 1, Best of 3\n"));
        assert!(out.contains("Odds:\nCrabs                         46%\nTigers                        54%\n"));
        assert!(out.contains("Series Record (final):\nCrabs                         1\nTigers                        2\n"));
    }

    #[test]
    fn config_file_supplies_selector() {
        let data = dataset();
        let config = write_temp(&format!("game_id: g3\nformat: text\ndata: {}\n", path(&data)));
        let out = series_sleuth(["--config", &path(&config)]).unwrap();
        assert!(out.contains("Season 1, Day 3"));
        assert!(out.contains("Game 3, Best of 3"));
    }

    #[test]
    fn flags_override_config() {
        let data = dataset();
        let config = write_temp("game_id: g3\nformat: text\n");
        let out = series_sleuth(["--config", &path(&config), "--game-id", "g1", "--json", "--data", &path(&data)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["day"], 1);
    }

    #[test]
    fn requires_a_selector() {
        let data = dataset();
        let err = series_sleuth(["--team", "Tigers", "--season", "1", "--data", &path(&data)]).unwrap_err();
        assert!(err.to_string().contains("--game-id"));
    }

    #[test]
    fn unknown_game_id_fails() {
        let data = dataset();
        let err = series_sleuth(["--game-id", "nope", "--data", &path(&data)]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<crate::error::SleuthError>(),
            Some(&crate::error::SleuthError::NoMatchingGame(GameSelector::Id("nope".to_owned())))
        );
    }

    #[test]
    fn unknown_team_fails() {
        let data = dataset();
        let err = series_sleuth(["--team", "Moist Talkers", "--season", "1", "--day", "1", "--data", &path(&data)]).unwrap_err();
        assert!(err.to_string().contains("Unknown team"));
    }

    #[test]
    fn text_and_json_conflict() {
        let data = dataset();
        assert!(series_sleuth(["--game-id", "g1", "--text", "--json", "--data", &path(&data)]).is_err());
    }
}

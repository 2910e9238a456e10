use core::fmt::{Display, Formatter};

/// First 0-indexed day that belongs to the playoffs. Regular season is days `0..SEASON_MAX`.
pub const SEASON_MAX: u32 = 99;

/// Playoffs never go past 20 games, so this works as a "final" cutoff for playoffs queries.
pub const PLAYOFFS_MAX: u32 = SEASON_MAX + 20;

/// Length of every regular season series.
pub const SERIES_LENGTH: u32 = 3;

/// Season as stored in the dataset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Season0(pub u32);

/// Season as shown to (and typed by) a human.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Season1(pub u32);

/// Day as stored in the dataset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day0(pub u32);

/// Day as shown to (and typed by) a human.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day1(pub u32);

impl Season0 {
    pub fn one_indexed(self) -> Season1 {
        Season1(self.0 + 1)
    }
}

impl Season1 {
    /// `None` for season 0, which does not exist when counting from 1.
    pub fn zero_indexed(self) -> Option<Season0> {
        self.0.checked_sub(1).map(Season0)
    }
}

impl Day0 {
    pub fn one_indexed(self) -> Day1 {
        Day1(self.0 + 1)
    }

    pub fn is_playoffs(self) -> bool {
        self.0 >= SEASON_MAX
    }

    /// Inclusive bounds of the regular season series this day falls in.
    pub fn series_block(self) -> (Day0, Day0) {
        let start = self.0 / SERIES_LENGTH * SERIES_LENGTH;
        (Day0(start), Day0(start + SERIES_LENGTH - 1))
    }
}

impl Day1 {
    pub fn zero_indexed(self) -> Option<Day0> {
        self.0.checked_sub(1).map(Day0)
    }
}

impl Display for Season1 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for Day1 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exclusive upper bound on 0-indexed days for a record query.
///
/// An as-of query uses the target game's own day, so only earlier days count.
/// `Cutoff::SEASON_FINAL` keeps the whole regular season and
/// `Cutoff::PLAYOFFS_FINAL` keeps every playoffs game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cutoff(pub Day0);

impl Cutoff {
    pub const SEASON_FINAL: Self = Self(Day0(SEASON_MAX));
    pub const PLAYOFFS_FINAL: Self = Self(Day0(PLAYOFFS_MAX));

    pub fn before(day: Day0) -> Self {
        Self(day)
    }

    pub fn admits(self, day: Day0) -> bool {
        day < self.0
    }
}

use std::fmt::Display;

use anyhow::{anyhow, Result};

use crate::report::SleuthReport;
use crate::util::teams::TeamNames;
use crate::views::json::JsonView;
use crate::views::text::TextView;

pub mod json;
pub mod text;

pub enum View<'a> {
    Text(TextView<'a>),
    Json(JsonView<'a>),
}

impl<'a> View<'a> {
    pub fn text(report: &'a SleuthReport, names: &'a TeamNames) -> Self {
        Self::Text(TextView::new(report, names))
    }

    pub fn json(report: &'a SleuthReport) -> Self {
        Self::Json(JsonView::new(report))
    }

    pub fn copy_to_clipboard(&self) -> Result<()> {
        cli_clipboard::set_contents(self.to_string()).map_err(|_| anyhow!("Failed to set clipboard"))
    }
}

impl Display for View<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(inner) => write!(f, "{inner}"),
            Self::Json(inner) => write!(f, "{inner}"),
        }
    }
}

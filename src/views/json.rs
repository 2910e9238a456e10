use std::fmt::{Display, Formatter};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::report::SleuthReport;

pub struct JsonView<'a> {
    report: &'a SleuthReport,
}

impl<'a> JsonView<'a> {
    pub fn new(report: &'a SleuthReport) -> Self {
        Self { report }
    }
}

impl Display for JsonView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.report.serialize(&mut serializer).map_err(|_| std::fmt::Error)?;
        f.write_str(core::str::from_utf8(&buf).map_err(|_| std::fmt::Error)?)
    }
}

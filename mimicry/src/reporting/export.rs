use serde::Serialize;

use crate::Location;

/// Machine-readable form of a rendered failure.
#[derive(Debug, Serialize)]
pub(crate) struct ReportExport<'a> {
    pub(crate) kind: &'static str,
    pub(crate) location: Option<&'a Location>,
    pub(crate) report: String,
    pub(crate) invocations: Vec<String>,
}

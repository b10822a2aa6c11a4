//! Document requests: which catalog to read, where to write, what to call it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Period a task list covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Day,
    Week,
    Month,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Day, Period::Week, Period::Month];

    /// Command-line spelling of the period.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
        }
    }

    /// Default input file for this period.
    pub fn source_file(&self) -> &'static str {
        match self {
            Period::Day => "example_daily_tasks.json",
            Period::Week => "example_weekly_tasks.json",
            Period::Month => "example_monthly_tasks.json",
        }
    }

    /// Default output file for this period.
    pub fn destination_file(&self) -> &'static str {
        match self {
            Period::Day => "Tasks_Daily.pdf",
            Period::Week => "Tasks_Weekly.pdf",
            Period::Month => "Tasks_Monthly.pdf",
        }
    }

    /// Page title for this period.
    pub fn title(&self) -> &'static str {
        match self {
            Period::Day => "Daily Tasks",
            Period::Week => "Weekly Tasks",
            Period::Month => "Monthly Tasks",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid period '{0}': expected one of day, week, month")]
pub struct ParsePeriodError(String);

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParsePeriodError(s.to_string()))
    }
}

/// Source path, destination path and title for one generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRequest {
    source: PathBuf,
    destination: PathBuf,
    title: String,
}

impl DocumentRequest {
    pub fn new(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            title: title.into(),
        }
    }

    /// The fixed source/destination/title triple for a period.
    pub fn for_period(period: Period) -> Self {
        Self::new(
            period.source_file(),
            period.destination_file(),
            period.title(),
        )
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_requests() {
        let day = DocumentRequest::for_period(Period::Day);
        assert_eq!(day.source(), Path::new("example_daily_tasks.json"));
        assert_eq!(day.destination(), Path::new("Tasks_Daily.pdf"));
        assert_eq!(day.title(), "Daily Tasks");

        let week = DocumentRequest::for_period(Period::Week);
        assert_eq!(week.source(), Path::new("example_weekly_tasks.json"));
        assert_eq!(week.destination(), Path::new("Tasks_Weekly.pdf"));
        assert_eq!(week.title(), "Weekly Tasks");

        let month = DocumentRequest::for_period(Period::Month);
        assert_eq!(month.source(), Path::new("example_monthly_tasks.json"));
        assert_eq!(month.destination(), Path::new("Tasks_Monthly.pdf"));
        assert_eq!(month.title(), "Monthly Tasks");
    }

    #[test]
    fn test_period_parse_roundtrip() {
        for period in Period::ALL {
            assert_eq!(period.to_string().parse::<Period>().unwrap(), period);
        }
    }

    #[test]
    fn test_period_parse_rejects_unknown() {
        let err = "year".parse::<Period>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid period 'year': expected one of day, week, month"
        );
        assert!("Day".parse::<Period>().is_err());
    }

    #[test]
    fn test_overrides() {
        let request = DocumentRequest::for_period(Period::Week)
            .with_source("data/week.json")
            .with_destination("out/week.pdf")
            .with_title("This Week");

        assert_eq!(request.source(), Path::new("data/week.json"));
        assert_eq!(request.destination(), Path::new("out/week.pdf"));
        assert_eq!(request.title(), "This Week");
    }
}

//! Assembly options and configuration.

use chrono::NaiveDate;
use std::path::PathBuf;

/// Options for one assembly invocation.
///
/// Everything the original kept as ambient state (output font, cover
/// logo, wall-clock date) is explicit configuration here, so concurrent
/// invocations never share mutable state.
#[derive(Debug, Clone)]
pub struct AssembleOptions {
    /// Base font family applied to every run.
    pub base_font: String,

    /// Optional cover-page logo. A missing or unset file is skipped
    /// silently; an unreadable image is a fatal error.
    pub logo_path: Option<PathBuf>,

    /// Cover-page date. Defaults to today when unset.
    pub generated_on: Option<NaiveDate>,
}

impl AssembleOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base font family.
    pub fn with_base_font(mut self, font: impl Into<String>) -> Self {
        self.base_font = font.into();
        self
    }

    /// Set the cover-page logo path.
    pub fn with_logo(mut self, path: impl Into<PathBuf>) -> Self {
        self.logo_path = Some(path.into());
        self
    }

    /// Pin the cover-page date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.generated_on = Some(date);
        self
    }

    /// The cover-page date, falling back to today.
    pub fn cover_date(&self) -> NaiveDate {
        self.generated_on
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            base_font: "Calibri".to_string(),
            logo_path: None,
            generated_on: None,
        }
    }
}

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Address shown in the contact block of every legal page.
pub const CONTACT_EMAIL: &str = "contact.allaboutinsurance@gmail.com";
pub const COMPANY_NAME: &str = "All About Insurance";

/// The two kinds of legal documents kept in the store.
///
/// The string form is the tag stored in the table's `type` column.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum DocumentType {
    #[serde(rename = "tos")]
    #[strum(serialize = "tos")]
    TermsOfService,
    #[serde(rename = "privacy")]
    #[strum(serialize = "privacy")]
    PrivacyPolicy,
}

impl DocumentType {
    pub fn tag(self) -> &'static str {
        self.into()
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::TermsOfService => "Terms of Service",
            Self::PrivacyPolicy => "Privacy Policy",
        }
    }

    /// Application route the document is served under.
    pub fn route(self) -> &'static str {
        match self {
            Self::TermsOfService => "/terms",
            Self::PrivacyPolicy => "/privacy",
        }
    }
}

/// A row of the legal documents table, as selected by the loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalDocument {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub effective_from: Option<String>,
}

/// What the page needs once a document has been fetched and cleaned up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedDocument {
    pub content: String,
    pub version: String,
    pub effective_date: String,
}

impl LoadedDocument {
    pub fn from_record(record: LegalDocument) -> Self {
        let content = normalize_newlines(record.content.as_deref().unwrap_or_default());
        let effective_date = record
            .effective_from
            .as_deref()
            .map(format_effective_date)
            .unwrap_or_default();

        Self {
            content,
            version: record.version.unwrap_or_default(),
            effective_date,
        }
    }

    pub fn meta(&self) -> DocumentMeta {
        DocumentMeta {
            version: self.version.clone(),
            effective_date: self.effective_date.clone(),
        }
    }
}

/// The "Version: … Effective: …" line under the page title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMeta {
    pub version: String,
    pub effective_date: String,
}

impl DocumentMeta {
    /// Each segment only shows up when there's something to put in it.
    pub fn segments(&self) -> Vec<String> {
        let mut segments = vec![];
        if !self.version.is_empty() {
            segments.push(format!("Version: {}", self.version));
        }
        if !self.effective_date.is_empty() {
            segments.push(format!("Effective: {}", self.effective_date));
        }
        segments
    }
}

/// Stored content sometimes carries literal `\n` escapes instead of line breaks.
pub fn normalize_newlines(content: &str) -> String {
    content.replace("\\n", "\n")
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Formats `effective_from` the way the viewer's locale writes dates.
///
/// Values that aren't dates are shown as they are.
pub fn format_effective_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => locale_date(date),
        None => {
            tracing::warn!("effective_from is not a date: {raw:?}");
            raw.to_string()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn locale_date(date: NaiveDate) -> String {
    use chrono::Datelike;
    use wasm_bindgen::JsValue;

    let js_date = js_sys::Date::new_with_year_month_day(
        date.year() as u32,
        date.month0() as i32,
        date.day() as i32,
    );
    js_date
        .to_locale_date_string("default", &JsValue::UNDEFINED)
        .into()
}

// No locale to ask outside the browser, use the en-US short form.
#[cfg(not(target_arch = "wasm32"))]
fn locale_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

pub fn current_year() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().get_full_year() as i32
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use chrono::Datelike;
        chrono::Local::now().year()
    }
}

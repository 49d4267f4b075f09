//! Localized strings
//!
//! A key → string table per language. The active language comes from
//! settings or the process locale; keys missing from it fall back to English,
//! and keys missing everywhere come back unchanged.

use std::collections::HashMap;

/// Language used when the active one lacks a key
pub const DEFAULT_LANGUAGE: &str = "en";

const EN: &[(&str, &str)] = &[
    ("schedule", "Schedule"),
    ("venue", "Venue Comparison"),
    ("budget", "Budget"),
    ("welcome", "Welcome to Oji Wedding"),
    ("currency", "Currency"),
    ("total_spent", "Total spent"),
    ("budget_exceeded_title", "Budget exceeded! 🚨"),
    (
        "budget_exceeded_body",
        "Current spending ({total}) has exceeded the target budget ({target}).",
    ),
    ("no_expenses", "No expenses yet."),
    ("no_milestones", "No milestones yet."),
    ("venue_sort_hint", "Pick a column to sort by."),
];

const KO: &[(&str, &str)] = &[
    ("schedule", "일정 관리"),
    ("venue", "예식장 비교"),
    ("budget", "예산 관리"),
    ("welcome", "오지 웨딩에 오신 것을 환영합니다"),
    ("currency", "통화"),
    ("total_spent", "총 지출"),
    ("budget_exceeded_title", "예산 초과 경고! 🚨"),
    (
        "budget_exceeded_body",
        "현재 지출({total})이 목표 예산({target})을 초과했습니다.",
    ),
    ("no_expenses", "지출 내역이 없습니다."),
    ("no_milestones", "일정이 없습니다."),
    ("venue_sort_hint", "항목을 눌러 정렬할 수 있습니다."),
];

/// String tables with an active language
#[derive(Debug, Clone)]
pub struct Catalog {
    language: String,
    tables: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    /// Empty catalog with the given active language
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: normalize_language(&language.into()),
            tables: HashMap::new(),
        }
    }

    /// Catalog with the bundled English and Korean tables
    pub fn builtin(language: impl Into<String>) -> Self {
        Self::new(language)
            .with_table("en", EN.iter().copied())
            .with_table("ko", KO.iter().copied())
    }

    /// Catalog for the settings override, else the process locale
    pub fn for_locale(override_language: Option<&str>) -> Self {
        let language = override_language
            .map(str::to_string)
            .or_else(detect_language)
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        Self::builtin(language)
    }

    /// Add or replace the table of one language
    pub fn with_table<'a>(
        mut self,
        language: &str,
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let table = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.tables.insert(normalize_language(language), table);
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Look up a key in the active language, falling back to English
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        [self.language.as_str(), DEFAULT_LANGUAGE]
            .into_iter()
            .filter_map(|lang| self.tables.get(lang))
            .find_map(|table| table.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }

    /// Look up a key and substitute `{name}` placeholders
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.t(key).to_string(), |text, (name, value)| {
                text.replace(&format!("{{{}}}", name), value)
            })
    }
}

/// Reduce a locale tag such as `ko_KR.UTF-8` or `en-US` to its language code
fn normalize_language(tag: &str) -> String {
    tag.split(['_', '-', '.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Language of the process locale, from `LC_ALL`, `LC_MESSAGES` or `LANG`
fn detect_language() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|tag| normalize_language(&tag))
        .find(|lang| !lang.is_empty() && lang != "c" && lang != "posix")
}

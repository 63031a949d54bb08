//! Option lists for the provider and region pickers.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::region::RegionRecord;

pub const SENTINEL_LABEL: &str = "-- select an option --";

/// One entry of a picker: the stored value and the text shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub display_name: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            display_name: display_name.into(),
        }
    }

    /// The empty placeholder that heads every derived list.
    #[must_use]
    pub fn sentinel() -> Self {
        Self::new("", SENTINEL_LABEL)
    }

    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.value.is_empty()
    }
}

/// Full marketing name for a provider code; unknown codes come back unchanged.
#[must_use]
pub fn provider_full_name(code: &str) -> &str {
    match code {
        "aws" => "Amazon Web Services",
        "azure" => "Microsoft Azure",
        "google" => "Google Cloud",
        "do" => "DigitalOcean",
        "upcloud" => "UpCloud",
        other => other,
    }
}

/// Uppercases the first character of every space-separated word.
///
/// The remainder of each word keeps its case, and runs of spaces are kept.
#[must_use]
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Provider picker entries, sentinel first, then each provider code in the
/// order it first appears in `catalog`.
#[must_use]
pub fn derive_provider_options(catalog: &[RegionRecord]) -> Vec<SelectOption> {
    let codes = unique_in_order(catalog.iter().map(RegionRecord::provider_code));
    with_sentinel(
        codes
            .into_iter()
            .map(|code| SelectOption::new(code, provider_full_name(code))),
    )
}

/// Region picker entries drawn from the whole catalog, sentinel first.
///
/// The value keeps the raw region string; only the label is capitalized.
#[must_use]
pub fn derive_region_options(catalog: &[RegionRecord]) -> Vec<SelectOption> {
    let regions = unique_in_order(catalog.iter().map(|r| r.region.as_str()));
    with_sentinel(
        regions
            .into_iter()
            .map(|region| SelectOption::new(region, capitalize_words(region))),
    )
}

fn unique_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

fn with_sentinel(options: impl Iterator<Item = SelectOption>) -> Vec<SelectOption> {
    std::iter::once(SelectOption::sentinel()).chain(options).collect()
}

//! Locale-aware string ordering for table columns.
//!
//! Backed by the ICU4X root-locale collator at tertiary strength, the same
//! ordering the browser's default `localeCompare` produces: punctuation before
//! symbols before digits before letters, accents secondary to base letters,
//! and lowercase before uppercase when nothing else differs.

#[cfg(test)]
#[path = "collate_test.rs"]
mod collate_test;

use std::cmp::Ordering;
use std::sync::LazyLock;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};

static ROOT_COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(CollatorPreferences::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            leptos::logging::warn!("root collator unavailable, falling back to code point order: {e}");
            None
        }
    }
});

/// Compare two strings the way a user expects a sorted name column to read.
///
/// Strings the collator considers equal are ordered by code point so the
/// result stays a total order.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    match ROOT_COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b).then_with(|| a.cmp(b)),
        None => a.cmp(b),
    }
}

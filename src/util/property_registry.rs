//! Registry of event properties the platform records on its own.
//!
//! Each entry carries a display label, a description for tooltips, and two
//! flags: `built_in` entries are hidden while the "hide PostHog properties"
//! toggle is active, and `hidden` entries never show in listings.

#[cfg(test)]
#[path = "property_registry_test.rs"]
mod property_registry_test;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::net::types::PropertyUsage;

/// Static metadata for a known property key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub built_in: bool,
    pub hidden: bool,
}

const fn shown(key: &'static str, label: &'static str, description: &'static str) -> PropertyDescriptor {
    PropertyDescriptor {
        key,
        label,
        description,
        built_in: true,
        hidden: false,
    }
}

const fn internal(key: &'static str, label: &'static str) -> PropertyDescriptor {
    PropertyDescriptor {
        key,
        label,
        description: "",
        built_in: true,
        hidden: true,
    }
}

static KNOWN_PROPERTIES: &[PropertyDescriptor] = &[
    shown("$timestamp", "Timestamp", "Time the event happened."),
    shown("$sent_at", "Sent At", "Time the event was sent by the client."),
    shown("$browser", "Browser", "Name of the browser the user has used."),
    shown("$browser_version", "Browser Version", "The version of the browser that was used."),
    shown("$current_url", "Current URL", "The URL visited at the time of the event."),
    shown("$host", "Host", "The hostname of the current URL."),
    shown("$pathname", "Path Name", "The path of the current URL."),
    shown("$os", "OS", "The operating system of the user."),
    shown("$device_type", "Device Type", "Whether the user is on desktop, mobile or tablet."),
    shown("$referrer", "Referrer URL", "URL of where the user came from most recently."),
    shown("$referring_domain", "Referring Domain", "Domain of where the user came from most recently."),
    shown("$initial_referrer", "Initial Referrer URL", "URL of where the user came from for the very first time."),
    shown(
        "$initial_referring_domain",
        "Initial Referring Domain",
        "Domain of where the user came from for the very first time.",
    ),
    shown("$screen_height", "Screen Height", "The height of the user's entire screen."),
    shown("$screen_width", "Screen Width", "The width of the user's entire screen."),
    shown("$viewport_height", "Viewport Height", "The height of the user's actual browser window."),
    shown("$viewport_width", "Viewport Width", "The width of the user's actual browser window."),
    shown("$search_engine", "Search Engine", "The search engine the user came in from, if any."),
    shown("$lib", "Library", "The library the event was captured with."),
    shown("$lib_version", "Library Version", "Version of the library the event was captured with."),
    shown("$user_id", "User ID", "The distinct ID the event was identified with."),
    shown("$ip", "IP Address", "IP address the event was sent from."),
    shown("$active_feature_flags", "Active Feature Flags", "Feature flags enabled for the user at event time."),
    shown("$feature_flag", "Feature Flag", "Key of the feature flag that was evaluated."),
    shown("$feature_flag_response", "Feature Flag Response", "Value the evaluated feature flag returned."),
    shown("$geoip_city_name", "City Name", "Name of the city matched to this event's IP address."),
    shown("$geoip_country_name", "Country Name", "Name of the country matched to this event's IP address."),
    internal("$token", "Token"),
    internal("$ce_version", "Autocapture Version"),
    internal("$anon_distinct_id", "Anonymous Distinct ID"),
    internal("$event_type", "Event Type"),
    internal("$insert_id", "Insert ID"),
    internal("$time", "Time (Client)"),
    internal("$device_id", "Device ID"),
    internal("$elements", "Elements"),
    internal("$had_persisted_distinct_id", "Had Persisted Distinct ID"),
];

static BY_KEY: LazyLock<HashMap<&'static str, &'static PropertyDescriptor>> =
    LazyLock::new(|| KNOWN_PROPERTIES.iter().map(|d| (d.key, d)).collect());

/// Descriptor for `key`, if the platform defines it.
#[must_use]
pub fn lookup(key: &str) -> Option<&'static PropertyDescriptor> {
    BY_KEY.get(key).copied()
}

/// Display label for `key`: the registry label when known, else the key.
#[must_use]
pub fn display_label(key: &str) -> &str {
    lookup(key).map_or(key, |d| d.label)
}

/// Whether a property row belongs in the listing.
///
/// Two independent filters in order: the toggle drops built-ins, then
/// registry-hidden keys are dropped regardless of the toggle.
#[must_use]
pub fn is_listed(key: &str, show_built_ins: bool) -> bool {
    let Some(descriptor) = lookup(key) else {
        return true;
    };
    if !show_built_ins && descriptor.built_in {
        return false;
    }
    !descriptor.hidden
}

/// Property rows remaining after both filters, in input order.
pub fn visible_properties(rows: &[PropertyUsage], show_built_ins: bool) -> Vec<PropertyUsage> {
    rows.iter()
        .filter(|row| is_listed(&row.key, show_built_ins))
        .cloned()
        .collect()
}

//! Inclusion predicates and value normalization.

use crate::InitialValueMap;
use initials_catalog::{PropertyCatalog, PropertyRecord, Status};
use std::fmt;

/// Properties never emitted. `all` resets everything including `unicode-bidi`
/// and `direction`, which must not be reset either.
pub const EXCLUDE_LIST: &[&str] = &["all", "unicode-bidi", "direction"];

/// Properties whose specified initial value depends on the user agent.
/// They are emitted as `initial`.
pub const USER_AGENT_DEPENDENT_PROPS: &[&str] = &[
    "color",
    "outline-color",
    "quotes",
    "text-align",
    "box-orient",
    "font-family",
];

/// Optional inheritance filter applied on top of the fixed predicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// When set, keep only properties whose `inherited` flag equals it.
    pub inherited: Option<bool>,
}

impl FilterConfig {
    /// No inheritance filtering.
    pub fn all() -> Self {
        Self { inherited: None }
    }

    /// Only properties that inherit by default.
    pub fn inherited_only() -> Self {
        Self {
            inherited: Some(true),
        }
    }
}

/// Why a catalog record was left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Excluded,
    Status(Status),
    CompoundInitial,
    InheritanceMismatch,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Excluded => f.write_str("excluded property"),
            SkipReason::Status(status) => write!(f, "{} status", status.as_str()),
            SkipReason::CompoundInitial => f.write_str("compound initial value"),
            SkipReason::InheritanceMismatch => f.write_str("inheritance mismatch"),
        }
    }
}

/// Check a record against every inclusion predicate, reporting the first
/// one that fails.
pub fn check(name: &str, record: &PropertyRecord, config: FilterConfig) -> Result<(), SkipReason> {
    if EXCLUDE_LIST.contains(&name) {
        return Err(SkipReason::Excluded);
    }
    if let Some(status @ (Status::Experimental | Status::Nonstandard)) = record.status {
        return Err(SkipReason::Status(status));
    }
    if record.initial.as_text().is_none() {
        return Err(SkipReason::CompoundInitial);
    }
    if let Some(wanted) = config.inherited {
        if record.inherited != Some(wanted) {
            return Err(SkipReason::InheritanceMismatch);
        }
    }
    Ok(())
}

/// Strip `<code>` / `</code>` markup from a catalog value.
pub fn normalize(value: &str) -> String {
    let mut out = value.to_string();
    // Removing one tag can splice together another (`<co<code>de>`).
    while out.contains("<code>") || out.contains("</code>") {
        out = out.replace("<code>", "").replace("</code>", "");
    }
    out
}

/// Filter the catalog into a map of normalized initial values.
pub fn filter(catalog: &PropertyCatalog, config: FilterConfig) -> InitialValueMap {
    let mut map = InitialValueMap::new();
    let mut skipped = 0usize;

    for (name, record) in catalog.iter() {
        if let Err(reason) = check(name, record, config) {
            tracing::trace!(property = name, %reason, "skipping property");
            skipped += 1;
            continue;
        }

        let initial = if USER_AGENT_DEPENDENT_PROPS.contains(&name) {
            "initial"
        } else {
            record.initial.as_text().unwrap_or_default()
        };

        map.insert(name, normalize(initial));
    }

    tracing::debug!(
        kept = map.len(),
        skipped,
        inherited = ?config.inherited,
        "filtered property catalog"
    );

    map
}

//! css-initials pipeline
//!
//! Derives the initial value of every CSS property relevant to a reset
//! stylesheet from a [`PropertyCatalog`].
//!
//! ```text
//! PropertyCatalog → filter() → apply_corrections() → InitialValueMap
//! ```
//!
//! Filtering drops excluded, non-standard, compound and (optionally)
//! inheritance-mismatched properties, forces user-agent dependent properties
//! to `initial` and strips `<code>` markup. Corrections run last and pin the
//! vendor-prefixed `appearance` properties to `none`.

pub mod corrections;
pub mod filter;
pub mod map;

pub use corrections::{apply_corrections, APPEARANCE_FIX};
pub use filter::{
    check, filter, normalize, FilterConfig, SkipReason, EXCLUDE_LIST, USER_AGENT_DEPENDENT_PROPS,
};
pub use map::InitialValueMap;

use initials_catalog::PropertyCatalog;

/// Run the full pipeline: filter the catalog, then apply corrections.
pub fn run(catalog: &PropertyCatalog, config: FilterConfig) -> InitialValueMap {
    apply_corrections(filter(catalog, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use initials_catalog::{PropertyRecord, Status};
    use pretty_assertions::assert_eq;

    fn example_catalog() -> PropertyCatalog {
        [
            PropertyRecord::new("color", Status::Standard, "black", true),
            PropertyRecord::new("display", Status::Standard, "inline", false),
            PropertyRecord::new("float", Status::Experimental, "none", false),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_run_all() {
        let map = run(&example_catalog(), FilterConfig::all());
        assert_eq!(map.get("display"), Some("inline"));
        assert_eq!(map.get("color"), Some("initial"));
        assert!(!map.contains_key("float"));
    }

    #[test]
    fn test_run_inherited() {
        let map = run(&example_catalog(), FilterConfig::inherited_only());
        let filtered: Vec<&str> = map
            .keys()
            .filter(|key| !APPEARANCE_FIX.iter().any(|(fix, _)| fix == key))
            .collect();
        assert_eq!(filtered, vec!["color"]);
        assert_eq!(map.get("color"), Some("initial"));
    }

    #[test]
    fn test_appearance_present_in_both_runs() {
        for config in [FilterConfig::all(), FilterConfig::inherited_only()] {
            let map = run(&example_catalog(), config);
            for (key, value) in APPEARANCE_FIX {
                assert_eq!(map.get(key), Some(*value));
            }
        }
    }

    #[test]
    fn test_run_empty_catalog() {
        let map = run(&PropertyCatalog::default(), FilterConfig::all());
        assert_eq!(map.len(), APPEARANCE_FIX.len());
    }

    #[test]
    fn test_bundled_catalog_invariants() {
        let catalog = PropertyCatalog::bundled().unwrap();
        for config in [FilterConfig::all(), FilterConfig::inherited_only()] {
            let map = run(&catalog, config);
            for excluded in EXCLUDE_LIST {
                assert!(!map.contains_key(excluded), "{excluded} should be excluded");
            }
            for (name, value) in map.iter() {
                assert!(!value.contains("<code>"), "{name} kept markup");
                if USER_AGENT_DEPENDENT_PROPS.contains(&name) {
                    assert_eq!(value, "initial");
                }
            }
        }
    }
}

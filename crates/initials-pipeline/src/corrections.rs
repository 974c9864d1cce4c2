//! Fixed overrides applied after filtering.

use crate::InitialValueMap;

/// `appearance` and its vendor-prefixed forms are always reset to `none`.
pub const APPEARANCE_FIX: &[(&str, &str)] = &[
    ("-webkit-appearance", "none"),
    ("-moz-appearance", "none"),
    ("-ms-appearance", "none"),
    ("appearance", "none"),
];

/// Merge the override table into a filtered map. Override values always win.
pub fn apply_corrections(mut map: InitialValueMap) -> InitialValueMap {
    for (name, value) in APPEARANCE_FIX {
        map.insert(*name, *value);
    }
    map
}

//! Data-module generators.
//!
//! Both flavors embed the map as pretty-printed JSON; only the module
//! wrapping differs.

use crate::CodegenError;
use initials_pipeline::InitialValueMap;

/// Pretty-print the map with two-space indentation.
pub fn to_json(map: &InitialValueMap) -> Result<String, CodegenError> {
    Ok(serde_json::to_string_pretty(map)?)
}

/// `module.exports = {...};`
pub fn commonjs(map: &InitialValueMap) -> Result<String, CodegenError> {
    Ok(format!("module.exports = {};", to_json(map)?))
}

/// `export default {...};`
pub fn esm(map: &InitialValueMap) -> Result<String, CodegenError> {
    Ok(format!("export default {};", to_json(map)?))
}

pub fn commonjs_path(group: &str) -> String {
    format!("dist/{group}.cjs.js")
}

pub fn esm_path(group: &str) -> String {
    format!("dist/{group}.esm.js")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> InitialValueMap {
        [("display", "inline"), ("appearance", "none")].into_iter().collect()
    }

    #[test]
    fn test_to_json() {
        assert_eq!(
            to_json(&sample()).unwrap(),
            "{\n  \"display\": \"inline\",\n  \"appearance\": \"none\"\n}"
        );
    }

    #[test]
    fn test_commonjs() {
        assert_eq!(
            commonjs(&sample()).unwrap(),
            "module.exports = {\n  \"display\": \"inline\",\n  \"appearance\": \"none\"\n};"
        );
    }

    #[test]
    fn test_esm() {
        assert_eq!(
            esm(&sample()).unwrap(),
            "export default {\n  \"display\": \"inline\",\n  \"appearance\": \"none\"\n};"
        );
    }

    #[test]
    fn test_empty_map() {
        assert_eq!(esm(&InitialValueMap::new()).unwrap(), "export default {};");
    }

    #[test]
    fn test_export_is_the_map() {
        let json = to_json(&sample()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, serde_json::to_value(sample()).unwrap());
    }
}

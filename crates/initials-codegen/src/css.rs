//! CSS code generator.
//!
//! Renders an initial-value map as a single rule block.

use initials_pipeline::InitialValueMap;

/// Render `selector { name: value; ... }`, one declaration per line.
pub fn render(map: &InitialValueMap, selector: &str) -> String {
    let declarations: Vec<String> = map
        .iter()
        .map(|(name, value)| format!("  {name}: {value};"))
        .collect();
    format!("{selector} {{\n{}\n}}", declarations.join("\n"))
}

/// Read the `(name, value)` declarations back out of a rendered block.
pub fn parse_declarations(block: &str) -> Vec<(String, String)> {
    let body = match (block.find('{'), block.rfind('}')) {
        (Some(open), Some(close)) if open < close => &block[open + 1..close],
        _ => return Vec::new(),
    };

    body.lines()
        .map(str::trim)
        .filter_map(|line| line.strip_suffix(';'))
        .filter_map(|decl| decl.split_once(':'))
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .collect()
}

//! Per-group `package.json` manifest.

use crate::{data, CodegenError};
use serde::Serialize;

/// Entry points of a published group, relative to `<group>/package.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub name: String,
    pub main: String,
    pub module: String,
}

impl Manifest {
    pub fn for_group(group: &str) -> Self {
        Self {
            name: format!("css-initials/{group}"),
            main: format!("../{}", data::commonjs_path(group)),
            module: format!("../{}", data::esm_path(group)),
        }
    }

    pub fn to_json(&self) -> Result<String, CodegenError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

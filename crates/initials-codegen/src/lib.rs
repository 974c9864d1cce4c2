//! css-initials code generator
//!
//! Renders a pipeline result into the published artifacts of one output
//! group: a CSS rule, CommonJS and ES data modules, and a package manifest.
//!
//! ```text
//! PropertyCatalog → compile(group) → GroupOutput { css, cjs, esm, manifest }
//! ```

pub mod css;
pub mod data;
pub mod manifest;

use initials_catalog::PropertyCatalog;
use initials_pipeline::{FilterConfig, InitialValueMap};

pub use manifest::Manifest;

/// Code generation error.
#[derive(Debug, thiserror::Error)]
#[error("Codegen error: {0}")]
pub struct CodegenError(#[from] serde_json::Error);

/// A named set of outputs sharing one pipeline configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputGroup {
    pub name: String,
    pub selector: String,
    pub config: FilterConfig,
}

impl OutputGroup {
    pub fn new(name: &str, config: FilterConfig) -> Self {
        Self {
            name: name.to_string(),
            selector: format!(".initials-{name}"),
            config,
        }
    }

    /// The `all` and `inherited` groups.
    pub fn defaults() -> Vec<OutputGroup> {
        vec![
            OutputGroup::new("all", FilterConfig::all()),
            OutputGroup::new("inherited", FilterConfig::inherited_only()),
        ]
    }
}

/// One rendered file, addressed relative to the output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub path: String,
    pub contents: String,
}

/// Everything generated for one output group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupOutput {
    pub css: Artifact,
    pub cjs: Artifact,
    pub esm: Artifact,
    pub manifest: Artifact,
}

impl GroupOutput {
    pub fn artifacts(&self) -> [&Artifact; 4] {
        [&self.css, &self.cjs, &self.esm, &self.manifest]
    }
}

/// Render an already computed map for a group.
pub fn render(map: &InitialValueMap, group: &OutputGroup) -> Result<GroupOutput, CodegenError> {
    let name = &group.name;
    let manifest = Manifest::for_group(name);

    Ok(GroupOutput {
        css: Artifact {
            path: format!("{name}.css"),
            contents: css::render(map, &group.selector),
        },
        cjs: Artifact {
            path: data::commonjs_path(name),
            contents: data::commonjs(map)?,
        },
        esm: Artifact {
            path: data::esm_path(name),
            contents: data::esm(map)?,
        },
        manifest: Artifact {
            path: format!("{name}/package.json"),
            contents: manifest.to_json()?,
        },
    })
}

/// Run the pipeline for a group and render its outputs.
pub fn compile(catalog: &PropertyCatalog, group: &OutputGroup) -> Result<GroupOutput, CodegenError> {
    let map = initials_pipeline::run(catalog, group.config);
    render(&map, group)
}

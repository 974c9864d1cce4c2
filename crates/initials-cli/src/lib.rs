//! css-initials generator
//!
//! Drives the pipeline for every output group and persists the rendered
//! artifacts. Groups are independent, so each one is compiled and written on
//! its own thread; the first failure aborts the run.

pub mod writer;

pub use writer::{write_file, WriteError};

use initials_catalog::{CatalogError, PropertyCatalog};
use initials_codegen::{CodegenError, OutputGroup};
use std::path::Path;

/// Anything that can abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Generate and write every group. Returns the number of files written.
pub fn generate(
    catalog: &PropertyCatalog,
    out_dir: &Path,
    groups: &[OutputGroup],
) -> Result<usize, Error> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = groups
            .iter()
            .map(|group| scope.spawn(move || generate_group(catalog, out_dir, group)))
            .collect();

        let mut written = 0;
        for handle in handles {
            written += handle
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic))?;
        }
        Ok(written)
    })
}

fn generate_group(
    catalog: &PropertyCatalog,
    out_dir: &Path,
    group: &OutputGroup,
) -> Result<usize, Error> {
    let output = initials_codegen::compile(catalog, group)?;

    let artifacts = output.artifacts();
    for artifact in artifacts {
        let path = out_dir.join(&artifact.path);
        write_file(&path, &artifact.contents)?;
        tracing::info!(group = %group.name, path = %path.display(), "wrote artifact");
    }
    Ok(artifacts.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_writes_every_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = PropertyCatalog::bundled().unwrap();
        let written = generate(&catalog, dir.path(), &OutputGroup::defaults()).unwrap();
        assert_eq!(written, 8);
    }

    #[test]
    fn test_generate_no_groups() {
        let dir = tempfile::tempdir().unwrap();
        let written = generate(&PropertyCatalog::default(), dir.path(), &[]).unwrap();
        assert_eq!(written, 0);
    }

    #[test]
    fn test_write_failure_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("out");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = generate(
            &PropertyCatalog::default(),
            &blocker,
            &OutputGroup::defaults(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Write(_)));
    }
}

//! Shared test utilities for execute and integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::commands::ExecutionContext;
use crate::generator::DialectKind;

/// Create a temporary file containing the given content.
///
/// Used to create record description files for command tests.
pub fn create_temp_json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Execution context for a dialect with default settings and no configured database.
pub fn context(kind: DialectKind) -> ExecutionContext {
    ExecutionContext::new(kind.into_dialect(), None)
}

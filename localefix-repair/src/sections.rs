//! Shared-section merge for message documents.
//!
//! Unlike the structure repair, this path goes through a real JSON tree:
//! parse, replace or fill the shared sections, re-serialize. Key order of
//! untouched keys is preserved (`serde_json` with `preserve_order`), output is
//! pretty-printed at two-space indentation with a trailing newline.

use crate::error::{RepairError, RepairResult};
use localefix_catalog::SectionSet;
use serde_json::Value;

/// How catalog sections are merged into a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// Replace each catalog-provided section wholesale.
    Overwrite,
    /// Only add keys the document is missing; never touch an existing value.
    FillMissing,
}

/// Merge `sections` into `document` and re-serialize.
///
/// Sections the catalog does not provide are left alone. A document that does
/// not parse, or whose root is not an object, is rejected without output.
pub fn update_sections(
    document: &str,
    sections: &SectionSet,
    mode: MergeMode,
) -> RepairResult<String> {
    let root: Value = serde_json::from_str(document).map_err(|e| RepairError::Validation {
        message: format!("document does not parse: {e}"),
    })?;
    let Value::Object(mut map) = root else {
        return Err(RepairError::Validation {
            message: "document root is not a JSON object".to_string(),
        });
    };

    for (section, value) in sections.iter() {
        match mode {
            MergeMode::Overwrite => {
                map.insert(section.as_str().to_string(), value.clone());
            }
            MergeMode::FillMissing => match map.get_mut(section.as_str()) {
                Some(existing) => fill_missing(existing, value),
                None => {
                    map.insert(section.as_str().to_string(), value.clone());
                }
            },
        }
    }

    let mut out = serde_json::to_string_pretty(&Value::Object(map)).map_err(|e| {
        RepairError::Runtime(anyhow::Error::new(e).context("serialize merged document"))
    })?;
    out.push('\n');
    Ok(out)
}

/// Recursively copy keys from `source` that `target` lacks. Existing values,
/// including non-object values shadowing a source object, are never replaced.
fn fill_missing(target: &mut Value, source: &Value) {
    let (Value::Object(target), Value::Object(source)) = (target, source) else {
        return;
    };

    for (key, value) in source {
        match target.get_mut(key) {
            Some(existing) => fill_missing(existing, value),
            None => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

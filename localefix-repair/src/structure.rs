//! Structure repair for misnested message documents.
//!
//! The defect this fixes has one exact shape: calculator entries that belong
//! inside the root `"calculators"` object were written as document-root
//! siblings *after* the object's closing brace, at two-space indentation:
//!
//! ```json
//! {
//!   "calculators": {
//!     "bmi": { "title": "BMI" }
//!   }
//!   "mortgage": { "title": "Mortgage" }
//! }
//! ```
//!
//! The repair is a single forward pass over the document's lines. The original
//! closing brace of `calculators` is dropped, every later line is indented one
//! level deeper, and a new closing brace is inserted in front of the document's
//! final brace. Line content is never altered beyond leading whitespace, so
//! translations round-trip byte-exact.
//!
//! Classification is by indentation width and simple prefix patterns, not by a
//! JSON parser. Documents outside the defect shape are not guaranteed a correct
//! rewrite; callers gate on [`repair_structure`]'s output parsing before
//! writing (see `engine`).

/// Opening marker of the calculators object.
const CALCULATORS_OPEN: &str = "\"calculators\": {";

/// Outcome of a structure repair pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureRepair {
    /// The rewritten document.
    pub text: String,
    /// Number of lines that were re-indented one level deeper.
    pub relocated_lines: usize,
    /// True when the synthetic closing brace was inserted.
    pub closed_calculators: bool,
}

impl StructureRepair {
    pub fn changed(&self, input: &str) -> bool {
        self.text != input
    }
}

/// Re-nest root-level siblings that follow the `calculators` block back inside
/// it.
///
/// One forward pass; two monotone flags (`inside`, `closed`) that each flip
/// exactly once. Lines keep their original terminators; classification runs on
/// the text with the trailing `\n` stripped.
pub fn repair_structure(input: &str) -> StructureRepair {
    let mut out = String::with_capacity(input.len() + 8);
    let mut inside = false;
    let mut closed = false;
    let mut relocated = 0usize;
    let mut closed_calculators = false;

    for raw in input.split_inclusive('\n') {
        let line = raw.strip_suffix('\n').unwrap_or(raw);

        // Opening marker; only the first occurrence starts the block.
        if !inside && !closed && line.contains(CALCULATORS_OPEN) {
            out.push_str(raw);
            inside = true;
            continue;
        }

        // The original closing brace of calculators. Dropped here; the block is
        // re-closed in front of the document's final brace instead.
        if inside && line == "  }" {
            inside = false;
            closed = true;
            continue;
        }

        if inside {
            out.push_str(raw);
            continue;
        }

        if closed && (is_misplaced_entry_open(line) || is_nested_content(line)) {
            out.push_str("  ");
            out.push_str(raw);
            relocated += 1;
            continue;
        }

        if closed && line.starts_with("  },") {
            out.push_str("  ");
            out.push_str(raw);
            relocated += 1;
            continue;
        }

        if closed && line.trim() == "}" {
            out.push_str("  }\n");
            out.push_str(raw);
            closed_calculators = true;
            continue;
        }

        out.push_str(raw);
    }

    StructureRepair {
        text: out,
        relocated_lines: relocated,
        closed_calculators,
    }
}

/// `  "some-key": {` — a root-level sibling that should be a calculator entry.
fn is_misplaced_entry_open(line: &str) -> bool {
    let Some(rest) = line.strip_prefix("  \"") else {
        return false;
    };
    let key_len = rest
        .bytes()
        .take_while(|b| b.is_ascii_lowercase() || *b == b'-')
        .count();
    key_len > 0 && rest[key_len..].starts_with("\": {")
}

/// Nested content of a misplaced entry: exactly two spaces followed by
/// anything but a closing brace, or four-or-more spaces.
fn is_nested_content(line: &str) -> bool {
    let bytes = line.as_bytes();
    (bytes.len() > 2 && bytes[0] == b' ' && bytes[1] == b' ' && bytes[2] != b'}')
        || line.starts_with("    ")
}

//! # Note Frontmatter
//!
//! Identifiers and display titles live in a YAML block at the top of a note:
//!
//! ```text
//! ---
//! id: 1a2
//! tocTitle: Carry propagation
//! ---
//! # Body starts here
//! ```
//!
//! The keys are configurable (see [`crate::config::ZettelConfig`]). Values are read
//! leniently: numbers are accepted as identifiers (`id: 12` is `"12"`), and blank
//! strings count as absent. A note without a leading `---` line has no frontmatter.

use serde_yaml::{Mapping, Value};

/// Frontmatter keys the engine reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    pub id: String,
    pub toc_title: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            id: "id".to_string(),
            toc_title: "tocTitle".to_string(),
        }
    }
}

/// Values extracted from a note's frontmatter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFields {
    pub id: Option<String>,
    pub toc_title: Option<String>,
}

/// Splits `content` into `(yaml, body)` when it starts with a frontmatter block.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let rest = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }
    None
}

/// Reads the configured fields from `content`.
pub fn read_fields(content: &str, names: &FieldNames) -> Result<NoteFields, serde_yaml::Error> {
    let Some((yaml, _)) = split_frontmatter(content) else {
        return Ok(NoteFields::default());
    };

    let mapping = match serde_yaml::from_str::<Value>(yaml)? {
        Value::Mapping(m) => m,
        _ => return Ok(NoteFields::default()),
    };

    Ok(NoteFields {
        id: lookup(&mapping, &names.id).and_then(scalar_text),
        toc_title: lookup(&mapping, &names.toc_title).and_then(string_text),
    })
}

/// Renders a new note carrying `id` under the configured identifier key.
pub fn render_new_note(names: &FieldNames, id: &str, title: &str) -> Result<String, serde_yaml::Error> {
    let mut mapping = Mapping::new();
    mapping.insert(
        Value::String(names.id.clone()),
        Value::String(id.to_string()),
    );
    let yaml = serde_yaml::to_string(&mapping)?;
    Ok(format!("---\n{yaml}---\n# {title}\n"))
}

fn lookup<'a>(mapping: &'a Mapping, key: &str) -> Option<&'a Value> {
    mapping.get(Value::String(key.to_string()))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        other => string_text(other),
    }
}

fn string_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_frontmatter() {
        let content = "---\nid: 1a\n---\n# Title\nbody\n";
        let (yaml, body) = split_frontmatter(content).unwrap();
        assert_eq!(yaml, "id: 1a\n");
        assert_eq!(body, "# Title\nbody\n");
    }

    #[test]
    fn test_split_frontmatter_crlf() {
        let content = "---\r\nid: 2\r\n---\r\nbody";
        let (yaml, body) = split_frontmatter(content).unwrap();
        assert_eq!(yaml, "id: 2\r\n");
        assert_eq!(body, "body");
    }

    #[test]
    fn test_no_frontmatter() {
        assert!(split_frontmatter("# Just a note\n").is_none());
        assert!(split_frontmatter("---\nunterminated: true\n").is_none());
        let fields = read_fields("plain text", &FieldNames::default()).unwrap();
        assert_eq!(fields, NoteFields::default());
    }

    #[test]
    fn test_read_fields() {
        let content = "---\nid: 1a2\ntocTitle: Short name\ntags: [x]\n---\nbody";
        let fields = read_fields(content, &FieldNames::default()).unwrap();
        assert_eq!(fields.id.as_deref(), Some("1a2"));
        assert_eq!(fields.toc_title.as_deref(), Some("Short name"));
    }

    #[test]
    fn test_numeric_id_is_text() {
        let fields = read_fields("---\nid: 12\n---\n", &FieldNames::default()).unwrap();
        assert_eq!(fields.id.as_deref(), Some("12"));
    }

    #[test]
    fn test_blank_values_are_absent() {
        let content = "---\nid: \"  \"\ntocTitle:\n---\n";
        let fields = read_fields(content, &FieldNames::default()).unwrap();
        assert_eq!(fields, NoteFields::default());
    }

    #[test]
    fn test_empty_block_and_non_mapping() {
        let fields = read_fields("---\n---\nbody", &FieldNames::default()).unwrap();
        assert_eq!(fields, NoteFields::default());
        let fields = read_fields("---\n- a\n- b\n---\n", &FieldNames::default()).unwrap();
        assert_eq!(fields, NoteFields::default());
    }

    #[test]
    fn test_custom_field_names() {
        let names = FieldNames {
            id: "zettel".to_string(),
            toc_title: "short".to_string(),
        };
        let content = "---\nid: ignored\nzettel: 3c\nshort: S\n---\n";
        let fields = read_fields(content, &names).unwrap();
        assert_eq!(fields.id.as_deref(), Some("3c"));
        assert_eq!(fields.toc_title.as_deref(), Some("S"));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        assert!(read_fields("---\nid: [unclosed\n---\n", &FieldNames::default()).is_err());
    }

    #[test]
    fn test_rendered_note_reads_back() {
        let names = FieldNames::default();
        for id in ["1", "1a", "10b3"] {
            let content = render_new_note(&names, id, "New idea").unwrap();
            assert!(content.ends_with("# New idea\n"));
            let fields = read_fields(&content, &names).unwrap();
            assert_eq!(fields.id.as_deref(), Some(id));
        }
    }
}

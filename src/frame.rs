use crate::error::{ParseError, Result};

/// Field index of the mangled symbol in a captured frame line:
/// `<frame-index> <module-name> <address> <mangled-symbol> [+ <offset>] ...`
const MANGLED_SYMBOL_FIELD: usize = 3;

const MIN_FIELDS: usize = MANGLED_SYMBOL_FIELD + 1;

/// One captured frame line split into whitespace-separated fields.
#[derive(Debug, Clone)]
pub struct TokenizedFrame {
    fields: Vec<String>,
}

impl TokenizedFrame {
    /// Collapse whitespace runs in `raw` and split into fields. Frames
    /// with fewer than 4 fields are rejected as unparsable.
    pub fn tokenize(raw: &str) -> Result<Self> {
        let fields: Vec<String> = raw.split_whitespace().map(str::to_owned).collect();
        if fields.len() < MIN_FIELDS {
            return Err(ParseError::InsufficientFields { found: fields.len() });
        }
        Ok(Self { fields })
    }

    /// The candidate mangled symbol. Fields before it are presence-checked
    /// only; fields after it (offset and beyond) are ignored.
    pub fn mangled_symbol(&self) -> &str {
        &self.fields[MANGLED_SYMBOL_FIELD]
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_collapses_whitespace_runs() {
        let frame = "2   MyApp \t 0x0000000100009b1c   $s5MyApp7ViewKitC6buttonyyFTo + 40";
        let tokenized = TokenizedFrame::tokenize(frame).unwrap();
        assert_eq!(tokenized.mangled_symbol(), "$s5MyApp7ViewKitC6buttonyyFTo");
        assert_eq!(tokenized.fields().len(), 6);
    }

    #[test]
    fn test_tokenize_ignores_leading_and_trailing_whitespace() {
        let tokenized = TokenizedFrame::tokenize("  0 mod 0xdead sym  ").unwrap();
        assert_eq!(tokenized.mangled_symbol(), "sym");
    }

    #[test]
    fn test_tokenize_exactly_four_fields() {
        let tokenized = TokenizedFrame::tokenize("0 mod 0xdead sym").unwrap();
        assert_eq!(tokenized.mangled_symbol(), "sym");
    }

    #[test]
    fn test_tokenize_rejects_short_frames() {
        for raw in ["", "   ", "0", "0 mod", "0 mod 0xdead"] {
            let err = TokenizedFrame::tokenize(raw).unwrap_err();
            assert!(matches!(err, ParseError::InsufficientFields { .. }),
                "expected InsufficientFields for {:?}, got {:?}", raw, err);
        }
    }

    #[test]
    fn test_tokenize_reports_field_count() {
        match TokenizedFrame::tokenize("0 mod 0xdead").unwrap_err() {
            ParseError::InsufficientFields { found } => assert_eq!(found, 3),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

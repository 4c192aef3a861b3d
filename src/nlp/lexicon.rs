// Lexicon loader for the emotion knowledge base.
// The file format is deliberately naive CSV: line 1 is a header, every other
// line is `emotion,term[,ignored...]`. No quoting or escaping — a comma
// inside a term corrupts that line.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub emotion: String,
    pub term: String,
}

/// Ordered list of (emotion, term) pairs, loaded once at startup and
/// read-only afterwards. Entry order matters: the classifier's
/// first-match-wins scan follows it.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    pub fn load(path: &Path) -> Result<Lexicon> {
        let mut content = String::new();
        File::open(path)?.read_to_string(&mut content)?;
        Ok(Lexicon::parse(&content))
    }

    pub fn parse(content: &str) -> Lexicon {
        let entries = content
            .lines()
            .skip(1) // header
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| {
                let mut fields = line.split(',');
                let emotion = fields.next()?.trim();
                let term = fields.next()?.trim();
                Some(LexiconEntry {
                    emotion: emotion.to_string(),
                    term: term.to_string(),
                })
            })
            .collect();
        Lexicon { entries }
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_header_and_one_entry() {
        let lex = Lexicon::parse("emocion,termino\ntristeza, triste");
        assert_eq!(lex.len(), 1);
        assert_eq!(lex.entries()[0].emotion, "tristeza");
        assert_eq!(lex.entries()[0].term, "triste");
    }

    #[test]
    fn test_parse_trims_and_ignores_extra_fields() {
        let lex = Lexicon::parse("emocion,termino\n  alegria ,  feliz , ignorado, mas");
        assert_eq!(lex.len(), 1);
        assert_eq!(lex.entries()[0].emotion, "alegria");
        assert_eq!(lex.entries()[0].term, "feliz");
    }

    #[test]
    fn test_parse_skips_short_and_blank_lines() {
        let lex = Lexicon::parse("emocion,termino\n\nsolo_un_campo\n   \nmiedo,temor");
        assert_eq!(lex.len(), 1);
        assert_eq!(lex.entries()[0].emotion, "miedo");
    }

    #[test]
    fn test_parse_preserves_file_order() {
        let lex = Lexicon::parse("h,h\na,uno\nb,dos\na,tres");
        let emotions: Vec<&str> = lex.entries().iter().map(|e| e.emotion.as_str()).collect();
        assert_eq!(emotions, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_parse_header_only_is_empty() {
        let lex = Lexicon::parse("emocion,termino\n");
        assert!(lex.is_empty());
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("base.csv");
        std::fs::write(&path, "emocion,termino\ntristeza, triste\n")?;

        let lex = Lexicon::load(&path)?;
        assert_eq!(lex.len(), 1);
        assert_eq!(lex.entries()[0].emotion, "tristeza");
        assert_eq!(lex.entries()[0].term, "triste");
        Ok(())
    }

    #[test]
    fn test_load_missing_file_is_err() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_existe.csv");
        assert!(Lexicon::load(&path).is_err());
    }

    #[test]
    fn test_entry_serialization() {
        let entry = LexiconEntry {
            emotion: "enojo".to_string(),
            term: "furioso".to_string(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: LexiconEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}

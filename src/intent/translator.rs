//! Pseudo-SQL translation.

/// Table name used when a query references nothing known
pub const UNKNOWN_TABLE: &str = "unknown_table";

/// Maps a classification decision to a fixed statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translator {
    known: String,
}

impl Translator {
    /// `collection` is the table name emitted for a positive decision
    pub fn new(collection: &str) -> Self {
        Self {
            known: format!("SELECT * FROM {}", collection),
        }
    }

    pub fn translate(&self, references_collection: bool) -> String {
        if references_collection {
            self.known.clone()
        } else {
            format!("SELECT * FROM {}", UNKNOWN_TABLE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        let translator = Translator::new("sales");
        assert_eq!(translator.translate(true), "SELECT * FROM sales");
        assert_eq!(translator.translate(false), "SELECT * FROM unknown_table");
    }
}

//! Types and functionality for creating the grammar point list.

use crate::hsk_grammar::GrammarDocument;
use hsk::Lexicon;
use hsk_core::dataset_types::GrammarPoint;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Grammarfile {
    pub points: Vec<GrammarPoint>,
}

impl Grammarfile {
    /// Parses each document on its own. Points are ordered by level, then by their position in the document.
    pub fn derive<L: Lexicon + ?Sized>(documents: &[GrammarDocument], lexicon: &L) -> Self {
        let mut documents = documents.iter().collect::<Vec<_>>();
        documents.sort_by_key(|document| document.level);

        let mut points = vec![];
        for document in documents {
            let document_points = document.parse(lexicon);
            tracing::debug!(
                "{} grammar points in {}",
                document_points.len(),
                document.filename
            );
            points.extend(document_points);
        }
        Self { points }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn document(level: u8, text: &str) -> GrammarDocument {
        GrammarDocument {
            level,
            filename: format!("HSK {level}.txt"),
            text: text.to_string(),
        }
    }

    #[test]
    fn orders_by_level_then_document() {
        let documents = [
            document(2, "【二01】名词\n【二02】名词\n"),
            document(1, "【一01】名词\n"),
        ];
        let grammarfile = Grammarfile::derive(&documents, &HashMap::<char, String>::new());
        let ids = grammarfile
            .points
            .iter()
            .map(|p| p.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, &["g-1-001", "g-2-001", "g-2-002"]);
    }
}

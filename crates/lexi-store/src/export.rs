use chrono::Utc;
use lexi_types::WordEntry;
use serde::{Deserialize, Serialize};

use crate::{AddBatchReport, StoreError, WordStore};

pub const EXPORT_VERSION: &str = "1.0";

/// Whole-vocabulary backup document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub version: String,
    pub export_date: String,
    pub total_words: usize,
    pub words: Vec<WordEntry>,
}

pub async fn export_all(store: &dyn WordStore) -> Result<ExportDocument, StoreError> {
    let words = store.get_all().await?;
    tracing::info!("Exporting {} words", words.len());

    Ok(ExportDocument {
        version: EXPORT_VERSION.to_string(),
        export_date: Utc::now().to_rfc3339(),
        total_words: words.len(),
        words,
    })
}

/// Entries read from an export document
#[derive(Debug, Default)]
pub struct ParsedImport {
    pub words: Vec<WordEntry>,
    /// Entries that could not be read as a word
    pub invalid: usize,
}

/// Parse an export document. Only the `words` array is required; a bad
/// entry is counted and skipped without failing the rest.
pub fn parse_import(text: &str) -> Result<ParsedImport, StoreError> {
    let value: serde_json::Value = serde_json::from_str(text)?;

    let words = value
        .get("words")
        .and_then(|w| w.as_array())
        .ok_or_else(|| StoreError::InvalidImport("missing words array".to_string()))?;

    let mut parsed = ParsedImport::default();
    for (index, raw) in words.iter().enumerate() {
        match serde_json::from_value::<WordEntry>(raw.clone()) {
            Ok(entry) => parsed.words.push(entry),
            Err(e) => {
                tracing::warn!("Skipping import entry {}: {}", index, e);
                parsed.invalid += 1;
            }
        }
    }

    Ok(parsed)
}

/// Add every word of an export document through the store's own dedup.
/// Unreadable entries are reported under `errors`.
pub async fn import_all(store: &dyn WordStore, text: &str) -> Result<AddBatchReport, StoreError> {
    let parsed = parse_import(text)?;
    tracing::info!(
        "Importing {} words ({} unreadable)",
        parsed.words.len(),
        parsed.invalid
    );

    let mut report = store.add_batch(parsed.words).await?;
    report.errors += parsed.invalid;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use lexi_types::Tier;

    #[tokio::test]
    async fn export_then_import_into_a_fresh_store() {
        let source = MemoryStore::with_entries(vec![
            WordEntry::new("audit", Tier::From600, "審計"),
            WordEntry::new("merger", Tier::From700, "合併"),
        ]);

        let document = export_all(&source).await.unwrap();
        assert_eq!(document.version, "1.0");
        assert_eq!(document.total_words, 2);

        let text = serde_json::to_string(&document).unwrap();
        assert!(text.contains("\"exportDate\""));

        let target =
            MemoryStore::with_entries(vec![WordEntry::new("audit", Tier::From600, "審計")]);
        let report = import_all(&target, &text).await.unwrap();
        assert_eq!(report.added, 1);
        assert_eq!(report.duplicates, 1);
    }

    #[test]
    fn import_requires_words_array() {
        assert!(matches!(
            parse_import(r#"{"version":"1.0","words":{}}"#),
            Err(StoreError::InvalidImport(_))
        ));
        assert!(matches!(parse_import("nope"), Err(StoreError::Serialize(_))));
    }

    #[tokio::test]
    async fn one_bad_entry_does_not_sink_the_import() {
        let text = r#"{"version":"1.0","words":[
            {"word":"audit","level":"600-700","chinese":"審計"},
            {"word":"quota","level":"expert","chinese":"配額"},
            {"word":"merger","level":"700-800","chinese":"合併"}
        ]}"#;

        let store = MemoryStore::default();
        let report = import_all(&store, text).await.unwrap();
        assert_eq!(report, AddBatchReport { added: 2, duplicates: 0, errors: 1 });

        let words: Vec<_> = store.get_all().await.unwrap().into_iter().map(|e| e.word).collect();
        assert_eq!(words, vec!["audit", "merger"]);
    }
}

use std::collections::HashSet;

use chrono::Utc;
use lexi_core::normalize_word;
use lexi_types::WordEntry;

use crate::AddBatchReport;

/// Append `batch` to `entries`, skipping words already present. Entries
/// with no usable word count as errors. New entries get `created_at`
/// stamped when it is missing.
pub(crate) fn merge_batch(entries: &mut Vec<WordEntry>, batch: Vec<WordEntry>) -> AddBatchReport {
    let mut existing: HashSet<String> = entries.iter().map(|e| normalize_word(&e.word)).collect();
    let mut report = AddBatchReport::default();
    let now = Utc::now().to_rfc3339();

    for mut entry in batch {
        let word = normalize_word(&entry.word);
        if word.is_empty() {
            report.errors += 1;
            continue;
        }

        if !existing.insert(word.clone()) {
            report.duplicates += 1;
            continue;
        }

        entry.word = word;
        if entry.created_at.is_none() {
            entry.created_at = Some(now.clone());
        }
        entries.push(entry);
        report.added += 1;
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexi_types::Tier;

    #[test]
    fn store_deduplicates_on_its_own() {
        let mut entries = vec![WordEntry::new("invoice", Tier::From300, "發票")];
        let report = merge_batch(
            &mut entries,
            vec![
                WordEntry::new("Invoice", Tier::From300, "發票"),
                WordEntry::new("ledger", Tier::From500, "總帳"),
                WordEntry::new("  ", Tier::From500, "?"),
                WordEntry::new("LEDGER", Tier::From500, "總帳"),
            ],
        );

        assert_eq!(report, AddBatchReport { added: 1, duplicates: 2, errors: 1 });
        assert_eq!(entries.len(), 2);
        assert!(entries[1].created_at.is_some());
    }
}

use std::collections::HashSet;

use lexi_types::Tier;

use crate::preprocess::normalize_word;

/// Words the endpoint keeps producing regardless of tier
pub const HIGH_FREQUENCY_WORDS: [&str; 5] = ["schedule", "meeting", "client", "report", "budget"];

/// How many avoid-list entries make it into a prompt
const PROMPT_AVOID_LIMIT: usize = 20;

const SYSTEM_PROMPT: &str = "Generate unique TOEIC words. Return only JSON format.";

/// Builds the small request sent upstream for one batch.
///
/// The avoid-list is lossy on purpose; uniqueness is enforced afterwards by
/// the deduplication filter.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    avoid_list_limit: usize,
    high_frequency: Vec<String>,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(30)
    }
}

impl PromptBuilder {
    pub fn new(avoid_list_limit: usize) -> Self {
        Self {
            avoid_list_limit,
            high_frequency: HIGH_FREQUENCY_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        SYSTEM_PROMPT
    }

    /// High-frequency words first, then `recent` (most recent first), without
    /// repeats, capped at the configured limit.
    pub fn avoid_list<'a, I>(&'a self, recent: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        let mut avoid = Vec::with_capacity(self.avoid_list_limit);

        let words = self
            .high_frequency
            .iter()
            .map(String::as_str)
            .chain(recent);

        for word in words {
            if avoid.len() >= self.avoid_list_limit {
                break;
            }

            let word = normalize_word(word);
            if word.is_empty() || !seen.insert(word.clone()) {
                continue;
            }
            avoid.push(word);
        }

        avoid
    }

    pub fn build(&self, tier: Tier, count: usize, avoid: &[String]) -> String {
        let skip = avoid
            .iter()
            .take(PROMPT_AVOID_LIMIT)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Generate {count} different TOEIC {label} words ({description}).\n\n\
             Skip these: {skip}\n\n\
             Return JSON only:\n\
             {{\"words\":[{{\"word\":\"example\",\"level\":\"{label}\",\"chinese\":\"範例\",\
             \"phonetic\":\"/ɪɡˈzɑːmpl/\",\"part_of_speech\":\"noun\",\
             \"toeic_example\":{{\"sentence\":\"Here is an example.\",\"chinese\":\"這是一個例子。\"}}}}]}}",
            label = tier.as_str(),
            description = tier.description(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avoid_list_puts_high_frequency_first() {
        let builder = PromptBuilder::new(8);
        let avoid = builder.avoid_list(["merger", "Budget", "audit", "tariff", "levy", "lease"]);
        assert_eq!(
            avoid,
            vec!["schedule", "meeting", "client", "report", "budget", "merger", "audit", "tariff"]
        );
    }

    #[test]
    fn prompt_carries_tier_count_and_format() {
        let builder = PromptBuilder::default();
        let avoid = builder.avoid_list(["merger"]);
        let prompt = builder.build(Tier::From600, 5, &avoid);

        assert!(
            prompt.starts_with("Generate 5 different TOEIC 600-700 words (advanced business words).")
        );
        assert!(prompt.contains("Skip these: schedule, meeting, client, report, budget, merger"));
        assert!(prompt.contains(r#""level":"600-700""#));

        let example = &prompt[prompt.find('{').unwrap()..];
        let value: serde_json::Value = serde_json::from_str(example).unwrap();
        assert_eq!(value["words"][0]["word"], "example");
    }

    #[test]
    fn prompt_embeds_at_most_twenty_avoid_words() {
        let builder = PromptBuilder::new(30);
        let recent: Vec<String> = (0..40).map(|i| format!("word{i}")).collect();
        let avoid = builder.avoid_list(recent.iter().map(String::as_str));
        assert_eq!(avoid.len(), 30);

        let prompt = builder.build(Tier::From300, 3, &avoid);
        assert!(prompt.contains("word14"));
        assert!(!prompt.contains("word15"));
    }
}

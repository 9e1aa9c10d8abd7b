use lexi_core::DifficultyClassifier;
use lexi_lang_english::toeic_profile;

pub fn handle_classify(word: &str, part_of_speech: &str) -> anyhow::Result<()> {
    let classifier = DifficultyClassifier::new(toeic_profile());
    let (tier, score) = classifier.classify_with_score(word, part_of_speech);

    match score {
        Some(score) => println!("{word} ({part_of_speech}): {tier}, score {score}"),
        None => println!("{word} ({part_of_speech}): {tier}, keyword table"),
    }
    Ok(())
}

pub mod backup;
pub mod examples;
pub mod importer;
pub mod keywords;
pub mod phonetic;

pub use backup::backup_words;
pub use examples::{common_phrases, example_sentence};
pub use importer::{ImportError, ListedWord, LocalImporter, parse_word_list};
pub use keywords::toeic_profile;
pub use phonetic::approximate_phonetic;

use lexi_core::{BackupWord, BackupWords};
use lexi_types::Tier;

use crate::examples::example_sentence;
use crate::phonetic::approximate_phonetic;

type Table = &'static [(&'static str, &'static str, &'static str)];

const BELOW_300: Table = &[
    ("desk", "書桌", "noun"),
    ("chair", "椅子", "noun"),
    ("open", "打開", "verb"),
    ("close", "關閉", "verb"),
    ("busy", "忙碌的", "adjective"),
    ("lunch", "午餐", "noun"),
    ("door", "門", "noun"),
    ("today", "今天", "adverb"),
];

const FROM_300: Table = &[
    ("business", "商業", "noun"),
    ("company", "公司", "noun"),
    ("service", "服務", "noun"),
    ("product", "產品", "noun"),
    ("customer", "顧客", "noun"),
    ("office", "辦公室", "noun"),
    ("meeting", "會議", "noun"),
    ("email", "電子郵件", "noun"),
    ("phone", "電話", "noun"),
    ("order", "訂單", "noun"),
    ("price", "價格", "noun"),
    ("quality", "品質", "noun"),
    ("delivery", "交貨", "noun"),
    ("contract", "合約", "noun"),
];

const FROM_500: Table = &[
    ("negotiate", "談判", "verb"),
    ("proposal", "提案", "noun"),
    ("budget", "預算", "noun"),
    ("profit", "利潤", "noun"),
    ("investment", "投資", "noun"),
    ("strategy", "策略", "noun"),
    ("analysis", "分析", "noun"),
    ("training", "培訓", "noun"),
    ("certificate", "證書", "noun"),
    ("experience", "經驗", "noun"),
];

const FROM_600: Table = &[
    ("implementation", "實施", "noun"),
    ("coordination", "協調", "noun"),
    ("partnership", "合作關係", "noun"),
    ("expansion", "擴張", "noun"),
    ("innovation", "創新", "noun"),
    ("infrastructure", "基礎設施", "noun"),
    ("supervision", "監督", "noun"),
    ("recommendation", "建議", "noun"),
    ("specification", "規格", "noun"),
];

const FROM_700: Table = &[
    ("depreciation", "折舊", "noun"),
    ("arbitration", "仲裁", "noun"),
    ("liability", "責任", "noun"),
    ("collateral", "擔保品", "noun"),
    ("subsidiary", "子公司", "noun"),
    ("stakeholder", "利害關係人", "noun"),
    ("proprietary", "專有的", "adjective"),
    ("statutory", "法定的", "adjective"),
];

const FROM_800: Table = &[
    ("underwriting", "承保", "noun"),
    ("solvency", "償付能力", "noun"),
    ("volatility", "波動性", "noun"),
    ("actuarial", "精算的", "adjective"),
    ("forecasting", "預測", "noun"),
    ("extrapolation", "推斷", "noun"),
    ("methodology", "方法論", "noun"),
];

const ABOVE_900: Table = &[
    ("disintermediation", "去中介化", "noun"),
    ("hypothecation", "抵押", "noun"),
    ("novation", "債務更新", "noun"),
    ("subrogation", "代位求償", "noun"),
    ("rescission", "撤銷", "noun"),
    ("garnishment", "扣押", "noun"),
    ("convexity", "凸性", "noun"),
];

/// Fallback vocabulary for every tier, with an approximate phonetic and a
/// business example sentence on each word
pub fn backup_words() -> BackupWords {
    [
        (Tier::Below300, BELOW_300),
        (Tier::From300, FROM_300),
        (Tier::From500, FROM_500),
        (Tier::From600, FROM_600),
        (Tier::From700, FROM_700),
        (Tier::From800, FROM_800),
        (Tier::Above900, ABOVE_900),
    ]
    .into_iter()
    .fold(BackupWords::new(), |backup, (tier, table)| {
        let words = table
            .iter()
            .map(|(word, translation, pos)| {
                BackupWord::new(word, translation, pos)
                    .with_phonetic(approximate_phonetic(word))
                    .with_example(example_sentence(word, pos, translation))
            })
            .collect();
        backup.with_list(tier, words)
    })
}

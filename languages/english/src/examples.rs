use lexi_types::{ExampleSentence, PhrasePair};

type Pairs = &'static [(&'static str, &'static str)];

const CURATED_PHRASES: &[(&str, Pairs)] = &[
    (
        "abandon",
        &[
            ("abandon ship", "棄船"),
            ("abandon hope", "放棄希望"),
            ("abandon a project", "放棄專案"),
        ],
    ),
    (
        "ability",
        &[
            ("ability to pay", "支付能力"),
            ("leadership ability", "領導能力"),
            ("technical ability", "技術能力"),
        ],
    ),
    ("abroad", &[("go abroad", "出國"), ("study abroad", "留學"), ("travel abroad", "出國旅行")]),
    (
        "absence",
        &[
            ("absence from work", "缺勤"),
            ("in the absence of", "在缺少...的情況下"),
            ("leave of absence", "請假"),
        ],
    ),
    (
        "accept",
        &[
            ("accept an offer", "接受提議"),
            ("accept responsibility", "承擔責任"),
            ("widely accepted", "廣泛接受"),
        ],
    ),
    (
        "access",
        &[
            ("access to information", "獲取資訊"),
            ("easy access", "容易進入"),
            ("restricted access", "限制進入"),
        ],
    ),
    (
        "account",
        &[("bank account", "銀行帳戶"), ("take into account", "考慮到"), ("on account of", "由於")],
    ),
    (
        "achieve",
        &[
            ("achieve success", "取得成功"),
            ("achieve goals", "達成目標"),
            ("achieve results", "取得成果"),
        ],
    ),
    (
        "acquire",
        &[
            ("acquire knowledge", "獲得知識"),
            ("acquire skills", "習得技能"),
            ("acquire a company", "收購公司"),
        ],
    ),
    (
        "adjust",
        &[
            ("adjust to", "適應"),
            ("adjust the schedule", "調整時程"),
            ("price adjustment", "價格調整"),
        ],
    ),
];

const CURATED_EXAMPLES: Pairs = &[
    (
        "abandon",
        "The company decided to abandon the unprofitable project after two quarters of losses.|在連續兩季虧損後，公司決定放棄這個無利可圖的專案。",
    ),
    (
        "abide",
        "All employees must abide by the company's code of conduct.|所有員工都必須遵守公司的行為準則。",
    ),
    (
        "ability",
        "Her ability to negotiate contracts has saved the company millions.|她的合約談判能力為公司節省了數百萬。",
    ),
    (
        "abroad",
        "Our marketing director frequently travels abroad to meet international clients.|我們的行銷總監經常出國會見國際客戶。",
    ),
    (
        "absence",
        "His frequent absence from team meetings has affected project coordination.|他經常缺席團隊會議影響了專案協調。",
    ),
    (
        "accelerate",
        "Digital transformation will accelerate our business growth.|數位轉型將加速我們的業務成長。",
    ),
    (
        "accept",
        "We are pleased to accept your terms and conditions.|我們很高興接受您的條款和條件。",
    ),
    (
        "access",
        "Remote employees can access the company database through VPN.|遠端員工可以通過 VPN 存取公司資料庫。",
    ),
    (
        "accommodate",
        "The conference room can accommodate up to 50 participants.|會議室可容納多達 50 名參與者。",
    ),
    (
        "accompany",
        "A detailed invoice must accompany all expense reports.|所有費用報告都必須附上詳細的發票。",
    ),
    (
        "account",
        "The finance team is reviewing all client accounts for discrepancies.|財務團隊正在審查所有客戶帳戶是否有差異。",
    ),
    (
        "accurate",
        "Accurate financial forecasting is essential for business planning.|準確的財務預測對業務規劃至關重要。",
    ),
    (
        "achieve",
        "We achieved a 15% increase in productivity this quarter.|本季我們的生產力提高了 15%。",
    ),
    (
        "acquire",
        "The corporation plans to acquire three startups this year.|該公司計劃今年收購三家新創公司。",
    ),
    ("actual", "The actual costs exceeded the initial budget by 20%.|實際成本超出初始預算 20%。"),
    (
        "adapt",
        "Companies must adapt quickly to changing market conditions.|公司必須快速適應不斷變化的市場條件。",
    ),
    (
        "adjust",
        "We need to adjust our pricing strategy for the Asian market.|我們需要調整亞洲市場的定價策略。",
    ),
    (
        "advantage",
        "Our competitive advantage lies in superior customer service.|我們的競爭優勢在於卓越的客戶服務。",
    ),
    (
        "affect",
        "Supply chain disruptions will affect delivery schedules.|供應鏈中斷將影響交貨時間表。",
    ),
    (
        "agenda",
        "Please submit agenda items for next week's board meeting.|請提交下週董事會會議的議程項目。",
    ),
    ("agree", "Both parties agree to the revised payment terms.|雙方同意修訂後的付款條件。"),
    (
        "available",
        "Technical support is available 24/7 for premium customers.|高級客戶可享受全天候技術支援。",
    ),
    (
        "avoid",
        "To avoid delays, submit all documents before the deadline.|為避免延誤，請在截止日期前提交所有文件。",
    ),
];

/// `{w}` is the English word, `{t}` its translation
const NOUN_TEMPLATES: Pairs = &[
    ("The {w} was discussed in detail during the board meeting.", "董事會會議上詳細討論了{t}。"),
    (
        "Our {w} has improved significantly since last quarter.",
        "自上季度以來，我們的{t}有了顯著改善。",
    ),
    ("The new {w} policy will be implemented next month.", "新的{t}政策將於下個月實施。"),
    ("We need to review the {w} before making a decision.", "在做決定之前，我們需要審查{t}。"),
    ("The {w} exceeded our initial expectations.", "{t}超出了我們最初的預期。"),
];

const VERB_TEMPLATES: Pairs = &[
    ("The management team will {w} the proposal tomorrow.", "管理團隊明天將{t}這個提案。"),
    ("We must {w} our strategy to remain competitive.", "我們必須{t}我們的策略以保持競爭力。"),
    ("Employees are encouraged to {w} innovative solutions.", "鼓勵員工{t}創新的解決方案。"),
    ("The company decided to {w} its operations overseas.", "公司決定{t}其海外業務。"),
    ("Please {w} the documents before the deadline.", "請在截止日期前{t}文件。"),
];

const ADJECTIVE_TEMPLATES: Pairs = &[
    ("The {w} performance exceeded quarterly targets.", "{t}的表現超過了季度目標。"),
    ("We received {w} feedback from our clients.", "我們收到了客戶{t}的回饋。"),
    ("The {w} market conditions affected our sales.", "{t}的市場條件影響了我們的銷售。"),
    ("This is a {w} opportunity for business expansion.", "這是業務擴展的{t}機會。"),
    ("The {w} results were presented to stakeholders.", "{t}的結果已向利益相關者展示。"),
];

const ADVERB_TEMPLATES: Pairs = &[
    ("The project was {w} completed ahead of schedule.", "專案{t}地提前完成了。"),
    ("Sales have increased {w} over the past year.", "過去一年銷售額{t}地增長。"),
    ("The team worked {w} to meet the deadline.", "團隊{t}地工作以趕上截止日期。"),
    ("Customer satisfaction has improved {w}.", "客戶滿意度{t}地提高了。"),
    ("We {w} appreciate your business partnership.", "我們{t}地感謝您的業務合作。"),
];

const PREPOSITION_TEMPLATES: Pairs = &[
    ("The meeting will be held {w} the conference room.", "會議將{t}會議室舉行。"),
    ("Please submit the report {w} Friday.", "請{t}週五提交報告。"),
    ("The office is located {w} the financial district.", "辦公室位於{t}金融區。"),
    ("We'll discuss this {w} the next meeting.", "我們將{t}下次會議討論這個問題。"),
];

const CONJUNCTION_TEMPLATES: Pairs = &[
    (
        "We'll proceed with the plan {w} we receive approval.",
        "{t}我們收到批准，我們將繼續執行計劃。",
    ),
    ("The project was successful {w} there were challenges.", "{t}有挑戰，專案還是成功了。"),
];

/// Curated collocations when we have them, otherwise two generic
/// phrases for nouns, verbs and adjectives
pub fn common_phrases(word: &str, part_of_speech: &str) -> Vec<PhrasePair> {
    if let Some((_, pairs)) = CURATED_PHRASES.iter().find(|(w, _)| *w == word) {
        return pairs.iter().map(|(p, t)| phrase(p.to_string(), t.to_string())).collect();
    }

    let generic: [(&str, &str); 2] = match part_of_speech {
        "noun" => [("the ", "這個"), ("a ", "一個")],
        "verb" => [("to ", "去"), ("will ", "將會")],
        "adjective" => [("very ", "非常"), ("more ", "更加")],
        _ => return Vec::new(),
    };

    generic
        .iter()
        .map(|(en, zh)| phrase(format!("{en}{word}"), format!("{zh}{word}")))
        .collect()
}

/// Business-context example sentence. Templates are picked by the first
/// letter of the word so a list gets some variety.
pub fn example_sentence(word: &str, part_of_speech: &str, translation: &str) -> ExampleSentence {
    if let Some((_, text)) = CURATED_EXAMPLES.iter().find(|(w, _)| *w == word) {
        let (sentence, chinese) = text.split_once('|').unwrap_or((*text, ""));
        return example(sentence.to_string(), chinese.to_string());
    }

    let templates = match part_of_speech {
        "noun" => NOUN_TEMPLATES,
        "verb" => VERB_TEMPLATES,
        "adjective" => ADJECTIVE_TEMPLATES,
        "adverb" => ADVERB_TEMPLATES,
        "preposition" => PREPOSITION_TEMPLATES,
        "conjunction" => CONJUNCTION_TEMPLATES,
        _ => {
            return example(
                format!("The word \"{word}\" is commonly used in business communications."),
                format!("\"{word}\"（{translation}）這個詞常用於商業溝通中。"),
            );
        }
    };

    let first = word.chars().next().map_or(0, |c| c as usize);
    let (sentence, chinese) = templates[first % templates.len()];
    example(
        sentence.replace("{w}", word),
        chinese.replace("{t}", translation),
    )
}

fn phrase(phrase: String, translation: String) -> PhrasePair {
    PhrasePair { phrase, translation }
}

fn example(sentence: String, translation: String) -> ExampleSentence {
    ExampleSentence { sentence, translation }
}

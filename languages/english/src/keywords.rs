use lexi_core::{ClassifierProfile, TierRule};
use lexi_types::Tier;

const BELOW_300: &[&str] = &[
    "a", "an", "the", "be", "is", "are", "was", "were", "have", "has", "had",
    "do", "does", "did", "will", "would", "can", "could", "may", "might",
    "go", "come", "see", "get", "make", "take", "give", "find", "know", "think",
    "want", "need", "use", "work", "call", "try", "ask", "feel", "become", "leave",
    "put", "mean", "keep", "let", "begin", "seem", "help", "show", "hear", "play",
    "run", "move", "live", "believe", "bring", "happen", "write", "sit", "stand",
    "good", "bad", "new", "old", "big", "small", "long", "short", "high", "low",
    "right", "wrong", "same", "different", "important", "next", "early", "late",
    "young", "few", "many", "much", "little", "other", "own", "last", "first",
];

const FROM_300: &[&str] = &[
    "business", "company", "office", "meeting", "email", "phone", "customer",
    "service", "product", "price", "cost", "sale", "buy", "sell", "pay",
    "order", "delivery", "contract", "agreement", "deal", "offer", "request",
    "report", "document", "file", "copy", "print", "send", "receive", "schedule",
    "plan", "project", "task", "job", "work", "employee", "staff", "manager",
    "department", "team", "client", "account", "bank", "money", "payment",
    "invoice", "receipt", "budget", "profit", "loss", "tax", "discount",
    "warehouse", "inventory", "stock", "supply", "demand", "market", "trade",
];

const FROM_500: &[&str] = &[
    "negotiate", "proposal", "analysis", "strategy", "marketing", "advertising",
    "promotion", "campaign", "investment", "finance", "accounting", "audit",
    "management", "administration", "organization", "communication", "presentation",
    "conference", "seminar", "training", "development", "improvement", "performance",
    "evaluation", "assessment", "review", "feedback", "recommendation", "suggestion",
    "policy", "procedure", "regulation", "compliance", "standard", "quality",
    "efficiency", "productivity", "objective", "goal", "target", "achievement",
    "responsibility", "authority", "decision", "approval", "permission", "requirement",
];

const FROM_600: &[&str] = &[
    "implementation", "infrastructure", "acquisition", "merger", "partnership",
    "collaboration", "coordination", "supervision", "delegation", "optimization",
    "restructuring", "expansion", "diversification", "consolidation", "integration",
    "innovation", "technology", "automation", "digitalization", "transformation",
    "sustainability", "profitability", "competitiveness", "benchmarking",
    "outsourcing", "procurement", "logistics", "distribution", "manufacturing",
    "specification", "certification", "verification", "validation", "authorization",
    "confidentiality", "transparency", "accountability", "governance", "stewardship",
];

const FROM_700: &[&str] = &[
    "amortization", "depreciation", "capitalization", "liquidation", "arbitration",
    "litigation", "indemnification", "jurisdiction", "liability", "fiduciary",
    "collateral", "derivative", "equity", "leverage", "portfolio", "dividend",
    "stakeholder", "shareholder", "subsidiary", "affiliate", "conglomerate",
    "monopoly", "oligopoly", "syndicate", "consortium", "franchise",
    "intellectual", "proprietary", "patent", "trademark", "copyright",
    "compliance", "regulatory", "statutory", "mandatory", "discretionary",
];

const FROM_800: &[&str] = &[
    "securitization", "derivatives", "commodities", "futures", "hedging",
    "underwriting", "actuarial", "solvency", "liquidity", "volatility",
    "macroeconomic", "microeconomic", "econometric", "quantitative", "qualitative",
    "synergy", "paradigm", "methodology", "framework", "algorithm",
    "optimization", "simulation", "modeling", "forecasting", "extrapolation",
    "correlation", "regression", "variance", "deviation", "probability",
];

const ABOVE_900: &[&str] = &[
    "disintermediation", "recapitalization", "demutualization", "securitization",
    "collateralization", "subordination", "hypothecation", "novation",
    "indemnification", "subrogation", "rescission", "estoppel", "garnishment",
    "amortization", "accretion", "convexity", "duration", "immunization",
    "stochastic", "heuristic", "asymptotic", "heteroscedastic", "multicollinearity",
];

const PREFIXES: &[(&str, u32)] = &[
    ("un", 1), ("re", 1), ("in", 1), ("dis", 1), ("pre", 1),
    ("anti", 2), ("inter", 2), ("trans", 2), ("super", 2),
    ("micro", 3), ("macro", 3), ("pseudo", 3), ("quasi", 3),
];

const SUFFIXES: &[(&str, u32)] = &[
    ("ing", 1), ("ed", 1), ("er", 1), ("est", 1), ("ly", 1),
    ("tion", 2), ("sion", 2), ("ment", 2), ("ness", 2), ("ity", 2),
    ("ization", 3), ("ological", 3), ("ification", 3), ("aneous", 3),
];

const BUSINESS_TERMS: &[&str] = &[
    "business", "company", "corporate", "finance", "market", "trade",
    "commerce", "industry", "economy", "management", "executive",
    "professional", "commercial", "enterprise", "organization",
];

const TECHNICAL_PATTERNS: &[&str] = &[
    "ization", "ological", "ification", "metric", "analysis",
    "synthesis", "hypothesis", "algorithm", "systematic",
];

/// Keyword, affix and domain tables for TOEIC business vocabulary.
///
/// Several words appear in more than one keyword table (`compliance`,
/// `optimization`, `amortization`...); the classifier resolves those to the
/// lowest tier. Affix lists keep their declared order since the first
/// matching affix is the one that counts.
pub fn toeic_profile() -> ClassifierProfile {
    let keyword_rules = [
        (Tier::Below300, BELOW_300),
        (Tier::From300, FROM_300),
        (Tier::From500, FROM_500),
        (Tier::From600, FROM_600),
        (Tier::From700, FROM_700),
        (Tier::From800, FROM_800),
        (Tier::Above900, ABOVE_900),
    ]
    .into_iter()
    .map(|(tier, words)| TierRule::new(tier, words.iter().copied()))
    .collect();

    ClassifierProfile {
        keyword_rules,
        prefixes: weighted(PREFIXES),
        suffixes: weighted(SUFFIXES),
        business_terms: owned(BUSINESS_TERMS),
        technical_patterns: owned(TECHNICAL_PATTERNS),
    }
}

fn weighted(table: &[(&str, u32)]) -> Vec<(String, u32)> {
    table.iter().map(|(affix, w)| (affix.to_string(), *w)).collect()
}

fn owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

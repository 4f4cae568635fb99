//! Plural-form selection rules.
//!
//! Numerus messages carry one translation variant per grammatical number of
//! the target language; which variant applies for a given count is decided
//! by the language's plural rule. The table below covers the rule families
//! of the languages shipped by typical Qt application catalogs. Unknown
//! languages get the Germanic two-form rule, and the caller clamps any
//! index to the last available form, so selection is total either way.

/// Plural rule family of a target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// One form for every count (Japanese, Chinese, Korean, Thai, ...).
    Single,
    /// Two forms, the first used only for n == 1 (German, English, Dutch, ...).
    TwoFormsNotOne,
    /// Two forms, the first used for n <= 1 (French, Brazilian Portuguese, ...).
    TwoFormsUpToOne,
    /// Three forms: 1 / 2..4 / other (Czech, Slovak).
    ThreeFormsCzech,
    /// Three forms keyed on the last digits (Russian, Ukrainian, Serbian, ...).
    ThreeFormsEastSlavic,
    /// Three forms: 1 / last-digit 2..4 except 12..14 / other (Polish).
    ThreeFormsPolish,
}

impl PluralRule {
    /// Rule for a language code. Only the primary subtag is considered,
    /// so `de_DE` and `de` select the same rule.
    pub fn for_language(code: &str) -> PluralRule {
        let primary = primary_subtag(code);
        match primary.as_str() {
            "ja" | "zh" | "ko" | "th" | "vi" | "id" | "ms" => PluralRule::Single,
            "fr" | "tr" | "pt" => PluralRule::TwoFormsUpToOne,
            "cs" | "sk" => PluralRule::ThreeFormsCzech,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => PluralRule::ThreeFormsEastSlavic,
            "pl" => PluralRule::ThreeFormsPolish,
            _ => PluralRule::TwoFormsNotOne,
        }
    }

    /// Number of plural forms a finished numerus message must provide.
    pub fn form_count(&self) -> usize {
        match self {
            PluralRule::Single => 1,
            PluralRule::TwoFormsNotOne | PluralRule::TwoFormsUpToOne => 2,
            PluralRule::ThreeFormsCzech
            | PluralRule::ThreeFormsEastSlavic
            | PluralRule::ThreeFormsPolish => 3,
        }
    }

    /// Index of the form that applies for a count.
    pub fn index_for(&self, n: u64) -> usize {
        match self {
            PluralRule::Single => 0,
            PluralRule::TwoFormsNotOne => {
                if n == 1 {
                    0
                } else {
                    1
                }
            }
            PluralRule::TwoFormsUpToOne => {
                if n <= 1 {
                    0
                } else {
                    1
                }
            }
            PluralRule::ThreeFormsCzech => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
            PluralRule::ThreeFormsEastSlavic => {
                let tens = n % 100;
                let units = n % 10;
                if units == 1 && tens != 11 {
                    0
                } else if (2..=4).contains(&units) && !(12..=14).contains(&tens) {
                    1
                } else {
                    2
                }
            }
            PluralRule::ThreeFormsPolish => {
                let tens = n % 100;
                let units = n % 10;
                if n == 1 {
                    0
                } else if (2..=4).contains(&units) && !(12..=14).contains(&tens) {
                    1
                } else {
                    2
                }
            }
        }
    }
}

/// Lowercased primary subtag of a language code: `de_DE` -> `de`,
/// `zh-CN` -> `zh`.
pub fn primary_subtag(code: &str) -> String {
    code.split(['_', '-'])
        .next()
        .unwrap_or(code)
        .to_ascii_lowercase()
}

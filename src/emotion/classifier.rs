//! Rule-based emotion classification.
//!
//! The classifier is a data table: an ordered list of `(EmotionCategory, stems)`
//! rules. The first rule whose stems occur in the lowercased text wins, so rule
//! order is the tie-break policy. Text that matches no rule is Neutral.

use super::EmotionCategory;

/// Anything that can assign an emotion to diary text.
///
/// Implementations must be total: every input, including the empty string,
/// yields a category.
pub trait EmotionClassifier {
    fn classify(&self, text: &str) -> EmotionCategory;
}

/// One row of the keyword table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    pub emotion: EmotionCategory,
    pub stems: Vec<String>,
}

/// Classifies text by substring matching against an ordered keyword table.
///
/// # Examples
///
/// ```
/// use emodiary::emotion::{EmotionCategory, EmotionClassifier, KeywordClassifier};
///
/// let classifier = KeywordClassifier::default();
/// assert_eq!(classifier.classify("오늘 정말 행복했다"), EmotionCategory::Joy);
/// assert_eq!(classifier.classify("행복했지만 조금 슬프다"), EmotionCategory::Sadness);
/// assert_eq!(classifier.classify(""), EmotionCategory::Neutral);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordClassifier {
    rules: Vec<KeywordRule>,
}

const SADNESS_STEMS: &[&str] = &["슬프", "우울", "힘들", "아프", "괴로", "별로", "안좋"];
const JOY_STEMS: &[&str] = &["기쁘", "좋", "행복", "즐거", "신나", "최고", "완벽"];
const ANGER_STEMS: &[&str] = &["화나", "짜증", "분노", "열받", "빡쳐"];
const FEAR_STEMS: &[&str] = &["무섭", "두렵", "공포", "걱정"];
const SURPRISE_STEMS: &[&str] = &["놀라", "깜짝", "예상치 못한", "갑자기"];
const DISGUST_STEMS: &[&str] = &["역겹", "구역", "더럽", "혐오"];

impl KeywordClassifier {
    /// Builds a classifier from rules, evaluated in the given order.
    ///
    /// Stems are lowercased once here so matching only normalizes the input text.
    /// Empty stems are dropped, since they would match every text.
    pub fn new<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = (EmotionCategory, Vec<S>)>,
        S: AsRef<str>,
    {
        let rules = rules
            .into_iter()
            .map(|(emotion, stems)| KeywordRule {
                emotion,
                stems: stems
                    .iter()
                    .map(|stem| stem.as_ref().to_lowercase())
                    .filter(|stem| !stem.is_empty())
                    .collect(),
            })
            .collect();
        KeywordClassifier { rules }
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }
}

impl Default for KeywordClassifier {
    /// The built-in Korean keyword table, in priority order
    /// Sadness, Joy, Anger, Fear, Surprise, Disgust.
    fn default() -> Self {
        KeywordClassifier::new([
            (EmotionCategory::Sadness, SADNESS_STEMS.to_vec()),
            (EmotionCategory::Joy, JOY_STEMS.to_vec()),
            (EmotionCategory::Anger, ANGER_STEMS.to_vec()),
            (EmotionCategory::Fear, FEAR_STEMS.to_vec()),
            (EmotionCategory::Surprise, SURPRISE_STEMS.to_vec()),
            (EmotionCategory::Disgust, DISGUST_STEMS.to_vec()),
        ])
    }
}

impl EmotionClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> EmotionCategory {
        let normalized = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.stems.iter().any(|stem| normalized.contains(stem.as_str())))
            .map(|rule| rule.emotion)
            .unwrap_or(EmotionCategory::Neutral)
    }
}

impl<C: EmotionClassifier + ?Sized> EmotionClassifier for &C {
    fn classify(&self, text: &str) -> EmotionCategory {
        (**self).classify(text)
    }
}

impl<C: EmotionClassifier + ?Sized> EmotionClassifier for Box<C> {
    fn classify(&self, text: &str) -> EmotionCategory {
        (**self).classify(text)
    }
}

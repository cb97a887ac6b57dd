//! Emotion categories and their presentation.
//!
//! Every diary entry is tagged with exactly one [`EmotionCategory`]. The glyph and
//! image key shown for an entry are always derived from the category through
//! [`presentation_for`] and are never stored alongside the entry.

pub mod classifier;

pub use classifier::{EmotionClassifier, KeywordClassifier};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of emotions an entry can be classified as.
///
/// The declaration order is significant: it is the enumeration order used for
/// tie-breaks in statistics and for the axis order of the radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "&'static str", from = "String")]
pub enum EmotionCategory {
    Joy,
    Sadness,
    Anger,
    Surprise,
    Fear,
    Disgust,
    Neutral,
}

/// Display data for an emotion: an emoji glyph and an image resource key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub glyph: &'static str,
    pub image_key: &'static str,
}

impl EmotionCategory {
    /// All categories in enumeration order.
    pub const ALL: [EmotionCategory; 7] = [
        EmotionCategory::Joy,
        EmotionCategory::Sadness,
        EmotionCategory::Anger,
        EmotionCategory::Surprise,
        EmotionCategory::Fear,
        EmotionCategory::Disgust,
        EmotionCategory::Neutral,
    ];

    /// Number of categories.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this category in [`EmotionCategory::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable lowercase name, used in persisted records.
    pub fn name(self) -> &'static str {
        match self {
            EmotionCategory::Joy => "joy",
            EmotionCategory::Sadness => "sadness",
            EmotionCategory::Anger => "anger",
            EmotionCategory::Surprise => "surprise",
            EmotionCategory::Fear => "fear",
            EmotionCategory::Disgust => "disgust",
            EmotionCategory::Neutral => "neutral",
        }
    }

    /// Korean label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            EmotionCategory::Joy => "기쁨",
            EmotionCategory::Sadness => "슬픔",
            EmotionCategory::Anger => "화남",
            EmotionCategory::Surprise => "놀람",
            EmotionCategory::Fear => "두려움",
            EmotionCategory::Disgust => "혐오",
            EmotionCategory::Neutral => "중립",
        }
    }

    /// Looks a category up by its lowercase name or its Korean label.
    ///
    /// ```
    /// use emodiary::EmotionCategory;
    ///
    /// assert_eq!(EmotionCategory::from_name("joy"), Some(EmotionCategory::Joy));
    /// assert_eq!(EmotionCategory::from_name("슬픔"), Some(EmotionCategory::Sadness));
    /// assert_eq!(EmotionCategory::from_name("boredom"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|emotion| emotion.name().eq_ignore_ascii_case(name) || emotion.label() == name)
    }

    /// Glyph and image key for this category.
    pub fn presentation(self) -> Presentation {
        presentation_for(self)
    }

    /// Encouraging message shown after an entry with this emotion is saved.
    pub fn feedback(self) -> &'static str {
        match self {
            EmotionCategory::Joy => "오늘 정말 행복한 하루를 보내셨네요! 😊 이런 긍정적인 에너지가 계속 이어지길 바라요. 기쁜 순간들을 더 많이 만들어가시길 응원합니다! 내일도 웃음 가득한 하루가 되시길 바라요! ✨",
            EmotionCategory::Sadness => "힘든 하루였군요. 😢 슬픈 감정도 소중한 감정 중 하나예요. 충분히 느끼고 표현하는 것이 중요해요. 내일은 조금 더 나은 하루가 되길 바라며, 언제든 힘이 필요하시면 주변 사람들에게 도움을 요청하세요. 당신은 혼자가 아니에요. 💙",
            EmotionCategory::Anger => "오늘 화가 나는 일이 있으셨나 보네요. 😠 화난 감정을 일기로 표현하신 것만으로도 훌륭해요. 깊게 숨을 들이쉬고 내쉬며 마음을 진정시켜보세요. 화는 일시적인 감정이니까요. 내일은 더 평온한 마음으로 시작하실 수 있을 거예요! 🌱",
            EmotionCategory::Surprise => "예상치 못한 일들이 많았던 하루였나 보네요! 😲 놀라운 일들이 때로는 새로운 기회가 되기도 해요. 변화와 예상치 못한 상황들을 긍정적으로 받아들이시는 모습이 멋져요. 앞으로도 열린 마음으로 새로운 경험들을 맞이하세요! 🌟",
            EmotionCategory::Fear => "무서운 일이나 걱정되는 일이 있으셨군요. 😨 두려움을 느끼는 것은 자연스러운 일이에요. 용기란 두려움이 없는 것이 아니라 두려움을 느끼면서도 앞으로 나아가는 것이죠. 한 걸음씩 천천히 나아가시면 돼요. 당신은 생각보다 강한 사람이에요! 💪",
            EmotionCategory::Disgust => "불쾌한 일이 있으셨나 보네요. 🤢 이런 감정도 우리가 느낄 수 있는 자연스러운 감정이에요. 부정적인 감정을 일기로 표현하신 것이 좋은 방법이었어요. 이런 감정들을 건강하게 처리하고 넘어가시길 바라요. 내일은 더 좋은 일들이 기다리고 있을 거예요! 🌈",
            EmotionCategory::Neutral => "평온한 하루를 보내셨네요. 😐 때로는 잔잔하고 평온한 날들도 필요해요. 큰 감정의 기복 없이 안정적인 하루를 보내신 것도 의미가 있어요. 이런 평온함 속에서 자신을 돌아보고 내일을 준비하는 시간을 가져보세요. 🕊️",
        }
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<EmotionCategory> for &'static str {
    fn from(emotion: EmotionCategory) -> Self {
        emotion.name()
    }
}

// Unknown names in stored data degrade to Neutral rather than failing the load.
impl From<String> for EmotionCategory {
    fn from(name: String) -> Self {
        EmotionCategory::from_name(&name).unwrap_or(EmotionCategory::Neutral)
    }
}

/// Returns the glyph and image key for an emotion.
pub fn presentation_for(emotion: EmotionCategory) -> Presentation {
    let (glyph, image_key) = match emotion {
        EmotionCategory::Joy => ("😊", "happy"),
        EmotionCategory::Sadness => ("😢", "sad"),
        EmotionCategory::Anger => ("😠", "angry"),
        EmotionCategory::Surprise => ("😲", "surprised"),
        EmotionCategory::Fear => ("😨", "fear"),
        EmotionCategory::Disgust => ("🤢", "disgust"),
        EmotionCategory::Neutral => ("😐", "neutral"),
    };
    Presentation { glyph, image_key }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_enumeration_order() {
        for (position, emotion) in EmotionCategory::ALL.iter().enumerate() {
            assert_eq!(emotion.index(), position);
        }
        assert_eq!(EmotionCategory::COUNT, 7);
    }

    #[test]
    fn test_presentation_table() {
        let expected = [
            (EmotionCategory::Joy, "😊", "happy"),
            (EmotionCategory::Sadness, "😢", "sad"),
            (EmotionCategory::Anger, "😠", "angry"),
            (EmotionCategory::Surprise, "😲", "surprised"),
            (EmotionCategory::Fear, "😨", "fear"),
            (EmotionCategory::Disgust, "🤢", "disgust"),
            (EmotionCategory::Neutral, "😐", "neutral"),
        ];

        for (emotion, glyph, image_key) in expected {
            let presentation = presentation_for(emotion);
            assert_eq!(presentation.glyph, glyph);
            assert_eq!(presentation.image_key, image_key);
            assert_eq!(emotion.presentation(), presentation);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&EmotionCategory::Surprise).unwrap();
        assert_eq!(json, "\"surprise\"");

        let parsed: EmotionCategory = serde_json::from_str("\"fear\"").unwrap();
        assert_eq!(parsed, EmotionCategory::Fear);
    }

    #[test]
    fn test_deserialize_accepts_korean_labels() {
        let parsed: EmotionCategory = serde_json::from_str("\"혐오\"").unwrap();
        assert_eq!(parsed, EmotionCategory::Disgust);
    }

    #[test]
    fn test_deserialize_unknown_name_falls_back_to_neutral() {
        let parsed: EmotionCategory = serde_json::from_str("\"melancholy\"").unwrap();
        assert_eq!(parsed, EmotionCategory::Neutral);
    }

    #[test]
    fn test_feedback_mentions_glyph() {
        for emotion in EmotionCategory::ALL {
            assert!(emotion.feedback().contains(emotion.presentation().glyph));
        }
    }
}

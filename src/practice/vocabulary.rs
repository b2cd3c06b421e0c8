//! 연습 낱말 목록과 자판 배열 검증

use serde::Serialize;

use crate::keyboard::matcher::resolve_target_key;
use crate::practice::mode::PracticeMode;

/// 한글 연습 낱말
pub const KOREAN_WORDS: [&str; 12] = [
    "사과", "바나나", "딸기", "포도", "수박", "오렌지", "엄마", "아빠", "하늘", "바다", "코끼리", "호랑이",
];

/// 영어 연습 낱말과 한국어 뜻
pub const ENGLISH_WORDS: [(&str, &str); 25] = [
    ("run", "달리다"),
    ("walk", "걷다"),
    ("eat", "먹다"),
    ("drink", "마시다"),
    ("sleep", "자다"),
    ("read", "읽다"),
    ("write", "쓰다"),
    ("sing", "노래하다"),
    ("dance", "춤추다"),
    ("swim", "수영하다"),
    ("jump", "점프하다"),
    ("fly", "날다"),
    ("play", "놀다"),
    ("study", "공부하다"),
    ("work", "일하다"),
    ("think", "생각하다"),
    ("see", "보다"),
    ("hear", "듣다"),
    ("speak", "말하다"),
    ("make", "만들다"),
    ("give", "주다"),
    ("take", "가지다"),
    ("open", "열다"),
    ("close", "닫다"),
    ("help", "돕다"),
];

/// 연습 낱말 하나
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct WordEntry {
    /// 화면에 보이고 입력해야 하는 낱말
    pub text: String,
    /// 뜻 (영어 낱말에만 있음)
    pub translation: Option<String>,
}

impl WordEntry {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            translation: None,
        }
    }

    pub fn with_translation(text: &str, translation: &str) -> Self {
        Self {
            text: text.to_string(),
            translation: Some(translation.to_string()),
        }
    }
}

/// 연습 모드의 낱말 목록
pub fn words_for(mode: PracticeMode) -> Vec<WordEntry> {
    match mode {
        PracticeMode::KoreanLetters | PracticeMode::KoreanWords => {
            KOREAN_WORDS.iter().map(|w| WordEntry::new(w)).collect()
        }
        PracticeMode::EnglishWords => ENGLISH_WORDS
            .iter()
            .map(|(en, ko)| WordEntry::with_translation(en, ko))
            .collect(),
    }
}

/// 낱말 목록 검증 오류
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// 빈 낱말
    EmptyWord,
    /// 자판 배열로 입력할 수 없는 문자
    UnrepresentableCharacter {
        word: String,
        character: char,
        layout: String,
    },
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::EmptyWord => write!(f, "빈 낱말은 연습할 수 없음"),
            ContentError::UnrepresentableCharacter {
                word,
                character,
                layout,
            } => write!(
                f,
                "'{}'의 '{}'는 {} 자판으로 입력할 수 없음",
                word, character, layout
            ),
        }
    }
}

impl std::error::Error for ContentError {}

/// 낱말 하나가 모드의 자판으로 끝까지 입력 가능한지 검사
pub fn validate_entry(entry: &WordEntry, mode: PracticeMode) -> Result<(), ContentError> {
    let sequence = mode.sequence_for(&entry.text);
    if sequence.is_empty() {
        return Err(ContentError::EmptyWord);
    }
    let layout = mode.layout();
    match sequence
        .keys()
        .iter()
        .find(|c| resolve_target_key(**c, layout).is_none())
    {
        Some(&character) => Err(ContentError::UnrepresentableCharacter {
            word: entry.text.clone(),
            character,
            layout: layout.name.clone(),
        }),
        None => Ok(()),
    }
}

/// 모드의 전체 낱말 목록 검증 (콘텐츠 작성 시점 검사)
pub fn validate_vocabulary(mode: PracticeMode) -> Result<(), ContentError> {
    words_for(mode)
        .iter()
        .try_for_each(|entry| validate_entry(entry, mode))
}

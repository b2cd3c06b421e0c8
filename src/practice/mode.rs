//! 연습 모드

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::decomposer::KeystrokeSequence;
use crate::keyboard::layout::{Layout, ENGLISH_101, KOREAN_101};

/// 연습 모드
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PracticeMode {
    /// 한글 자음/모음: 낱말을 자모 단위로 입력
    KoreanLetters,
    /// 한글 낱말: 글자(음절) 단위로 맞음/틀림 표시
    KoreanWords,
    /// 영어 낱말
    #[default]
    EnglishWords,
}

/// 맞음/틀림 표시가 붙는 단위
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackGranularity {
    /// 키 입력 위치마다
    Keystroke,
    /// 화면의 글자마다
    Syllable,
}

impl PracticeMode {
    pub const ALL: [PracticeMode; 3] = [
        PracticeMode::KoreanLetters,
        PracticeMode::KoreanWords,
        PracticeMode::EnglishWords,
    ];

    /// 모드가 사용하는 자판 배열
    pub fn layout(&self) -> &'static Layout {
        match self {
            PracticeMode::KoreanLetters | PracticeMode::KoreanWords => &*KOREAN_101,
            PracticeMode::EnglishWords => &*ENGLISH_101,
        }
    }

    /// 낱말의 입력 순서
    pub fn sequence_for(&self, word: &str) -> KeystrokeSequence {
        match self {
            PracticeMode::KoreanLetters | PracticeMode::KoreanWords => {
                KeystrokeSequence::decompose(word)
            }
            PracticeMode::EnglishWords => KeystrokeSequence::characters(word),
        }
    }

    pub fn granularity(&self) -> FeedbackGranularity {
        match self {
            PracticeMode::KoreanWords => FeedbackGranularity::Syllable,
            PracticeMode::KoreanLetters | PracticeMode::EnglishWords => {
                FeedbackGranularity::Keystroke
            }
        }
    }

    /// 메뉴에 보이는 이름
    pub fn label(&self) -> &'static str {
        match self {
            PracticeMode::KoreanLetters => "자음/모음",
            PracticeMode::KoreanWords => "낱말 연습",
            PracticeMode::EnglishWords => "English",
        }
    }
}

impl fmt::Display for PracticeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PracticeMode::KoreanLetters => "korean-letters",
            PracticeMode::KoreanWords => "korean-words",
            PracticeMode::EnglishWords => "english",
        };
        f.write_str(name)
    }
}

impl FromStr for PracticeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "korean-letters" | "letters" | "cv" => Ok(PracticeMode::KoreanLetters),
            "korean-words" | "korean" | "words" => Ok(PracticeMode::KoreanWords),
            "english" | "english-words" | "en" => Ok(PracticeMode::EnglishWords),
            other => Err(format!(
                "알 수 없는 연습 모드: {} (korean-letters, korean-words, english)",
                other
            )),
        }
    }
}

//! 호환용 자모 문자 -> 자모 분류

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::core::unicode::{CHOSEONG, JONGSEONG, JUNGSEONG};

/// 자모 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jamo {
    /// 자음 (cho_index: 초성 인덱스, jong_index: 종성 인덱스, None이면 종성 불가)
    Consonant {
        cho_index: u32,
        jong_index: Option<u32>,
    },
    /// 모음 (jung_index: 중성 인덱스)
    Vowel { jung_index: u32 },
}

impl Jamo {
    /// 자음인지 확인
    pub fn is_consonant(&self) -> bool {
        matches!(self, Jamo::Consonant { .. })
    }

    /// 모음인지 확인
    pub fn is_vowel(&self) -> bool {
        matches!(self, Jamo::Vowel { .. })
    }
}

lazy_static! {
    /// 초성으로 쓸 수 있는 자음과 모든 모음의 분류표
    /// 겹받침(ㄳ 등)은 초성이 될 수 없으므로 포함하지 않음
    static ref JAMO_TABLE: HashMap<char, Jamo> = {
        let mut table = HashMap::new();
        for (cho_index, consonant) in CHOSEONG.iter().enumerate() {
            let jong_index = JONGSEONG
                .iter()
                .position(|j| *j == Some(*consonant))
                .map(|i| i as u32);
            table.insert(
                *consonant,
                Jamo::Consonant {
                    cho_index: cho_index as u32,
                    jong_index,
                },
            );
        }
        for (jung_index, vowel) in JUNGSEONG.iter().enumerate() {
            table.insert(
                *vowel,
                Jamo::Vowel {
                    jung_index: jung_index as u32,
                },
            );
        }
        table
    };
}

/// 자모 문자 하나를 분류
/// 자모가 아니거나 겹받침 문자이면 None
pub fn classify(c: char) -> Option<Jamo> {
    JAMO_TABLE.get(&c).copied()
}

/// 호환용 자모 영역(ㄱ-ㅣ)에 속하는 문자인지 확인
pub fn is_compatibility_jamo(c: char) -> bool {
    (0x3131..=0x3163).contains(&(c as u32))
}

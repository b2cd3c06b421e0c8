//! 한글 낱말 -> 자판 입력 순서 분해
//!
//! 화면에 보이는 낱말을 두벌식 자판에서 눌러야 하는 자모 순서로 풀어냅니다.
//! 겹모음(ㅘ)과 겹받침(ㄳ)은 각각 두 번의 키 입력으로 펼칩니다.

use crate::core::unicode::{
    decompose_syllable, jongseong_char, split_compound_final, split_compound_vowel, CHOSEONG,
    JUNGSEONG,
};

/// 낱말을 입력 순서대로의 자모/문자 목록으로 분해
///
/// 한글 음절이 아닌 문자는 그대로 한 칸을 차지합니다.
///
/// # Examples
/// ```
/// use tadak::core::decomposer::decompose;
/// assert_eq!(decompose("사과"), vec!['ㅅ', 'ㅏ', 'ㄱ', 'ㅗ', 'ㅏ']);
/// assert_eq!(decompose("닭"), vec!['ㄷ', 'ㅏ', 'ㄹ', 'ㄱ']);
/// assert_eq!(decompose("abc"), vec!['a', 'b', 'c']);
/// ```
pub fn decompose(word: &str) -> Vec<char> {
    let mut keys = Vec::with_capacity(word.len());
    for c in word.chars() {
        push_keystrokes(c, &mut keys);
    }
    keys
}

/// 문자 하나의 입력 자모를 출력 목록에 추가
fn push_keystrokes(c: char, keys: &mut Vec<char>) {
    let Some((cho, jung, jong)) = decompose_syllable(c) else {
        keys.push(c);
        return;
    };

    keys.push(CHOSEONG[cho as usize]);

    let vowel = JUNGSEONG[jung as usize];
    match split_compound_vowel(vowel) {
        Some((first, second)) => keys.extend([first, second]),
        None => keys.push(vowel),
    }

    // 종성 없음(0)은 아무것도 추가하지 않음
    if let Some(consonant) = jongseong_char(jong) {
        match split_compound_final(consonant) {
            Some((first, second)) => keys.extend([first, second]),
            None => keys.push(consonant),
        }
    }
}

/// 문자 하나를 입력하는 데 필요한 키 입력 수
pub fn keystroke_count(c: char) -> usize {
    let mut keys = Vec::with_capacity(5);
    push_keystrokes(c, &mut keys);
    keys.len()
}

/// 낱말의 각 문자가 입력 순서에서 끝나는 위치 (0부터, 끝 포함)
///
/// `keystrokes`는 `word`를 분해한 결과여야 합니다. 커서 위치를 화면의 글자로
/// 되돌려 찾을 때 사용합니다.
///
/// # Examples
/// ```
/// use tadak::core::decomposer::{decompose, syllable_end_indices};
/// let keys = decompose("사과");
/// assert_eq!(syllable_end_indices("사과", &keys), vec![1, 4]);
/// ```
pub fn syllable_end_indices(word: &str, keystrokes: &[char]) -> Vec<usize> {
    let mut ends = Vec::with_capacity(word.chars().count());
    let mut produced = 0usize;
    for c in word.chars() {
        produced += keystroke_count(c);
        ends.push(produced - 1);
    }
    debug_assert_eq!(produced, keystrokes.len());
    ends
}

/// 한 낱말의 입력 순서와 글자 경계
///
/// 낱말이 정해질 때 한 번 계산되며 다음 낱말로 넘어가면 버려집니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeystrokeSequence {
    word: String,
    keys: Vec<char>,
    syllable_ends: Vec<usize>,
}

impl KeystrokeSequence {
    /// 한글 분해 규칙으로 입력 순서 생성
    pub fn decompose(word: &str) -> Self {
        let keys = decompose(word);
        let syllable_ends = syllable_end_indices(word, &keys);
        Self {
            word: word.to_string(),
            keys,
            syllable_ends,
        }
    }

    /// 문자를 그대로 한 키씩 입력하는 순서 생성 (영어 낱말용)
    pub fn characters(word: &str) -> Self {
        let keys: Vec<char> = word.chars().collect();
        let syllable_ends = (0..keys.len()).collect();
        Self {
            word: word.to_string(),
            keys,
            syllable_ends,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn keys(&self) -> &[char] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// 위치의 목표 자모
    pub fn key_at(&self, cursor: usize) -> Option<char> {
        self.keys.get(cursor).copied()
    }

    pub fn syllable_ends(&self) -> &[usize] {
        &self.syllable_ends
    }

    /// 커서가 가리키는 입력이 속한 글자 번호
    pub fn syllable_at(&self, cursor: usize) -> Option<usize> {
        self.syllable_ends.iter().position(|&end| cursor <= end)
    }

    /// `index` 위치의 입력으로 끝나는 글자 번호
    pub fn completed_syllable(&self, index: usize) -> Option<usize> {
        self.syllable_ends.iter().position(|&end| end == index)
    }

    /// 커서 기준으로 글자가 다 입력되었는지
    pub fn is_syllable_typed(&self, syllable: usize, cursor: usize) -> bool {
        self.syllable_ends
            .get(syllable)
            .is_some_and(|&end| cursor > end)
    }
}

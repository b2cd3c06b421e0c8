//! 유니코드 한글 음절 계산과 자모 테이블
//!
//! 음절 인덱스 계산, 호환용 자모 테이블, 겹모음/겹받침 분해·조합 테이블을 제공합니다.

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성 테이블 (호환용 자모)
pub const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 테이블 (호환용 자모)
pub const JUNGSEONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 테이블 (0번은 종성 없음)
pub const JONGSEONG: [Option<char>; 28] = [
    None,
    Some('ㄱ'),
    Some('ㄲ'),
    Some('ㄳ'),
    Some('ㄴ'),
    Some('ㄵ'),
    Some('ㄶ'),
    Some('ㄷ'),
    Some('ㄹ'),
    Some('ㄺ'),
    Some('ㄻ'),
    Some('ㄼ'),
    Some('ㄽ'),
    Some('ㄾ'),
    Some('ㄿ'),
    Some('ㅀ'),
    Some('ㅁ'),
    Some('ㅂ'),
    Some('ㅄ'),
    Some('ㅅ'),
    Some('ㅆ'),
    Some('ㅇ'),
    Some('ㅈ'),
    Some('ㅊ'),
    Some('ㅋ'),
    Some('ㅌ'),
    Some('ㅍ'),
    Some('ㅎ'),
];

/// 완성형 한글 음절(가-힣)인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 초성/중성/종성 인덱스로 완성된 한글 음절 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    let jungseong = (offset % (JUNGSEONG_COUNT * JONGSEONG_COUNT)) / JONGSEONG_COUNT;
    let jongseong = offset % JONGSEONG_COUNT;
    Some((choseong, jungseong, jongseong))
}

/// 겹모음을 두 개의 입력 모음으로 분해
/// 단모음이면 None
pub fn split_compound_vowel(vowel: char) -> Option<(char, char)> {
    match vowel {
        'ㅘ' => Some(('ㅗ', 'ㅏ')),
        'ㅙ' => Some(('ㅗ', 'ㅐ')),
        'ㅚ' => Some(('ㅗ', 'ㅣ')),
        'ㅝ' => Some(('ㅜ', 'ㅓ')),
        'ㅞ' => Some(('ㅜ', 'ㅔ')),
        'ㅟ' => Some(('ㅜ', 'ㅣ')),
        'ㅢ' => Some(('ㅡ', 'ㅣ')),
        _ => None,
    }
}

/// 겹받침을 두 개의 입력 자음으로 분해
/// 쌍자음(ㄲ, ㅆ)은 Shift 한 번으로 입력하므로 겹받침이 아님
pub fn split_compound_final(consonant: char) -> Option<(char, char)> {
    match consonant {
        'ㄳ' => Some(('ㄱ', 'ㅅ')),
        'ㄵ' => Some(('ㄴ', 'ㅈ')),
        'ㄶ' => Some(('ㄴ', 'ㅎ')),
        'ㄺ' => Some(('ㄹ', 'ㄱ')),
        'ㄻ' => Some(('ㄹ', 'ㅁ')),
        'ㄼ' => Some(('ㄹ', 'ㅂ')),
        'ㄽ' => Some(('ㄹ', 'ㅅ')),
        'ㄾ' => Some(('ㄹ', 'ㅌ')),
        'ㄿ' => Some(('ㄹ', 'ㅍ')),
        'ㅀ' => Some(('ㄹ', 'ㅎ')),
        'ㅄ' => Some(('ㅂ', 'ㅅ')),
        _ => None,
    }
}

/// 두 중성 인덱스를 겹모음 인덱스로 조합
pub fn combine_jungseong(first: u32, second: u32) -> Option<u32> {
    // ㅗ(8) ㅜ(13) ㅡ(18) 뒤에만 겹모음이 만들어짐
    match (first, second) {
        (8, 0) => Some(9),    // ㅘ
        (8, 1) => Some(10),   // ㅙ
        (8, 20) => Some(11),  // ㅚ
        (13, 4) => Some(14),  // ㅝ
        (13, 5) => Some(15),  // ㅞ
        (13, 20) => Some(16), // ㅟ
        (18, 20) => Some(19), // ㅢ
        _ => None,
    }
}

/// 두 종성 인덱스를 겹받침 인덱스로 조합
pub fn combine_jongseong(first: u32, second: u32) -> Option<u32> {
    match (first, second) {
        (1, 19) => Some(3),   // ㄳ
        (4, 22) => Some(5),   // ㄵ
        (4, 27) => Some(6),   // ㄶ
        (8, 1) => Some(9),    // ㄺ
        (8, 16) => Some(10),  // ㄻ
        (8, 17) => Some(11),  // ㄼ
        (8, 19) => Some(12),  // ㄽ
        (8, 25) => Some(13),  // ㄾ
        (8, 26) => Some(14),  // ㄿ
        (8, 27) => Some(15),  // ㅀ
        (17, 19) => Some(18), // ㅄ
        _ => None,
    }
}

/// 겹받침 인덱스를 (남는 종성 인덱스, 다음 글자로 넘어가는 자음 문자)로 분리
pub fn split_jongseong(jong: u32) -> Option<(u32, char)> {
    let compound = JONGSEONG.get(jong as usize).copied().flatten()?;
    let (first, second) = split_compound_final(compound)?;
    let remaining = JONGSEONG.iter().position(|j| *j == Some(first))?;
    Some((remaining as u32, second))
}

/// 종성 인덱스에 해당하는 자음 문자
pub fn jongseong_char(jong: u32) -> Option<char> {
    JONGSEONG.get(jong as usize).copied().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_syllable() {
        assert_eq!(compose_syllable(0, 0, 0), Some('가'));
        assert_eq!(compose_syllable(0, 0, 1), Some('각'));
        assert_eq!(compose_syllable(18, 0, 4), Some('한'));
        assert_eq!(compose_syllable(0, 18, 8), Some('글'));
        assert_eq!(compose_syllable(19, 0, 0), None);
    }

    #[test]
    fn test_decompose_syllable() {
        assert_eq!(decompose_syllable('가'), Some((0, 0, 0)));
        assert_eq!(decompose_syllable('과'), Some((0, 9, 0)));
        assert_eq!(decompose_syllable('닭'), Some((3, 0, 9)));
        assert_eq!(decompose_syllable('힣'), Some((18, 20, 27)));

        assert_eq!(decompose_syllable('a'), None);
        assert_eq!(decompose_syllable('ㄱ'), None);
    }

    #[test]
    fn test_block_edges() {
        assert!(is_hangul_syllable('가'));
        assert!(is_hangul_syllable('힣'));
        assert!(!is_hangul_syllable('\u{ABFF}'));
        assert!(!is_hangul_syllable('\u{D7A4}'));
    }

    #[test]
    fn test_table_sizes_match_counts() {
        assert_eq!(CHOSEONG.len() as u32, CHOSEONG_COUNT);
        assert_eq!(JUNGSEONG.len() as u32, JUNGSEONG_COUNT);
        assert_eq!(JONGSEONG.len() as u32, JONGSEONG_COUNT);
    }

    #[test]
    fn test_compound_tables_are_exhaustive() {
        let compound_vowels = JUNGSEONG
            .iter()
            .filter(|v| split_compound_vowel(**v).is_some())
            .count();
        assert_eq!(compound_vowels, 7);

        let compound_finals = JONGSEONG
            .iter()
            .flatten()
            .filter(|c| split_compound_final(**c).is_some())
            .count();
        assert_eq!(compound_finals, 11);

        // 쌍자음은 겹받침이 아님
        assert_eq!(split_compound_final('ㄲ'), None);
        assert_eq!(split_compound_final('ㅆ'), None);
    }

    #[test]
    fn test_combine_agrees_with_split() {
        for (index, vowel) in JUNGSEONG.iter().enumerate() {
            if let Some((a, b)) = split_compound_vowel(*vowel) {
                let first = JUNGSEONG.iter().position(|v| *v == a).unwrap() as u32;
                let second = JUNGSEONG.iter().position(|v| *v == b).unwrap() as u32;
                assert_eq!(combine_jungseong(first, second), Some(index as u32));
            }
        }
        for (index, consonant) in JONGSEONG.iter().enumerate() {
            if let Some((a, b)) = consonant.and_then(split_compound_final) {
                let first = JONGSEONG.iter().position(|j| *j == Some(a)).unwrap() as u32;
                let second = JONGSEONG.iter().position(|j| *j == Some(b)).unwrap() as u32;
                assert_eq!(combine_jongseong(first, second), Some(index as u32));
            }
        }
    }

    #[test]
    fn test_split_jongseong() {
        assert_eq!(split_jongseong(3), Some((1, 'ㅅ'))); // ㄳ -> ㄱ + ㅅ
        assert_eq!(split_jongseong(9), Some((8, 'ㄱ'))); // ㄺ -> ㄹ + ㄱ
        assert_eq!(split_jongseong(18), Some((17, 'ㅅ'))); // ㅄ -> ㅂ + ㅅ

        assert_eq!(split_jongseong(0), None);
        assert_eq!(split_jongseong(1), None);
        assert_eq!(split_jongseong(99), None);
    }
}

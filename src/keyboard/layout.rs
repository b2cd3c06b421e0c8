//! 101키 자판 배열 테이블
//!
//! 한글(두벌식)과 영문(QWERTY) 배열은 같은 물리 키 구조를 공유하고,
//! 각 키가 만들어 내는 문자만 다릅니다.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// 물리 키 하나의 정의
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KeyDef {
    /// 배열과 무관한 키 코드 (예: "KeyQ", "Digit1", "ShiftLeft")
    pub code: String,
    /// Shift 없이 입력되는 문자
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<char>,
    /// Shift와 함께 입력되는 문자
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<char>,
    /// 글자가 없는 키의 표시 이름 (Enter, Space 등)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    /// 화면 그리기용 너비 비율. 매칭에는 쓰이지 않음
    #[serde(default = "default_flex")]
    pub flex: f32,
}

fn default_flex() -> f32 {
    1.0
}

impl KeyDef {
    /// 글자 키
    pub fn character(base: char, shift: Option<char>, code: &str) -> Self {
        Self {
            code: code.to_string(),
            base: Some(base),
            shift,
            display: None,
            flex: 1.0,
        }
    }

    /// 글자가 없는 특수 키 (Tab, Shift, Ctrl 등)
    pub fn special(display: &str, code: &str, flex: f32) -> Self {
        Self {
            code: code.to_string(),
            base: None,
            shift: None,
            display: Some(display.to_string()),
            flex,
        }
    }

    fn with_flex(mut self, flex: f32) -> Self {
        self.flex = flex;
        self
    }

    /// 키가 입력하는 문자 (Shift 상태 기준)
    pub fn char_for(&self, shift_held: bool) -> Option<char> {
        match (shift_held, self.shift) {
            (true, Some(shifted)) => Some(shifted),
            _ => self.base,
        }
    }
}

/// 자판 배열: 줄 단위로 나열된 키 정의
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Layout {
    pub name: String,
    pub rows: Vec<Vec<KeyDef>>,
}

impl Layout {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<KeyDef>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// JSON 문자열에서 배열 로드
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("자판 배열 파싱 실패: {}", e))
    }

    /// 표 순서(줄 -> 줄 안의 순서)대로 모든 키
    pub fn keys(&self) -> impl Iterator<Item = &KeyDef> {
        self.rows.iter().flatten()
    }

    /// 키 코드로 키 찾기 (중복이면 표에서 먼저 나온 키)
    pub fn key_for_code(&self, code: &str) -> Option<&KeyDef> {
        self.keys().find(|key| key.code == code)
    }
}

/// 숫자 줄: (기본, Shift, 코드)
const NUMBER_ROW: [(char, char, &str); 13] = [
    ('`', '~', "Backquote"),
    ('1', '!', "Digit1"),
    ('2', '@', "Digit2"),
    ('3', '#', "Digit3"),
    ('4', '$', "Digit4"),
    ('5', '%', "Digit5"),
    ('6', '^', "Digit6"),
    ('7', '&', "Digit7"),
    ('8', '*', "Digit8"),
    ('9', '(', "Digit9"),
    ('0', ')', "Digit0"),
    ('-', '_', "Minus"),
    ('=', '+', "Equal"),
];

/// 글자 키 세 줄 (물리 키 이름)
const LETTER_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// 두벌식 자판: 물리 키 -> (기본 자모, Shift 자모)
fn dubeolsik_letter(key: char) -> (char, Option<char>) {
    match key {
        'Q' => ('ㅂ', Some('ㅃ')),
        'W' => ('ㅈ', Some('ㅉ')),
        'E' => ('ㄷ', Some('ㄸ')),
        'R' => ('ㄱ', Some('ㄲ')),
        'T' => ('ㅅ', Some('ㅆ')),
        'Y' => ('ㅛ', None),
        'U' => ('ㅕ', None),
        'I' => ('ㅑ', None),
        'O' => ('ㅐ', Some('ㅒ')),
        'P' => ('ㅔ', Some('ㅖ')),
        'A' => ('ㅁ', None),
        'S' => ('ㄴ', None),
        'D' => ('ㅇ', None),
        'F' => ('ㄹ', None),
        'G' => ('ㅎ', None),
        'H' => ('ㅗ', None),
        'J' => ('ㅓ', None),
        'K' => ('ㅏ', None),
        'L' => ('ㅣ', None),
        'Z' => ('ㅋ', None),
        'X' => ('ㅌ', None),
        'C' => ('ㅊ', None),
        'V' => ('ㅍ', None),
        'B' => ('ㅠ', None),
        'N' => ('ㅜ', None),
        'M' => ('ㅡ', None),
        other => (other, None),
    }
}

/// QWERTY 자판: 물리 키 -> (소문자, 대문자)
fn qwerty_letter(key: char) -> (char, Option<char>) {
    (key.to_ascii_lowercase(), Some(key))
}

fn letter_keys(row: &str, letter: fn(char) -> (char, Option<char>)) -> Vec<KeyDef> {
    row.chars()
        .map(|key| {
            let (base, shift) = letter(key);
            KeyDef::character(base, shift, &format!("Key{}", key))
        })
        .collect()
}

/// 101키 배열 생성. 글자 키와 Space 키만 배열마다 다름
fn build_101(name: &str, letter: fn(char) -> (char, Option<char>), space: KeyDef) -> Layout {
    let mut numbers: Vec<KeyDef> = NUMBER_ROW
        .iter()
        .map(|(base, shift, code)| KeyDef::character(*base, Some(*shift), code))
        .collect();
    numbers.push(KeyDef::special("Backspace", "Backspace", 2.0));

    let mut top = vec![KeyDef::special("Tab", "Tab", 1.5)];
    top.extend(letter_keys(LETTER_ROWS[0], letter));
    top.push(KeyDef::character('[', Some('{'), "BracketLeft"));
    top.push(KeyDef::character(']', Some('}'), "BracketRight"));
    top.push(KeyDef::character('\\', Some('|'), "Backslash").with_flex(1.5));

    let mut home = vec![KeyDef::special("Caps Lock", "CapsLock", 1.8)];
    home.extend(letter_keys(LETTER_ROWS[1], letter));
    home.push(KeyDef::character(';', Some(':'), "Semicolon"));
    home.push(KeyDef::character('\'', Some('"'), "Quote"));
    home.push(KeyDef::special("Enter", "Enter", 2.2));

    let mut bottom = vec![KeyDef::special("Shift", "ShiftLeft", 2.5)];
    bottom.extend(letter_keys(LETTER_ROWS[2], letter));
    bottom.push(KeyDef::character(',', Some('<'), "Comma"));
    bottom.push(KeyDef::character('.', Some('>'), "Period"));
    bottom.push(KeyDef::character('/', Some('?'), "Slash"));
    bottom.push(KeyDef::special("Shift", "ShiftRight", 2.5));

    let modifiers = vec![
        KeyDef::special("Ctrl", "ControlLeft", 1.5),
        KeyDef::special("Alt", "AltLeft", 1.5),
        space,
        KeyDef::special("Alt", "AltRight", 1.5),
        KeyDef::special("Ctrl", "ControlRight", 1.5),
    ];

    Layout::new(name, vec![numbers, top, home, bottom, modifiers])
}

lazy_static! {
    /// 한글 두벌식 101키 배열
    pub static ref KOREAN_101: Layout =
        build_101("korean", dubeolsik_letter, KeyDef::special("Space", "Space", 6.0));

    /// 영문 QWERTY 101키 배열
    pub static ref ENGLISH_101: Layout = build_101(
        "english",
        qwerty_letter,
        KeyDef {
            code: "Space".to_string(),
            base: Some(' '),
            shift: Some(' '),
            display: Some("Space".to_string()),
            flex: 6.0,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts_share_physical_structure() {
        assert_eq!(KOREAN_101.rows.len(), 5);
        assert_eq!(KOREAN_101.rows.len(), ENGLISH_101.rows.len());
        for (ko_row, en_row) in KOREAN_101.rows.iter().zip(ENGLISH_101.rows.iter()) {
            let ko_codes: Vec<&str> = ko_row.iter().map(|k| k.code.as_str()).collect();
            let en_codes: Vec<&str> = en_row.iter().map(|k| k.code.as_str()).collect();
            assert_eq!(ko_codes, en_codes);
        }
    }

    #[test]
    fn test_row_lengths() {
        let lengths: Vec<usize> = KOREAN_101.rows.iter().map(|r| r.len()).collect();
        assert_eq!(lengths, vec![14, 14, 13, 12, 5]);
    }

    #[test]
    fn test_korean_letters() {
        let q = KOREAN_101.key_for_code("KeyQ").unwrap();
        assert_eq!(q.base, Some('ㅂ'));
        assert_eq!(q.shift, Some('ㅃ'));

        let d = KOREAN_101.key_for_code("KeyD").unwrap();
        assert_eq!(d.base, Some('ㅇ'));
        assert_eq!(d.shift, None);

        let k = KOREAN_101.key_for_code("KeyK").unwrap();
        assert_eq!(k.base, Some('ㅏ'));
    }

    #[test]
    fn test_english_letters() {
        let r = ENGLISH_101.key_for_code("KeyR").unwrap();
        assert_eq!(r.base, Some('r'));
        assert_eq!(r.shift, Some('R'));
    }

    #[test]
    fn test_special_keys_have_no_characters() {
        for code in ["ShiftLeft", "ShiftRight", "ControlLeft", "AltRight", "Tab", "Enter"] {
            let key = KOREAN_101.key_for_code(code).unwrap();
            assert_eq!(key.base, None);
            assert_eq!(key.shift, None);
            assert!(key.display.is_some());
        }
    }

    #[test]
    fn test_space_key_differs_per_layout() {
        assert_eq!(KOREAN_101.key_for_code("Space").unwrap().base, None);
        assert_eq!(ENGLISH_101.key_for_code("Space").unwrap().base, Some(' '));
    }

    #[test]
    fn test_char_for() {
        let t = KOREAN_101.key_for_code("KeyT").unwrap();
        assert_eq!(t.char_for(false), Some('ㅅ'));
        assert_eq!(t.char_for(true), Some('ㅆ'));

        let a = KOREAN_101.key_for_code("KeyA").unwrap();
        assert_eq!(a.char_for(true), Some('ㅁ'));

        let enter = KOREAN_101.key_for_code("Enter").unwrap();
        assert_eq!(enter.char_for(false), None);
    }

    #[test]
    fn test_layout_from_json() {
        let json = r#"{
            "name": "mini",
            "rows": [[
                {"code": "KeyA", "base": "a", "shift": "A"},
                {"code": "Enter", "display": "Enter", "flex": 2.0}
            ]]
        }"#;
        let layout = Layout::from_json(json).unwrap();
        assert_eq!(layout.name, "mini");
        assert_eq!(layout.keys().count(), 2);
        assert_eq!(layout.key_for_code("KeyA").unwrap().flex, 1.0);
        assert_eq!(layout.key_for_code("Enter").unwrap().base, None);

        assert!(Layout::from_json("{").is_err());
    }
}

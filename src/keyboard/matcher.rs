//! 목표 문자 -> 물리 키 찾기와 키 입력 판정

use serde::Serialize;

use crate::keyboard::layout::{KeyDef, Layout};

/// 키 눌림 이벤트
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyEvent {
    /// 배열과 무관한 키 코드
    pub code: String,
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    /// 키를 누르고 있어 자동 반복된 이벤트
    pub is_repeat: bool,
    /// 호스트가 보고한 원래 문자 (배열에 없는 키의 표시용)
    pub raw: String,
}

impl KeyEvent {
    pub fn new(code: &str, shift: bool) -> Self {
        Self {
            code: code.to_string(),
            shift,
            ..Self::default()
        }
    }

    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = raw.into();
        self
    }

    /// Shift 외의 조합키가 눌렸거나 자동 반복이면 연습 입력이 아님
    pub fn is_practice_input(&self) -> bool {
        !(self.alt || self.ctrl || self.meta || self.is_repeat)
    }
}

/// 목표 문자를 입력하는 키와 Shift 필요 여부
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetKey<'a> {
    pub key: &'a KeyDef,
    pub shift_required: bool,
}

impl TargetKey<'_> {
    /// 화면 자판에서 강조해야 하는 키 코드
    pub fn highlighted_codes(&self) -> Vec<&str> {
        let mut codes = vec![self.key.code.as_str()];
        if self.shift_required {
            codes.extend(["ShiftLeft", "ShiftRight"]);
        }
        codes
    }
}

/// 판정 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum MatchVerdict {
    /// 맞는 키: 커서 전진
    Matched,
    /// 틀린 키: 실제로 누른 문자
    Mismatched { pressed: String },
}

/// 목표 문자를 입력하는 키 찾기
///
/// 기본 문자가 같으면 Shift 불필요, Shift 문자가 같으면 Shift 필요.
/// 중복 정의된 배열에서는 표에서 먼저 나온 키가 선택됩니다.
///
/// # Examples
/// ```
/// use tadak::keyboard::{resolve_target_key, KOREAN_101};
/// let target = resolve_target_key('ㄲ', &KOREAN_101).unwrap();
/// assert_eq!(target.key.code, "KeyR");
/// assert!(target.shift_required);
/// ```
pub fn resolve_target_key(target: char, layout: &Layout) -> Option<TargetKey<'_>> {
    for key in layout.keys() {
        if key.base == Some(target) {
            return Some(TargetKey {
                key,
                shift_required: false,
            });
        }
        if key.shift == Some(target) {
            return Some(TargetKey {
                key,
                shift_required: true,
            });
        }
    }
    None
}

/// 실제로 누른 키가 만드는 문자
///
/// 배열에 없는 키이거나 글자가 없는 키이면 이벤트의 원래 문자,
/// 그것도 없으면 "?"를 돌려줍니다.
pub fn pressed_char(event: &KeyEvent, layout: &Layout) -> String {
    layout
        .key_for_code(&event.code)
        .and_then(|key| key.char_for(event.shift))
        .map(String::from)
        .or_else(|| (!event.raw.is_empty()).then(|| event.raw.clone()))
        .unwrap_or_else(|| "?".to_string())
}

/// 키 입력 판정
///
/// 연습 입력이 아닌 이벤트(Alt/Ctrl/Meta, 자동 반복)는 None.
/// 키 코드와 Shift 상태가 정확히 같아야 맞는 입력입니다.
pub fn evaluate(event: &KeyEvent, target: &TargetKey<'_>, layout: &Layout) -> Option<MatchVerdict> {
    if !event.is_practice_input() {
        return None;
    }
    if event.code == target.key.code && event.shift == target.shift_required {
        Some(MatchVerdict::Matched)
    } else {
        Some(MatchVerdict::Mismatched {
            pressed: pressed_char(event, layout),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::layout::{ENGLISH_101, KOREAN_101};

    #[test]
    fn test_every_base_resolves_without_shift() {
        for key in KOREAN_101.keys() {
            if let Some(base) = key.base {
                let target = resolve_target_key(base, &KOREAN_101).unwrap();
                assert_eq!(target.key.code, key.code);
                assert!(!target.shift_required);
            }
        }
    }

    #[test]
    fn test_every_shift_resolves_with_shift() {
        for key in KOREAN_101.keys() {
            if let Some(shift) = key.shift {
                let target = resolve_target_key(shift, &KOREAN_101).unwrap();
                assert_eq!(target.key.code, key.code);
                assert!(target.shift_required);
            }
        }
    }

    #[test]
    fn test_english_resolution() {
        let a = resolve_target_key('a', &ENGLISH_101).unwrap();
        assert_eq!(a.key.code, "KeyA");
        assert!(!a.shift_required);

        let upper = resolve_target_key('A', &ENGLISH_101).unwrap();
        assert!(upper.shift_required);

        // Space는 기본/Shift 모두 ' ' -> 기본이 먼저
        let space = resolve_target_key(' ', &ENGLISH_101).unwrap();
        assert_eq!(space.key.code, "Space");
        assert!(!space.shift_required);
    }

    #[test]
    fn test_unresolvable_target() {
        assert!(resolve_target_key('ㅘ', &KOREAN_101).is_none());
        assert!(resolve_target_key('a', &KOREAN_101).is_none());
        assert!(resolve_target_key('가', &ENGLISH_101).is_none());
    }

    #[test]
    fn test_duplicate_definitions_first_wins() {
        let layout = Layout::new(
            "dup",
            vec![
                vec![KeyDef::character('x', None, "KeyA")],
                vec![KeyDef::character('y', Some('x'), "KeyB")],
            ],
        );
        let target = resolve_target_key('x', &layout).unwrap();
        assert_eq!(target.key.code, "KeyA");
        assert!(!target.shift_required);
    }

    #[test]
    fn test_shift_must_match_exactly() {
        let target = resolve_target_key('ㅇ', &KOREAN_101).unwrap();
        assert_eq!(target.key.code, "KeyD");

        let plain = KeyEvent::new("KeyD", false);
        assert_eq!(evaluate(&plain, &target, &KOREAN_101), Some(MatchVerdict::Matched));

        let shifted = KeyEvent::new("KeyD", true);
        assert_eq!(
            evaluate(&shifted, &target, &KOREAN_101),
            Some(MatchVerdict::Mismatched {
                pressed: "ㅇ".to_string()
            })
        );
    }

    #[test]
    fn test_shift_required_target() {
        let target = resolve_target_key('ㄸ', &KOREAN_101).unwrap();
        assert_eq!(
            evaluate(&KeyEvent::new("KeyE", true), &target, &KOREAN_101),
            Some(MatchVerdict::Matched)
        );
        assert_eq!(
            evaluate(&KeyEvent::new("KeyE", false), &target, &KOREAN_101),
            Some(MatchVerdict::Mismatched {
                pressed: "ㄷ".to_string()
            })
        );
    }

    #[test]
    fn test_modifiers_and_repeat_are_ignored() {
        let target = resolve_target_key('ㅇ', &KOREAN_101).unwrap();
        let base = KeyEvent::new("KeyD", false);

        for event in [
            KeyEvent { alt: true, ..base.clone() },
            KeyEvent { ctrl: true, ..base.clone() },
            KeyEvent { meta: true, ..base.clone() },
            KeyEvent { is_repeat: true, ..base.clone() },
        ] {
            assert_eq!(evaluate(&event, &target, &KOREAN_101), None);
        }
    }

    #[test]
    fn test_pressed_char_diagnostics() {
        let shifted_t = KeyEvent::new("KeyT", true);
        assert_eq!(pressed_char(&shifted_t, &KOREAN_101), "ㅆ");

        let english = KeyEvent::new("KeyQ", true);
        assert_eq!(pressed_char(&english, &ENGLISH_101), "Q");

        // 글자 없는 키 -> 원래 문자
        let enter = KeyEvent::new("Enter", false).with_raw("Enter");
        assert_eq!(pressed_char(&enter, &KOREAN_101), "Enter");

        // 배열에 없는 키, 원래 문자도 없음
        let unknown = KeyEvent::new("F13", false);
        assert_eq!(pressed_char(&unknown, &KOREAN_101), "?");
    }

    #[test]
    fn test_highlighted_codes() {
        let target = resolve_target_key('ㅃ', &KOREAN_101).unwrap();
        assert_eq!(target.highlighted_codes(), vec!["KeyQ", "ShiftLeft", "ShiftRight"]);

        let target = resolve_target_key('ㅂ', &KOREAN_101).unwrap();
        assert_eq!(target.highlighted_codes(), vec!["KeyQ"]);
    }

    #[test]
    fn test_verdict_serialization() {
        let json = serde_json::to_string(&MatchVerdict::Matched).unwrap();
        assert_eq!(json, r#"{"verdict":"matched"}"#);
        let json = serde_json::to_string(&MatchVerdict::Mismatched {
            pressed: "ㄱ".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"verdict":"mismatched","pressed":"ㄱ"}"#);
    }
}

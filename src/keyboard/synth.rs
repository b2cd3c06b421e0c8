//! 입력된 텍스트 -> 키 이벤트 합성
//!
//! 터미널은 물리 키 코드를 알려주지 않으므로, 입력된 문자를 만들었을
//! 물리 키와 Shift 상태를 역으로 찾아 이벤트를 만듭니다.
//! 영문 자판으로 친 "tkrhk"와 한글 IME로 친 "사과"는 같은 이벤트가 됩니다.

use crate::core::decomposer::decompose;
use crate::core::jamo::is_compatibility_jamo;
use crate::keyboard::layout::{ENGLISH_101, KOREAN_101};
use crate::keyboard::matcher::{resolve_target_key, KeyEvent};

/// 배열에서 찾을 수 없는 문자에 붙이는 키 코드
pub const UNIDENTIFIED_CODE: &str = "Unidentified";

/// 텍스트를 물리 키 이벤트 목록으로 변환
pub fn synthesize(text: &str) -> Vec<KeyEvent> {
    decompose(text).into_iter().map(event_for_char).collect()
}

/// 문자 하나를 만드는 물리 키 이벤트
pub fn event_for_char(c: char) -> KeyEvent {
    let layout = if is_compatibility_jamo(c) {
        &*KOREAN_101
    } else {
        &*ENGLISH_101
    };
    match resolve_target_key(c, layout) {
        Some(target) => {
            KeyEvent::new(&target.key.code, target.shift_required).with_raw(c.to_string())
        }
        None => {
            log::debug!("물리 키를 찾을 수 없는 문자: {:?}", c);
            KeyEvent::new(UNIDENTIFIED_CODE, false).with_raw(c.to_string())
        }
    }
}

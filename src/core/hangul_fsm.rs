//! 두벌식 한글 조합 유한 상태 기계 (FSM)
//!
//! 키 입력 자모를 실제로 화면에 찍히는 글자로 다시 조합합니다.
//! 분해 결과를 되돌려 보는 검증과, 지금까지 입력한 글자 미리보기에 사용됩니다.

use crate::core::jamo::{classify, Jamo};
use crate::core::unicode::{
    combine_jongseong, combine_jungseong, compose_syllable, jongseong_char, split_jongseong,
    CHOSEONG, JUNGSEONG,
};

/// FSM 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 아무것도 없음
    Empty,
    /// 초성만 입력됨
    Choseong,
    /// 초성+중성
    ChoseongJungseong,
    /// 초성+중성+종성
    ChoseongJungseongJongseong,
}

/// 한글 조합 FSM
#[derive(Debug, Clone)]
pub struct HangulFsm {
    state: State,
    choseong: u32,
    jungseong: u32,
    /// 0 = 없음
    jongseong: u32,
    output: String,
}

impl HangulFsm {
    pub fn new() -> Self {
        Self {
            state: State::Empty,
            choseong: 0,
            jungseong: 0,
            jongseong: 0,
            output: String::new(),
        }
    }

    /// 문자 하나 입력. 자모가 아니면 조합을 끊고 그대로 출력
    pub fn feed_char(&mut self, c: char) {
        match classify(c) {
            Some(jamo) => self.feed(jamo),
            None => self.feed_passthrough(c),
        }
    }

    /// 자모를 입력하여 상태 전이
    pub fn feed(&mut self, jamo: Jamo) {
        match jamo {
            Jamo::Consonant {
                cho_index,
                jong_index,
            } => self.feed_consonant(cho_index, jong_index),
            Jamo::Vowel { jung_index } => self.feed_vowel(jung_index),
        }
    }

    fn feed_consonant(&mut self, cho_index: u32, jong_index: Option<u32>) {
        match self.state {
            State::Empty => {
                self.choseong = cho_index;
                self.state = State::Choseong;
            }
            State::Choseong => {
                // 앞 초성은 낱자모로 확정
                self.output.push(CHOSEONG[self.choseong as usize]);
                self.choseong = cho_index;
            }
            State::ChoseongJungseong => match jong_index {
                Some(jong) => {
                    self.jongseong = jong;
                    self.state = State::ChoseongJungseongJongseong;
                }
                // ㄸ, ㅃ, ㅉ는 받침이 될 수 없음
                None => self.start_next(cho_index),
            },
            State::ChoseongJungseongJongseong => {
                match jong_index.and_then(|jong| combine_jongseong(self.jongseong, jong)) {
                    Some(combined) => self.jongseong = combined,
                    None => self.start_next(cho_index),
                }
            }
        }
    }

    fn feed_vowel(&mut self, jung_index: u32) {
        match self.state {
            State::Empty => {
                self.output.push(JUNGSEONG[jung_index as usize]);
            }
            State::Choseong => {
                self.jungseong = jung_index;
                self.state = State::ChoseongJungseong;
            }
            State::ChoseongJungseong => {
                if let Some(combined) = combine_jungseong(self.jungseong, jung_index) {
                    self.jungseong = combined;
                } else {
                    self.flush_current();
                    self.output.push(JUNGSEONG[jung_index as usize]);
                }
            }
            State::ChoseongJungseongJongseong => {
                // 받침이 다음 글자의 초성으로 넘어감 (겹받침이면 뒤 자음만)
                let (remaining, moved) = match split_jongseong(self.jongseong) {
                    Some((remaining, moved)) => (remaining, Some(moved)),
                    None => (0, jongseong_char(self.jongseong)),
                };
                let next_cho = moved.and_then(classify).and_then(|jamo| match jamo {
                    Jamo::Consonant { cho_index, .. } => Some(cho_index),
                    Jamo::Vowel { .. } => None,
                });
                match next_cho {
                    Some(cho) => {
                        self.jongseong = remaining;
                        self.flush_current();
                        self.choseong = cho;
                        self.jungseong = jung_index;
                        self.state = State::ChoseongJungseong;
                    }
                    None => {
                        self.flush_current();
                        self.output.push(JUNGSEONG[jung_index as usize]);
                    }
                }
            }
        }
    }

    /// 현재 글자를 확정하고 새 초성으로 시작
    fn start_next(&mut self, cho_index: u32) {
        self.flush_current();
        self.choseong = cho_index;
        self.state = State::Choseong;
    }

    /// 현재 조합 중인 글자를 출력 버퍼에 추가
    fn flush_current(&mut self) {
        match self.state {
            State::Empty => {}
            State::Choseong => self.output.push(CHOSEONG[self.choseong as usize]),
            State::ChoseongJungseong | State::ChoseongJungseongJongseong => {
                let jong = if self.state == State::ChoseongJungseong {
                    0
                } else {
                    self.jongseong
                };
                if let Some(c) = compose_syllable(self.choseong, self.jungseong, jong) {
                    self.output.push(c);
                }
            }
        }
        self.state = State::Empty;
        self.choseong = 0;
        self.jungseong = 0;
        self.jongseong = 0;
    }

    /// 변환 불가 문자 처리 (영문, 숫자, 공백 등)
    pub fn feed_passthrough(&mut self, c: char) {
        self.flush_current();
        self.output.push(c);
    }

    /// 조합 중인 글자까지 포함한 현재 결과 (FSM은 그대로 유지)
    pub fn preview(&self) -> String {
        let mut copy = self.clone();
        copy.flush_current();
        copy.output
    }

    /// FSM 종료 및 최종 결과 반환
    pub fn finish(mut self) -> String {
        self.flush_current();
        self.output
    }
}

impl Default for HangulFsm {
    fn default() -> Self {
        Self::new()
    }
}

/// 키 입력 순서를 화면에 찍히는 글자로 조합
///
/// # Examples
/// ```
/// use tadak::core::hangul_fsm::compose;
/// assert_eq!(compose(&['ㅅ', 'ㅏ', 'ㄱ', 'ㅗ', 'ㅏ']), "사과");
/// ```
pub fn compose(keys: &[char]) -> String {
    let mut fsm = HangulFsm::new();
    for &c in keys {
        fsm.feed_char(c);
    }
    fsm.finish()
}

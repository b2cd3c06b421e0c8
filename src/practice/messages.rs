//! 연습 화면 안내 문구

use rand::seq::SliceRandom;
use rand::Rng;

/// 새 낱말을 시작할 때의 문구 (읽어 주지 않음)
pub const INITIAL_MESSAGE: &str = "글자를 힘차게 눌러보자!";

/// 낱말을 다 입력했을 때
pub const CHEERING_MESSAGES: [&str; 8] = [
    "정말 잘하고 있어!",
    "최고야!",
    "와, 대단한걸!",
    "거의 다 왔어!",
    "지금처럼만 하면 돼!",
    "리듬을 타봐!",
    "신난다!",
    "정확해!",
];

/// 틀린 키를 눌렀을 때
pub const SUPPORT_MESSAGES: [&str; 6] = [
    "괜찮아, 다시 해보자!",
    "실수는 배움의 과정이야!",
    "조금만 더 집중해볼까?",
    "거의 맞았어!",
    "할 수 있어!",
    "천천히 해봐, 괜찮아.",
];

pub fn random_cheering<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    CHEERING_MESSAGES.choose(rng).copied().unwrap_or(INITIAL_MESSAGE)
}

pub fn random_support<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SUPPORT_MESSAGES.choose(rng).copied().unwrap_or(INITIAL_MESSAGE)
}

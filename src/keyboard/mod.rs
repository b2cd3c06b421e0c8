//! 자판 배열과 키 입력 판정

pub mod layout;
pub mod matcher;
pub mod synth;

pub use layout::{KeyDef, Layout, ENGLISH_101, KOREAN_101};
pub use matcher::{evaluate, pressed_char, resolve_target_key, KeyEvent, MatchVerdict, TargetKey};

//! 한글 분해/조합 엔진

pub mod decomposer;
pub mod hangul_fsm;
pub mod jamo;
pub mod unicode;

pub use decomposer::{decompose, syllable_end_indices, KeystrokeSequence};
pub use hangul_fsm::compose;

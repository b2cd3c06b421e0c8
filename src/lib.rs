pub mod audio;
pub mod config;
pub mod core;
pub mod keyboard;
pub mod practice;
pub mod progress;
pub mod tutor;

pub use core::{compose, decompose, KeystrokeSequence};
pub use keyboard::{evaluate, resolve_target_key, KeyEvent, MatchVerdict, TargetKey};
pub use practice::{KeyOutcome, PracticeMode, PracticeSession};
pub use tutor::Tutor;

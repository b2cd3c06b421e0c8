pub mod messages;
pub mod mode;
pub mod queue;
pub mod session;
pub mod timer;
pub mod vocabulary;

pub use mode::{FeedbackGranularity, PracticeMode};
pub use session::{Feedback, KeyOutcome, Phase, PracticeSession, PracticeWord, SessionSnapshot};
pub use timer::SettleTimer;
pub use vocabulary::{validate_vocabulary, words_for, ContentError, WordEntry};

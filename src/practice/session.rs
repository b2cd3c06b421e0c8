//! 타자 연습 세션 상태 기계
//!
//! 낱말 하나마다 `AwaitingKey(cursor=0) -> ... -> Complete(cursor=len)`로 진행합니다.
//! 맞는 키는 커서를 한 칸 옮기고, 틀린 키는 커서를 그대로 둔 채 현재 칸에
//! 틀림 표시를 남깁니다. 다음 낱말로 넘어가는 지연은 호스트가 맡습니다.

use std::collections::BTreeMap;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::core::decomposer::KeystrokeSequence;
use crate::core::hangul_fsm::compose;
use crate::keyboard::matcher::{evaluate, resolve_target_key, KeyEvent, MatchVerdict, TargetKey};
use crate::practice::messages::{random_cheering, random_support, INITIAL_MESSAGE};
use crate::practice::mode::{FeedbackGranularity, PracticeMode};
use crate::practice::queue::WordQueue;
use crate::practice::vocabulary::{validate_entry, words_for, WordEntry};

/// 칸 하나의 맞음/틀림 표시
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Feedback {
    Correct,
    /// key: 실제로 누른 문자
    Incorrect { key: String },
}

/// 낱말 진행 단계
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    AwaitingKey,
    Complete,
}

/// 키 이벤트 처리 결과
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum KeyOutcome {
    /// 연습 입력이 아니거나 받을 수 없는 상태 (아무것도 바뀌지 않음)
    Ignored,
    /// 맞는 키, 커서 전진
    Correct { typed: char },
    /// 마지막 키까지 맞음
    WordComplete { typed: char },
    /// 틀린 키
    Incorrect { pressed: String },
}

/// 연습 중인 낱말
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeWord {
    pub entry: WordEntry,
    pub sequence: KeystrokeSequence,
}

/// 화면 그리기용 세션 상태
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SessionSnapshot {
    pub mode: PracticeMode,
    pub word: String,
    pub translation: Option<String>,
    pub keys: Vec<char>,
    pub cursor: usize,
    /// 글자별 입력 완료 여부
    pub typed_syllables: Vec<bool>,
    pub feedback: BTreeMap<usize, Feedback>,
    pub message: String,
    pub phase: Phase,
    pub highlighted_keys: Vec<String>,
}

/// 타자 연습 세션
#[derive(Debug)]
pub struct PracticeSession {
    mode: PracticeMode,
    queue: WordQueue,
    rng: SmallRng,
    word: Option<PracticeWord>,
    cursor: usize,
    feedback: BTreeMap<usize, Feedback>,
    message: &'static str,
    phase: Phase,
}

impl PracticeSession {
    /// 모드의 기본 낱말 목록으로 세션 시작
    pub fn new(mode: PracticeMode) -> Self {
        Self::build(mode, WordQueue::new(words_for(mode)), SmallRng::from_entropy())
    }

    /// 고정 시드 세션 (테스트/재현용)
    pub fn with_seed(mode: PracticeMode, seed: u64) -> Self {
        Self::with_words(mode, words_for(mode), seed)
    }

    /// 지정한 낱말 목록으로 세션 시작
    pub fn with_words(mode: PracticeMode, words: Vec<WordEntry>, seed: u64) -> Self {
        Self::build(
            mode,
            WordQueue::with_seed(words, seed),
            SmallRng::seed_from_u64(seed.wrapping_add(1)),
        )
    }

    fn build(mode: PracticeMode, queue: WordQueue, rng: SmallRng) -> Self {
        let mut session = Self {
            mode,
            queue,
            rng,
            word: None,
            cursor: 0,
            feedback: BTreeMap::new(),
            message: INITIAL_MESSAGE,
            phase: Phase::AwaitingKey,
        };
        session.next_word();
        session
    }

    /// 다음 낱말로 넘어가고 커서/표시/문구 초기화
    ///
    /// 자판으로 입력할 수 없는 낱말은 경고를 남기고 건너뜁니다.
    pub fn next_word(&mut self) -> Option<&PracticeWord> {
        self.cursor = 0;
        self.feedback.clear();
        self.message = INITIAL_MESSAGE;
        self.phase = Phase::AwaitingKey;
        self.word = None;

        // 한 회차를 두 번 돌 동안 입력 가능한 낱말이 없으면 포기
        let attempts = self.queue.source_len() * 2;
        for _ in 0..attempts {
            let Some(entry) = self.queue.next_word() else {
                break;
            };
            if let Err(e) = validate_entry(&entry, self.mode) {
                log::warn!("낱말 건너뜀: {}", e);
                continue;
            }
            let sequence = self.mode.sequence_for(&entry.text);
            log::debug!("새 낱말: {} ({}타)", entry.text, sequence.len());
            self.word = Some(PracticeWord { entry, sequence });
            break;
        }

        if self.word.is_none() {
            log::error!("{} 모드에 입력 가능한 낱말이 없음", self.mode);
        }
        self.word.as_ref()
    }

    /// 키 이벤트 하나 처리
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        if self.phase == Phase::Complete {
            return KeyOutcome::Ignored;
        }
        let Some(word) = &self.word else {
            return KeyOutcome::Ignored;
        };
        let Some(expected) = word.sequence.key_at(self.cursor) else {
            return KeyOutcome::Ignored;
        };
        let layout = self.mode.layout();
        let Some(target) = resolve_target_key(expected, layout) else {
            log::warn!("{} 자판에 '{}' 키가 없음", layout.name, expected);
            return KeyOutcome::Ignored;
        };
        let Some(verdict) = evaluate(event, &target, layout) else {
            return KeyOutcome::Ignored;
        };

        let slot = match self.mode.granularity() {
            FeedbackGranularity::Syllable => word
                .sequence
                .syllable_at(self.cursor)
                .unwrap_or(self.cursor),
            FeedbackGranularity::Keystroke => self.cursor,
        };

        match verdict {
            MatchVerdict::Matched => {
                self.message = INITIAL_MESSAGE;
                if matches!(self.feedback.get(&slot), Some(Feedback::Incorrect { .. })) {
                    self.feedback.remove(&slot);
                }

                let typed_index = self.cursor;
                self.cursor += 1;

                if self.mode.granularity() == FeedbackGranularity::Syllable {
                    if let Some(syllable) = word.sequence.completed_syllable(typed_index) {
                        self.feedback.insert(syllable, Feedback::Correct);
                    }
                }

                if self.cursor == word.sequence.len() {
                    self.phase = Phase::Complete;
                    self.message = random_cheering(&mut self.rng);
                    KeyOutcome::WordComplete { typed: expected }
                } else {
                    KeyOutcome::Correct { typed: expected }
                }
            }
            MatchVerdict::Mismatched { pressed } => {
                self.message = random_support(&mut self.rng);
                self.feedback.insert(
                    slot,
                    Feedback::Incorrect {
                        key: pressed.clone(),
                    },
                );
                KeyOutcome::Incorrect { pressed }
            }
        }
    }

    /// 모드를 바꾸고 새 대기열로 다시 시작
    pub fn switch_mode(&mut self, mode: PracticeMode) {
        self.mode = mode;
        self.queue = WordQueue::with_seed(words_for(mode), self.rng_seed());
        self.next_word();
    }

    fn rng_seed(&mut self) -> u64 {
        use rand::Rng;
        self.rng.gen()
    }

    pub fn mode(&self) -> PracticeMode {
        self.mode
    }

    pub fn word(&self) -> Option<&PracticeWord> {
        self.word.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn feedback(&self) -> &BTreeMap<usize, Feedback> {
        &self.feedback
    }

    /// 다음에 입력할 자모/문자
    pub fn current_target(&self) -> Option<char> {
        if self.phase == Phase::Complete {
            return None;
        }
        self.word.as_ref()?.sequence.key_at(self.cursor)
    }

    /// 다음에 눌러야 할 키
    pub fn target_key(&self) -> Option<TargetKey<'static>> {
        resolve_target_key(self.current_target()?, self.mode.layout())
    }

    /// 지금까지 입력한 키를 조합한 글자
    pub fn typed_text(&self) -> String {
        match &self.word {
            Some(word) => compose(&word.sequence.keys()[..self.cursor]),
            None => String::new(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let highlighted_keys: Vec<String> = self
            .target_key()
            .map(|t| t.highlighted_codes().into_iter().map(String::from).collect())
            .unwrap_or_default();

        let mut snapshot = SessionSnapshot {
            mode: self.mode,
            word: String::new(),
            translation: None,
            keys: Vec::new(),
            cursor: self.cursor,
            typed_syllables: Vec::new(),
            feedback: self.feedback.clone(),
            message: self.message.to_string(),
            phase: self.phase,
            highlighted_keys,
        };
        if let Some(w) = &self.word {
            snapshot.word = w.entry.text.clone();
            snapshot.translation = w.entry.translation.clone();
            snapshot.keys = w.sequence.keys().to_vec();
            snapshot.typed_syllables = (0..w.sequence.syllable_ends().len())
                .map(|i| w.sequence.is_syllable_typed(i, self.cursor))
                .collect();
        }
        snapshot
    }
}

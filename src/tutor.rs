//! 연습 세션, 음성, 학습 기록을 묶는 컨트롤러

use serde::Serialize;

use crate::audio::{Speaker, SpeechOutput};
use crate::config::TadakConfig;
use crate::keyboard::matcher::KeyEvent;
use crate::practice::messages::INITIAL_MESSAGE;
use crate::practice::mode::PracticeMode;
use crate::practice::session::{KeyOutcome, PracticeSession};
use crate::progress::{ProgressReport, ProgressTracker};

/// 리포트에 보여줄 최대 문자 수
pub const REPORT_LIMIT: usize = 10;

/// 키 입력 한 번의 결과
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TutorUpdate {
    #[serde(flatten)]
    pub outcome: KeyOutcome,
    /// 이번 입력으로 별을 얻었는지
    pub star_awarded: bool,
}

/// 타자 연습 컨트롤러
pub struct Tutor<S: Speaker> {
    session: PracticeSession,
    speech: SpeechOutput<S>,
    progress: ProgressTracker,
}

impl<S: Speaker> Tutor<S> {
    pub fn new(session: PracticeSession, speaker: S) -> Self {
        Self {
            session,
            speech: SpeechOutput::new(speaker),
            progress: ProgressTracker::new(),
        }
    }

    /// 설정의 모드/음량/음소거로 시작
    pub fn from_config(config: &TadakConfig, speaker: S) -> Self {
        let mut tutor = Self::new(PracticeSession::new(config.mode), speaker);
        tutor.speech.set_volume(config.volume_level);
        tutor.speech.set_muted(config.muted);
        tutor
    }

    /// 키 이벤트 처리: 맞는 입력 기록, 바뀐 안내 문구 읽어주기
    pub fn handle_key(&mut self, event: &KeyEvent) -> TutorUpdate {
        let previous_message = self.session.message();
        let outcome = self.session.handle_key(event);

        let star_awarded = match &outcome {
            KeyOutcome::Correct { typed } | KeyOutcome::WordComplete { typed } => {
                self.progress.record_correct(Some(*typed))
            }
            KeyOutcome::Incorrect { .. } | KeyOutcome::Ignored => false,
        };

        let message = self.session.message();
        if message != previous_message && message != INITIAL_MESSAGE {
            self.speech.say(message);
        }

        TutorUpdate {
            outcome,
            star_awarded,
        }
    }

    /// 마우스 연습의 맞는 클릭 (문자 없음)
    pub fn record_click(&mut self) -> bool {
        self.progress.record_correct(None)
    }

    pub fn next_word(&mut self) {
        self.session.next_word();
    }

    pub fn switch_mode(&mut self, mode: PracticeMode) {
        log::info!("연습 모드 변경: {} -> {}", self.session.mode(), mode);
        self.session.switch_mode(mode);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.speech.set_muted(muted);
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.speech.toggle_mute()
    }

    pub fn set_volume(&mut self, level: u8) {
        self.speech.set_volume(level);
    }

    pub fn report(&self) -> ProgressReport {
        self.progress.report(REPORT_LIMIT)
    }

    pub fn session(&self) -> &PracticeSession {
        &self.session
    }

    pub fn speech(&self) -> &SpeechOutput<S> {
        &self.speech
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }
}

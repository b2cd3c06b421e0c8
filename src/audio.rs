//! 안내 문구 음성 출력
//!
//! 실제 음성 합성은 `Speaker` 구현체가 맡고, `SpeechOutput`은 음소거와
//! 음량, "말하기 전에 이전 발화 취소" 규칙만 관리합니다.

use serde::Serialize;

/// 음량 단계 범위
pub const MIN_VOLUME_LEVEL: u8 = 1;
pub const MAX_VOLUME_LEVEL: u8 = 5;
pub const DEFAULT_VOLUME_LEVEL: u8 = 2;

const SPEECH_LANG: &str = "ko-KR";
const SPEECH_PITCH: f32 = 1.1;
const SPEECH_RATE: f32 = 0.9;

/// 발화 하나
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub lang: String,
    /// 0.0 ~ 1.0
    pub volume: f32,
    pub pitch: f32,
    pub rate: f32,
}

impl Utterance {
    /// 한국어 음성, 음량 단계 `level`의 발화
    pub fn korean(text: &str, level: u8) -> Self {
        Self {
            text: text.to_string(),
            lang: SPEECH_LANG.to_string(),
            volume: f32::from(clamp_level(level)) / f32::from(MAX_VOLUME_LEVEL),
            pitch: SPEECH_PITCH,
            rate: SPEECH_RATE,
        }
    }
}

/// 음성 합성 장치
pub trait Speaker {
    fn speak(&mut self, utterance: &Utterance);
    /// 진행 중이거나 대기 중인 발화 모두 중단
    fn cancel(&mut self);
}

/// 터미널용: 발화를 화면과 로그에 출력
#[derive(Debug, Default)]
pub struct ConsoleSpeaker;

impl Speaker for ConsoleSpeaker {
    fn speak(&mut self, utterance: &Utterance) {
        log::info!(
            "말하기: {} (음량 {:.1}, {})",
            utterance.text,
            utterance.volume,
            utterance.lang
        );
        println!("🔊 {}", utterance.text);
    }

    fn cancel(&mut self) {
        log::trace!("발화 취소");
    }
}

fn clamp_level(level: u8) -> u8 {
    level.clamp(MIN_VOLUME_LEVEL, MAX_VOLUME_LEVEL)
}

/// 음소거/음량을 적용해 `Speaker`로 보내는 관문
#[derive(Debug)]
pub struct SpeechOutput<S: Speaker> {
    speaker: S,
    muted: bool,
    volume_level: u8,
}

impl<S: Speaker> SpeechOutput<S> {
    pub fn new(speaker: S) -> Self {
        Self {
            speaker,
            muted: false,
            volume_level: DEFAULT_VOLUME_LEVEL,
        }
    }

    /// 이전 발화를 끊고 말하기. 음소거 중이면 아무것도 하지 않음
    pub fn say(&mut self, text: &str) {
        if self.muted {
            return;
        }
        self.speaker.cancel();
        self.speaker
            .speak(&Utterance::korean(text, self.volume_level));
    }

    /// 음소거하면 말하던 것도 즉시 중단
    pub fn set_muted(&mut self, muted: bool) {
        if muted && !self.muted {
            self.speaker.cancel();
        }
        self.muted = muted;
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.set_muted(!self.muted);
        self.muted
    }

    /// 음량 단계 설정 (1..=5로 제한). 음소거 중이면 해제
    pub fn set_volume(&mut self, level: u8) {
        self.muted = false;
        self.volume_level = clamp_level(level);
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn volume_level(&self) -> u8 {
        self.volume_level
    }

    pub fn speaker(&self) -> &S {
        &self.speaker
    }
}

impl<S: Speaker> Drop for SpeechOutput<S> {
    fn drop(&mut self) {
        self.speaker.cancel();
    }
}

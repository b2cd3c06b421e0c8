//! 통합 테스트 - 분해, 키 판정, 연습 세션

use tadak::core::decomposer::syllable_end_indices;
use tadak::keyboard::layout::{ENGLISH_101, KOREAN_101};
use tadak::keyboard::synth::synthesize;
use tadak::practice::vocabulary::{WordEntry, KOREAN_WORDS};
use tadak::practice::{Feedback, PracticeMode, PracticeSession};
use tadak::{compose, decompose, evaluate, resolve_target_key, KeyEvent, KeyOutcome, MatchVerdict};

#[test]
fn test_basic_decomposition() {
    assert_eq!(decompose("가나다"), vec!['ㄱ', 'ㅏ', 'ㄴ', 'ㅏ', 'ㄷ', 'ㅏ']);
    assert_eq!(decompose("사과"), vec!['ㅅ', 'ㅏ', 'ㄱ', 'ㅗ', 'ㅏ']);
}

#[test]
fn test_compound_final_decomposition() {
    assert_eq!(decompose("닭"), vec!['ㄷ', 'ㅏ', 'ㄹ', 'ㄱ']);
    assert_eq!(decompose("읽"), vec!['ㅇ', 'ㅣ', 'ㄹ', 'ㄱ']);
    assert_eq!(decompose("값"), vec!['ㄱ', 'ㅏ', 'ㅂ', 'ㅅ']);
}

#[test]
fn test_double_consonant_is_single_key() {
    assert_eq!(decompose("까"), vec!['ㄲ', 'ㅏ']);
    assert_eq!(decompose("싼"), vec!['ㅆ', 'ㅏ', 'ㄴ']);
}

#[test]
fn test_non_hangul_passthrough() {
    assert_eq!(decompose("a1!"), vec!['a', '1', '!']);
    assert_eq!(decompose("ㄱ"), vec!['ㄱ']);
    assert!(decompose("").is_empty());
}

#[test]
fn test_recompose_words() {
    for word in ["안녕하세요", "한글", "완료", "읽", "가가기", "안지", "코끼리"] {
        assert_eq!(compose(&decompose(word)), word);
    }
    for word in KOREAN_WORDS {
        assert_eq!(compose(&decompose(word)), word);
    }
}

#[test]
fn test_syllable_ends() {
    let keys = decompose("호랑이");
    assert_eq!(syllable_end_indices("호랑이", &keys), vec![1, 4, 6]);
}

#[test]
fn test_target_key_resolution() {
    let target = resolve_target_key('ㅆ', &KOREAN_101).unwrap();
    assert_eq!(target.key.code, "KeyT");
    assert!(target.shift_required);

    let target = resolve_target_key('A', &ENGLISH_101).unwrap();
    assert_eq!(target.key.code, "KeyA");
    assert!(target.shift_required);

    assert!(resolve_target_key('ㄳ', &KOREAN_101).is_none());
}

#[test]
fn test_match_evaluation() {
    let target = resolve_target_key('ㄱ', &KOREAN_101).unwrap();

    assert_eq!(
        evaluate(&KeyEvent::new("KeyR", false), &target, &KOREAN_101),
        Some(MatchVerdict::Matched)
    );
    assert_eq!(
        evaluate(&KeyEvent::new("KeyR", true), &target, &KOREAN_101),
        Some(MatchVerdict::Mismatched {
            pressed: "ㄲ".to_string()
        })
    );

    let ctrl = KeyEvent {
        ctrl: true,
        ..KeyEvent::new("KeyR", false)
    };
    assert_eq!(evaluate(&ctrl, &target, &KOREAN_101), None);
}

#[test]
fn test_session_korean_word_end_to_end() {
    let mut session =
        PracticeSession::with_words(PracticeMode::KoreanWords, vec![WordEntry::new("사과")], 11);

    let outcomes: Vec<KeyOutcome> = synthesize("사과")
        .iter()
        .map(|event| session.handle_key(event))
        .collect();

    assert_eq!(outcomes.len(), 5);
    assert!(matches!(outcomes[4], KeyOutcome::WordComplete { typed: 'ㅏ' }));
    assert_eq!(session.cursor(), 5);
    assert!(session.is_complete());
    assert!(!session
        .feedback()
        .values()
        .any(|f| matches!(f, Feedback::Incorrect { .. })));
    assert_eq!(session.typed_text(), "사과");
}

#[test]
fn test_session_recovers_after_mistake() {
    let mut session =
        PracticeSession::with_words(PracticeMode::EnglishWords, vec![WordEntry::new("eat")], 11);

    assert!(matches!(
        session.handle_key(&KeyEvent::new("KeyW", false)),
        KeyOutcome::Incorrect { .. }
    ));
    assert_eq!(session.cursor(), 0);

    for event in synthesize("eat") {
        session.handle_key(&event);
    }
    assert!(session.is_complete());
    assert!(session.feedback().is_empty());
}

#[test]
fn test_every_mode_produces_typable_words() {
    for mode in PracticeMode::ALL {
        let mut session = PracticeSession::with_seed(mode, 2024);
        for _ in 0..30 {
            let word = session.word().expect("낱말이 있어야 함").clone();
            for event in synthesize(&word.entry.text) {
                session.handle_key(&event);
            }
            assert!(session.is_complete(), "{} / {}", mode, word.entry.text);
            session.next_word();
        }
    }
}

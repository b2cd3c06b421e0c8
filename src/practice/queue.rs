//! 연습 낱말 대기열
//!
//! 원본 목록을 섞어서 하나씩 꺼내고, 다 꺼내면 다시 섞어 채웁니다.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::practice::vocabulary::WordEntry;

/// 섞인 낱말 대기열
#[derive(Debug, Clone)]
pub struct WordQueue {
    source: Vec<WordEntry>,
    remaining: VecDeque<WordEntry>,
    rng: SmallRng,
}

impl WordQueue {
    pub fn new(source: Vec<WordEntry>) -> Self {
        Self::with_rng(source, SmallRng::from_entropy())
    }

    /// 고정 시드 대기열 (테스트/재현용)
    pub fn with_seed(source: Vec<WordEntry>, seed: u64) -> Self {
        Self::with_rng(source, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(source: Vec<WordEntry>, rng: SmallRng) -> Self {
        Self {
            source,
            remaining: VecDeque::new(),
            rng,
        }
    }

    /// 다음 낱말. 대기열이 비면 원본을 다시 섞어 채움
    /// 원본 목록이 비어 있으면 None
    pub fn next_word(&mut self) -> Option<WordEntry> {
        if self.remaining.is_empty() {
            self.refill();
        }
        self.remaining.pop_front()
    }

    /// 원본 낱말 수
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// 이번 회차에 남은 낱말 수
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    fn refill(&mut self) {
        let mut shuffled = self.source.clone();
        shuffled.shuffle(&mut self.rng);
        log::debug!("낱말 대기열 다시 섞음: {}개", shuffled.len());
        self.remaining = shuffled.into();
    }
}

//! 학습 기록: 맞게 입력한 횟수, 별, 문자별 횟수

use std::collections::HashMap;

use serde::Serialize;

/// 별 하나를 얻는 데 필요한 맞는 입력 수
pub const INPUTS_PER_STAR: u32 = 10;

/// 리포트 막대의 최대 너비 (%)
const MAX_BAR_PERCENT: f32 = 80.0;

/// 세션 동안의 학습 기록 (저장하지 않음)
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    correct_inputs: u32,
    stars: u32,
    per_char: HashMap<char, u32>,
}

/// 리포트의 문자 한 줄
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ProgressEntry {
    pub character: char,
    pub count: u32,
    /// 가장 많이 친 문자 대비 막대 너비
    pub bar_percent: f32,
}

/// 학습 리포트
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ProgressReport {
    pub stars: u32,
    pub correct_inputs: u32,
    pub entries: Vec<ProgressEntry>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 맞는 입력 기록. 별을 새로 얻으면 true
    ///
    /// 마우스 클릭처럼 문자가 없는 입력은 `None`
    pub fn record_correct(&mut self, character: Option<char>) -> bool {
        self.correct_inputs += 1;
        if let Some(c) = character {
            *self.per_char.entry(c).or_insert(0) += 1;
        }
        if self.correct_inputs % INPUTS_PER_STAR == 0 {
            self.stars += 1;
            log::info!("별 획득: {}개", self.stars);
            true
        } else {
            false
        }
    }

    pub fn stars(&self) -> u32 {
        self.stars
    }

    pub fn correct_inputs(&self) -> u32 {
        self.correct_inputs
    }

    pub fn count_for(&self, character: char) -> u32 {
        self.per_char.get(&character).copied().unwrap_or(0)
    }

    /// 많이 친 순서로 최대 `limit`개 문자
    pub fn report(&self, limit: usize) -> ProgressReport {
        let mut counts: Vec<(char, u32)> = self.per_char.iter().map(|(&c, &n)| (c, n)).collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        counts.truncate(limit);

        let max = counts.first().map(|&(_, n)| n).unwrap_or(0).max(1);
        let entries = counts
            .into_iter()
            .map(|(character, count)| ProgressEntry {
                character,
                count,
                bar_percent: count as f32 / max as f32 * MAX_BAR_PERCENT,
            })
            .collect();

        ProgressReport {
            stars: self.stars,
            correct_inputs: self.correct_inputs,
            entries,
        }
    }
}

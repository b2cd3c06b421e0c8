//! 낱말 완료 후 다음 낱말까지의 지연 타이머
//!
//! 백그라운드 스레드 하나가 명령 채널을 기다리다 기한이 지나면 콜백을 부릅니다.
//! 새로 예약하면 이전 예약을 덮어쓰고, 타이머를 버리면 예약도 함께 취소됩니다.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// 예약이 없을 때 채널을 기다리는 시간
const IDLE_WAIT: Duration = Duration::from_secs(3600);

enum TimerCommand {
    Schedule(Duration),
    Cancel,
}

/// 한 번만 울리는 지연 타이머
pub struct SettleTimer {
    tx: Option<Sender<TimerCommand>>,
    handle: Option<JoinHandle<()>>,
}

impl SettleTimer {
    /// 타이머 스레드 시작
    pub fn spawn<F>(on_fire: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<TimerCommand>();

        let handle = thread::spawn(move || {
            let mut deadline: Option<Instant> = None;

            loop {
                let wait = deadline
                    .map(|d| d.saturating_duration_since(Instant::now()))
                    .unwrap_or(IDLE_WAIT);

                match rx.recv_timeout(wait) {
                    Ok(TimerCommand::Schedule(delay)) => {
                        deadline = Some(Instant::now() + delay);
                    }
                    Ok(TimerCommand::Cancel) => {
                        deadline = None;
                    }
                    Err(RecvTimeoutError::Timeout) => {
                        if deadline.is_some_and(|d| Instant::now() >= d) {
                            deadline = None;
                            on_fire();
                        }
                    }
                    Err(RecvTimeoutError::Disconnected) => {
                        log::debug!("다음 낱말 타이머 스레드 종료");
                        break;
                    }
                }
            }
        });

        Self {
            tx: Some(tx),
            handle: Some(handle),
        }
    }

    /// `delay` 뒤에 콜백 예약 (대기 중인 예약은 대체)
    pub fn schedule(&self, delay: Duration) {
        self.send(TimerCommand::Schedule(delay));
    }

    /// 대기 중인 예약 취소
    pub fn cancel(&self) {
        self.send(TimerCommand::Cancel);
    }

    fn send(&self, command: TimerCommand) {
        if let Some(tx) = &self.tx {
            if tx.send(command).is_err() {
                log::warn!("다음 낱말 타이머 스레드가 이미 종료됨");
            }
        }
    }
}

impl Drop for SettleTimer {
    fn drop(&mut self) {
        // 송신측을 닫으면 스레드가 예약을 버리고 종료
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

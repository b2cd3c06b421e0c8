//! 타닥 - 어린이용 한글/영어 타자 연습 (터미널)
//!
//! 한 줄씩 입력하면 그 줄을 만든 물리 키 입력으로 바꿔 판정합니다.
//! 영문 자판으로 "tkrhk"를 치든 한글 IME로 "사과"를 치든 결과는 같습니다.

use clap::Parser;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tadak::audio::ConsoleSpeaker;
use tadak::config::{load_config, load_config_from};
use tadak::keyboard::synth::synthesize;
use tadak::practice::{validate_vocabulary, KeyOutcome, PracticeMode, SettleTimer};
use tadak::tutor::Tutor;

/// 어린이용 한글/영어 타자 연습
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 연습 모드 (korean-letters, korean-words, english)
    #[arg(short, long, value_name = "MODE")]
    mode: Option<PracticeMode>,

    /// 낱말 완료 후 다음 낱말까지 대기 시간 (ms)
    #[arg(long, value_name = "MS")]
    settle_ms: Option<u64>,

    /// 음량 단계 (1~5)
    #[arg(long, value_name = "LEVEL")]
    volume: Option<u8>,

    /// 음성 끄고 시작
    #[arg(long)]
    muted: bool,

    /// 설정 파일 경로 (기본: ~/.config/tadak/config.json)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// 메인 루프가 처리할 이벤트
enum AppEvent {
    /// 입력된 한 줄
    Text(String),
    /// ':'로 시작하는 명령
    Command(Command),
    /// 대기 시간이 지나 다음 낱말로
    Advance,
    Quit,
}

enum Command {
    Mute,
    Volume(u8),
    Mode(PracticeMode),
    Next,
    Report,
    State,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.trim_start_matches(':').split_whitespace();
    let name = parts.next().unwrap_or("");
    let arg = parts.next();
    match (name, arg) {
        ("mute", _) => Ok(Command::Mute),
        ("volume", Some(level)) => level
            .parse()
            .map(Command::Volume)
            .map_err(|_| format!("음량은 1~5 숫자: {}", level)),
        ("mode", Some(mode)) => mode.parse().map(Command::Mode),
        ("next", _) => Ok(Command::Next),
        ("report", _) => Ok(Command::Report),
        ("state", _) => Ok(Command::State),
        ("help", _) => Ok(Command::Help),
        ("quit", _) | ("q", _) => Ok(Command::Quit),
        _ => Err(format!("알 수 없는 명령: {}", line)),
    }
}

fn print_help() {
    println!("명령: :mute  :volume N  :mode MODE  :next  :report  :state  :help  :quit");
}

fn print_prompt(tutor: &Tutor<ConsoleSpeaker>) {
    let session = tutor.session();
    let Some(word) = session.word() else {
        println!("연습할 낱말이 없습니다. :mode 로 다른 모드를 골라보세요.");
        return;
    };

    println!();
    match &word.entry.translation {
        Some(translation) => println!("  {}  ({})", word.entry.text, translation),
        None => println!("  {}", word.entry.text),
    }

    let keys: Vec<String> = word
        .sequence
        .keys()
        .iter()
        .enumerate()
        .map(|(i, k)| {
            if i == session.cursor() {
                format!("[{}]", k)
            } else {
                k.to_string()
            }
        })
        .collect();
    println!("  {}", keys.join(" "));

    if let Some(target) = session.target_key() {
        let label = target
            .key
            .display
            .clone()
            .or_else(|| target.key.base.map(|c| c.to_string()))
            .unwrap_or_else(|| target.key.code.clone());
        let shift = if target.shift_required { "Shift + " } else { "" };
        println!("  다음 키: {}{} ({})", shift, label, target.key.code);
    }
    println!("  {}", session.message());
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // 설정 로드 후 명령행 옵션으로 덮어쓰기
    let mut config = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(ms) = cli.settle_ms {
        config.settle_delay_ms = ms;
    }
    if let Some(level) = cli.volume {
        config.volume_level = level;
    }
    if cli.muted {
        config.muted = true;
    }
    log::debug!("설정: {:?}", config);

    for mode in PracticeMode::ALL {
        if let Err(e) = validate_vocabulary(mode) {
            log::warn!("{} 낱말 목록 오류: {}", mode, e);
        }
    }

    let settle_delay = Duration::from_millis(config.settle_delay_ms);
    let mut tutor = Tutor::from_config(&config, ConsoleSpeaker);

    // stdin 스레드와 타이머가 보낸 이벤트를 메인 스레드에서 직렬 처리
    let (tx, rx) = mpsc::channel::<AppEvent>();

    let timer_tx = tx.clone();
    let timer = SettleTimer::spawn(move || {
        let _ = timer_tx.send(AppEvent::Advance);
    });

    let input_tx = tx;
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::error!("입력 읽기 실패: {}", e);
                    break;
                }
            };
            let event = if line.trim_start().starts_with(':') {
                match parse_command(line.trim()) {
                    Ok(command) => AppEvent::Command(command),
                    Err(e) => {
                        eprintln!("{}", e);
                        continue;
                    }
                }
            } else {
                AppEvent::Text(line)
            };
            if input_tx.send(event).is_err() {
                return;
            }
        }
        let _ = input_tx.send(AppEvent::Quit);
    });

    println!("타닥! {} 모드 ({})", config.mode.label(), config.mode);
    print_help();
    print_prompt(&tutor);

    while let Ok(event) = rx.recv() {
        match event {
            AppEvent::Text(line) => {
                for key in synthesize(&line) {
                    let update = tutor.handle_key(&key);
                    match &update.outcome {
                        KeyOutcome::Ignored => continue,
                        KeyOutcome::Correct { typed } => {
                            println!("  ✓ {}  {}", typed, tutor.session().typed_text());
                        }
                        KeyOutcome::Incorrect { pressed } => {
                            println!("  ✗ {} (다시!)", pressed);
                        }
                        KeyOutcome::WordComplete { .. } => {
                            println!("  ✓ {}  {}", tutor.session().typed_text(), tutor.session().message());
                            timer.schedule(settle_delay);
                        }
                    }
                    if update.star_awarded {
                        println!("  ⭐ 별 {}개!", tutor.progress().stars());
                    }
                }
                if !tutor.session().is_complete() {
                    print_prompt(&tutor);
                }
            }
            AppEvent::Advance => {
                tutor.next_word();
                print_prompt(&tutor);
            }
            AppEvent::Command(command) => match command {
                Command::Mute => {
                    let muted = tutor.toggle_mute();
                    println!("음성 {}", if muted { "끔" } else { "켬" });
                }
                Command::Volume(level) => {
                    tutor.set_volume(level);
                    println!("음량 {}", tutor.speech().volume_level());
                }
                Command::Mode(mode) => {
                    timer.cancel();
                    tutor.switch_mode(mode);
                    println!("{} 모드", mode.label());
                    print_prompt(&tutor);
                }
                Command::Next => {
                    timer.cancel();
                    tutor.next_word();
                    print_prompt(&tutor);
                }
                Command::Report => match serde_json::to_string_pretty(&tutor.report()) {
                    Ok(json) => println!("{}", json),
                    Err(e) => log::error!("리포트 직렬화 실패: {}", e),
                },
                Command::State => match serde_json::to_string_pretty(&tutor.session().snapshot()) {
                    Ok(json) => println!("{}", json),
                    Err(e) => log::error!("상태 직렬화 실패: {}", e),
                },
                Command::Help => print_help(),
                Command::Quit => break,
            },
            AppEvent::Quit => break,
        }
    }

    log::info!("종료: 별 {}개", tutor.progress().stars());
}

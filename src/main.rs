use std::path::PathBuf;

use clap::{Parser, Subcommand};

use unitflow::{app, config, conversion, history};

/// UnitFlow 단위 변환기.
#[derive(Parser)]
#[command(name = "unitflow", version, about = "카테고리별 단위 변환기와 최근 변환 기록")]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: PathBuf,
    /// 기록 파일 경로
    #[arg(long, default_value = history::HISTORY_FILE)]
    history: PathBuf,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 한 건을 변환해 출력하고 종료한다
    Convert {
        /// 카테고리 (length, weight, temperature, area, volume, speed, time, data)
        category: String,
        /// 변환할 값
        value: String,
        /// 입력 단위 (ex: meters, kg, celsius)
        from: String,
        /// 변환 단위 (ex: feet, lb, kelvin)
        to: String,
        /// 소수 자리수
        #[arg(long, default_value_t = 4)]
        precision: usize,
    },
    /// 최근 변환 기록을 출력한다
    History,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match cli.command {
        Some(Command::Convert {
            category,
            value,
            from,
            to,
            precision,
        }) => {
            let category = conversion::parse_category(&category)?;
            match conversion::evaluate(category, &value, &from, &to)? {
                Some(result) => {
                    let to_id = conversion::canonical_unit_id(category, &to)?;
                    println!(
                        "{} {}",
                        conversion::format_result(Some(result), precision),
                        conversion::spaced_name(to_id)
                    );
                    println!("{}", conversion::formula(category, &from, &to)?);
                }
                None => println!("값을 입력하면 변환 결과가 표시됩니다."),
            }
        }
        Some(Command::History) => {
            let store = history::HistoryStore::load(cli.history);
            for row in store.render() {
                println!("{row}");
            }
        }
        None => {
            let cfg = config::load_or_default(&cli.config)?;
            let store = history::HistoryStore::load(cli.history);
            let mut app = app::App::new(cfg, cli.config, store);
            app::run(&mut app)?;
        }
    }
    Ok(())
}

use std::io::{self, Write};
use std::time::Instant;

use crate::app::{App, AppError};
use crate::conversion::{self, display_name, spaced_name, Category};
use crate::history::HistoryEntry;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    ChangeCategory,
    History,
    ClearHistory,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(app: &App) -> Result<MenuChoice, AppError> {
    println!("\n=== UnitFlow ===");
    println!(
        "카테고리: {} | 테마: {} | 정밀도: {}자리",
        display_name(app.category.id()),
        app.config.theme.id(),
        app.precision
    );
    println!("1) 단위 변환");
    println!("2) 카테고리 변경");
    println!("3) 최근 변환 기록");
    println!("4) 기록 삭제");
    println!("5) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::ChangeCategory),
            "3" => return Ok(MenuChoice::History),
            "4" => return Ok(MenuChoice::ClearHistory),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 변환 세션을 처리한다.
///
/// 값을 입력할 때마다 결과와 공식을 보여 주고, 입력이 멈춘 뒤에만
/// 디바운서를 거쳐 기록에 남긴다. `s`는 단위 교환, 빈 줄은 복귀.
pub fn handle_conversion(app: &mut App) -> Result<(), AppError> {
    println!("\n-- 단위 변환: {} --", display_name(app.category.id()));
    let units = app.category.unit_ids();
    for (i, unit) in units.iter().enumerate() {
        println!("{}) {}", i + 1, display_name(unit));
    }
    let mut from = select_unit(&units, "입력 단위 번호: ", 0)?;
    // 기본 대상 단위는 목록의 두 번째 항목
    let default_to = if units.len() > 1 { 1 } else { 0 };
    let mut to = select_unit(&units, "변환 단위 번호: ", default_to)?;

    println!("값을 입력하세요. s=단위 교환, 빈 줄=뒤로");
    let mut last_raw = String::new();
    loop {
        app.flush_capture(Instant::now())?;
        let line = read_line("값 입력: ")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }
        if trimmed.eq_ignore_ascii_case("s") {
            std::mem::swap(&mut from, &mut to);
            println!("단위를 교환했습니다: {} → {}", spaced_name(from), spaced_name(to));
            if last_raw.is_empty() {
                continue;
            }
        } else {
            last_raw = trimmed.to_string();
        }
        show_conversion(app, &last_raw, from, to)?;
    }
    app.flush_capture(Instant::now())?;
    Ok(())
}

/// 한 번의 입력을 변환해 출력하고 디바운서에 제출한다.
fn show_conversion(app: &mut App, raw: &str, from: &str, to: &str) -> Result<(), AppError> {
    let value = match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            // 숫자가 아닌 입력은 오류가 아니라 결과 없음으로 처리한다
            println!("값을 입력하면 변환 결과가 표시됩니다.");
            return Ok(());
        }
    };
    let result = conversion::convert(app.category, value, from, to)?;
    println!(
        "결과: {} {}",
        conversion::format_result(Some(result), app.precision),
        spaced_name(to)
    );
    println!("공식: {}", conversion::formula(app.category, from, to)?);
    let entry = HistoryEntry::new(value, from, result, to, app.category);
    app.capture.submit(entry, Instant::now());
    Ok(())
}

/// 카테고리 변경 메뉴를 처리한다. 변경 즉시 설정에 저장된다.
pub fn handle_category_change(app: &mut App) -> Result<(), AppError> {
    println!("\n-- 카테고리 변경 --");
    for (i, category) in Category::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, display_name(category.id()));
    }
    loop {
        let sel = read_line("카테고리 번호(취소하려면 엔터): ")?;
        let trimmed = sel.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        if let Ok(n) = trimmed.parse::<usize>() {
            if n >= 1 && n <= Category::ALL.len() {
                let category = Category::ALL[n - 1];
                app.set_category(category)?;
                println!("카테고리를 {} 로 변경했습니다.", display_name(category.id()));
                return Ok(());
            }
        }
        println!("지원하지 않는 번호입니다.");
    }
}

/// 최근 변환 기록을 출력한다. 최신 항목이 먼저 온다.
pub fn show_history(app: &App) {
    println!("\n-- 최근 변환 기록 --");
    for row in app.history.render() {
        println!("{row}");
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(app: &mut App) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!("1) 테마 전환 (현재: {})", app.config.theme.id());
    println!("2) 표시 정밀도 (현재: {}자리)", app.precision);
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    match sel.trim() {
        "" => {}
        "1" => {
            app.toggle_theme()?;
            println!("테마가 {} 로 설정되었습니다.", app.config.theme.id());
        }
        "2" => loop {
            let s = read_line("소수 자리수(0~10): ")?;
            if let Ok(n) = s.trim().parse::<usize>() {
                if n <= 10 {
                    app.precision = n;
                    println!("표시 정밀도를 {}자리로 설정했습니다.", n);
                    break;
                }
            }
            println!("0에서 10 사이의 정수를 입력하세요.");
        },
        _ => println!("잘못된 입력이므로 변경하지 않습니다."),
    }
    Ok(())
}

fn select_unit<'a>(
    units: &[&'a str],
    prompt: &str,
    default_index: usize,
) -> Result<&'a str, AppError> {
    loop {
        let sel = read_line(prompt)?;
        let trimmed = sel.trim();
        if trimmed.is_empty() {
            return Ok(units[default_index]);
        }
        if let Ok(n) = trimmed.parse::<usize>() {
            if n >= 1 && n <= units.len() {
                return Ok(units[n - 1]);
            }
        }
        println!("지원하지 않는 번호입니다.");
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

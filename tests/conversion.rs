//! 변환 엔진 회귀 테스트.

use proptest::prelude::*;
use unitflow::conversion::{
    convert, display_name, evaluate, format_result, formula, parse_category, spaced_name, Category,
    ConversionError,
};

#[test]
fn identity_law_exact_for_every_unit() {
    // 같은 단위로의 변환은 모든 카테고리에서 비트 단위로 동일해야 한다
    let value = 3.75_f64;
    for category in Category::ALL {
        for unit in category.unit_ids() {
            let result = convert(category, value, unit, unit).expect("identity convert");
            assert_eq!(result, value, "{} {unit}", category.id());
        }
    }
}

#[test]
fn round_trip_law_within_tolerance() {
    let value = 123.456_f64;
    for category in Category::ALL {
        if category == Category::Temperature {
            continue;
        }
        let units = category.unit_ids();
        for from in &units {
            for to in &units {
                let there = convert(category, value, from, to).expect("convert");
                let back = convert(category, there, to, from).expect("convert back");
                assert!(
                    (back - value).abs() < 1e-6,
                    "{} {from}->{to}: {back}",
                    category.id()
                );
            }
        }
    }
}

#[test]
fn temperature_anchor_points() {
    let c2f = |v| convert(Category::Temperature, v, "celsius", "fahrenheit").unwrap();
    assert_eq!(c2f(0.0), 32.0);
    assert_eq!(c2f(100.0), 212.0);
    let k = convert(Category::Temperature, 0.0, "celsius", "kelvin").unwrap();
    assert_eq!(k, 273.15);
    let c = convert(Category::Temperature, 32.0, "fahrenheit", "celsius").unwrap();
    assert_eq!(c, 0.0);
}

#[test]
fn temperature_identity_skips_round_trip() {
    // 동일 단위는 공식을 거치지 않고 입력을 그대로 돌려준다
    let v = 36.6_f64;
    assert_eq!(
        convert(Category::Temperature, v, "kelvin", "kelvin").unwrap(),
        v
    );
}

#[test]
fn length_anchor_points() {
    let cm = convert(Category::Length, 1.0, "meters", "centimeters").unwrap();
    assert_eq!(cm, 100.0);
    let m = convert(Category::Length, 1.0, "kilometers", "meters").unwrap();
    assert!((m - 1000.0).abs() < 1e-9, "{m}");
}

#[test]
fn abbreviations_parse_to_same_units() {
    let a = convert(Category::Length, 2.5, "m", "ft").unwrap();
    let b = convert(Category::Length, 2.5, "meters", "feet").unwrap();
    assert_eq!(a, b);
}

#[test]
fn unknown_unit_is_an_error() {
    let err = convert(Category::Length, 1.0, "furlongs", "meters").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit(_)));
}

#[test]
fn unknown_category_is_an_error() {
    let err = parse_category("loudness").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownCategory(_)));
}

#[test]
fn evaluate_returns_none_for_invalid_input() {
    // 숫자가 아니거나 유한하지 않은 입력은 오류가 아니라 결과 없음
    for raw in ["", "abc", "NaN", "inf", "-inf", "1.2.3"] {
        let result = evaluate(Category::Length, raw, "meters", "feet").expect("no unit error");
        assert!(result.is_none(), "raw={raw:?}");
    }
}

#[test]
fn evaluate_parses_trimmed_numbers() {
    let result = evaluate(Category::Weight, "  2.5 ", "kilograms", "grams").unwrap();
    assert_eq!(result, Some(2500.0));
}

#[test]
fn formula_renders_ratio_at_four_decimals() {
    let text = formula(Category::Length, "meters", "centimeters").unwrap();
    assert_eq!(text, "1 meters = 100.0000 centimeters");
}

#[test]
fn formula_strips_underscores_from_unit_names() {
    let text = formula(Category::Weight, "kilograms", "metric_tons").unwrap();
    assert_eq!(text, "1 kilograms = 0.0010 metric tons");
}

#[test]
fn formula_for_temperature_is_descriptive() {
    let text = formula(Category::Temperature, "celsius", "fahrenheit").unwrap();
    assert_eq!(text, "Conversion depends on formula (celsius to fahrenheit)");
}

#[test]
fn formula_canonicalizes_abbreviations() {
    let text = formula(Category::Length, "m", "cm").unwrap();
    assert_eq!(text, "1 meters = 100.0000 centimeters");
}

#[test]
fn format_result_respects_precision() {
    assert_eq!(format_result(Some(1.23456), 2), "1.23");
    assert_eq!(format_result(Some(1.0), 0), "1");
    assert_eq!(format_result(Some(100.0), 4), "100.0000");
}

#[test]
fn format_result_renders_no_result_as_empty() {
    assert_eq!(format_result(None, 2), "");
}

#[test]
fn display_names_are_capitalized_and_spaced() {
    assert_eq!(display_name("metric_tons"), "Metric Tons");
    assert_eq!(display_name("meters_per_second"), "Meters Per Second");
    assert_eq!(spaced_name("square_kilometers"), "square kilometers");
}

#[test]
fn category_unit_lists_start_with_base_unit() {
    assert_eq!(category_first(Category::Length), "meters");
    assert_eq!(category_first(Category::Weight), "kilograms");
    assert_eq!(category_first(Category::Temperature), "celsius");
    assert_eq!(category_first(Category::Data), "bits");
}

fn category_first(category: Category) -> &'static str {
    category.unit_ids()[0]
}

proptest! {
    // 선형 카테고리의 왕복 변환은 원래 값으로 돌아와야 한다
    #[test]
    fn prop_length_round_trip(value in -1e9_f64..1e9, from_idx in 0usize..8, to_idx in 0usize..8) {
        let units = Category::Length.unit_ids();
        let from = units[from_idx];
        let to = units[to_idx];
        let there = convert(Category::Length, value, from, to).unwrap();
        let back = convert(Category::Length, there, to, from).unwrap();
        prop_assert!((back - value).abs() <= 1e-9 * value.abs().max(1.0));
    }

    #[test]
    fn prop_temperature_round_trip(value in -1e6_f64..1e6) {
        let there = convert(Category::Temperature, value, "celsius", "fahrenheit").unwrap();
        let back = convert(Category::Temperature, there, "fahrenheit", "celsius").unwrap();
        prop_assert!((back - value).abs() <= 1e-9 * value.abs().max(1.0));
    }
}

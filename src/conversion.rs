use serde::{Deserialize, Serialize};

use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 카테고리 문자열
    UnknownCategory(String),
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownCategory(c) => write!(f, "알 수 없는 카테고리: {c}"),
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 다루는 측정 카테고리를 나타낸다. 고정 집합이며 런타임 확장은 없다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Area,
    Volume,
    Speed,
    Time,
    Data,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Area,
        Category::Volume,
        Category::Speed,
        Category::Time,
        Category::Data,
    ];

    /// 저장과 표시에 사용하는 식별자.
    pub fn id(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Area => "area",
            Category::Volume => "volume",
            Category::Speed => "speed",
            Category::Time => "time",
            Category::Data => "data",
        }
    }

    /// 이 카테고리의 단위 식별자 목록. 선택 목록 구성에 사용한다.
    pub fn unit_ids(self) -> Vec<&'static str> {
        match self {
            Category::Length => LengthUnit::ALL.iter().map(|u| u.id()).collect(),
            Category::Weight => WeightUnit::ALL.iter().map(|u| u.id()).collect(),
            Category::Temperature => TemperatureUnit::ALL.iter().map(|u| u.id()).collect(),
            Category::Area => AreaUnit::ALL.iter().map(|u| u.id()).collect(),
            Category::Volume => VolumeUnit::ALL.iter().map(|u| u.id()).collect(),
            Category::Speed => SpeedUnit::ALL.iter().map(|u| u.id()).collect(),
            Category::Time => TimeUnit::ALL.iter().map(|u| u.id()).collect(),
            Category::Data => DataUnit::ALL.iter().map(|u| u.id()).collect(),
        }
    }
}

/// 카테고리 문자열을 enum으로 변환한다.
pub fn parse_category(s: &str) -> Result<Category, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "length" => Ok(Category::Length),
        "weight" => Ok(Category::Weight),
        "temperature" | "temp" => Ok(Category::Temperature),
        "area" => Ok(Category::Area),
        "volume" => Ok(Category::Volume),
        "speed" => Ok(Category::Speed),
        "time" => Ok(Category::Time),
        "data" => Ok(Category::Data),
        _ => Err(ConversionError::UnknownCategory(s.to_string())),
    }
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열은 `meters` 같은 전체 식별자 외에 `m`, `kg`, `km/h` 같은
/// 통용 약어도 허용한다.
pub fn convert(
    category: Category,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match category {
        Category::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        Category::Weight => {
            let from = parse_weight_unit(from_unit_str)?;
            let to = parse_weight_unit(to_unit_str)?;
            Ok(convert_weight(value, from, to))
        }
        Category::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        Category::Area => {
            let from = parse_area_unit(from_unit_str)?;
            let to = parse_area_unit(to_unit_str)?;
            Ok(convert_area(value, from, to))
        }
        Category::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
        Category::Speed => {
            let from = parse_speed_unit(from_unit_str)?;
            let to = parse_speed_unit(to_unit_str)?;
            Ok(convert_speed(value, from, to))
        }
        Category::Time => {
            let from = parse_time_unit(from_unit_str)?;
            let to = parse_time_unit(to_unit_str)?;
            Ok(convert_time(value, from, to))
        }
        Category::Data => {
            let from = parse_data_unit(from_unit_str)?;
            let to = parse_data_unit(to_unit_str)?;
            Ok(convert_data(value, from, to))
        }
    }
}

/// 입력 문자열을 숫자로 해석한 뒤 변환한다.
///
/// 숫자로 해석할 수 없거나 유한하지 않은 값은 오류가 아니라
/// "결과 없음"(`None`)으로 돌려주고 추가 계산을 하지 않는다.
pub fn evaluate(
    category: Category,
    raw: &str,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<Option<f64>, ConversionError> {
    let value = match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return Ok(None),
    };
    convert(category, value, from_unit_str, to_unit_str).map(Some)
}

/// 단위 문자열을 해당 카테고리의 정식 식별자로 정규화한다.
pub fn canonical_unit_id(
    category: Category,
    unit_str: &str,
) -> Result<&'static str, ConversionError> {
    match category {
        Category::Length => Ok(parse_length_unit(unit_str)?.id()),
        Category::Weight => Ok(parse_weight_unit(unit_str)?.id()),
        Category::Temperature => Ok(parse_temperature_unit(unit_str)?.id()),
        Category::Area => Ok(parse_area_unit(unit_str)?.id()),
        Category::Volume => Ok(parse_volume_unit(unit_str)?.id()),
        Category::Speed => Ok(parse_speed_unit(unit_str)?.id()),
        Category::Time => Ok(parse_time_unit(unit_str)?.id()),
        Category::Data => Ok(parse_data_unit(unit_str)?.id()),
    }
}

/// 변환 공식을 사람이 읽을 수 있는 한 줄 텍스트로 만든다.
///
/// 온도는 고정 배율 관계가 아니므로 수치 비율 대신 두 단위를 설명하는
/// 문장을 돌려주고, 나머지 카테고리는 원 단위 1에 해당하는 대상 단위
/// 양을 소수 4자리로 표시한다.
pub fn formula(
    category: Category,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<String, ConversionError> {
    let from_id = canonical_unit_id(category, from_unit_str)?;
    let to_id = canonical_unit_id(category, to_unit_str)?;
    if category == Category::Temperature {
        return Ok(format!(
            "Conversion depends on formula ({from_id} to {to_id})"
        ));
    }
    let ratio = convert(category, 1.0, from_id, to_id)?;
    Ok(format!(
        "1 {} = {:.4} {}",
        spaced_name(from_id),
        ratio,
        spaced_name(to_id)
    ))
}

/// 변환 결과를 지정된 소수 자리수로 렌더링한다. 결과 없음은 빈 문자열이다.
pub fn format_result(result: Option<f64>, precision: usize) -> String {
    match result {
        Some(v) => format!("{v:.precision$}"),
        None => String::new(),
    }
}

/// 식별자의 밑줄을 공백으로 바꾼 이름. 공식 표시에 사용한다.
pub fn spaced_name(id: &str) -> String {
    id.replace('_', " ")
}

/// 선택 목록에 표시하는 이름. 밑줄을 공백으로 바꾸고 단어 첫 글자를 대문자로 만든다.
pub fn display_name(id: &str) -> String {
    spaced_name(id)
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "meters" | "meter" | "m" => Ok(LengthUnit::Meters),
        "kilometers" | "kilometer" | "km" => Ok(LengthUnit::Kilometers),
        "centimeters" | "centimeter" | "cm" => Ok(LengthUnit::Centimeters),
        "millimeters" | "millimeter" | "mm" => Ok(LengthUnit::Millimeters),
        "miles" | "mile" | "mi" => Ok(LengthUnit::Miles),
        "yards" | "yard" | "yd" => Ok(LengthUnit::Yards),
        "feet" | "foot" | "ft" => Ok(LengthUnit::Feet),
        "inches" | "inch" | "in" => Ok(LengthUnit::Inches),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_weight_unit(s: &str) -> Result<WeightUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kilograms" | "kilogram" | "kg" => Ok(WeightUnit::Kilograms),
        "grams" | "gram" | "g" => Ok(WeightUnit::Grams),
        "milligrams" | "milligram" | "mg" => Ok(WeightUnit::Milligrams),
        "pounds" | "pound" | "lb" | "lbs" => Ok(WeightUnit::Pounds),
        "ounces" | "ounce" | "oz" => Ok(WeightUnit::Ounces),
        "metric_tons" | "metric_ton" | "ton" | "t" => Ok(WeightUnit::MetricTons),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "celsius" | "c" | "°c" => Ok(TemperatureUnit::Celsius),
        "fahrenheit" | "f" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "kelvin" | "k" => Ok(TemperatureUnit::Kelvin),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "square_meters" | "m2" | "m^2" | "sqm" => Ok(AreaUnit::SquareMeters),
        "square_kilometers" | "km2" | "km^2" => Ok(AreaUnit::SquareKilometers),
        "square_miles" | "mi2" | "mi^2" => Ok(AreaUnit::SquareMiles),
        "square_yards" | "yd2" | "yd^2" => Ok(AreaUnit::SquareYards),
        "square_feet" | "ft2" | "ft^2" | "sqft" => Ok(AreaUnit::SquareFeet),
        "acres" | "acre" | "ac" => Ok(AreaUnit::Acres),
        "hectares" | "hectare" | "ha" => Ok(AreaUnit::Hectares),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "liters" | "liter" | "litre" | "l" => Ok(VolumeUnit::Liters),
        "milliliters" | "milliliter" | "ml" => Ok(VolumeUnit::Milliliters),
        "cubic_meters" | "m3" | "m^3" => Ok(VolumeUnit::CubicMeters),
        "gallons" | "gallon" | "gal" => Ok(VolumeUnit::Gallons),
        "quarts" | "quart" | "qt" => Ok(VolumeUnit::Quarts),
        "pints" | "pint" | "pt" => Ok(VolumeUnit::Pints),
        "cups" | "cup" => Ok(VolumeUnit::Cups),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_speed_unit(s: &str) -> Result<SpeedUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "meters_per_second" | "m/s" | "mps" => Ok(SpeedUnit::MetersPerSecond),
        "kilometers_per_hour" | "km/h" | "kph" => Ok(SpeedUnit::KilometersPerHour),
        "miles_per_hour" | "mph" => Ok(SpeedUnit::MilesPerHour),
        "knots" | "knot" | "kn" => Ok(SpeedUnit::Knots),
        "feet_per_second" | "ft/s" | "fps" => Ok(SpeedUnit::FeetPerSecond),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_time_unit(s: &str) -> Result<TimeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "seconds" | "second" | "sec" | "s" => Ok(TimeUnit::Seconds),
        "milliseconds" | "millisecond" | "ms" => Ok(TimeUnit::Milliseconds),
        "minutes" | "minute" | "min" => Ok(TimeUnit::Minutes),
        "hours" | "hour" | "h" => Ok(TimeUnit::Hours),
        "days" | "day" | "d" => Ok(TimeUnit::Days),
        "weeks" | "week" | "w" => Ok(TimeUnit::Weeks),
        "years" | "year" | "y" => Ok(TimeUnit::Years),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_data_unit(s: &str) -> Result<DataUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "bits" | "bit" => Ok(DataUnit::Bits),
        "bytes" | "byte" => Ok(DataUnit::Bytes),
        "kilobytes" | "kilobyte" | "kb" => Ok(DataUnit::Kilobytes),
        "megabytes" | "megabyte" | "mb" => Ok(DataUnit::Megabytes),
        "gigabytes" | "gigabyte" | "gb" => Ok(DataUnit::Gigabytes),
        "terabytes" | "terabyte" | "tb" => Ok(DataUnit::Terabytes),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

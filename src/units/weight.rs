/// 무게 단위. 내부 기준은 킬로그램이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Kilograms,
    Grams,
    Milligrams,
    Pounds,
    Ounces,
    MetricTons,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 6] = [
        WeightUnit::Kilograms,
        WeightUnit::Grams,
        WeightUnit::Milligrams,
        WeightUnit::Pounds,
        WeightUnit::Ounces,
        WeightUnit::MetricTons,
    ];

    /// 기준 단위(킬로그램) 1에 해당하는 이 단위의 양.
    pub fn rate(self) -> f64 {
        match self {
            WeightUnit::Kilograms => 1.0,
            WeightUnit::Grams => 1000.0,
            WeightUnit::Milligrams => 1_000_000.0,
            WeightUnit::Pounds => 2.204_62,
            WeightUnit::Ounces => 35.274,
            WeightUnit::MetricTons => 0.001,
        }
    }

    /// 저장과 표시에 사용하는 식별자.
    pub fn id(self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "kilograms",
            WeightUnit::Grams => "grams",
            WeightUnit::Milligrams => "milligrams",
            WeightUnit::Pounds => "pounds",
            WeightUnit::Ounces => "ounces",
            WeightUnit::MetricTons => "metric_tons",
        }
    }
}

/// 무게를 다른 단위로 변환한다.
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    if from == to {
        return value;
    }
    value / from.rate() * to.rate()
}

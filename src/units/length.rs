/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Meters,
    Kilometers,
    Centimeters,
    Millimeters,
    Miles,
    Yards,
    Feet,
    Inches,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 8] = [
        LengthUnit::Meters,
        LengthUnit::Kilometers,
        LengthUnit::Centimeters,
        LengthUnit::Millimeters,
        LengthUnit::Miles,
        LengthUnit::Yards,
        LengthUnit::Feet,
        LengthUnit::Inches,
    ];

    /// 기준 단위(미터) 1에 해당하는 이 단위의 양.
    pub fn rate(self) -> f64 {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Kilometers => 0.001,
            LengthUnit::Centimeters => 100.0,
            LengthUnit::Millimeters => 1000.0,
            LengthUnit::Miles => 0.000_621_371,
            LengthUnit::Yards => 1.093_61,
            LengthUnit::Feet => 3.280_84,
            LengthUnit::Inches => 39.370_1,
        }
    }

    /// 저장과 표시에 사용하는 식별자.
    pub fn id(self) -> &'static str {
        match self {
            LengthUnit::Meters => "meters",
            LengthUnit::Kilometers => "kilometers",
            LengthUnit::Centimeters => "centimeters",
            LengthUnit::Millimeters => "millimeters",
            LengthUnit::Miles => "miles",
            LengthUnit::Yards => "yards",
            LengthUnit::Feet => "feet",
            LengthUnit::Inches => "inches",
        }
    }
}

/// 길이를 다른 단위로 변환한다. 기준 단위를 거쳐 환산한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    value / from.rate() * to.rate()
}

/// 부피 단위. 내부 기준은 리터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeUnit {
    Liters,
    Milliliters,
    CubicMeters,
    Gallons,
    Quarts,
    Pints,
    Cups,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 7] = [
        VolumeUnit::Liters,
        VolumeUnit::Milliliters,
        VolumeUnit::CubicMeters,
        VolumeUnit::Gallons,
        VolumeUnit::Quarts,
        VolumeUnit::Pints,
        VolumeUnit::Cups,
    ];

    /// 기준 단위(리터) 1에 해당하는 이 단위의 양.
    pub fn rate(self) -> f64 {
        match self {
            VolumeUnit::Liters => 1.0,
            VolumeUnit::Milliliters => 1000.0,
            VolumeUnit::CubicMeters => 0.001,
            VolumeUnit::Gallons => 0.264_172,
            VolumeUnit::Quarts => 1.056_69,
            VolumeUnit::Pints => 2.113_38,
            VolumeUnit::Cups => 4.226_75,
        }
    }

    /// 저장과 표시에 사용하는 식별자.
    pub fn id(self) -> &'static str {
        match self {
            VolumeUnit::Liters => "liters",
            VolumeUnit::Milliliters => "milliliters",
            VolumeUnit::CubicMeters => "cubic_meters",
            VolumeUnit::Gallons => "gallons",
            VolumeUnit::Quarts => "quarts",
            VolumeUnit::Pints => "pints",
            VolumeUnit::Cups => "cups",
        }
    }
}

/// 부피를 다른 단위로 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    if from == to {
        return value;
    }
    value / from.rate() * to.rate()
}

/// 속도 단위. 내부 기준은 미터/초이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedUnit {
    MetersPerSecond,
    KilometersPerHour,
    MilesPerHour,
    Knots,
    FeetPerSecond,
}

impl SpeedUnit {
    pub const ALL: [SpeedUnit; 5] = [
        SpeedUnit::MetersPerSecond,
        SpeedUnit::KilometersPerHour,
        SpeedUnit::MilesPerHour,
        SpeedUnit::Knots,
        SpeedUnit::FeetPerSecond,
    ];

    /// 기준 단위(미터/초) 1에 해당하는 이 단위의 양.
    pub fn rate(self) -> f64 {
        match self {
            SpeedUnit::MetersPerSecond => 1.0,
            SpeedUnit::KilometersPerHour => 3.6,
            SpeedUnit::MilesPerHour => 2.236_94,
            SpeedUnit::Knots => 1.943_84,
            SpeedUnit::FeetPerSecond => 3.280_84,
        }
    }

    /// 저장과 표시에 사용하는 식별자.
    pub fn id(self) -> &'static str {
        match self {
            SpeedUnit::MetersPerSecond => "meters_per_second",
            SpeedUnit::KilometersPerHour => "kilometers_per_hour",
            SpeedUnit::MilesPerHour => "miles_per_hour",
            SpeedUnit::Knots => "knots",
            SpeedUnit::FeetPerSecond => "feet_per_second",
        }
    }
}

/// 속도를 다른 단위로 변환한다.
pub fn convert_speed(value: f64, from: SpeedUnit, to: SpeedUnit) -> f64 {
    if from == to {
        return value;
    }
    value / from.rate() * to.rate()
}

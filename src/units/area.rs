/// 면적 단위. 내부 기준은 제곱미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaUnit {
    SquareMeters,
    SquareKilometers,
    SquareMiles,
    SquareYards,
    SquareFeet,
    Acres,
    Hectares,
}

impl AreaUnit {
    pub const ALL: [AreaUnit; 7] = [
        AreaUnit::SquareMeters,
        AreaUnit::SquareKilometers,
        AreaUnit::SquareMiles,
        AreaUnit::SquareYards,
        AreaUnit::SquareFeet,
        AreaUnit::Acres,
        AreaUnit::Hectares,
    ];

    /// 기준 단위(제곱미터) 1에 해당하는 이 단위의 양.
    pub fn rate(self) -> f64 {
        match self {
            AreaUnit::SquareMeters => 1.0,
            AreaUnit::SquareKilometers => 0.000_001,
            AreaUnit::SquareMiles => 3.861e-7,
            AreaUnit::SquareYards => 1.195_99,
            AreaUnit::SquareFeet => 10.763_9,
            AreaUnit::Acres => 0.000_247_105,
            AreaUnit::Hectares => 0.0001,
        }
    }

    /// 저장과 표시에 사용하는 식별자.
    pub fn id(self) -> &'static str {
        match self {
            AreaUnit::SquareMeters => "square_meters",
            AreaUnit::SquareKilometers => "square_kilometers",
            AreaUnit::SquareMiles => "square_miles",
            AreaUnit::SquareYards => "square_yards",
            AreaUnit::SquareFeet => "square_feet",
            AreaUnit::Acres => "acres",
            AreaUnit::Hectares => "hectares",
        }
    }
}

/// 면적을 다른 단위로 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    if from == to {
        return value;
    }
    value / from.rate() * to.rate()
}

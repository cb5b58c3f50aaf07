/// 데이터 용량 단위. 내부 기준은 바이트이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataUnit {
    Bits,
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
}

impl DataUnit {
    pub const ALL: [DataUnit; 6] = [
        DataUnit::Bits,
        DataUnit::Bytes,
        DataUnit::Kilobytes,
        DataUnit::Megabytes,
        DataUnit::Gigabytes,
        DataUnit::Terabytes,
    ];

    /// 기준 단위(바이트) 1에 해당하는 이 단위의 양. 1024 단위 기준이다.
    pub fn rate(self) -> f64 {
        match self {
            DataUnit::Bits => 8.0,
            DataUnit::Bytes => 1.0,
            DataUnit::Kilobytes => 0.000_976_562_5,
            DataUnit::Megabytes => 9.5367e-7,
            DataUnit::Gigabytes => 9.3132e-10,
            DataUnit::Terabytes => 9.0949e-13,
        }
    }

    /// 저장과 표시에 사용하는 식별자.
    pub fn id(self) -> &'static str {
        match self {
            DataUnit::Bits => "bits",
            DataUnit::Bytes => "bytes",
            DataUnit::Kilobytes => "kilobytes",
            DataUnit::Megabytes => "megabytes",
            DataUnit::Gigabytes => "gigabytes",
            DataUnit::Terabytes => "terabytes",
        }
    }
}

/// 데이터 용량을 다른 단위로 변환한다.
pub fn convert_data(value: f64, from: DataUnit, to: DataUnit) -> f64 {
    if from == to {
        return value;
    }
    value / from.rate() * to.rate()
}

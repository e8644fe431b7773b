//! 계산기 기준 데이터. 기본 단가, 환산 계수, 기본 차량 목록, 전기차 예시 카탈로그.

use crate::energy::{FuelType, PriceTable};

/// 기본 단가 [€/kWh, €/l, €/l].
pub const DEFAULT_PRICES: PriceTable = PriceTable {
    electricity: 0.15,
    gasoline: 1.70,
    diesel: 1.60,
};

/// 휘발유 1 l 에 해당하는 전기 에너지 [kWh/l].
pub const GASOLINE_KWH_PER_LITER: f64 = 9.0;
/// 경유 1 l 에 해당하는 전기 에너지 [kWh/l].
pub const DIESEL_KWH_PER_LITER: f64 = 10.0;

/// 연간 비용 환산에 쓰는 연 주행거리 [km].
pub const ANNUAL_DISTANCE_KM: f64 = 15_000.0;
/// 소비량 표기 기준 거리 [km].
pub const CONSUMPTION_BASIS_KM: f64 = 100.0;

pub const MIN_VEHICLES: usize = 1;
pub const MAX_VEHICLES: usize = 4;

/// 새로 추가되는 차량의 기본 소비량 [l/100km].
pub const NEW_VEHICLE_CONSUMPTION: f64 = 6.0;
pub const NEW_VEHICLE_FUEL: FuelType = FuelType::Gasoline;

/// 비교 대상 내연기관 차량의 초기값.
#[derive(Debug, Clone, Copy)]
pub struct VehicleSeed {
    pub name: &'static str,
    pub consumption: f64,
    pub fuel: FuelType,
}

pub const DEFAULT_VEHICLES: [VehicleSeed; 2] = [
    VehicleSeed {
        name: "My gasoline car",
        consumption: 6.0,
        fuel: FuelType::Gasoline,
    },
    VehicleSeed {
        name: "My diesel car",
        consumption: 4.5,
        fuel: FuelType::Diesel,
    },
];

/// 빠른 선택 버튼에 쓰는 전기차 소비량 예시 [kWh/100km].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectricExample {
    pub model: &'static str,
    pub consumption: f64,
}

pub const ELECTRIC_EXAMPLES: [ElectricExample; 4] = [
    ElectricExample {
        model: "Tesla Model 3",
        consumption: 14.4,
    },
    ElectricExample {
        model: "Tesla Model Y",
        consumption: 16.8,
    },
    ElectricExample {
        model: "Fiat 500e",
        consumption: 13.0,
    },
    ElectricExample {
        model: "MG4",
        consumption: 15.8,
    },
];

/// 모델명(대소문자 무시)으로 예시를 찾는다.
pub fn find_example(model: &str) -> Option<&'static ElectricExample> {
    let wanted = model.trim();
    ELECTRIC_EXAMPLES
        .iter()
        .find(|e| e.model.eq_ignore_ascii_case(wanted))
}

/// 목록 길이가 `len`일 때 추가되는 차량의 이름.
pub fn new_vehicle_name(len: usize) -> String {
    format!("Car {}", len + 1)
}

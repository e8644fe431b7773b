//! 100 km당 비용, 에너지 환산값, 절감액 계산.

use crate::energy::{EnergySource, FuelType, PriceTable};
use crate::reference::{
    ANNUAL_DISTANCE_KM, CONSUMPTION_BASIS_KM, DIESEL_KWH_PER_LITER, GASOLINE_KWH_PER_LITER,
};
use crate::vehicle::CombustionVehicle;

/// 소비량 × 해당 에너지원 단가 = 100 km당 비용.
pub fn calculate_cost(consumption: f64, source: EnergySource, prices: &PriceTable) -> f64 {
    consumption * prices.price(source)
}

/// 문자열 코드로 에너지원을 고르는 버전. 알 수 없는 코드는 비용 0.
pub fn calculate_cost_by_code(consumption: f64, code: &str, prices: &PriceTable) -> f64 {
    match EnergySource::from_code(code) {
        Some(source) => calculate_cost(consumption, source, prices),
        None => 0.0,
    }
}

/// 전기 소비량을 연료로 바꿨을 때의 이론상 소비량 [l/100km].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyEquivalents {
    pub gasoline: f64,
    pub diesel: f64,
}

/// 전기 소비량 [kWh/100km]을 휘발유/경유 환산량으로 바꾼다. 0 이하(또는 NaN)는 0.
pub fn calculate_energy_equivalents(electric_consumption: f64) -> EnergyEquivalents {
    if !(electric_consumption > 0.0) {
        return EnergyEquivalents::default();
    }
    EnergyEquivalents {
        gasoline: electric_consumption / GASOLINE_KWH_PER_LITER,
        diesel: electric_consumption / DIESEL_KWH_PER_LITER,
    }
}

/// 차량 1대와 전기차의 비교 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    /// 내연기관 차량 비용 [€/100km]
    pub cost: f64,
    /// 절감액 [€/100km]. 음수면 전기차가 더 비싸다.
    pub savings_absolute: f64,
    /// 내연기관 비용 대비 절감률 [%]. 범위 제한 없음.
    pub savings_percent: f64,
}

/// 전기차 비용과 내연기관 차량을 비교한다. 소비량이 0 이하인 차량은 `None`.
pub fn compare_vehicle(
    electric_cost: f64,
    vehicle: &CombustionVehicle,
    prices: &PriceTable,
) -> Option<Comparison> {
    if !(vehicle.consumption > 0.0) {
        return None;
    }
    let cost = calculate_cost(vehicle.consumption, vehicle.fuel.into(), prices);
    let savings_absolute = cost - electric_cost;
    Some(Comparison {
        cost,
        savings_absolute,
        savings_percent: savings_absolute / cost * 100.0,
    })
}

/// 100 km당 비용을 연 15,000 km 기준 연간 비용으로 환산한다.
pub fn annualize_cost(cost_per_100: f64) -> f64 {
    cost_per_100 * ANNUAL_DISTANCE_KM / CONSUMPTION_BASIS_KM
}

/// 연간 절감액 = 내연기관 연간 비용 - 전기차 연간 비용.
pub fn annual_savings(electric_cost_per_100: f64, combustion_cost_per_100: f64) -> f64 {
    annualize_cost(combustion_cost_per_100) - annualize_cost(electric_cost_per_100)
}

/// 결과 화면의 차량별 행.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleComparison {
    pub name: String,
    pub consumption: f64,
    pub fuel: FuelType,
    pub cost: f64,
    pub savings_absolute: f64,
    pub savings_percent: f64,
    pub annual_cost: f64,
    pub annual_savings: f64,
}

/// 전체 비교 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub electric_consumption: f64,
    /// 전기차 비용 [€/100km]
    pub electric_cost: f64,
    pub annual_electric_cost: f64,
    /// 소비량이 0보다 큰 차량만, 목록 순서대로
    pub comparisons: Vec<VehicleComparison>,
}

/// 비교 결과를 계산한다. 전기 소비량이 입력되지 않았으면(0 이하) `None`.
pub fn compute_report<'a, I>(
    electric_consumption: f64,
    vehicles: I,
    prices: &PriceTable,
) -> Option<Report>
where
    I: IntoIterator<Item = &'a CombustionVehicle>,
{
    if !(electric_consumption > 0.0) {
        return None;
    }
    let electric_cost = calculate_cost(electric_consumption, EnergySource::Electric, prices);
    let comparisons = vehicles
        .into_iter()
        .filter_map(|vehicle| {
            let cmp = compare_vehicle(electric_cost, vehicle, prices)?;
            Some(VehicleComparison {
                name: vehicle.name.clone(),
                consumption: vehicle.consumption,
                fuel: vehicle.fuel,
                cost: cmp.cost,
                savings_absolute: cmp.savings_absolute,
                savings_percent: cmp.savings_percent,
                annual_cost: annualize_cost(cmp.cost),
                annual_savings: annual_savings(electric_cost, cmp.cost),
            })
        })
        .collect();
    Some(Report {
        electric_consumption,
        electric_cost,
        annual_electric_cost: annualize_cost(electric_cost),
        comparisons,
    })
}

use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::energy::{EnergySource, FuelType};
use crate::input;
use crate::state::CalculatorState;
use crate::ui_cli::{self, MenuChoice};
use crate::vehicle::{CombustionVehicle, VehicleList};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 터미널 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 표준 입력이 닫힘
    #[error("입력 스트림이 닫혔습니다")]
    InputClosed,
    /// `--vehicle NAME:CONSUMPTION:FUEL` 형식 오류
    #[error("차량 인자 형식 오류 ({arg}): {reason}")]
    VehicleArg { arg: String, reason: &'static str },
}

/// 한 번에 계산하는 `compare` 명령의 입력.
#[derive(Debug, Clone, Default)]
pub struct CompareRequest {
    pub kwh_per_100km: String,
    pub electricity_price: Option<String>,
    pub gasoline_price: Option<String>,
    pub diesel_price: Option<String>,
    pub vehicles: Vec<String>,
}

/// `NAME:CONSUMPTION:FUEL` 인자를 차량으로 바꾼다. 이름에는 `:`이 들어갈 수 있다.
pub fn parse_vehicle_arg(arg: &str) -> Result<CombustionVehicle, AppError> {
    let err = |reason| AppError::VehicleArg {
        arg: arg.to_string(),
        reason,
    };
    let mut parts = arg.rsplitn(3, ':');
    let fuel = parts.next().ok_or_else(|| err("연료 종류가 없습니다"))?;
    let consumption = parts.next().ok_or_else(|| err("소비량이 없습니다"))?;
    let name = parts.next().ok_or_else(|| err("이름이 없습니다"))?;
    let fuel = FuelType::from_code(fuel).ok_or_else(|| err("gasoline 또는 diesel 이어야 합니다"))?;
    Ok(CombustionVehicle::new(
        name.trim(),
        input::coerce_consumption(consumption),
        fuel,
    ))
}

/// `compare` 요청으로 상태를 만든다. 차량 인자가 없으면 기본 차량 목록을 쓴다.
pub fn build_compare_state(
    config: &Config,
    request: &CompareRequest,
) -> Result<CalculatorState, AppError> {
    let mut state = CalculatorState::new(config.default_prices);
    for (source, text) in [
        (EnergySource::Electric, &request.electricity_price),
        (EnergySource::Gasoline, &request.gasoline_price),
        (EnergySource::Diesel, &request.diesel_price),
    ] {
        if let Some(text) = text {
            state = state.with_price_input(source, text);
        }
    }
    state = state.with_electric_input(&request.kwh_per_100km);
    if !request.vehicles.is_empty() {
        let vehicles = request
            .vehicles
            .iter()
            .map(|v| parse_vehicle_arg(v))
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(list) = VehicleList::from_vehicles(vehicles) {
            state.vehicles = list;
        }
    }
    Ok(state)
}

/// 단발 비교를 실행하고 결과를 출력한다.
pub fn run_compare(config: &Config, request: &CompareRequest) -> Result<(), AppError> {
    let state = build_compare_state(config, request)?;
    ui_cli::print_equivalents(&state);
    ui_cli::print_results(&state, &config.currency);
    Ok(())
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &Config) -> Result<(), AppError> {
    let mut state = CalculatorState::new(config.default_prices);
    info!("interactive session started");
    loop {
        match ui_cli::main_menu(&state)? {
            MenuChoice::Prices => state = ui_cli::handle_prices(state)?,
            MenuChoice::ElectricConsumption => state = ui_cli::handle_electric(state)?,
            MenuChoice::Examples => state = ui_cli::handle_examples(state)?,
            MenuChoice::Vehicles => state = ui_cli::handle_vehicles(state)?,
            MenuChoice::Results => {}
            MenuChoice::Exit => {
                println!("Bye.");
                break;
            }
        }
        ui_cli::print_equivalents(&state);
        ui_cli::print_results(&state, &config.currency);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_arg_allows_colon_in_name() {
        let v = parse_vehicle_arg("Golf: TDI:4.8:diesel").unwrap();
        assert_eq!(v.name, "Golf: TDI");
        assert_eq!(v.consumption, 4.8);
        assert_eq!(v.fuel, FuelType::Diesel);
    }

    #[test]
    fn vehicle_arg_rejects_unknown_fuel() {
        assert!(matches!(
            parse_vehicle_arg("Bus:20:lpg"),
            Err(AppError::VehicleArg { .. })
        ));
        assert!(parse_vehicle_arg("6.0").is_err());
    }

    #[test]
    fn compare_state_applies_inputs() {
        let request = CompareRequest {
            kwh_per_100km: "14.4".into(),
            electricity_price: Some("abc".into()),
            gasoline_price: Some("1.9".into()),
            diesel_price: None,
            vehicles: vec!["Clio:5.5:gasoline".into()],
        };
        let state = build_compare_state(&Config::default(), &request).unwrap();
        assert_eq!(state.prices.electricity, 0.15);
        assert_eq!(state.prices.gasoline, 1.9);
        assert_eq!(state.vehicles.len(), 1);
        let report = state.report().unwrap();
        assert_eq!(report.comparisons[0].name, "Clio");
    }
}

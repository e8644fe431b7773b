//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 계산을 쓰게 한다.

pub mod app;
pub mod config;
pub mod cost_model;
pub mod energy;
pub mod input;
pub mod logging;
pub mod reference;
pub mod report;
pub mod state;
pub mod ui_cli;
pub mod vehicle;

pub use cost_model::{
    annual_savings, annualize_cost, calculate_cost, calculate_cost_by_code,
    calculate_energy_equivalents, compare_vehicle, compute_report, Comparison, EnergyEquivalents,
    Report, VehicleComparison,
};
pub use energy::{EnergySource, FuelType, PriceTable};
pub use state::CalculatorState;
pub use vehicle::{CombustionVehicle, VehicleList};

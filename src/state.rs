//! 계산기 상태와 상태 전이.
//!
//! 모든 전이는 현재 상태를 소비하고 다음 상태를 돌려준다. 잘못된 숫자 입력은
//! 기본값으로 대체되고, 목록 범위를 벗어나는 명령은 무시된다.

use tracing::debug;

use crate::cost_model::{self, EnergyEquivalents, Report};
use crate::energy::{EnergySource, FuelType, PriceTable};
use crate::input;
use crate::reference::ELECTRIC_EXAMPLES;
use crate::vehicle::VehicleList;

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    /// 잘못된 단가 입력 시 되돌아갈 기본 단가
    defaults: PriceTable,
    pub prices: PriceTable,
    /// 전기차 소비량 [kWh/100km]. 0이면 미입력.
    pub electric_consumption: f64,
    pub vehicles: VehicleList,
}

impl CalculatorState {
    /// 기본 단가로 초기 상태를 만든다.
    pub fn new(defaults: PriceTable) -> Self {
        Self {
            defaults,
            prices: defaults,
            electric_consumption: 0.0,
            vehicles: VehicleList::default(),
        }
    }

    pub fn defaults(&self) -> &PriceTable {
        &self.defaults
    }

    #[must_use]
    pub fn with_price_input(mut self, source: EnergySource, text: &str) -> Self {
        let default = self.defaults.price(source);
        let value = input::coerce_price(text, default);
        debug!(?source, input = text, value, "price updated");
        self.prices.set_price(source, value);
        self
    }

    #[must_use]
    pub fn with_electric_input(self, text: &str) -> Self {
        let value = input::coerce_consumption(text);
        self.with_electric_consumption(value)
    }

    #[must_use]
    pub fn with_electric_consumption(mut self, value: f64) -> Self {
        self.electric_consumption = if value.is_finite() && value > 0.0 {
            value
        } else {
            0.0
        };
        debug!(kwh_per_100km = self.electric_consumption, "electric consumption updated");
        self
    }

    /// 예시 카탈로그의 소비량을 선택한다. 범위 밖 인덱스는 무시한다.
    #[must_use]
    pub fn with_example(self, index: usize) -> Self {
        match ELECTRIC_EXAMPLES.get(index) {
            Some(example) => {
                debug!(model = example.model, "example selected");
                self.with_electric_consumption(example.consumption)
            }
            None => {
                debug!(index, "unknown example ignored");
                self
            }
        }
    }

    #[must_use]
    pub fn with_vehicle_added(mut self) -> Self {
        if !self.vehicles.add() {
            debug!(len = self.vehicles.len(), "vehicle list full; add ignored");
        }
        self
    }

    #[must_use]
    pub fn with_vehicle_removed(mut self, index: usize) -> Self {
        if !self.vehicles.remove(index) {
            debug!(index, len = self.vehicles.len(), "remove ignored");
        }
        self
    }

    #[must_use]
    pub fn with_vehicle_name(mut self, index: usize, name: &str) -> Self {
        self.vehicles.set_name(index, name);
        self
    }

    #[must_use]
    pub fn with_vehicle_consumption_input(mut self, index: usize, text: &str) -> Self {
        self.vehicles
            .set_consumption(index, input::coerce_consumption(text));
        self
    }

    #[must_use]
    pub fn with_vehicle_fuel(mut self, index: usize, fuel: FuelType) -> Self {
        self.vehicles.set_fuel(index, fuel);
        self
    }

    /// 선택 상자 값 같은 문자열 코드로 연료를 바꾼다. 알 수 없는 코드는 무시한다.
    #[must_use]
    pub fn with_vehicle_fuel_code(self, index: usize, code: &str) -> Self {
        match FuelType::from_code(code) {
            Some(fuel) => self.with_vehicle_fuel(index, fuel),
            None => {
                debug!(index, code, "unknown fuel code ignored");
                self
            }
        }
    }

    pub fn can_add_vehicle(&self) -> bool {
        self.vehicles.can_add()
    }

    pub fn can_remove_vehicle(&self) -> bool {
        self.vehicles.can_remove()
    }

    pub fn energy_equivalents(&self) -> EnergyEquivalents {
        cost_model::calculate_energy_equivalents(self.electric_consumption)
    }

    pub fn report(&self) -> Option<Report> {
        cost_model::compute_report(self.electric_consumption, &self.vehicles, &self.prices)
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(PriceTable::default())
    }
}

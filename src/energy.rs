use serde::{Deserialize, Serialize};

/// 내연기관 차량의 연료 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gasoline,
    Diesel,
}

impl FuelType {
    pub const ALL: [FuelType; 2] = [FuelType::Gasoline, FuelType::Diesel];

    /// 문자열 코드로부터 연료 종류를 찾는다. 알 수 없는 코드는 `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match EnergySource::from_code(code)? {
            EnergySource::Gasoline => Some(FuelType::Gasoline),
            EnergySource::Diesel => Some(FuelType::Diesel),
            EnergySource::Electric => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            FuelType::Gasoline => "gasoline",
            FuelType::Diesel => "diesel",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FuelType::Gasoline => "Gasoline",
            FuelType::Diesel => "Diesel",
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// 단가표에서 가격을 고르는 에너지원.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergySource {
    Electric,
    Gasoline,
    Diesel,
}

impl EnergySource {
    /// 입력 코드를 해석한다. 예전 데이터의 스페인어 코드(electrico/gasolina)도 받는다.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "electric" | "electricity" | "electrico" | "eléctrico" => Some(EnergySource::Electric),
            "gasoline" | "petrol" | "gasolina" => Some(EnergySource::Gasoline),
            "diesel" | "diésel" => Some(EnergySource::Diesel),
            _ => None,
        }
    }
}

impl From<FuelType> for EnergySource {
    fn from(value: FuelType) -> Self {
        match value {
            FuelType::Gasoline => EnergySource::Gasoline,
            FuelType::Diesel => EnergySource::Diesel,
        }
    }
}

/// 에너지원별 단가 [통화 / 단위]. 전기는 kWh, 연료는 리터 기준이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    pub electricity: f64,
    pub gasoline: f64,
    pub diesel: f64,
}

impl PriceTable {
    pub fn price(&self, source: EnergySource) -> f64 {
        match source {
            EnergySource::Electric => self.electricity,
            EnergySource::Gasoline => self.gasoline,
            EnergySource::Diesel => self.diesel,
        }
    }

    pub fn set_price(&mut self, source: EnergySource, value: f64) {
        match source {
            EnergySource::Electric => self.electricity = value,
            EnergySource::Gasoline => self.gasoline = value,
            EnergySource::Diesel => self.diesel = value,
        }
    }

    /// 양수가 아닌 단가가 있으면 해당 에너지원을 돌려준다.
    pub fn first_non_positive(&self) -> Option<EnergySource> {
        [
            EnergySource::Electric,
            EnergySource::Gasoline,
            EnergySource::Diesel,
        ]
        .into_iter()
        .find(|s| !(self.price(*s) > 0.0 && self.price(*s).is_finite()))
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        crate::reference::DEFAULT_PRICES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_codes_are_accepted() {
        assert_eq!(EnergySource::from_code("gasolina"), Some(EnergySource::Gasoline));
        assert_eq!(EnergySource::from_code("electrico"), Some(EnergySource::Electric));
        assert_eq!(FuelType::from_code(" Diesel "), Some(FuelType::Diesel));
        assert_eq!(FuelType::from_code("electric"), None);
        assert_eq!(EnergySource::from_code("hydrogen"), None);
    }

    #[test]
    fn non_positive_price_is_reported() {
        let mut prices = PriceTable::default();
        assert_eq!(prices.first_non_positive(), None);
        prices.set_price(EnergySource::Diesel, 0.0);
        assert_eq!(prices.first_non_positive(), Some(EnergySource::Diesel));
    }
}

//! 결과 표시용 서식. GUI와 CLI가 같은 문구를 쓴다.

use crate::cost_model::VehicleComparison;

/// 비교 결과의 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 전기차가 더 저렴하다
    Savings,
    /// 같거나 전기차가 더 비싸다
    Loss,
}

impl Outcome {
    pub fn of(savings: f64) -> Self {
        if savings > 0.0 {
            Outcome::Savings
        } else {
            Outcome::Loss
        }
    }
}

/// 소수 둘째 자리까지.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// 절감이면 `+` 를 붙인다. 손실은 음수 부호가 그대로 남는다.
pub fn signed_amount(value: f64) -> String {
    match Outcome::of(value) {
        Outcome::Savings => format!("+{}", format_amount(value)),
        Outcome::Loss => format_amount(value),
    }
}

/// "You save 78.82%" / "You spend 12.50% more".
pub fn percent_label(comparison: &VehicleComparison) -> String {
    let pct = format_amount(comparison.savings_percent.abs());
    match Outcome::of(comparison.savings_absolute) {
        Outcome::Savings => format!("You save {pct}%"),
        Outcome::Loss => format!("You spend {pct}% more"),
    }
}

/// "6 l/100km (gasoline)".
pub fn vehicle_specs(comparison: &VehicleComparison) -> String {
    format!("{} l/100km ({})", comparison.consumption, comparison.fuel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::FuelType;

    fn comparison(savings_absolute: f64, savings_percent: f64) -> VehicleComparison {
        VehicleComparison {
            name: "test".into(),
            consumption: 6.0,
            fuel: FuelType::Gasoline,
            cost: 10.2,
            savings_absolute,
            savings_percent,
            annual_cost: 1530.0,
            annual_savings: savings_absolute * 150.0,
        }
    }

    #[test]
    fn signed_amount_marks_savings() {
        assert_eq!(signed_amount(8.04), "+8.04");
        assert_eq!(signed_amount(-1.5), "-1.50");
        assert_eq!(signed_amount(0.0), "0.00");
    }

    #[test]
    fn percent_label_uses_absolute_value() {
        assert_eq!(percent_label(&comparison(8.04, 78.8235)), "You save 78.82%");
        assert_eq!(percent_label(&comparison(-1.0, -12.5)), "You spend 12.50% more");
    }

    #[test]
    fn specs_show_consumption_and_fuel() {
        assert_eq!(vehicle_specs(&comparison(1.0, 1.0)), "6 l/100km (gasoline)");
    }
}

use serde::{Deserialize, Serialize};

use crate::energy::FuelType;
use crate::reference::{self, MAX_VEHICLES, MIN_VEHICLES};

/// 비교 대상 내연기관 차량.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombustionVehicle {
    pub name: String,
    /// 소비량 [l/100km], 항상 0 이상
    pub consumption: f64,
    pub fuel: FuelType,
}

impl CombustionVehicle {
    pub fn new(name: impl Into<String>, consumption: f64, fuel: FuelType) -> Self {
        Self {
            name: name.into(),
            consumption: sanitize_consumption(consumption),
            fuel,
        }
    }
}

fn sanitize_consumption(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// 길이가 항상 [`MIN_VEHICLES`, `MAX_VEHICLES`] 범위인 차량 목록.
///
/// 범위를 벗어나는 추가/삭제 요청은 무시되고 `false`를 돌려준다.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleList {
    items: Vec<CombustionVehicle>,
}

impl VehicleList {
    /// 주어진 차량으로 목록을 만든다. 비어 있으면 `None`, 최대 개수를 넘는 항목은 버린다.
    pub fn from_vehicles(mut vehicles: Vec<CombustionVehicle>) -> Option<Self> {
        if vehicles.len() < MIN_VEHICLES {
            return None;
        }
        vehicles.truncate(MAX_VEHICLES);
        Some(Self { items: vehicles })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 불변식상 항상 `false`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CombustionVehicle> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&CombustionVehicle> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[CombustionVehicle] {
        &self.items
    }

    pub fn can_add(&self) -> bool {
        self.items.len() < MAX_VEHICLES
    }

    pub fn can_remove(&self) -> bool {
        self.items.len() > MIN_VEHICLES
    }

    /// 기본 템플릿 차량("Car N", 6.0, 휘발유)을 추가한다.
    pub fn add(&mut self) -> bool {
        if !self.can_add() {
            return false;
        }
        let name = reference::new_vehicle_name(self.items.len());
        self.items.push(CombustionVehicle::new(
            name,
            reference::NEW_VEHICLE_CONSUMPTION,
            reference::NEW_VEHICLE_FUEL,
        ));
        true
    }

    pub fn remove(&mut self, index: usize) -> bool {
        if !self.can_remove() || index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }

    pub fn set_name(&mut self, index: usize, name: impl Into<String>) -> bool {
        match self.items.get_mut(index) {
            Some(v) => {
                v.name = name.into();
                true
            }
            None => false,
        }
    }

    pub fn set_consumption(&mut self, index: usize, consumption: f64) -> bool {
        match self.items.get_mut(index) {
            Some(v) => {
                v.consumption = sanitize_consumption(consumption);
                true
            }
            None => false,
        }
    }

    pub fn set_fuel(&mut self, index: usize, fuel: FuelType) -> bool {
        match self.items.get_mut(index) {
            Some(v) => {
                v.fuel = fuel;
                true
            }
            None => false,
        }
    }
}

impl Default for VehicleList {
    fn default() -> Self {
        Self {
            items: reference::DEFAULT_VEHICLES
                .iter()
                .map(|s| CombustionVehicle::new(s.name, s.consumption, s.fuel))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a VehicleList {
    type Item = &'a CombustionVehicle;
    type IntoIter = std::slice::Iter<'a, CombustionVehicle>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_rejected() {
        assert!(VehicleList::from_vehicles(Vec::new()).is_none());
    }

    #[test]
    fn oversized_list_is_truncated() {
        let vehicles = (0..6)
            .map(|i| CombustionVehicle::new(format!("v{i}"), 5.0, FuelType::Diesel))
            .collect();
        let list = VehicleList::from_vehicles(vehicles).unwrap();
        assert_eq!(list.len(), MAX_VEHICLES);
    }

    #[test]
    fn added_vehicle_uses_template() {
        let mut list = VehicleList::default();
        assert!(list.add());
        let added = list.get(2).unwrap();
        assert_eq!(added.name, "Car 3");
        assert_eq!(added.consumption, 6.0);
        assert_eq!(added.fuel, FuelType::Gasoline);
    }

    #[test]
    fn negative_consumption_becomes_zero() {
        let mut list = VehicleList::default();
        assert!(list.set_consumption(0, -3.0));
        assert_eq!(list.get(0).unwrap().consumption, 0.0);
        assert!(!list.set_consumption(7, 3.0));
    }
}

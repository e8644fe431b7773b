use std::io::{self, Write};

use crate::app::AppError;
use crate::energy::{EnergySource, FuelType};
use crate::reference::ELECTRIC_EXAMPLES;
use crate::report::{format_amount, percent_label, signed_amount, vehicle_specs};
use crate::state::CalculatorState;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Prices,
    ElectricConsumption,
    Examples,
    Vehicles,
    Results,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(state: &CalculatorState) -> Result<MenuChoice, AppError> {
    println!("\n=== EV Cost Calculator ===");
    println!(
        "1) Prices (electricity {} / gasoline {} / diesel {})",
        format_amount(state.prices.electricity),
        format_amount(state.prices.gasoline),
        format_amount(state.prices.diesel)
    );
    println!(
        "2) Electric consumption ({} kWh/100km)",
        state.electric_consumption
    );
    println!("3) Pick an example EV");
    println!("4) Combustion vehicles ({})", state.vehicles.len());
    println!("5) Show results");
    println!("0) Exit");
    loop {
        let sel = read_line("Select: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Prices),
            "2" => return Ok(MenuChoice::ElectricConsumption),
            "3" => return Ok(MenuChoice::Examples),
            "4" => return Ok(MenuChoice::Vehicles),
            "5" => return Ok(MenuChoice::Results),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("Invalid selection, try again."),
        }
    }
}

/// 단가 입력을 처리한다. 빈 입력은 현재 값을 유지한다.
pub fn handle_prices(mut state: CalculatorState) -> Result<CalculatorState, AppError> {
    println!("\n-- Prices --");
    println!("Invalid or non-positive values fall back to the default price.");
    for (source, label) in [
        (EnergySource::Electric, "Electricity [per kWh]"),
        (EnergySource::Gasoline, "Gasoline [per l]"),
        (EnergySource::Diesel, "Diesel [per l]"),
    ] {
        let current = state.prices.price(source);
        let text = read_line(&format!("{label} ({}): ", format_amount(current)))?;
        if !text.trim().is_empty() {
            state = state.with_price_input(source, &text);
        }
    }
    Ok(state)
}

/// 전기차 소비량 입력을 처리한다.
pub fn handle_electric(state: CalculatorState) -> Result<CalculatorState, AppError> {
    println!("\n-- Electric consumption --");
    let text = read_line("kWh/100km: ")?;
    Ok(state.with_electric_input(&text))
}

/// 예시 전기차 선택을 처리한다.
pub fn handle_examples(state: CalculatorState) -> Result<CalculatorState, AppError> {
    println!("\n-- Example EVs --");
    print_examples();
    let sel = read_line("Select (Enter to cancel): ")?;
    match sel.trim().parse::<usize>() {
        Ok(n) if (1..=ELECTRIC_EXAMPLES.len()).contains(&n) => Ok(state.with_example(n - 1)),
        _ => Ok(state),
    }
}

/// 예시 카탈로그를 출력한다.
pub fn print_examples() {
    for (i, example) in ELECTRIC_EXAMPLES.iter().enumerate() {
        println!(
            "{}) {} - {} kWh/100km",
            i + 1,
            example.model,
            example.consumption
        );
    }
}

/// 내연기관 차량 목록 편집을 처리한다.
pub fn handle_vehicles(mut state: CalculatorState) -> Result<CalculatorState, AppError> {
    loop {
        println!("\n-- Combustion vehicles --");
        for (i, v) in state.vehicles.iter().enumerate() {
            println!(
                "{}) {} - {} l/100km ({})",
                i + 1,
                v.name,
                v.consumption,
                v.fuel
            );
        }
        if state.can_add_vehicle() {
            println!("a) Add vehicle");
        }
        if state.can_remove_vehicle() {
            println!("r) Remove vehicle");
        }
        println!("e) Edit vehicle");
        println!("0) Back");
        let sel = read_line("Select: ")?;
        match sel.trim() {
            "a" => state = state.with_vehicle_added(),
            "r" => {
                if let Some(index) = read_index(&state)? {
                    state = state.with_vehicle_removed(index);
                }
            }
            "e" => {
                if let Some(index) = read_index(&state)? {
                    state = edit_vehicle(state, index)?;
                }
            }
            "0" | "" => return Ok(state),
            _ => println!("Invalid selection."),
        }
    }
}

fn edit_vehicle(mut state: CalculatorState, index: usize) -> Result<CalculatorState, AppError> {
    let name = read_line("Name (Enter to keep): ")?;
    if !name.trim().is_empty() {
        state = state.with_vehicle_name(index, name.trim());
    }
    let consumption = read_line("Consumption l/100km (Enter to keep): ")?;
    if !consumption.trim().is_empty() {
        state = state.with_vehicle_consumption_input(index, &consumption);
    }
    println!("Fuel: 1=gasoline 2=diesel (Enter to keep)");
    let fuel = read_line("Select: ")?;
    state = match fuel.trim() {
        "1" => state.with_vehicle_fuel(index, FuelType::Gasoline),
        "2" => state.with_vehicle_fuel(index, FuelType::Diesel),
        "" => state,
        other => state.with_vehicle_fuel_code(index, other),
    };
    Ok(state)
}

fn read_index(state: &CalculatorState) -> Result<Option<usize>, AppError> {
    let sel = read_line("Vehicle number: ")?;
    match sel.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= state.vehicles.len() => Ok(Some(n - 1)),
        _ => {
            println!("No such vehicle.");
            Ok(None)
        }
    }
}

/// 이론상 연료 환산값을 출력한다.
pub fn print_equivalents(state: &CalculatorState) {
    let eq = state.energy_equivalents();
    println!(
        "Equivalent: {} l/100km gasoline, {} l/100km diesel",
        format_amount(eq.gasoline),
        format_amount(eq.diesel)
    );
}

/// 비교 결과를 출력한다. 전기 소비량이 없으면 안내만 한다.
pub fn print_results(state: &CalculatorState, currency: &str) {
    let Some(report) = state.report() else {
        println!("Enter the electric consumption to see results.");
        return;
    };
    println!("\n-- Results --");
    println!(
        "Electric: {} {currency}/100km",
        format_amount(report.electric_cost)
    );
    for cmp in &report.comparisons {
        println!(
            "{} [{}]: {} {currency}/100km, {} {currency} ({})",
            cmp.name,
            vehicle_specs(cmp),
            format_amount(cmp.cost),
            signed_amount(cmp.savings_absolute),
            percent_label(cmp)
        );
    }
    println!("-- Annual savings (15000 km) --");
    for cmp in &report.comparisons {
        println!(
            "{}: {} {currency}/year",
            cmp.name,
            signed_amount(cmp.annual_savings)
        );
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use ev_cost_calculator::{
    config, logging,
    reference::{ELECTRIC_EXAMPLES, MAX_VEHICLES},
    report::{format_amount, percent_label, signed_amount, vehicle_specs, Outcome},
    CalculatorState, EnergySource, FuelType,
};
use image::GenericImageView;
use rfd::FileDialog;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "ev_cost_calculator", version, about = "EV cost calculator (desktop)")]
struct GuiArgs {
    /// 설정 파일 경로
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    #[arg(short, long)]
    verbose: bool,
}

const POSITIVE: egui::Color32 = egui::Color32::from_rgb(0x2e, 0x9d, 0x4f);
const NEGATIVE: egui::Color32 = egui::Color32::from_rgb(0xc0, 0x39, 0x2b);

const PRICE_FIELDS: [(EnergySource, &str); 3] = [
    (EnergySource::Electric, "Electricity (per kWh)"),
    (EnergySource::Gasoline, "Gasoline (per l)"),
    (EnergySource::Diesel, "Diesel (per l)"),
];

fn main() -> Result<(), eframe::Error> {
    let args = GuiArgs::parse();
    let loaded = config::load_or_default(&args.config);
    let configured_filter = loaded.as_ref().ok().and_then(|c| c.log_filter.clone());
    logging::init_logger(args.verbose, configured_filter.as_deref());
    let app_cfg = loaded.unwrap_or_else(|e| {
        warn!("config load failed, using defaults: {e}");
        config::Config::default()
    });

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([760.0, 820.0])
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    info!("starting GUI");
    let config_path = args.config;
    eframe::run_native(
        "EV Cost Calculator",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg, config_path))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn outcome_color(value: f64) -> egui::Color32 {
    match Outcome::of(value) {
        Outcome::Savings => POSITIVE,
        Outcome::Loss => NEGATIVE,
    }
}

/// 차량 카드에서 발생한 편집. 반복 중 상태를 빌리지 않도록 모아 두었다가 적용한다.
enum VehicleEdit {
    Name(usize, String),
    Consumption(usize, String),
    Fuel(usize, FuelType),
    Remove(usize),
}

struct GuiApp {
    config: config::Config,
    config_path: PathBuf,
    state: CalculatorState,
    // 입력 칸의 원문. 숫자 변환은 상태 전이에서 한다.
    price_inputs: [String; 3],
    kwh_input: String,
    vehicle_names: Vec<String>,
    vehicle_consumptions: Vec<String>,
    window_alpha: f32,
    always_on_top: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    settings_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, config_path: PathBuf) -> Self {
        let state = CalculatorState::new(config.default_prices);
        let price_inputs = PRICE_FIELDS.map(|(source, _)| state.prices.price(source).to_string());
        let mut app = Self {
            window_alpha: config.window_alpha,
            always_on_top: config.always_on_top,
            config,
            config_path,
            state,
            price_inputs,
            kwh_input: String::new(),
            vehicle_names: Vec::new(),
            vehicle_consumptions: Vec::new(),
            show_settings_modal: false,
            show_help_modal: false,
            settings_status: None,
        };
        app.sync_vehicle_inputs();
        app
    }

    fn apply(&mut self, transition: impl FnOnce(CalculatorState) -> CalculatorState) {
        let state = std::mem::take(&mut self.state);
        self.state = transition(state);
    }

    /// 목록 구조가 바뀌면 입력 칸을 상태 기준으로 다시 채운다.
    fn sync_vehicle_inputs(&mut self) {
        self.vehicle_names = self.state.vehicles.iter().map(|v| v.name.clone()).collect();
        self.vehicle_consumptions = self
            .state
            .vehicles
            .iter()
            .map(|v| v.consumption.to_string())
            .collect();
    }

    /// 새 기본 단가로 상태를 다시 만들고 현재 입력을 다시 적용한다.
    fn rebuild_state(&mut self) {
        let vehicles = self.state.vehicles.clone();
        let mut state = CalculatorState::new(self.config.default_prices);
        state.vehicles = vehicles;
        for ((source, _), text) in PRICE_FIELDS.iter().zip(self.price_inputs.iter()) {
            state = state.with_price_input(*source, text);
        }
        self.state = state.with_electric_input(&self.kwh_input);
    }

    fn select_example(&mut self, index: usize) {
        if let Some(example) = ELECTRIC_EXAMPLES.get(index) {
            self.kwh_input = example.consumption.to_string();
            self.apply(|s| s.with_example(index));
        }
    }

    fn add_vehicle(&mut self) {
        self.apply(CalculatorState::with_vehicle_added);
        self.sync_vehicle_inputs();
    }

    fn apply_vehicle_edit(&mut self, edit: VehicleEdit) {
        match edit {
            VehicleEdit::Name(i, name) => self.apply(|s| s.with_vehicle_name(i, &name)),
            VehicleEdit::Consumption(i, text) => {
                self.apply(|s| s.with_vehicle_consumption_input(i, &text))
            }
            VehicleEdit::Fuel(i, fuel) => self.apply(|s| s.with_vehicle_fuel(i, fuel)),
            VehicleEdit::Remove(i) => {
                self.apply(|s| s.with_vehicle_removed(i));
                self.sync_vehicle_inputs();
            }
        }
    }

    fn load_config_from(&mut self, path: PathBuf) {
        match config::load_or_default(&path) {
            Ok(cfg) => {
                self.window_alpha = cfg.window_alpha;
                self.always_on_top = cfg.always_on_top;
                self.config = cfg;
                self.config_path = path;
                self.rebuild_state();
                self.settings_status = Some("Config loaded.".into());
            }
            Err(e) => {
                warn!("config load failed: {e}");
                self.settings_status = Some(format!("Load error: {e}"));
            }
        }
    }

    fn save_settings(&mut self) {
        self.config.window_alpha = self.window_alpha;
        self.config.always_on_top = self.always_on_top;
        self.settings_status = Some(match self.config.save(&self.config_path) {
            Ok(()) => "Saved.".into(),
            Err(e) => format!("Save error: {e}"),
        });
    }

    fn ui_prices(&mut self, ui: &mut egui::Ui) {
        ui.heading("Energy prices");
        egui::Grid::new("price_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                for (i, (source, label)) in PRICE_FIELDS.iter().enumerate() {
                    ui.label(*label).on_hover_text(
                        "Empty, invalid or non-positive values use the default price.",
                    );
                    let resp = ui.add(
                        egui::TextEdit::singleline(&mut self.price_inputs[i]).desired_width(90.0),
                    );
                    if resp.changed() {
                        let text = self.price_inputs[i].clone();
                        let source = *source;
                        self.apply(|s| s.with_price_input(source, &text));
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_electric(&mut self, ui: &mut egui::Ui) {
        ui.heading("Electric vehicle");
        ui.horizontal(|ui| {
            ui.label("Consumption (kWh/100km)");
            let resp = ui.add(egui::TextEdit::singleline(&mut self.kwh_input).desired_width(90.0));
            if resp.changed() {
                let text = self.kwh_input.clone();
                self.apply(|s| s.with_electric_input(&text));
            }
        });
        let mut clicked = None;
        ui.horizontal_wrapped(|ui| {
            ui.label("Examples:");
            for (i, example) in ELECTRIC_EXAMPLES.iter().enumerate() {
                if ui
                    .button(format!("{} ({})", example.model, example.consumption))
                    .clicked()
                {
                    clicked = Some(i);
                }
            }
        });
        if let Some(i) = clicked {
            self.select_example(i);
        }
        let eq = self.state.energy_equivalents();
        ui.label(format!(
            "Theoretical equivalent: {} l/100km gasoline, {} l/100km diesel",
            format_amount(eq.gasoline),
            format_amount(eq.diesel)
        ))
        .on_hover_text("1 l gasoline = 9 kWh, 1 l diesel = 10 kWh. Not used in cost comparison.");
    }

    fn ui_vehicles(&mut self, ui: &mut egui::Ui) {
        ui.heading(format!("Combustion vehicles (max {MAX_VEHICLES})"));
        let can_remove = self.state.can_remove_vehicle();
        let mut edits = Vec::new();
        for i in 0..self.state.vehicles.len() {
            let Some(vehicle) = self.state.vehicles.get(i) else {
                continue;
            };
            let mut fuel = vehicle.fuel;
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .add(
                            egui::TextEdit::singleline(&mut self.vehicle_names[i])
                                .desired_width(160.0),
                        )
                        .changed()
                    {
                        edits.push(VehicleEdit::Name(i, self.vehicle_names[i].clone()));
                    }
                    if ui
                        .add(
                            egui::TextEdit::singleline(&mut self.vehicle_consumptions[i])
                                .desired_width(60.0),
                        )
                        .changed()
                    {
                        edits.push(VehicleEdit::Consumption(
                            i,
                            self.vehicle_consumptions[i].clone(),
                        ));
                    }
                    ui.label("l/100km");
                    let before = fuel;
                    egui::ComboBox::from_id_source(("fuel", i))
                        .selected_text(fuel.label())
                        .show_ui(ui, |ui| {
                            for f in FuelType::ALL {
                                ui.selectable_value(&mut fuel, f, f.label());
                            }
                        });
                    if fuel != before {
                        edits.push(VehicleEdit::Fuel(i, fuel));
                    }
                    if ui
                        .add_enabled(can_remove, egui::Button::new("Remove"))
                        .clicked()
                    {
                        edits.push(VehicleEdit::Remove(i));
                    }
                });
            });
        }
        for edit in edits {
            self.apply_vehicle_edit(edit);
        }
        if self.state.can_add_vehicle() && ui.button("+ Add vehicle").clicked() {
            self.add_vehicle();
        }
    }

    fn ui_results(&self, ui: &mut egui::Ui) {
        let Some(report) = self.state.report() else {
            ui.label("Enter the electric consumption to see the comparison.");
            return;
        };
        let currency = &self.config.currency;
        ui.heading("Results");
        ui.label(
            egui::RichText::new(format!(
                "Electric: {} {currency}/100km",
                format_amount(report.electric_cost)
            ))
            .strong(),
        );
        ui.add_space(6.0);
        for cmp in &report.comparisons {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&cmp.name).strong());
                    ui.label(vehicle_specs(cmp));
                    ui.label(format!("Cost: {} {currency}", format_amount(cmp.cost)));
                    ui.colored_label(
                        outcome_color(cmp.savings_absolute),
                        format!("{} {currency}", signed_amount(cmp.savings_absolute)),
                    );
                    ui.label(percent_label(cmp));
                });
            });
        }
        ui.add_space(6.0);
        ui.heading("Annual savings (15000 km)");
        for cmp in &report.comparisons {
            ui.horizontal(|ui| {
                ui.label(&cmp.name);
                ui.colored_label(
                    outcome_color(cmp.annual_savings),
                    format!("{} {currency}/year", signed_amount(cmp.annual_savings)),
                );
            });
        }
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings_modal;
        let mut load_path = None;
        let mut save = false;
        egui::Window::new("Settings")
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.checkbox(&mut self.always_on_top, "Always on top");
                ui.label("Window transparency");
                ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                ui.separator();
                ui.label(format!("Config file: {}", self.config_path.display()));
                ui.horizontal(|ui| {
                    if ui.button("Load config...").clicked() {
                        load_path = FileDialog::new()
                            .add_filter("TOML", &["toml"])
                            .pick_file();
                    }
                    if ui.button("Save settings").clicked() {
                        save = true;
                    }
                });
                if let Some(msg) = &self.settings_status {
                    ui.label(msg);
                }
            });
        self.show_settings_modal = open;
        if let Some(path) = load_path {
            self.load_config_from(path);
        }
        if save {
            self.save_settings();
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        let mut style = (*ctx.style()).clone();
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("EV Cost Calculator");
                ui.separator();
                if ui.button("Settings").clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button("Help / About").clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }

        if self.show_help_modal {
            egui::Window::new("Help / About")
                .collapsible(false)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.label("Cost per 100 km = consumption x unit price.");
                    ui.label("Savings % = (combustion - electric) / combustion x 100, not clamped.");
                    ui.label("Annual figures assume 15000 km per year.");
                    ui.label("Equivalents: 9 kWh per l gasoline, 10 kWh per l diesel.");
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.ui_prices(ui);
                    ui.separator();
                    self.ui_electric(ui);
                    ui.separator();
                    self.ui_vehicles(ui);
                    ui.separator();
                    self.ui_results(ui);
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> GuiApp {
        GuiApp::new(config::Config::default(), PathBuf::from("unused.toml"))
    }

    #[test]
    fn inputs_start_from_defaults() {
        let app = app();
        assert_eq!(app.price_inputs, ["0.15", "1.7", "1.6"]);
        assert_eq!(app.vehicle_names, ["My gasoline car", "My diesel car"]);
        assert_eq!(app.vehicle_consumptions, ["6", "4.5"]);
        assert!(app.state.report().is_none());
    }

    #[test]
    fn add_and_remove_keep_inputs_in_sync() {
        let mut app = app();
        app.add_vehicle();
        app.add_vehicle();
        app.add_vehicle();
        assert_eq!(app.state.vehicles.len(), 4);
        assert_eq!(app.vehicle_names.len(), 4);
        assert_eq!(app.vehicle_names[3], "Car 4");
        app.apply_vehicle_edit(VehicleEdit::Remove(0));
        assert_eq!(app.vehicle_names[0], "My diesel car");
        assert_eq!(app.vehicle_consumptions.len(), 3);
    }

    #[test]
    fn example_fills_consumption_field() {
        let mut app = app();
        app.select_example(0);
        assert_eq!(app.kwh_input, "14.4");
        let report = app.state.report().unwrap();
        assert!((report.electric_cost - 2.16).abs() < 1e-9);
    }

    #[test]
    fn rebuild_reapplies_price_text() {
        let mut app = app();
        app.price_inputs[1] = "2.0".into();
        app.kwh_input = "15".into();
        app.config.default_prices.electricity = 0.30;
        app.price_inputs[0] = "oops".into();
        app.rebuild_state();
        assert_eq!(app.state.prices.electricity, 0.30);
        assert_eq!(app.state.prices.gasoline, 2.0);
        assert_eq!(app.state.electric_consumption, 15.0);
    }

    #[test]
    fn vehicle_edits_apply_to_state() {
        let mut app = app();
        app.apply_vehicle_edit(VehicleEdit::Consumption(1, "abc".into()));
        assert_eq!(app.state.vehicles.get(1).unwrap().consumption, 0.0);
        app.apply_vehicle_edit(VehicleEdit::Fuel(1, FuelType::Gasoline));
        assert_eq!(app.state.vehicles.get(1).unwrap().fuel, FuelType::Gasoline);
    }
}

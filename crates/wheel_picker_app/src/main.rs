//! Scroll-wheel date picker demo.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;
use egui_wheel::DateWheelPicker;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([440.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Date Picker",
        options,
        Box::new(|_cc| Ok(Box::<WheelPickerApp>::default())),
    )
}

struct WheelPickerApp {
    picker: DateWheelPicker,

    /// Set while the confirmation popup is open.
    confirmed: Option<String>,
}

impl Default for WheelPickerApp {
    fn default() -> Self {
        Self {
            picker: DateWheelPicker::from_today(),
            confirmed: None,
        }
    }
}

impl eframe::App for WheelPickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.heading("Date Picker");
                ui.label("Physics-based scrolling interaction");
                ui.add_space(20.0);

                egui::Frame::group(ui.style())
                    .inner_margin(24)
                    .show(ui, |ui| {
                        if let Some(date) = self.picker.show(ui) {
                            self.confirmed = Some(date);
                        }
                    });

                ui.add_space(24.0);
                ui.weak("Built with egui & eframe");
            });
        });

        if let Some(date) = self.confirmed.clone() {
            let mut open = true;
            egui::Window::new("Selected")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(date);
                });
            if !open {
                self.confirmed = None;
            }
        }
    }
}

use chrono::{Datelike as _, Local};
use egui::{vec2, Align, Layout, Ui};

use crate::wheel::{Wheel, ROW_HEIGHT, VISIBLE_ROWS};

/// How many candidate years to offer, centered on the initial year.
const YEAR_SPAN: i32 = 100;

const WHEEL_WIDTH: f32 = 104.0;

/// Three [`Wheel`]s (year, month, day) plus a confirm button.
///
/// The day wheel always offers 1–31; nothing stops the user from dialing in
/// a date like Feb 31.
///
/// ```no_run
/// # egui::__run_test_ui(|ui| {
/// let mut picker = egui_wheel::DateWheelPicker::from_today();
/// if let Some(date) = picker.show(ui) {
///     log::info!("picked {date}");
/// }
/// # });
/// ```
pub struct DateWheelPicker {
    year: i32,
    month: i32,
    day: i32,

    years: Vec<i32>,
    months: Vec<i32>,
    days: Vec<i32>,
}

impl DateWheelPicker {
    /// A picker preselecting the given date, offering the hundred years
    /// centered on `year`.
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self {
            year,
            month,
            day,
            years: (year - YEAR_SPAN / 2..year + YEAR_SPAN / 2).collect(),
            months: (1..=12).collect(),
            days: (1..=31).collect(),
        }
    }

    /// A picker preselecting today's local date.
    pub fn from_today() -> Self {
        let today = Local::now().date_naive();
        Self::new(today.year(), today.month() as i32, today.day() as i32)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    /// The current selection as `"YYYY年 MM月 DD日"`.
    pub fn formatted(&self) -> String {
        format!(
            "{}年 {:02}月 {:02}日",
            self.year, self.month, self.day
        )
    }

    /// Show the picker. Returns the formatted date when the user confirms.
    pub fn show(&mut self, ui: &mut Ui) -> Option<String> {
        let mut confirmed = None;

        ui.vertical_centered(|ui| {
            ui.strong(self.formatted());
            ui.add_space(16.0);

            let spacing = ui.spacing().item_spacing.x;
            let wheels_size = vec2(
                3.0 * WHEEL_WIDTH + 2.0 * spacing,
                ROW_HEIGHT * VISIBLE_ROWS as f32,
            );
            ui.allocate_ui_with_layout(wheels_size, Layout::left_to_right(Align::Center), |ui| {
                let mut changed = false;
                changed |= ui
                    .add(
                        Wheel::new("year", &self.years, &mut self.year)
                            .format(|year| format!("{year}年"))
                            .width(WHEEL_WIDTH),
                    )
                    .changed();
                changed |= ui
                    .add(
                        Wheel::new("month", &self.months, &mut self.month)
                            .format(|month| format!("{month}月"))
                            .width(WHEEL_WIDTH),
                    )
                    .changed();
                changed |= ui
                    .add(
                        Wheel::new("day", &self.days, &mut self.day)
                            .format(|day| format!("{day}日"))
                            .width(WHEEL_WIDTH),
                    )
                    .changed();
                if changed {
                    log::trace!("picker moved to {}", self.formatted());
                }
            });

            ui.add_space(16.0);
            if ui.button("Confirm").clicked() {
                log::debug!("confirmed {}", self.formatted());
                confirmed = Some(self.formatted());
            }
        });

        confirmed
    }
}

impl Default for DateWheelPicker {
    fn default() -> Self {
        Self::from_today()
    }
}

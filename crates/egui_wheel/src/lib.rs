//! Scroll-driven wheel picker widgets for [`egui`].
//!
//! The building block is [`Wheel`]: a vertically scrollable list of numbers
//! that always has exactly one value centered in its viewport. Rows near the
//! center are drawn upright and emphasized; rows further out shrink, fade and
//! tilt away, giving the "drum" look of mobile pickers.
//!
//! [`DateWheelPicker`] composes three wheels (year, month, day) into a simple
//! date picker with a confirm button.
//!
//! ```
//! # egui::__run_test_ui(|ui| {
//! let items: Vec<i32> = (1..=12).collect();
//! let mut month = 3;
//! ui.add(egui_wheel::Wheel::new("month", &items, &mut month).format(|m| format!("{m}月")));
//! # });
//! ```

mod picker;
mod visuals;
mod wheel;

pub use picker::DateWheelPicker;
pub use visuals::{row_visuals, RowVisuals};
pub use wheel::{Wheel, ROW_HEIGHT, VISIBLE_ROWS};

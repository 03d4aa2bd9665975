use std::cell::{Cell, RefCell};

use egui::{vec2, Event, Modifiers, MouseWheelUnit};
use egui_kittest::{kittest::Queryable as _, Harness};
use egui_wheel::{DateWheelPicker, Wheel, ROW_HEIGHT};

/// Scroll the hovered wheel by `delta_rows` rows worth of mouse wheel input.
fn spin(harness: &mut Harness<'_>, delta_rows: f32) {
    harness.input_mut().events.push(Event::MouseWheel {
        unit: MouseWheelUnit::Point,
        delta: vec2(0.0, -delta_rows * ROW_HEIGHT),
        modifiers: Modifiers::NONE,
    });
    for _ in 0..4 {
        harness.step();
    }
}

#[test]
fn external_selection_does_not_feed_back() {
    let items: Vec<i32> = (1..=31).collect();
    let selected = Cell::new(7);
    let changes = Cell::new(0);

    let mut harness = Harness::new_ui(|ui| {
        let mut value = selected.get();
        if ui
            .add(Wheel::new("day", &items, &mut value).format(|day| format!("{day}日")))
            .changed()
        {
            changes.set(changes.get() + 1);
        }
        selected.set(value);
    });

    // The first frame scrolls the wheel to the selected row; the following
    // frames must leave both the value and the offset alone.
    for _ in 0..20 {
        harness.step();
    }

    assert_eq!(selected.get(), 7);
    assert_eq!(changes.get(), 0, "sync must not re-report the same value");

    // The sync must also have actually centered row 7. A nudge well under
    // half a row keeps the same row nearest the center, so nothing fires;
    // had the wheel silently stayed at the top, the same nudge would land
    // on the first row and report `1`.
    harness.get_by_label("7日").hover();
    harness.step();
    spin(&mut harness, 0.2);

    assert_eq!(selected.get(), 7, "wheel was not scrolled to the selected row");
    assert_eq!(changes.get(), 0);
}

#[test]
fn in_flight_scrolling_wins_over_external_changes() {
    let items: Vec<i32> = (0..100).collect();
    let selected = Cell::new(50);

    let mut harness = Harness::new_ui(|ui| {
        let mut value = selected.get();
        ui.add(Wheel::new("wheel", &items, &mut value));
        selected.set(value);
    });
    harness.run();

    // Grab the wheel and spin it two rows down.
    harness.get_by_label("50").hover();
    harness.step();
    spin(&mut harness, 2.0);
    assert!(
        selected.get() > 50,
        "scrolling down should advance the selection"
    );

    // Change the binding from the outside while the wheel is still settling.
    // The gesture owns the offset, so the drum must not jump to row 10.
    selected.set(10);
    harness.step();

    // A further nudge reports whatever row sits under the center. If the
    // external change had moved the drum, this would come back as a value
    // near 10 instead of one near where the gesture left off.
    spin(&mut harness, 1.0);
    assert!(
        selected.get() >= 50,
        "external change moved the wheel mid-gesture (selected {})",
        selected.get()
    );
}

#[test]
fn missing_selection_is_tolerated() {
    let items: Vec<i32> = (1..=12).collect();
    let selected = Cell::new(42); // not in `items`
    let changes = Cell::new(0);

    let mut harness = Harness::new_ui(|ui| {
        let mut value = selected.get();
        if ui.add(Wheel::new("month", &items, &mut value)).changed() {
            changes.set(changes.get() + 1);
        }
        selected.set(value);
    });

    for _ in 0..10 {
        harness.step();
    }

    // No sync target, no scrolling, no report. Just a wheel with no
    // centered row.
    assert_eq!(selected.get(), 42);
    assert_eq!(changes.get(), 0);
}

#[test]
fn click_scrolls_to_the_row_and_selects_it() {
    let items: Vec<i32> = (2000..2100).collect();
    let selected = Cell::new(2050);
    let changes = Cell::new(0);

    let mut harness = Harness::new_ui(|ui| {
        let mut value = selected.get();
        if ui
            .add(Wheel::new("year", &items, &mut value).format(|year| format!("{year}年")))
            .changed()
        {
            changes.set(changes.get() + 1);
        }
        selected.set(value);
    });
    harness.run();

    // Two rows below the center, still visible in the 5-row viewport.
    harness.get_by_label("2052年").click();

    // Ride out the animated glide; it is done once the clicked value arrives.
    let mut steps = 0;
    while selected.get() != 2052 {
        assert!(steps < 600, "wheel never settled on the clicked row");
        harness.step();
        steps += 1;
    }
    assert!(changes.get() >= 1);

    // Once settled, nothing may keep firing.
    let settled = changes.get();
    for _ in 0..20 {
        harness.step();
    }
    assert_eq!(changes.get(), settled);
    assert_eq!(selected.get(), 2052);
}

#[test]
fn picker_preselects_its_date_and_confirms_it() {
    let picker = RefCell::new(DateWheelPicker::new(2024, 3, 7));
    let confirmed = RefCell::new(None);

    let mut harness = Harness::new_ui(|ui| {
        if let Some(date) = picker.borrow_mut().show(ui) {
            *confirmed.borrow_mut() = Some(date);
        }
    });
    harness.run();

    // The composed label and the three centered rows are all visible.
    harness.get_by_label("2024年 03月 07日");
    harness.get_by_label("3月");
    harness.get_by_label("7日");

    harness.get_by_label("Confirm").click();
    harness.run();

    assert_eq!(confirmed.borrow().as_deref(), Some("2024年 03月 07日"));
    let picker = picker.borrow();
    assert_eq!(
        (picker.year(), picker.month(), picker.day()),
        (2024, 3, 7)
    );
}

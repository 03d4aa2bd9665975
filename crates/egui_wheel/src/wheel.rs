use std::hash::Hash;
use std::time::Duration;

use egui::containers::scroll_area::ScrollBarVisibility;
use egui::{
    vec2, Align, Align2, Color32, CursorIcon, FontId, Id, Mesh, Rect, Response, ScrollArea, Sense,
    Shape, TextStyle, Ui, Widget, WidgetInfo, WidgetType,
};

use crate::visuals::row_visuals;

/// Height of one wheel row, in points.
pub const ROW_HEIGHT: f32 = 50.0;

/// Number of rows shown in the viewport. Odd, so one row sits in the center.
pub const VISIBLE_ROWS: usize = 5;

/// How long after the last scroll movement the wheel is still considered
/// "in the user's hands". External selection changes are ignored until then.
const SETTLE_TIME: f64 = 0.15;

/// Offsets closer to the target than this are left alone when syncing,
/// so the sync never fights its own rounding errors.
const SYNC_EPSILON: f32 = 1.0;

const DEFAULT_WIDTH: f32 = 96.0;

/// Height of the fade-out overlays at the top and bottom of the viewport.
const FADE_HEIGHT: f32 = ROW_HEIGHT * 1.5;

type Formatter<'a> = Box<dyn Fn(i32) -> String + 'a>;

/// A scrollable drum of numbers that snaps to one centered value.
///
/// The bound value follows the row nearest the viewport center while the user
/// scrolls, and the drum scrolls to the bound value when it is changed from
/// the outside. Clicking a row scrolls it to the center.
///
/// The [`Response`] is marked changed on the frames where scrolling moved the
/// selection to a new value.
///
/// ```
/// # egui::__run_test_ui(|ui| {
/// let items: Vec<i32> = (1..=31).collect();
/// let mut day = 7;
/// if ui.add(egui_wheel::Wheel::new("day", &items, &mut day)).changed() {
///     // day now holds the centered value
/// }
/// # });
/// ```
#[must_use = "You should put this widget in an ui with `ui.add(widget);`"]
pub struct Wheel<'a> {
    id_salt: Id,
    items: &'a [i32],
    selected: &'a mut i32,
    format: Option<Formatter<'a>>,
    width: f32,
}

impl<'a> Wheel<'a> {
    /// `id_salt` must be unique among wheels sharing a parent `Ui`.
    pub fn new(id_salt: impl Hash, items: &'a [i32], selected: &'a mut i32) -> Self {
        Self {
            id_salt: Id::new(id_salt),
            items,
            selected,
            format: None,
            width: DEFAULT_WIDTH,
        }
    }

    /// Turn an item into its display text, e.g. to append a unit suffix.
    ///
    /// Defaults to the plain decimal representation.
    pub fn format(mut self, format: impl Fn(i32) -> String + 'a) -> Self {
        self.format = Some(Box::new(format));
        self
    }

    /// Width of the wheel in points.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

/// Scroll tracking for one wheel, kept in frame-to-frame memory.
#[derive(Clone, Copy, Debug, Default)]
struct WheelState {
    /// Scroll offset observed (or written) last frame.
    offset: f32,

    /// Input time of the most recent user-driven scroll movement.
    last_movement: Option<f64>,
}

impl WheelState {
    /// Is the user (or a click-initiated glide) still moving the wheel?
    fn interacting(&self, now: f64) -> bool {
        self.last_movement
            .is_some_and(|at| now - at < SETTLE_TIME)
    }
}

impl Widget for Wheel<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            id_salt,
            items,
            selected,
            format,
            width,
        } = self;

        let id = ui.make_persistent_id(id_salt);
        let mut state: WheelState = ui.data_mut(|d| d.get_temp(id)).unwrap_or_default();
        let now = ui.input(|i| i.time);

        let viewport_height = ROW_HEIGHT * VISIBLE_ROWS as f32;
        let padding = ROW_HEIGHT * (VISIBLE_ROWS / 2) as f32;

        // While the wheel is in the user's hands only the user writes the
        // offset; otherwise the bound value is the authority and we scroll
        // to it (without animation) when too far off.
        let forced_offset = if state.interacting(now) {
            None
        } else {
            sync_target(items, *selected, state.offset, ROW_HEIGHT)
        };

        // The offset that will be in effect this frame, for styling the rows.
        let center = forced_offset.unwrap_or(state.offset) / ROW_HEIGHT;

        let base_font_size = TextStyle::Heading.resolve(ui.style()).size;

        let outer = ui.allocate_ui(vec2(width, viewport_height), |ui| {
            ui.set_min_size(vec2(width, viewport_height));

            let mut scroll = ScrollArea::vertical()
                .id_salt(id.with("scroll"))
                .max_width(width)
                .max_height(viewport_height)
                .auto_shrink([false, false])
                .scroll_bar_visibility(ScrollBarVisibility::AlwaysHidden);
            if let Some(offset) = forced_offset {
                scroll = scroll.vertical_scroll_offset(offset);
            }

            scroll.show(ui, |ui| {
                ui.set_width(width);
                ui.spacing_mut().item_spacing.y = 0.0;

                // Padding so the first and last rows can reach the center.
                ui.add_space(padding);

                let mut rows: Option<Response> = None;
                for (i, &item) in items.iter().enumerate() {
                    let (rect, row) =
                        ui.allocate_exact_size(vec2(width, ROW_HEIGHT), Sense::click());
                    let text = format
                        .as_ref()
                        .map_or_else(|| item.to_string(), |format| format(item));
                    row.widget_info(|| {
                        WidgetInfo::labeled(WidgetType::Button, ui.is_enabled(), &text)
                    });

                    if ui.is_rect_visible(rect) {
                        let visuals = row_visuals(i as f32, center);
                        // No 3d transform available, so the perspective tilt
                        // becomes foreshortening of the glyphs.
                        let foreshorten = visuals.rotation.to_radians().cos();
                        let font = FontId::proportional(base_font_size * visuals.scale * foreshorten);
                        let color = if visuals.emphasized {
                            ui.visuals().strong_text_color()
                        } else {
                            ui.visuals().weak_text_color()
                        };
                        ui.painter().text(
                            rect.center(),
                            Align2::CENTER_CENTER,
                            &text,
                            font,
                            color.gamma_multiply(visuals.opacity),
                        );
                    }

                    if row.clicked() {
                        ui.scroll_to_rect(rect, Some(Align::Center));
                    }

                    let row = row.on_hover_cursor(CursorIcon::PointingHand);
                    rows = Some(match rows.take() {
                        Some(all) => all.union(row),
                        None => row,
                    });
                }

                ui.add_space(padding);
                rows
            })
        });

        let output = outer.inner;
        let outer_rect = outer.response.rect;
        let mut response = output
            .inner
            .unwrap_or_else(|| ui.interact(outer_rect, id.with("empty"), Sense::hover()));

        let new_offset = output.state.offset.y;
        if forced_offset.is_some() {
            // Our own write; not a user gesture.
            state.offset = new_offset;
        } else if (new_offset - state.offset).abs() > f32::EPSILON {
            state.offset = new_offset;
            state.last_movement = Some(now);

            if let Some(index) = nearest_index(new_offset, ROW_HEIGHT, items.len()) {
                let item = items[index];
                if item != *selected {
                    log::trace!("wheel {id:?} scrolled to {item}");
                    *selected = item;
                    response.mark_changed();
                }
            }
        }

        // Make sure we get a frame shortly after the settle time expires,
        // even if no further input arrives, so the snap-back can run.
        if let Some(at) = state.last_movement {
            let remaining = SETTLE_TIME - (now - at);
            if remaining > 0.0 {
                ui.ctx()
                    .request_repaint_after(Duration::from_secs_f64(remaining.max(0.016)));
            }
        }

        ui.data_mut(|d| d.insert_temp(id, state));

        paint_overlays(ui, outer_rect);

        response
    }
}

/// The row index whose center is nearest `offset`, clamped into the list.
fn nearest_index(offset: f32, row_height: f32, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let raw = (offset / row_height).round();
    Some((raw.max(0.0) as usize).min(len - 1))
}

/// Where to scroll so that `selected` sits in the center, if a correction
/// is warranted at all.
///
/// `None` if `selected` is not in `items` (nothing sensible to do), or if the
/// current offset is already within [`SYNC_EPSILON`] of the target (so a
/// settled wheel is never nudged, which would re-trigger scroll handling and
/// loop forever).
fn sync_target(items: &[i32], selected: i32, offset: f32, row_height: f32) -> Option<f32> {
    let index = items.iter().position(|&item| item == selected)?;
    let target = index as f32 * row_height;
    ((offset - target).abs() > SYNC_EPSILON).then_some(target)
}

/// Center highlight band and fade-to-background gradients, painted on top of
/// the scrolled rows.
fn paint_overlays(ui: &Ui, outer_rect: Rect) {
    let painter = ui.painter();

    let band = Rect::from_center_size(outer_rect.center(), vec2(outer_rect.width(), ROW_HEIGHT));
    let stroke = ui.visuals().widgets.noninteractive.bg_stroke;
    painter.hline(band.x_range(), band.top(), stroke);
    painter.hline(band.x_range(), band.bottom(), stroke);

    let background = ui.visuals().panel_fill;
    let top = Rect::from_min_size(outer_rect.min, vec2(outer_rect.width(), FADE_HEIGHT));
    vertical_fade(painter, top, background, Color32::TRANSPARENT);
    let bottom = Rect::from_min_max(
        egui::pos2(outer_rect.left(), outer_rect.bottom() - FADE_HEIGHT),
        outer_rect.max,
    );
    vertical_fade(painter, bottom, Color32::TRANSPARENT, background);
}

/// Fill `rect` with a vertical gradient from `top` to `bottom`.
fn vertical_fade(painter: &egui::Painter, rect: Rect, top: Color32, bottom: Color32) {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 2, 3);
    painter.add(Shape::mesh(mesh));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_index_rounds_to_the_closest_row() {
        assert_eq!(nearest_index(0.0, 50.0, 10), Some(0));
        assert_eq!(nearest_index(24.9, 50.0, 10), Some(0));
        assert_eq!(nearest_index(25.1, 50.0, 10), Some(1));
        assert_eq!(nearest_index(150.0, 50.0, 10), Some(3));
    }

    #[test]
    fn nearest_index_clamps_overscroll() {
        // Rubber-banding above the first row:
        assert_eq!(nearest_index(-80.0, 50.0, 10), Some(0));
        // ...and below the last:
        assert_eq!(nearest_index(1e6, 50.0, 10), Some(9));
        assert_eq!(nearest_index(475.0, 50.0, 10), Some(9));
    }

    #[test]
    fn nearest_index_of_nothing() {
        assert_eq!(nearest_index(0.0, 50.0, 0), None);
    }

    #[test]
    fn sync_scrolls_to_the_selected_row() {
        let items: Vec<i32> = (2000..2100).collect();
        assert_eq!(sync_target(&items, 2000, 700.0, 50.0), Some(0.0));
        assert_eq!(sync_target(&items, 2013, 0.0, 50.0), Some(650.0));
    }

    #[test]
    fn sync_within_epsilon_is_a_no_op() {
        let items: Vec<i32> = (2000..2100).collect();
        assert_eq!(sync_target(&items, 2013, 650.0, 50.0), None);
        assert_eq!(sync_target(&items, 2013, 650.9, 50.0), None);
        assert_eq!(sync_target(&items, 2013, 649.1, 50.0), None);
        assert_eq!(sync_target(&items, 2013, 651.5, 50.0), Some(650.0));
    }

    #[test]
    fn sync_ignores_values_not_in_the_list() {
        let items = [1, 2, 3];
        assert_eq!(sync_target(&items, 42, 0.0, 50.0), None);
    }

    #[test]
    fn settle_window_expires() {
        let state = WheelState {
            offset: 0.0,
            last_movement: Some(10.0),
        };
        assert!(state.interacting(10.0));
        assert!(state.interacting(10.1));
        assert!(!state.interacting(10.2));

        assert!(!WheelState::default().interacting(0.0));
    }
}

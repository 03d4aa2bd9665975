//! The pure mapping from row position to visual appearance.
//!
//! Kept free of any `Ui` state so it can be unit tested in isolation;
//! [`crate::Wheel`] resolves the actual colors and font sizes from the
//! active [`egui::Style`] when painting.

/// How far (in rows) a row may be from the continuous center position and
/// still count as the centered row.
const CENTER_HALF_WIDTH: f32 = 0.5;

/// Scale applied to rows outside the center band.
const SIDE_SCALE: f32 = 0.9;

/// Opacity applied to rows outside the center band.
const SIDE_OPACITY: f32 = 0.4;

/// Magnitude of the perspective tilt for off-center rows, in degrees.
const SIDE_TILT_DEGREES: f32 = 25.0;

/// Appearance of a single wheel row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowVisuals {
    /// Uniform scale factor for the row contents.
    pub scale: f32,

    /// Opacity in `0..=1`, applied on top of the text color.
    pub opacity: f32,

    /// Rotation around the horizontal axis, in degrees.
    /// Positive for rows below the center, negative above,
    /// so both ends of the drum appear to curve away from the viewer.
    pub rotation: f32,

    /// Is this the centered (selected) row?
    pub emphasized: bool,
}

/// Appearance of row `row` when the wheel is centered on the continuous
/// position `center` (i.e. `scroll_offset / row_height`, not rounded).
pub fn row_visuals(row: f32, center: f32) -> RowVisuals {
    let distance = (row - center).abs();
    if distance < CENTER_HALF_WIDTH {
        RowVisuals {
            scale: 1.0,
            opacity: 1.0,
            rotation: 0.0,
            emphasized: true,
        }
    } else {
        RowVisuals {
            scale: SIDE_SCALE,
            opacity: SIDE_OPACITY,
            rotation: if row > center {
                SIDE_TILT_DEGREES
            } else {
                -SIDE_TILT_DEGREES
            },
            emphasized: false,
        }
    }
}

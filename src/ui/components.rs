//! Reusable UI components
//!
//! Standalone widgets used by the form and output views.

use crate::constants::{RATING_MAX, RATING_MIN};
use crate::theme;
use eframe::egui;

/// Map a pointer x position on a rail onto a discrete rating
pub fn rating_from_position(x: f32, rail_left: f32, rail_width: f32) -> u8 {
    let span = (RATING_MAX - RATING_MIN) as f32;
    let rel_x = if rail_width > 0.0 {
        ((x - rail_left) / rail_width).clamp(0.0, 1.0)
    } else {
        0.0
    };
    RATING_MIN + (rel_x * span).round() as u8
}

/// Single-handle discrete slider over RATING_MIN..=RATING_MAX, step 1.
///
/// Returns `Some(value)` only when a click or drag moves the handle to a
/// different value than `current`. `is_set` dims the handle for untouched
/// topics.
pub fn rating_slider(ui: &mut egui::Ui, id_salt: &str, current: u8, is_set: bool) -> Option<u8> {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), theme::SLIDER_HEIGHT),
        egui::Sense::click_and_drag(),
    );
    let response = response.on_hover_text(format!("{}: {}", id_salt, current));
    if response.hovered() || response.dragged() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    let track_y = rect.center().y;
    let track_left = rect.left() + theme::SLIDER_HANDLE_RADIUS;
    let track_right = rect.right() - theme::SLIDER_HANDLE_RADIUS;
    let track_width = track_right - track_left;
    let span = (RATING_MAX - RATING_MIN) as f32;

    let step = current.clamp(RATING_MIN, RATING_MAX) - RATING_MIN;
    let handle_x = track_left + (step as f32 / span) * track_width;

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.line_segment(
            [egui::pos2(track_left, track_y), egui::pos2(track_right, track_y)],
            egui::Stroke::new(theme::SLIDER_RAIL_HEIGHT, theme::BORDER_SUBTLE),
        );
        if is_set {
            painter.line_segment(
                [egui::pos2(track_left, track_y), egui::pos2(handle_x, track_y)],
                egui::Stroke::new(theme::SLIDER_RAIL_HEIGHT, theme::SLIDER_TRAIL),
            );
        }
        let head = if is_set {
            theme::SLIDER_HEAD
        } else {
            theme::SLIDER_HEAD_UNSET
        };
        let radius = if response.hovered() || response.dragged() {
            theme::SLIDER_HANDLE_RADIUS + 1.0
        } else {
            theme::SLIDER_HANDLE_RADIUS
        };
        painter.circle_filled(egui::pos2(handle_x, track_y), radius, head);
    }

    if response.dragged() || response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let value = rating_from_position(pos.x, track_left, track_width);
            if value != current {
                return Some(value);
            }
        }
    }
    None
}

/// Fixed-width monospace value shown to the right of a topic name
pub fn rating_value(ui: &mut egui::Ui, value: u8, is_set: bool) {
    let color = if is_set {
        theme::TEXT_PRIMARY
    } else {
        theme::TEXT_DIM
    };
    ui.add(
        egui::Label::new(
            egui::RichText::new(format!("{:>2}", value))
                .monospace()
                .size(theme::FONT_LABEL)
                .color(color),
        )
        .selectable(false),
    );
}

/// "N of M topics rated" caption
pub fn progress_caption(rated: usize, total: usize) -> String {
    format!("{} of {} topics rated", rated, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rail_ends_map_to_bounds() {
        assert_eq!(rating_from_position(0.0, 0.0, 90.0), RATING_MIN);
        assert_eq!(rating_from_position(90.0, 0.0, 90.0), RATING_MAX);
        assert_eq!(rating_from_position(-50.0, 0.0, 90.0), RATING_MIN);
        assert_eq!(rating_from_position(500.0, 0.0, 90.0), RATING_MAX);
    }

    #[test]
    fn positions_snap_to_whole_steps() {
        // 9 steps over 90px: 10px per step
        assert_eq!(rating_from_position(10.0, 0.0, 90.0), 2);
        assert_eq!(rating_from_position(44.0, 0.0, 90.0), 5);
        assert_eq!(rating_from_position(46.0, 0.0, 90.0), 6);
    }

    #[test]
    fn zero_width_rail_gives_minimum() {
        assert_eq!(rating_from_position(10.0, 0.0, 0.0), RATING_MIN);
    }

    #[test]
    fn caption_text() {
        assert_eq!(progress_caption(3, 9), "3 of 9 topics rated");
    }
}

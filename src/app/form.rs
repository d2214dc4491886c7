//! Form rendering: location input and one rating slider per topic

use super::App;
use crate::constants::TOPICS;
use crate::theme;
use crate::ui::components::{rating_slider, rating_value};
use eframe::egui;
use tracing::debug;

impl App {
    pub(crate) fn render_location_input(&mut self, ui: &mut egui::Ui) {
        theme::section_label(ui, "LOCATION RELEVANCE");
        ui.add_space(theme::SPACING_SM);

        let mut location = self.form.location().to_owned();
        let frame_resp = egui::Frame::new()
            .fill(theme::BG_INPUT)
            .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE))
            .corner_radius(theme::RADIUS_DEFAULT)
            .inner_margin(egui::Margin::symmetric(8, 8))
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.x = 4.0;
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(egui_phosphor::regular::MAP_PIN)
                                .size(14.0)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut location)
                            .id(ui.make_persistent_id("location_input"))
                            .hint_text("Enter location")
                            .frame(false)
                            .desired_width(ui.available_width() - 20.0),
                    )
                })
                .inner
            });
        if frame_resp.inner.changed() {
            self.form.set_location(location);
        }

        // Clear button overlaid on the right of the input frame
        if !self.form.location().is_empty() {
            let frame_rect = frame_resp.response.rect;
            let btn_rect = egui::Rect::from_center_size(
                egui::pos2(frame_rect.right() - 14.0, frame_rect.center().y),
                egui::vec2(16.0, 16.0),
            );
            let clear_resp = ui.interact(btn_rect, ui.id().with("location_clear"), egui::Sense::click());
            let color = if clear_resp.hovered() {
                theme::TEXT_MUTED
            } else {
                theme::TEXT_DIM
            };
            ui.painter().text(
                btn_rect.center(),
                egui::Align2::CENTER_CENTER,
                egui_phosphor::regular::X,
                egui::FontId::proportional(12.0),
                color,
            );
            if clear_resp.clicked() {
                self.form.set_location(String::new());
            }
        }
    }

    pub(crate) fn render_topic_sliders(&mut self, ui: &mut egui::Ui) {
        theme::section_label(ui, "TOPICS");
        ui.add_space(theme::SPACING_SM);

        theme::section_frame().show(ui, |ui| {
            for (i, topic) in TOPICS.iter().enumerate() {
                if i > 0 {
                    ui.add_space(theme::SPACING_MD);
                }
                let is_set = self.form.rating(topic).is_some();
                let shown = self.form.rating_or_default(topic);

                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(*topic)
                                .size(theme::FONT_LABEL)
                                .color(theme::TEXT_SECONDARY),
                        )
                        .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        rating_value(ui, shown, is_set);
                    });
                });

                if let Some(value) = rating_slider(ui, topic, shown, is_set) {
                    debug!(topic = *topic, value, "Rating changed");
                    self.form.set_rating(topic, value);
                }
            }
        });
    }
}

//! Trigger button, generated output block and copy toast

use super::App;
use crate::constants::TOPICS;
use crate::theme;
use crate::types::OutputView;
use crate::ui::components::progress_caption;
use eframe::egui;
use tracing::debug;

impl App {
    /// Footer: progress caption, Clear and Generate Prompt
    pub(crate) fn render_actions(&mut self, ui: &mut egui::Ui) {
        let ready = self.form.is_ready();

        ui.horizontal(|ui| {
            let rated = self.form.rated_count();
            let (caption, color) = if ready {
                ("Ready to generate".to_string(), theme::STATUS_SUCCESS)
            } else if rated < TOPICS.len() {
                (progress_caption(rated, TOPICS.len()), theme::TEXT_DIM)
            } else {
                ("Enter a location".to_string(), theme::STATUS_WARNING)
            };
            ui.add(
                egui::Label::new(egui::RichText::new(caption).size(theme::FONT_SMALL).color(color))
                    .selectable(false),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let clear = theme::button(format!("{}  Clear", egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE))
                    .min_size(egui::vec2(0.0, theme::BUTTON_HEIGHT));
                if ui.add(clear).clicked() {
                    self.clear_form();
                }
            });
        });

        ui.add_space(theme::SPACING_SM);

        let width = ui.available_width();
        let button = theme::button_primary(
            format!("{}  Generate Prompt", egui_phosphor::regular::SPARKLE),
            ready,
            width,
        );
        let shortcut = ui.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter));
        if ui.add_enabled(ready, button).clicked() || (ready && shortcut) {
            self.generate_prompt();
        }
    }

    /// Output block, only once something has been generated
    pub(crate) fn render_output(&mut self, ui: &mut egui::Ui) {
        if self.generated.is_none() {
            return;
        }

        ui.horizontal(|ui| {
            theme::section_label(ui, "OUTPUT");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let copy = theme::button(format!("{}  Copy", egui_phosphor::regular::COPY))
                    .min_size(egui::vec2(0.0, theme::BUTTON_HEIGHT));
                if ui.add(copy).clicked() {
                    if let Some(text) = self.output_text() {
                        ui.ctx().copy_text(text.to_owned());
                        self.show_toast("Copied to clipboard");
                    }
                }

                let mut json_active = self.output_view == OutputView::Json;
                if theme::segmented_toggle(ui, "JSON", "Prompt", &mut json_active) {
                    self.output_view = if json_active {
                        OutputView::Json
                    } else {
                        OutputView::Prompt
                    };
                    debug!(view = ?self.output_view, "Output view switched");
                }
            });
        });
        ui.add_space(theme::SPACING_SM);

        if let Some(text) = self.output_text() {
            theme::output_frame().show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(text)
                            .monospace()
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_SECONDARY),
                    )
                    .wrap()
                    .selectable(true),
                );
            });
        }
    }

    /// Toast at the bottom-right of the central panel: 3s visible, 0.5s fade, paused on hover
    pub(crate) fn render_toast(&mut self, ctx: &egui::Context) {
        let (Some(msg), Some(panel_rect)) = (self.toast_message.clone(), self.central_panel_rect) else {
            return;
        };
        let visible_duration = 3.0;
        let fade_duration = 0.5;
        let total_duration = visible_duration + fade_duration;
        let margin = 12.0;

        let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);
        let elapsed = self.toast_start.map(|t| t.elapsed().as_secs_f32()).unwrap_or(0.0);
        let alpha = if elapsed > visible_duration {
            ((total_duration - elapsed) / fade_duration).clamp(0.0, 1.0)
        } else {
            1.0
        };

        let response = egui::Area::new(egui::Id::new("copy_toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(0x1a, 0x1a, 0x1e, (230.0 * alpha) as u8))
                    .stroke(egui::Stroke::new(
                        1.0,
                        egui::Color32::from_rgba_unmultiplied(
                            theme::ACCENT.r(),
                            theme::ACCENT.g(),
                            theme::ACCENT.b(),
                            (100.0 * alpha) as u8,
                        ),
                    ))
                    .corner_radius(theme::RADIUS_MEDIUM)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(format!("{}  {}", egui_phosphor::regular::CHECK, msg)).color(
                            egui::Color32::from_rgba_unmultiplied(255, 255, 255, (255.0 * alpha) as u8),
                        ));
                    });
            });

        if response.response.hovered() {
            self.toast_start = Some(std::time::Instant::now());
        }

        let elapsed = self.toast_start.map(|t| t.elapsed().as_secs_f32()).unwrap_or(0.0);
        if elapsed >= total_duration {
            self.toast_message = None;
            self.toast_start = None;
        } else {
            ctx.request_repaint();
        }
    }
}

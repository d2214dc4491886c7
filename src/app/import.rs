//! Load snapshot panel: paste a generated payload to refill the form

use super::App;
use crate::constants::TOPICS;
use crate::snapshot::{PromptSnapshot, SnapshotError};
use crate::theme;
use eframe::egui;
use tracing::{debug, info, warn};

impl App {
    /// Replace the form contents with a parsed snapshot.
    ///
    /// Topics outside the fixed list are dropped. The current output is kept
    /// until the next generation.
    pub fn load_snapshot(&mut self, text: &str) -> Result<PromptSnapshot, SnapshotError> {
        let snapshot = PromptSnapshot::from_json(text)?;

        self.form.reset();
        for (topic, value) in snapshot.ratings.iter() {
            if TOPICS.iter().any(|t| *t == topic) {
                self.form.set_rating(topic, value);
            } else {
                debug!(topic, "Skipping unknown topic");
            }
        }
        self.form.set_location(snapshot.location.clone());

        info!(
            topics = self.form.rated_count(),
            timestamp = %snapshot.timestamp,
            "Snapshot loaded"
        );
        Ok(snapshot)
    }

    pub(crate) fn render_import(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new(
            egui::RichText::new("LOAD SNAPSHOT")
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_DIM),
        )
        .id_salt("load_snapshot")
        .default_open(false)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut self.import_text)
                    .hint_text("Paste a generated JSON payload")
                    .code_editor()
                    .desired_rows(6)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(theme::SPACING_SM);

            ui.horizontal(|ui| {
                let load = theme::button(format!("{}  Load", egui_phosphor::regular::UPLOAD_SIMPLE))
                    .min_size(egui::vec2(0.0, theme::BUTTON_HEIGHT));
                if ui.add_enabled(!self.import_text.trim().is_empty(), load).clicked() {
                    let text = self.import_text.clone();
                    match self.load_snapshot(&text) {
                        Ok(snapshot) => {
                            self.import_error = None;
                            self.import_text.clear();
                            let message = match snapshot.timestamp_utc() {
                                Some(at) => format!("Loaded snapshot from {}", at.format("%Y-%m-%d %H:%M UTC")),
                                None => "Snapshot loaded".to_string(),
                            };
                            self.show_toast(message);
                        }
                        Err(e) => {
                            warn!(error = %e, "Failed to load snapshot");
                            self.import_error = Some(e.to_string());
                        }
                    }
                }
                if let Some(err) = &self.import_error {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(err)
                                .size(theme::FONT_SMALL)
                                .color(theme::STATUS_WARNING),
                        )
                        .wrap(),
                    );
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use std::path::PathBuf;

    fn app() -> App {
        App::from_settings(Settings::default(), PathBuf::from("."))
    }

    #[test]
    fn generated_payload_loads_back_into_form() {
        let mut source = app();
        for (i, topic) in TOPICS.iter().enumerate() {
            source.form.set_rating(topic, i as u8 + 1);
        }
        source.form.set_location(" Paris ");
        source.generate_prompt();
        let json = source.generated.as_ref().unwrap().json.clone();

        let mut target = app();
        target.load_snapshot(&json).unwrap();

        assert_eq!(target.form.ratings(), source.form.ratings());
        assert_eq!(target.form.location(), " Paris ");
        assert!(target.form.is_ready());
    }

    #[test]
    fn unknown_topics_are_dropped() {
        let mut app = app();
        let text = r#"{"ratings":{"AI":4,"Cooking":9},"location":"Lima","timestamp":"2026-10-16T00:00:00.000Z"}"#;
        app.load_snapshot(text).unwrap();
        assert_eq!(app.form.rated_count(), 1);
        assert_eq!(app.form.rating("AI"), Some(4));
        assert!(!app.form.is_ready());
    }

    #[test]
    fn zero_weight_loads_but_blocks_generation() {
        let mut app = app();
        let ratings: Vec<String> = TOPICS
            .iter()
            .map(|t| format!("\"{}\":{}", t, if *t == "AI" { 0 } else { 5 }))
            .collect();
        let text = format!(
            r#"{{"ratings":{{{}}},"location":"Lima","timestamp":"2026-10-16T00:00:00.000Z"}}"#,
            ratings.join(",")
        );
        app.load_snapshot(&text).unwrap();
        assert_eq!(app.form.rated_count(), TOPICS.len());
        assert!(!app.form.is_ready());
    }

    #[test]
    fn invalid_payload_leaves_form_untouched() {
        let mut app = app();
        app.form.set_rating("Space", 6);
        app.form.set_location("Rome");

        let err = app.load_snapshot(r#"{"ratings":{"Space":42},"timestamp":"2026-10-16T00:00:00.000Z"}"#);
        assert!(err.is_err());
        assert_eq!(app.form.rating("Space"), Some(6));
        assert_eq!(app.form.location(), "Rome");
    }
}

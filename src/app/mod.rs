//! App module - contains the main application state and logic

mod form;
mod import;
mod output;

use crate::form::FormState;
use crate::prompt::{self, GeneratedPrompt};
use crate::settings::Settings;
use crate::theme;
use crate::types::OutputView;
use eframe::egui;
use std::path::PathBuf;
use tracing::{debug, info, warn};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) form: FormState,
    // Latest generation only; replaced on every trigger
    pub(crate) generated: Option<GeneratedPrompt>,
    pub(crate) output_view: OutputView,
    // None = not rasterized yet, Some(None) = rasterization failed
    pub(crate) logo_texture: Option<Option<egui::TextureHandle>>,
    // Load snapshot panel
    pub(crate) import_text: String,
    pub(crate) import_error: Option<String>,
    // Toast notification
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<std::time::Instant>,
    pub(crate) central_panel_rect: Option<egui::Rect>,
    // Settings
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor icons as a Proportional fallback
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self::from_settings(settings, data_dir)
    }

    pub(crate) fn from_settings(settings: Settings, data_dir: PathBuf) -> Self {
        Self {
            form: FormState::new(),
            generated: None,
            output_view: settings.output_view,
            logo_texture: None,
            import_text: String::new(),
            import_error: None,
            toast_message: None,
            toast_start: None,
            central_panel_rect: None,
            window_pos: None,
            window_size: None,
            needs_center: settings.window_pos().is_none(),
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            output_view: self.output_view,
        };
        settings.save(&self.data_dir);
    }

    /// Generate a new snapshot if the form is complete. Replaces any earlier output.
    pub fn generate_prompt(&mut self) {
        if !self.form.is_ready() {
            return;
        }
        match prompt::generate(&self.form, chrono::Utc::now()) {
            Ok(generated) => {
                info!(
                    topics = generated.snapshot.ratings.len(),
                    timestamp = %generated.snapshot.timestamp,
                    "Prompt generated"
                );
                self.generated = Some(generated);
            }
            Err(e) => warn!(error = %e, "Failed to generate prompt"),
        }
    }

    /// Text currently shown in the output block
    pub fn output_text(&self) -> Option<&str> {
        self.generated.as_ref().map(|g| match self.output_view {
            OutputView::Json => g.json.as_str(),
            OutputView::Prompt => g.summary.as_str(),
        })
    }

    pub fn clear_form(&mut self) {
        debug!("Form cleared");
        self.form.reset();
        self.generated = None;
    }

    pub(crate) fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_start = Some(std::time::Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOPICS;

    fn app() -> App {
        App::from_settings(Settings::default(), PathBuf::from("."))
    }

    fn fill(app: &mut App, location: &str) {
        for topic in TOPICS {
            app.form.set_rating(topic, 5);
        }
        app.form.set_location(location);
    }

    #[test]
    fn incomplete_form_generates_nothing() {
        let mut app = app();
        app.form.set_rating("AI", 3);
        app.form.set_location("Paris");
        app.generate_prompt();
        assert!(app.generated.is_none());
        assert!(app.output_text().is_none());
    }

    #[test]
    fn whitespace_location_generates_nothing() {
        let mut app = app();
        fill(&mut app, "   ");
        app.generate_prompt();
        assert!(app.generated.is_none());
    }

    #[test]
    fn second_generation_replaces_first() {
        let mut app = app();
        fill(&mut app, "Paris");
        app.generate_prompt();
        let first = app.generated.clone().unwrap();

        app.form.set_rating("AI", 10);
        app.form.set_location("Berlin");
        app.generate_prompt();
        let second = app.output_text().unwrap();

        assert!(second.contains("\"location\": \"Berlin\""));
        assert!(!second.contains("Paris"));
        assert_ne!(second, first.json);
    }

    #[test]
    fn output_view_switches_rendering() {
        let mut app = app();
        fill(&mut app, "Paris");
        app.generate_prompt();

        assert!(app.output_text().unwrap().starts_with('{'));
        app.output_view = OutputView::Prompt;
        assert!(app.output_text().unwrap().starts_with("Please summarize"));
    }

    #[test]
    fn clear_resets_form_and_output() {
        let mut app = app();
        fill(&mut app, "Paris");
        app.generate_prompt();
        app.clear_form();
        assert!(app.generated.is_none());
        assert_eq!(app.form.rated_count(), 0);
        assert!(!app.form.is_ready());
    }
}

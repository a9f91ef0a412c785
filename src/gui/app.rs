//! The eframe application.
//!
//! Lays out the widgets every frame and forwards their events to
//! [`ConverterState`].

use crate::gui::clipboard::{Clipboard, SystemClipboard};
use crate::gui::state::ConverterState;
use crate::gui::{
    AUTO_CONVERT_LABEL, CLEAR_LABEL, CONVERT_LABEL, COPY_LABEL, ERROR_TITLE, INPUT_LABEL,
    OUTPUT_LABEL, PANEL_MARGIN,
};
use eframe::egui;
use std::sync::Arc;

/// Height kept free below the text areas for the labels and controls row.
const CONTROLS_RESERVE: f32 = 96.0;

/// Smallest height given to each text area.
const MIN_TEXT_HEIGHT: f32 = 48.0;

/// Widget id of the input text area.
pub const INPUT_ID: &str = "caps_input";

/// Widget id of the output text area.
pub const OUTPUT_ID: &str = "caps_output";

/// Lays text out on one line per newline, never wrapping.
fn unwrapped_layout(ui: &egui::Ui, text: &str, _wrap_width: f32) -> Arc<egui::Galley> {
    let job = egui::text::LayoutJob::simple(
        text.to_owned(),
        egui::TextStyle::Body.resolve(ui.style()),
        ui.visuals().text_color(),
        f32::INFINITY,
    );
    ui.fonts(|fonts| fonts.layout_job(job))
}

/// Adds a fixed-height text area that scrolls instead of wrapping.
fn text_area(
    ui: &mut egui::Ui,
    id: &str,
    text: &mut dyn egui::TextBuffer,
    height: f32,
) -> egui::Response {
    let width = ui.available_width();
    let mut layouter = unwrapped_layout;
    egui::ScrollArea::both()
        .id_salt(id)
        .max_height(height)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(text)
                    .id(egui::Id::new(id))
                    .min_size(egui::vec2(width, height))
                    .layouter(&mut layouter),
            )
        })
        .inner
}

/// Converter window.
pub struct CapsApp<C = SystemClipboard> {
    state: ConverterState,
    clipboard: C,
}

impl CapsApp<SystemClipboard> {
    /// Creates the window with the system clipboard.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_clipboard(SystemClipboard::new())
    }
}

impl Default for CapsApp<SystemClipboard> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clipboard> CapsApp<C> {
    /// Creates the window with a custom clipboard.
    pub const fn with_clipboard(clipboard: C) -> Self {
        Self {
            state: ConverterState::new(),
            clipboard,
        }
    }

    /// Window state.
    pub const fn state(&self) -> &ConverterState {
        &self.state
    }

    /// Lays out one frame.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.status_bar(ctx);
        self.main_panel(ctx);
        self.error_dialog(ctx);
    }

    fn status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(self.state.status_line());
        });
    }

    fn main_panel(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::central_panel(&ctx.style()).inner_margin(PANEL_MARGIN);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let text_height =
                ((ui.available_height() - CONTROLS_RESERVE) / 2.0).max(MIN_TEXT_HEIGHT);

            ui.label(INPUT_LABEL);
            let input = text_area(ui, INPUT_ID, self.state.input_mut(), text_height);
            if input.changed() {
                self.state.mark_input_modified();
            }
            self.state.on_input_modified();
            ui.add_space(12.0);

            ui.label(OUTPUT_LABEL);
            let mut output: &str = self.state.output();
            text_area(ui, OUTPUT_ID, &mut output, text_height);
            ui.add_space(12.0);

            ui.horizontal(|ui| self.controls(ui));
        });
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let mut auto_convert = self.state.auto_convert();
        if ui.checkbox(&mut auto_convert, AUTO_CONVERT_LABEL).changed() {
            self.state.set_auto_convert(auto_convert);
        }
        ui.add_space(8.0);
        if ui.button(CONVERT_LABEL).clicked() {
            self.state.convert_now();
        }
        ui.add_space(8.0);
        if ui.button(COPY_LABEL).clicked() {
            self.state.copy_output(&mut self.clipboard);
        }
        ui.add_space(8.0);
        if ui.button(CLEAR_LABEL).clicked() {
            self.state.clear_all();
        }
    }

    fn error_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = self.state.error().map(ToOwned::to_owned) else {
            return;
        };

        let mut dismissed = false;
        let response = egui::Modal::new(egui::Id::new("copy_error")).show(ctx, |ui| {
            ui.heading(ERROR_TITLE);
            ui.label(message.as_str());
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
        if dismissed || response.should_close() {
            self.state.dismiss_error();
        }
    }
}

impl<C: Clipboard> eframe::App for CapsApp<C> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClipboardError;
    use crate::gui::state::{STATUS_CONVERTED, STATUS_READY};

    struct NullClipboard;

    impl Clipboard for NullClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("headless".to_string()))
        }
    }

    #[test]
    fn test_headless_frame_keeps_initial_state() {
        let ctx = egui::Context::default();
        let mut app = CapsApp::with_clipboard(NullClipboard);
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.ui(ctx));

        assert_eq!(app.state().status(), STATUS_READY);
        assert_eq!(app.state().output(), "");
        assert!(app.state().auto_convert());
    }

    /// Runs one frame with `events`, keyboard focus on the input area.
    fn type_into_input(
        ctx: &egui::Context,
        app: &mut CapsApp<NullClipboard>,
        events: Vec<egui::Event>,
    ) {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            ctx.memory_mut(|mem| mem.request_focus(egui::Id::new(INPUT_ID)));
            app.ui(ctx);
        });
    }

    #[test]
    fn test_typing_converts_through_widget() {
        let ctx = egui::Context::default();
        let mut app = CapsApp::with_clipboard(NullClipboard);
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.ui(ctx));

        type_into_input(&ctx, &mut app, vec![egui::Event::Text("abc\n".to_string())]);

        assert_eq!(app.state().input(), "abc\n");
        assert_eq!(app.state().output(), "ABC");
        assert_eq!(app.state().status(), STATUS_CONVERTED);
        assert!(!app.state().is_input_modified());
    }

    #[test]
    fn test_typing_without_auto_convert_leaves_output() {
        let ctx = egui::Context::default();
        let mut app = CapsApp::with_clipboard(NullClipboard);
        app.state.set_auto_convert(false);
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.ui(ctx));

        type_into_input(&ctx, &mut app, vec![egui::Event::Text("abc".to_string())]);

        assert_eq!(app.state().input(), "abc");
        assert_eq!(app.state().output(), "");
        assert_eq!(app.state().status(), STATUS_READY);
    }

    #[test]
    fn test_output_area_ignores_typing() {
        let ctx = egui::Context::default();
        let mut app = CapsApp::with_clipboard(NullClipboard);
        app.state.set_input("abc");
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.ui(ctx));

        let input = egui::RawInput {
            events: vec![egui::Event::Text("xyz".to_string())],
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            ctx.memory_mut(|mem| mem.request_focus(egui::Id::new(OUTPUT_ID)));
            app.ui(ctx);
        });

        assert_eq!(app.state().output(), "ABC");
        assert_eq!(app.state().input(), "abc");
    }

    #[test]
    fn test_headless_frame_with_error_dialog() {
        let ctx = egui::Context::default();
        let mut app = CapsApp::with_clipboard(NullClipboard);
        app.state.set_input("abc");
        app.state.copy_output(&mut app.clipboard);
        assert!(app.state().error().is_some());

        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| app.ui(ctx));
        }
        assert!(app.state().error().is_some());
        assert_eq!(app.state().output(), "ABC");
    }
}

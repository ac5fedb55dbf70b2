//! Creation view: title, toolbar, canvas, save

use egui::Ui;

use crate::canvas::{Brush, Surface, adapter, widget};
use crate::config::AppConfig;
use crate::domain::Drawing;
use crate::repository::RepoError;
use crate::tasks::Dispatcher;

use super::Notice;
use super::toolbar::EditTools;

pub struct EditorView {
    title: String,
    surface: Surface,
    tools: EditTools,
    canvas_size: egui::Vec2,
    saving: bool,
}

impl EditorView {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            title: String::new(),
            surface: Surface::new(Brush {
                color: config.brush_color.clone(),
                width: config.brush_width,
            }),
            tools: EditTools::default(),
            canvas_size: egui::vec2(config.canvas_width, config.canvas_height),
            saving: false,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, dispatcher: &Dispatcher) {
        ui.heading("Create a new drawing");

        ui.horizontal(|ui| {
            ui.label("Title:");
            ui.add_enabled(!self.saving, egui::TextEdit::singleline(&mut self.title));
        });
        ui.separator();

        ui.horizontal_top(|ui| {
            widget::show(ui, &mut self.surface, self.canvas_size);
            ui.vertical(|ui| {
                self.tools.ui(ui, &mut self.surface);
            });
        });

        ui.separator();

        // Block submission while a save is outstanding or the title is blank.
        let can_save = !self.saving && !self.title.trim().is_empty();
        let label = if self.saving { "Saving..." } else { "Save drawing" };
        if ui.add_enabled(can_save, egui::Button::new(label)).clicked() {
            self.saving = true;
            dispatcher.create_drawing(
                ui.ctx(),
                self.title.clone(),
                adapter::extract(&self.surface),
            );
        }
        if self.saving {
            ui.spinner();
        }
    }

    /// Handle the create completion. Returns the notice to show and whether
    /// the app should navigate back to the gallery.
    pub fn on_created(&mut self, result: Result<Drawing, RepoError>) -> (Notice, bool) {
        self.saving = false;
        match result {
            Ok(drawing) => (
                Notice::success(format!("Drawing \"{}\" saved.", drawing.name)),
                true,
            ),
            Err(err) => (Notice::error(format!("couldn't save drawing: {err}")), false),
        }
    }
}

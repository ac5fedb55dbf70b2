//! Editing toolbar shared by the create and detail views

use egui::{Key, Slider, Ui};

use crate::canvas::{Primitive, Surface};
use crate::domain::Point;
use crate::render::{color_to_hex, parse_color};

// Fixed insertion spots for toolbar-placed primitives.
const RECT_POSITION: Point = Point { x: 100.0, y: 100.0 };
const RECT_WIDTH: f64 = 120.0;
const RECT_HEIGHT: f64 = 80.0;
const TEXT_POSITION: Point = Point { x: 200.0, y: 200.0 };
const TEXT_FONT_SIZE: f64 = 24.0;

/// Toolbar state that is not part of the surface itself.
pub struct EditTools {
    /// Content for the next "Add text" insertion.
    pub text_input: String,
}

impl Default for EditTools {
    fn default() -> Self {
        Self {
            text_input: "Hello World".to_string(),
        }
    }
}

impl EditTools {
    /// Render the tool column and apply edits to the surface.
    pub fn ui(&mut self, ui: &mut Ui, surface: &mut Surface) {
        let toggle_label = if surface.drawing_mode {
            "Disable free draw"
        } else {
            "Enable free draw"
        };
        if ui.button(toggle_label).clicked() {
            surface.set_drawing_mode(!surface.drawing_mode);
        }

        ui.horizontal(|ui| {
            ui.label("Brush color:");
            let mut color = parse_color(&surface.brush.color);
            if ui.color_edit_button_srgba(&mut color).changed() {
                surface.brush.color = color_to_hex(color);
            }
        });
        ui.horizontal(|ui| {
            ui.label("Brush width:");
            let mut width = surface.brush.width as f32;
            if ui.add(Slider::new(&mut width, 1.0..=30.0)).changed() {
                surface.brush.width = f64::from(width);
            }
        });

        ui.separator();

        if ui.button("Add rectangle").clicked() {
            let color = surface.brush.color.clone();
            surface.add(Primitive::Rect {
                position: RECT_POSITION,
                width: RECT_WIDTH,
                height: RECT_HEIGHT,
                color,
            });
        }

        ui.text_edit_singleline(&mut self.text_input);
        if ui.button("Add text").clicked() && !self.text_input.trim().is_empty() {
            let color = surface.brush.color.clone();
            surface.add(Primitive::Text {
                content: self.text_input.clone(),
                position: TEXT_POSITION,
                font_size: TEXT_FONT_SIZE,
                color,
            });
        }

        ui.separator();

        if ui.button("Undo").clicked() {
            surface.undo();
        }
        if ui.button("Clear canvas").clicked() {
            surface.clear();
        }

        if ui.input(|i| i.key_pressed(Key::Z) && i.modifiers.command) {
            surface.undo();
        }
    }
}

//! egui widget for the drawing surface
//!
//! Paints the surface's primitives in draw order and, while free-drawing is
//! enabled, feeds pointer drags into the surface as an in-progress stroke.
//! All geometry lives in canvas-local pixel space (origin top-left); this is
//! the only place that converts to and from screen coordinates.

use egui::{Align2, Color32, CornerRadius, FontId, Pos2, Rect, Response, Sense, Stroke, Ui, vec2};

use crate::domain::Point;
use crate::render::parse_color;

use super::surface::{Primitive, Surface};

/// Show the surface and handle free-drawing input. Returns the canvas
/// response so callers can hit-test further if they need to.
pub fn show(ui: &mut Ui, surface: &mut Surface, size: egui::Vec2) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());

    handle_pointer(surface, &response, rect);

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, CornerRadius::same(2), Color32::WHITE);

    for primitive in surface.primitives() {
        draw_primitive(&painter, rect, primitive);
    }

    // Live preview of the stroke being drawn.
    if let Some(points) = surface.active_stroke() {
        if points.len() >= 2 {
            let stroke = Stroke::new(
                surface.brush.width as f32,
                parse_color(&surface.brush.color),
            );
            let screen: Vec<Pos2> = points.iter().map(|p| to_screen(rect, *p)).collect();
            painter.add(egui::Shape::line(screen, stroke));
        }
    }

    response
}

fn handle_pointer(surface: &mut Surface, response: &Response, rect: Rect) {
    if !surface.drawing_mode {
        return;
    }

    if let Some(pos) = response.interact_pointer_pos() {
        let point = to_surface(rect, pos);
        if response.drag_started() {
            surface.begin_stroke(point);
        } else if response.dragged() {
            surface.extend_stroke(point);
        }
    }
    if response.drag_stopped() {
        surface.finish_stroke();
    }
}

fn draw_primitive(painter: &egui::Painter, rect: Rect, primitive: &Primitive) {
    match primitive {
        Primitive::Line {
            start,
            end,
            color,
            thickness,
        } => {
            painter.line_segment(
                [to_screen(rect, *start), to_screen(rect, *end)],
                Stroke::new(*thickness as f32, parse_color(color)),
            );
        }
        Primitive::Rect {
            position,
            width,
            height,
            color,
        } => {
            let min = to_screen(rect, *position);
            painter.rect_filled(
                Rect::from_min_size(min, vec2(*width as f32, *height as f32)),
                CornerRadius::ZERO,
                parse_color(color),
            );
        }
        Primitive::Text {
            content,
            position,
            font_size,
            color,
        } => {
            painter.text(
                to_screen(rect, *position),
                Align2::LEFT_TOP,
                content,
                FontId::proportional(*font_size as f32),
                parse_color(color),
            );
        }
        Primitive::Stroke {
            points,
            color,
            thickness,
        } => {
            let screen: Vec<Pos2> = points.iter().map(|p| to_screen(rect, *p)).collect();
            painter.add(egui::Shape::line(
                screen,
                Stroke::new(*thickness as f32, parse_color(color)),
            ));
        }
    }
}

/// Screen position of a canvas-space point.
fn to_screen(rect: Rect, point: Point) -> Pos2 {
    Pos2::new(rect.min.x + point.x as f32, rect.min.y + point.y as f32)
}

/// Canvas-space point of a screen position, clamped to the canvas bounds.
fn to_surface(rect: Rect, pos: Pos2) -> Point {
    let clamped = pos.clamp(rect.min, rect.max);
    Point::new(
        f64::from(clamped.x - rect.min.x),
        f64::from(clamped.y - rect.min.y),
    )
}

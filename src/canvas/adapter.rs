//! Translation between the persisted geometry model and the live surface
//!
//! `load` rebuilds the surface's primitive list from a drawing, `extract`
//! reads it back into the three geometry collections. Element order within
//! each collection is preserved in both directions; it is the z-order the
//! backend round-trips.

use crate::domain::{Drawing, GeometryPayload, Line, Shape, TextAnnotation};

use super::surface::{Primitive, Surface};

/// Rebuild the surface from a drawing.
///
/// Any previously loaded contents are disposed first, so re-invoking (for
/// example when navigating between drawings) never leaves stale primitives
/// behind. Shapes with an unrecognized tag are skipped; the geometry they
/// carried is lost on the next save.
pub fn load(surface: &mut Surface, drawing: &Drawing) {
    surface.clear();

    for line in &drawing.geometry.lines {
        surface.add(Primitive::Line {
            start: line.start,
            end: line.end,
            color: line.color.clone(),
            thickness: line.thickness,
        });
    }

    for shape in &drawing.geometry.shapes {
        match shape {
            Shape::Rectangle {
                position,
                dimensions,
                color,
            } => surface.add(Primitive::Rect {
                position: *position,
                width: dimensions.width,
                height: dimensions.height,
                color: color.clone(),
            }),
            Shape::Unknown => {
                log::warn!("skipping unrecognized shape in drawing {}", drawing.id);
            }
        }
    }

    for text in &drawing.geometry.text_annotations {
        surface.add(Primitive::Text {
            content: text.content.clone(),
            position: text.position,
            font_size: text.font_size,
            color: text.color.clone(),
        });
    }
}

/// Read the surface back into the persisted model.
///
/// Primitives are visited in display order and classified by kind. A
/// freehand stroke decomposes into its consecutive line segments, so strokes
/// persist exactly like programmatically added lines. The surface is not
/// mutated.
pub fn extract(surface: &Surface) -> GeometryPayload {
    let mut payload = GeometryPayload::default();

    for primitive in surface.primitives() {
        match primitive {
            Primitive::Line {
                start,
                end,
                color,
                thickness,
            } => payload.lines.push(Line {
                start: *start,
                end: *end,
                color: color.clone(),
                thickness: *thickness,
            }),
            Primitive::Rect {
                position,
                width,
                height,
                color,
            } => payload.shapes.push(Shape::Rectangle {
                position: *position,
                dimensions: crate::domain::Dimensions {
                    width: *width,
                    height: *height,
                },
                color: color.clone(),
            }),
            Primitive::Text {
                content,
                position,
                font_size,
                color,
            } => payload.text_annotations.push(TextAnnotation {
                content: content.clone(),
                position: *position,
                font_size: *font_size,
                color: color.clone(),
            }),
            Primitive::Stroke {
                points,
                color,
                thickness,
            } => {
                for pair in points.windows(2) {
                    payload.lines.push(Line {
                        start: pair[0],
                        end: pair[1],
                        color: color.clone(),
                        thickness: *thickness,
                    });
                }
            }
        }
    }

    payload
}

//! Retained object graph for the drawing surface
//!
//! The surface owns an ordered list of primitives (order is draw order and
//! therefore z-order), the free-drawing state, and the brush settings. It
//! knows nothing about rendering or the network; the widget paints it and
//! the adapter translates it to and from the persisted model.

use crate::domain::Point;

/// Brush settings used for freehand strokes and newly placed shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    /// Opaque color string, stored into primitives verbatim.
    pub color: String,
    pub width: f64,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: "#ff0000".to_string(),
            width: 5.0,
        }
    }
}

/// A single renderable object on the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        start: Point,
        end: Point,
        color: String,
        thickness: f64,
    },
    Rect {
        position: Point,
        width: f64,
        height: f64,
        color: String,
    },
    Text {
        content: String,
        position: Point,
        font_size: f64,
        color: String,
    },
    /// A completed freehand stroke. One stroke is one primitive for undo
    /// purposes, but it extracts as its consecutive line segments.
    Stroke {
        points: Vec<Point>,
        color: String,
        thickness: f64,
    },
}

/// The live editing surface.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    primitives: Vec<Primitive>,
    /// Whether pointer drags currently produce freehand strokes.
    pub drawing_mode: bool,
    pub brush: Brush,
    active_stroke: Option<Vec<Point>>,
}

impl Surface {
    pub fn new(brush: Brush) -> Self {
        Self {
            brush,
            ..Default::default()
        }
    }

    /// Primitives in draw order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Append a primitive on top of everything drawn so far.
    pub fn add(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Remove and return the most recently added primitive. Repeated calls
    /// walk further back; on an empty surface this is a no-op.
    pub fn undo(&mut self) -> Option<Primitive> {
        self.primitives.pop()
    }

    /// Remove all primitives and cancel any in-progress stroke. Persisted
    /// backend state is untouched until the next save.
    pub fn clear(&mut self) {
        self.primitives.clear();
        self.active_stroke = None;
    }

    /// Toggle free-drawing. Leaving the mode cancels an in-progress stroke.
    pub fn set_drawing_mode(&mut self, enabled: bool) {
        self.drawing_mode = enabled;
        if !enabled {
            self.active_stroke = None;
        }
    }

    /// Start a freehand stroke at `point`. No-op unless free-drawing is on.
    pub fn begin_stroke(&mut self, point: Point) {
        if self.drawing_mode {
            self.active_stroke = Some(vec![point]);
        }
    }

    /// Extend the in-progress stroke. Tolerates being called without a
    /// matching `begin_stroke`.
    pub fn extend_stroke(&mut self, point: Point) {
        if let Some(points) = self.active_stroke.as_mut() {
            // Skip zero-length segments from a stationary pointer.
            if points.last() != Some(&point) {
                points.push(point);
            }
        }
    }

    /// Commit the in-progress stroke as a single primitive carrying the
    /// current brush. Strokes with fewer than two points are discarded.
    /// Returns whether a primitive was added.
    pub fn finish_stroke(&mut self) -> bool {
        let Some(points) = self.active_stroke.take() else {
            return false;
        };
        if points.len() < 2 {
            return false;
        }
        self.primitives.push(Primitive::Stroke {
            points,
            color: self.brush.color.clone(),
            thickness: self.brush.width,
        });
        true
    }

    /// Points of the stroke currently being drawn, for live preview.
    pub fn active_stroke(&self) -> Option<&[Point]> {
        self.active_stroke.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(x: f64) -> Primitive {
        Primitive::Line {
            start: Point::new(x, 0.0),
            end: Point::new(x, 10.0),
            color: "black".to_string(),
            thickness: 1.0,
        }
    }

    #[test]
    fn test_undo_removes_most_recent_first() {
        let mut surface = Surface::default();
        surface.add(line(1.0));
        surface.add(line(2.0));
        surface.add(line(3.0));

        assert_eq!(surface.undo(), Some(line(3.0)));
        assert_eq!(surface.undo(), Some(line(2.0)));
        assert_eq!(surface.len(), 1);
    }

    #[test]
    fn test_undo_n_times_removes_min_n_count() {
        let mut surface = Surface::default();
        surface.add(line(1.0));
        surface.add(line(2.0));

        let mut removed = 0;
        for _ in 0..5 {
            if surface.undo().is_some() {
                removed += 1;
            }
        }
        assert_eq!(removed, 2);
        assert!(surface.is_empty());
    }

    #[test]
    fn test_clear_empties_surface_and_cancels_stroke() {
        let mut surface = Surface::default();
        surface.add(line(1.0));
        surface.set_drawing_mode(true);
        surface.begin_stroke(Point::new(0.0, 0.0));

        surface.clear();
        assert!(surface.is_empty());
        assert!(surface.active_stroke().is_none());
    }

    #[test]
    fn test_stroke_commits_with_current_brush() {
        let mut surface = Surface::default();
        surface.brush = Brush {
            color: "#00ff00".to_string(),
            width: 3.0,
        };
        surface.set_drawing_mode(true);
        surface.begin_stroke(Point::new(0.0, 0.0));
        surface.extend_stroke(Point::new(1.0, 1.0));
        surface.extend_stroke(Point::new(2.0, 0.0));
        assert!(surface.finish_stroke());

        match &surface.primitives()[0] {
            Primitive::Stroke {
                points,
                color,
                thickness,
            } => {
                assert_eq!(points.len(), 3);
                assert_eq!(color, "#00ff00");
                assert_eq!(*thickness, 3.0);
            }
            other => panic!("expected stroke, got {other:?}"),
        }
    }

    #[test]
    fn test_single_point_stroke_is_discarded() {
        let mut surface = Surface::default();
        surface.set_drawing_mode(true);
        surface.begin_stroke(Point::new(5.0, 5.0));
        assert!(!surface.finish_stroke());
        assert!(surface.is_empty());
    }

    #[test]
    fn test_stroke_ignored_when_drawing_mode_off() {
        let mut surface = Surface::default();
        surface.begin_stroke(Point::new(0.0, 0.0));
        surface.extend_stroke(Point::new(1.0, 1.0));
        assert!(!surface.finish_stroke());
    }

    #[test]
    fn test_disabling_drawing_mode_cancels_active_stroke() {
        let mut surface = Surface::default();
        surface.set_drawing_mode(true);
        surface.begin_stroke(Point::new(0.0, 0.0));
        surface.extend_stroke(Point::new(4.0, 4.0));
        surface.set_drawing_mode(false);
        assert!(surface.active_stroke().is_none());
        assert!(!surface.finish_stroke());
    }

    #[test]
    fn test_extend_without_begin_is_tolerated() {
        let mut surface = Surface::default();
        surface.set_drawing_mode(true);
        surface.extend_stroke(Point::new(1.0, 1.0));
        assert!(surface.active_stroke().is_none());
    }

    #[test]
    fn test_stationary_pointer_does_not_duplicate_points() {
        let mut surface = Surface::default();
        surface.set_drawing_mode(true);
        surface.begin_stroke(Point::new(1.0, 1.0));
        surface.extend_stroke(Point::new(1.0, 1.0));
        surface.extend_stroke(Point::new(1.0, 1.0));
        assert_eq!(surface.active_stroke().unwrap().len(), 1);
    }
}

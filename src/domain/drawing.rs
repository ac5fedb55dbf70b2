//! Wire/storage model for a drawing's contents
//!
//! A `Drawing` is the persisted entity: an opaque backend-assigned id, a
//! user-supplied name, and three ordered geometry collections. Collection
//! order is z-order and must survive a save/load round trip unchanged.
//!
//! Wire naming quirks of the backend are kept here and nowhere else: the
//! entity id travels as `_id`, the create request carries the label as
//! `title` while the stored entity carries it as `name`, and the text
//! collection is camelCased (`textAnnotations`).

use serde::{Deserialize, Serialize};

/// A point in canvas pixel space, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A straight stroke segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    /// Opaque color string (hex or named), stored verbatim.
    pub color: String,
    pub thickness: f64,
}

/// Width and height of a rectangle shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// Tagged shape variants. The backend stores the tag in a `type` field.
///
/// Tags we do not recognize deserialize to `Unknown` instead of failing the
/// whole document; the canvas adapter skips them with a warning when loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Rectangle {
        position: Point,
        dimensions: Dimensions,
        color: String,
    },
    #[serde(other)]
    Unknown,
}

/// A positioned text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnnotation {
    pub content: String,
    pub position: Point,
    pub font_size: f64,
    pub color: String,
}

/// The three geometry collections of a drawing, in draw order.
///
/// This is both the PATCH request body and the payload half of the POST
/// body, so it serializes exactly as the backend expects it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryPayload {
    #[serde(default)]
    pub lines: Vec<Line>,
    #[serde(default)]
    pub shapes: Vec<Shape>,
    #[serde(default)]
    pub text_annotations: Vec<TextAnnotation>,
}

/// The persisted drawing entity as returned by the backend.
///
/// `id` is assigned by the backend on creation and never mutated by this
/// client. `name` is canonical here; `title` is only ever sent in the create
/// request (see [`CreateDrawingBody`]) but accepted as an input alias in case
/// the backend echoes it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(flatten)]
    pub geometry: GeometryPayload,
}

/// POST /drawings request body: `{title, drawingData}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDrawingBody<'a> {
    pub title: &'a str,
    pub drawing_data: &'a GeometryPayload,
}

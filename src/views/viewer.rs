//! Detail view: fetch by id, rebuild the canvas, edit, re-save
//!
//! The fetch carries a sequence number owned by the app shell. A completion
//! whose sequence is not the one this view was mounted with belongs to a
//! superseded navigation and is discarded, so a slow response for drawing A
//! can never populate a view that has since moved on to drawing B.

use egui::Ui;

use crate::canvas::{Brush, Surface, adapter, widget};
use crate::config::AppConfig;
use crate::domain::Drawing;
use crate::repository::RepoError;
use crate::tasks::Dispatcher;

use super::Notice;
use super::toolbar::EditTools;

pub struct ViewerView {
    id: String,
    seq: u64,
    name: Option<String>,
    /// None until the fetch completes; toolbar and save are guarded on it.
    surface: Option<Surface>,
    tools: EditTools,
    brush: Brush,
    canvas_size: egui::Vec2,
    loading: bool,
    saving: bool,
    error: Option<String>,
}

impl ViewerView {
    pub fn new(
        id: String,
        seq: u64,
        ctx: &egui::Context,
        dispatcher: &Dispatcher,
        config: &AppConfig,
    ) -> Self {
        let view = Self {
            id: id.clone(),
            seq,
            name: None,
            surface: None,
            tools: EditTools::default(),
            brush: Brush {
                color: config.brush_color.clone(),
                width: config.brush_width,
            },
            canvas_size: egui::vec2(config.canvas_width, config.canvas_height),
            loading: true,
            saving: false,
            error: None,
        };
        dispatcher.fetch_drawing(ctx, id, seq);
        view
    }

    pub fn ui(&mut self, ui: &mut Ui, dispatcher: &Dispatcher) {
        match &self.name {
            Some(name) => ui.heading(name.as_str()),
            None => ui.heading("Loading..."),
        };
        ui.separator();

        if self.loading {
            ui.spinner();
            return;
        }

        if let Some(error) = self.error.clone() {
            ui.colored_label(ui.visuals().error_fg_color, error);
            if ui.button("Retry").clicked() {
                self.loading = true;
                self.error = None;
                dispatcher.fetch_drawing(ui.ctx(), self.id.clone(), self.seq);
            }
            return;
        }

        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        ui.horizontal_top(|ui| {
            widget::show(ui, surface, self.canvas_size);
            ui.vertical(|ui| {
                self.tools.ui(ui, surface);
            });
        });

        ui.separator();

        let label = if self.saving { "Saving..." } else { "Save changes" };
        if ui
            .add_enabled(!self.saving, egui::Button::new(label))
            .clicked()
        {
            self.saving = true;
            dispatcher.save_drawing(ui.ctx(), self.id.clone(), adapter::extract(surface));
        }
        if self.saving {
            ui.spinner();
        }
    }

    pub fn on_fetched(&mut self, seq: u64, result: Result<Drawing, RepoError>) -> Option<Notice> {
        if seq != self.seq {
            log::debug!("discarding stale fetch result (seq {seq}, current {})", self.seq);
            return None;
        }

        self.loading = false;
        match result {
            Ok(drawing) => {
                // Fresh surface per load; the previous one (if any) is
                // dropped here, before the new contents are constructed.
                let mut surface = Surface::new(self.brush.clone());
                adapter::load(&mut surface, &drawing);
                self.name = Some(drawing.name);
                self.surface = Some(surface);
                self.error = None;
                None
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    pub fn on_saved(&mut self, id: &str, result: Result<Drawing, RepoError>) -> Option<Notice> {
        if id != self.id {
            return None;
        }
        self.saving = false;
        match result {
            Ok(_) => Some(Notice::success("Changes saved.")),
            Err(err) => Some(Notice::error(format!("couldn't save changes: {err}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeometryPayload, Line, Point};
    use crate::views::NoticeKind;

    fn bare_view(id: &str, seq: u64) -> ViewerView {
        ViewerView {
            id: id.to_string(),
            seq,
            name: None,
            surface: None,
            tools: EditTools::default(),
            brush: Brush::default(),
            canvas_size: egui::vec2(800.0, 600.0),
            loading: true,
            saving: false,
            error: None,
        }
    }

    fn drawing(id: &str) -> Drawing {
        Drawing {
            id: id.to_string(),
            name: format!("drawing {id}"),
            geometry: GeometryPayload {
                lines: vec![Line {
                    start: Point::new(0.0, 0.0),
                    end: Point::new(1.0, 1.0),
                    color: "black".to_string(),
                    thickness: 1.0,
                }],
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_stale_fetch_result_is_discarded() {
        let mut view = bare_view("b", 7);
        view.on_fetched(3, Ok(drawing("a")));
        assert!(view.surface.is_none());
        assert!(view.loading);
    }

    #[test]
    fn test_current_fetch_result_builds_surface() {
        let mut view = bare_view("a", 7);
        view.on_fetched(7, Ok(drawing("a")));
        assert_eq!(view.name.as_deref(), Some("drawing a"));
        assert_eq!(view.surface.as_ref().unwrap().len(), 1);
        assert!(!view.loading);
    }

    #[test]
    fn test_refetch_replaces_surface_without_residue() {
        let mut view = bare_view("a", 1);
        view.on_fetched(1, Ok(drawing("a")));

        let mut empty = drawing("a");
        empty.geometry = GeometryPayload::default();
        view.on_fetched(1, Ok(empty));
        assert!(view.surface.as_ref().unwrap().is_empty());
    }

    #[test]
    fn test_fetch_not_found_shows_error_state() {
        let mut view = bare_view("a", 1);
        view.on_fetched(
            1,
            Err(RepoError::NotFound {
                id: "a".to_string(),
            }),
        );
        assert!(view.error.is_some());
        assert!(view.surface.is_none());
    }

    #[test]
    fn test_save_failure_clears_in_flight_flag() {
        let mut view = bare_view("a", 1);
        view.saving = true;
        let notice = view.on_saved(
            "a",
            Err(RepoError::NotFound {
                id: "a".to_string(),
            }),
        );
        assert_eq!(notice.unwrap().kind, NoticeKind::Error);
        assert!(!view.saving);
    }

    #[test]
    fn test_save_result_for_other_drawing_is_ignored() {
        let mut view = bare_view("a", 1);
        view.saving = true;
        assert!(view.on_saved("z", Ok(drawing("z"))).is_none());
        assert!(view.saving);
    }
}

//! List view: all saved drawings, navigation, delete with confirmation

use egui::{Align2, RichText, ScrollArea, Ui};

use crate::domain::Drawing;
use crate::repository::{DeleteOutcome, RepoError};
use crate::tasks::Dispatcher;

use super::Notice;

/// Navigation requests the gallery hands back to the app shell.
pub enum GalleryAction {
    Open(String),
    NewDrawing,
}

#[derive(Default)]
pub struct GalleryView {
    drawings: Vec<Drawing>,
    loading: bool,
    fetched_once: bool,
    /// Drawing awaiting the user's confirmation: (id, name).
    pending_delete: Option<(String, String)>,
    delete_in_flight: Option<String>,
}

impl GalleryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kick off a list refetch (invalidation signal or first show).
    pub fn refresh(&mut self, ui_ctx: &egui::Context, dispatcher: &Dispatcher) {
        self.loading = true;
        self.fetched_once = true;
        dispatcher.fetch_list(ui_ctx);
    }

    pub fn ui(&mut self, ui: &mut Ui, dispatcher: &Dispatcher) -> Option<GalleryAction> {
        if !self.fetched_once {
            let ctx = ui.ctx().clone();
            self.refresh(&ctx, dispatcher);
        }

        let mut action = None;

        ui.horizontal(|ui| {
            ui.heading("All drawings");
            if self.loading {
                ui.spinner();
            }
        });
        ui.separator();

        ScrollArea::vertical().show(ui, |ui| {
            if self.drawings.is_empty() && !self.loading {
                ui.label("No drawings yet.");
            }
            for drawing in &self.drawings {
                ui.horizontal(|ui| {
                    if ui.link(RichText::new(drawing.name.as_str()).size(18.0)).clicked() {
                        action = Some(GalleryAction::Open(drawing.id.clone()));
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let deleting = self.delete_in_flight.as_deref() == Some(drawing.id.as_str());
                        if ui
                            .add_enabled(!deleting, egui::Button::new("Delete"))
                            .clicked()
                        {
                            self.pending_delete =
                                Some((drawing.id.clone(), drawing.name.clone()));
                        }
                    });
                });
                ui.separator();
            }
        });

        if ui.button("Add drawing").clicked() {
            action = Some(GalleryAction::NewDrawing);
        }

        self.confirm_delete_dialog(ui, dispatcher);

        action
    }

    /// Confirmation prompt before anything is deleted.
    fn confirm_delete_dialog(&mut self, ui: &Ui, dispatcher: &Dispatcher) {
        let Some((id, name)) = self.pending_delete.clone() else {
            return;
        };

        egui::Window::new("Delete drawing?")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ui.ctx(), |ui| {
                ui.label(format!(
                    "Delete \"{name}\"? You won't be able to revert this."
                ));
                ui.horizontal(|ui| {
                    if ui.button("Yes, delete it").clicked() {
                        self.delete_in_flight = Some(id.clone());
                        dispatcher.delete_drawing(ui.ctx(), id.clone());
                        self.pending_delete = None;
                    }
                    if ui.button("Cancel").clicked() {
                        self.pending_delete = None;
                    }
                });
            });
    }

    pub fn on_list_loaded(&mut self, result: Result<Vec<Drawing>, RepoError>) -> Option<Notice> {
        self.loading = false;
        match result {
            Ok(drawings) => {
                self.drawings = drawings;
                None
            }
            // Keep whatever was already listed; the user can retry.
            Err(err) => Some(Notice::error(format!("couldn't load drawings: {err}"))),
        }
    }

    /// A delete only counts as a success when the backend reports a positive
    /// count; an HTTP-level success with `deletedCount == 0` is a failure.
    pub fn on_deleted(
        &mut self,
        id: &str,
        result: Result<DeleteOutcome, RepoError>,
    ) -> Notice {
        if self.delete_in_flight.as_deref() == Some(id) {
            self.delete_in_flight = None;
        }
        match result {
            Ok(outcome) if outcome.succeeded() => Notice::success("Drawing deleted."),
            Ok(_) => Notice::error("Nothing was deleted; the drawing may already be gone."),
            Err(err) => Notice::error(format!("couldn't delete drawing: {err}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeometryPayload;
    use crate::views::NoticeKind;

    fn drawing(id: &str) -> Drawing {
        Drawing {
            id: id.to_string(),
            name: format!("drawing {id}"),
            geometry: GeometryPayload::default(),
        }
    }

    #[test]
    fn test_list_failure_keeps_previous_entries() {
        let mut view = GalleryView::new();
        view.on_list_loaded(Ok(vec![drawing("a"), drawing("b")]));

        let err = RepoError::NotFound {
            id: "x".to_string(),
        };
        let notice = view.on_list_loaded(Err(err));
        assert_eq!(notice.unwrap().kind, NoticeKind::Error);
        assert_eq!(view.drawings.len(), 2);
    }

    #[test]
    fn test_zero_deleted_count_reports_failure() {
        let mut view = GalleryView::new();
        view.delete_in_flight = Some("a".to_string());
        let notice = view.on_deleted("a", Ok(DeleteOutcome { deleted_count: 0 }));
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(view.delete_in_flight.is_none());
    }

    #[test]
    fn test_positive_deleted_count_reports_success() {
        let mut view = GalleryView::new();
        let notice = view.on_deleted("a", Ok(DeleteOutcome { deleted_count: 1 }));
        assert_eq!(notice.kind, NoticeKind::Success);
    }
}

//! Application shell: screen routing, event pump, notices
//!
//! Exactly one screen is mounted at a time. The editor and viewer each own
//! their drawing surface outright, so navigating away drops the old surface
//! before a new one can exist; no shared canvas reference survives between
//! drawings.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context as _;
use tokio::sync::watch;

use crate::config::AppConfig;
use crate::repository::DrawingRepository;
use crate::tasks::{Dispatcher, RepoEvent};
use crate::views::editor::EditorView;
use crate::views::gallery::{GalleryAction, GalleryView};
use crate::views::viewer::ViewerView;
use crate::views::{Notice, NoticeKind};

const NOTICE_TTL: Duration = Duration::from_secs(5);

pub fn run() -> anyhow::Result<()> {
    let config = AppConfig::load();
    log::info!("drawing service at {}", config.server_url);

    let repo = Arc::new(
        DrawingRepository::new(&config.server_url).context("failed to build HTTP client")?,
    );
    let invalidations = repo.invalidations();
    let dispatcher = Dispatcher::new(repo)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1080.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Easel",
        options,
        Box::new(move |_cc| Ok(Box::new(EaselApp::new(config, dispatcher, invalidations)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to start UI: {err}"))
}

enum Screen {
    Gallery(GalleryView),
    Create(EditorView),
    Detail(ViewerView),
}

struct ActiveNotice {
    notice: Notice,
    shown_at: Instant,
}

pub struct EaselApp {
    config: AppConfig,
    dispatcher: Dispatcher,
    invalidations: watch::Receiver<u64>,
    screen: Screen,
    notices: Vec<ActiveNotice>,
    /// Monotonic sequence for by-id fetches; the mounted viewer only accepts
    /// the completion matching the sequence it was created with.
    next_seq: u64,
}

impl EaselApp {
    pub fn new(
        config: AppConfig,
        dispatcher: Dispatcher,
        invalidations: watch::Receiver<u64>,
    ) -> Self {
        Self {
            config,
            dispatcher,
            invalidations,
            screen: Screen::Gallery(GalleryView::new()),
            notices: Vec::new(),
            next_seq: 0,
        }
    }

    fn push_notice(&mut self, notice: Notice) {
        self.notices.push(ActiveNotice {
            notice,
            shown_at: Instant::now(),
        });
    }

    /// Route repository completions to the mounted view. Events for a view
    /// that is no longer mounted are dropped.
    fn pump_events(&mut self) {
        for event in self.dispatcher.poll() {
            match event {
                RepoEvent::ListLoaded(result) => {
                    if let Screen::Gallery(gallery) = &mut self.screen {
                        if let Some(notice) = gallery.on_list_loaded(result) {
                            self.push_notice(notice);
                        }
                    }
                }
                RepoEvent::DrawingFetched { seq, result } => {
                    if let Screen::Detail(viewer) = &mut self.screen {
                        if let Some(notice) = viewer.on_fetched(seq, result) {
                            self.push_notice(notice);
                        }
                    }
                }
                RepoEvent::Created(result) => {
                    if let Screen::Create(editor) = &mut self.screen {
                        let (notice, navigate) = editor.on_created(result);
                        self.push_notice(notice);
                        if navigate {
                            self.screen = Screen::Gallery(GalleryView::new());
                        }
                    }
                }
                RepoEvent::Saved { id, result } => {
                    if let Screen::Detail(viewer) = &mut self.screen {
                        if let Some(notice) = viewer.on_saved(&id, result) {
                            self.push_notice(notice);
                        }
                    }
                }
                RepoEvent::Deleted { id, result } => {
                    if let Screen::Gallery(gallery) = &mut self.screen {
                        let notice = gallery.on_deleted(&id, result);
                        self.push_notice(notice);
                    }
                }
            }
        }
    }

    /// Refetch the list when a mutation elsewhere invalidated it.
    fn check_invalidations(&mut self, ctx: &egui::Context) {
        if self.invalidations.has_changed().unwrap_or(false) {
            self.invalidations.mark_unchanged();
            if let Screen::Gallery(gallery) = &mut self.screen {
                gallery.refresh(ctx, &self.dispatcher);
            }
        }
    }

    fn notice_bar(&mut self, ctx: &egui::Context) {
        self.notices
            .retain(|active| active.shown_at.elapsed() < NOTICE_TTL);
        if self.notices.is_empty() {
            return;
        }
        // Expiry needs a frame even when the user is idle.
        ctx.request_repaint_after(Duration::from_millis(500));

        egui::TopBottomPanel::top("notices").show(ctx, |ui| {
            let mut dismissed = None;
            for (index, active) in self.notices.iter().enumerate() {
                let color = match active.notice.kind {
                    NoticeKind::Success => egui::Color32::from_rgb(0x2e, 0x7d, 0x32),
                    NoticeKind::Error => ui.visuals().error_fg_color,
                };
                ui.horizontal(|ui| {
                    ui.colored_label(color, active.notice.text.as_str());
                    if ui.small_button("x").clicked() {
                        dismissed = Some(index);
                    }
                });
            }
            if let Some(index) = dismissed {
                self.notices.remove(index);
            }
        });
    }

    fn navigation_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("navigation").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Easel");
                ui.separator();
                let on_gallery = matches!(self.screen, Screen::Gallery(_));
                if ui.add_enabled(!on_gallery, egui::Button::new("Gallery")).clicked() {
                    self.screen = Screen::Gallery(GalleryView::new());
                }
            });
        });
    }
}

impl eframe::App for EaselApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump_events();
        self.check_invalidations(ctx);
        self.navigation_bar(ctx);
        self.notice_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            match &mut self.screen {
                Screen::Gallery(gallery) => {
                    if let Some(action) = gallery.ui(ui, &self.dispatcher) {
                        match action {
                            GalleryAction::Open(id) => {
                                self.next_seq += 1;
                                self.screen = Screen::Detail(ViewerView::new(
                                    id,
                                    self.next_seq,
                                    ctx,
                                    &self.dispatcher,
                                    &self.config,
                                ));
                            }
                            GalleryAction::NewDrawing => {
                                self.screen = Screen::Create(EditorView::new(&self.config));
                            }
                        }
                    }
                }
                Screen::Create(editor) => editor.ui(ui, &self.dispatcher),
                Screen::Detail(viewer) => viewer.ui(ui, &self.dispatcher),
            };
        });
    }
}

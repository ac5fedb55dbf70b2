//! Async bridge between the repository and the UI event loop
//!
//! The UI runs single-threaded and must never block on the network, so every
//! repository call is spawned onto a tokio runtime here. Completions come
//! back as typed events over a crossbeam channel, which the app drains once
//! per frame; each completion also requests a repaint so results show up
//! without waiting for the next input event.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use anyhow::Context as _;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::domain::{Drawing, GeometryPayload};
use crate::repository::{DeleteOutcome, DrawingRepository, RepoError};

/// Completion events delivered to the UI thread.
#[derive(Debug)]
pub enum RepoEvent {
    ListLoaded(Result<Vec<Drawing>, RepoError>),
    /// Result of a by-id fetch. `seq` identifies the request so stale
    /// responses for a superseded navigation can be discarded.
    DrawingFetched {
        seq: u64,
        result: Result<Drawing, RepoError>,
    },
    Created(Result<Drawing, RepoError>),
    Saved {
        id: String,
        result: Result<Drawing, RepoError>,
    },
    Deleted {
        id: String,
        result: Result<DeleteOutcome, RepoError>,
    },
}

pub struct Dispatcher {
    repo: Arc<DrawingRepository>,
    runtime: tokio::runtime::Runtime,
    tx: Sender<RepoEvent>,
    rx: Receiver<RepoEvent>,
}

impl Dispatcher {
    pub fn new(repo: Arc<DrawingRepository>) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .context("failed to start async runtime")?;
        let (tx, rx) = unbounded();
        Ok(Self {
            repo,
            runtime,
            tx,
            rx,
        })
    }

    /// Drain all completions that arrived since the last frame.
    pub fn poll(&self) -> Vec<RepoEvent> {
        self.rx.try_iter().collect()
    }

    fn spawn<F>(&self, ctx: &egui::Context, make: F)
    where
        F: FnOnce(Arc<DrawingRepository>) -> BoxedEventFuture + Send + 'static,
    {
        let repo = Arc::clone(&self.repo);
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let event = make(repo).await;
            // The receiver only disappears on shutdown.
            let _ = tx.send(event);
            ctx.request_repaint();
        });
    }

    pub fn fetch_list(&self, ctx: &egui::Context) {
        self.spawn(ctx, |repo| {
            Box::pin(async move { RepoEvent::ListLoaded(repo.list().await) })
        });
    }

    pub fn fetch_drawing(&self, ctx: &egui::Context, id: String, seq: u64) {
        self.spawn(ctx, move |repo| {
            Box::pin(async move {
                RepoEvent::DrawingFetched {
                    seq,
                    result: repo.get(&id).await,
                }
            })
        });
    }

    pub fn create_drawing(&self, ctx: &egui::Context, title: String, geometry: GeometryPayload) {
        self.spawn(ctx, move |repo| {
            Box::pin(async move { RepoEvent::Created(repo.create(&title, &geometry).await) })
        });
    }

    pub fn save_drawing(&self, ctx: &egui::Context, id: String, geometry: GeometryPayload) {
        self.spawn(ctx, move |repo| {
            Box::pin(async move {
                let result = repo.update(&id, &geometry).await;
                RepoEvent::Saved { id, result }
            })
        });
    }

    pub fn delete_drawing(&self, ctx: &egui::Context, id: String) {
        self.spawn(ctx, move |repo| {
            Box::pin(async move {
                let result = repo.delete(&id).await;
                RepoEvent::Deleted { id, result }
            })
        });
    }
}

type BoxedEventFuture = Pin<Box<dyn Future<Output = RepoEvent> + Send>>;

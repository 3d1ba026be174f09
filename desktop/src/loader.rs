use eframe::egui;
use quiz_core::{Question, QuestionSource, SourceError};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

pub type SharedSource = Arc<dyn QuestionSource + Send + Sync>;
type Batch = Result<Vec<Question>, SourceError>;

/// Runs one fetch at a time on a worker thread so the window keeps painting.
#[derive(Default)]
pub struct Loader {
    pending: Option<Receiver<Batch>>,
}

impl Loader {
    pub fn start(&mut self, source: SharedSource, ctx: egui::Context) {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let batch = source.fetch();
            // The receiver is gone if the window closed mid-fetch.
            let _ = tx.send(batch);
            ctx.request_repaint();
        });
        self.pending = Some(rx);
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the finished batch, if any.
    pub fn poll(&mut self) -> Option<Batch> {
        let rx = self.pending.as_ref()?;
        let batch = match rx.try_recv() {
            Ok(batch) => batch,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(SourceError::Interrupted),
        };
        self.pending = None;
        Some(batch)
    }
}

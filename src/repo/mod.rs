//! Store façade: serializes mutations onto a single worker lane and
//! re-exposes the live query as a subscription registry.
//!
//! One dedicated thread owns the [`SqliteStorage`] connection and drains
//! a FIFO channel of tasks, so mutations submitted through the repository
//! are applied in global submission order and never race each other.
//! Subscription requests travel through the same lane, which means a
//! delivered snapshot is always the result of a prefix of that order,
//! never a torn read.
//!
//! Mutating calls return immediately with a [`Completion`] carrying the
//! store's `Result`; callers may wait on it or drop it. Subscribers pull
//! snapshots from their own channel on whatever thread they like.

use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::error::{NoteError, Result};
use crate::model::{NewNote, Note};
use crate::storage::SqliteStorage;

/// One queued unit of work for the worker lane.
enum Task {
    Insert {
        note: NewNote,
        done: mpsc::Sender<Result<i64>>,
    },
    Delete {
        id: i64,
        done: mpsc::Sender<Result<()>>,
    },
    DeleteAll {
        done: mpsc::Sender<Result<()>>,
    },
    Subscribe {
        snapshots: mpsc::Sender<Vec<Note>>,
    },
    Shutdown,
}

/// Deferred result of an enqueued mutation.
///
/// The worker sends the store's `Result` through this handle once the
/// task has run. Dropping the handle discards the result; the mutation
/// still runs to completion.
#[must_use = "dropping a Completion discards the store's Result"]
pub struct Completion<T> {
    rx: mpsc::Receiver<Result<T>>,
}

impl<T> Completion<T> {
    /// Block until the mutation has been applied and return its result.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the mutation failed, or `WorkerGone`
    /// if the lane shut down before the task ran.
    pub fn wait(self) -> Result<T> {
        self.rx.recv().map_err(|_| NoteError::WorkerGone)?
    }
}

/// A registered observer of the live query.
///
/// Receives the current snapshot immediately on subscribing and a fresh
/// ordered snapshot after every committed mutation. The channel closes
/// when the repository shuts down.
pub struct Subscription {
    rx: mpsc::Receiver<Vec<Note>>,
}

impl Subscription {
    /// Block until the next snapshot arrives.
    ///
    /// # Errors
    ///
    /// Returns `WorkerGone` once the repository has shut down.
    pub fn recv(&self) -> Result<Vec<Note>> {
        self.rx.recv().map_err(|_| NoteError::WorkerGone)
    }

    /// Non-blocking receive; `None` when no snapshot is pending.
    #[must_use]
    pub fn try_recv(&self) -> Option<Vec<Note>> {
        self.rx.try_recv().ok()
    }

    /// Iterate over snapshots until the repository shuts down.
    pub fn iter(&self) -> impl Iterator<Item = Vec<Note>> + '_ {
        self.rx.iter()
    }
}

/// Single entry point to the note store.
///
/// Owns the worker lane; constructed once at startup with an explicitly
/// owned store, no hidden global. Dropping the repository enqueues a
/// shutdown task behind any pending mutations and joins the worker, so
/// every accepted mutation runs to completion.
pub struct NoteRepository {
    tx: mpsc::Sender<Task>,
    worker: Option<JoinHandle<()>>,
}

impl NoteRepository {
    /// Wrap a store, spawning the worker lane.
    #[must_use]
    pub fn new(storage: SqliteStorage) -> Self {
        let (tx, rx) = mpsc::channel();
        let worker = thread::Builder::new()
            .name("note-store".to_string())
            .spawn(move || worker_loop(&storage, &rx))
            .unwrap_or_else(|e| panic!("failed to spawn store worker: {e}"));
        Self {
            tx,
            worker: Some(worker),
        }
    }

    /// Open the database at `path` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let storage = SqliteStorage::open(path)?;
        Ok(Self::new(storage))
    }

    /// Enqueue an insert; returns immediately.
    ///
    /// The completion carries the id the store assigned.
    pub fn insert(&self, note: NewNote) -> Completion<i64> {
        let (done, rx) = mpsc::channel();
        self.submit(Task::Insert { note, done });
        Completion { rx }
    }

    /// Enqueue a delete by id; returns immediately.
    ///
    /// A missing id is a no-op, not an error.
    pub fn delete(&self, id: i64) -> Completion<()> {
        let (done, rx) = mpsc::channel();
        self.submit(Task::Delete { id, done });
        Completion { rx }
    }

    /// Enqueue a delete of every note; returns immediately. Idempotent.
    pub fn delete_all(&self) -> Completion<()> {
        let (done, rx) = mpsc::channel();
        self.submit(Task::DeleteAll { done });
        Completion { rx }
    }

    /// Register an observer of the live query.
    ///
    /// The current snapshot is delivered before this call returns a
    /// value the caller can receive from, ordered behind any mutation
    /// already in the lane.
    ///
    /// # Errors
    ///
    /// Returns `WorkerGone` if the lane has shut down.
    pub fn subscribe(&self) -> Result<Subscription> {
        let (snapshots, rx) = mpsc::channel();
        self.tx
            .send(Task::Subscribe { snapshots })
            .map_err(|_| NoteError::WorkerGone)?;
        Ok(Subscription { rx })
    }

    /// One-shot read: the live query's current snapshot.
    ///
    /// # Errors
    ///
    /// Returns `WorkerGone` if the lane has shut down.
    pub fn get_all_notes(&self) -> Result<Vec<Note>> {
        self.subscribe()?.recv()
    }

    /// Send a task down the lane. If the worker is gone the task's
    /// completion sender is dropped with it, so waiters see `WorkerGone`.
    fn submit(&self, task: Task) {
        if self.tx.send(task).is_err() {
            warn!("store worker is gone, dropping task");
        }
    }
}

impl Drop for NoteRepository {
    fn drop(&mut self) {
        let _ = self.tx.send(Task::Shutdown);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("store worker panicked");
            }
        }
    }
}

/// Drain the lane: apply each mutation, answer its completion, then
/// push a fresh snapshot to every live subscriber.
fn worker_loop(storage: &SqliteStorage, rx: &mpsc::Receiver<Task>) {
    let mut subscribers: Vec<mpsc::Sender<Vec<Note>>> = Vec::new();

    while let Ok(task) = rx.recv() {
        match task {
            Task::Insert { note, done } => {
                let result = storage.insert_note(&note);
                let committed = result.is_ok();
                let _ = done.send(result);
                if committed {
                    notify(storage, &mut subscribers);
                }
            }
            Task::Delete { id, done } => {
                let result = storage.delete_note(id);
                let committed = result.is_ok();
                let _ = done.send(result);
                if committed {
                    notify(storage, &mut subscribers);
                }
            }
            Task::DeleteAll { done } => {
                let result = storage.delete_all_notes();
                let committed = result.is_ok();
                let _ = done.send(result);
                if committed {
                    notify(storage, &mut subscribers);
                }
            }
            Task::Subscribe { snapshots } => match storage.get_all_notes() {
                Ok(snapshot) => {
                    if snapshots.send(snapshot).is_ok() {
                        subscribers.push(snapshots);
                        debug!(count = subscribers.len(), "subscriber registered");
                    }
                }
                Err(e) => warn!(error = %e, "failed to read snapshot for new subscriber"),
            },
            Task::Shutdown => break,
        }
    }
}

/// Recompute the ordered snapshot and deliver it to each subscriber,
/// pruning any whose channel has disconnected.
fn notify(storage: &SqliteStorage, subscribers: &mut Vec<mpsc::Sender<Vec<Note>>>) {
    if subscribers.is_empty() {
        return;
    }
    match storage.get_all_notes() {
        Ok(snapshot) => {
            subscribers.retain(|sub| sub.send(snapshot.clone()).is_ok());
        }
        Err(e) => warn!(error = %e, "failed to recompute snapshot, subscribers not notified"),
    }
}

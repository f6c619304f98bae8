//! Print destinations.
//!
//! A [`PrintServer`] resolves queue names, a [`DestinationPicker`] lets a
//! user choose a queue interactively, and a [`PrintQueue`] accepts
//! assembled documents. Queues are held through a [`QueueHandle`] so they
//! are released once the print call is over, whatever its outcome.

use crate::error::Result;
use crate::model::AssembledDocument;
use std::ops::{Deref, DerefMut};

/// A destination that accepts assembled documents.
pub trait PrintQueue {
    /// Name of the queue.
    fn name(&self) -> &str;

    /// Submit a document for printing.
    fn submit(&mut self, document: &AssembledDocument) -> Result<()>;

    /// Give the queue back. Called exactly once by [`QueueHandle`].
    fn release(&mut self) {}
}

/// Resolves print queues by name.
pub trait PrintServer {
    /// Open the queue with the given name.
    ///
    /// Fails with [`Error::QueueNotFound`](crate::Error::QueueNotFound) when
    /// no such queue exists.
    fn open_queue(&self, name: &str) -> Result<Box<dyn PrintQueue>>;
}

/// Interactive choice of a print queue.
pub trait DestinationPicker {
    /// Ask for a queue. `None` means the user cancelled.
    fn pick(&mut self) -> Option<Box<dyn PrintQueue>>;
}

impl<F> DestinationPicker for F
where
    F: FnMut() -> Option<Box<dyn PrintQueue>>,
{
    fn pick(&mut self) -> Option<Box<dyn PrintQueue>> {
        self()
    }
}

/// Scoped access to an open print queue, released on drop.
pub struct QueueHandle {
    queue: Box<dyn PrintQueue>,
}

impl QueueHandle {
    /// Take ownership of an open queue.
    pub fn new(queue: Box<dyn PrintQueue>) -> Self {
        log::debug!("Acquired print queue '{}'", queue.name());
        Self { queue }
    }

    /// Open a queue on a server.
    pub fn open(server: &dyn PrintServer, name: &str) -> Result<Self> {
        server.open_queue(name).map(Self::new)
    }
}

impl Deref for QueueHandle {
    type Target = dyn PrintQueue;

    fn deref(&self) -> &Self::Target {
        self.queue.as_ref()
    }
}

impl DerefMut for QueueHandle {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.queue.as_mut()
    }
}

impl Drop for QueueHandle {
    fn drop(&mut self) {
        self.queue.release();
        log::debug!("Released print queue '{}'", self.queue.name());
    }
}

//! A file-based print server.
//!
//! Every queue is a subdirectory of the spool root. Submitting a document
//! writes one JSON file per job into the queue's directory.

use super::output::{PrintQueue, PrintServer};
use crate::error::{Error, Result};
use crate::model::AssembledDocument;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

/// Print server backed by a spool directory.
#[derive(Debug, Clone)]
pub struct SpoolServer {
    root: PathBuf,
}

impl SpoolServer {
    /// Use `root` as the spool directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The spool directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create a queue directory if it does not exist yet.
    pub fn create_queue(&self, name: &str) -> Result<PathBuf> {
        check_queue_name(name)?;
        let dir = self.root.join(name);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Names of the existing queues, sorted.
    pub fn queues(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

impl PrintServer for SpoolServer {
    fn open_queue(&self, name: &str) -> Result<Box<dyn PrintQueue>> {
        check_queue_name(name)?;
        let dir = self.root.join(name);
        if !dir.is_dir() {
            return Err(Error::QueueNotFound(name.to_string()));
        }

        Ok(Box::new(SpoolQueue {
            name: name.to_string(),
            dir,
            submitted: Vec::new(),
        }))
    }
}

/// A queue directory inside a [`SpoolServer`].
#[derive(Debug)]
pub struct SpoolQueue {
    name: String,
    dir: PathBuf,
    submitted: Vec<PathBuf>,
}

impl SpoolQueue {
    /// Files written by this queue handle.
    pub fn submitted(&self) -> &[PathBuf] {
        &self.submitted
    }
}

#[derive(Serialize)]
struct SpooledJob<'a> {
    queue: &'a str,
    submitted_at: DateTime<Utc>,
    document: &'a AssembledDocument,
}

impl PrintQueue for SpoolQueue {
    fn name(&self) -> &str {
        &self.name
    }

    fn submit(&mut self, document: &AssembledDocument) -> Result<()> {
        let submitted_at = Utc::now();
        let job = SpooledJob {
            queue: &self.name,
            submitted_at,
            document,
        };
        let json = serde_json::to_string_pretty(&job)
            .map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))?;

        let stem = format!(
            "{}-{}",
            file_stem(document.file_name.as_deref()),
            submitted_at.format("%Y%m%dT%H%M%S%3f")
        );
        let (path, mut file) = create_job_file(&self.dir, &stem)?;
        file.write_all(json.as_bytes())?;

        log::info!(
            "Spooled {} page(s) to {}",
            document.page_count(),
            path.display()
        );
        self.submitted.push(path);
        Ok(())
    }

    fn release(&mut self) {
        log::debug!(
            "Closing spool queue '{}' after {} job(s)",
            self.name,
            self.submitted.len()
        );
    }
}

/// Accept only names that stay directly below the spool root.
fn check_queue_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name => Ok(()),
        _ => Err(Error::InvalidQueueName(name.to_string())),
    }
}

/// Create a job file that did not exist before, adding a counter to the
/// stem when jobs share a timestamp.
fn create_job_file(dir: &Path, stem: &str) -> Result<(PathBuf, fs::File)> {
    let mut counter = 0u32;
    loop {
        let name = if counter == 0 {
            format!("{}.json", stem)
        } else {
            format!("{}-{}.json", stem, counter)
        };
        let path = dir.join(name);

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => counter += 1,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Reduce a file name to characters that are safe in a path component.
fn file_stem(file_name: Option<&str>) -> String {
    let name = file_name.map(str::trim).unwrap_or("");
    let name = Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.is_empty() {
        "document".to_string()
    } else {
        stem
    }
}

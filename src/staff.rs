//! Staff Module
//!
//! The in-memory record store and its file-backed operations.
//!
//! ## Responsibilities
//! - Validate and insert workers
//! - Keep the collection sorted by name after every change
//! - Render the fixed-width table and answer tenure queries
//! - Load and save the XML document

use std::fmt;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use chrono::Datelike;
use tracing::debug;

use crate::codec::{decode_workers, encode_workers};
use crate::error::{Result, StaffError};
use crate::worker::Worker;

/// Local calendar year from the system clock
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Sorted collection of workers
///
/// ## Ordering
/// Workers are ordered by name. The sort is stable, so workers sharing a
/// name keep the order in which they were added (or loaded).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Staff {
    workers: Vec<Worker>,
}

impl Staff {
    // =========================================================================
    // Table Layout
    // =========================================================================
    const INDEX_WIDTH: usize = 4;
    const NAME_WIDTH: usize = 30;
    const POST_WIDTH: usize = 20;
    const YEAR_WIDTH: usize = 8;

    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a worker
    ///
    /// `year` must lie in `0..=current_year`; otherwise the store is left
    /// unchanged and `InvalidYear` is returned.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        post: impl Into<String>,
        year: i32,
        current_year: i32,
    ) -> Result<()> {
        if year < 0 || year > current_year {
            return Err(StaffError::InvalidYear { year });
        }

        let worker = Worker::new(name, post, year);
        debug!(name = worker.name(), post = worker.post(), year, "adding worker");

        self.workers.push(worker);
        self.sort();

        Ok(())
    }

    /// Render the fixed-width table of all workers
    pub fn render(&self) -> String {
        let line = format!(
            "+-{}-+-{}-+-{}-+-{}-+",
            "-".repeat(Self::INDEX_WIDTH),
            "-".repeat(Self::NAME_WIDTH),
            "-".repeat(Self::POST_WIDTH),
            "-".repeat(Self::YEAR_WIDTH),
        );

        let mut table = Vec::with_capacity(self.workers.len() + 4);
        table.push(line.clone());
        table.push(format!(
            "| {:^iw$} | {:^nw$} | {:^pw$} | {:^yw$} |",
            "No",
            "Name",
            "Post",
            "Year",
            iw = Self::INDEX_WIDTH,
            nw = Self::NAME_WIDTH,
            pw = Self::POST_WIDTH,
            yw = Self::YEAR_WIDTH,
        ));
        table.push(line.clone());

        for (idx, worker) in self.workers.iter().enumerate() {
            table.push(format!(
                "| {:>iw$} | {:<nw$} | {:<pw$} | {:>yw$} |",
                idx + 1,
                worker.name(),
                worker.post(),
                worker.year(),
                iw = Self::INDEX_WIDTH,
                nw = Self::NAME_WIDTH,
                pw = Self::POST_WIDTH,
                yw = Self::YEAR_WIDTH,
            ));
        }
        table.push(line);

        table.join("\n")
    }

    /// Workers with at least `minimum_tenure` years served, in name order
    pub fn select(&self, minimum_tenure: i32, current_year: i32) -> Vec<&Worker> {
        let minimum_tenure = i64::from(minimum_tenure);
        self.workers
            .iter()
            .filter(|w| w.tenure(current_year) >= minimum_tenure)
            .collect()
    }

    /// Replace the collection with the workers stored at `path`
    ///
    /// The file is read and fully validated before anything is replaced, so
    /// a failed load keeps the current workers.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let bytes = fs::read(path).map_err(|e| StaffError::file_access(path, e))?;
        let xml = String::from_utf8(bytes).map_err(|e| {
            StaffError::Deserialization(format!("{} is not valid UTF-8: {}", path.display(), e))
        })?;

        self.workers = decode_workers(&xml)?;
        self.sort();

        debug!(path = %path.display(), count = self.workers.len(), "loaded workers");
        Ok(())
    }

    /// Write all workers to `path`, replacing any existing file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let xml = encode_workers(&self.workers)?;

        let mut file = File::create(path).map_err(|e| StaffError::file_access(path, e))?;
        file.write_all(xml.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| StaffError::file_access(path, e))?;

        debug!(path = %path.display(), count = self.workers.len(), "saved workers");
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// All workers in name order
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Worker> {
        self.workers.iter()
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    fn sort(&mut self) {
        self.workers.sort_by(|a, b| a.name().cmp(b.name()));
    }
}

impl fmt::Display for Staff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<'a> IntoIterator for &'a Staff {
    type Item = &'a Worker;
    type IntoIter = std::slice::Iter<'a, Worker>;

    fn into_iter(self) -> Self::IntoIter {
        self.workers.iter()
    }
}

//! Worker record
//!
//! One person's name, post, and the year they joined.

/// An immutable staff record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Worker {
    name: String,
    post: String,
    year: i32,
}

impl Worker {
    /// Create a worker record
    ///
    /// No validation happens here; `Staff::add` checks the year.
    pub fn new(name: impl Into<String>, post: impl Into<String>, year: i32) -> Self {
        Self {
            name: name.into(),
            post: post.into(),
            year,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn post(&self) -> &str {
        &self.post
    }

    /// Year the worker joined
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Years served as of `current_year`
    ///
    /// Computed in `i64`, so any pair of `i32` years fits.
    pub fn tenure(&self, current_year: i32) -> i64 {
        i64::from(current_year) - i64::from(self.year)
    }
}

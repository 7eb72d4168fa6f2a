// File: src/store.rs
// The authoritative in-memory task collection and its mutation contract.
use thiserror::Error;

/// Rejected input for `add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Title was empty (or whitespace-only) after trimming.
    #[error("task cannot be blank")]
    Blank,
}

/// Position addressing outside `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("index {index} out of bounds (len {len})")]
    OutOfBounds { index: usize, len: usize },
}

/// Value-based removal found no matching title.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no task matches \"{title}\"")]
pub struct NotFoundError {
    pub title: String,
}

/// Emitted to the shell after each successful mutation so it can
/// update the rendered list incrementally. Never emitted on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEdit {
    Inserted(usize),
    Removed(usize),
}

/// Ordered collection of task titles. Insertion order is display order;
/// duplicates are legal distinct entries. The backing vec is private:
/// every mutation goes through the methods below and either succeeds
/// completely or leaves the collection untouched.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    titles: Vec<String>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `title` (trimmed) and returns the index of the new entry.
    ///
    /// The trimmed form is what gets stored, so a title displayed in the
    /// list always compares equal to itself in `remove_value`.
    pub fn add(&mut self, title: &str) -> Result<usize, ValidationError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Blank);
        }
        self.titles.push(trimmed.to_string());
        Ok(self.titles.len() - 1)
    }

    /// Removes and returns the entry at `index`. Entries after it shift
    /// down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<String, IndexError> {
        if index >= self.titles.len() {
            return Err(IndexError::OutOfBounds {
                index,
                len: self.titles.len(),
            });
        }
        Ok(self.titles.remove(index))
    }

    /// Removes the first entry equal to `title`, scanning from the
    /// start, and returns its former index.
    ///
    /// With duplicate titles this is inherently ambiguous; first match
    /// wins. Callers that know a position should prefer `remove_at`.
    pub fn remove_value(&mut self, title: &str) -> Result<usize, NotFoundError> {
        match self.titles.iter().position(|t| t == title) {
            Some(idx) => {
                self.titles.remove(idx);
                Ok(idx)
            }
            None => Err(NotFoundError {
                title: title.to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&str, IndexError> {
        self.titles
            .get(index)
            .map(String::as_str)
            .ok_or(IndexError::OutOfBounds {
                index,
                len: self.titles.len(),
            })
    }

    /// Read-only view for full-list rendering and tests. Incremental
    /// updates should come from the `ListEdit` a mutation reports.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }
}

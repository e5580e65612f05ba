//! Web-history style session stack.

use crate::RouterError;

/// Entry stack with a cursor, mirroring browser history under a base path.
///
/// Entries are stored without the base; [`WebHistory::href`] adds it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebHistory {
    base: String,
    entries: Vec<String>,
    position: usize,
}

impl Default for WebHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl WebHistory {
    /// `base` is normalised to a leading slash and no trailing slash
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim_matches('/');
        let base = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        };

        Self {
            base,
            entries: Vec::new(),
            position: 0,
        }
    }

    /// Normalised base, empty for the root
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Current entry, `None` before the first navigation
    pub fn location(&self) -> Option<&str> {
        self.entries.get(self.position).map(String::as_str)
    }

    /// Add an entry after the cursor, dropping any forward entries
    pub fn push(&mut self, location: impl Into<String>) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.position + 1);
        }
        self.entries.push(location.into());
        self.position = self.entries.len() - 1;
    }

    /// Overwrite the current entry
    pub fn replace(&mut self, location: impl Into<String>) {
        match self.entries.get_mut(self.position) {
            Some(entry) => *entry = location.into(),
            None => {
                self.entries.push(location.into());
                self.position = 0;
            }
        }
    }

    /// Entry `delta` steps from the cursor, without moving
    pub fn peek(&self, delta: isize) -> Result<&str, RouterError> {
        self.target_index(delta)
            .map(|index| self.entries[index].as_str())
    }

    /// Move the cursor by `delta`
    pub fn go(&mut self, delta: isize) -> Result<&str, RouterError> {
        let index = self.target_index(delta)?;
        self.position = index;
        Ok(self.entries[index].as_str())
    }

    fn target_index(&self, delta: isize) -> Result<usize, RouterError> {
        self.position
            .checked_add_signed(delta)
            .filter(|index| *index < self.entries.len())
            .ok_or(RouterError::HistoryOutOfRange { delta })
    }

    /// Browser-visible URL of an in-app location
    pub fn href(&self, location: &str) -> String {
        if location.starts_with('/') {
            format!("{}{}", self.base, location)
        } else {
            format!("{}/{}", self.base, location)
        }
    }

    /// In-app location of a browser URL; URLs outside the base are kept as is
    pub fn strip_base<'a>(&self, url: &'a str) -> &'a str {
        if self.base.is_empty() {
            return url;
        }
        match url.strip_prefix(self.base.as_str()) {
            Some("") => "/",
            Some(rest) if rest.starts_with(|c: char| matches!(c, '/' | '?' | '#')) => rest,
            _ => url,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

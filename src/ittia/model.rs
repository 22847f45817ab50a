use serde::{Deserialize, Serialize};

/// The ten canonical note sections.
///
/// Declaration order is the canonical order: it drives the on-screen layout,
/// the scratchpad rendering, and the export sequence. The derived `Ord`
/// follows declaration order, so ordered maps keyed by `SectionKey` iterate
/// canonically for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SectionKey {
    Cc,
    Pi,
    Ros,
    Pmh,
    Subjective,
    Objective,
    PhysicalExam,
    Assessment,
    Plan,
    Comment,
}

impl SectionKey {
    pub const ALL: [SectionKey; 10] = [
        SectionKey::Cc,
        SectionKey::Pi,
        SectionKey::Ros,
        SectionKey::Pmh,
        SectionKey::Subjective,
        SectionKey::Objective,
        SectionKey::PhysicalExam,
        SectionKey::Assessment,
        SectionKey::Plan,
        SectionKey::Comment,
    ];

    /// On-screen title, as shown on the editing surface.
    pub fn title(self) -> &'static str {
        match self {
            SectionKey::Cc => "CC>",
            SectionKey::Pi => "PI>",
            SectionKey::Ros => "ROS>",
            SectionKey::Pmh => "PMH>",
            SectionKey::Subjective => "S>",
            SectionKey::Objective => "O>",
            SectionKey::PhysicalExam => "Physical Exam>",
            SectionKey::Assessment => "A>",
            SectionKey::Plan => "P>",
            SectionKey::Comment => "Comment>",
        }
    }

    /// Export title: the on-screen title minus its single trailing `>`.
    pub fn display_title(self) -> &'static str {
        let title = self.title();
        title.strip_suffix('>').unwrap_or(title)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// A point-in-time snapshot of one section, used for export assembly.
#[derive(Debug, Clone)]
pub struct Section {
    pub key: SectionKey,
    pub title: &'static str,
    pub text: String,
}

/// Collapse inner whitespace runs to single spaces and trim the ends.
pub fn normalize_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The free-text problem list: insertion order, duplicates permitted.
#[derive(Debug, Clone, Default)]
pub struct ProblemList {
    entries: Vec<String>,
}

impl ProblemList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a problem, normalized. Blank input is rejected (returns false).
    pub fn add(&mut self, text: &str) -> bool {
        let normalized = normalize_line(text);
        if normalized.is_empty() {
            return false;
        }
        self.entries.push(normalized);
        true
    }

    /// Remove by position. Out-of-range is a no-op (returns false).
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.entries.remove(index);
            true
        } else {
            false
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Holds the current text of the ten sections plus the problem list.
///
/// Pure data holder: callers that need the scratchpad mirror kept in sync
/// mutate through [`crate::api::Composer`], which forwards every change
/// notification. Offsets are byte offsets on char boundaries, as reported
/// by the editing surface that owns the text.
#[derive(Debug, Clone)]
pub struct SectionStore {
    texts: [String; SectionKey::ALL.len()],
    problems: ProblemList,
}

impl Default for SectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionStore {
    pub fn new() -> Self {
        Self {
            texts: std::array::from_fn(|_| String::new()),
            problems: ProblemList::new(),
        }
    }

    pub fn text(&self, key: SectionKey) -> &str {
        &self.texts[key.index()]
    }

    pub fn set_text(&mut self, key: SectionKey, text: impl Into<String>) {
        self.texts[key.index()] = text.into();
    }

    /// Insert at `offset`, returning the caret position just after the
    /// inserted text.
    pub fn insert_at(&mut self, key: SectionKey, offset: usize, text: &str) -> usize {
        self.texts[key.index()].insert_str(offset, text);
        offset + text.len()
    }

    /// Replace the half-open byte range `[start, end)`, returning the caret
    /// position just after the replacement.
    pub fn replace_range(&mut self, key: SectionKey, start: usize, end: usize, text: &str) -> usize {
        self.texts[key.index()].replace_range(start..end, text);
        start + text.len()
    }

    pub fn add_problem(&mut self, text: &str) -> bool {
        self.problems.add(text)
    }

    pub fn remove_problem(&mut self, index: usize) -> bool {
        self.problems.remove(index)
    }

    pub fn problems(&self) -> &ProblemList {
        &self.problems
    }

    /// Snapshot all sections in canonical order.
    pub fn sections(&self) -> Vec<Section> {
        SectionKey::ALL
            .iter()
            .map(|&key| Section {
                key,
                title: key.title(),
                text: self.text(key).to_string(),
            })
            .collect()
    }
}

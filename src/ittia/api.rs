//! # The Composer facade
//!
//! Single entry point for everything the editing surface triggers: section
//! edits, the space-keystroke expansion hook, snippet insertion, problem
//! list maintenance, abbreviation management, and export.
//!
//! The facade exists so that every section mutation flows through one place
//! and the scratchpad mirror is notified and redrawn after each one. The UI
//! owns pixels and carets; the composer owns text and derived state.
//!
//! Generic over the abbreviation backend `S` (file-backed in production,
//! in-memory in tests) and the scratchpad view `V`, mirroring how the rest
//! of the crate keeps I/O behind seams.

use crate::clipboard;
use crate::error::Result;
use crate::expand::{self, ExpansionDecision};
use crate::export;
use crate::format;
use crate::model::{ProblemList, SectionKey, SectionStore};
use crate::scratchpad::{Scratchpad, ScratchpadView};
use crate::store::{AbbrevStore, AbbreviationTable};
use crate::templates::Template;

pub struct Composer<S: AbbrevStore, V: ScratchpadView> {
    sections: SectionStore,
    scratchpad: Scratchpad,
    abbrevs: AbbreviationTable<S>,
    view: V,
}

impl<S: AbbrevStore, V: ScratchpadView> Composer<S, V> {
    pub fn new(abbrevs: AbbreviationTable<S>, view: V) -> Self {
        Self {
            sections: SectionStore::new(),
            scratchpad: Scratchpad::new(),
            abbrevs,
            view,
        }
    }

    // ----- sections -----

    pub fn section_text(&self, key: SectionKey) -> &str {
        self.sections.text(key)
    }

    pub fn set_section_text(&mut self, key: SectionKey, text: impl Into<String>) {
        self.sections.set_text(key, text);
        self.section_changed(key);
    }

    /// Insert raw text at the caret; returns the caret after the insert.
    pub fn insert_at(&mut self, key: SectionKey, offset: usize, text: &str) -> usize {
        let caret = self.sections.insert_at(key, offset, text);
        self.section_changed(key);
        caret
    }

    /// Insert a single line, supplying the trailing newline when missing.
    /// Backs the problem-list double-click insert (`"- {problem}"`).
    pub fn insert_line(&mut self, key: SectionKey, offset: usize, line: &str) -> usize {
        if line.ends_with('\n') {
            self.insert_at(key, offset, line)
        } else {
            let caret = self.sections.insert_at(key, offset, line);
            let caret = self.sections.insert_at(key, caret, "\n");
            self.section_changed(key);
            caret
        }
    }

    pub fn insert_template(&mut self, key: SectionKey, offset: usize, template: Template) -> usize {
        let body = template.body();
        self.insert_at(key, offset, &body)
    }

    /// Run [`format::auto_format`] over the section in place.
    pub fn format_section(&mut self, key: SectionKey) {
        let formatted = format::auto_format(self.sections.text(key));
        self.set_section_text(key, formatted);
    }

    /// The space-keystroke hook. Returns `Some(caret)` when the just-typed
    /// token was replaced: the surface must place the caret there and
    /// suppress the space keystroke. `None` lets the space through.
    pub fn space_key(&mut self, key: SectionKey, caret: usize) -> Option<usize> {
        let decision = expand::on_space_key(&self.abbrevs, caret, self.sections.text(key));
        match decision {
            ExpansionDecision::Replace {
                start,
                end,
                replacement,
            } => {
                let caret = self.sections.replace_range(key, start, end, &replacement);
                self.section_changed(key);
                Some(caret)
            }
            ExpansionDecision::NoAction => None,
        }
    }

    // ----- problem list -----

    pub fn add_problem(&mut self, text: &str) -> bool {
        self.sections.add_problem(text)
    }

    pub fn remove_problem(&mut self, index: usize) -> bool {
        self.sections.remove_problem(index)
    }

    pub fn problems(&self) -> &ProblemList {
        self.sections.problems()
    }

    // ----- abbreviation manager -----

    pub fn define_abbrev(&mut self, short: &str, full: &str) -> Result<bool> {
        self.abbrevs.define(short, full)
    }

    pub fn redefine_abbrev(&mut self, short: &str, full: &str) -> Result<bool> {
        self.abbrevs.redefine(short, full)
    }

    pub fn remove_abbrev(&mut self, short: &str) -> Result<bool> {
        self.abbrevs.remove(short)
    }

    pub fn abbrevs(&self) -> &AbbreviationTable<S> {
        &self.abbrevs
    }

    pub fn seed_example_abbrevs(&mut self) -> Result<()> {
        self.abbrevs.seed_examples()
    }

    // ----- scratchpad -----

    pub fn scratchpad_text(&self) -> &str {
        self.view.text()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    // ----- export -----

    /// Assemble the finalized export document.
    pub fn export(&self) -> String {
        export::assemble(self.sections.problems().entries(), &self.sections.sections())
    }

    /// Assemble and hand to the system clipboard; returns the document.
    pub fn copy_all(&self) -> Result<String> {
        let doc = self.export();
        clipboard::copy_to_clipboard(&doc)?;
        Ok(doc)
    }

    fn section_changed(&mut self, key: SectionKey) {
        let text = self.sections.text(key).to_string();
        self.scratchpad.on_section_changed(key, &text);
        self.scratchpad.redraw(&mut self.view);
    }
}

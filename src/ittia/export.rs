//! Export assembly: problems plus all non-empty sections, finalized into
//! one clipboard-ready document.

use crate::format;
use crate::model::Section;
use chrono::{Local, NaiveDate};

/// Build the export document: an optional problem-list block followed by one
/// `# Title` block per non-empty section in the order given (callers pass
/// sections in canonical order). The joined text runs through
/// [`format::finalize`], so the result carries no trailing newline.
pub fn assemble(problems: &[String], sections: &[Section]) -> String {
    assemble_with_date(problems, sections, Local::now().date_naive())
}

pub fn assemble_with_date(problems: &[String], sections: &[Section], date: NaiveDate) -> String {
    let mut blocks: Vec<String> = Vec::new();

    if !problems.is_empty() {
        let mut block = format!("# Problem List (as of {})\n", date.format("%Y-%m-%d"));
        for problem in problems {
            block.push_str("- ");
            block.push_str(problem);
            block.push('\n');
        }
        blocks.push(block.trim().to_string());
    }

    for section in sections {
        let text = section.text.trim();
        if text.is_empty() {
            continue;
        }
        let title = section.title.strip_suffix('>').unwrap_or(section.title);
        blocks.push(format!("# {}\n{}", title, text));
    }

    format::finalize(&blocks.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SectionKey, SectionStore};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    }

    #[test]
    fn test_single_section_without_problems() {
        let mut store = SectionStore::new();
        store.set_text(SectionKey::Cc, "cough");
        let doc = assemble_with_date(store.problems().entries(), &store.sections(), date());
        assert_eq!(doc, "# CC\ncough");
    }

    #[test]
    fn test_problem_block_comes_first() {
        let mut store = SectionStore::new();
        store.add_problem("Hypercholesterolemia [F/U]");
        store.add_problem("Prediabetes (FBS 108 mg/dL)");
        store.set_text(SectionKey::Plan, "repeat labs");
        let doc = assemble_with_date(store.problems().entries(), &store.sections(), date());
        assert_eq!(
            doc,
            "# Problem List (as of 2025-03-09)\n\
             - Hypercholesterolemia [F/U]\n\
             - Prediabetes (FBS 108 mg/dL)\n\
             \n\
             # P\nrepeat labs"
        );
    }

    #[test]
    fn test_empty_sections_are_skipped() {
        let mut store = SectionStore::new();
        store.set_text(SectionKey::Cc, "cough");
        store.set_text(SectionKey::Pi, "   ");
        store.set_text(SectionKey::Plan, "rest");
        let doc = assemble_with_date(store.problems().entries(), &store.sections(), date());
        assert_eq!(doc, "# CC\ncough\n\n# P\nrest");
    }

    #[test]
    fn test_titles_lose_their_chevron() {
        let mut store = SectionStore::new();
        store.set_text(SectionKey::PhysicalExam, "lungs clear");
        let doc = assemble_with_date(store.problems().entries(), &store.sections(), date());
        assert_eq!(doc, "# Physical Exam\nlungs clear");
    }

    #[test]
    fn test_section_text_is_normalized_on_export() {
        let mut store = SectionStore::new();
        store.set_text(SectionKey::Assessment, "* stable\n\n\n--follow up");
        let doc = assemble_with_date(store.problems().entries(), &store.sections(), date());
        assert_eq!(doc, "# A\n- stable\n\n- follow up");
    }

    #[test]
    fn test_everything_empty_yields_empty_document() {
        let store = SectionStore::new();
        let doc = assemble_with_date(store.problems().entries(), &store.sections(), date());
        assert_eq!(doc, "");
    }

    #[test]
    fn test_no_trailing_newline() {
        let mut store = SectionStore::new();
        store.set_text(SectionKey::Comment, "f/u 2w\n");
        let doc = assemble_with_date(store.problems().entries(), &store.sections(), date());
        assert!(!doc.ends_with('\n'));
    }
}

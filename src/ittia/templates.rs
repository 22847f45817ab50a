//! The template library: a closed set of named text blocks the surface
//! inserts at the caret. Larger templates live in the menu; the short
//! snippets back the quick-access buttons.

use chrono::{Local, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    Hpi,
    AssessmentPlan,
    Letter,
    LabSummary,
    ProblemListHeader,
    // Quick snippets
    Vitals,
    Meds,
    Allergy,
    Assessment,
    Plan,
    FollowUp,
    Signature,
}

impl Template {
    pub const ALL: [Template; 12] = [
        Template::Hpi,
        Template::AssessmentPlan,
        Template::Letter,
        Template::LabSummary,
        Template::ProblemListHeader,
        Template::Vitals,
        Template::Meds,
        Template::Allergy,
        Template::Assessment,
        Template::Plan,
        Template::FollowUp,
        Template::Signature,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Template::Hpi => "HPI",
            Template::AssessmentPlan => "Assessment & Plan",
            Template::Letter => "Letter Template",
            Template::LabSummary => "Lab Summary",
            Template::ProblemListHeader => "Problem List Header",
            Template::Vitals => "Vitals",
            Template::Meds => "Meds",
            Template::Allergy => "Allergy",
            Template::Assessment => "Assessment",
            Template::Plan => "Plan",
            Template::FollowUp => "Follow-up",
            Template::Signature => "Signature",
        }
    }

    pub fn body(self) -> String {
        self.body_with_date(Local::now().date_naive())
    }

    /// Only [`Template::Letter`] embeds the date; everything else ignores it.
    pub fn body_with_date(self, date: NaiveDate) -> String {
        match self {
            Template::Hpi => "# HPI\n\
                - Onset: \n\
                - Location: \n\
                - Character: \n\
                - Aggravating/Relieving: \n\
                - Associated Sx: \n\
                - Context: \n\
                - Notes: \n"
                .to_string(),
            Template::AssessmentPlan => "# Assessment & Plan\n\
                - Dx: \n\
                - Severity: \n\
                - Plan: meds / labs / imaging / follow-up\n"
                .to_string(),
            Template::Letter => format!(
                "# Letter\nPatient: \nDOB: \nDate: {}\n\n\
                 Findings:\n- \n\nPlan:\n- \n\nSignature:\nMigoJJ, MD\n",
                date.format("%Y-%m-%d")
            ),
            Template::LabSummary => "# Labs\n\
                - FBS:  mg/dL\n\
                - LDL:  mg/dL\n\
                - HbA1c:  %\n\
                - TSH:  uIU/mL\n"
                .to_string(),
            Template::ProblemListHeader => "# Problem List\n- \n- \n- \n".to_string(),
            Template::Vitals => "# Vitals\n\
                - BP: / mmHg\n\
                - HR: / min\n\
                - Temp:  °C\n\
                - RR: / min\n\
                - SpO2:  %\n"
                .to_string(),
            Template::Meds => "# Medications\n- \n".to_string(),
            Template::Allergy => "# Allergy\n- NKDA\n".to_string(),
            Template::Assessment => "# Assessment\n- \n".to_string(),
            Template::Plan => "# Plan\n- \n".to_string(),
            Template::FollowUp => "# Follow-up\n- Return in  weeks\n".to_string(),
            Template::Signature => "# Signature\nMigoJJ, MD\nEndocrinology\n".to_string(),
        }
    }
}

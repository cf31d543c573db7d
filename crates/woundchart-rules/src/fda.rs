//! FDA language rewrite page.
//!
//! The user maintains a forbidden → approved phrase dictionary. Highlighting
//! is a visual aid only; nothing here verifies compliance.

use regex::{Captures, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tera::escape_html;
use ts_rs::TS;
use uuid::Uuid;
use woundchart_core::models::phrase::{PhraseField, PhraseMapping};
use woundchart_core::steps::WorkflowStep;

use crate::error::RuleError;
use crate::{Gate, MissingItem};

pub const MARK_OPEN: &str = r#"<mark class="bg-red-200 dark:bg-red-900 px-1 rounded">"#;
pub const MARK_CLOSE: &str = "</mark>";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct FdaLanguage {
    pub highlight_diffs: bool,
    pub original_narrative: String,
    pub fda_safe_narrative: String,
    pub phrases: Vec<PhraseMapping>,
}

/// Compiled matcher over the non-empty forbidden phrases. Each phrase gets
/// its own capture group so a match can be traced back to its mapping.
struct PhraseMatcher<'a> {
    regex: Regex,
    phrases: Vec<&'a PhraseMapping>,
}

impl<'a> PhraseMatcher<'a> {
    fn build(mappings: &'a [PhraseMapping]) -> Option<Self> {
        let mut phrases: Vec<&PhraseMapping> =
            mappings.iter().filter(|p| !p.forbidden.is_empty()).collect();
        if phrases.is_empty() {
            return None;
        }
        // Longest first so overlapping phrases prefer the longer match.
        phrases.sort_by(|a, b| b.forbidden.len().cmp(&a.forbidden.len()));

        let pattern = phrases
            .iter()
            .map(|p| format!("({})", regex::escape(&p.forbidden)))
            .collect::<Vec<_>>()
            .join("|");
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .ok()?;
        Some(Self { regex, phrases })
    }

    fn mapping_for(&self, caps: &Captures<'_>) -> Option<&'a PhraseMapping> {
        (1..caps.len())
            .find(|i| caps.get(*i).is_some())
            .and_then(|i| self.phrases.get(i - 1).copied())
    }
}

/// Wrap every case-insensitive occurrence of a forbidden phrase in a
/// `<mark>` tag. Text outside the marks is HTML-escaped.
pub fn highlight_phrases(text: &str, phrases: &[PhraseMapping]) -> String {
    let Some(matcher) = PhraseMatcher::build(phrases) else {
        return escape_html(text);
    };

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in matcher.regex.find_iter(text) {
        out.push_str(&escape_html(&text[last..m.start()]));
        out.push_str(MARK_OPEN);
        out.push_str(&escape_html(m.as_str()));
        out.push_str(MARK_CLOSE);
        last = m.end();
    }
    out.push_str(&escape_html(&text[last..]));
    out
}

/// Replace every forbidden phrase with its approved alternative.
pub fn apply_replacements(text: &str, phrases: &[PhraseMapping]) -> String {
    let Some(matcher) = PhraseMatcher::build(phrases) else {
        return text.to_string();
    };
    matcher
        .regex
        .replace_all(text, |caps: &Captures<'_>| {
            matcher
                .mapping_for(caps)
                .map(|p| p.approved.clone())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

impl FdaLanguage {
    /// Append a blank mapping and return its id.
    pub fn add_phrase(&mut self) -> Uuid {
        let phrase = PhraseMapping::blank();
        let id = phrase.id;
        self.phrases.push(phrase);
        id
    }

    pub fn remove_phrase(&mut self, id: Uuid) -> Result<PhraseMapping, RuleError> {
        let idx = self
            .phrases
            .iter()
            .position(|p| p.id == id)
            .ok_or(RuleError::UnknownPhrase(id))?;
        Ok(self.phrases.remove(idx))
    }

    pub fn update_phrase(
        &mut self,
        id: Uuid,
        field: PhraseField,
        value: impl Into<String>,
    ) -> Result<(), RuleError> {
        let phrase = self
            .phrases
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RuleError::UnknownPhrase(id))?;
        match field {
            PhraseField::Forbidden => phrase.forbidden = value.into(),
            PhraseField::Approved => phrase.approved = value.into(),
        }
        Ok(())
    }

    pub fn toggle_highlight(&mut self) {
        self.highlight_diffs = !self.highlight_diffs;
    }

    /// The original narrative with forbidden phrases marked, or `None` when
    /// highlighting is off or there is nothing to highlight; the page then
    /// shows the editable text instead.
    pub fn highlighted(&self) -> Option<String> {
        if !self.highlight_diffs || self.original_narrative.is_empty() || self.phrases.is_empty()
        {
            return None;
        }
        Some(highlight_phrases(&self.original_narrative, &self.phrases))
    }

    /// A starting point for the FDA-safe narrative.
    pub fn suggest_rewrite(&self) -> String {
        apply_replacements(&self.original_narrative, &self.phrases)
    }

    pub fn all_compliant(&self) -> bool {
        !self.original_narrative.is_empty() && !self.fda_safe_narrative.is_empty()
    }
}

impl Gate for FdaLanguage {
    fn step(&self) -> WorkflowStep {
        WorkflowStep::FdaLanguage
    }

    fn missing(&self) -> Vec<MissingItem> {
        let mut missing = Vec::new();
        if self.original_narrative.is_empty() {
            missing.push(MissingItem::new("original_narrative", "Original narrative"));
        }
        if self.fda_safe_narrative.is_empty() {
            missing.push(MissingItem::new("fda_safe_narrative", "FDA-safe wording"));
        }
        missing
    }
}

use serde::{Deserialize, Serialize};

/// Fonts and sizes for the DOCX narrative. Sizes are in points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    pub body_font: String,
    pub heading_font: String,
    pub body_size: usize,
    /// The "# " document title.
    pub title_size: usize,
    /// "## " section headings.
    pub section_size: usize,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Calibri".to_string(),
            body_size: 11,
            title_size: 18,
            section_size: 14,
        }
    }
}

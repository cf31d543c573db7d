use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::bundle::NoteBundle;
use crate::error::ExportError;
use crate::render::render_narrative;
use crate::styles::DocumentStyles;

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const DOCX_FILENAME: &str = "final-note.docx";

const TITLE_STYLE: &str = "Title";
const SECTION_STYLE: &str = "Heading1";

/// One line of rendered narrative.
#[derive(Debug, PartialEq, Eq)]
enum Block<'a> {
    Blank,
    Title(&'a str),
    Section(&'a str),
    Bullet(&'a str),
    Text(&'a str),
}

fn classify(line: &str) -> Block<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Block::Blank
    } else if let Some(text) = trimmed.strip_prefix("## ") {
        Block::Section(text)
    } else if let Some(text) = trimmed.strip_prefix("# ") {
        Block::Title(text)
    } else if let Some(text) = trimmed.strip_prefix("- ") {
        Block::Bullet(text)
    } else {
        Block::Text(trimmed)
    }
}

/// Build a DOCX from rendered narrative text. Understands `# ` titles,
/// `## ` sections, `- ` bullets and `**bold**` spans; consecutive blank
/// lines collapse into one empty paragraph.
pub fn narrative_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style(TITLE_STYLE, "title", styles.title_size, styles))
        .add_style(heading_style(SECTION_STYLE, "heading 1", styles.section_size, styles));

    let mut previous_blank = true;
    for line in rendered.lines() {
        let block = classify(line);
        let blank = block == Block::Blank;
        if blank && previous_blank {
            continue;
        }
        previous_blank = blank;

        let paragraph = match block {
            Block::Blank => Paragraph::new(),
            Block::Title(text) => heading_paragraph(text, TITLE_STYLE),
            Block::Section(text) => heading_paragraph(text, SECTION_STYLE),
            Block::Bullet(text) => inline_paragraph(text, styles, Some("\u{2022} ")),
            Block::Text(text) => inline_paragraph(text, styles, None),
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

/// Render the bundle's narrative and package it as DOCX.
pub fn final_note_docx(bundle: &NoteBundle, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let rendered = render_narrative(bundle)?;
    let bytes = narrative_docx(&rendered, styles)?;
    tracing::info!(bytes = bytes.len(), "generated final-note DOCX");
    Ok(bytes)
}

fn heading_style(style_id: &str, name: &str, size_pt: usize, styles: &DocumentStyles) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .fonts(RunFonts::new().ascii(&styles.heading_font))
        .bold()
        .size(size_pt * 2) // half-points
}

fn heading_paragraph(text: &str, style_id: &str) -> Paragraph {
    Paragraph::new()
        .style(style_id)
        .add_run(Run::new().add_text(text))
}

fn inline_paragraph(text: &str, styles: &DocumentStyles, prefix: Option<&str>) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    if let Some(prefix) = prefix {
        para = para.add_run(body_run(prefix, styles));
    }
    for (segment, bold) in split_bold(text) {
        let run = body_run(segment, styles);
        para = para.add_run(if bold { run.bold() } else { run });
    }
    para
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Split `**bold**` spans out of a line. An unmatched `**` is kept as
/// literal text.
fn split_bold(text: &str) -> Vec<(&str, bool)> {
    let mut segments = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let after = &remaining[start + 2..];
        let Some(end) = after.find("**") else {
            break;
        };
        if start > 0 {
            segments.push((&remaining[..start], false));
        }
        if end > 0 {
            segments.push((&after[..end], true));
        }
        remaining = &after[end + 2..];
    }

    if !remaining.is_empty() {
        segments.push((remaining, false));
    }
    segments
}


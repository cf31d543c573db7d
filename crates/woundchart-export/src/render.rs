use serde::Serialize;
use tera::{Context, Tera};
use woundchart_core::fields::{is_blank, to_fixed};
use woundchart_rules::lcd::POLICY_ID;
use woundchart_rules::risk::RiskGauge;

use crate::bundle::NoteBundle;
use crate::error::ExportError;
use crate::json::clinical_note;

pub const NARRATIVE_TEMPLATE_NAME: &str = "narrative.md";

/// Narrative layout. Output uses the heading / bullet / bold subset that
/// [`crate::docx::narrative_docx`] understands.
pub const NARRATIVE_TEMPLATE: &str = r#"# Wound Care Progress Note

**Patient:** {{ patient }}
**Date of Birth:** {{ dob }}
**MRN:** {{ mrn }}
**Encounter:** {{ encounter }}
**Provider:** {{ provider }}

## Procedure
{{ procedure }}
{% if modifiers %}**Modifiers:** {{ modifiers | join(sep=", ") }}
{% endif %}
## Wound Assessment
**Size:** {{ wound_size }} cm²
{% if healing_progress %}**Healing Progress:** {{ healing_progress }}
{% endif %}
## Compliance Summary
- LCD {{ policy }}: {{ lcd_status }}
- CMS billing requirements: {{ cms }}
- FDA-compliant language: {{ fda }}
- WISER audit risk: {{ wiser }}
{% if jw_modifier %}
## Product Wastage
**Product:** {{ product }}
**Discarded:** {{ wastage }} cm² ({{ wastage_percent }}%), JW modifier applied
{% endif %}{% if narrative %}
## Narrative
{{ narrative }}
{% endif %}"#;

/// Render a Tera template against any serializable value. The value's
/// fields become the template variables.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    data: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(data)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

#[derive(Debug, Serialize)]
struct NarrativeContext {
    patient: String,
    dob: String,
    mrn: String,
    encounter: String,
    provider: String,
    procedure: String,
    modifiers: Vec<String>,
    wound_size: String,
    healing_progress: String,
    policy: &'static str,
    lcd_status: String,
    cms: &'static str,
    fda: &'static str,
    wiser: String,
    jw_modifier: bool,
    product: String,
    wastage: String,
    wastage_percent: String,
    narrative: String,
}

fn or_not_documented(value: &str) -> String {
    if is_blank(value) {
        "Not documented".to_string()
    } else {
        value.trim().to_string()
    }
}

fn passed(ok: bool) -> &'static str {
    if ok { "Complete" } else { "Incomplete" }
}

impl NarrativeContext {
    fn from_bundle(bundle: &NoteBundle) -> Self {
        let note = clinical_note(bundle);
        let wastage = bundle.jw_wastage.calculation();

        let encounter = match (is_blank(&note.encounter.date), is_blank(&note.encounter.facility)) {
            (false, false) => format!("{} at {}", note.encounter.date, note.encounter.facility),
            (false, true) => note.encounter.date.clone(),
            (true, false) => note.encounter.facility.clone(),
            (true, true) => "Not documented".to_string(),
        };

        let procedure = match (
            is_blank(&note.procedure.description),
            is_blank(&note.wound.location),
        ) {
            (true, _) => "No procedure identified.".to_string(),
            (false, true) => note.procedure.description.clone(),
            (false, false) => format!("{}, {}", note.procedure.description, note.wound.location),
        };

        let wiser = match bundle.wiser_audit.gauge() {
            Some(gauge) => format_gauge(&gauge),
            None => "Not assessed".to_string(),
        };

        let narrative = if is_blank(&bundle.final_note.narrative_note) {
            bundle.fda_language.fda_safe_narrative.trim().to_string()
        } else {
            bundle.final_note.narrative_note.trim().to_string()
        };

        let product = match (
            is_blank(&bundle.jw_wastage.product_name),
            is_blank(&bundle.jw_wastage.hcpcs_code),
        ) {
            (false, false) => format!(
                "{} ({})",
                bundle.jw_wastage.product_name.trim(),
                bundle.jw_wastage.hcpcs_code.trim()
            ),
            (false, true) => bundle.jw_wastage.product_name.trim().to_string(),
            (true, false) => bundle.jw_wastage.hcpcs_code.trim().to_string(),
            (true, true) => "Not documented".to_string(),
        };

        Self {
            patient: or_not_documented(&note.patient.name),
            dob: or_not_documented(&note.patient.dob),
            mrn: or_not_documented(&note.patient.identifier),
            encounter,
            provider: or_not_documented(&note.encounter.provider),
            procedure,
            modifiers: note.procedure.modifiers.clone(),
            wound_size: to_fixed(note.wound.size_cm2, 1),
            healing_progress: note.wound.healing_progress.clone(),
            policy: POLICY_ID,
            lcd_status: note.compliance.lcd_l36377.clone(),
            cms: passed(note.compliance.cms_validated),
            fda: passed(note.compliance.fda_compliant),
            wiser,
            jw_modifier: wastage.jw_modifier_needed,
            product,
            wastage: to_fixed(wastage.wastage, 1),
            wastage_percent: wastage.wastage_percent,
            narrative,
        }
    }
}

fn format_gauge(gauge: &RiskGauge) -> String {
    format!("{} ({})", gauge.display, gauge.label)
}

/// Render the plain-text narrative for a bundle.
pub fn render_narrative(bundle: &NoteBundle) -> Result<String, ExportError> {
    let context = NarrativeContext::from_bundle(bundle);
    let rendered = render_template(NARRATIVE_TEMPLATE_NAME, NARRATIVE_TEMPLATE, &context)?;
    tracing::debug!(chars = rendered.len(), "rendered final-note narrative");
    Ok(rendered)
}

//! Clinical interpretation of individually altered parameters.

use crate::models::report::{Direction, Severity};

/// Explanation for an altered parameter.
///
/// Known (parameter, direction, severity) combinations come from the canned
/// clinical table; anything else falls back to a generated sentence naming
/// the parameter and the alteration descriptor verbatim. Total function:
/// same inputs always produce the same non-empty string.
#[must_use]
pub fn explain(parameter: &str, direction: Direction, severity: Severity) -> String {
    if let Some(text) = canned_explanation(parameter, direction, severity) {
        return text.to_string();
    }
    format!(
        "Alteration {}_{} in parameter {parameter}.",
        direction.label(),
        severity.label()
    )
}

/// Canned clinical explanations for the hematologically significant
/// parameters
fn canned_explanation(
    parameter: &str,
    direction: Direction,
    severity: Severity,
) -> Option<&'static str> {
    use Direction::{High, Low};
    use Severity::{Mild, Moderate, Severe};

    match parameter {
        "erythrocytes" => match (direction, severity) {
            (Low, Mild) => {
                Some("Slight decrease in red cell count, possibly related to mild anemia.")
            }
            (Low, Moderate) => Some(
                "Moderate decrease in red cell count, suggesting an anemia that requires investigation.",
            ),
            (Low, Severe) => Some(
                "Severe decrease in red cell count, indicating a severe anemia that needs immediate attention.",
            ),
            (High, Mild) => Some(
                "Slight increase in red cell count, possibly related to dehydration or mild polycythemia.",
            ),
            (High, Moderate) => Some(
                "Moderate increase in red cell count, suggesting a polycythemia that requires evaluation.",
            ),
            (High, Severe) => {
                Some("Severe increase in red cell count, indicating severe polycythemia.")
            }
            _ => None,
        },
        "hemoglobin" => match (direction, severity) {
            (Low, Mild) => Some("Slight decrease in hemoglobin, suggesting mild anemia."),
            (Low, Moderate) => Some(
                "Moderate decrease in hemoglobin, indicating an anemia that requires investigation.",
            ),
            (Low, Severe) => Some(
                "Severe decrease in hemoglobin, indicating a severe anemia that needs immediate attention.",
            ),
            (High, Mild) => {
                Some("Slight increase in hemoglobin, possibly related to dehydration.")
            }
            (High, Moderate) => Some("Moderate increase in hemoglobin, suggesting polycythemia."),
            (High, Severe) => Some("Severe increase in hemoglobin, indicating severe polycythemia."),
            _ => None,
        },
        "leukocytes" => match (direction, severity) {
            (Low, Mild) => Some(
                "Slight decrease in leukocytes (mild leukopenia), possibly related to viral infection or stress.",
            ),
            (Low, Moderate) => Some(
                "Moderate decrease in leukocytes, suggesting immune suppression that requires investigation.",
            ),
            (Low, Severe) => {
                Some("Severe decrease in leukocytes, indicating severe immunosuppression.")
            }
            (High, Mild) => Some(
                "Slight increase in leukocytes, possibly related to stress or mild inflammation.",
            ),
            (High, Moderate) => {
                Some("Moderate increase in leukocytes, suggesting infection or inflammation.")
            }
            (High, Severe) => Some(
                "Severe increase in leukocytes, indicating severe infection or an intense inflammatory process.",
            ),
            _ => None,
        },
        "platelets" => match (direction, severity) {
            (Low, Mild) => Some(
                "Slight decrease in platelets (mild thrombocytopenia), requires monitoring.",
            ),
            (Low, Moderate) => Some("Moderate decrease in platelets, increasing bleeding risk."),
            (Low, Severe) => Some(
                "Severe decrease in platelets, significant risk of spontaneous bleeding.",
            ),
            (High, Mild) => Some("Slight increase in platelets, possibly reactive."),
            (High, Moderate) => Some(
                "Moderate increase in platelets, suggesting an inflammatory or reactive process.",
            ),
            (High, Severe) => Some(
                "Severe increase in platelets, possible myeloproliferative disorder.",
            ),
            _ => None,
        },
        _ => None,
    }
}

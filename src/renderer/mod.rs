//! Outcome-to-template resolution and message rendering.

use std::sync::Arc;

use crate::error::AppError;
use crate::metrics;
use crate::template::{substitute, TemplateStore};

/// Template code selected for accepted cases.
pub const WELCOME_TEMPLATE_CODE: &str = "BIENVENIDA_BENEFICIARIO";

/// Template code selected for rejected cases.
pub const REJECTION_TEMPLATE_CODE: &str = "CASO_RECHAZADO";

/// What happened to a beneficiary's case.
///
/// The mapping from outcome to template code is explicit and exhaustive:
/// an outcome code outside the known set fails to parse instead of silently
/// selecting the rejection template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseOutcome {
    Accepted,
    Rejected,
}

impl CaseOutcome {
    /// Parse a domain outcome code. Both the case-state codes and their
    /// short forms are accepted; anything else is a validation error.
    pub fn from_code(code: &str) -> Result<Self, AppError> {
        match code {
            "BENEFICIARIO_ACTIVO" | "ACEPTADO" => Ok(CaseOutcome::Accepted),
            "CASO_RECHAZADO" | "RECHAZADO" => Ok(CaseOutcome::Rejected),
            other => Err(AppError::Validation(format!(
                "unknown case outcome code: {}",
                other
            ))),
        }
    }

    /// Canonical outcome code, used in events and metric labels.
    pub fn as_code(&self) -> &'static str {
        match self {
            CaseOutcome::Accepted => "BENEFICIARIO_ACTIVO",
            CaseOutcome::Rejected => "CASO_RECHAZADO",
        }
    }

    pub fn template_code(&self) -> &'static str {
        match self {
            CaseOutcome::Accepted => WELCOME_TEMPLATE_CODE,
            CaseOutcome::Rejected => REJECTION_TEMPLATE_CODE,
        }
    }
}

/// Renders notification text for a case outcome.
///
/// Rendering never fails outward: when the template cannot be resolved the
/// renderer degrades to a generic fallback message that carries the recipient
/// name but no internal error detail.
pub struct MessageRenderer {
    store: Arc<dyn TemplateStore>,
}

impl MessageRenderer {
    pub fn new(store: Arc<dyn TemplateStore>) -> Self {
        Self { store }
    }

    pub fn render(&self, name: &str, outcome: CaseOutcome) -> String {
        let name = name.trim();

        match self.store.get_by_code(outcome.template_code()) {
            Ok(template) => substitute(&template.body, &[("nombre", name)]),
            Err(e) => {
                tracing::warn!(
                    template_code = outcome.template_code(),
                    error = %e,
                    "Template resolution failed, using fallback message"
                );
                metrics::TEMPLATE_FALLBACKS_TOTAL.inc();
                fallback_message(name)
            }
        }
    }
}

fn fallback_message(name: &str) -> String {
    format!(
        "Hola {}, le informamos que hay una actualización en su caso. Por favor comuníquese con la fundación para más detalles.",
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::MemoryTemplateStore;

    fn renderer_with(templates: &[(&str, &str)]) -> MessageRenderer {
        let store = MemoryTemplateStore::new();
        for (code, body) in templates {
            store.create(code, body, None).unwrap();
        }
        MessageRenderer::new(Arc::new(store))
    }

    #[test]
    fn accepted_outcome_parses_from_both_codes() {
        assert_eq!(
            CaseOutcome::from_code("BENEFICIARIO_ACTIVO").unwrap(),
            CaseOutcome::Accepted
        );
        assert_eq!(
            CaseOutcome::from_code("ACEPTADO").unwrap(),
            CaseOutcome::Accepted
        );
    }

    #[test]
    fn rejected_outcome_parses_from_both_codes() {
        assert_eq!(
            CaseOutcome::from_code("CASO_RECHAZADO").unwrap(),
            CaseOutcome::Rejected
        );
        assert_eq!(
            CaseOutcome::from_code("RECHAZADO").unwrap(),
            CaseOutcome::Rejected
        );
    }

    #[test]
    fn unknown_outcome_code_fails_instead_of_defaulting() {
        assert!(CaseOutcome::from_code("UNKNOWN_CODE").is_err());
        assert!(CaseOutcome::from_code("aceptado").is_err());
    }

    #[test]
    fn accepted_case_renders_welcome_template() {
        let renderer = renderer_with(&[
            (WELCOME_TEMPLATE_CODE, "Bienvenido {{nombre}}!"),
            (REJECTION_TEMPLATE_CODE, "Lo sentimos {{nombre}}."),
        ]);

        let text = renderer.render("Juan Perez", CaseOutcome::Accepted);
        assert_eq!(text, "Bienvenido Juan Perez!");
    }

    #[test]
    fn rejected_case_renders_rejection_template() {
        let renderer = renderer_with(&[
            (WELCOME_TEMPLATE_CODE, "Bienvenido {{nombre}}!"),
            (REJECTION_TEMPLATE_CODE, "Lo sentimos {{nombre}}."),
        ]);

        let text = renderer.render("Juan Perez", CaseOutcome::Rejected);
        assert_eq!(text, "Lo sentimos Juan Perez.");
    }

    #[test]
    fn recipient_name_is_trimmed() {
        let renderer = renderer_with(&[(WELCOME_TEMPLATE_CODE, "Hola {{nombre}}")]);

        let text = renderer.render("  Juan Perez  ", CaseOutcome::Accepted);
        assert_eq!(text, "Hola Juan Perez");
    }

    #[test]
    fn missing_template_falls_back_without_failing() {
        let renderer = renderer_with(&[]);

        let text = renderer.render(" Juan Perez ", CaseOutcome::Accepted);
        assert!(text.contains("Juan Perez"));
        assert!(text.contains("actualización en su caso"));
        // No internal detail leaks into the message
        assert!(!text.contains("not found"));
        assert!(!text.contains(WELCOME_TEMPLATE_CODE));
    }
}

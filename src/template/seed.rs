//! Stock templates installed on startup.

use super::store::TemplateStore;
use super::types::TemplateError;

struct SeedTemplate {
    code: &'static str,
    description: &'static str,
    body: &'static str,
}

const DEFAULT_TEMPLATES: &[SeedTemplate] = &[
    SeedTemplate {
        code: "BIENVENIDA_BENEFICIARIO",
        description: "Mensaje de bienvenida al aceptar un caso",
        body: "Hola {{nombre}},\n\n¡Bienvenido/a a la Fundación OncoFeliz! 🎗️\n\nNos complace informarte que tu caso ha sido aceptado y estaremos acompañándote en este proceso. Nuestro equipo estará contigo para brindarte el apoyo que necesitas.\n\nSi tienes alguna pregunta, no dudes en contactarnos.\n\n¡Ánimo y fuerza! 💪",
    },
    SeedTemplate {
        code: "CASO_RECHAZADO",
        description: "Notificación de caso no aceptado",
        body: "Hola {{nombre}},\n\nLamentamos informarte que tu solicitud no ha podido ser aceptada en este momento ❌\n\nEsto puede deberse a diversos factores evaluados en el análisis de tu caso. Si tienes dudas o deseas más información, puedes comunicarte con nosotros.\n\nGracias por tu comprensión.\n\nFundación OncoFeliz",
    },
    SeedTemplate {
        code: "CITA_RECORDATORIO",
        description: "Recordatorio de cita programada",
        body: "Hola {{nombre}},\n\nTe recordamos que tienes una cita programada:\n\n📅 Fecha: {{fecha}}\n🕐 Hora: {{hora}}\n📍 Lugar: {{ubicacion}}\n\nPor favor confirma tu asistencia respondiendo a este mensaje.\n\nFundación OncoFeliz",
    },
    SeedTemplate {
        code: "SOLICITUD_DOCUMENTOS",
        description: "Solicitud de documentación adicional",
        body: "Hola {{nombre}},\n\nPara continuar con tu proceso, necesitamos que nos proporciones los siguientes documentos:\n\n{{lista_documentos}}\n\nPuedes enviarlos respondiendo a este mensaje o acercándote a nuestras oficinas.\n\nGracias por tu colaboración.\nFundación OncoFeliz",
    },
];

/// Install the stock templates, skipping codes that already exist.
pub fn install_defaults(store: &dyn TemplateStore) {
    for seed in DEFAULT_TEMPLATES {
        match store.create(seed.code, seed.body, Some(seed.description.to_string())) {
            Ok(template) => {
                tracing::info!(code = %template.code, "Installed default template");
            }
            Err(TemplateError::AlreadyExists(code)) => {
                tracing::debug!(code = %code, "Default template already present, skipping");
            }
            Err(e) => {
                tracing::warn!(code = seed.code, error = %e, "Failed to install default template");
            }
        }
    }
}

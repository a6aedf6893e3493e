//! `ActionType`: the closed set of deadline procedures.

use serde::{Deserialize, Serialize};

/// Kind of administrative or judicial action a deadline is computed for.
///
/// Serialized as its wire code (`"PETICION"`, `"NULIDAD_RESTABLECIMIENTO"`,
/// …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    /// Derecho de petición general.
    Peticion,
    /// Derecho de petición de información.
    PeticionInfo,
    /// Consulta.
    Consulta,
    /// Queja administrativa.
    Queja,
    /// Reclamación against a utility bill or service.
    Reclamo,
    /// Recurso de reposición.
    Reposicion,
    /// Recurso de apelación.
    Apelacion,
    /// Recurso de queja against a rejected appeal.
    RecursoQueja,
    /// Recognition of a positive administrative silence (legacy code).
    Silencio,
    /// Acción de tutela.
    Tutela,
    /// Acción de nulidad simple.
    Nulidad,
    /// Acción de nulidad y restablecimiento del derecho.
    NulidadRestablecimiento,
    /// Acción de cumplimiento.
    Cumplimiento,
}

impl ActionType {
    /// The current action codes, in the order they are listed to callers.
    pub const CURRENT: [ActionType; 12] = [
        ActionType::Peticion,
        ActionType::PeticionInfo,
        ActionType::Consulta,
        ActionType::Queja,
        ActionType::Reclamo,
        ActionType::Reposicion,
        ActionType::Apelacion,
        ActionType::RecursoQueja,
        ActionType::Tutela,
        ActionType::Nulidad,
        ActionType::NulidadRestablecimiento,
        ActionType::Cumplimiento,
    ];

    /// Every action code including the legacy ones, in listing order.
    pub const ALL: [ActionType; 13] = [
        ActionType::Peticion,
        ActionType::PeticionInfo,
        ActionType::Consulta,
        ActionType::Queja,
        ActionType::Reclamo,
        ActionType::Reposicion,
        ActionType::Apelacion,
        ActionType::RecursoQueja,
        ActionType::Silencio,
        ActionType::Tutela,
        ActionType::Nulidad,
        ActionType::NulidadRestablecimiento,
        ActionType::Cumplimiento,
    ];

    /// The wire code.
    pub fn code(&self) -> &'static str {
        match self {
            ActionType::Peticion => "PETICION",
            ActionType::PeticionInfo => "PETICION_INFO",
            ActionType::Consulta => "CONSULTA",
            ActionType::Queja => "QUEJA",
            ActionType::Reclamo => "RECLAMO",
            ActionType::Reposicion => "REPOSICION",
            ActionType::Apelacion => "APELACION",
            ActionType::RecursoQueja => "RECURSO_QUEJA",
            ActionType::Silencio => "SILENCIO",
            ActionType::Tutela => "TUTELA",
            ActionType::Nulidad => "NULIDAD",
            ActionType::NulidadRestablecimiento => "NULIDAD_RESTABLECIMIENTO",
            ActionType::Cumplimiento => "CUMPLIMIENTO",
        }
    }

    /// Look up an exact (already normalized) wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.code() == code)
    }

    /// Return `true` for codes only recognized when legacy codes are enabled.
    pub fn is_legacy(&self) -> bool {
        matches!(self, ActionType::Silencio)
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

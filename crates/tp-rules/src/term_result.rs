//! Result records produced by the rule engine and the dispatcher.

use crate::action_type::ActionType;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tp_time::Date;

/// A named milestone date (e.g. `fechaLimiteRespuesta`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    /// Wire field name.
    pub name: &'static str,
    /// The date.
    pub date: Date,
}

/// Deadlines computed for one action.
///
/// Serializes as a flat object: `tipo`, then each milestone under its own
/// name in pipeline order, then `descripcion` and `fundamentoJuridico`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermResult {
    /// The action the deadlines belong to.
    pub tipo: ActionType,
    /// Milestones in pipeline order. Empty for actions without deadlines.
    pub milestones: Vec<Milestone>,
    /// Human-readable legal description.
    pub descripcion: String,
    /// Statutory citation.
    pub fundamento_juridico: &'static str,
}

impl TermResult {
    /// Look up a milestone by wire name.
    pub fn milestone(&self, name: &str) -> Option<Date> {
        self.milestones
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.date)
    }

    /// Milestone names in output order.
    pub fn milestone_names(&self) -> Vec<&'static str> {
        self.milestones.iter().map(|m| m.name).collect()
    }
}

impl Serialize for TermResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.milestones.len() + 3))?;
        map.serialize_entry("tipo", &self.tipo)?;
        for m in &self.milestones {
            map.serialize_entry(m.name, &m.date)?;
        }
        map.serialize_entry("descripcion", &self.descripcion)?;
        map.serialize_entry("fundamentoJuridico", self.fundamento_juridico)?;
        map.end()
    }
}

/// Payload returned for an action code that is not in the rule table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct UnrecognizedAction {
    /// Message quoting the caller's original text.
    pub error: String,
    /// Recognized codes joined with `", "`.
    #[serde(rename = "tiposValidos")]
    pub tipos_validos: String,
}

impl UnrecognizedAction {
    /// Build the payload for `original` given the recognized codes.
    pub fn new(original: &str, valid: &[ActionType]) -> Self {
        let codes: Vec<&str> = valid.iter().map(|a| a.code()).collect();
        Self {
            error: format!("Tipo de acción \"{original}\" no reconocido"),
            tipos_validos: codes.join(", "),
        }
    }
}

/// What the dispatcher hands back for a request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// The action was recognized and its deadlines computed.
    Terms(TermResult),
    /// The action code is unknown. Still a successful response on the wire.
    Unrecognized(UnrecognizedAction),
}

impl Outcome {
    /// The computed deadlines, if any.
    pub fn terms(&self) -> Option<&TermResult> {
        match self {
            Outcome::Terms(t) => Some(t),
            Outcome::Unrecognized(_) => None,
        }
    }
}

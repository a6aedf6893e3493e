//! The deadline rule table.
//!
//! Every [`ActionType`] maps to one [`TermRule`]: how its start date is read
//! and normalized, an ordered pipeline of calendar operations producing the
//! milestones, and the static legal texts. The table is plain data so a rule
//! can be changed without touching the evaluation code, and [`rule`] is an
//! exhaustive `match` so an action without a rule does not compile.
//!
//! Rules never log; callers wrap them in whatever instrumentation they need.

use crate::action_type::ActionType;
use crate::term_result::{Milestone, TermResult};
use crate::texts;
use tp_core::errors::Result;
use tp_core::{fail, Natural};
use tp_time::{BusinessDayConvention, Calendar, Date, DayAnchor, Period};

/// Where a pipeline step takes its input date from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The normalized start date.
    Start,
    /// The result of an earlier step, by index.
    Step(usize),
}

/// One calendar operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOp {
    /// The `n`-th business day from `from`.
    BusinessDays {
        /// Input date.
        from: Source,
        /// Number of business days, at least 1.
        n: Natural,
        /// Count `from` itself as day 1 when it is a business day.
        count_start_day: bool,
    },
    /// The first business day strictly after `from`.
    NextBusinessDay {
        /// Input date.
        from: Source,
    },
    /// A calendar offset (days or clamped months) from `from`.
    Offset {
        /// Input date.
        from: Source,
        /// The offset.
        period: Period,
    },
}

/// A named pipeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Wire name of the resulting milestone.
    pub field: &'static str,
    /// The operation.
    pub op: StepOp,
    /// Whether the milestone appears in the result or is only an
    /// intermediate value.
    pub emit: bool,
}

/// Description text of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descripcion {
    /// Rule-specific text.
    pub text: &'static str,
    /// Append the shared positive-silence explanation.
    pub silencio_positivo: bool,
}

impl Descripcion {
    const fn plain(text: &'static str) -> Self {
        Self { text, silencio_positivo: false }
    }

    const fn pqr(text: &'static str) -> Self {
        Self { text, silencio_positivo: true }
    }

    /// The full description.
    pub fn render(&self) -> String {
        match (self.text.is_empty(), self.silencio_positivo) {
            (_, false) => self.text.to_string(),
            (true, true) => texts::SILENCIO_POSITIVO.to_string(),
            (false, true) => format!("{} {}", self.text, texts::SILENCIO_POSITIVO),
        }
    }
}

/// The deadline rule for one action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermRule {
    /// The action this rule computes.
    pub action: ActionType,
    /// Anchor used when parsing the caller's start date text.
    pub anchor: DayAnchor,
    /// How the start date is normalized before the pipeline runs.
    pub start_adjustment: BusinessDayConvention,
    /// Wire name the normalized start date is reported under, if at all.
    pub start_field: Option<&'static str>,
    /// The pipeline.
    pub steps: &'static [Step],
    /// Description text.
    pub descripcion: Descripcion,
    /// Statutory citation.
    pub fundamento_juridico: &'static str,
}

impl TermRule {
    /// Return `true` if the rule reads its start date at all.
    pub fn uses_start_date(&self) -> bool {
        self.start_field.is_some() || !self.steps.is_empty()
    }

    /// Run the pipeline from `start` over `calendar`.
    pub fn compute(&self, calendar: &dyn Calendar, start: Date) -> Result<TermResult> {
        let start = calendar.adjust(start, self.start_adjustment)?;
        let mut computed: Vec<Date> = Vec::with_capacity(self.steps.len());
        for (i, step) in self.steps.iter().enumerate() {
            let date = match step.op {
                StepOp::BusinessDays { from, n, count_start_day } => {
                    let from = resolve(from, start, &computed, i)?;
                    calendar.add_business_days(from, n, count_start_day)?
                }
                StepOp::NextBusinessDay { from } => {
                    calendar.next_business_day(resolve(from, start, &computed, i)?)?
                }
                StepOp::Offset { from, period } => {
                    resolve(from, start, &computed, i)?.advance(period)?
                }
            };
            computed.push(date);
        }

        let start_milestone = self.start_field.map(|name| Milestone { name, date: start });
        let step_milestones = self
            .steps
            .iter()
            .zip(&computed)
            .filter(|(step, _)| step.emit)
            .map(|(step, &date)| Milestone { name: step.field, date });

        Ok(TermResult {
            tipo: self.action,
            milestones: start_milestone.into_iter().chain(step_milestones).collect(),
            descripcion: self.descripcion.render(),
            fundamento_juridico: self.fundamento_juridico,
        })
    }
}

fn resolve(source: Source, start: Date, computed: &[Date], current: usize) -> Result<Date> {
    match source {
        Source::Start => Ok(start),
        Source::Step(j) if j < current => Ok(computed[j]),
        Source::Step(j) => fail!("step {current} reads step {j}, which has not run yet"),
    }
}

// ── Shared pipelines ─────────────────────────────────────────────────────────

/// 15 business days to answer, then 72 hours (3 calendar days) to recognize
/// the positive silence.
const PQR_STEPS: &[Step] = &[
    Step {
        field: "fechaLimiteRespuesta",
        op: StepOp::BusinessDays { from: Source::Start, n: 15, count_start_day: true },
        emit: true,
    },
    Step {
        field: "fechaReconocimientoSilencio",
        op: StepOp::Offset { from: Source::Step(0), period: Period::days(3) },
        emit: true,
    },
];

/// 5 business days to file; the 15-day decision window runs from the filing
/// deadline.
const RECURSO_STEPS: &[Step] = &[
    Step {
        field: "fechaLimitePresentacion",
        op: StepOp::BusinessDays { from: Source::Start, n: 5, count_start_day: true },
        emit: true,
    },
    Step {
        field: "fechaLimiteDecision",
        op: StepOp::BusinessDays { from: Source::Step(0), n: 15, count_start_day: true },
        emit: true,
    },
    Step {
        field: "fechaReconocimientoSilencio",
        op: StepOp::Offset { from: Source::Step(1), period: Period::days(3) },
        emit: true,
    },
];

const RECURSO_QUEJA_STEPS: &[Step] = &[Step {
    field: "fechaLimitePresentacionQueja",
    op: StepOp::BusinessDays { from: Source::Start, n: 5, count_start_day: true },
    emit: true,
}];

const TUTELA_STEPS: &[Step] = &[
    Step {
        field: "fechaLimiteDecision",
        op: StepOp::BusinessDays { from: Source::Start, n: 10, count_start_day: true },
        emit: true,
    },
    Step {
        field: "inicioImpugnacion",
        op: StepOp::NextBusinessDay { from: Source::Step(0) },
        emit: false,
    },
    Step {
        field: "fechaLimiteImpugnacion",
        op: StepOp::BusinessDays { from: Source::Step(1), n: 3, count_start_day: true },
        emit: true,
    },
];

const NULIDAD_RESTABLECIMIENTO_STEPS: &[Step] = &[
    Step {
        field: "inicioTerminoDeLaAccion",
        op: StepOp::Offset { from: Source::Start, period: Period::days(1) },
        emit: true,
    },
    Step {
        field: "fechaCaducidad",
        op: StepOp::Offset { from: Source::Step(0), period: Period::months(4) },
        emit: true,
    },
];

const CUMPLIMIENTO_STEPS: &[Step] = &[
    Step {
        field: "fechaSiguiente",
        op: StepOp::NextBusinessDay { from: Source::Start },
        emit: false,
    },
    Step {
        field: "fechaConfiguracionRenuencia",
        op: StepOp::BusinessDays { from: Source::Step(0), n: 10, count_start_day: true },
        emit: true,
    },
];

const SILENCIO_STEPS: &[Step] = &[Step {
    field: "fechaReconocimientoSilencio",
    op: StepOp::Offset { from: Source::Start, period: Period::days(3) },
    emit: true,
}];

// ── The table ────────────────────────────────────────────────────────────────

const fn pqr(action: ActionType, text: &'static str) -> TermRule {
    TermRule {
        action,
        anchor: DayAnchor::ColombiaNoon,
        start_adjustment: BusinessDayConvention::Following,
        start_field: Some("fechaInicial"),
        steps: PQR_STEPS,
        descripcion: Descripcion::pqr(text),
        fundamento_juridico: texts::FUND_LEY_142,
    }
}

const fn recurso(action: ActionType) -> TermRule {
    TermRule {
        action,
        anchor: DayAnchor::ColombiaNoon,
        start_adjustment: BusinessDayConvention::Following,
        start_field: Some("fechaInicial"),
        steps: RECURSO_STEPS,
        descripcion: Descripcion::plain(texts::RECURSOS),
        fundamento_juridico: texts::FUND_LEY_142,
    }
}

static PETICION: TermRule = pqr(ActionType::Peticion, texts::DESC_PETICION);
static PETICION_INFO: TermRule = pqr(ActionType::PeticionInfo, texts::DESC_PETICION_INFO);
static CONSULTA: TermRule = pqr(ActionType::Consulta, texts::DESC_CONSULTA);
static QUEJA: TermRule = pqr(ActionType::Queja, texts::DESC_QUEJA);
static RECLAMO: TermRule = pqr(ActionType::Reclamo, texts::DESC_RECLAMO);
static REPOSICION: TermRule = recurso(ActionType::Reposicion);
static APELACION: TermRule = recurso(ActionType::Apelacion);

static RECURSO_QUEJA: TermRule = TermRule {
    action: ActionType::RecursoQueja,
    anchor: DayAnchor::ColombiaNoon,
    start_adjustment: BusinessDayConvention::Following,
    start_field: Some("fechaRechazoApelacion"),
    steps: RECURSO_QUEJA_STEPS,
    descripcion: Descripcion::plain(texts::DESC_RECURSO_QUEJA),
    fundamento_juridico: texts::FUND_RECURSO_QUEJA,
};

static TUTELA: TermRule = TermRule {
    action: ActionType::Tutela,
    anchor: DayAnchor::ColombiaNoon,
    start_adjustment: BusinessDayConvention::Following,
    start_field: Some("fechaInicial"),
    steps: TUTELA_STEPS,
    descripcion: Descripcion::plain(texts::DESC_TUTELA),
    fundamento_juridico: texts::FUND_TUTELA,
};

static NULIDAD: TermRule = TermRule {
    action: ActionType::Nulidad,
    anchor: DayAnchor::ColombiaNoon,
    start_adjustment: BusinessDayConvention::Unadjusted,
    start_field: None,
    steps: &[],
    descripcion: Descripcion::plain(texts::DESC_NULIDAD),
    fundamento_juridico: texts::FUND_NULIDAD,
};

// Parsed at UTC midnight and never moved to a business day.
static NULIDAD_RESTABLECIMIENTO: TermRule = TermRule {
    action: ActionType::NulidadRestablecimiento,
    anchor: DayAnchor::UtcMidnight,
    start_adjustment: BusinessDayConvention::Unadjusted,
    start_field: None,
    steps: NULIDAD_RESTABLECIMIENTO_STEPS,
    descripcion: Descripcion::plain(texts::DESC_NULIDAD_RESTABLECIMIENTO),
    fundamento_juridico: texts::FUND_NULIDAD_RESTABLECIMIENTO,
};

static CUMPLIMIENTO: TermRule = TermRule {
    action: ActionType::Cumplimiento,
    anchor: DayAnchor::ColombiaNoon,
    start_adjustment: BusinessDayConvention::Following,
    start_field: Some("fechaRadicacionRenuencia"),
    steps: CUMPLIMIENTO_STEPS,
    descripcion: Descripcion::plain(texts::DESC_CUMPLIMIENTO),
    fundamento_juridico: texts::FUND_CUMPLIMIENTO,
};

static SILENCIO: TermRule = TermRule {
    action: ActionType::Silencio,
    anchor: DayAnchor::ColombiaNoon,
    start_adjustment: BusinessDayConvention::Unadjusted,
    start_field: Some("fechaVencimientoTermino"),
    steps: SILENCIO_STEPS,
    descripcion: Descripcion::pqr(""),
    fundamento_juridico: texts::FUND_LEY_142,
};

/// The rule for `action`.
pub fn rule(action: ActionType) -> &'static TermRule {
    match action {
        ActionType::Peticion => &PETICION,
        ActionType::PeticionInfo => &PETICION_INFO,
        ActionType::Consulta => &CONSULTA,
        ActionType::Queja => &QUEJA,
        ActionType::Reclamo => &RECLAMO,
        ActionType::Reposicion => &REPOSICION,
        ActionType::Apelacion => &APELACION,
        ActionType::RecursoQueja => &RECURSO_QUEJA,
        ActionType::Silencio => &SILENCIO,
        ActionType::Tutela => &TUTELA,
        ActionType::Nulidad => &NULIDAD,
        ActionType::NulidadRestablecimiento => &NULIDAD_RESTABLECIMIENTO,
        ActionType::Cumplimiento => &CUMPLIMIENTO,
    }
}

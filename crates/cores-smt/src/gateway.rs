//! In-process SMT backend: builds a fresh [`z3::Context`]/[`z3::Solver`]
//! pair per attempt so no state leaks between attempts, checks
//! satisfiability, and decodes a morphism on SAT.

use cores_core::{CoresError, Morphism};
use cores_graph::{GraphStructure, HyperStructure};
use z3::{Config, Context, SatResult};

use crate::decode::decode_morphism;
use crate::encode::{encode_graph, encode_hypergraph};

/// Verdict returned by a gateway attempt.
#[derive(Debug, Clone)]
pub enum SmtVerdict {
    /// No proper retract exists; the structure is already a core.
    Core,
    /// A proper retract was found, expressed as the morphism to apply.
    Retract(Morphism),
}

/// Configuration for the in-process SMT backend.
///
/// Currently carries no tunables; kept as a struct (rather than
/// omitted) so [`SmtGateway::new`] stays symmetric with
/// [`cores_sat::SatGateway::new`] and so a future timeout or tactic
/// knob has a home.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmtConfig;

/// In-process Z3-backed SMT backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmtGateway {
    #[allow(dead_code)]
    config: SmtConfig,
}

impl SmtGateway {
    /// Creates a gateway with the given configuration.
    pub fn new(config: SmtConfig) -> Self {
        Self { config }
    }

    /// Searches for a proper retract of `graph` via an in-process Z3
    /// model, returning `Core` on UNSAT or the decoded morphism on SAT.
    pub fn find_graph_retract(&self, graph: &GraphStructure) -> Result<SmtVerdict, CoresError> {
        let cfg = Config::new();
        let ctx = Context::new(&cfg);
        let encoding = encode_graph(&ctx, graph);
        self.check(encoding)
    }

    /// Searches for a proper retract of `hyper` via an in-process Z3
    /// model, returning `Core` on UNSAT or the decoded morphism on SAT.
    pub fn find_hyper_retract(&self, hyper: &HyperStructure) -> Result<SmtVerdict, CoresError> {
        let cfg = Config::new();
        let ctx = Context::new(&cfg);
        let encoding = encode_hypergraph(&ctx, hyper);
        self.check(encoding)
    }

    fn check<'ctx>(&self, encoding: crate::encode::Encoding<'ctx>) -> Result<SmtVerdict, CoresError> {
        match encoding.solver.check() {
            SatResult::Unsat => Ok(SmtVerdict::Core),
            SatResult::Sat => {
                let model = encoding.solver.get_model().ok_or_else(|| {
                    CoresError::backend(
                        "smt-no-model",
                        "solver reported satisfiable but produced no model",
                    )
                })?;
                let morphism =
                    decode_morphism(&model, &encoding.ids, &encoding.vertex_consts, &encoding.vmorph)?;
                Ok(SmtVerdict::Retract(morphism))
            }
            SatResult::Unknown => Err(CoresError::backend(
                "smt-unknown",
                "solver returned unknown instead of sat or unsat",
            )),
        }
    }
}

//! The backend capability set: one trait per
//! structure kind, each implemented by both the SAT and the SMT
//! gateway, so [`crate::solve_graph`]/[`crate::solve_hyper`] can stay
//! generic over which search strategy produced the morphism.

use cores_core::{CoresError, Morphism};
use cores_graph::{GraphStructure, HyperStructure};
use cores_sat::{SatGateway, SatVerdict};
use cores_smt::{SmtGateway, SmtVerdict};

/// The outcome of one proper-retract search attempt.
#[derive(Debug, Clone)]
pub enum Verdict {
    /// No proper retract exists; the structure is already a core.
    Core,
    /// A proper retract was found, expressed as the morphism to apply.
    Retract(Morphism),
}

/// A backend capable of searching a [`GraphStructure`] for a proper
/// retract.
pub trait GraphBackend {
    /// Searches `graph` for a proper retract.
    fn find_proper_retract(&self, graph: &GraphStructure) -> Result<Verdict, CoresError>;
}

/// A backend capable of searching a [`HyperStructure`] for a proper
/// retract.
pub trait HyperBackend {
    /// Searches `hyper` for a proper retract.
    fn find_proper_retract(&self, hyper: &HyperStructure) -> Result<Verdict, CoresError>;
}

impl GraphBackend for SatGateway {
    fn find_proper_retract(&self, graph: &GraphStructure) -> Result<Verdict, CoresError> {
        Ok(match self.find_graph_retract(graph)? {
            SatVerdict::Core => Verdict::Core,
            SatVerdict::Retract(morphism) => Verdict::Retract(morphism),
        })
    }
}

impl HyperBackend for SatGateway {
    fn find_proper_retract(&self, hyper: &HyperStructure) -> Result<Verdict, CoresError> {
        Ok(match self.find_hyper_retract(hyper)? {
            SatVerdict::Core => Verdict::Core,
            SatVerdict::Retract(morphism) => Verdict::Retract(morphism),
        })
    }
}

impl GraphBackend for SmtGateway {
    fn find_proper_retract(&self, graph: &GraphStructure) -> Result<Verdict, CoresError> {
        Ok(match self.find_graph_retract(graph)? {
            SmtVerdict::Core => Verdict::Core,
            SmtVerdict::Retract(morphism) => Verdict::Retract(morphism),
        })
    }
}

impl HyperBackend for SmtGateway {
    fn find_proper_retract(&self, hyper: &HyperStructure) -> Result<Verdict, CoresError> {
        Ok(match self.find_hyper_retract(hyper)? {
            SmtVerdict::Core => Verdict::Core,
            SmtVerdict::Retract(morphism) => Verdict::Retract(morphism),
        })
    }
}

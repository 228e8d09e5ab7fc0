//! Invokes an external SAT solver process over the limboole syntax
//! emitted by [`crate::encode`].

use std::io::Write;
use std::process::{Command, Stdio};

use cores_core::CoresError;
use cores_graph::{GraphStructure, HyperStructure};
use tempfile::NamedTempFile;

use crate::decode::{decode_morphism, parse_verdict, Verdict};
use crate::encode::{encode_graph, encode_hypergraph};
use crate::errctx::CoresErrorExt;

/// Verdict returned by a solver gateway attempt.
#[derive(Debug, Clone)]
pub enum SatVerdict {
    /// No proper retract exists; the structure is already a core.
    Core,
    /// A proper retract was found, expressed as the morphism to apply.
    Retract(cores_core::Morphism),
}

/// Configures the external SAT solver invocation.
///
/// `Default` points at `limboole -s`, the reference solver this
/// gateway is built against.
#[derive(Debug, Clone)]
pub struct SatConfig {
    /// Path or name of the solver executable.
    pub solver_path: String,
    /// Arguments passed to the solver before the formula is piped in.
    pub solver_args: Vec<String>,
}

impl Default for SatConfig {
    fn default() -> Self {
        Self {
            solver_path: "limboole".to_string(),
            solver_args: vec!["-s".to_string()],
        }
    }
}

/// External-process SAT backend.
#[derive(Debug, Clone, Default)]
pub struct SatGateway {
    config: SatConfig,
}

impl SatGateway {
    /// Creates a gateway with the given solver configuration.
    pub fn new(config: SatConfig) -> Self {
        Self { config }
    }

    /// Searches for a proper retract of `graph` via the external
    /// solver, returning `Core` on UNSAT or the decoded morphism on
    /// SAT.
    pub fn find_graph_retract(&self, graph: &GraphStructure) -> Result<SatVerdict, CoresError> {
        let encoding = encode_graph(graph);
        let output = self.run_solver(&encoding.formula)?;
        match parse_verdict(&output)? {
            Verdict::Unsatisfiable => Ok(SatVerdict::Core),
            Verdict::Satisfiable => {
                let morphism = decode_morphism(&output, &encoding.atoms)?;
                Ok(SatVerdict::Retract(morphism))
            }
        }
    }

    /// Searches for a proper retract of `hyper` via the external
    /// solver, returning `Core` on UNSAT or the decoded morphism on
    /// SAT.
    pub fn find_hyper_retract(&self, hyper: &HyperStructure) -> Result<SatVerdict, CoresError> {
        let encoding = encode_hypergraph(hyper);
        let output = self.run_solver(&encoding.formula)?;
        match parse_verdict(&output)? {
            Verdict::Unsatisfiable => Ok(SatVerdict::Core),
            Verdict::Satisfiable => {
                let morphism = decode_morphism(&output, &encoding.atoms)?;
                Ok(SatVerdict::Retract(morphism))
            }
        }
    }

    fn run_solver(&self, formula: &str) -> Result<String, CoresError> {
        let mut file = NamedTempFile::new()
            .map_err(|err| CoresError::backend("tempfile-create", err.to_string()))?;
        file.write_all(formula.as_bytes())
            .map_err(|err| CoresError::backend("tempfile-write", err.to_string()))?;
        file.flush()
            .map_err(|err| CoresError::backend("tempfile-flush", err.to_string()))?;

        // The formula is fed over stdin, matching the reference
        // solver invocation; reopen gives an independent handle
        // seeked to the start of the file.
        let stdin_file = file
            .reopen()
            .map_err(|err| CoresError::backend("tempfile-reopen", err.to_string()))?;

        let output = Command::new(&self.config.solver_path)
            .args(&self.config.solver_args)
            .stdin(Stdio::from(stdin_file))
            .output()
            .map_err(|err| {
                CoresError::backend("solver-spawn", err.to_string())
                    .with_context("solver", &self.config.solver_path)
            })?;

        if !output.status.success() {
            return Err(CoresError::backend(
                "solver-nonzero-exit",
                "external SAT solver exited with a non-zero status",
            )
            .with_context("solver", &self.config.solver_path)
            .with_context("status", output.status.to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

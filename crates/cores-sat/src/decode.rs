//! Parses limboole's stdout into a [`Morphism`].

use std::collections::HashMap;

use cores_core::{CoresError, Morphism, MorphismPair};

use crate::errctx::CoresErrorExt;

/// The solver's verdict header, before any assignment lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// `% SATISFIABLE`: a proper retract was found.
    Satisfiable,
    /// `% UNSATISFIABLE`: the structure is already a core.
    Unsatisfiable,
}

/// Reads the header line and classifies it as SAT or UNSAT.
pub fn parse_verdict(output: &str) -> Result<Verdict, CoresError> {
    let header = output.lines().next().unwrap_or_default();
    if header.starts_with("% SATISFIABLE") {
        Ok(Verdict::Satisfiable)
    } else if header.starts_with("% UNSATISFIABLE") {
        Ok(Verdict::Unsatisfiable)
    } else {
        Err(CoresError::backend(
            "unrecognized-verdict",
            "solver output did not start with a recognized SATISFIABLE/UNSATISFIABLE header",
        )
        .with_context("header", header))
    }
}

/// Parses every `<atom> = 1` assignment line and resolves each atom
/// against `atoms` (built alongside the formula by [`crate::encode`])
/// into a [`Morphism`], dropping identity pairs.
pub fn decode_morphism(
    output: &str,
    atoms: &HashMap<String, MorphismPair>,
) -> Result<Morphism, CoresError> {
    let mut morphism = Vec::new();
    for line in output.lines() {
        let Some(atom_text) = line.strip_suffix(" = 1") else {
            continue;
        };
        let &(src, tgt) = atoms.get(atom_text).ok_or_else(|| {
            CoresError::backend(
                "unknown-atom",
                "solver assigned an atom that does not correspond to any known vertex pair",
            )
            .with_context("atom", atom_text)
        })?;
        if src != tgt {
            morphism.push((src, tgt));
        }
    }
    Ok(morphism)
}

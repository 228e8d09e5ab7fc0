//! Extracts a [`Morphism`] from a satisfying Z3 model: evaluate
//! `vmorph(v)` for every live vertex `v` and keep the pairs where the
//! result differs from `v` itself.

use std::collections::HashMap;

use cores_core::{CoresError, Morphism, VertexId};
use z3::ast::{Ast, Datatype};
use z3::{FuncDecl, Model};

use crate::errctx::CoresErrorExt;

/// Reads `vmorph(v)` for every `v` in `ids` out of `model`, resolving
/// each result back to a [`VertexId`] via `vertex_consts`, and returns
/// the non-identity pairs as a [`Morphism`].
pub fn decode_morphism<'ctx>(
    model: &Model<'ctx>,
    ids: &[VertexId],
    vertex_consts: &HashMap<VertexId, Datatype<'ctx>>,
    vmorph: &FuncDecl<'ctx>,
) -> Result<Morphism, CoresError> {
    let mut morphism = Vec::new();
    for &v in ids {
        let v_const = &vertex_consts[&v];
        let applied = vmorph.apply(&[v_const as &dyn Ast<'ctx>]);
        let evaluated = model.eval(&applied, true).ok_or_else(|| {
            CoresError::backend(
                "smt-eval-failed",
                "model completion failed to evaluate vmorph on a live vertex",
            )
            .with_context("vertex", v.as_raw())
        })?;
        let evaluated = evaluated.as_datatype().ok_or_else(|| {
            CoresError::backend(
                "smt-eval-not-datatype",
                "vmorph evaluated to a value outside the Vertex datatype sort",
            )
        })?;

        let target = ids
            .iter()
            .copied()
            .find(|&u| vertex_consts[&u] == evaluated)
            .ok_or_else(|| {
                CoresError::backend(
                    "smt-unknown-target",
                    "model assigned vmorph to a value not matching any known vertex constant",
                )
                .with_context("vertex", v.as_raw())
            })?;

        if target != v {
            morphism.push((v, target));
        }
    }
    Ok(morphism)
}

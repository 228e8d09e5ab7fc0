//! Limboole-syntax SAT formula construction for the retract-search
//! encoding: functionality + fixed image, edge preservation, and
//! properness, joined as one top-level conjunction.

use std::collections::HashMap;

use cores_core::{MorphismPair, VertexId};
use cores_graph::{GraphStructure, HyperStructure};

/// Accumulates top-level conjuncts of a limboole formula, joining them
/// with `&\n` on [`FormulaWriter::into_formula`]. Mirrors the
/// accumulate-then-join shape of a `ProblemWriter` for a text-based
/// solver format: push one already-parenthesized block at a time,
/// then emit the whole formula in one call.
#[derive(Debug, Default)]
pub struct FormulaWriter {
    conjuncts: Vec<String>,
}

impl FormulaWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one top-level conjunct.
    pub fn push(&mut self, conjunct: String) {
        self.conjuncts.push(conjunct);
    }

    /// Joins every pushed conjunct into the final formula text.
    pub fn into_formula(self) -> String {
        self.conjuncts.join("&\n")
    }
}

/// A formula together with the reverse index from atom text back to
/// the vertex pair it asserts a mapping for. Decoding looks up atom
/// text directly in this map rather than re-splitting the atom string
/// on its separator character, since vertex names are not guaranteed
/// to avoid that separator themselves.
pub struct Encoding {
    /// The limboole-syntax formula text.
    pub formula: String,
    /// Maps an atom's literal text to the `(src, tgt)` pair it asserts.
    pub atoms: HashMap<String, MorphismPair>,
}

fn build_atom_index(
    ids: &[VertexId],
    names: &[String],
    atom: impl Fn(&str, &str) -> String,
) -> HashMap<String, MorphismPair> {
    let mut index = HashMap::with_capacity(ids.len() * ids.len());
    for (u, u_name) in ids.iter().zip(names.iter()) {
        for (v, v_name) in ids.iter().zip(names.iter()) {
            index.insert(atom(u_name, v_name), (*u, *v));
        }
    }
    index
}

fn graph_atom(src: &str, tgt: &str) -> String {
    format!("{src}_{tgt}")
}

fn hyper_atom(src: &str, tgt: &str) -> String {
    format!("{src}@{tgt}")
}

fn functionality_block(names: &[String], atom: impl Fn(&str, &str) -> String) -> Vec<String> {
    names
        .iter()
        .map(|u| {
            let per_target: Vec<String> = names
                .iter()
                .map(|v| {
                    let mut parts: Vec<String> = names
                        .iter()
                        .filter(|&w| w != v)
                        .map(|w| format!("!{}", atom(u, w)))
                        .collect();
                    parts.push(atom(u, v));
                    parts.push(atom(v, v));
                    format!("({})", parts.join("&"))
                })
                .collect();
            format!("({})", per_target.join("|\n"))
        })
        .collect()
}

fn properness_block(names: &[String], atom: impl Fn(&str, &str) -> String) -> String {
    let per_target: Vec<String> = names
        .iter()
        .map(|v| {
            let inner: Vec<String> = names.iter().map(|u| format!("!{}", atom(u, v))).collect();
            format!("({})", inner.join("&"))
        })
        .collect();
    format!("({})", per_target.join("|\n"))
}

/// Encodes a [`GraphStructure`] into a limboole-syntax formula whose
/// models correspond to proper retracts.
pub fn encode_graph(graph: &GraphStructure) -> Encoding {
    let ids = graph.vertices();
    let names: Vec<String> = ids
        .iter()
        .map(|&id| graph.vertex_name(id).expect("live vertex id").to_string())
        .collect();

    let mut writer = FormulaWriter::new();
    for block in functionality_block(&names, graph_atom) {
        writer.push(block);
    }

    let bundles: Vec<(String, String, std::collections::BTreeSet<char>)> = graph
        .edge_bundles()
        .map(|(src, tgt, labels)| {
            (
                graph.vertex_name(src).expect("live vertex id").to_string(),
                graph.vertex_name(tgt).expect("live vertex id").to_string(),
                labels.clone(),
            )
        })
        .collect();

    for (a, b, labels) in &bundles {
        let candidates: Vec<String> = bundles
            .iter()
            .filter(|(_, _, cand_labels)| labels.is_subset(cand_labels))
            .map(|(a2, b2, _)| format!("({}&{})", graph_atom(a, a2), graph_atom(b, b2)))
            .collect();
        writer.push(format!("({})", candidates.join("|")));
    }

    writer.push(properness_block(&names, graph_atom));

    Encoding {
        formula: writer.into_formula(),
        atoms: build_atom_index(&ids, &names, graph_atom),
    }
}

/// Encodes a [`HyperStructure`] into a limboole-syntax formula whose
/// models correspond to proper retracts.
pub fn encode_hypergraph(hyper: &HyperStructure) -> Encoding {
    let ids = hyper.vertices();
    let names: Vec<String> = ids
        .iter()
        .map(|&id| hyper.vertex_name(id).expect("live vertex id").to_string())
        .collect();

    let mut writer = FormulaWriter::new();
    for block in functionality_block(&names, hyper_atom) {
        writer.push(block);
    }

    let instances: Vec<(String, Vec<String>)> = hyper
        .instances()
        .filter(|(_, args)| !args.is_empty())
        .map(|(label, args)| {
            let label_name = hyper.label_name(label).expect("declared label").to_string();
            let arg_names = args
                .iter()
                .map(|&id| hyper.vertex_name(id).expect("live vertex id").to_string())
                .collect();
            (label_name, arg_names)
        })
        .collect();

    for (label, args) in &instances {
        let candidates: Vec<String> = instances
            .iter()
            .filter(|(cand_label, cand_args)| cand_label == label && cand_args.len() == args.len())
            .map(|(_, cand_args)| {
                let conj: Vec<String> = args
                    .iter()
                    .zip(cand_args.iter())
                    .map(|(arg, cand_arg)| hyper_atom(arg, cand_arg))
                    .collect();
                format!("({})", conj.join("&"))
            })
            .collect();
        if !candidates.is_empty() {
            writer.push(format!("({})", candidates.join("|")));
        }
    }

    writer.push(properness_block(&names, hyper_atom));

    Encoding {
        formula: writer.into_formula(),
        atoms: build_atom_index(&ids, &names, hyper_atom),
    }
}

//! Builds the uninterpreted-function SMT model: a finite `Vertex`
//! datatype sort, a `vmorph: Vertex -> Vertex` function, and one
//! `Edge_<label>` record sort plus `morph_<label>` function per label
//! that has at least one live instance.
//!
//! Graphs are treated as hypergraphs whose every label has arity two
//! (`arg_0` = source, `arg_1` = target) and built as one record
//! datatype per label with positional fields, rather than a single
//! merged `E` sort with a separate `lab` accessor. See DESIGN.md.

use std::collections::{BTreeMap, HashMap};

use cores_core::VertexId;
use cores_graph::{GraphStructure, HyperStructure};
use z3::ast::{Ast, Bool, Datatype};
use z3::{Context, DatatypeAccessor, DatatypeBuilder, DatatypeSort, FuncDecl, Solver};

/// Everything the gateway needs to check satisfiability and, on a SAT
/// result, decode a morphism: the live solver, the vertex id order,
/// the id-to-constant lookup, and the `vmorph` function declaration.
pub struct Encoding<'ctx> {
    /// The solver holding every asserted constraint.
    pub solver: Solver<'ctx>,
    /// Live vertex identifiers in the order used to build the model.
    pub ids: Vec<VertexId>,
    /// Maps each vertex id to its nullary `Vertex` datatype constant.
    pub vertex_consts: HashMap<VertexId, Datatype<'ctx>>,
    /// The declared vertex-morphism function.
    pub vmorph: FuncDecl<'ctx>,
}

/// Encodes a [`GraphStructure`] as an SMT model whose satisfying
/// assignments correspond to proper retracts.
pub fn encode_graph<'ctx>(ctx: &'ctx Context, graph: &GraphStructure) -> Encoding<'ctx> {
    let ids = graph.vertices();
    let names: Vec<String> = ids
        .iter()
        .map(|&id| graph.vertex_name(id).expect("live vertex id").to_string())
        .collect();

    let (var_sort, vertex_consts) = declare_vertex_sort(ctx, &ids, &names);
    let solver = Solver::new(ctx);
    let vmorph = FuncDecl::new(ctx, "vmorph", &[&var_sort.sort], &var_sort.sort);

    assert_fixed_image(ctx, &solver, &ids, &vertex_consts, &vmorph);
    assert_properness(ctx, &solver, &ids, &vertex_consts, &vmorph);

    let mut groups: BTreeMap<char, Vec<Vec<VertexId>>> = BTreeMap::new();
    for (src, tgt, labels) in graph.edge_bundles() {
        for &label in labels {
            groups.entry(label).or_default().push(vec![src, tgt]);
        }
    }
    let named_groups: Vec<(String, Vec<Vec<VertexId>>)> = groups
        .into_iter()
        .map(|(label, instances)| (label.to_string(), instances))
        .collect();
    assert_label_morphisms(ctx, &solver, &var_sort, &vmorph, &vertex_consts, &named_groups);

    Encoding {
        solver,
        ids,
        vertex_consts,
        vmorph,
    }
}

/// Encodes a [`HyperStructure`] as an SMT model whose satisfying
/// assignments correspond to proper retracts.
pub fn encode_hypergraph<'ctx>(ctx: &'ctx Context, hyper: &HyperStructure) -> Encoding<'ctx> {
    let ids = hyper.vertices();
    let names: Vec<String> = ids
        .iter()
        .map(|&id| hyper.vertex_name(id).expect("live vertex id").to_string())
        .collect();

    let (var_sort, vertex_consts) = declare_vertex_sort(ctx, &ids, &names);
    let solver = Solver::new(ctx);
    let vmorph = FuncDecl::new(ctx, "vmorph", &[&var_sort.sort], &var_sort.sort);

    assert_fixed_image(ctx, &solver, &ids, &vertex_consts, &vmorph);
    assert_properness(ctx, &solver, &ids, &vertex_consts, &vmorph);

    let mut groups: BTreeMap<String, Vec<Vec<VertexId>>> = BTreeMap::new();
    for (label, args) in hyper.instances() {
        let label_name = hyper.label_name(label).expect("declared label").to_string();
        groups.entry(label_name).or_default().push(args.to_vec());
    }
    let named_groups: Vec<(String, Vec<Vec<VertexId>>)> = groups.into_iter().collect();
    assert_label_morphisms(ctx, &solver, &var_sort, &vmorph, &vertex_consts, &named_groups);

    Encoding {
        solver,
        ids,
        vertex_consts,
        vmorph,
    }
}

fn declare_vertex_sort<'ctx>(
    ctx: &'ctx Context,
    ids: &[VertexId],
    names: &[String],
) -> (DatatypeSort<'ctx>, HashMap<VertexId, Datatype<'ctx>>) {
    let mut builder = DatatypeBuilder::new(ctx, "Vertex");
    for name in names {
        builder = builder.variant(name, vec![]);
    }
    let var_sort = builder.finish();

    let mut vertex_consts = HashMap::with_capacity(ids.len());
    for (idx, &id) in ids.iter().enumerate() {
        let variant = &var_sort.variants[idx];
        let value = variant
            .constructor
            .apply(&[])
            .as_datatype()
            .expect("nullary vertex constructor yields a Vertex datatype value");
        vertex_consts.insert(id, value);
    }
    (var_sort, vertex_consts)
}

fn vmorph_of<'ctx>(
    vmorph: &FuncDecl<'ctx>,
    arg: &Datatype<'ctx>,
) -> Datatype<'ctx> {
    vmorph
        .apply(&[arg as &dyn Ast<'ctx>])
        .as_datatype()
        .expect("vmorph is declared Vertex -> Vertex")
}

/// Asserts `∀v: (∃u: vmorph(u)=v) → vmorph(v)=v`: since `vmorph` is a
/// total single-valued SMT function, only the fixed-image implication
/// needs stating explicitly, unlike the SAT encoder's functionality
/// block.
fn assert_fixed_image<'ctx>(
    ctx: &'ctx Context,
    solver: &Solver<'ctx>,
    ids: &[VertexId],
    vertex_consts: &HashMap<VertexId, Datatype<'ctx>>,
    vmorph: &FuncDecl<'ctx>,
) {
    for &v in ids {
        let v_const = &vertex_consts[&v];
        let reached: Vec<Bool<'ctx>> = ids
            .iter()
            .map(|&u| vmorph_of(vmorph, &vertex_consts[&u])._eq(v_const))
            .collect();
        let reached_refs: Vec<&Bool<'ctx>> = reached.iter().collect();
        let is_reached = Bool::or(ctx, &reached_refs);
        let is_fixed = vmorph_of(vmorph, v_const)._eq(v_const);
        solver.assert(&is_reached.implies(&is_fixed));
    }
}

/// Asserts `¬(∀v: vmorph(v)=v)`: some vertex is moved.
fn assert_properness<'ctx>(
    ctx: &'ctx Context,
    solver: &Solver<'ctx>,
    ids: &[VertexId],
    vertex_consts: &HashMap<VertexId, Datatype<'ctx>>,
    vmorph: &FuncDecl<'ctx>,
) {
    let all_fixed: Vec<Bool<'ctx>> = ids
        .iter()
        .map(|&v| vmorph_of(vmorph, &vertex_consts[&v])._eq(&vertex_consts[&v]))
        .collect();
    let all_fixed_refs: Vec<&Bool<'ctx>> = all_fixed.iter().collect();
    solver.assert(&Bool::and(ctx, &all_fixed_refs).not());
}

/// For every label with at least one live instance of non-zero arity,
/// declares an `Edge_<label>` record sort and a `morph_<label>`
/// function, then asserts the homomorphism and same-label-range
/// constraints over every instantiated edge.
fn assert_label_morphisms<'ctx>(
    ctx: &'ctx Context,
    solver: &Solver<'ctx>,
    var_sort: &DatatypeSort<'ctx>,
    vmorph: &FuncDecl<'ctx>,
    vertex_consts: &HashMap<VertexId, Datatype<'ctx>>,
    groups: &[(String, Vec<Vec<VertexId>>)],
) {
    for (label_name, instances) in groups {
        let arity = match instances.first() {
            Some(args) if !args.is_empty() => args.len(),
            _ => continue,
        };

        let mut builder = DatatypeBuilder::new(ctx, format!("Edge_{label_name}"));
        let fields: Vec<(String, DatatypeAccessor)> = (0..arity)
            .map(|i| (format!("arg_{i}"), DatatypeAccessor::Sort(var_sort.sort.clone())))
            .collect();
        let field_refs: Vec<(&str, DatatypeAccessor)> =
            fields.iter().map(|(name, accessor)| (name.as_str(), accessor.clone())).collect();
        builder = builder.variant(&format!("cons_{label_name}"), field_refs);
        let edge_sort = builder.finish();
        let variant = &edge_sort.variants[0];

        let edge_consts: Vec<Datatype<'ctx>> = instances
            .iter()
            .map(|args| {
                let arg_refs: Vec<&dyn Ast<'ctx>> = args
                    .iter()
                    .map(|id| &vertex_consts[id] as &dyn Ast<'ctx>)
                    .collect();
                variant
                    .constructor
                    .apply(&arg_refs)
                    .as_datatype()
                    .expect("constructor application yields an Edge datatype value")
            })
            .collect();

        let label_morph = FuncDecl::new(
            ctx,
            format!("morph_{label_name}"),
            &[&edge_sort.sort],
            &edge_sort.sort,
        );

        for (instance, edge_const) in instances.iter().zip(edge_consts.iter()) {
            let mapped = label_morph
                .apply(&[edge_const as &dyn Ast<'ctx>])
                .as_datatype()
                .expect("label morph is declared Edge -> Edge");

            for (pos, vid) in instance.iter().enumerate() {
                let accessor = &variant.accessors[pos];
                let mapped_arg = accessor
                    .apply(&[&mapped as &dyn Ast<'ctx>])
                    .as_datatype()
                    .expect("accessor yields a Vertex datatype value");
                let original_arg = &vertex_consts[vid];
                solver.assert(&vmorph_of(vmorph, original_arg)._eq(&mapped_arg));
            }

            let candidates: Vec<Bool<'ctx>> =
                edge_consts.iter().map(|candidate| mapped._eq(candidate)).collect();
            let candidate_refs: Vec<&Bool<'ctx>> = candidates.iter().collect();
            solver.assert(&Bool::or(ctx, &candidate_refs));
        }
    }
}

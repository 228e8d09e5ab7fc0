#![deny(missing_docs)]
//! Limboole-syntax SAT formula encoder/decoder and external solver
//! gateway for the CoReS retract-search engine.

mod decode;
mod encode;
mod errctx;
mod gateway;

pub use decode::{decode_morphism, parse_verdict, Verdict};
pub use encode::{encode_graph, encode_hypergraph, Encoding, FormulaWriter};
pub use gateway::{SatConfig, SatGateway, SatVerdict};

#![deny(missing_docs)]
//! Z3-backed uninterpreted-function SMT encoder/decoder and in-process
//! solver gateway for the CoReS retract-search engine.

mod decode;
mod encode;
mod errctx;
mod gateway;

pub use decode::decode_morphism;
pub use encode::{encode_graph, encode_hypergraph, Encoding};
pub use gateway::{SmtConfig, SmtGateway, SmtVerdict};

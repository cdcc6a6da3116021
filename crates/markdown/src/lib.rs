//! The markdown front end of the report engine.
//!
//! Model output is a constrained markdown dialect: headings to three
//! levels, flat bullet and numbered lists, pipe tables, bold/italic
//! emphasis, and disclaimer lines. This crate turns that text into an
//! ordered block stream:
//!
//! raw text -> [`line::classify`] -> [`table::TableAccumulator`] +
//! [`inline::parse_spans`] -> [`assembler::assemble_blocks`]
//!
//! Nothing here performs I/O and no state outlives a call, so renders
//! on different inputs can run concurrently without coordination.

pub mod assembler;
pub mod inline;
pub mod line;
pub mod table;

pub use assembler::assemble_blocks;
pub use inline::parse_spans;
pub use line::{classify, LineEvent};
pub use table::TableAccumulator;

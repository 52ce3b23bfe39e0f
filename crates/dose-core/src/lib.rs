//! Dose objective translation core.
//!
//! Turns constraint rows into a DoseObjectives document:
//!
//! - [`numeric`]: one-decimal rounding shared by every parser
//! - [`metric`]: DVH objective expressions to vendor type codes
//! - [`eval_point`]: comparison expressions to modifier/threshold pairs
//! - [`alias`]: measure item IDs from the structure columns
//! - [`translate`]: rows to measure items
//! - [`assemble`]: the document and its element tree
//!
//! Nothing here touches the filesystem; rows come from `dose-ingest` and the
//! tree is written by `dose-output`.

pub mod alias;
pub mod assemble;
pub mod eval_point;
pub mod metric;
pub mod numeric;
pub mod translate;

pub use alias::{resolve_aliases, split_tokens};
pub use assemble::{DocumentAssembler, DocumentContext, document_tree};
pub use eval_point::parse_eval_point;
pub use metric::parse_metric;
pub use numeric::{ceil1, round1};
pub use translate::RowTranslator;

//! # Actor module
//!
//! The actors are controllers. They use services to perform their tasks.
//! They communicate with other actors through messages.

mod exporter;
mod reader;
mod recorder;

pub use exporter::*;
pub use reader::*;
pub use recorder::*;

//! Class diagram model and emitter
//!
//! Scenes become classes, script members become class members and embedded
//! scenes become `<|--` edges.

mod database;
mod emitter;

pub use database::{CompositionEdge, MemberDeclaration, MemberKind, SceneRecord, Statement};
pub use emitter::{format_statement, DiagramWriter, DIAGRAM_HEADER};

//! Property schema extraction.
//!
//! Methods are grouped by name and processed in lexicographic order:
//!
//! 1. [`accessor`] classifies names as getters, setters or neither.
//! 2. [`conflicts`] detects override chains and overload ambiguity.
//! 3. [`binder`] pairs getters with setters and boolean duals.
//! 4. [`completeness`] checks every method was bound or excused.
//!
//! [`StructSchemaExtractor`] runs the pass and returns an
//! [`ExtractionResult`]. Decisions outside naming rules are delegated to a
//! [`SchemaPolicy`](crate::policy::SchemaPolicy).

pub mod accessor;
pub mod binder;
pub mod completeness;
pub mod conflicts;
pub mod context;
pub mod strategy;

pub use accessor::{AccessorContext, AccessorGroup, AccessorGroups, GetterName, GetterPrefix};
pub use completeness::{Coverage, HandledSet};
pub use conflicts::{ConflictResolver, HierarchyResolver};
pub use context::{ChildRequest, ExtractionContext, PropertyValidator};
pub use strategy::{ExtractionResult, StructSchemaExtractor};

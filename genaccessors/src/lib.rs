//! Elm accessor generator.
//!
//! Renders a `GenAccessors` module that declares one
//! `Accessors.makeOneToOne` lens per record field:
//!
//! ```
//! let module = genaccessors::emit(&["title"]);
//! assert!(module.ends_with(
//!     "title = Accessors.makeOneToOne .title (\\c r -> { r | title = c r.title })\n\n"
//! ));
//! ```

pub mod emitter;
pub mod errors;
pub mod field;
pub mod file;

pub use emitter::{HEADER, emit, render_entry, write_module};
pub use errors::EmitError;
pub use field::{DEFAULT_FIELDS, FieldList, FieldName};
pub use file::write_if_changed;

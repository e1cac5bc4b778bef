//! Build-time generator for the `GenAccessors` Elm module.
//!
//! Regenerates the accessor module from a build script or an `xtask`,
//! touching the file only when its content actually changes.
//!
//! # Example
//!
//! In your `build.rs`:
//!
//! ```ignore
//! fn main() {
//!     genaccessors_build::generate_accessors()
//!         .fields(["newJob", "title", "period", "urgencyGrowth"])
//!         .output_file("client/src/GenAccessors.elm")
//!         .run()
//!         .expect("Failed to generate GenAccessors.elm");
//!
//!     println!("cargo:rerun-if-changed=build.rs");
//! }
//! ```

mod generator;

pub use generator::AccessorGenerator;

/// Create a new accessor generator with default settings.
pub fn generate_accessors() -> AccessorGenerator {
    AccessorGenerator::new()
}

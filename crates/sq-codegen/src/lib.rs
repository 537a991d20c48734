//! sq-codegen - C# code generation for sqlinity
//!
//! Renders one static class per migration (id, name, up and down SQL as
//! string constants) and a `MigrationRegistry` listing them in parse order,
//! using minijinja templates embedded in the crate.

pub mod environment;
pub mod error;
pub mod filters;
pub mod generator;

pub use environment::CodegenEnvironment;
pub use error::{CodegenError, CodegenResult};
pub use generator::{
    assign_class_names, generate_migrations, generate_registry, Generator, REGISTRY_FILE_NAME,
};

//! # Balsamic
//!
//! Builds Pkl source text from a typed syntax tree. Trees are assembled in
//! code (or deserialized from JSON) and rendered with exact spacing and
//! indentation; a [`Project`] collects several modules into an in-memory
//! file tree.

pub mod ast;
pub mod memfs;
pub mod project;
pub mod renderer;

pub use ast::*;
pub use memfs::{clean_path, DirEntry, FsError, MemFs, Metadata};
pub use project::{PklModule, Project, MANIFEST_PATH};
pub use renderer::*;

#[cfg(test)]
mod tests;

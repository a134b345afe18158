pub mod assemble;
pub mod banner;
pub mod classify;
pub mod config;
pub mod contract;
pub mod generate;
pub mod registry;
pub mod source_tree;

pub use assemble::Assembler;
pub use config::ProjectConfig;
pub use contract::{AssembleError, AssemblyReport, GenerateError, SourceTree};
pub use generate::generate;
pub use source_tree::FsSourceTree;

//! Jenkinsfile Language Server Library
//!
//! Hover documentation for the sections and directives of declarative
//! Jenkins pipelines (`agent`, `stages`, `when`, ...).

mod document;
mod error;
mod hover;
pub mod keywords;
mod server;
pub mod word;

pub use server::JenkinsfileLanguageServer;

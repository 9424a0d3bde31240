//! Rail Fence Cipher Library
//!
//! This library provides the fence engine (encrypt, decrypt, render), the
//! session state machine behind the interactive menu, and the text sources
//! and configuration used by the `railfence` binary.

pub mod cli;
pub mod commands;
pub mod config_file;
pub mod error;
pub mod fence;
pub mod session;
pub mod shell;
pub mod source;
pub mod types;

// Re-export main types for convenience
pub use config_file::FenceConfig;
pub use error::RailFenceError;
pub use fence::{FenceKey, KeyError, decrypt, encrypt, render};
pub use session::{Session, SessionError, SessionStage};
pub use shell::Shell;
pub use source::{SourceError, SourceLoader, TextSource};

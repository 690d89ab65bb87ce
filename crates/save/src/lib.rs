//! Run export for the feral spread simulator.
//!
//! An export is a 24-byte [`file_header`] followed by an lz4-compressed,
//! bitcode-encoded [`run_export::RunExport`].

mod atomic_write;
pub mod file_header;
pub mod run_export;
pub mod save_error;
mod save_plugin;

pub use run_export::{decode_export, encode_export, read_export, write_export, RunExport};
pub use save_error::SaveError;
pub use save_plugin::{ExportFinished, ExportPlugin, ExportRunEvent};

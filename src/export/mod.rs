//! Export module for Planshare
//!
//! Exports members with their derived status in multiple formats:
//! - CSV: one row per member (spreadsheet-compatible)
//! - JSON: machine-readable export with metadata
//! - YAML: human-readable export with metadata

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_members_csv;
pub use json::{export_members_json, ExportedMember, MemberExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_members_yaml;

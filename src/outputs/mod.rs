//! Output generation for a finished ranking.
//!
//! # Submodules
//!
//! - [`report`]: Renders the human-readable console report
//! - [`json`]: Writes the dated JSON artifact
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── result_06_05_2025_09_15.json
//! └── result_06_05_2025_18_40.json
//! ```

pub mod json;
pub mod report;

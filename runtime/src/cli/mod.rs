//! CLI subcommand implementations for the proweb-seo binary.

pub mod jsonld_cmd;
pub mod output;
pub mod render_cmd;
pub mod serve;
pub mod stats;
pub mod theme_cmd;
pub mod validate_cmd;

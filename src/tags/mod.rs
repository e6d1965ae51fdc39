pub mod format;
pub mod parser;
pub mod reconcile;
pub mod types;

pub use format::{format_map, format_tags};
pub use parser::parse_tags;
pub use reconcile::compare_tags;
pub use types::{Tag, TagDelta};

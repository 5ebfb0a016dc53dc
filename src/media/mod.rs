//! Media module for record representation and response parsing.

pub mod item;
pub mod parser;

pub use item::{MediaRecord, MediaType};
pub use parser::{extract_media_records, extract_user_id, select_best_variant};

pub mod slug;

pub use slug::{join_slug_path, slugify};

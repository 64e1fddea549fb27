/// Deepest ancestor chain the slug generator will walk before giving up.
pub const MAX_TAXON_DEPTH: usize = 32;

/// Separator placed between a parent slug and its child segment.
pub const SLUG_PATH_SEPARATOR: char = '/';

/// Slug used when nothing of a name survives slugification.
pub const EMPTY_SLUG_PLACEHOLDER: &str = "n-a";

/// Message returned when slug generation is attempted without a usable name.
pub const MISSING_NAME_MESSAGE: &str = "Cannot generate slug without a name";

mod listings_error;
mod renderer;
mod source;

pub use listings_error::ListingsError;
pub use renderer::{load_and_render, RenderedListings};
pub use source::{source_from_config, FileSource, ListingSource};

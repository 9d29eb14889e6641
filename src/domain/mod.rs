pub mod listing;
pub mod sites;

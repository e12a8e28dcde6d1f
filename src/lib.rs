pub mod cli;
pub mod config;
pub mod crossref;
pub mod error;
pub mod export;
pub mod normalize;
pub mod pictures;
pub mod resolver;
pub mod roster;
pub mod similarity;

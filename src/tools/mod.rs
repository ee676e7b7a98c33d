// Page access and text
pub mod clean;
pub mod page;

// Extraction
pub mod business;
pub mod schema;
pub mod scrape;

// Presentation
pub mod export;
pub mod filter;
pub mod navigate;

// Retrieval
pub mod fetch;

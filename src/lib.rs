pub mod error;
pub mod fetcher;
pub mod parser;
pub mod report;
pub mod stopwords;

pub use error::ScrapeError;
pub use parser::sections::{extract, ScrapeResult, SectionReport, TermCount};
pub use parser::tree::Node;

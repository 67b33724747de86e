pub mod analysis;

pub use analysis::PromptTemplate;

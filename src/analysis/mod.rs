mod engine;
mod parser;
mod prompt;
mod types;

pub use engine::RiskAnalyzer;
pub use parser::parse_analysis;
pub use prompt::build_prompt;
pub use types::{AnalysisResult, RiskRecord};

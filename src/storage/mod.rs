mod shared_analyzer;
#[cfg(test)]
mod tests;

pub use shared_analyzer::SharedAnalyzer;

pub mod football;
pub mod gemini;
pub mod oracle;
pub mod payload;

#[cfg(test)]
pub mod testing;

pub use football::FootballService;
pub use gemini::GeminiClient;
pub use oracle::{Oracle, OracleError};

//! Translation engine implementations

#[cfg(feature = "function")]
mod function;
#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "function")]
pub use function::FunctionEngine;
#[cfg(feature = "gemini")]
pub use gemini::GeminiEngine;

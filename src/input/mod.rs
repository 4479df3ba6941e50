mod line;
mod tokenizer;

pub use line::{EditorSource, LineSource, ReadResult, ScriptedSource};
pub use tokenizer::tokenize;

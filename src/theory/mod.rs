// Music Theory Primitives
// Chromatic alphabet, scale/chord qualities, note sequencing, string masking

pub mod types;
pub mod sequence;
pub mod string;

// Re-export main types
pub use types::{Cell, ChordType, Note, ScaleType, TheoryError, TheoryResult, BLANK};
pub use sequence::{derive_sequence, ChromaticAlphabet};
pub use string::render_string;

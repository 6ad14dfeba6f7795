// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits that define the core concepts
// of the classifier. Rules for this layer:
//
//   - NO Burn framework types allowed here
//   - NO file I/O or network calls
//   - Only plain structs, enums, and traits
//
// Keeping this layer pure means the vocabulary, the encoding
// contract, and the error model are unit-testable without
// pulling in a tensor backend.

// A labelled symptom entry and a finished prediction
pub mod entry;

// Typed error kinds for every failure the pipeline can surface
pub mod errors;

// Core abstractions (traits) that other layers implement
pub mod traits;

// The bag-of-words feature space
pub mod vocabulary;

// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust types describing what the pipeline works on.
//
// Rules for this layer:
//   - NO Burn framework types
//   - NO file I/O
//   - Only plain structs, enums and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The raw reviews/labels text pair
pub mod corpus;

// Positive/negative label and its integer encoding
pub mod sentiment;

// Core abstractions (traits) that other layers implement
pub mod traits;

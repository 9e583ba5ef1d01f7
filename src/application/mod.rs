// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// This layer coordinates the other layers to accomplish one goal
// per use case. It does no text processing itself and prints
// nothing; printing belongs to Layer 1.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Load a corpus, prepare splits, save vocabulary and report
pub mod prepare_use_case;

// Frame new reviews with a saved vocabulary
pub mod encode_use_case;

// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers. Rules for this layer:
//
//   - No tensor math or model code here (Layer 5)
//   - No printing here — notifications go through the
//     Presenter trait (Layer 1/infra render them)
//   - No direct file access (Layer 4)
//
// The pipeline state lives in an explicit AppContext that is
// handed to the use cases — never in ambient globals.

/// The startup pipeline: load dataset, build vocabulary, train
pub mod init_use_case;

/// Single-query inference on a ready context
pub mod diagnose_use_case;

/// The application context owning dataset, vocabulary, model
pub mod context;

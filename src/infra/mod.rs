// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any business
// layer. Currently just the console rendering of the
// notifications the core pushes through the Presenter trait —
// the core itself never prints.

/// Console implementation of the Presenter trait
pub mod presenter;

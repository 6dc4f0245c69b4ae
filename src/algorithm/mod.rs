//! Constraint-propagation and collapse engine

/// Candidate sets and the per-cell resolution state
pub mod candidates;
/// Model lifecycle, cooperative stepping, and batch solving
pub mod executor;
/// Worklist steps and single-step constraint propagation
pub mod propagation;
/// Minimum-remaining-candidates collapse selection
pub mod selection;

//! Property-based tests for the spanning tree strategies.
//!
//! Every strategy is checked against a reverse-delete oracle, and costs are
//! checked to be invariant under row order, endpoint order, and uniform
//! weight shifts.

mod equivalence;
mod metamorphic;
mod oracle;
mod strategies;
#[cfg(test)]
mod tests;
mod types;

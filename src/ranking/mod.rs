//! Rank Engine.
//!
//! Computes dense 1..N ranks per metric over a pool of teams and rebuilds
//! each member's record with pool-scoped ranks and pool averages. The
//! whole-league regular-season data arrives pre-ranked; this engine is
//! needed when the pool is restricted, e.g. to playoff participants.

pub mod pool;
pub mod rerank;

#[cfg(test)]
mod tests;

pub use pool::{PoolRanks, build_pool_ranks, build_pool_ranks_with, rank_pool};
pub use rerank::{RankMap, rerank};

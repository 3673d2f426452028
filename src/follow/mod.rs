//! Chain-follow module
//!
//! This module contains the segment chain and the direction-projection solver that
//! drags it behind a moving lead point.

pub mod chain;
pub mod solver;

pub use chain::{SegmentChain, SegmentChainBuilder};
pub use solver::{FollowResult, FollowSolver};

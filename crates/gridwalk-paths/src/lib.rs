//! Shortest-path search for grid maps.
//!
//! This crate computes uniform-cost (Dijkstra) distances over a
//! [`gridwalk_core::Grid`], with move legality decided by a caller-supplied
//! [`TraversalRule`]:
//!
//! - **Distance maps** from one or many sources ([`Search::distance_map`])
//! - **Single-target distances** with early exit ([`Search::distance`])
//! - **Reconstructed paths** ([`Search::path`], [`DistanceMap::path_to`])
//! - **Nearest of many candidates** ([`Search::nearest`],
//!   [`shortest_from_any`])
//!
//! Unreachable points are reported as `None`, never as a sentinel cost.
//!
//! # Rules
//!
//! | Rule | Legal when |
//! |---|---|
//! | [`Climb`] | destination is at most `max_rise` above the origin |
//! | [`Passable`] | destination satisfies a predicate |
//! | [`Any`] | always |
//! | closure `Fn(&Grid<V>, Point, Point) -> bool` | the closure says so |

mod distance;
#[cfg(test)]
mod fixtures;
mod options;
mod path;
mod rule;
mod search;

pub use distance::DistanceMap;
pub use options::{SearchDirection, SearchOptions};
pub use path::Path;
pub use rule::{Any, Climb, Passable, TraversalRule};
pub use search::{Search, shortest_from_any};

//! `inv-queue` — a binary max-heap ordered by a single comparison predicate.
//!
//! `std::collections::BinaryHeap` needs a total `Ord`.  The seeding rule only
//! says "a city with more roads out beats one with fewer", which is a strict
//! weak order with lots of ties, so elements here implement [`Priority`]
//! instead and ties come out in whatever order the heap produces.

pub mod heap;


pub use heap::{Priority, PriorityQueue};

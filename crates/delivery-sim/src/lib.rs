//! `delivery-sim` — route replay for the delivery route simulator.
//!
//! # Replay loop
//!
//! ```text
//! for (i, step) in route:
//!   ① Select   — agent = roster[i mod roster_len]  (round-robin cursor)
//!   ② Move     — apply the step's delta to the agent (Hold → no delta)
//!   ③ Record   — insert the agent's cell into the visited set
//! ```
//!
//! The whole replay runs eagerly inside the simulator's constructor; a
//! built [`DeliverySimulator`] is immutable and its queries are stable.
//!
//! # Quick-start
//!
//! ```rust
//! use delivery_sim::DeliverySimulator;
//!
//! let sim = DeliverySimulator::new("^>v<", 1);
//! assert_eq!(sim.delivery_count(), 3);
//! ```

pub mod observer;
pub mod roster;
pub mod sim;

#[cfg(test)]
mod tests;

pub use observer::{NoopObserver, RouteObserver};
pub use roster::Roster;
pub use sim::DeliverySimulator;

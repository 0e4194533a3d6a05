//! `delivery-core` — foundational types for the delivery route simulator.
//!
//! This crate is a dependency of every other `delivery-*` crate.  It has no
//! workspace-internal dependencies and minimal external ones (only
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`ids`]     | `AgentId`                                            |
//! | [`grid`]    | `GridPos`, `Direction`                               |
//! | [`route`]   | `Step`, `Route`, permissive/strict parsing           |
//! | [`error`]   | `DeliveryError`, `DeliveryResult`                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod error;
pub mod grid;
pub mod ids;
pub mod route;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{DeliveryError, DeliveryResult};
pub use grid::{Direction, GridPos};
pub use ids::AgentId;
pub use route::{Route, Step};

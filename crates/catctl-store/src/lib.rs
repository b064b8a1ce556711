//! Per-feature state containers for admin editing sessions.
//!
//! Each store owns a [`Slice`] of cached backend data plus a client handle,
//! and exposes explicit fetch/create/update/delete actions returning
//! `Result`. Fetches are guarded by a generation counter: of two
//! overlapping requests, only the later-started one's result is applied,
//! so a slow stale response can never clobber fresher data.

pub mod products;
pub mod promotions;
pub mod slice;
pub mod stock;

pub use products::ProductStore;
pub use promotions::PromotionStore;
pub use slice::{Slice, SliceState};
pub use stock::StockStore;

//! In-memory table store.
//!
//! [`MemoryStore`] stands in for the external relational store at the
//! engine's service boundary: it owns the five persisted tables, id
//! allocation, and the execution of each operation under a single lock
//! so concurrent requests for the same natural key serialize instead of
//! racing (two clock-ins for one employee/day cannot both succeed; two
//! approvals touching one balance row cannot lose an increment).

mod memory;

pub use memory::MemoryStore;

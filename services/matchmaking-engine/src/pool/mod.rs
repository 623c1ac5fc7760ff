//! Pool infrastructure module
//!
//! Contains the per-game waiting pool and the pending delivery buffer.

pub mod waiting_pool;
pub mod pending;

pub use waiting_pool::WaitingPool;
pub use pending::PendingDeliveries;

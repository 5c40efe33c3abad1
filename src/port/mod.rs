//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   cli ──▶ application::dispatch ──▶ port::outbound::OrderStore
//!                                              ▲
//!                                              │
//!                               adapter::outbound::sqlite
//! ```

pub mod outbound;

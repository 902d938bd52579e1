//! Core domain types
//!
//! Task identity and lifecycle status as the backend reports them. The
//! client never creates or mutates tasks itself; these types describe its
//! read-only view of server-side state.

pub mod task;

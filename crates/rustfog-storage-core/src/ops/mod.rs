//! Operation handlers.
//!
//! Handlers are implemented as methods on
//! [`StorageMock`](crate::provider::StorageMock), grouped by resource.

mod object;

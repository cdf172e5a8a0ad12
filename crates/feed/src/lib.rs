//! Feed controller: paged search, stale-response discard, facet narrowing and
//! scroll-driven page advance over a [`SearchBackend`].

pub mod error;
pub mod state;
pub mod backend;
pub mod scroll;
pub mod controller;
pub mod session;

pub use error::*;
pub use state::*;
pub use backend::*;
pub use scroll::*;
pub use controller::*;
pub use session::*;

//! Common containers and the utilities they need.

mod logging;

pub mod collections;
pub mod fmt;
pub mod prelude;

#[doc(hidden)]
pub use dyna_base::count_exprs as __count_exprs;

pub use crate::collections::{DynArr, ArrayError};
pub use crate::fmt::DisplayElement;
pub use crate::dynarr;

//! Diagnostics emitted by the containers.
//!
//! Everything in here compiles down to nothing when the `logging` feature is disabled.

use cfg_if::cfg_if;

use crate::collections::ArrayError;

cfg_if!{
    if #[cfg(feature = "logging")] {
        use dyna_logging::{LogCategory, log_verbose, log_warning};

        pub(crate) const DYNARR_LOG_CAT : LogCategory = LogCategory::new_with_sub("Common", "DynArr");
    }
}

/// Report that a container moved to a bigger buffer.
pub(crate) fn growth(old_capacity: usize, new_capacity: usize, len: usize) {
    cfg_if!{
        if #[cfg(feature = "logging")] {
            log_verbose!(DYNARR_LOG_CAT, "grew capacity from {old_capacity} to {new_capacity} (len {len})");
        } else {
            _ = (old_capacity, new_capacity, len);
        }
    }
}

/// Report an operation that was rejected before it touched the container.
pub(crate) fn rejected(operation: &str, err: &ArrayError) {
    cfg_if!{
        if #[cfg(feature = "logging")] {
            log_warning!(DYNARR_LOG_CAT, "{operation} rejected: {err}");
        } else {
            _ = (operation, err);
        }
    }
}

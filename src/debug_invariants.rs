//! Consistency checks shared by sets, domains and digital objects.

use crate::topology_error::TopologyError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Validate invariants and return the first violation encountered.
    fn validate_invariants(&self) -> Result<(), TopologyError>;

    /// Panic on the first violation in debug builds or when invariant
    /// checking is enabled through a feature.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "invariant check failed");
    }

    /// `true` when every invariant holds.
    ///
    /// Logs the violation at `warn` level before returning `false`.
    fn is_valid(&self) -> bool {
        match self.validate_invariants() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("invariant violation: {e}");
                false
            }
        }
    }
}

/// Run a fallible check and panic on error when invariant checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

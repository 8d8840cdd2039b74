//! Error types for the parslot dispatcher

use core::fmt;
use std::any::Any;

use crate::id::WorkerId;
use crate::slot::Slot;

/// Result type for dispatcher operations
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Errors that can surface from a `for_each` call or from
/// dispatcher construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A precondition failed before any worker was checked out
    InvalidArgument(&'static str),

    /// One or more slot actions failed; every failure is kept, in
    /// drain order
    ActionFailed(Vec<ActionError>),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::InvalidArgument(what) => {
                write!(f, "invalid argument: {}", what)
            }
            DispatchError::ActionFailed(errors) => {
                write!(f, "{} slot action(s) failed", errors.len())?;
                if let Some(first) = errors.first() {
                    write!(f, "; first: {}", first)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for DispatchError {}

/// Failure of the user action within one slot.
///
/// A failing action aborts the remainder of its own slot only; other
/// slots run to completion and the worker is still returned to the
/// pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionError {
    /// Worker that ran the failing slot
    pub worker: WorkerId,

    /// The slot that was being executed
    pub slot: Slot,

    /// Panic payload rendered as text
    pub message: String,
}

impl ActionError {
    /// Build an `ActionError` from a caught panic payload.
    ///
    /// `&str` and `String` payloads keep their text; anything else is
    /// reported as opaque.
    pub fn from_panic(worker: WorkerId, slot: Slot, payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "action panicked with non-string payload".to_string()
        };
        ActionError {
            worker,
            slot,
            message,
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "action failed in slot {} on {}: {}",
            self.slot, self.worker, self.message
        )
    }
}

impl std::error::Error for ActionError {}

impl From<ActionError> for DispatchError {
    fn from(e: ActionError) -> Self {
        DispatchError::ActionFailed(vec![e])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = DispatchError::InvalidArgument("workers must be at least 1");
        assert_eq!(
            format!("{}", e),
            "invalid argument: workers must be at least 1"
        );

        let action = ActionError {
            worker: WorkerId::new(2),
            slot: Slot::new(4, 8),
            message: "boom".to_string(),
        };
        assert_eq!(
            format!("{}", action),
            "action failed in slot [4..8) on w2: boom"
        );

        let e = DispatchError::ActionFailed(vec![action]);
        assert_eq!(
            format!("{}", e),
            "1 slot action(s) failed; first: action failed in slot [4..8) on w2: boom"
        );
    }

    #[test]
    fn test_from_panic_payloads() {
        let id = WorkerId::new(0);
        let slot = Slot::new(0, 1);

        let e = ActionError::from_panic(id, slot, Box::new("static text"));
        assert_eq!(e.message, "static text");

        let e = ActionError::from_panic(id, slot, Box::new("owned".to_string()));
        assert_eq!(e.message, "owned");

        let e = ActionError::from_panic(id, slot, Box::new(42_u32));
        assert_eq!(e.message, "action panicked with non-string payload");
    }

    #[test]
    fn test_action_error_conversion() {
        let action = ActionError {
            worker: WorkerId::new(1),
            slot: Slot::new(0, 2),
            message: "x".to_string(),
        };
        let e: DispatchError = action.into();
        assert!(matches!(e, DispatchError::ActionFailed(ref v) if v.len() == 1));
    }
}

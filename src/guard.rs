//! Fault barrier for registered functions.
//!
//! A registered function is arbitrary host code and may panic. The
//! evaluator calls it through [`call_guarded`], which converts an unwind
//! into a `Caught` value instead of letting it tear down the caller. A
//! process-wide panic hook is installed once to capture the panic site
//! and keep the default hook's backtrace spew off stderr while a guarded
//! call is in flight; panics outside guarded calls are passed through to
//! whatever hook was installed before.

use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use crate::error::FaultOrigin;

/// A panic intercepted at the function-call boundary.
#[derive(Debug)]
pub(crate) struct Caught {
    pub reason: String,
    pub origin: Option<FaultOrigin>,
}

thread_local! {
    // True only while this thread is inside a guarded call.
    static ARMED: Cell<bool> = Cell::new(false);
    // Panic site recorded by the hook for the guarded call in flight.
    static ORIGIN: RefCell<Option<FaultOrigin>> = RefCell::new(None);
}

static INSTALL_HOOK: Once = Once::new();

fn install_hook() {
    INSTALL_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !ARMED.with(|armed| armed.get()) {
                previous(info);
                return;
            }
            let origin = info.location().map(|loc| FaultOrigin {
                file: loc.file().to_string(),
                line: loc.line(),
            });
            ORIGIN.with(|cell| *cell.borrow_mut() = origin);
        }));
    });
}

/// Runs `f`, turning a panic into `Err(Caught)`. The panic payload's
/// message becomes `reason`; `origin` is filled in when the hook saw a
/// source location for it.
pub(crate) fn call_guarded<F>(f: F) -> Result<f64, Caught>
where
    F: FnOnce() -> f64,
{
    install_hook();
    // Save and restore so a guarded call made from inside a registered
    // function leaves the outer call armed.
    let was_armed = ARMED.with(|armed| armed.replace(true));
    ORIGIN.with(|cell| cell.borrow_mut().take());
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    ARMED.with(|armed| armed.set(was_armed));
    result.map_err(|payload| {
        let reason = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "unknown panic payload".to_string()
        };
        let origin = ORIGIN.with(|cell| cell.borrow_mut().take());
        Caught { reason, origin }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_passes_through() {
        let result = call_guarded(|| 2.5);
        assert_eq!(result.unwrap(), 2.5);
    }

    #[test]
    fn test_str_panic_is_caught() {
        let caught = call_guarded(|| panic!("boom")).unwrap_err();
        assert_eq!(caught.reason, "boom");
        let origin = caught.origin.expect("panic site should be recorded");
        assert!(origin.file.ends_with("guard.rs"));
        assert!(origin.line > 0);
    }

    #[test]
    fn test_formatted_panic_is_caught() {
        let caught = call_guarded(|| panic!("bad input {}", 3)).unwrap_err();
        assert_eq!(caught.reason, "bad input 3");
    }

    #[test]
    fn test_out_of_bounds_read_is_caught() {
        let args = vec![1.0_f64];
        let caught = call_guarded(|| args[5]).unwrap_err();
        assert!(caught.reason.contains("index out of bounds"));
    }

    #[test]
    fn test_guard_is_reusable_after_a_catch() {
        let _ = call_guarded(|| panic!("first"));
        let result = call_guarded(|| 7.0);
        assert_eq!(result.unwrap(), 7.0);
    }

    #[test]
    fn test_nested_guard_keeps_outer_call_armed() {
        let caught = call_guarded(|| {
            let inner = call_guarded(|| 1.0);
            assert_eq!(inner.unwrap(), 1.0);
            panic!("after inner")
        })
        .unwrap_err();
        assert_eq!(caught.reason, "after inner");
        let origin = caught.origin.expect("outer panic site should be recorded");
        assert!(origin.file.ends_with("guard.rs"));
    }

    #[test]
    fn test_nested_guard_inner_catch_does_not_poison_outer() {
        let caught = call_guarded(|| {
            let inner = call_guarded(|| panic!("inner")).unwrap_err();
            assert_eq!(inner.reason, "inner");
            panic!("outer")
        })
        .unwrap_err();
        assert_eq!(caught.reason, "outer");
        assert!(caught.origin.is_some());
    }
}

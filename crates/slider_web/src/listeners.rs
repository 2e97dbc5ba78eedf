//! Scoped DOM event-listener registrations.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Event, EventTarget};

use crate::mount::MountError;

/// An event listener that stays attached for exactly as long as the guard lives.
///
/// Dropping the guard removes the listener and frees the closure.
pub struct EventListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListenerGuard {
    /// Attaches `handler` for `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`MountError::Browser`] when the browser rejects the registration.
    pub fn attach(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, MountError> {
        let callback = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| MountError::Browser(format!("failed to attach `{event}` listener: {err:?}")))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Event name this guard listens to.
    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

impl std::fmt::Debug for EventListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventListenerGuard")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

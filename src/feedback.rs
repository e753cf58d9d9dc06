//! Outbound interaction notifications for audio and haptic collaborators.

/// What the user just did with the rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    /// Pointer went down on the rig.
    GestureStart,
    /// Pointer was released, ending a drag.
    GestureEnd,
}

/// Receives interaction notifications. Listeners must not block; the
/// controller never waits on them. Everything runs on the host's event
/// loop, so listeners need not be `Send`.
pub trait InteractionListener {
    fn on_interaction(&mut self, kind: InteractionKind);
}

impl<F> InteractionListener for F
where
    F: FnMut(InteractionKind),
{
    fn on_interaction(&mut self, kind: InteractionKind) {
        self(kind)
    }
}

/// Collection of listeners notified in registration order.
pub struct InteractionNotifier {
    listeners: Vec<Box<dyn InteractionListener>>,
}

impl Default for InteractionNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InteractionNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl InteractionNotifier {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn add_listener<L: InteractionListener + 'static>(&mut self, listener: L) {
        self.listeners.push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn notify(&mut self, kind: InteractionKind) {
        log::trace!("notify {kind:?} to {} listener(s)", self.listeners.len());
        for listener in &mut self.listeners {
            listener.on_interaction(kind);
        }
    }
}

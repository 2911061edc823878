//! Window-level listeners with scoped registration.
//!
//! Clicks, touches and Escape presses that reach the window (no task card
//! consumed them) clear the selection. `mount` registers those listeners
//! and hands back a [`Subscription`]; dropping it removes them again.

use crate::controller::{BoardController, BoardEvent};
use crate::input::Key;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, warn};

/// Kinds of window event a listener can register for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowEventKind {
    Click,
    KeyDown,
    TouchEnd,
}

/// An event that bubbled up to the window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WindowEvent {
    Click {
        #[serde(default)]
        default_prevented: bool,
    },
    KeyDown {
        key: Key,
        #[serde(default)]
        default_prevented: bool,
    },
    TouchEnd {
        #[serde(default)]
        default_prevented: bool,
    },
}

impl WindowEvent {
    pub fn click() -> Self {
        Self::Click {
            default_prevented: false,
        }
    }

    pub fn key_down(key: impl Into<Key>) -> Self {
        Self::KeyDown {
            key: key.into(),
            default_prevented: false,
        }
    }

    pub fn touch_end() -> Self {
        Self::TouchEnd {
            default_prevented: false,
        }
    }

    pub fn kind(&self) -> WindowEventKind {
        match self {
            Self::Click { .. } => WindowEventKind::Click,
            Self::KeyDown { .. } => WindowEventKind::KeyDown,
            Self::TouchEnd { .. } => WindowEventKind::TouchEnd,
        }
    }

    pub fn default_prevented(&self) -> bool {
        match self {
            Self::Click { default_prevented }
            | Self::KeyDown {
                default_prevented, ..
            }
            | Self::TouchEnd { default_prevented } => *default_prevented,
        }
    }

    /// The board event this window event stands for, if any
    pub fn to_board_event(&self) -> Option<BoardEvent> {
        if self.default_prevented() {
            return None;
        }
        match self {
            Self::Click { .. } => Some(BoardEvent::BackgroundClick),
            Self::KeyDown {
                key: Key::Escape, ..
            } => Some(BoardEvent::EscapeKey),
            Self::KeyDown { .. } => None,
            Self::TouchEnd { .. } => Some(BoardEvent::BackgroundTouchEnd),
        }
    }
}

/// Handle for a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&WindowEvent)>;

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    listeners: Vec<(ListenerId, WindowEventKind, Listener)>,
}

/// The event target listeners attach to.
///
/// Listeners run while the table is borrowed, so they must not add or
/// remove listeners themselves.
#[derive(Clone, Default)]
pub struct Window {
    table: Rc<RefCell<ListenerTable>>,
}

impl Window {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(
        &self,
        kind: WindowEventKind,
        listener: impl FnMut(&WindowEvent) + 'static,
    ) -> ListenerId {
        let mut table = self.table.borrow_mut();
        let id = ListenerId(table.next_id);
        table.next_id += 1;
        table.listeners.push((id, kind, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        remove_from(&self.table, id)
    }

    pub fn listener_count(&self) -> usize {
        self.table.borrow().listeners.len()
    }

    /// Deliver an event to every listener of its kind, in registration
    /// order. Returns how many listeners ran.
    pub fn dispatch(&self, event: &WindowEvent) -> usize {
        let kind = event.kind();
        let mut table = self.table.borrow_mut();
        let mut delivered = 0;
        for (_, listener_kind, listener) in table.listeners.iter_mut() {
            if *listener_kind == kind {
                listener(event);
                delivered += 1;
            }
        }
        delivered
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window").field("listeners", &self.listener_count()).finish()
    }
}

fn remove_from(table: &RefCell<ListenerTable>, id: ListenerId) -> bool {
    let mut table = table.borrow_mut();
    let before = table.listeners.len();
    table.listeners.retain(|(listener_id, _, _)| *listener_id != id);
    table.listeners.len() != before
}

/// Listeners registered by [`mount`]. Dropping the subscription removes
/// them from the window.
#[must_use = "dropping the subscription unregisters its listeners"]
#[derive(Debug)]
pub struct Subscription {
    window: Weak<RefCell<ListenerTable>>,
    ids: Vec<ListenerId>,
}

impl Subscription {
    /// Whether the window still exists to hold these listeners
    pub fn is_active(&self) -> bool {
        self.window.strong_count() > 0 && !self.ids.is_empty()
    }

    /// Remove the listeners now
    pub fn unsubscribe(self) {
        drop(self)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(table) = self.window.upgrade() else {
            return;
        };
        for id in self.ids.drain(..) {
            remove_from(&table, id);
        }
        debug!("window listeners removed");
    }
}

/// Register the window listeners that clear the controller's selection.
///
/// The listeners hold the controller weakly; once it is dropped they do
/// nothing.
pub fn mount(controller: &Rc<RefCell<BoardController>>, window: &Window) -> Subscription {
    let ids = [
        WindowEventKind::Click,
        WindowEventKind::KeyDown,
        WindowEventKind::TouchEnd,
    ]
    .into_iter()
    .map(|kind| {
        let controller = Rc::downgrade(controller);
        window.add_listener(kind, move |event| {
            let Some(board_event) = event.to_board_event() else {
                return;
            };
            let Some(controller) = controller.upgrade() else {
                return;
            };
            let result = controller.borrow_mut().handle(&board_event);
            if let Err(error) = result {
                warn!(%error, "window event rejected");
            }
        })
    })
    .collect();

    debug!("window listeners registered");
    Subscription {
        window: Rc::downgrade(&window.table),
        ids,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Board;

    #[test]
    fn test_escape_maps_to_board_event() {
        assert_eq!(
            WindowEvent::key_down("Escape").to_board_event(),
            Some(BoardEvent::EscapeKey)
        );
        assert_eq!(WindowEvent::key_down("a").to_board_event(), None);
    }

    #[test]
    fn test_prevented_events_map_to_nothing() {
        let event = WindowEvent::Click {
            default_prevented: true,
        };
        assert_eq!(event.to_board_event(), None);
    }

    #[test]
    fn test_dispatch_by_kind() {
        let window = Window::new();
        let hits = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&hits);
        let id = window.add_listener(WindowEventKind::Click, move |_| {
            *counter.borrow_mut() += 1;
        });

        assert_eq!(window.dispatch(&WindowEvent::click()), 1);
        assert_eq!(window.dispatch(&WindowEvent::touch_end()), 0);
        assert_eq!(*hits.borrow(), 1);

        assert!(window.remove_listener(id));
        assert!(!window.remove_listener(id));
        assert_eq!(window.dispatch(&WindowEvent::click()), 0);
    }

    #[test]
    fn test_subscription_outliving_window() {
        let window = Window::new();
        let controller = Rc::new(RefCell::new(BoardController::new(Board::new())));
        let subscription = mount(&controller, &window);
        assert!(subscription.is_active());
        drop(window);
        assert!(!subscription.is_active());
        // Dropping after the window is gone is harmless
        drop(subscription);
    }

    #[test]
    fn test_listener_releases_controller_after_handling() {
        let window = Window::new();
        let controller = Rc::new(RefCell::new(BoardController::new(Board::new())));
        let _subscription = mount(&controller, &window);

        assert_eq!(window.dispatch(&WindowEvent::key_down("Escape")), 1);
        assert_eq!(window.dispatch(&WindowEvent::click()), 1);
        assert!(controller.try_borrow_mut().is_ok());
        assert_eq!(Rc::strong_count(&controller), 1);
    }
}

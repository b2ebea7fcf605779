//! Shared page scroll signal.
//!
//! A [`ScrollHub`] owns at most one `scroll` listener on the window and fans
//! each offset out to its subscribers. The listener is attached when the
//! first subscriber arrives and detached when the last [`ScrollSubscription`]
//! is dropped, so mounting and unmounting components never leaks listeners.
//!
//! Components don't talk to the hub directly; they call [`track_scroll`],
//! which ties the subscription to the current reactive owner.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging::{debug_warn, warn};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::error::{LandingError, Result};

/// Origin of scroll offsets and scroll notifications.
pub trait ScrollSource {
    /// Current vertical scroll offset in CSS pixels.
    fn offset(&self) -> f64;

    /// Start calling `on_scroll` for every scroll event.
    fn attach(&mut self, on_scroll: Rc<dyn Fn()>) -> Result<()>;

    /// Stop calling the handler passed to [`Self::attach`].
    fn detach(&mut self) -> Result<()>;
}

/// `window` scroll events.
#[derive(Default)]
pub struct WindowScroll {
    listener: Option<Closure<dyn Fn()>>,
}

impl ScrollSource for WindowScroll {
    fn offset(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn attach(&mut self, on_scroll: Rc<dyn Fn()>) -> Result<()> {
        if self.listener.is_some() {
            return Ok(());
        }
        let window = web_sys::window().ok_or(LandingError::NoWindow)?;
        let listener = Closure::<dyn Fn()>::new(move || on_scroll());
        window
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            .map_err(|err| LandingError::listener("attach", &err))?;
        self.listener = Some(listener);
        Ok(())
    }

    fn detach(&mut self) -> Result<()> {
        let Some(listener) = self.listener.take() else {
            return Ok(());
        };
        let window = web_sys::window().ok_or(LandingError::NoWindow)?;
        window
            .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            .map_err(|err| LandingError::listener("detach", &err))
    }
}

impl Drop for WindowScroll {
    fn drop(&mut self) {
        // The closure must not outlive its registration
        if let Err(err) = self.detach() {
            warn!("{err}");
        }
    }
}

type Subscriber = Rc<dyn Fn(f64)>;

struct HubState {
    source: Box<dyn ScrollSource>,
    subscribers: Vec<(u64, Subscriber)>,
    next_id: u64,
    attached: bool,
}

/// Reference-counted owner of the page scroll listener.
///
/// Cloning is cheap; clones share the same listener and subscriber list.
#[derive(Clone)]
pub struct ScrollHub {
    state: Rc<RefCell<HubState>>,
}

impl ScrollHub {
    pub fn new(source: impl ScrollSource + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(HubState {
                source: Box::new(source),
                subscribers: Vec::new(),
                next_id: 0,
                attached: false,
            })),
        }
    }

    /// Hub backed by the browser window.
    pub fn window() -> Self {
        Self::new(WindowScroll::default())
    }

    /// Current offset, clamped to be non-negative.
    pub fn offset(&self) -> f64 {
        normalize(self.state.borrow().source.offset())
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().subscribers.len()
    }

    /// Whether the underlying source currently has a listener installed.
    pub fn is_attached(&self) -> bool {
        self.state.borrow().attached
    }

    /// Call `on_offset` with the page offset on every scroll event until the
    /// returned subscription is dropped.
    ///
    /// When the source can't be attached nothing is registered and the error
    /// is returned.
    pub fn subscribe(&self, on_offset: impl Fn(f64) + 'static) -> Result<ScrollSubscription> {
        let mut state = self.state.borrow_mut();
        if !state.attached {
            let weak = Rc::downgrade(&self.state);
            let on_scroll: Rc<dyn Fn()> = Rc::new(move || {
                if let Some(state) = weak.upgrade() {
                    dispatch(&state);
                }
            });
            state.source.attach(on_scroll)?;
            state.attached = true;
        }

        let id = state.next_id;
        state.next_id += 1;
        state.subscribers.push((id, Rc::new(on_offset)));

        Ok(ScrollSubscription {
            state: Rc::clone(&self.state),
            id,
        })
    }
}

/// Reads the offset once and hands it to every subscriber.
///
/// No borrow is held while subscribers run, so they may subscribe or drop
/// subscriptions themselves.
fn dispatch(state: &RefCell<HubState>) {
    let (offset, subscribers): (f64, Vec<Subscriber>) = {
        let state = state.borrow();
        let subscribers = state
            .subscribers
            .iter()
            .map(|(_, subscriber)| Rc::clone(subscriber))
            .collect();
        (normalize(state.source.offset()), subscribers)
    };

    for subscriber in subscribers {
        subscriber(offset);
    }
}

/// Overscroll bounce reports negative offsets on some browsers.
fn normalize(offset: f64) -> f64 {
    if offset.is_finite() { offset.max(0.0) } else { 0.0 }
}

/// Live registration with a [`ScrollHub`]. Dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct ScrollSubscription {
    state: Rc<RefCell<HubState>>,
    id: u64,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.subscribers.retain(|(id, _)| *id != self.id);

        if state.subscribers.is_empty() && state.attached {
            state.attached = false;
            if let Err(err) = state.source.detach() {
                warn!("{err}");
            }
        }
    }
}

/// Track the page offset for the lifetime of the current reactive owner.
///
/// The signal starts at the offset seen at mount. Repeated identical offsets
/// don't notify. If the hub can't listen the signal simply never changes.
pub fn track_scroll(hub: &ScrollHub) -> ReadSignal<f64> {
    let (offset, set_offset) = signal(hub.offset());

    match hub.subscribe(move |next| {
        if offset.get_untracked() != next {
            set_offset.set(next);
        }
    }) {
        Ok(subscription) => {
            let subscription = StoredValue::new_local(subscription);
            on_cleanup(move || subscription.dispose());
        }
        Err(err) => warn!("scroll tracking disabled: {err}"),
    }

    offset
}

/// Share one hub with every component below the current owner.
pub fn provide_scroll_hub(hub: ScrollHub) {
    provide_context(StoredValue::new_local(hub));
}

/// Hub from context, or a fresh window-backed one.
pub fn use_scroll_hub() -> ScrollHub {
    match use_context::<StoredValue<ScrollHub, LocalStorage>>() {
        Some(hub) => hub.get_value(),
        None => {
            debug_warn!("no ScrollHub in context, listening on window directly");
            ScrollHub::window()
        }
    }
}

/// Scroll source driven by hand, for tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct ManualState {
        offset: Cell<f64>,
        handler: RefCell<Option<Rc<dyn Fn()>>>,
        attaches: Cell<usize>,
        fail_attach: Cell<bool>,
    }

    #[derive(Clone, Default)]
    pub(crate) struct ManualScroll {
        state: Rc<ManualState>,
    }

    impl ManualScroll {
        pub(crate) fn failing() -> Self {
            let scroll = Self::default();
            scroll.state.fail_attach.set(true);
            scroll
        }

        /// Move the page and fire a scroll event if anyone listens.
        pub(crate) fn scroll_to(&self, offset: f64) {
            self.state.offset.set(offset);
            let handler = self.state.handler.borrow().clone();
            if let Some(handler) = handler {
                handler();
            }
        }

        pub(crate) fn is_listening(&self) -> bool {
            self.state.handler.borrow().is_some()
        }

        pub(crate) fn attach_count(&self) -> usize {
            self.state.attaches.get()
        }
    }

    impl ScrollSource for ManualScroll {
        fn offset(&self) -> f64 {
            self.state.offset.get()
        }

        fn attach(&mut self, on_scroll: Rc<dyn Fn()>) -> Result<()> {
            if self.state.fail_attach.get() {
                return Err(LandingError::Listener {
                    action: "attach",
                    message: "refused".into(),
                });
            }
            self.state.attaches.set(self.state.attaches.get() + 1);
            *self.state.handler.borrow_mut() = Some(on_scroll);
            Ok(())
        }

        fn detach(&mut self) -> Result<()> {
            self.state.handler.borrow_mut().take();
            Ok(())
        }
    }
}

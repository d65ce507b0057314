//! Listener wiring for the augmented page. The closures live in thread-local
//! slots for as long as the page does; wiring again drops the old set.

use std::cell::RefCell;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, HtmlInputElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, TouchEvent,
};

use shugiin_shared::config::REVEAL_THRESHOLD;
use shugiin_shared::gesture::SwipeTracker;

use crate::accessibility::set_skip_link_focused;
use crate::animation::reveal;
use crate::augmenter::Augmented;
use crate::log;
use crate::modal::{PartyModal, close_party_details, show_party_details};
use crate::page::web::WebPage;
use crate::search::apply_filter;
use crate::table::clicked_party_name;

type Handler = Closure<dyn FnMut(Event)>;
type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct Binding {
    target: EventTarget,
    event: &'static str,
    handler: Handler,
}

impl Binding {
    fn detach(self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.handler.as_ref().unchecked_ref());
    }
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

struct PageBindings {
    listeners: Vec<Binding>,
    reveal: Option<RevealObserver>,
}

impl PageBindings {
    const fn new() -> Self {
        Self {
            listeners: Vec::new(),
            reveal: None,
        }
    }
}

thread_local! {
    static PAGE_BINDINGS: RefCell<PageBindings> = const { RefCell::new(PageBindings::new()) };
    // Listeners of the open details overlay. Replaced on the next open rather
    // than dropped from inside their own callbacks.
    static MODAL_BINDINGS: RefCell<Vec<Binding>> = const { RefCell::new(Vec::new()) };
    static SWIPE: RefCell<SwipeTracker> = RefCell::new(SwipeTracker::default());
}

fn listen<F>(target: &Element, event: &'static str, passive: Option<bool>, handler: F) -> Option<Binding>
where
    F: FnMut(Event) + 'static,
{
    let handler = Closure::<dyn FnMut(Event)>::new(handler);
    let target: EventTarget = target.clone().into();
    let added = match passive {
        Some(passive) => {
            let options = AddEventListenerOptions::new();
            options.set_passive(passive);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                handler.as_ref().unchecked_ref(),
                &options,
            )
        }
        None => target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref()),
    };
    if let Err(e) = added {
        log::warn(&format!("Failed to listen for {event}: {e:?}"));
        return None;
    }
    Some(Binding {
        target,
        event,
        handler,
    })
}

/// Attach every listener the augmentation pass asked for.
pub fn wire(page: &WebPage, augmented: Augmented<Element>) {
    let mut listeners = Vec::new();

    if let Some(search) = augmented.search {
        let page = page.clone();
        let count = search.count.clone();
        listeners.extend(listen(&search.input, "input", None, move |e: Event| {
            let query = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.value())
                .unwrap_or_default();
            apply_filter(&page, &query, &count);
        }));
    }

    for row in &augmented.rows {
        let page = page.clone();
        let clicked = row.clone();
        listeners.extend(listen(row, "click", None, move |_e: Event| {
            if let Some(name) = clicked_party_name(&page, &clicked) {
                open_modal(&page, &name);
            }
        }));
    }

    if let Some(link) = augmented.skip_link {
        for (event, focused) in [("focus", true), ("blur", false)] {
            let page = page.clone();
            let focus_target = link.clone();
            listeners.extend(listen(&link, event, None, move |_e: Event| {
                set_skip_link_focused(&page, &focus_target, focused);
            }));
        }
    }

    if let Some(table) = augmented.swipe_target {
        listeners.extend(wire_swipe(&table));
    }

    let reveal = observe_reveal(page, &augmented.reveal);

    PAGE_BINDINGS.with(|slot| {
        let mut slot = slot.borrow_mut();
        for old in slot.listeners.drain(..) {
            old.detach();
        }
        if let Some(old) = slot.reveal.take() {
            old.observer.disconnect();
        }
        slot.listeners = listeners;
        slot.reveal = reveal;
    });
}

fn first_touch(e: &Event) -> Option<(f64, f64)> {
    let touch = e.dyn_ref::<TouchEvent>()?.touches().item(0)?;
    Some((f64::from(touch.page_x()), f64::from(touch.page_y())))
}

fn wire_swipe(table: &Element) -> Vec<Binding> {
    let start = listen(table, "touchstart", Some(true), |e: Event| {
        if let Some((x, y)) = first_touch(&e) {
            SWIPE.with(|swipe| swipe.borrow_mut().touch_start(x, y));
        }
    });
    // Not passive: horizontal swipes cancel the page's vertical scroll.
    let moved = listen(table, "touchmove", Some(false), |e: Event| {
        let Some((x, y)) = first_touch(&e) else {
            return;
        };
        if SWIPE.with(|swipe| swipe.borrow().touch_move(x, y)) {
            e.prevent_default();
        }
    });
    let end = listen(table, "touchend", Some(true), |_e: Event| {
        SWIPE.with(|swipe| swipe.borrow_mut().touch_end());
    });
    [start, moved, end].into_iter().flatten().collect()
}

fn observe_reveal(page: &WebPage, targets: &[Element]) -> Option<RevealObserver> {
    if targets.is_empty() {
        return None;
    }
    let page = page.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                reveal(&page, &target);
                observer.unobserve(&target);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn(&format!("IntersectionObserver unavailable: {e:?}"));
                return None;
            }
        };
    for target in targets {
        observer.observe(target);
    }
    Some(RevealObserver {
        observer,
        _callback: callback,
    })
}

fn open_modal(page: &WebPage, party_name: &str) {
    let Some(modal) = show_party_details(page, party_name) else {
        return;
    };

    let mut listeners = Vec::new();
    {
        let page = page.clone();
        let handles = modal.clone();
        listeners.extend(listen(&modal.close_button, "click", None, move |_e: Event| {
            close_party_details(&page, &handles);
        }));
    }
    {
        let page = page.clone();
        let handles: PartyModal<Element> = modal.clone();
        listeners.extend(listen(&modal.overlay, "click", None, move |e: Event| {
            // Only clicks on the backdrop itself, not inside the dialog.
            let on_backdrop = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|t| t == handles.overlay);
            if on_backdrop {
                close_party_details(&page, &handles);
            }
        }));
    }

    MODAL_BINDINGS.with(|slot| {
        for old in slot.replace(listeners) {
            old.detach();
        }
    });
}

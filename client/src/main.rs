mod accessibility;
mod animation;
mod augmenter;
mod events;
mod log;
mod mobile;
mod modal;
mod page;
mod search;
mod statistics;
mod table;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use shugiin_bridge::{listen_for_toggles, load_settings};
use shugiin_shared::Settings;
use shugiin_shared::config::is_target_host;

use crate::augmenter::{apply_toggle, modernize};
use crate::page::Page;
use crate::page::web::WebPage;

thread_local! {
    // In-memory copy of the stored settings, updated by relayed toggles.
    static SETTINGS: RefCell<Settings> = RefCell::new(Settings::default());
    static DOM_READY: RefCell<Option<Closure<dyn FnMut()>>> = const { RefCell::new(None) };
}

fn main() {
    console_error_panic_hook::set_once();
    let Some(page) = WebPage::current() else {
        return;
    };
    if !is_target_host(&page.hostname()) {
        return;
    }

    let toggle_page = page.clone();
    if let Err(e) = listen_for_toggles(move |message| {
        SETTINGS.with(|settings| apply_toggle(&toggle_page, &mut settings.borrow_mut(), message));
    }) {
        log::warn(&format!("Toggle relay unavailable: {e}"));
    }

    spawn_local(async move {
        match load_settings().await {
            Ok(settings) => SETTINGS.with(|slot| *slot.borrow_mut() = settings),
            Err(e) => log::log(&format!("設定の読み込みに失敗しました: {e}")),
        }
        when_dom_ready(page, run);
    });
}

fn run(page: &WebPage) {
    let settings = SETTINGS.with(|slot| *slot.borrow());
    let Some(augmented) = modernize(page, &settings) else {
        return;
    };
    events::wire(page, augmented);
    log::log("衆議院サイトがモダナイズされました！");
}

fn when_dom_ready(page: WebPage, f: fn(&WebPage)) {
    if page.document().ready_state() != "loading" {
        f(&page);
        return;
    }
    let document = page.document().clone();
    let callback = Closure::once(move || f(&page));
    if document
        .add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())
        .is_ok()
    {
        DOM_READY.with(|slot| *slot.borrow_mut() = Some(callback));
    }
}

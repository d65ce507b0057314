use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use shugiin_bridge::{
    active_tab, load_settings, reload_active_tab, send_to_active_tab, store_setting,
};
use shugiin_shared::{SettingKey, Settings, ToggleMessage};

use crate::status::{
    SiteStatus, next_enabled, popup_background, status_color, status_text, toggle_label,
};

/// Write one setting, then relay it to the open page. Either step failing is
/// logged and otherwise ignored.
fn change_setting(settings: RwSignal<Settings>, key: SettingKey, value: bool) {
    settings.update(|s| s.set(key, value));
    spawn_local(async move {
        if let Err(e) = store_setting(key, value).await {
            web_sys::console::warn_1(&format!("Saving {} failed: {e}", key.storage_key()).into());
        }
        if let Some(message) = ToggleMessage::for_setting(key, value)
            && let Err(e) = send_to_active_tab(message).await
        {
            web_sys::console::log_1(&format!("Toggle not delivered: {e}").into());
        }
    });
}

async fn reload_and_close() {
    if let Err(e) = reload_active_tab().await {
        web_sys::console::warn_1(&format!("Reload failed: {e}").into());
    }
    if let Some(window) = web_sys::window() {
        window.close().ok();
    }
}

#[component]
pub fn App() -> impl IntoView {
    let settings: RwSignal<Settings> = RwSignal::new(Settings::default());
    let site: RwSignal<Option<SiteStatus>> = RwSignal::new(None);

    spawn_local(async move {
        match load_settings().await {
            Ok(stored) => settings.set(stored),
            Err(e) => web_sys::console::warn_1(&format!("Settings unavailable: {e}").into()),
        }
    });
    spawn_local(async move {
        let status = match active_tab().await {
            Ok(tab) => SiteStatus::from_url(tab.url.as_deref()),
            Err(e) => {
                web_sys::console::warn_1(&format!("Active tab unavailable: {e}").into());
                SiteStatus::Other
            }
        };
        site.set(Some(status));
    });

    Effect::new(move || {
        let dark = settings.with(|s| s.dark_mode);
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            body.style()
                .set_property("background", popup_background(dark))
                .ok();
        }
    });

    let enabled = move || settings.with(|s| s.enabled);

    let on_toggle_extension = move |_| {
        spawn_local(async move {
            let stored = match load_settings().await {
                Ok(stored) => Some(stored),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Settings unavailable: {e}").into());
                    None
                }
            };
            let next = next_enabled(stored.as_ref(), settings.with_untracked(|s| s.enabled));
            if let Err(e) = store_setting(SettingKey::Enabled, next).await {
                web_sys::console::warn_1(&format!("Saving extensionEnabled failed: {e}").into());
                return;
            }
            settings.update(|s| s.enabled = next);
            reload_and_close().await;
        });
    };

    view! {
        <div class="popup-container">
            <div class="status">
                <span
                    class="status-dot"
                    style:background=move || status_color(enabled())
                    style:animation=move || if enabled() { "" } else { "none" }
                />
                <span id="status-text">{move || status_text(enabled())}</span>
            </div>
            <div class="controls">
                <button
                    id="toggle-extension"
                    class="toggle-btn"
                    class:active=enabled
                    on:click=on_toggle_extension
                >
                    {move || toggle_label(enabled())}
                </button>
                <button
                    id="reload-page"
                    class="reload-btn"
                    on:click=move |_| spawn_local(reload_and_close())
                >
                    "ページを再読み込み"
                </button>
            </div>
            <div class="settings">
                <SettingRow id="dark-mode" label="ダークモード" key=SettingKey::DarkMode settings=settings />
                <SettingRow id="animations" label="アニメーション" key=SettingKey::Animations settings=settings />
                <SettingRow id="statistics" label="統計情報を表示" key=SettingKey::Statistics settings=settings />
            </div>
            <div
                id="current-url"
                class="current-url"
                style:color=move || site.get().map(SiteStatus::color).unwrap_or_default()
            >
                {move || site.get().map(SiteStatus::text).unwrap_or("確認中...")}
            </div>
        </div>
    }
}

#[component]
fn SettingRow(
    id: &'static str,
    label: &'static str,
    key: SettingKey,
    settings: RwSignal<Settings>,
) -> impl IntoView {
    let on_change = move |e: leptos::ev::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        change_setting(settings, key, input.checked());
    };

    view! {
        <label class="setting-item">
            <span class="setting-label">{label}</span>
            <input
                type="checkbox"
                id=id
                prop:checked=move || settings.with(|s| s.get(key))
                on:change=on_change
            />
        </label>
    }
}

use shugiin_shared::{Settings, ToggleMessage};

use crate::accessibility::improve_accessibility;
use crate::animation::{prepare_reveal, set_animations_enabled};
use crate::mobile::optimize_for_mobile;
use crate::page::Page;
use crate::search::{SearchBar, insert_search_bar};
use crate::statistics::{insert_seat_chart, insert_statistics, set_statistics_visible};
use crate::table::modernize_table;

pub const ROOT_CLASS: &str = "shugiin-modernizer";
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Nodes created or found during the augmentation pass that still need event
/// listeners.
pub struct Augmented<N> {
    pub search: Option<SearchBar<N>>,
    pub rows: Vec<N>,
    pub skip_link: Option<N>,
    pub reveal: Vec<N>,
    pub swipe_target: Option<N>,
}

/// One augmentation pass over the page. Each feature checks for the table on
/// its own, so a page without one still gets whatever does not need it.
pub fn modernize<P: Page>(page: &P, settings: &Settings) -> Option<Augmented<P::Node>> {
    if !settings.enabled {
        return None;
    }
    if let Some(body) = page.body() {
        page.add_class(&body, ROOT_CLASS);
    }

    let search = insert_search_bar(page);
    let rows = modernize_table(page);
    if settings.statistics_enabled {
        insert_statistics(page);
        insert_seat_chart(page);
    }
    let skip_link = improve_accessibility(page);
    let reveal = if settings.animations_enabled {
        prepare_reveal(page)
    } else {
        Vec::new()
    };
    let swipe_target = optimize_for_mobile(page);
    if settings.dark_mode {
        set_dark_mode(page, true);
    }

    Some(Augmented {
        search,
        rows,
        skip_link,
        reveal,
        swipe_target,
    })
}

pub fn set_dark_mode<P: Page>(page: &P, enabled: bool) {
    let Some(body) = page.body() else {
        return;
    };
    if enabled {
        page.add_class(&body, DARK_MODE_CLASS);
    } else {
        page.remove_class(&body, DARK_MODE_CLASS);
    }
}

/// Apply a relayed toggle to the page and to the in-memory settings copy.
/// The persisted store is the popup's to write.
pub fn apply_toggle<P: Page>(page: &P, settings: &mut Settings, message: ToggleMessage) {
    message.apply_to(settings);
    match message {
        ToggleMessage::DarkMode(on) => set_dark_mode(page, on),
        ToggleMessage::Animations(on) => set_animations_enabled(page, on),
        ToggleMessage::Statistics(on) => set_statistics_visible(page, on),
    }
}

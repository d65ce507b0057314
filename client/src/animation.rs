use shugiin_shared::config::{REVEAL_OFFSET, REVEAL_TRANSITION};

use crate::page::Page;

/// Classes marking elements that fade or slide in.
pub const ANIMATED_CLASSES: [&str; 2] = ["fade-in", "slide-in"];

fn animated_elements<P: Page>(page: &P) -> Vec<P::Node> {
    ANIMATED_CLASSES
        .iter()
        .flat_map(|class| page.elements_with_class(class))
        .collect()
}

/// Put every animated element in its pre-reveal state. The caller observes the
/// returned nodes and calls [`reveal`] once each scrolls into view.
pub fn prepare_reveal<P: Page>(page: &P) -> Vec<P::Node> {
    let elements = animated_elements(page);
    for el in &elements {
        page.set_style(el, "opacity", "0");
        page.set_style(el, "transform", REVEAL_OFFSET);
        page.set_style(el, "transition", REVEAL_TRANSITION);
    }
    elements
}

pub fn reveal<P: Page>(page: &P, el: &P::Node) {
    page.set_style(el, "opacity", "1");
    page.set_style(el, "transform", "translateY(0)");
}

/// Live toggle: clearing the inline `animation` lets the stylesheet's keyframes
/// run again; `none` stops them.
pub fn set_animations_enabled<P: Page>(page: &P, enabled: bool) {
    for el in animated_elements(page) {
        page.set_style(&el, "animation", if enabled { "" } else { "none" });
    }
}

use shugiin_shared::markup::escape_html;

use crate::page::{Page, create_with_class};

const OVERLAY_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
     background: rgba(0, 0, 0, 0.8); display: flex; justify-content: center; \
     align-items: center; z-index: 10000; animation: fadeIn 0.3s ease;";

const DIALOG_STYLE: &str = "background: white; border-radius: 15px; padding: 2rem; \
     max-width: 500px; width: 90%; box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3); \
     animation: slideIn 0.3s ease;";

const CLOSE_BUTTON_STYLE: &str = "background: linear-gradient(45deg, #3498db, #9b59b6); \
     color: white; border: none; padding: 0.75rem 2rem; border-radius: 25px; \
     cursor: pointer; font-weight: 600; transition: all 0.3s ease;";

/// Handles to an open details overlay.
#[derive(Clone)]
pub struct PartyModal<N> {
    pub overlay: N,
    pub close_button: N,
}

/// Open the (placeholder) details overlay for `party_name`.
pub fn show_party_details<P: Page>(page: &P, party_name: &str) -> Option<PartyModal<P::Node>> {
    let body = page.body()?;

    let overlay = create_with_class(page, "div", "party-modal")?;
    page.set_attribute(&overlay, "style", OVERLAY_STYLE);
    page.set_attribute(&overlay, "role", "dialog");
    page.set_attribute(&overlay, "aria-modal", "true");

    let dialog = create_with_class(page, "div", "party-modal-dialog")?;
    page.set_attribute(&dialog, "style", DIALOG_STYLE);
    page.set_inner_html(
        &dialog,
        &format!(
            r#"<h3 style="margin-top: 0; color: #2c3e50;">{}</h3><p style="color: #7f8c8d; margin-bottom: 2rem;">この会派の詳細情報を表示する機能を実装予定です。<br>現在は模擬表示となっています。</p>"#,
            escape_html(party_name)
        ),
    );

    let close_button = create_with_class(page, "button", "party-modal-close")?;
    page.set_attribute(&close_button, "type", "button");
    page.set_attribute(&close_button, "style", CLOSE_BUTTON_STYLE);
    page.set_text(&close_button, "閉じる");

    page.append_child(&dialog, &close_button);
    page.append_child(&overlay, &dialog);
    page.append_child(&body, &overlay);

    Some(PartyModal {
        overlay,
        close_button,
    })
}

pub fn close_party_details<P: Page>(page: &P, modal: &PartyModal<P::Node>) {
    page.remove(&modal.overlay);
}

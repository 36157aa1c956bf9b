use dashboard_core::Notice;

use crate::tree::{Element, Node};

pub fn notice_html(notice: &Notice) -> String {
    let (class, role) = if notice.is_error() {
        ("notice notice-error", "alert")
    } else {
        ("notice notice-info", "status")
    };
    Element::new("div")
        .class(class)
        .attr("role", role)
        .text(notice.text())
        .to_html()
}

/// Wraps collaborator content in the closable frame shared by every panel.
pub fn panel_html(title: &str, body: Node) -> String {
    Element::new("div")
        .class("panel")
        .attr("role", "dialog")
        .attr("aria-label", title)
        .child(
            Element::new("div")
                .class("panel-header")
                .child(Element::new("h2").text(title))
                .child(
                    Element::new("button")
                        .attr("type", "button")
                        .class("panel-close")
                        .attr("aria-label", "Close")
                        .attr("onclick", "closeOutput()")
                        .text("×"),
                ),
        )
        .child(Element::new("div").class("panel-body").child(body))
        .to_html()
}

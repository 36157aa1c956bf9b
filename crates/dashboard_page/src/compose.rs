use dashboard_core::{
    trigger_for, Config, DashboardView, ExtraOption, NavAction, Trigger, OPTION_FIELD,
    VIDEO_URL_FIELD,
};
use dashboard_logging::dash_debug;

use crate::script::client_script;
use crate::style::STYLE;
use crate::tree::{Element, Node, PageTree};

pub const MAIN_REGION_ID: &str = "main";
/// Region inside main that receives panels and notices.
pub const OUTPUT_REGION_ID: &str = "output";
pub const FOOTER_LINK: &str = "https://github.com/Evil0ctal/TikTok_Download_API";

const THEME_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="5"></circle><path d="M12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42"></path></svg>"#;

const FEATURES: [(&str, &str, &str); 4] = [
    ("🎬", "Watermark removal", "Download high quality videos without watermarks"),
    ("🔄", "Batch processing", "Handle several videos in one go"),
    ("⚡", "Fast processing", "Quick servers for instant downloads"),
    ("📱", "Mobile support", "Works on every device"),
];

/// Composes the whole dashboard for one session.
///
/// The head carries the favicon link and referrer policy exactly once; the page brings no
/// chrome of its own besides the footer composed here.
pub fn render(config: &Config, view: &DashboardView, session_id: &str) -> PageTree {
    dash_debug!(
        "Composing page theme={} mode={}",
        config.theme(),
        view.theme.attr()
    );

    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(Element::new("style").child(Node::Raw(STYLE.to_string())))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title").text(config.tab_title()))
        .child(
            Element::new("meta")
                .attr("name", "description")
                .attr("content", config.description()),
        )
        .child(
            Element::new("meta")
                .attr("name", "referrer")
                .attr("content", "no-referrer"),
        )
        .child(
            Element::new("link")
                .attr("rel", "icon")
                .attr("type", "image/png")
                .attr("href", config.favicon_url()),
        );

    let main = Element::new("main")
        .id(MAIN_REGION_ID)
        .child(theme_toggle())
        .child(header(config))
        .child(nav_bar())
        .child(primary_form(view))
        .child(feature_section())
        .child(option_form(view))
        .child(
            Element::new("section")
                .id(OUTPUT_REGION_ID)
                .attr("aria-live", "polite"),
        )
        .child(footer());

    let mut body_class = format!("theme-{}", class_token(config.theme()));
    if view.dark_mode() {
        body_class.push_str(" dark-mode");
    }
    let body = Element::new("body")
        .class(body_class)
        .attr("data-session", session_id)
        .child(main)
        .child(Element::new("script").child(Node::Raw(client_script())));

    PageTree::new(
        Element::new("html")
            .attr("lang", "en")
            .attr("data-theme", view.theme.attr())
            .child(head)
            .child(body),
    )
}

fn theme_toggle() -> Element {
    Element::new("button")
        .attr("type", "button")
        .class("theme-toggle")
        .attr("aria-label", "Toggle dark mode")
        .attr("onclick", "toggleDarkMode()")
        .child(Node::Raw(THEME_ICON.to_string()))
}

fn header(config: &Config) -> Element {
    Element::new("header")
        .class("header-container")
        .child(
            Element::new("img")
                .attr("src", config.favicon_url())
                .class("logo")
                .attr("alt", "logo"),
        )
        .child(Element::new("h1").text(config.tab_title()))
        .child(Element::new("p").text(config.description()))
}

fn nav_bar() -> Element {
    Element::new("nav")
        .class("nav-container")
        .children(NavAction::ALL.into_iter().map(|action| {
            let trigger = trigger_for(action);
            Node::from(
                Element::new("button")
                    .attr("type", "button")
                    .class("nav-btn")
                    .attr("data-trigger", trigger.name())
                    .attr("onclick", format!("{}()", trigger.js_function()))
                    .text(action.label()),
            )
        }))
}

fn form_for(trigger: Trigger) -> Element {
    Element::new("form")
        .attr("data-trigger", trigger.name())
        .attr("onsubmit", format!("return {}(this)", trigger.js_function()))
}

fn primary_form(view: &DashboardView) -> Element {
    Element::new("section")
        .class("custom-card")
        .child(
            Element::new("div")
                .class("custom-card-title")
                .text("Download a video"),
        )
        .child(
            form_for(Trigger::PrimarySubmit)
                .id("primary-form")
                .child(
                    Element::new("label")
                        .attr("for", VIDEO_URL_FIELD)
                        .text("Paste a TikTok or Douyin link and download it:"),
                )
                .child(
                    Element::new("input")
                        .id(VIDEO_URL_FIELD)
                        .attr("name", VIDEO_URL_FIELD)
                        .attr("type", "url")
                        .attr("required", "")
                        .attr("placeholder", "https://vm.tiktok.com/...")
                        .attr("value", view.url_input.as_str()),
                )
                .child(
                    Element::new("button")
                        .attr("type", "submit")
                        .class("action-btn")
                        .text("Download video"),
                ),
        )
}

fn feature_section() -> Element {
    Element::new("section")
        .class("features")
        .child(Element::new("h2").text("Features"))
        .child(
            Element::new("div")
                .class("feature-container")
                .children(FEATURES.into_iter().map(|(icon, title, blurb)| {
                    Node::from(
                        Element::new("div")
                            .class("feature-card")
                            .child(Element::new("div").class("feature-icon").text(icon))
                            .child(Element::new("h3").text(title))
                            .child(Element::new("p").text(blurb)),
                    )
                })),
        )
}

fn option_form(view: &DashboardView) -> Element {
    let selected = view.selected_label.as_deref();
    let mut placeholder = Element::new("option")
        .attr("value", "")
        .attr("disabled", "");
    if selected.is_none() {
        placeholder = placeholder.attr("selected", "");
    }
    let placeholder = placeholder.text("Choose a feature");

    let choices = ExtraOption::PRIORITY.into_iter().map(|option| {
        let mut choice = Element::new("option").attr("value", option.label());
        if selected == Some(option.label()) {
            choice = choice.attr("selected", "");
        }
        Node::from(choice.text(option.label()))
    });

    Element::new("section")
        .class("custom-card")
        .child(
            Element::new("div")
                .class("custom-card-title")
                .text("Extra features"),
        )
        .child(
            form_for(Trigger::OptionSubmit)
                .id("option-form")
                .child(
                    Element::new("label")
                        .attr("for", OPTION_FIELD)
                        .text("Choose the feature you want:"),
                )
                .child(
                    Element::new("select")
                        .id(OPTION_FIELD)
                        .attr("name", OPTION_FIELD)
                        .attr("required", "")
                        .child(placeholder)
                        .children(choices),
                )
                .child(
                    Element::new("button")
                        .attr("type", "submit")
                        .class("action-btn")
                        .text("Run selected feature"),
                ),
        )
}

fn footer() -> Element {
    Element::new("footer")
        .child(Element::new("p").text("© 2024 TikTok Downloader. For personal use only."))
        .child(
            Element::new("p").child(
                Element::new("a")
                    .attr("href", FOOTER_LINK)
                    .attr("target", "_blank")
                    .attr("rel", "noopener")
                    .text("GitHub project"),
            ),
        )
}

fn class_token(theme: &str) -> String {
    theme
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

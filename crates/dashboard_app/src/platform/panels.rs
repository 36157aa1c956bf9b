use dashboard_core::{Trigger, VIDEO_URL_FIELD};
use dashboard_engine::{CollaboratorError, Collaborators, Output, OutputSink};
use dashboard_logging::dash_info;
use dashboard_page::{panel_html, Element, Node, FOOTER_LINK};

/// Default content for the four panels and a parser front that hands links to the parse API.
pub struct BuiltinPanels {
    api_docs_url: String,
    parse_endpoint: String,
}

impl BuiltinPanels {
    pub fn new(api_docs_url: impl Into<String>, parse_endpoint: impl Into<String>) -> Self {
        Self {
            api_docs_url: api_docs_url.into(),
            parse_endpoint: parse_endpoint.into(),
        }
    }

    fn parse_link(&self, url: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(url.as_bytes()).collect();
        format!("{}?url={}&minimal=false", self.parse_endpoint, encoded)
    }
}

fn paragraph(text: &str) -> Node {
    Element::new("p").text(text).into()
}

fn emit_panel(sink: &dyn OutputSink, title: &str, body: Element) {
    sink.emit(Output::Html(panel_html(title, body.into())));
}

impl Collaborators for BuiltinPanels {
    fn render_ios_shortcut_panel(&self, sink: &dyn OutputSink) -> Result<(), CollaboratorError> {
        let steps = [
            "Install the shortcut on your iPhone or iPad.",
            "Open a video in the TikTok or Douyin app and tap Share.",
            "Pick the shortcut from the share sheet; the video is saved to Photos.",
        ];
        let body = Element::new("div")
            .child(paragraph(
                "Download videos straight from the share sheet without opening this page.",
            ))
            .child(
                Element::new("ol").children(
                    steps
                        .into_iter()
                        .map(|step| Node::from(Element::new("li").text(step))),
                ),
            );
        emit_panel(sink, "iOS Shortcut", body);
        Ok(())
    }

    fn render_api_doc_panel(&self, sink: &dyn OutputSink) -> Result<(), CollaboratorError> {
        let body = Element::new("div")
            .child(paragraph(
                "Every feature of this page is also available as a REST API.",
            ))
            .child(
                Element::new("a")
                    .attr("href", self.api_docs_url.as_str())
                    .attr("target", "_blank")
                    .attr("rel", "noopener")
                    .text("Open the interactive API documentation"),
            );
        emit_panel(sink, "API Docs", body);
        Ok(())
    }

    fn render_downloader_panel(&self, sink: &dyn OutputSink) -> Result<(), CollaboratorError> {
        let body = Element::new("div")
            .child(paragraph(
                "The desktop downloader fetches many videos in one run and keeps the original quality.",
            ))
            .child(paragraph(
                "Paste one link per line into the downloader and choose an output folder.",
            ));
        emit_panel(sink, "Downloader", body);
        Ok(())
    }

    fn render_about_panel(&self, sink: &dyn OutputSink) -> Result<(), CollaboratorError> {
        let body = Element::new("div")
            .child(paragraph(
                "A self-hosted tool for saving TikTok and Douyin videos without watermarks.",
            ))
            .child(
                Element::new("a")
                    .attr("href", FOOTER_LINK)
                    .attr("target", "_blank")
                    .attr("rel", "noopener")
                    .text("Source code and issue tracker"),
            );
        emit_panel(sink, "About", body);
        Ok(())
    }

    fn parse_video(
        &self,
        url: Option<&str>,
        sink: &dyn OutputSink,
    ) -> Result<(), CollaboratorError> {
        let Some(url) = url else {
            let trigger = Trigger::PrimarySubmit;
            let form = Element::new("form")
                .attr("data-trigger", trigger.name())
                .attr("onsubmit", format!("return {}(this)", trigger.js_function()))
                .child(paragraph("Paste the next link to add it to this batch:"))
                .child(
                    Element::new("input")
                        .attr("name", VIDEO_URL_FIELD)
                        .attr("type", "url")
                        .attr("required", "")
                        .attr("placeholder", "https://vm.tiktok.com/..."),
                )
                .child(
                    Element::new("button")
                        .attr("type", "submit")
                        .class("action-btn")
                        .text("Parse link"),
                );
            emit_panel(sink, "Batch download", form);
            return Ok(());
        };

        dash_info!("Handing {} to the parse endpoint", url);
        let body = Element::new("div")
            .child(Element::new("p").text(format!("Parsing started for {url}")))
            .child(
                Element::new("a")
                    .attr("href", self.parse_link(url))
                    .attr("target", "_blank")
                    .attr("rel", "noopener")
                    .text("Open the parsed result"),
            );
        emit_panel(sink, "Video download", body);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_engine::CollectingSink;

    fn html_of(outputs: Vec<Output>) -> String {
        outputs
            .into_iter()
            .map(|output| match output {
                Output::Html(html) => html,
                Output::Notice(notice) => notice.text(),
            })
            .collect()
    }

    #[test]
    fn parse_link_encodes_the_video_url() {
        let panels = BuiltinPanels::new("/docs", "/api/hybrid/video_data");
        let sink = CollectingSink::new();
        panels
            .parse_video(Some("https://vm.tiktok.com/a?b=c&d"), &sink)
            .unwrap();

        let html = html_of(sink.take());
        assert!(html.contains(
            "/api/hybrid/video_data?url=https%3A%2F%2Fvm.tiktok.com%2Fa%3Fb%3Dc%26d&amp;minimal=false"
        ));
    }

    #[test]
    fn parser_without_url_prompts_with_a_bridge_form() {
        let panels = BuiltinPanels::new("/docs", "/api/hybrid/video_data");
        let sink = CollectingSink::new();
        panels.parse_video(None, &sink).unwrap();

        let html = html_of(sink.take());
        assert!(html.contains("data-trigger=\"onPrimarySubmit\""));
        assert!(html.contains("name=\"video_url\""));
    }

    #[test]
    fn api_panel_links_to_configured_docs() {
        let panels = BuiltinPanels::new("https://api.example.com/docs", "/parse");
        let sink = CollectingSink::new();
        panels.render_api_doc_panel(&sink).unwrap();

        assert!(html_of(sink.take()).contains("href=\"https://api.example.com/docs\""));
    }
}

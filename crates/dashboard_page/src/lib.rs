//! Dashboard page: composes the single page and the fragments rendered into its main region.
mod compose;
mod fragment;
mod script;
mod style;
mod tree;

pub use compose::{render, FOOTER_LINK, MAIN_REGION_ID, OUTPUT_REGION_ID};
pub use fragment::{notice_html, panel_html};
pub use tree::{escape_html, Element, Node, PageTree};

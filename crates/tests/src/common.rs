use dioxus::prelude::*;

/// Render `app` once on the server and return its HTML.
///
/// Effects and spawned tasks never run here, so the markup reflects the
/// initial state only.
pub fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Number of non-overlapping occurrences of `needle` in `html`.
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

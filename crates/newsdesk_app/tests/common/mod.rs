#![allow(dead_code)]

use newsdesk_app::{DomQuery, ElementSpec, HeadlessDocument, PageRuntime};
use newsdesk_core::NodeId;
use url::Url;

pub fn init_logging() {
    page_logging::initialize_for_tests();
}

/// A page with every hook the scripts attach to.
pub fn full_page() -> HeadlessDocument {
    let mut doc = HeadlessDocument::new(Url::parse("https://brasilviral.com.br/index.html").unwrap());
    doc.set_window_size(1280.0, 720.0);
    doc.insert(None, ElementSpec::new("button").id("menuToggle"));
    doc.insert(None, ElementSpec::new("nav").id("navMenu"));
    doc.insert(
        None,
        ElementSpec::new("div")
            .class("search-box")
            .child(ElementSpec::new("input").id("searchInput").attr("type", "text"))
            .child(ElementSpec::new("button").id("searchButton")),
    );
    doc.insert(
        None,
        ElementSpec::new("div").id("breakingNews").text("Sem novidades"),
    );
    doc.insert(
        None,
        ElementSpec::new("article")
            .id("card")
            .class("article-card")
            .attr("data-link", "noticias/economia.html")
            .child(ElementSpec::new("h3").id("cardTitle"))
            .child(
                ElementSpec::new("a")
                    .id("cardLink")
                    .attr("href", "https://fonte.example.com/")
                    .child(ElementSpec::new("span").id("cardLinkText")),
            ),
    );
    doc.insert(
        None,
        ElementSpec::new("article")
            .id("plainCard")
            .class("featured-card"),
    );
    doc.insert(
        None,
        ElementSpec::new("section")
            .id("esportesFeatured")
            .child(ElementSpec::new("div").id("esportesLista").class("category-articles")),
    );
    doc.insert(
        None,
        ElementSpec::new("form")
            .id("newsletterForm")
            .child(ElementSpec::new("input").id("email").attr("type", "email")),
    );
    doc
}

pub fn ready_runtime(doc: HeadlessDocument) -> PageRuntime<HeadlessDocument> {
    let mut runtime = PageRuntime::new(doc);
    runtime.page_ready();
    runtime
}

pub fn node(runtime: &PageRuntime<HeadlessDocument>, id: &str) -> NodeId {
    runtime
        .document()
        .element_by_id(id)
        .unwrap_or_else(|| panic!("missing #{id}"))
}

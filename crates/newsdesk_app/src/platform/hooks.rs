//! DOM hooks the page scripts attach to.

pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const NAV_MENU_ID: &str = "navMenu";
pub const NEWSLETTER_FORM_ID: &str = "newsletterForm";
pub const BREAKING_NEWS_ID: &str = "breakingNews";

pub const CARD_CLASSES: &[&str] = &["featured-card", "article-card"];
pub const AD_PLACEHOLDER_CLASS: &str = "ad-placeholder";
pub const AD_SLOT_CLASS: &str = "ad-slot";
pub const SEARCH_BOX_CLASS: &str = "search-box";
pub const CATEGORY_ARTICLES_CLASS: &str = "category-articles";

pub const CARD_TARGET_ATTR: &str = "data-link";
pub const VIEWED_ATTR: &str = "data-viewed";

/// Id of the section holding a category's featured articles.
pub fn category_section_id(category: &str) -> String {
    format!("{category}Featured")
}

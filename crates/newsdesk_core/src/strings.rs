//! Class names and user-facing copy shared by the core and the host.

pub const CLASS_AD_LOADING: &str = "ad-loading";
pub const CLASS_AD_LOADED: &str = "ad-loaded";
pub const CLASS_MENU_ACTIVE: &str = "active";
pub const CLASS_LOADING_INDICATOR: &str = "loading-indicator";

pub const DATA_VIEWED: &str = "viewed";
pub const UNKNOWN_SLOT_ID: &str = "unknown";

pub const TICKER_SEPARATOR: &str = " • ";
pub const LOADING_INDICATOR_TEXT: &str = "Carregando mais notícias...";
pub const EMPTY_SEARCH_PROMPT: &str = "Por favor, digite algo para buscar.";

pub fn newsletter_thanks(email: &str) -> String {
    format!("Obrigado por se inscrever! Você receberá nossas notícias no email: {email}")
}

pub fn load_more_done(category: &str) -> String {
    format!("Mais notícias de {category} seriam carregadas aqui.")
}

pub fn search_ack(query: &str) -> String {
    format!("Buscando por: {query}")
}

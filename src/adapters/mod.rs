// Adapters layer: concrete fragment sources (browser, static HTTP, saved file).

pub mod html_dump;
pub mod http;
pub mod markup;
pub mod webdriver;

pub use html_dump::HtmlDumpSource;
pub use http::HttpSource;
pub use webdriver::WebDriverSource;

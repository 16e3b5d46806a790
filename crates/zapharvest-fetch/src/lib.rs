pub mod error;
pub mod file;
pub mod html;
pub mod http;
pub mod source;

pub use error::{FetchError, Result};
pub use file::FileSource;
pub use html::{compose_page_content, visible_text};
pub use http::HttpSource;
pub use source::{Page, PageSource};

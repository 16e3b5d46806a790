use crate::html::compose_page_content;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub domain: String,
    pub content: String,
}

impl Page {
    pub fn from_markup(domain: impl Into<String>, markup: &str) -> Self {
        Self {
            domain: domain.into(),
            content: compose_page_content(markup),
        }
    }
}

pub trait PageSource {
    fn source_name(&self) -> &'static str;
    fn location(&self) -> String;
    fn load(&self) -> Result<Page>;
}

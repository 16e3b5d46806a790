use crate::source::{Page, PageSource};
use crate::{FetchError, Result};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::debug;

pub const LOCAL_DOMAIN: &str = "local";

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    domain: String,
}

impl FileSource {
    pub fn new(path: PathBuf, domain: Option<String>) -> Self {
        let domain = domain
            .map(|value| value.trim().to_ascii_lowercase())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| LOCAL_DOMAIN.to_string());
        Self { path, domain }
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }

    fn read_markup(&self) -> Result<String> {
        if self.is_stdin() {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        if self.path.is_dir() {
            return Err(FetchError::InvalidSource(format!(
                "{} is a directory",
                self.path.display()
            )));
        }
        Ok(fs::read_to_string(&self.path)?)
    }
}

impl PageSource for FileSource {
    fn source_name(&self) -> &'static str {
        "file"
    }

    fn location(&self) -> String {
        if self.is_stdin() {
            "stdin".to_string()
        } else {
            self.path.display().to_string()
        }
    }

    fn load(&self) -> Result<Page> {
        let markup = self.read_markup()?;
        debug!(path = %self.location(), bytes = markup.len(), "page read");
        Ok(Page::from_markup(self.domain.as_str(), &markup))
    }
}

use crate::source::{Page, PageSource};
use crate::{FetchError, Result};
use std::time::Duration;

#[cfg(feature = "http-fetch")]
mod imp {
    use super::{Duration, FetchError, Page, PageSource, Result};
    use reqwest::blocking::Client;
    use tracing::debug;
    use url::Url;

    const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    #[derive(Debug, Clone)]
    pub struct HttpSource {
        url: String,
        user_agent: String,
        timeout: Duration,
    }

    impl HttpSource {
        pub fn new(url: String, user_agent: String, timeout: Duration) -> Self {
            Self {
                url,
                user_agent,
                timeout,
            }
        }
    }

    impl PageSource for HttpSource {
        fn source_name(&self) -> &'static str {
            "http"
        }

        fn location(&self) -> String {
            self.url.clone()
        }

        fn load(&self) -> Result<Page> {
            let url = page_url(&self.url)?;
            let domain = page_domain(&url)?;
            let client = Client::builder()
                .user_agent(self.user_agent.as_str())
                .timeout(self.timeout)
                .connect_timeout(CONNECT_TIMEOUT)
                .build()?;
            let markup = client.get(url).send()?.error_for_status()?.text()?;
            debug!(domain = %domain, bytes = markup.len(), "page fetched");
            Ok(Page::from_markup(domain, &markup))
        }
    }

    pub fn page_url(raw: &str) -> Result<Url> {
        let url = Url::parse(raw.trim())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::InvalidSource(format!(
                "unsupported url scheme: {}",
                url.scheme()
            )));
        }
        Ok(url)
    }

    pub fn page_domain(url: &Url) -> Result<String> {
        url.host_str()
            .map(|host| host.to_ascii_lowercase())
            .ok_or_else(|| FetchError::InvalidSource(format!("url has no host: {}", url)))
    }

}

#[cfg(not(feature = "http-fetch"))]
mod imp {
    use super::{Duration, FetchError, Page, PageSource, Result};

    #[derive(Debug, Clone)]
    pub struct HttpSource {
        url: String,
        user_agent: String,
        timeout: Duration,
    }

    impl HttpSource {
        pub fn new(url: String, user_agent: String, timeout: Duration) -> Self {
            Self {
                url,
                user_agent,
                timeout,
            }
        }
    }

    impl PageSource for HttpSource {
        fn source_name(&self) -> &'static str {
            "http"
        }

        fn location(&self) -> String {
            self.url.clone()
        }

        fn load(&self) -> Result<Page> {
            let _ = (&self.user_agent, &self.timeout);
            Err(FetchError::Unavailable(
                "fetching urls requires the http-fetch feature".to_string(),
            ))
        }
    }
}

pub use imp::HttpSource;

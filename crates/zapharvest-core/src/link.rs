use crate::domain::NormalizedNumber;
use crate::error::CoreError;
use url::Url;

pub const WHATSAPP_WEB_SEND_URL: &str = "https://web.whatsapp.com/send";

pub fn whatsapp_web_url(number: &NormalizedNumber) -> Result<Url, CoreError> {
    let mut url = Url::parse(WHATSAPP_WEB_SEND_URL)?;
    url.query_pairs_mut().append_pair("phone", number.as_str());
    Ok(url)
}

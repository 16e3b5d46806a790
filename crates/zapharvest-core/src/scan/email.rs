use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

pub const MAX_PAGE_EMAILS: usize = 3;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern")
});

pub fn extract_emails(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut emails = Vec::new();
    for found in EMAIL.find_iter(text) {
        if emails.len() == MAX_PAGE_EMAILS {
            break;
        }
        if seen.insert(found.as_str()) {
            emails.push(found.as_str().to_string());
        }
    }
    emails
}

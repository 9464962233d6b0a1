//! Domain allow-list test.

use url::Url;

/// Returns true if the URL's hostname is the allowed root domain or a
/// subdomain of it.
///
/// The subdomain test requires a `.` boundary: with root `rmit.edu.au`,
/// `www.rmit.edu.au` matches but `notrmit.edu.au` does not. Comparison is
/// case-insensitive. Unparseable URLs and URLs without a hostname are not
/// allowed.
pub fn is_allowed_host(url: &str, allowed_root: &str) -> bool {
    let host = match Url::parse(url.trim()) {
        Ok(u) => match u.host_str() {
            Some(h) => h.to_ascii_lowercase(),
            None => return false,
        },
        Err(_) => return false,
    };
    let root = allowed_root.trim().to_ascii_lowercase();
    if root.is_empty() {
        return false;
    }
    host == root || host.ends_with(&format!(".{root}"))
}

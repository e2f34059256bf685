//! Session-token splicing.

/// Returns `url` with `;<param_name>=<session_id>` appended to its path
/// component.
///
/// The URL is split at the first `?` into path and query (query keeps the
/// `?`), then the path is split at the first `#` into path and anchor
/// (anchor keeps the `#`). The token goes at the end of the path, and the
/// pieces are reassembled as path, anchor, query in that order. An empty
/// path stays untouched: the token can never be the first character of the
/// result.
pub fn to_encoded(url: &str, session_id: &str, param_name: &str) -> String {
    let (path, query) = match url.find('?') {
        Some(q) => (&url[..q], &url[q..]),
        None => (url, ""),
    };
    let (path, anchor) = match path.find('#') {
        Some(p) => (&path[..p], &path[p..]),
        None => (path, ""),
    };

    let mut out = String::with_capacity(url.len() + param_name.len() + session_id.len() + 2);
    out.push_str(path);
    if !path.is_empty() {
        out.push(';');
        out.push_str(param_name);
        out.push('=');
        out.push_str(session_id);
    }
    out.push_str(anchor);
    out.push_str(query);
    out
}

//! Asset URLs and router base, both relative to the deployment prefix.
///
/// `PUBLIC_URL` is read at compile time (e.g. `/bistro` when served from a
/// subdirectory). Without it everything is anchored at the site root.
#[must_use]
pub fn asset_url(relative: &str) -> String {
    join_base(option_env!("PUBLIC_URL").unwrap_or(""), relative)
}

/// Basename for the router, `None` when served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    let base = option_env!("PUBLIC_URL").unwrap_or("").trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}

fn join_base(base: &str, relative: &str) -> String {
    if relative.contains("://") || relative.starts_with("data:") {
        return relative.to_string();
    }
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');
    format!("{base}/{rel}")
}

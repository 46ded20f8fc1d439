//! User-Agent string shared by the blocking and async HTTP clients.

/// Default User-Agent for download requests (identifies the tool).
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("imgfetch/{version}")
}

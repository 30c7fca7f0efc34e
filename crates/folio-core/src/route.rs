use crate::error::{FolioError, Result};
use std::fmt;

/// Logical pages of the site. `Gallery` optionally carries the selected
/// frame id, which is the only piece of state threaded through the URL.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Projects,
    Contact,
    Gallery { frame: Option<String> },
    Tools,
}

impl Route {
    pub fn gallery(frame: Option<&str>) -> Route {
        Route::Gallery {
            frame: frame.map(str::to_owned),
        }
    }

    /// Parse a location pathname. Query strings, fragments and trailing
    /// slashes are ignored.
    pub fn parse(path: &str) -> Result<Route> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let route = match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["projects"] => Route::Projects,
            ["contact"] => Route::Contact,
            ["tools"] => Route::Tools,
            ["gallery"] => Route::Gallery { frame: None },
            ["gallery", id] => Route::Gallery {
                frame: Some(decode_segment(id)),
            },
            _ => return Err(FolioError::UnknownRoute(path.to_string())),
        };
        Ok(route)
    }

    /// Like [`Route::parse`] but unknown paths land on the home page.
    pub fn parse_or_home(path: &str) -> Route {
        Route::parse(path).unwrap_or_else(|e| {
            log::warn!("[router] {}; falling back to /", e);
            Route::Home
        })
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Tools => "/tools".to_string(),
            Route::Gallery { frame: None } => "/gallery".to_string(),
            Route::Gallery { frame: Some(id) } => format!("/gallery/{}", encode_segment(id)),
        }
    }

    /// Page key used for `data-route` on page sections.
    pub fn page(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::About => "about",
            Route::Projects => "projects",
            Route::Contact => "contact",
            Route::Gallery { .. } => "gallery",
            Route::Tools => "tools",
        }
    }

    pub fn gallery_frame(&self) -> Option<&str> {
        match self {
            Route::Gallery { frame } => frame.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

fn encode_segment(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

fn decode_segment(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(v) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(v);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

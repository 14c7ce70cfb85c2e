//! Hash Routing
//!
//! `#/` is the dashboard and `#/members/<id>` a member's detail page.
//! Hash routes keep the app servable from any static host.

use leptos::ev;
use leptos::prelude::*;
use log::{debug, warn};
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    /// Raw path segment; it may not be a valid member id
    MemberDetail(String),
    NotFound(String),
}

impl Route {
    pub fn member(id: u32) -> Self {
        Route::MemberDetail(id.to_string())
    }

    /// Parse `location.hash`, with or without the leading `#`
    pub fn from_hash(hash: &str) -> Self {
        Self::from_path(hash.strip_prefix('#').unwrap_or(hash))
    }

    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Dashboard,
            ["members", segment] => {
                Route::MemberDetail(percent_decode_str(segment).decode_utf8_lossy().into_owned())
            }
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// Member id named by a detail route, if the segment is a valid id
    pub fn member_id(&self) -> Option<u32> {
        match self {
            Route::MemberDetail(segment) => segment.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::MemberDetail(segment) => {
                format!("/members/{}", utf8_percent_encode(segment, NON_ALPHANUMERIC))
            }
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Value for an `href` attribute
    pub fn href(&self) -> String {
        format!("#{}", self.path())
    }

    /// Whether `location.hash` already reads exactly as this route's link,
    /// in which case assigning it fires no `hashchange`
    pub fn is_current(&self, hash: &str) -> bool {
        hash == self.href()
    }
}

fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| Route::from_hash(&hash))
        .unwrap_or(Route::Dashboard)
}

/// Current route, kept in sync with `location.hash`
#[derive(Clone, Copy)]
pub struct Router {
    route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
}

impl Router {
    /// Start from the page's current hash and follow `hashchange` events
    pub fn new() -> Self {
        let (route, set_route) = signal(current_route());

        // The router lives as long as the page, so the listener is never removed
        let _listener = window_event_listener(ev::hashchange, move |_| {
            let route = current_route();
            debug!("[router] hash changed to {:?}", route);
            set_route.set(route);
        });

        Self { route, set_route }
    }

    pub fn route(&self) -> Route {
        self.route.get()
    }

    /// Go to `route`. A hash change is picked up by the `hashchange`
    /// listener; the signal is only written here when no event will fire.
    pub fn navigate(&self, route: Route) {
        debug!("[router] navigate to {}", route.path());
        let Some(location) = web_sys::window().map(|window| window.location()) else {
            self.set_route.set(route);
            return;
        };

        let hash = location.hash().unwrap_or_default();
        if route.is_current(&hash) {
            self.set_route.set(route);
        } else if let Err(e) = location.set_hash(&route.path()) {
            warn!("[router] failed to set location hash: {:?}", e);
            self.set_route.set(route);
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

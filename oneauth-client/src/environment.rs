/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Page environment abstraction for the authorization redirect.
//!
//! The redirect needs two things the client does not own: the URL of the
//! current page and a way to navigate away from it.
//!
//! - **`BrowserEnvironment`** — `window.location` (WASM only)
//! - **`HeadlessEnvironment`** — a fixed URL and a recorded navigation target,
//!   for CLIs, servers and tests

use std::sync::Mutex;

use crate::error::OneAuthError;

/// Access to the current page and top-level navigation.
pub trait Environment {
    /// Full URL of the current page.
    fn current_url(&self) -> Result<String, OneAuthError>;

    /// Navigate the current page to `url`.
    fn navigate(&self, url: &str) -> Result<(), OneAuthError>;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn current_url(&self) -> Result<String, OneAuthError> {
        (**self).current_url()
    }

    fn navigate(&self, url: &str) -> Result<(), OneAuthError> {
        (**self).navigate(url)
    }
}

/// `window.location` of the running browser page.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserEnvironment;

#[cfg(target_arch = "wasm32")]
impl BrowserEnvironment {
    fn location() -> Result<web_sys::Location, OneAuthError> {
        web_sys::window()
            .map(|window| window.location())
            .ok_or_else(|| OneAuthError::Environment("no global window".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl Environment for BrowserEnvironment {
    fn current_url(&self) -> Result<String, OneAuthError> {
        Self::location()?
            .href()
            .map_err(|e| OneAuthError::Environment(format!("failed to read location: {e:?}")))
    }

    fn navigate(&self, url: &str) -> Result<(), OneAuthError> {
        Self::location()?
            .set_href(url)
            .map_err(|e| OneAuthError::Environment(format!("failed to navigate: {e:?}")))
    }
}

/// An environment without a browser.
///
/// Reports a fixed current URL and remembers the last navigation target
/// instead of following it.
#[derive(Debug, Default)]
pub struct HeadlessEnvironment {
    current_url: String,
    last_navigation: Mutex<Option<String>>,
}

impl HeadlessEnvironment {
    pub fn new(current_url: &str) -> Self {
        Self {
            current_url: current_url.to_string(),
            last_navigation: Mutex::new(None),
        }
    }

    /// The URL passed to the most recent [`Environment::navigate`] call.
    pub fn last_navigation(&self) -> Option<String> {
        self.last_navigation
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }
}

impl Environment for HeadlessEnvironment {
    fn current_url(&self) -> Result<String, OneAuthError> {
        if self.current_url.is_empty() {
            return Err(OneAuthError::Environment(
                "no current page URL configured".to_string(),
            ));
        }
        Ok(self.current_url.clone())
    }

    fn navigate(&self, url: &str) -> Result<(), OneAuthError> {
        let mut guard = self
            .last_navigation
            .lock()
            .map_err(|_| OneAuthError::Environment("navigation lock poisoned".to_string()))?;
        *guard = Some(url.to_string());
        Ok(())
    }
}

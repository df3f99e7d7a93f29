use std::{cell::RefCell, rc::Rc};

pub const LOGIN_ROUTE: &str = "/login";

/// Full-page navigation. A hard redirect reloads the app, which drops every
/// in-memory cache held by the view layer.
pub trait Navigator {
    fn hard_redirect(&self, path: &str);
}

pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn hard_redirect(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if let Ok(pathname) = location.pathname() {
                if pathname == path {
                    return;
                }
            }
            if location.set_href(path).is_err() {
                log::warn!("failed to navigate to {path}");
            }
        }
    }
}

/// Records redirects instead of performing them.
#[derive(Default)]
pub struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visited.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn hard_redirect(&self, path: &str) {
        log::debug!("redirect requested: {path}");
        self.visited.borrow_mut().push(path.to_string());
    }
}

#[cfg(target_arch = "wasm32")]
pub fn default_navigator() -> Rc<dyn Navigator> {
    Rc::new(LocationNavigator)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_navigator() -> Rc<dyn Navigator> {
    RecordingNavigator::shared()
}

/// Same-tab navigation used by view code after a successful form submit.
pub fn go_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

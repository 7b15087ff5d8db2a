//! Document-level style writes.

use gloo::utils::{body, document_element};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::core::overlay::ScrollLock;
use crate::core::theme::{StyleSink, ThemeName};

/// Writes theme variables onto `<html>`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct DocumentStyleSink;

impl StyleSink for DocumentStyleSink {
    fn set_property(&mut self, name: &str, value: &str) {
        set_root_property(name, Some(value));
    }

    fn set_theme_attribute(&mut self, name: ThemeName) {
        if let Err(err) = document_element().set_attribute("data-theme", name.as_str()) {
            warn!(?err, "unable to set data-theme");
        }
    }
}

/// Set (or clear, with `None`) a custom property on `<html>`.
pub(crate) fn set_root_property(name: &str, value: Option<&str>) {
    let Ok(root) = document_element().dyn_into::<HtmlElement>() else {
        return;
    };
    set_element_property(&root, name, value);
}

/// Set (or clear, with `None`) a custom property on `element`.
pub(crate) fn set_element_property(element: &HtmlElement, name: &str, value: Option<&str>) {
    let style = element.style();
    let result = match value {
        Some(value) => style.set_property(name, value),
        None => style.remove_property(name).map(|_| ()),
    };
    if let Err(err) = result {
        warn!(?err, property = name, "style write failed");
    }
}

/// Apply an overlay scroll-lock change to `<body>`.
pub(crate) fn apply_scroll_lock(lock: ScrollLock) {
    let value = match lock {
        ScrollLock::Acquire => Some("hidden"),
        ScrollLock::Release => None,
    };
    set_element_property(&body(), "overflow", value);
}

/// Inline `style` value for a list of custom properties.
pub(crate) fn inline_vars<N: AsRef<str>>(vars: &[(N, String)]) -> String {
    vars.iter()
        .map(|(name, value)| format!("{}: {value};", name.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

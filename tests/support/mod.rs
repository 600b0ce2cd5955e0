// Shared mount/cleanup helpers for the browser tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::JsCast;

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

pub fn query_all(mount: &web_sys::Element, selector: &str) -> Vec<web_sys::Element> {
    let nodes = mount.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

pub fn click(mount: &web_sys::Element, selector: &str, index: usize) {
    let target = query_all(mount, selector)
        .into_iter()
        .nth(index)
        .unwrap_or_else(|| panic!("no element #{index} for '{selector}'"));
    target.dyn_into::<web_sys::HtmlElement>().unwrap().click();
}

/// Indices of the disclosure items currently marked expanded.
pub fn expanded_items(mount: &web_sys::Element) -> Vec<usize> {
    query_all(mount, ".disclosure-item")
        .iter()
        .enumerate()
        .filter(|(_, item)| item.get_attribute("data-state").as_deref() == Some("expanded"))
        .map(|(i, _)| i)
        .collect()
}

/// Indices of the answer bodies that carry the visible class.
pub fn visible_bodies(mount: &web_sys::Element) -> Vec<usize> {
    query_all(mount, ".disclosure-body")
        .iter()
        .enumerate()
        .filter(|(_, body)| body.class_list().contains("expanded"))
        .map(|(i, _)| i)
        .collect()
}

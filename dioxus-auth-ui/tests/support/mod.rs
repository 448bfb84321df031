// Licensed under MIT OR Apache-2.0
//
// Shared test harness for dioxus-auth-ui component tests.
//
// Provides mount/cleanup helpers, an auth-client context wrapper, and
// Dioxus rendering helpers so that individual test files stay focused on
// assertions rather than boilerplate.
#![allow(dead_code)]

use auth_ui_client::{AuthApiClient, AuthMode};
use dioxus::prelude::*;
use dioxus_auth_ui::AuthClientCtx;
use wasm_bindgen_futures::JsFuture;

pub const TEST_AUTH_URL: &str = "http://test:9999/auth/v1";

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

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

/// All elements under `mount` matching `selector`, in document order.
pub fn query_all(mount: &web_sys::Element, selector: &str) -> Vec<web_sys::Element> {
    let list = mount.query_selector_all(selector).unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| wasm_bindgen::JsCast::dyn_into::<web_sys::Element>(node).ok())
        .collect()
}

// ---------------------------------------------------------------------------
// Dioxus rendering helpers
// ---------------------------------------------------------------------------

/// Provides an [`AuthClientCtx`] pointing at an unreachable test back-end.
#[component]
pub fn WithAuthClient(children: Element) -> Element {
    use_context_provider(|| {
        AuthClientCtx::new(AuthApiClient::new(TEST_AUTH_URL, AuthMode::Anonymous))
    });
    rsx! { {children} }
}

/// Render a Dioxus component into the given mount element.
///
/// Use this in `#[wasm_bindgen_test] async fn` tests:
///
/// ```ignore
/// let mount = create_mount_point();
/// render_into(&mount, || rsx! { WithAuthClient { SocialAuth { .. } } });
/// yield_now().await;
/// // assert on mount.query_selector(...)
/// cleanup(&mount);
/// ```
pub fn render_into(mount: &web_sys::Element, root: fn() -> Element) {
    let cfg = dioxus::web::Config::new().rootelement(mount.clone());
    dioxus::web::launch::launch_virtual_dom(VirtualDom::new(root), cfg);
}

/// Yield to the browser event loop so Dioxus can process its mutations.
pub async fn yield_now() {
    for _ in 0..2 {
        // requestAnimationFrame fires after the current microtask queue is
        // drained, giving Dioxus time to apply its mutations.
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            gloo_utils::window()
                .request_animation_frame(&resolve)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }
}

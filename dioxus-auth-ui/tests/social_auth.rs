// Licensed under MIT OR Apache-2.0
//
// Component tests for the SocialAuth provider button group.
//
// Verifies what renders for a given provider list, layout and view, and
// that a failed click surfaces its message and resets the loading flag.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::cell::RefCell;

use auth_ui_client::{AuthError, OAuthClient};
use auth_ui_types::{
    I18nVariables, OAuthOptions, OAuthResponse, Provider, SocialLayout, ViewLabels, ViewType,
};
use dioxus::prelude::*;
use futures::channel::oneshot;
use support::{cleanup, create_mount_point, query_all, render_into, yield_now, WithAuthClient};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use dioxus_auth_ui::{AuthClientCtx, SocialAuth};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const DIVIDER: &str = ".supabase-auth-ui_ui-divider";

fn button_texts(mount: &web_sys::Element) -> Vec<String> {
    query_all(mount, "button")
        .iter()
        .map(|b| b.text_content().unwrap_or_default())
        .collect()
}

fn button_providers(mount: &web_sys::Element) -> Vec<String> {
    query_all(mount, "button")
        .iter()
        .map(|b| b.get_attribute("data-provider").unwrap_or_default())
        .collect()
}

// ---------------------------------------------------------------------------
// Empty provider lists
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn empty_provider_list_renders_nothing() {
    fn root() -> Element {
        rsx! {
            WithAuthClient {
                SocialAuth { providers: Vec::<Provider>::new() }
            }
        }
    }

    let mount = create_mount_point();
    render_into(&mount, root);
    yield_now().await;

    assert!(query_all(&mount, "button").is_empty(), "no buttons expected");
    assert!(mount.query_selector(DIVIDER).unwrap().is_none(), "no divider expected");
    assert!(
        mount.query_selector(".supabase-auth-ui_ui-container").unwrap().is_none(),
        "no containers expected"
    );

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn missing_provider_list_renders_nothing() {
    fn root() -> Element {
        rsx! {
            WithAuthClient {
                SocialAuth {}
            }
        }
    }

    let mount = create_mount_point();
    render_into(&mount, root);
    yield_now().await;

    assert!(query_all(&mount, "button").is_empty());
    assert!(mount.query_selector(DIVIDER).unwrap().is_none());

    cleanup(&mount);
}

// ---------------------------------------------------------------------------
// Buttons and labels
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn one_button_per_provider_in_order() {
    fn root() -> Element {
        rsx! {
            WithAuthClient {
                SocialAuth {
                    providers: vec![Provider::Github, Provider::Google, Provider::Discord],
                    social_layout: SocialLayout::Vertical,
                }
            }
        }
    }

    let mount = create_mount_point();
    render_into(&mount, root);
    yield_now().await;

    assert_eq!(button_providers(&mount), vec!["github", "google", "discord"]);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn vertical_layout_shows_capitalized_labels() {
    fn root() -> Element {
        rsx! {
            WithAuthClient {
                SocialAuth {
                    providers: vec![Provider::Github, Provider::LinkedinOidc],
                    social_layout: SocialLayout::Vertical,
                }
            }
        }
    }

    let mount = create_mount_point();
    render_into(&mount, root);
    yield_now().await;

    assert_eq!(
        button_texts(&mount),
        vec!["Sign in with Github", "Sign in with Linkedin_oidc"]
    );

    // Vertical groups are packed tighter than the icon row.
    let inner = mount
        .query_selector("[data-direction='vertical'] [data-direction='vertical']")
        .unwrap()
        .expect("inner vertical container");
    assert_eq!(inner.get_attribute("data-gap").as_deref(), Some("small"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn sign_up_view_uses_sign_up_template() {
    fn root() -> Element {
        rsx! {
            WithAuthClient {
                SocialAuth {
                    providers: vec![Provider::Google],
                    social_layout: SocialLayout::Vertical,
                    view: ViewType::SignUp,
                }
            }
        }
    }

    let mount = create_mount_point();
    render_into(&mount, root);
    yield_now().await;

    assert_eq!(button_texts(&mount), vec!["Sign up with Google"]);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn host_translation_table_is_used() {
    fn root() -> Element {
        let i18n = I18nVariables {
            sign_in: Some(ViewLabels {
                social_provider_text: Some("Continuer avec {provider}".into()),
                ..Default::default()
            }),
            sign_up: None,
        };
        rsx! {
            WithAuthClient {
                SocialAuth {
                    providers: vec![Provider::Gitlab],
                    social_layout: SocialLayout::Vertical,
                    i18n: i18n,
                }
            }
        }
    }

    let mount = create_mount_point();
    render_into(&mount, root);
    yield_now().await;

    assert_eq!(button_texts(&mount), vec!["Continuer avec Gitlab"]);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn horizontal_layout_is_icon_only() {
    fn root() -> Element {
        rsx! {
            WithAuthClient {
                SocialAuth {
                    providers: vec![Provider::Github, Provider::Google],
                    social_layout: SocialLayout::Horizontal,
                }
            }
        }
    }

    let mount = create_mount_point();
    render_into(&mount, root);
    yield_now().await;

    assert_eq!(button_texts(&mount), vec!["", ""]);
    assert_eq!(query_all(&mount, "button svg").len(), 2, "icons still shown");

    let inner = mount
        .query_selector("[data-direction='horizontal']")
        .unwrap()
        .expect("inner horizontal container");
    assert_eq!(inner.get_attribute("data-gap").as_deref(), Some("medium"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn unknown_layout_is_forwarded_without_labels() {
    fn root() -> Element {
        rsx! {
            WithAuthClient {
                SocialAuth {
                    providers: vec![Provider::Apple],
                    social_layout: SocialLayout::from("grid"),
                }
            }
        }
    }

    let mount = create_mount_point();
    render_into(&mount, root);
    yield_now().await;

    assert!(
        mount.query_selector("[data-direction='grid']").unwrap().is_some(),
        "layout name should reach the container"
    );
    assert_eq!(button_texts(&mount), vec![""]);

    cleanup(&mount);
}

// ---------------------------------------------------------------------------
// Icons
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn provider_without_artwork_renders_without_icon() {
    fn root() -> Element {
        rsx! {
            WithAuthClient {
                SocialAuth {
                    providers: vec![Provider::Google, Provider::Fly],
                    social_layout: SocialLayout::Vertical,
                }
            }
        }
    }

    let mount = create_mount_point();
    render_into(&mount, root);
    yield_now().await;

    let google = mount
        .query_selector("button[data-provider='google']")
        .unwrap()
        .expect("google button");
    assert!(google.query_selector("svg").unwrap().is_some());

    let fly = mount
        .query_selector("button[data-provider='fly']")
        .unwrap()
        .expect("fly button");
    assert!(fly.query_selector("svg").unwrap().is_none());
    assert_eq!(fly.text_content().unwrap_or_default(), "Sign in with Fly");

    cleanup(&mount);
}

// ---------------------------------------------------------------------------
// Divider
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn divider_follows_button_group() {
    fn root() -> Element {
        rsx! {
            WithAuthClient {
                SocialAuth { providers: vec![Provider::Github] }
            }
        }
    }

    let mount = create_mount_point();
    render_into(&mount, root);
    yield_now().await;

    let dividers = query_all(&mount, DIVIDER);
    assert_eq!(dividers.len(), 1, "exactly one divider");
    let previous = dividers[0]
        .previous_element_sibling()
        .expect("divider should follow the outer container");
    assert_eq!(previous.get_attribute("data-gap").as_deref(), Some("large"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn third_party_only_hides_divider() {
    fn root() -> Element {
        rsx! {
            WithAuthClient {
                SocialAuth {
                    providers: vec![Provider::Github],
                    only_third_party_providers: true,
                }
            }
        }
    }

    let mount = create_mount_point();
    render_into(&mount, root);
    yield_now().await;

    assert!(mount.query_selector(DIVIDER).unwrap().is_none());
    assert_eq!(query_all(&mount, "button").len(), 1);

    cleanup(&mount);
}

// ---------------------------------------------------------------------------
// Loading and errors
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn buttons_start_enabled() {
    fn root() -> Element {
        rsx! {
            WithAuthClient {
                SocialAuth { providers: vec![Provider::Github, Provider::Google] }
            }
        }
    }

    let mount = create_mount_point();
    render_into(&mount, root);
    yield_now().await;

    for button in query_all(&mount, "button") {
        assert!(!button.has_attribute("disabled"));
        assert_eq!(button.get_attribute("data-loading").as_deref(), Some("false"));
    }

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn failed_sign_in_reports_error_and_resets_loading() {
    #[component]
    fn ErrorProbe() -> Element {
        let mut last_error = use_signal(String::new);
        rsx! {
            WithAuthClient {
                SocialAuth {
                    providers: vec![Provider::Github, Provider::Google],
                    // Relative redirects are rejected before any navigation.
                    redirect_to: "/relative".to_string(),
                    onerror: move |message: String| last_error.set(message),
                }
            }
            p { class: "probe-error", "{last_error}" }
        }
    }

    fn root() -> Element {
        rsx! { ErrorProbe {} }
    }

    let mount = create_mount_point();
    render_into(&mount, root);
    yield_now().await;

    let github: web_sys::HtmlElement = mount
        .query_selector("button[data-provider='github']")
        .unwrap()
        .expect("github button")
        .dyn_into()
        .unwrap();
    github.click();
    yield_now().await;

    let probe = mount
        .query_selector(".probe-error")
        .unwrap()
        .expect("probe paragraph");
    assert_eq!(
        probe.text_content().unwrap_or_default(),
        "Invalid redirect URL: /relative"
    );
    for button in query_all(&mount, "button") {
        assert!(!button.has_attribute("disabled"), "loading should be reset");
        assert_eq!(button.get_attribute("data-loading").as_deref(), Some("false"));
    }

    cleanup(&mount);
}

// Sign-ins started through `GatedClient` stay in flight until `release_all`.
thread_local! {
    static GATES: RefCell<Vec<oneshot::Sender<()>>> = const { RefCell::new(Vec::new()) };
}

struct GatedClient;

impl OAuthClient for GatedClient {
    async fn sign_in_with_oauth(
        &self,
        provider: Provider,
        _options: OAuthOptions,
    ) -> Result<OAuthResponse, AuthError> {
        let (tx, rx) = oneshot::channel();
        GATES.with(|gates| gates.borrow_mut().push(tx));
        let _ = rx.await;
        Err(AuthError::Provider(format!("{provider} is unavailable")))
    }
}

fn release_all() -> usize {
    GATES.with(|gates| {
        let pending: Vec<_> = gates.borrow_mut().drain(..).collect();
        let count = pending.len();
        for tx in pending {
            let _ = tx.send(());
        }
        count
    })
}

fn assert_all_loading(mount: &web_sys::Element, expected: bool) {
    let buttons = query_all(mount, "button");
    assert_eq!(buttons.len(), 3);
    for button in buttons {
        let provider = button.get_attribute("data-provider").unwrap_or_default();
        assert_eq!(
            button.has_attribute("disabled"),
            expected,
            "disabled state of {provider}"
        );
        assert_eq!(
            button.get_attribute("data-loading").as_deref(),
            Some(if expected { "true" } else { "false" }),
            "data-loading of {provider}"
        );
    }
}

#[wasm_bindgen_test]
async fn in_flight_sign_in_disables_every_button() {
    #[component]
    fn GatedWidget() -> Element {
        use_context_provider(|| AuthClientCtx::new(GatedClient));
        let mut last_error = use_signal(String::new);
        rsx! {
            SocialAuth {
                providers: vec![Provider::Github, Provider::Google, Provider::Gitlab],
                social_layout: SocialLayout::Vertical,
                onerror: move |message: String| last_error.set(message),
            }
            p { class: "gated-error", "{last_error}" }
        }
    }

    fn root() -> Element {
        rsx! { GatedWidget {} }
    }

    release_all();
    let mount = create_mount_point();
    render_into(&mount, root);
    yield_now().await;
    assert_all_loading(&mount, false);

    let google: web_sys::HtmlElement = mount
        .query_selector("button[data-provider='google']")
        .unwrap()
        .expect("google button")
        .dyn_into()
        .unwrap();
    google.click();
    yield_now().await;

    // One click, one shared flag: every button reflects the pending call.
    assert_all_loading(&mount, true);

    assert_eq!(release_all(), 1, "exactly one sign-in should be pending");
    yield_now().await;

    assert_all_loading(&mount, false);
    let message = mount
        .query_selector(".gated-error")
        .unwrap()
        .expect("error paragraph")
        .text_content()
        .unwrap_or_default();
    assert_eq!(message, "google is unavailable");

    cleanup(&mount);
}

#![cfg(target_arch = "wasm32")]
use folio_wasm::{abi_version, reveal_css, FolioSite};
use js_sys::Promise;
use serde_json::json;
use serde_wasm_bindgen as swb;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn config(value: serde_json::Value) -> JsValue {
    swb::to_value(&value).unwrap()
}

fn element(id: &str) -> Element {
    let doc = web_sys::window().unwrap().document().unwrap();
    let el = doc.create_element("div").unwrap();
    el.set_id(id);
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_with_defaults() {
    assert!(FolioSite::new(JsValue::UNDEFINED).is_ok());
    assert!(FolioSite::new(JsValue::NULL).is_ok());
}

#[wasm_bindgen_test]
fn invalid_config_is_rejected() {
    let bad = config(json!({ "typing": { "interval_ms": 0 } }));
    assert!(FolioSite::new(bad).is_err());
    let bad = config(json!({ "visibility": { "default_threshold": 2.0 } }));
    assert!(FolioSite::new(bad).is_err());
}

#[wasm_bindgen_test]
fn theme_toggle_persists_and_sets_root_class() {
    let key = "folio-test-theme";
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.set_item(key, "light").unwrap();

    let mut site = FolioSite::new(config(json!({ "theme": { "storage_key": key } }))).unwrap();
    assert_eq!(site.load_theme(), "light");

    assert_eq!(site.toggle_theme(), "dark");
    assert_eq!(storage.get_item(key).unwrap().as_deref(), Some("dark"));
    let root = web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .document_element()
        .unwrap();
    assert!(root.class_list().contains("dark"));

    assert_eq!(site.toggle_theme(), "light");
    assert!(!root.class_list().contains("dark"));
    storage.remove_item(key).unwrap();
}

#[wasm_bindgen_test]
fn unknown_names_are_errors() {
    let mut site = FolioSite::new(JsValue::UNDEFINED).unwrap();
    assert!(site.is_visible("footer").is_err());
    assert!(site.set_project_filter("secret").is_err());
    assert!(site.set_field("phone", "123".into()).is_err());
}

#[wasm_bindgen_test]
fn section_observer_is_released_on_teardown() {
    let mut site = FolioSite::new(JsValue::UNDEFINED).unwrap();
    let el = element("skills-under-test");
    assert!(site.mount_section("skills", Some(el), None).unwrap());
    assert_eq!(site.live_handles(), 1);
    assert_eq!(
        site.reveal_style("skills", 2).unwrap(),
        "opacity: 0; transform: translateY(32px); transition-delay: 500ms"
    );

    site.teardown();
    assert_eq!(site.live_handles(), 0);
}

#[wasm_bindgen_test]
fn reveal_css_matches_stagger() {
    assert_eq!(
        reveal_css(true, 1, 400, 100, 64.0),
        "opacity: 1; transform: translateY(0px); transition-delay: 500ms"
    );
}

#[wasm_bindgen_test]
fn projects_filter_through_the_binding() {
    let mut site = FolioSite::new(JsValue::UNDEFINED).unwrap();
    site.set_project_filter("personal").unwrap();
    let projects: serde_json::Value = swb::from_value(site.visible_projects().unwrap()).unwrap();
    let titles: Vec<&str> = projects
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Gamified Expense Manager"]);
}

#[wasm_bindgen_test]
async fn typing_runs_to_completion_and_clears_its_interval() {
    let cfg = config(json!({ "typing": { "text": "hi!", "interval_ms": 1 } }));
    let mut site = FolioSite::new(cfg).unwrap();
    let el = element("typing-under-test");
    site.mount_typing(el.clone());
    assert_eq!(site.typed_text(), "");
    assert!(site.typing_running());

    sleep(100).await;
    assert_eq!(site.typed_text(), "hi!");
    assert_eq!(el.text_content().as_deref(), Some("hi!"));
    assert!(!site.typing_running());
    assert_eq!(site.live_handles(), 0);

    let events: serde_json::Value = swb::from_value(site.drain_events().unwrap()).unwrap();
    let finished = events
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["type"] == "typing_finished")
        .count();
    assert_eq!(finished, 1);
}

#[wasm_bindgen_test]
async fn splash_timeout_fires_once() {
    let mut site = FolioSite::new(config(json!({ "loading_ms": 5 }))).unwrap();
    let fired = js_sys::Function::new_no_args(
        "globalThis.__folioSplash = (globalThis.__folioSplash || 0) + 1;",
    );
    site.after_loading(fired);
    assert_eq!(site.live_handles(), 1);
    sleep(50).await;
    assert_eq!(site.live_handles(), 0);
    let count =
        js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("__folioSplash")).unwrap();
    assert_eq!(count.as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
fn cursor_mount_and_hover_bindings_are_released() {
    let mut site = FolioSite::new(JsValue::UNDEFINED).unwrap();
    let halo: HtmlElement = element("halo-under-test").dyn_into().unwrap();
    let dot: HtmlElement = element("dot-under-test").dyn_into().unwrap();
    site.mount_cursor(halo, dot);

    // Headless browsers may report touch support; then nothing is registered.
    if site.cursor_running() {
        let link = element("link-under-test");
        let key = site.bind_hoverable(&link).unwrap();
        assert!(site.unbind_hoverable(key));
        assert!(!site.unbind_hoverable(key));
    }
    site.teardown();
    assert_eq!(site.live_handles(), 0);
}

#[wasm_bindgen_test]
async fn typing_resumes_after_teardown_and_remount() {
    let cfg = config(json!({ "typing": { "text": "resume", "interval_ms": 1 } }));
    let mut site = FolioSite::new(cfg).unwrap();
    let el = element("typing-remount-under-test");
    site.mount_typing(el.clone());
    assert!(site.typing_running());

    site.teardown();
    assert!(!site.typing_running());
    assert_eq!(site.live_handles(), 0);

    site.mount_typing(el.clone());
    assert!(site.typing_running());
    sleep(100).await;
    assert_eq!(site.typed_text(), "resume");
    assert_eq!(el.text_content().as_deref(), Some("resume"));
    assert!(!site.typing_running());
    assert_eq!(site.live_handles(), 0);

    // A finished simulator just shows its text.
    site.teardown();
    let fresh = element("typing-done-under-test");
    site.mount_typing(fresh.clone());
    assert!(!site.typing_running());
    assert_eq!(fresh.text_content().as_deref(), Some("resume"));
}

#[wasm_bindgen_test]
fn parallax_listener_is_released_on_teardown() {
    let mut site = FolioSite::new(JsValue::UNDEFINED).unwrap();
    let hero = element("hero-under-test");
    let card: HtmlElement = element("card-under-test").dyn_into().unwrap();
    site.mount_parallax(&hero, card);
    assert_eq!(site.live_handles(), 1);
    site.teardown();
    assert_eq!(site.live_handles(), 0);
}

#[wasm_bindgen_test]
fn nav_reports_scroll_changes_and_releases_its_listener() {
    let window = web_sys::window().unwrap();
    let filler: HtmlElement = element("nav-filler-under-test").dyn_into().unwrap();
    filler.style().set_property("height", "5000px").unwrap();
    window.scroll_to_with_x_and_y(0.0, 500.0);

    let on_change = js_sys::Function::new_with_args(
        "state",
        "(globalThis.__folioNav = globalThis.__folioNav || []).push(state.scrolled);",
    );
    let mut site = FolioSite::new(JsValue::UNDEFINED).unwrap();
    site.mount_nav(Some(on_change));
    assert_eq!(site.live_handles(), 1);

    window.scroll_to_with_x_and_y(0.0, 0.0);
    window
        .dispatch_event(&web_sys::Event::new("scroll").unwrap())
        .unwrap();

    let seen = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("__folioNav")).unwrap();
    let seen: Vec<bool> = swb::from_value(seen).unwrap();
    assert_eq!(seen, vec![true, false]);

    site.teardown();
    assert_eq!(site.live_handles(), 0);
    filler.remove();
}

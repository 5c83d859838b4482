//! Browser-side checks, run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use rnd_hub_home::background::{
    BirdsConfig, DomScriptInjector, EffectFactory, Library, ScriptInjector, VantaBirds,
};
use rnd_hub_home::error::{EffectError, LoadError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const INLINE_OK: Library = Library {
    id: "inline-ok",
    src: "data:text/javascript,window.__inlineOk%20%3D%20true%3B",
};

const UNREACHABLE: Library = Library {
    id: "unreachable",
    src: "https://unreachable.invalid/missing.js",
};

fn script_tag(src: &str) -> Option<web_sys::Element> {
    gloo::utils::document()
        .query_selector(&format!("script[src=\"{src}\"]"))
        .ok()
        .flatten()
}

#[wasm_bindgen_test]
async fn appended_script_loads() {
    let load = DomScriptInjector.inject(&INLINE_OK);

    let tag: web_sys::HtmlScriptElement = script_tag(INLINE_OK.src)
        .expect("script tag appended")
        .dyn_into()
        .unwrap();
    assert!(tag.async_());

    assert_eq!(load.await, Ok(()));
    let flag = js_sys::Reflect::get(&gloo::utils::window(), &JsValue::from_str("__inlineOk"))
        .expect("window readable");
    assert_eq!(flag, JsValue::TRUE);
}

#[wasm_bindgen_test]
async fn script_error_maps_to_failed() {
    let load = DomScriptInjector.inject(&UNREACHABLE);
    assert!(script_tag(UNREACHABLE.src).is_some());

    assert_eq!(load.await, Err(LoadError::Failed { id: "unreachable" }));
}

#[wasm_bindgen_test]
fn options_point_el_at_the_mount_target() {
    let target = gloo::utils::document().create_element("div").unwrap();
    let options = BirdsConfig::default().to_options(&target).unwrap();

    let el = js_sys::Reflect::get(&options, &JsValue::from_str("el")).unwrap();
    assert_eq!(el, JsValue::from(target));

    let quantity = js_sys::Reflect::get(&options, &JsValue::from_str("quantity")).unwrap();
    assert_eq!(quantity.as_f64(), Some(4.0));
    let gyro = js_sys::Reflect::get(&options, &JsValue::from_str("gyroControls")).unwrap();
    assert_eq!(gyro.as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn missing_vanta_global_is_unavailable() {
    let target = gloo::utils::document().create_element("div").unwrap();

    match VantaBirds::default().create(&target) {
        Err(EffectError::Unavailable(_)) => {}
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("VANTA should not be defined in the test page"),
    }
}

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

use crate::app::SharedScripts;
use crate::background::{acquire_task, EffectLifecycle, VantaBirds, BIRDS_PLAN};

/// Full-page birds animation behind the content.
///
/// Each mount owns its own effect lifecycle; unmounting tears it down and
/// drops the loading task even if the scripts are still loading.
#[function_component(BirdsBackground)]
pub fn birds_background() -> Html {
    let mount = use_node_ref();
    let scripts = use_context::<SharedScripts>();

    {
        let mount = mount.clone();
        use_effect_with((), move |_| {
            let lifecycle = Rc::new(EffectLifecycle::new(VantaBirds::default()));

            let abort = match scripts {
                Some(scripts) => {
                    let (task, abort) = acquire_task(
                        scripts.shared(),
                        &BIRDS_PLAN,
                        lifecycle.clone(),
                        move || mount.cast::<Element>(),
                    );
                    spawn_local(task);
                    Some(abort)
                }
                None => {
                    log::warn!("no script registry in context; background stays static");
                    None
                }
            };

            move || {
                lifecycle.teardown();
                if let Some(abort) = abort {
                    abort.abort();
                }
            }
        });
    }

    html! {
        <div ref={mount} class="fixed inset-0 z-0" aria-hidden="true" />
    }
}

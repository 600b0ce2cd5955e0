use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::prelude::use_effect_once;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTrigger {
    /// Reveal right after the first render.
    Mount,
    /// Reveal the first time the element scrolls into view.
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMotion {
    FadeUp,
    FadeLeft,
}

impl RevealMotion {
    fn class(self) -> &'static str {
        match self {
            RevealMotion::FadeUp => "fade-up",
            RevealMotion::FadeLeft => "fade-left",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(RevealTrigger::Visible)]
    pub trigger: RevealTrigger,
    #[prop_or(RevealMotion::FadeUp)]
    pub motion: RevealMotion,
    #[prop_or_default]
    pub delay_ms: u32,
    /// Overrides the stylesheet's default transition length.
    #[prop_or_default]
    pub duration_ms: Option<u32>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in once. Purely cosmetic: the content is always in the
/// DOM, only its opacity and offset change.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        let trigger = props.trigger;
        use_effect_once(move || {
            let observer = match trigger {
                RevealTrigger::Mount => {
                    revealed.set(true);
                    None
                }
                RevealTrigger::Visible => observe_once(&node, revealed),
            };
            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        });
    }

    let style = transition_style(props.delay_ms, props.duration_ms);

    html! {
        <div
            ref={node}
            class={classes!(
                "reveal",
                props.motion.class(),
                (*revealed).then(|| "revealed"),
                props.class.clone()
            )}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}

pub fn transition_style(delay_ms: u32, duration_ms: Option<u32>) -> Option<String> {
    let mut style = String::new();
    if let Some(duration) = duration_ms {
        style.push_str(&format!("transition-duration: {}ms;", duration));
    }
    if delay_ms > 0 {
        style.push_str(&format!("transition-delay: {}ms;", delay_ms));
    }
    if style.is_empty() {
        None
    } else {
        Some(style)
    }
}

// Keeps the closure alive alongside the observer; both are dropped together.
fn observe_once(
    node: &NodeRef,
    revealed: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let element = match node.cast::<Element>() {
        Some(element) => element,
        None => {
            revealed.set(true);
            return None;
        }
    };

    let on_revealed = revealed.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if intersecting {
                on_revealed.set(true);
                observer.disconnect();
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(0.1));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(&element);
            Some((observer, callback))
        }
        Err(err) => {
            log::warn!("IntersectionObserver unavailable, revealing immediately: {:?}", err);
            revealed.set(true);
            None
        }
    }
}

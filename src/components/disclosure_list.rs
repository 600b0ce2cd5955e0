use web_sys::MouseEvent;
use yew::prelude::*;

use crate::disclosure::{DisclosureAction, DisclosureItem, DisclosureState};

// Keeps the answer's height at zero while the body row is collapsed.
const ANSWER_STYLE: &str = "overflow: hidden; min-height: 0;";

#[derive(Properties, PartialEq)]
pub struct DisclosureListProps {
    pub items: Vec<DisclosureItem>,
}

/// Accordion of question/answer pairs where at most one answer is open.
#[function_component(DisclosureList)]
pub fn disclosure_list(props: &DisclosureListProps) -> Html {
    let len = props.items.len();
    let state = use_reducer(move || DisclosureState::new(len));

    // A different item count invalidates the expanded index.
    {
        let state = state.clone();
        use_effect_with_deps(
            move |len| {
                if state.len() != *len {
                    state.dispatch(DisclosureAction::Reset(*len));
                }
                || ()
            },
            len,
        );
    }

    html! {
        <div class="disclosure-list">
            {
                props.items.iter().enumerate().map(|(index, item)| {
                    let item_state = state.item_state(index);
                    let expanded = item_state.is_expanded();
                    let toggle = {
                        let state = state.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            state.dispatch(DisclosureAction::Toggle(index));
                        })
                    };

                    html! {
                        <div key={index} class="disclosure-item" data-state={item_state.as_str()}>
                            <button
                                class="disclosure-header"
                                aria-expanded={expanded.to_string()}
                                onclick={toggle}
                            >
                                <span class="disclosure-question">{item.question}</span>
                                <span class="disclosure-glyph">{item_state.glyph()}</span>
                            </button>
                            <div
                                class={classes!("disclosure-body", expanded.then(|| "expanded"))}
                                style={item_state.body_style()}
                                aria-hidden={(!expanded).to_string()}
                            >
                                <div class="disclosure-answer" style={ANSWER_STYLE}>
                                    <p>{item.answer}</p>
                                </div>
                            </div>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

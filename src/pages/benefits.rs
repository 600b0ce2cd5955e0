use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{BENEFITS, BENEFITS_HEADING, COMPANY};

// Cards fade in one after another.
pub const STAGGER_MS: u32 = 200;
const CARD_DURATION_MS: u32 = 300;

#[function_component(Benefits)]
pub fn benefits() -> Html {
    html! {
        <section class="section benefits">
            <h2>
                {BENEFITS_HEADING}{" "}<span class="accent">{COMPANY}</span>
            </h2>
            <div class="benefit-grid">
                {
                    BENEFITS.iter().enumerate().map(|(index, benefit)| html! {
                        <Reveal
                            key={index}
                            class={classes!("benefit-card")}
                            delay_ms={index as u32 * STAGGER_MS}
                            duration_ms={CARD_DURATION_MS}
                        >
                            <h3>{benefit.title}</h3>
                            <p>{benefit.description}</p>
                        </Reveal>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

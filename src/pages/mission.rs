use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{MISSION, MISSION_TAGLINE};

const REVEAL_MS: u32 = 600;

#[function_component(Mission)]
pub fn mission() -> Html {
    html! {
        <section class="section mission">
            <Reveal duration_ms={REVEAL_MS}>
                <h2>
                    {MISSION.title}<br />{MISSION_TAGLINE}
                </h2>
                <p>{MISSION.body}</p>
            </Reveal>
        </section>
    }
}

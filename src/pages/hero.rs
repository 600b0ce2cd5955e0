use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealMotion, RevealTrigger};
use crate::config;
use crate::content::{HERO_BADGE, HERO_CTA, HERO_HEADING, HERO_HEADING_ACCENT, HERO_SUBHEADING};

#[function_component(Hero)]
pub fn hero() -> Html {
    let book_session = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        let href = config::contact_href();
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(&href) {
                log::warn!("Failed to jump to {}: {:?}", href, err);
            }
        }
    });

    html! {
        <section class="hero">
            <div class="hero-content">
                <Reveal trigger={RevealTrigger::Mount}>
                    <span class="hero-badge">{HERO_BADGE}</span>
                    <h1>
                        {HERO_HEADING}<br />
                        <span class="accent">{HERO_HEADING_ACCENT}</span>
                    </h1>
                    <p class="hero-subheading">{HERO_SUBHEADING}</p>
                    <button class="hero-cta" onclick={book_session}>
                        {HERO_CTA}
                    </button>
                </Reveal>
            </div>

            <Reveal
                trigger={RevealTrigger::Mount}
                motion={RevealMotion::FadeLeft}
                delay_ms={200}
                class={classes!("hero-image")}
            >
                <div class="image-placeholder">
                    {"[Insert Mining Hero Image]"}
                </div>
            </Reveal>
        </section>
    }
}

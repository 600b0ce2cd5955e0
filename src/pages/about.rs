use yew::prelude::*;

use crate::content::ABOUT;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section class="section about">
            <div class="about-inner">
                <h2>{ABOUT.title}</h2>
                <p>{ABOUT.body}</p>
                <div class="team-placeholder">{"[Team]"}</div>
            </div>
        </section>
    }
}

use yew::prelude::*;

use crate::content::SERVICES;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section class="section services">
            <div class="services-copy">
                <h2>{SERVICES.title}</h2>
                <p>{SERVICES.body}</p>
                <ul class="role-list">
                    {
                        SERVICES.items.iter().map(|role| html! {
                            <li key={*role}>
                                <span class="role-check">{"✓"}</span>{" "}{*role}
                            </li>
                        }).collect::<Html>()
                    }
                </ul>
            </div>
            <div class="services-image">
                {"[Workforce Image Placeholder]"}
            </div>
        </section>
    }
}

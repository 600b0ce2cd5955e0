use yew::prelude::*;

use crate::components::disclosure_list::DisclosureList;
use crate::content::{FAQS, FAQ_HEADING};

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section class="section faq">
            <h2>{FAQ_HEADING}</h2>
            <DisclosureList items={FAQS.to_vec()} />
        </section>
    }
}

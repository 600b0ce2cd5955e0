use yew::prelude::*;

use crate::config::CONTACT_SECTION_ID;
use crate::content::{CONTACT, CONTACT_HEADING, CONTACT_LEAD};

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={CONTACT_SECTION_ID} class="section contact">
            <h2>{CONTACT_HEADING}</h2>
            <p class="contact-lead">{CONTACT_LEAD}</p>

            <div class="contact-cards">
                <div class="contact-card">
                    <h4>{"Email"}</h4>
                    <div class="contact-value">{CONTACT.email}</div>
                </div>
                <div class="contact-card">
                    <h4>{"Phone"}</h4>
                    <div class="contact-value">{CONTACT.phone}</div>
                </div>
            </div>

            <p class="contact-address">{CONTACT.address}</p>
        </section>
    }
}

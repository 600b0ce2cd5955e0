use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::content::{FOOTER_LINKS, FOOTER_OWNER};

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, FOOTER_OWNER)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="footer">
            <div>{copyright_line(year)}</div>
            <div class="footer-links">
                { for FOOTER_LINKS.iter().map(|label| html! { <span>{*label}</span> }) }
            </div>
        </footer>
    }
}

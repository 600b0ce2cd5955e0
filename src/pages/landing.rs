use stylist::Style;
use yew::prelude::*;

use crate::config::RenderOptions;
use crate::pages::{
    about::About, benefits::Benefits, contact::Contact, faq::Faq, footer::Footer, hero::Hero,
    mission::Mission, services::Services,
};
use crate::theme::{self, Theme};

#[derive(Properties, PartialEq, Default)]
pub struct LandingPageProps {
    #[prop_or_default]
    pub options: RenderOptions,
    #[prop_or_default]
    pub theme: Theme,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let style = use_memo(
        |theme: &Theme| match Style::new(theme::stylesheet(theme).as_str()) {
            Ok(style) => Some(style),
            Err(err) => {
                log::error!("Failed to mount page stylesheet: {}", err);
                None
            }
        },
        props.theme.clone(),
    );

    use_effect_with_deps(
        |_| {
            log::info!("Landing page mounted");
            || ()
        },
        (),
    );

    let class = (*style).as_ref().map(|style| style.get_class_name().to_string());

    html! {
        <div class={classes!("landing-page", class)} style={props.options.container_style()}>
            <Hero />
            <Mission />
            <Benefits />
            <Services />
            <About />
            <Faq />
            <Contact />
            <Footer />
        </div>
    }
}

use log::{info, warn, Level};

use dojo_landing::config::{self, RenderOptions, MOUNT_ID};
use dojo_landing::pages::landing::{LandingPage, LandingPageProps};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let options = config::render_options().unwrap_or_else(|err| {
        warn!("Ignoring layout hints: {}", err);
        RenderOptions::default()
    });
    let props = LandingPageProps {
        options,
        ..Default::default()
    };

    let host = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(MOUNT_ID));

    match host {
        Some(root) => {
            info!("Mounting landing page into #{}", MOUNT_ID);
            yew::Renderer::<LandingPage>::with_root_and_props(root, props).render();
        }
        None => {
            info!("#{} not found, mounting landing page into <body>", MOUNT_ID);
            yew::Renderer::<LandingPage>::with_props(props).render();
        }
    }
}

use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod config;
mod content;
mod scroll;
mod reveal {
    pub mod count_up;
    pub mod error;
    pub mod frame;
    pub mod hooks;
    pub mod latch;
    pub mod observer;
}
mod components {
    pub mod count_up_number;
    pub mod film_grain;
    pub mod icon;
    pub mod reveal;
    pub mod section_heading;
}
mod sections {
    pub mod contact;
    pub mod craft;
    pub mod footer;
    pub mod founders;
    pub mod header;
    pub mod hero;
    pub mod performance;
    pub mod portfolio;
    pub mod process;
    pub mod vision;
}
mod pages {
    pub mod landing;
}

use content::SiteContent;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
struct AppProps {
    content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <Landing content={props.content.clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let content = match SiteContent::load() {
        Ok(content) => Rc::new(content),
        Err(err) => {
            error!("{}", err);
            return;
        }
    };

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps { content }).render();
}

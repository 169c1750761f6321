use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;

use dashcam_landing::config;
use dashcam_landing::pages::landing::Landing;
use dashcam_landing::self_check::{run_checks, Report};
use dashcam_landing::theme::Theme;

#[function_component]
fn App() -> Html {
    let theme = use_memo(|_| Theme::builtin(), ());

    html! {
        <ContextProvider<Rc<Theme>> context={theme}>
            <Landing />
        </ContextProvider<Rc<Theme>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    let report = Report::new(run_checks());
    for line in report.lines() {
        info!("{}", line);
    }
    if !report.passed {
        warn!("self-check found {} problem(s)", report.failures().count());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

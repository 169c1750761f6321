use chrono::Datelike;
use yew::prelude::*;

use crate::components::cards::{
    use_theme, BrandCard, CheckItem, FeatureCard, GalleryImage, PackageCard, Pill, StatCard,
};
use crate::components::faq::Faq;
use crate::components::icon::Icon;
use crate::components::quote_form::QuoteForm;
use crate::content;
use crate::icons::IconKind;
use crate::motion::{Motion, Reveal};

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1549923746-c502d488b3ea?q=80&w=2000&auto=format&fit=crop";
const MIRROR_IMAGE: &str =
    "https://images.unsplash.com/photo-1518551933037-763c4f5804a3?q=80&w=1600&auto=format&fit=crop";

#[function_component(TopBar)]
fn top_bar() -> Html {
    let theme = use_theme();
    let business = content::business();
    html! {
        <div class="top-bar">
            <div class="container top-bar-inner">
                <div class="top-bar-title">{business.tagline()}</div>
                <div class="row">
                    <a href={business.tel_href()} class="round-button solid" style={theme.solid_style()}>
                        <Icon kind={IconKind::Phone} class="icon-sm" />
                        {format!(" Call {}", business.phone_display)}
                    </a>
                    <a href="#quote" class="round-button outline hide-mobile">{"Get a Quote"}</a>
                </div>
            </div>
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let theme = use_theme();
    let business = content::business();
    html! {
        <header class="hero">
            <div class="hero-background">
                <img src={HERO_IMAGE} alt="Clean modern car interior with dash cam perspective" />
                <div class="hero-shade"></div>
            </div>
            <div class="container hero-content">
                <Reveal immediate=true>
                    <h1>{"Dash Cameras Installed in Concord, NC"}</h1>
                </Reveal>
                <Reveal immediate=true delay_ms={50}>
                    <p class="hero-subtitle">
                        {"Keep evidence on your side. Clean, hidden wiring with professional hardwiring and parking\u{2011}mode setup. Morning drop\u{2011}off, afternoon pickup."}
                    </p>
                </Reveal>
                <div class="hero-cta-group">
                    <a href={business.tel_href()} class="hero-cta white">
                        <Icon kind={IconKind::Phone} class="icon-md" />{" Call Now"}
                    </a>
                    <a href="#quote" class="hero-cta" style={theme.translucent_style()}>
                        {"Get a Fast Quote"}
                    </a>
                    <a href={business.directions_href()} target="_blank" rel="noreferrer"
                        class="hero-cta" style={theme.translucent_style()}>
                        <Icon kind={IconKind::MapPin} class="icon-md" />{" Get Directions"}
                    </a>
                </div>
                <div class="hero-pills">
                    <Pill>{"★★★★★ Hundreds of 5\u{2011}star installs"}</Pill>
                    <Pill>{"Certified installers"}</Pill>
                    <Pill>{"Lifetime workmanship"}</Pill>
                </div>
            </div>
        </header>
    }
}

#[function_component(TrustStrip)]
fn trust_strip() -> Html {
    html! {
        <section class="trust-strip">
            <div class="container stat-grid">
                { for content::stats().iter().map(|s| html! { <StatCard stat={*s} /> }) }
            </div>
        </section>
    }
}

#[function_component(Brands)]
fn brands() -> Html {
    html! {
        <section class="section">
            <h2>{"Brands we install"}</h2>
            <p class="muted">{"We stock and support these leading dash cam brands."}</p>
            <div class="grid four">
                { for content::brands().iter().map(|b| html! { <BrandCard key={b.name} brand={*b} /> }) }
            </div>
        </section>
    }
}

#[function_component(WhyDashCam)]
fn why_dash_cam() -> Html {
    html! {
        <section class="section">
            <div class="two-col center">
                <div>
                    <h2>{"Why a Dash Cam?"}</h2>
                    <p class="muted">
                        {"Accident evidence, hit\u{2011}and\u{2011}run protection, parking\u{2011}lot recording, teen driver accountability, and fleet safety. We match the right camera and setup to your vehicle and goals."}
                    </p>
                    <ul class="check-list two">
                        { for content::why_points().iter().map(|p| html! { <CheckItem text={*p} /> }) }
                    </ul>
                </div>
                <div class="relative">
                    <img class="rounded-image" src={MIRROR_IMAGE} alt="Discreet dash camera mounted behind mirror" />
                    <div class="floating-note">
                        <Icon kind={IconKind::CarFront} class="icon-sm" />{" Clean, hidden wiring"}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Chooser)]
fn chooser() -> Html {
    let theme = use_theme();
    html! {
        <section class="section">
            <div class="panel">
                <h2>{"Which setup fits your vehicle?"}</h2>
                <div class="grid three">
                    { for content::features().iter().map(|f| html! { <FeatureCard feature={*f} /> }) }
                </div>
                <a href="#quote" class="solid-button" style={theme.solid_style()}>{"Ask a Pro"}</a>
            </div>
        </section>
    }
}

#[function_component(Packages)]
fn packages() -> Html {
    html! {
        <section class="section">
            <h2>{"Packages"}</h2>
            <p class="muted">
                {"No one\u{2011}size\u{2011}fits\u{2011}all pricing. We recommend the right hardware and a clean install after a quick consult."}
            </p>
            <div class="grid three">
                { for content::packages().iter().map(|p| html! { <PackageCard key={p.tier} package={*p} /> }) }
            </div>
            <div class="add-ons">
                <strong>{"Popular add\u{2011}ons:"}</strong>
                {format!(" {}, ", content::add_ons().join(", "))}
                <em>{"DroneMobile XC Dash Camera"}</em>
                {" (service not included for the first year)."}
            </div>
        </section>
    }
}

#[function_component(Gallery)]
fn gallery() -> Html {
    let images = use_memo(|_| content::gallery(), ());
    html! {
        <section class="section">
            <h2>{"Install Gallery"}</h2>
            <p class="muted">{"A few examples of our tidy cable management and discreet mounting."}</p>
            <div class="grid three">
                { for images.iter().map(|entry| html! { <GalleryImage entry={entry.clone()} /> }) }
            </div>
        </section>
    }
}

#[function_component(InstallDifference)]
fn install_difference() -> Html {
    html! {
        <section class="section">
            <div class="panel">
                <h2>{"Our Install Difference"}</h2>
                <div class="two-col">
                    <ul class="check-list">
                        { for content::install_difference().iter().map(|p| html! { <CheckItem text={*p} /> }) }
                    </ul>
                    <div class="note-box">
                        <p>
                            <strong>{"Customer\u{2011}supplied units:"}</strong>
                            {" We can install your dash cam, but we cannot warranty customer\u{2011}supplied products or outcomes. Installation services only; product concerns go to the manufacturer."}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    let theme = use_theme();
    let business = content::business();
    html! {
        <section class="section">
            <div class="panel two-col">
                <div>
                    <h2>{"Visit Us"}</h2>
                    <p class="muted">
                        {"Stop by our Concord showroom to see dash cams in person and chat with a certified installer."}
                    </p>
                    <div class="contact-lines">
                        <div><Icon kind={IconKind::MapPin} class="icon-md" />{format!(" {} \u{2022} {}", business.city, business.name)}</div>
                        <div><Icon kind={IconKind::Phone} class="icon-md" />{format!(" {}", business.phone_display)}</div>
                    </div>
                    <div class="row">
                        <a href={business.tel_href()} class="solid-button" style={theme.solid_style()}>
                            <Icon kind={IconKind::Phone} class="icon-sm" />{" Call Now"}
                        </a>
                        <a href={business.directions_href()} target="_blank" rel="noreferrer" class="outline-button">
                            <Icon kind={IconKind::MapPin} class="icon-sm" />{" Directions"}
                        </a>
                    </div>
                </div>
                <div class="map-frame">
                    <iframe title="Map" src={business.map_embed_src()} loading="lazy"></iframe>
                </div>
            </div>
        </section>
    }
}

#[function_component(StickyCta)]
fn sticky_cta() -> Html {
    let theme = use_theme();
    html! {
        <div class="sticky-cta">
            <div class="sticky-cta-inner">
                <div class="sticky-cta-title">{"Ready to protect your drive?"}</div>
                <div class="row">
                    <a href={content::business().tel_href()} class="solid-button" style={theme.solid_style()}>
                        <Icon kind={IconKind::Phone} class="icon-sm" />{" Call"}
                    </a>
                    <a href="#quote" class="outline-button">{"Get Quote"}</a>
                </div>
            </div>
        </div>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();
    let business = content::business();
    html! {
        <footer class="footer">
            <div class="container">
                {format!("© {} {} \u{2022} Dash Cameras Installed in {}", year, business.name, business.city)}
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                log::info!("Rendering landing page");
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let motion_css = Motion::registered().map(|m| m.stylesheet).unwrap_or_default();

    html! {
        <div class="landing-page">
            <TopBar />
            <Hero />
            <TrustStrip />
            <Brands />
            <WhyDashCam />
            <Chooser />
            <Packages />
            <Gallery />
            <InstallDifference />
            <Faq />
            <QuoteForm />
            <Contact />
            <StickyCta />
            <Footer />
            <style>{motion_css}</style>
            <style>{LANDING_CSS}</style>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        background: linear-gradient(to bottom, #fafafa, #f5f5f5);
        color: #171717;
        font-family: system-ui, -apple-system, sans-serif;
    }
    .container, .section {
        max-width: 80rem;
        margin: 0 auto;
        padding-left: 1rem;
        padding-right: 1rem;
    }
    .section {
        padding-top: 4rem;
        padding-bottom: 4rem;
    }
    .section h2, .panel h2 {
        font-size: 1.875rem;
        font-weight: 600;
        margin: 0;
    }
    .muted {
        margin-top: 0.5rem;
        color: #404040;
    }
    .row {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        flex-wrap: wrap;
    }
    .relative {
        position: relative;
    }
    .icon {
        display: inline-block;
        vertical-align: middle;
    }
    .icon-sm { width: 1rem; height: 1rem; }
    .icon-md { width: 1.25rem; height: 1.25rem; }
    .icon-lg { width: 1.5rem; height: 1.5rem; }
    .flex-none { flex: none; }

    .top-bar {
        position: sticky;
        top: 0;
        z-index: 50;
        border-bottom: 1px solid #e5e5e5;
        background: rgba(255, 255, 255, 0.8);
        backdrop-filter: blur(8px);
    }
    .top-bar-inner {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding-top: 0.5rem;
        padding-bottom: 0.5rem;
    }
    .top-bar-title {
        font-weight: 500;
    }
    .round-button {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        border-radius: 9999px;
        padding: 0.375rem 0.75rem;
        font-size: 0.875rem;
        text-decoration: none;
    }
    .round-button.solid {
        color: #fff;
    }
    .round-button.outline {
        border: 1px solid #e5e5e5;
        color: inherit;
    }

    .hero {
        position: relative;
        overflow: hidden;
    }
    .hero-background {
        position: absolute;
        inset: 0;
        z-index: -1;
    }
    .hero-background img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0.7;
    }
    .hero-shade {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom, rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.3), transparent);
    }
    .hero-content {
        padding-top: 8rem;
        padding-bottom: 8rem;
    }
    .hero h1 {
        font-size: 3rem;
        font-weight: 700;
        color: #fff;
        margin: 0;
    }
    .hero-subtitle {
        margin-top: 1rem;
        max-width: 42rem;
        color: rgba(255, 255, 255, 0.9);
    }
    .hero-cta-group, .hero-pills {
        margin-top: 2rem;
        display: flex;
        flex-wrap: wrap;
        align-items: center;
        gap: 0.75rem;
    }
    .hero-cta {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        border-radius: 0.75rem;
        padding: 0.75rem 1.25rem;
        font-weight: 500;
        color: #fff;
        text-decoration: none;
        box-shadow: inset 0 0 0 1px rgba(255, 255, 255, 0.2);
    }
    .hero-cta.white {
        background: #fff;
        color: #000;
    }
    .hero-cta:hover, .solid-button:hover, .round-button.solid:hover {
        opacity: 0.9;
    }
    .pill {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        border: 1px solid rgba(255, 255, 255, 0.5);
        border-radius: 9999px;
        padding: 0.25rem 0.75rem;
        font-size: 0.875rem;
        color: rgba(255, 255, 255, 0.9);
    }

    .trust-strip {
        border-top: 1px solid #e5e5e5;
        border-bottom: 1px solid #e5e5e5;
        background: #fff;
    }
    .stat-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 1rem;
        padding-top: 1.5rem;
        padding-bottom: 1.5rem;
    }
    .stat {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }

    .grid {
        margin-top: 1.5rem;
        display: grid;
        gap: 1rem;
    }
    .grid.four { grid-template-columns: repeat(4, 1fr); }
    .grid.three { grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
    .two-col {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 2rem;
        align-items: start;
    }
    .two-col.center {
        align-items: center;
    }

    .brand-card {
        border: 1px solid #e5e5e5;
        border-radius: 1rem;
        background: #fff;
        padding: 1rem;
        color: inherit;
        text-decoration: none;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .brand-card:hover {
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    }
    .brand-name {
        font-size: 0.875rem;
        font-weight: 500;
    }
    .brand-card img {
        margin-top: 0.75rem;
        width: 100%;
        aspect-ratio: 1 / 1;
        object-fit: contain;
        border: 1px solid #e5e5e5;
        border-radius: 0.75rem;
    }
    .gallery-image {
        width: 100%;
        aspect-ratio: 16 / 9;
        object-fit: cover;
        border: 1px solid #e5e5e5;
        border-radius: 0.75rem;
    }

    .check-list, .package-bullets {
        list-style: none;
        padding: 0;
        margin-top: 1.5rem;
        display: grid;
        gap: 0.75rem;
        font-size: 0.875rem;
    }
    .check-list.two {
        grid-template-columns: 1fr 1fr;
    }
    .check-item {
        display: flex;
        align-items: flex-start;
        gap: 0.5rem;
    }
    .rounded-image {
        width: 100%;
        border-radius: 1rem;
        border: 1px solid #e5e5e5;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    }
    .floating-note {
        position: absolute;
        bottom: -1rem;
        right: -1rem;
        border: 1px solid #e5e5e5;
        border-radius: 1rem;
        background: rgba(255, 255, 255, 0.8);
        backdrop-filter: blur(8px);
        padding: 0.75rem 1rem;
        font-size: 0.875rem;
    }

    .panel {
        border: 1px solid #e5e5e5;
        border-radius: 1.5rem;
        background: #fff;
        padding: 2.5rem;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .card {
        position: relative;
        border: 1px solid #e5e5e5;
        border-radius: 1rem;
        background: rgba(255, 255, 255, 0.8);
        backdrop-filter: blur(8px);
        padding: 1.5rem;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .card h3 {
        font-size: 1.125rem;
        font-weight: 600;
        margin: 0;
    }
    .card-title-row {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .card-desc {
        margin-top: 0.75rem;
        font-size: 0.875rem;
        color: #404040;
    }
    .package-card {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .package-badge {
        position: absolute;
        top: -0.75rem;
        right: 1rem;
        border-radius: 9999px;
        color: #fff;
        font-size: 0.75rem;
        padding: 0.25rem 0.75rem;
    }
    .package-cta, .solid-button {
        display: inline-flex;
        justify-content: center;
        align-items: center;
        gap: 0.5rem;
        margin-top: 1.5rem;
        border: none;
        border-radius: 0.75rem;
        color: #fff;
        padding: 0.625rem 1.25rem;
        font-size: 0.875rem;
        text-decoration: none;
        cursor: pointer;
    }
    .package-cta {
        margin-top: auto;
    }
    .outline-button {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        margin-top: 1.5rem;
        border: 1px solid #e5e5e5;
        border-radius: 0.75rem;
        padding: 0.5rem 1rem;
        font-size: 0.875rem;
        color: inherit;
        text-decoration: none;
    }
    .add-ons {
        margin-top: 1.5rem;
        font-size: 0.875rem;
        color: #404040;
    }
    .note-box {
        border: 1px solid #e5e5e5;
        border-radius: 1rem;
        background: #fafafa;
        padding: 1rem;
        font-size: 0.875rem;
    }

    .faq-grid {
        margin-top: 1rem;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1rem;
    }
    .faq-item {
        border: 1px solid #e5e5e5;
        border-radius: 1rem;
        background: #fff;
        padding: 1rem;
    }
    .faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        background: none;
        border: none;
        padding: 0;
        font: inherit;
        font-weight: 500;
        text-align: left;
        cursor: pointer;
    }
    .faq-answer {
        display: none;
        margin-top: 0.5rem;
        font-size: 0.875rem;
        color: #404040;
    }
    .faq-item.open .faq-answer {
        display: block;
    }

    .quote-form {
        display: grid;
        gap: 1rem;
    }
    .form-field {
        display: grid;
        gap: 0.25rem;
    }
    .form-field label {
        font-size: 0.875rem;
    }
    .form-field input, .form-field select {
        border: 1px solid #e5e5e5;
        border-radius: 0.75rem;
        padding: 0.5rem 0.75rem;
        font: inherit;
    }
    .consent {
        display: flex;
        align-items: flex-start;
        gap: 0.5rem;
        font-size: 0.75rem;
        color: #525252;
    }
    .form-notice {
        font-size: 0.875rem;
        color: #404040;
    }

    .contact-lines {
        margin-top: 1rem;
        display: grid;
        gap: 0.25rem;
        font-size: 0.875rem;
    }
    .map-frame {
        aspect-ratio: 16 / 9;
        width: 100%;
        overflow: hidden;
        border: 1px solid #e5e5e5;
        border-radius: 0.75rem;
    }
    .map-frame iframe {
        width: 100%;
        height: 100%;
        border: none;
    }

    .sticky-cta {
        position: fixed;
        left: 0;
        right: 0;
        bottom: 0.75rem;
        z-index: 50;
        padding: 0 1rem;
    }
    .sticky-cta-inner {
        max-width: 48rem;
        margin: 0 auto;
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 0.75rem;
        border: 1px solid #e5e5e5;
        border-radius: 1rem;
        background: rgba(255, 255, 255, 0.9);
        backdrop-filter: blur(8px);
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        padding: 0.75rem;
    }
    .sticky-cta-inner .solid-button, .sticky-cta-inner .outline-button {
        margin-top: 0;
    }
    .sticky-cta-title {
        font-weight: 500;
    }
    .footer {
        border-top: 1px solid #e5e5e5;
        background: rgba(255, 255, 255, 0.7);
        padding: 2rem 0 6rem;
        font-size: 0.75rem;
        color: #525252;
    }

    @media (max-width: 768px) {
        .hero h1 {
            font-size: 1.875rem;
        }
        .hero-content {
            padding-top: 6rem;
            padding-bottom: 6rem;
        }
        .hide-mobile {
            display: none;
        }
        .stat-grid, .grid.four, .check-list.two {
            grid-template-columns: 1fr 1fr;
        }
        .grid.three, .two-col, .faq-grid {
            grid-template-columns: 1fr;
        }
        .panel {
            padding: 1.5rem;
        }
    }
"#;

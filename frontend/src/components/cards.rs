use std::rc::Rc;

use yew::prelude::*;

use crate::components::icon::Icon;
use crate::content::{BrandEntry, Feature, GalleryEntry, PackageTier, Stat};
use crate::icons::IconKind;
use crate::motion::Reveal;
use crate::theme::Theme;

/// Theme provided by the page root, or the built-in one outside a provider.
#[hook]
pub fn use_theme() -> Rc<Theme> {
    use_context::<Rc<Theme>>().unwrap_or_else(|| Rc::new(Theme::builtin()))
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub stat: Stat,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat">
            <Icon kind={props.stat.icon} class="icon-md" />
            <span>{props.stat.label}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PillProps {
    pub children: Children,
}

#[function_component(Pill)]
pub fn pill(props: &PillProps) -> Html {
    html! {
        <span class="pill">
            <Icon kind={IconKind::CheckCircle2} class="icon-sm" />
            { for props.children.iter() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckItemProps {
    pub text: AttrValue,
}

#[function_component(CheckItem)]
pub fn check_item(props: &CheckItemProps) -> Html {
    html! {
        <li class="check-item">
            <Icon kind={IconKind::CheckCircle2} class="icon-md flex-none" />
            <span>{props.text.clone()}</span>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct BrandCardProps {
    pub brand: BrandEntry,
}

#[function_component(BrandCard)]
pub fn brand_card(props: &BrandCardProps) -> Html {
    let b = props.brand;
    html! {
        <a class="brand-card" href={b.href} target="_blank" rel="noreferrer">
            <div class="brand-name">{b.name}</div>
            <img src={b.img} alt={b.alt} loading="lazy" />
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryImageProps {
    pub entry: GalleryEntry,
}

#[function_component(GalleryImage)]
pub fn gallery_image(props: &GalleryImageProps) -> Html {
    html! {
        <img class="gallery-image" src={props.entry.src} alt={props.entry.alt.clone()} loading="lazy" />
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: Feature,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let f = props.feature;
    html! {
        <div class="card">
            <div class="card-title-row">
                <Icon kind={f.icon} class="icon-lg" />
                <h3>{f.title}</h3>
            </div>
            <p class="card-desc">{f.desc}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PackageCardProps {
    pub package: PackageTier,
}

#[function_component(PackageCard)]
pub fn package_card(props: &PackageCardProps) -> Html {
    let theme = use_theme();
    let p = props.package;

    html! {
        <Reveal class="card package-card">
            {
                if let Some(badge) = p.badge {
                    html! { <div class="package-badge" style={theme.solid_style()}>{badge}</div> }
                } else {
                    html! {}
                }
            }
            <h3>{p.tier}</h3>
            <ul class="package-bullets">
                { for p.bullets.iter().map(|b| html! { <CheckItem text={*b} /> }) }
            </ul>
            <a href="#quote" class="package-cta" style={theme.solid_style()}>
                {"Get My Quote"}
            </a>
        </Reveal>
    }
}

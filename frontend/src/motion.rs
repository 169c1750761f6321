use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Keyframes behind every reveal-on-scroll element on the page.
pub const REVEAL_CSS: &str = r#"
    .reveal {
        opacity: 0;
        transform: translateY(20px);
    }
    .reveal.visible {
        animation: reveal-up 0.5s ease-out forwards;
    }
    @keyframes reveal-up {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @media (prefers-reduced-motion: reduce) {
        .reveal, .reveal.visible {
            opacity: 1;
            transform: none;
            animation: none;
        }
    }
"#;

/// Entry point of the animation layer. Components only animate when one is
/// registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    pub stylesheet: &'static str,
}

impl Motion {
    /// The reveal stylesheet compiled into the page.
    pub fn registered() -> Option<Motion> {
        Motion::from_stylesheet(REVEAL_CSS)
    }

    /// `None` when the stylesheet has no rules to apply.
    pub fn from_stylesheet(stylesheet: &'static str) -> Option<Motion> {
        if stylesheet.trim().is_empty() {
            None
        } else {
            Some(Motion { stylesheet })
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Animate on mount instead of waiting for the element to scroll in.
    #[prop_or_default]
    pub immediate: bool,
    #[prop_or_default]
    pub delay_ms: u32,
}

// Fraction of the viewport height an element must cross before it reveals.
const REVEAL_THRESHOLD: f64 = 0.9;

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| props.immediate);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let check = {
                        let node = node.clone();
                        let visible = visible.clone();
                        move || {
                            let Some(win) = web_sys::window() else { return };
                            let Some(element) = node.cast::<web_sys::Element>() else { return };
                            let height = win
                                .inner_height()
                                .ok()
                                .and_then(|h| h.as_f64())
                                .unwrap_or(0.0);
                            if element.get_bounding_client_rect().top() < height * REVEAL_THRESHOLD {
                                visible.set(true);
                            }
                        }
                    };
                    // Initial check
                    check();
                    let callback = Closure::<dyn Fn()>::new(check);
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let style = (props.delay_ms > 0).then(|| format!("animation-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*visible).then(|| "visible"), props.class.clone())}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_stylesheet_is_registered() {
        let motion = Motion::registered().unwrap();
        assert!(motion.stylesheet.contains("@keyframes reveal-up"));
    }

    #[test]
    fn blank_stylesheet_registers_nothing() {
        assert_eq!(Motion::from_stylesheet(""), None);
        assert_eq!(Motion::from_stylesheet("  \n\t "), None);
        assert_eq!(
            Motion::from_stylesheet(".x { opacity: 1; }"),
            Some(Motion { stylesheet: ".x { opacity: 1; }" })
        );
    }
}

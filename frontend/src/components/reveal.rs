use yew::prelude::*;

/// Where an element comes from while it is still hidden.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Entrance {
    #[default]
    Rise,
    RiseShort,
    FromLeft,
    FromRight,
    Fade,
    Widen,
}

impl Entrance {
    fn class(self) -> &'static str {
        match self {
            Entrance::Rise => "reveal--rise",
            Entrance::RiseShort => "reveal--rise-short",
            Entrance::FromLeft => "reveal--left",
            Entrance::FromRight => "reveal--right",
            Entrance::Fade => "reveal--fade",
            Entrance::Widen => "reveal--widen",
        }
    }
}

/// Delay for the `index`th sibling in a staggered group.
pub fn stagger(base_ms: u32, index: usize, step_ms: u32) -> u32 {
    base_ms + step_ms * index as u32
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub visible: bool,
    #[prop_or_default]
    pub entrance: Entrance,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(800)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Holds its children in an offset, transparent state until `visible`
/// turns true, then transitions them into place.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let style = format!(
        "transition-duration: {}ms; transition-delay: {}ms;",
        props.duration_ms, props.delay_ms
    );

    html! {
        <div
            class={classes!(
                "reveal",
                props.entrance.class(),
                props.visible.then_some("is-visible"),
                props.class.clone()
            )}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}

pub const REVEAL_STYLES: &str = r#"
.reveal {
    transition-property: opacity, transform;
    transition-timing-function: cubic-bezier(0.22, 1, 0.36, 1);
    opacity: 0;
}
.reveal--rise { transform: translateY(40px); }
.reveal--rise-short { transform: translateY(20px); }
.reveal--left { transform: translateX(-60px); }
.reveal--right { transform: translateX(60px); }
.reveal--widen { transform: scaleX(0); }
.reveal.is-visible {
    opacity: 1;
    transform: none;
}
@media (prefers-reduced-motion: reduce) {
    .reveal { transition: none; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_adds_one_step_per_sibling() {
        assert_eq!(stagger(0, 0, 150), 0);
        assert_eq!(stagger(0, 2, 150), 300);
        assert_eq!(stagger(300, 3, 100), 600);
    }
}

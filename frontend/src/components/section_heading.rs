use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::Heading;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub heading: Heading,
    pub visible: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let Heading { eyebrow, title, accent } = &props.heading;
    html! {
        <Reveal visible={props.visible} class="section-heading">
            <p class="eyebrow">{ eyebrow }</p>
            <h2 class="display-title">
                { title }
                <br />
                <span class="dim">{ accent }</span>
            </h2>
            { for props.children.iter() }
        </Reveal>
    }
}

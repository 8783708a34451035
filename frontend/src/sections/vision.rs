use yew::prelude::*;

use crate::components::film_grain::FilmGrain;
use crate::components::reveal::{stagger, Entrance, Reveal};
use crate::config;
use crate::content::VisionContent;
use crate::reveal::hooks::use_in_view;
use crate::scroll::SectionId;

#[derive(Properties, PartialEq)]
pub struct VisionProps {
    pub content: VisionContent,
}

#[function_component(Vision)]
pub fn vision(props: &VisionProps) -> Html {
    let in_view = use_in_view(config::SECTION_THRESHOLD);
    let visible = in_view.visible;
    let VisionContent { heading, features, image, caption } = &props.content;

    html! {
        <section id={SectionId::WhyLenzeculture.as_str()} ref={in_view.node.clone()} class="section section--black">
            <div class="section-inner">
                <div class="split">
                    <Reveal {visible} entrance={Entrance::FromLeft} duration_ms={1000}>
                        <p class="eyebrow">{ heading.eyebrow.clone() }</p>
                        <h2 class="display-title vision-title">
                            { heading.title.clone() }
                            <br />
                            <span class="dim">{ heading.accent.clone() }</span>
                        </h2>

                        <div class="feature-list">
                            { for features.iter().enumerate().map(|(i, feature)| html! {
                                <Reveal
                                    key={feature.title.clone()}
                                    {visible}
                                    entrance={Entrance::RiseShort}
                                    duration_ms={600}
                                    delay_ms={stagger(300, i, config::LIST_STAGGER_MS)}
                                    class="feature"
                                >
                                    <p class="feature-highlight">{ feature.highlight.clone() }</p>
                                    <h3>{ feature.title.clone() }</h3>
                                    <p class="feature-description">{ feature.description.clone() }</p>
                                </Reveal>
                            }) }
                        </div>
                    </Reveal>

                    <Reveal {visible} entrance={Entrance::FromRight} duration_ms={1000} delay_ms={200} class="vision-frame">
                        <div class="vision-picture">
                            <img src={image.src.clone()} alt={image.alt.clone()} />
                            <FilmGrain opacity={0.3} />
                            <div class="vision-vignette"></div>
                            <div class="frame-rule frame-rule--top"></div>
                            <div class="frame-rule frame-rule--bottom"></div>
                        </div>
                        <Reveal {visible} entrance={Entrance::RiseShort} delay_ms={1200} class="vision-caption">
                            <p>{ caption.clone() }</p>
                        </Reveal>
                    </Reveal>
                </div>
            </div>

            <div class="light-sweep light-sweep--slow"></div>

            <style>
                {r#"
                .vision-title { margin-bottom: 3rem; }
                .feature-list {
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }
                .feature {
                    position: relative;
                    padding-left: 2rem;
                    border-left: 1px solid rgba(255, 255, 255, 0.2);
                }
                .feature-highlight {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    color: rgba(255, 255, 255, 0.4);
                    margin-bottom: 0.5rem;
                    font-weight: 300;
                }
                .feature h3 {
                    font-size: 1.5rem;
                    font-weight: 300;
                    letter-spacing: 0.025em;
                    margin-bottom: 0.75rem;
                }
                .feature-description {
                    color: rgba(255, 255, 255, 0.5);
                    line-height: 1.6;
                    font-weight: 300;
                }
                .vision-frame {
                    position: relative;
                    height: 800px;
                }
                .vision-picture {
                    position: relative;
                    height: 100%;
                    overflow: hidden;
                }
                .vision-picture img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .vision-vignette {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to left, #000, transparent, rgba(0, 0, 0, 0.5));
                }
                .frame-rule {
                    position: absolute;
                    left: 0;
                    right: 0;
                    height: 1px;
                    background: rgba(255, 255, 255, 0.2);
                }
                .frame-rule--top { top: 0; }
                .frame-rule--bottom { bottom: 0; }
                .vision-caption {
                    position: absolute;
                    left: 2rem;
                    right: 2rem;
                    bottom: 3rem;
                }
                .vision-caption p {
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 0.875rem;
                    font-weight: 300;
                    font-style: italic;
                    line-height: 1.6;
                    border-left: 2px solid rgba(255, 255, 255, 0.3);
                    padding-left: 1rem;
                }
                @media (min-width: 768px) {
                    .vision-frame { height: 100vh; }
                }
                "#}
            </style>
        </section>
    }
}

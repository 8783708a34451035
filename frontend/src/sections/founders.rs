use yew::prelude::*;

use crate::components::film_grain::FilmGrain;
use crate::components::reveal::{stagger, Entrance, Reveal};
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::content::FoundersContent;
use crate::reveal::hooks::use_in_view;
use crate::scroll::SectionId;

#[derive(Properties, PartialEq)]
pub struct FoundersProps {
    pub content: FoundersContent,
}

/// Joins lines with `<br/>` between them.
fn lines(lines: &[String], break_class: Option<&'static str>) -> Html {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            html! {
                <>
                    if i > 0 {
                        <br class={classes!(break_class)} />
                    }
                    { line.clone() }
                </>
            }
        })
        .collect()
}

#[function_component(Founders)]
pub fn founders(props: &FoundersProps) -> Html {
    let in_view = use_in_view(config::SECTION_THRESHOLD);
    let visible = in_view.visible;
    let FoundersContent { heading, portrait, caption, people, quote } = &props.content;

    html! {
        <section id={SectionId::Founders.as_str()} ref={in_view.node.clone()} class="section section--zinc">
            <FilmGrain />

            <div class="section-inner">
                <SectionHeading heading={heading.clone()} {visible} />

                <div class="split split--top">
                    <Reveal {visible} entrance={Entrance::FromLeft} duration_ms={1000}>
                        <div class="portrait">
                            <img src={portrait.src.clone()} alt={portrait.alt.clone()} />
                            <FilmGrain opacity={0.3} />
                        </div>
                        <Reveal {visible} entrance={Entrance::RiseShort} delay_ms={600} class="portrait-caption">
                            <p>{ lines(caption, None) }</p>
                        </Reveal>
                    </Reveal>

                    <Reveal {visible} entrance={Entrance::FromRight} duration_ms={1000} delay_ms={200} class="bios">
                        { for people.iter().enumerate().map(|(i, founder)| html! {
                            <Reveal
                                key={founder.name.clone()}
                                {visible}
                                duration_ms={800}
                                delay_ms={stagger(400, i, 200)}
                                class="bio"
                            >
                                <div class="bio-header">
                                    <h3>{ founder.name.clone() }</h3>
                                    <p class="bio-role">{ founder.role.clone() }</p>
                                </div>
                                <p class="bio-text">{ founder.bio.clone() }</p>
                                if i == 0 {
                                    <div class="bio-rule"></div>
                                }
                            </Reveal>
                        }) }
                    </Reveal>
                </div>

                <Reveal {visible} delay_ms={1000} class="founders-quote">
                    <p>{ lines(quote, Some("desktop-break")) }</p>
                </Reveal>
            </div>

            <div class="light-sweep light-sweep--slowest"></div>

            <style>
                {r#"
                .portrait {
                    position: relative;
                    aspect-ratio: 3 / 4;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .portrait img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .portrait-caption {
                    margin-top: 1.5rem;
                    padding-left: 1rem;
                    border-left: 2px solid rgba(255, 255, 255, 0.3);
                }
                .portrait-caption p {
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 0.875rem;
                    font-weight: 300;
                    font-style: italic;
                    line-height: 1.6;
                }
                .bios {
                    display: flex;
                    flex-direction: column;
                    gap: 4rem;
                }
                .bio { position: relative; }
                .bio-header { margin-bottom: 1.5rem; }
                .bio-header h3 {
                    font-size: 2.25rem;
                    font-weight: 300;
                    letter-spacing: 0.025em;
                    margin-bottom: 0.5rem;
                }
                .bio-role {
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    color: rgba(255, 255, 255, 0.5);
                    font-weight: 300;
                }
                .bio-text {
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 1.125rem;
                    font-weight: 300;
                    line-height: 1.6;
                }
                .bio-rule {
                    position: absolute;
                    left: 0;
                    bottom: -2rem;
                    width: 4rem;
                    height: 1px;
                    background: rgba(255, 255, 255, 0.2);
                }
                .founders-quote {
                    margin: 8rem auto 0;
                    max-width: 56rem;
                    text-align: center;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 3rem 0;
                }
                .founders-quote p {
                    font-size: 1.875rem;
                    font-weight: 300;
                    font-style: italic;
                    line-height: 1.6;
                    color: rgba(255, 255, 255, 0.8);
                }
                "#}
            </style>
        </section>
    }
}

use yew::prelude::*;

use crate::components::film_grain::FilmGrain;
use crate::components::reveal::{stagger, Entrance, Reveal};
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::content::PortfolioContent;
use crate::reveal::hooks::use_in_view;
use crate::scroll::SectionId;

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub content: PortfolioContent,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let in_view = use_in_view(config::SECTION_THRESHOLD);
    let visible = in_view.visible;
    let PortfolioContent { heading, works } = &props.content;

    html! {
        <section id={SectionId::UseCases.as_str()} ref={in_view.node.clone()} class="section section--black">
            <div class="section-inner">
                <SectionHeading heading={heading.clone()} {visible} />

                // First tile is the feature and spans both columns.
                <div class="work-grid">
                    { for works.iter().enumerate().map(|(i, work)| html! {
                        <Reveal
                            key={work.title.clone()}
                            {visible}
                            delay_ms={stagger(0, i, config::CARD_STAGGER_MS)}
                            class={classes!("work", (i == 0).then_some("work--feature"))}
                        >
                            <div class="work-media">
                                <img src={work.image.clone()} alt={work.title.clone()} />
                                <FilmGrain opacity={0.3} />
                                <div class="work-shade"></div>
                            </div>
                            <div class="work-copy">
                                <Reveal {visible} entrance={Entrance::RiseShort} delay_ms={stagger(300, i, config::LIST_STAGGER_MS)}>
                                    <h3>{ work.title.clone() }</h3>
                                    <p>{ work.description.clone() }</p>
                                </Reveal>
                                <div class="play-badge">
                                    <svg width="20" height="20" viewBox="0 0 20 20" fill="none">
                                        <path d="M5 3L16 10L5 17V3Z" stroke="white" stroke-width="1" fill="white" fill-opacity="0.8" />
                                    </svg>
                                </div>
                            </div>
                            <div class="work-frame"></div>
                        </Reveal>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .work-grid {
                    display: grid;
                    gap: 1rem;
                }
                .work {
                    position: relative;
                    height: 500px;
                    overflow: hidden;
                    cursor: pointer;
                }
                .work-media {
                    position: absolute;
                    inset: 0;
                }
                .work-media img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s;
                }
                .work:hover .work-media img { transform: scale(1.05); }
                .work-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #000, rgba(0, 0, 0, 0.5), transparent);
                    opacity: 0.8;
                    transition: opacity 0.3s;
                }
                .work:hover .work-shade { opacity: 0.7; }
                .work-copy {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 2.5rem;
                }
                .work-copy h3 {
                    font-size: 2.25rem;
                    font-weight: 300;
                    letter-spacing: 0.025em;
                    margin-bottom: 1rem;
                }
                .work-copy p {
                    max-width: 42rem;
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 1.125rem;
                    font-weight: 300;
                    line-height: 1.6;
                }
                .play-badge {
                    position: absolute;
                    top: 2.5rem;
                    right: 2.5rem;
                    width: 4rem;
                    height: 4rem;
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    opacity: 0;
                    transition: opacity 0.3s, transform 0.2s;
                }
                .work:hover .play-badge { opacity: 1; }
                .play-badge:hover { transform: scale(1.1); }
                .work-frame {
                    position: absolute;
                    inset: 0;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    pointer-events: none;
                    transition: border-color 0.3s;
                }
                .work:hover .work-frame { border-color: rgba(255, 255, 255, 0.3); }
                @media (min-width: 768px) {
                    .work-grid { grid-template-columns: repeat(2, 1fr); }
                    .work--feature {
                        grid-column: span 2;
                        height: 600px;
                    }
                    .work-copy h3 { font-size: 3rem; }
                }
                "#}
            </style>
        </section>
    }
}

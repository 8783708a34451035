use yew::prelude::*;

use crate::components::film_grain::FilmGrain;
use crate::components::icon::Icon;
use crate::components::reveal::{stagger, Reveal};
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::content::CraftContent;
use crate::reveal::hooks::use_in_view;
use crate::scroll::SectionId;

#[derive(Properties, PartialEq)]
pub struct CraftProps {
    pub content: CraftContent,
}

#[function_component(Craft)]
pub fn craft(props: &CraftProps) -> Html {
    let in_view = use_in_view(config::SECTION_THRESHOLD);
    let visible = in_view.visible;
    let CraftContent { heading, intro, background, cards } = &props.content;

    html! {
        <section id={SectionId::WhatWeDo.as_str()} ref={in_view.node.clone()} class="section section--zinc">
            <div class="craft-backdrop">
                <img src={background.src.clone()} alt={background.alt.clone()} />
                <div class="craft-backdrop-fade"></div>
            </div>

            <div class="section-inner section-inner--narrow">
                <SectionHeading heading={heading.clone()} {visible}>
                    <p class="section-intro">{ intro.clone() }</p>
                </SectionHeading>

                <div class="card-grid">
                    { for cards.iter().enumerate().map(|(i, card)| html! {
                        <Reveal
                            key={card.title.clone()}
                            {visible}
                            delay_ms={stagger(0, i, config::CARD_STAGGER_MS)}
                            class="craft-card"
                        >
                            <div class="card-glow"></div>
                            <Icon kind={card.icon} size={40} class="craft-icon" />
                            <div class="craft-copy">
                                <h3>{ card.title.clone() }</h3>
                                <p>{ card.description.clone() }</p>
                            </div>
                            <div class="corner-accent corner-accent--top"></div>
                        </Reveal>
                    }) }
                </div>
            </div>

            <FilmGrain />

            <style>
                {r#"
                .craft-backdrop {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                    opacity: 0.2;
                }
                .craft-backdrop img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .craft-backdrop-fade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, #09090b, rgba(9, 9, 11, 0.8), #09090b);
                }
                .card-grid {
                    display: grid;
                    gap: 2rem;
                }
                .craft-card {
                    position: relative;
                    padding: 2.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(0, 0, 0, 0.2);
                    backdrop-filter: blur(4px);
                    cursor: pointer;
                }
                .craft-card.is-visible:hover {
                    border-color: rgba(255, 255, 255, 0.3);
                }
                .card-glow {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom right, rgba(255, 255, 255, 0.05), transparent);
                    opacity: 0;
                    transition: opacity 0.3s;
                }
                .craft-card:hover .card-glow,
                .craft-card:hover .corner-accent { opacity: 1; }
                .craft-icon {
                    color: rgba(255, 255, 255, 0.8);
                    margin-bottom: 2rem;
                    transition: transform 0.2s;
                }
                .craft-icon:hover { transform: scale(1.05); }
                .craft-copy {
                    position: relative;
                    z-index: 10;
                }
                .craft-copy h3 {
                    font-size: 1.5rem;
                    font-weight: 300;
                    letter-spacing: 0.025em;
                    margin-bottom: 1rem;
                }
                .craft-copy p {
                    color: rgba(255, 255, 255, 0.5);
                    font-weight: 300;
                    line-height: 1.6;
                }
                @media (min-width: 768px) {
                    .card-grid { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}

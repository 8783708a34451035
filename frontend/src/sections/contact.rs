use yew::prelude::*;

use crate::components::film_grain::FilmGrain;
use crate::components::reveal::{Entrance, Reveal};
use crate::config;
use crate::content::ContactContent;
use crate::reveal::hooks::use_in_view;
use crate::scroll::{scroll_into_view, SectionId};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub content: ContactContent,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let in_view = use_in_view(config::SECTION_THRESHOLD);
    let visible = in_view.visible;
    let ContactContent { heading, lead, body, background, cta, response_note } = &props.content;

    let onclick = {
        let target = cta.target;
        Callback::from(move |_: MouseEvent| scroll_into_view(target))
    };

    html! {
        <section id={SectionId::Pricing.as_str()} ref={in_view.node.clone()} class="contact">
            <div class="contact-backdrop">
                <img src={background.src.clone()} alt={background.alt.clone()} />
                <FilmGrain opacity={0.3} />
                <div class="contact-fade"></div>
            </div>

            <div class="contact-inner">
                <Reveal {visible} entrance={Entrance::Rise} duration_ms={1000}>
                    <p class="eyebrow contact-eyebrow">{ heading.eyebrow.clone() }</p>
                    <h2 class="display-title contact-title">
                        { heading.title.clone() }
                        <br />
                        <span class="contact-accent">{ heading.accent.clone() }</span>
                    </h2>

                    <Reveal {visible} entrance={Entrance::RiseShort} delay_ms={300} class="contact-copy">
                        <p class="contact-lead">{ lead.clone() }</p>
                        <p class="contact-body">{ body.clone() }</p>
                    </Reveal>

                    <Reveal {visible} entrance={Entrance::Widen} delay_ms={600} class="contact-divider" />

                    <Reveal {visible} entrance={Entrance::RiseShort} delay_ms={800}>
                        <button class="contact-cta" {onclick}>
                            <span>{ cta.label.clone() }</span>
                        </button>
                        <Reveal {visible} entrance={Entrance::Fade} delay_ms={1200}>
                            <p class="contact-note">{ response_note.clone() }</p>
                        </Reveal>
                    </Reveal>
                </Reveal>
            </div>

            <div class="light-sweep"></div>

            <style>
                {r#"
                .contact {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #000;
                    overflow: hidden;
                }
                .contact-backdrop {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .contact-backdrop img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.2;
                }
                .contact-fade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, #000, transparent, #000);
                }
                .contact-inner {
                    position: relative;
                    z-index: 10;
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 10rem 2rem;
                    text-align: center;
                }
                .contact-eyebrow { margin-bottom: 2rem; }
                .contact-title {
                    margin-bottom: 3rem;
                    font-size: clamp(3.75rem, 10vw, 8rem);
                }
                .contact-accent { color: rgba(255, 255, 255, 0.7); }
                .contact-copy {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    margin-bottom: 4rem;
                }
                .contact-lead {
                    font-size: 1.5rem;
                    font-weight: 300;
                    line-height: 1.6;
                    color: rgba(255, 255, 255, 0.8);
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .contact-body {
                    font-size: 1.125rem;
                    font-weight: 300;
                    line-height: 1.6;
                    color: rgba(255, 255, 255, 0.6);
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .contact-divider {
                    width: 8rem;
                    height: 1px;
                    margin: 0 auto 4rem;
                    background: rgba(255, 255, 255, 0.2);
                }
                .contact-cta {
                    position: relative;
                    padding: 1.5rem 4rem;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    font-size: 1.125rem;
                    font-weight: 300;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    overflow: hidden;
                    transition: background 0.3s, border-color 0.3s, transform 0.2s, letter-spacing 0.3s;
                }
                .contact-cta:hover {
                    background: rgba(255, 255, 255, 0.1);
                    border-color: rgba(255, 255, 255, 0.5);
                    letter-spacing: 0.25em;
                    transform: scale(1.02);
                }
                .contact-cta:active { transform: scale(0.98); }
                .contact-note {
                    margin-top: 2rem;
                    font-size: 0.875rem;
                    font-weight: 300;
                    letter-spacing: 0.025em;
                    color: rgba(255, 255, 255, 0.4);
                }
                "#}
            </style>
        </section>
    }
}

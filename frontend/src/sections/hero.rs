use yew::prelude::*;

use crate::components::film_grain::FilmGrain;
use crate::content::HeroContent;
use crate::scroll::{scroll_into_view, SectionId};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: HeroContent,
}

/// Opening banner. It is on screen at load, so it animates in on mount
/// instead of waiting for a visibility observer.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let HeroContent {
        eyebrow,
        title,
        accent,
        tagline,
        background,
        primary,
        secondary,
        scroll_cue,
    } = &props.content;

    let go_to = |target: SectionId| Callback::from(move |_: MouseEvent| scroll_into_view(target));

    let tagline_lines = tagline.iter().enumerate().map(|(i, line)| {
        html! {
            <>
                if i > 0 {
                    <br class="desktop-break" />
                }
                { line.clone() }
            </>
        }
    });

    html! {
        <section id={SectionId::Home.as_str()} class="hero">
            <div class="hero-backdrop">
                <img src={background.src.clone()} alt={background.alt.clone()} class="hero-image" />
                <FilmGrain opacity={0.4} />
                <div class="hero-vignette"></div>
                <div class="hero-fade"></div>
            </div>

            <div class="hero-content">
                <div class="hero-stage">
                    <p class="eyebrow hero-eyebrow">{ eyebrow.clone() }</p>
                    <h1 class="hero-title">
                        { title.clone() }
                        <br />
                        <span class="hero-accent">{ accent.clone() }</span>
                    </h1>
                    <p class="hero-tagline">{ for tagline_lines }</p>

                    <div class="hero-ctas">
                        <button class="cta-solid" onclick={go_to(primary.target)}>
                            <span>{ primary.label.clone() }</span>
                        </button>
                        <button class="cta-outline" onclick={go_to(secondary.target)}>
                            <span>{ secondary.label.clone() }</span>
                        </button>
                    </div>
                </div>

                <div class="scroll-cue">
                    <div class="scroll-cue-line"></div>
                    <p>{ scroll_cue.clone() }</p>
                </div>
            </div>

            <div class="light-sweep"></div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: #000;
                }
                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .hero-image {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.4;
                }
                .hero-vignette {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(ellipse at center, transparent, rgba(0, 0, 0, 0.2), #000);
                }
                .hero-fade {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    height: 12rem;
                    background: linear-gradient(to top, #000, transparent);
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    width: 100%;
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 8rem 2rem 6rem;
                }
                .hero-stage {
                    animation: hero-rise 1.2s cubic-bezier(0.22, 1, 0.36, 1) both;
                }
                .hero-eyebrow {
                    color: rgba(255, 255, 255, 0.5);
                    margin-bottom: 2rem;
                    animation: fade-in 1s ease 0.3s both;
                }
                .hero-title {
                    font-size: clamp(4.5rem, 11vw, 140px);
                    font-weight: 700;
                    letter-spacing: -0.025em;
                    line-height: 0.9;
                    margin-bottom: 2rem;
                    max-width: 64rem;
                }
                .hero-accent { color: rgba(255, 255, 255, 0.7); }
                .hero-tagline {
                    font-size: 1.375rem;
                    font-weight: 300;
                    letter-spacing: 0.025em;
                    line-height: 1.6;
                    color: rgba(255, 255, 255, 0.7);
                    max-width: 48rem;
                    margin-bottom: 4rem;
                }
                .desktop-break { display: none; }
                .hero-ctas {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    gap: 1.5rem;
                    animation: hero-rise-short 0.8s ease 0.6s both;
                }
                .cta-solid, .cta-outline {
                    padding: 1rem 2.5rem;
                    font-size: 0.875rem;
                    font-weight: 300;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    transition: transform 0.2s, background 0.2s, border-color 0.2s, letter-spacing 0.3s;
                }
                .cta-solid {
                    background: #fff;
                    color: #000;
                }
                .cta-solid:hover { background: rgba(255, 255, 255, 0.9); }
                .cta-outline {
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    color: #fff;
                }
                .cta-outline:hover {
                    background: rgba(255, 255, 255, 0.05);
                    border-color: rgba(255, 255, 255, 0.5);
                    letter-spacing: 0.25em;
                }
                .cta-solid:hover, .cta-outline:hover { transform: scale(1.02); }
                .cta-solid:active, .cta-outline:active { transform: scale(0.98); }
                .scroll-cue {
                    position: absolute;
                    bottom: 3rem;
                    left: 2rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    animation: fade-in 1s ease 1.2s both, bob 2s ease-in-out 1.2s infinite;
                }
                .scroll-cue-line {
                    width: 1px;
                    height: 3rem;
                    background: linear-gradient(to bottom, transparent, rgba(255, 255, 255, 0.4), transparent);
                }
                .scroll-cue p {
                    margin-top: 2rem;
                    font-size: 10px;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: rgba(255, 255, 255, 0.4);
                    transform: rotate(90deg);
                }
                @keyframes hero-rise {
                    from { opacity: 0; transform: translateY(60px); }
                    to { opacity: 1; transform: none; }
                }
                @keyframes hero-rise-short {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: none; }
                }
                @keyframes bob {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(8px); }
                }
                @media (min-width: 640px) {
                    .hero-ctas { flex-direction: row; }
                }
                @media (min-width: 768px) {
                    .desktop-break { display: block; }
                    .hero-tagline { font-size: 1.5rem; }
                }
                "#}
            </style>
        </section>
    }
}

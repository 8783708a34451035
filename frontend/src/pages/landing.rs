use std::rc::Rc;

use yew::prelude::*;

use crate::components::reveal::REVEAL_STYLES;
use crate::content::SiteContent;
use crate::sections::{
    contact::Contact, craft::Craft, footer::Footer, founders::Founders, header::Header, hero::Hero,
    performance::Performance, portfolio::Portfolio, process::Process, vision::Vision,
};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = &props.content;

    html! {
        <div class="landing-page">
            <Header brand={content.brand.clone()} nav={content.nav.clone()} inquire={content.inquire.clone()} />
            <main>
                <Hero content={content.hero.clone()} />
                <Craft content={content.craft.clone()} />
                <Vision content={content.vision.clone()} />
                <Founders content={content.founders.clone()} />
                <Process content={content.process.clone()} />
                <Portfolio content={content.portfolio.clone()} />
                <Performance content={content.metrics.clone()} />
                <Contact content={content.contact.clone()} />
            </main>
            <Footer brand={content.brand.clone()} content={content.footer.clone()} />

            <style>{ REVEAL_STYLES }</style>
            <style>
                {r#"
                *, *::before, *::after {
                    box-sizing: border-box;
                    margin: 0;
                    padding: 0;
                }
                html { scroll-behavior: smooth; }
                body {
                    background: #000;
                    color: #fff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    -webkit-font-smoothing: antialiased;
                }
                button {
                    background: none;
                    border: none;
                    color: inherit;
                    font: inherit;
                    cursor: pointer;
                }
                .landing-page {
                    min-height: 100vh;
                    overflow-x: hidden;
                }
                .section {
                    position: relative;
                    padding: 10rem 0;
                    overflow: hidden;
                }
                .section--zinc { background: #09090b; }
                .section--black { background: #000; }
                .section-inner {
                    position: relative;
                    z-index: 10;
                    max-width: 1600px;
                    margin: 0 auto;
                    padding: 0 2rem;
                }
                .section-inner--narrow { max-width: 1400px; }
                .section-inner--slim { max-width: 1200px; }
                .section-heading { margin-bottom: 6rem; }
                .eyebrow {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                    color: rgba(255, 255, 255, 0.4);
                    font-weight: 300;
                    margin-bottom: 1.5rem;
                }
                .display-title {
                    font-size: clamp(3.75rem, 8vw, 6rem);
                    font-weight: 700;
                    letter-spacing: -0.025em;
                    line-height: 0.9;
                    margin-bottom: 2rem;
                }
                .dim { color: rgba(255, 255, 255, 0.6); }
                .section-intro {
                    font-size: 1.25rem;
                    color: rgba(255, 255, 255, 0.6);
                    max-width: 42rem;
                    font-weight: 300;
                    line-height: 1.6;
                }
                .split {
                    display: grid;
                    gap: 4rem;
                    align-items: center;
                }
                .split--top { align-items: start; }
                .film-grain {
                    position: absolute;
                    inset: 0;
                    mix-blend-mode: overlay;
                    pointer-events: none;
                }
                .corner-accent {
                    position: absolute;
                    width: 4rem;
                    height: 4rem;
                    opacity: 0;
                    transition: opacity 0.3s;
                }
                .corner-accent--top {
                    top: 0;
                    right: 0;
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    border-right: 1px solid rgba(255, 255, 255, 0.2);
                }
                .corner-accent--bottom {
                    bottom: 0;
                    right: 0;
                    width: 5rem;
                    height: 5rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.2);
                    border-right: 1px solid rgba(255, 255, 255, 0.2);
                }
                .light-sweep {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.05), transparent);
                    animation: sweep 13s ease-in-out infinite;
                }
                .light-sweep--slow {
                    background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.03), transparent);
                    animation-duration: 18s;
                }
                .light-sweep--slowest {
                    background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.03), transparent);
                    animation-duration: 22s;
                }
                @keyframes sweep {
                    0% { transform: translateX(-100%); }
                    60%, 100% { transform: translateX(200%); }
                }
                @keyframes fade-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @media (min-width: 768px) {
                    .split { grid-template-columns: repeat(2, 1fr); }
                }
                @media (prefers-reduced-motion: reduce) {
                    .light-sweep { animation: none; }
                }
                "#}
            </style>
        </div>
    }
}

use chrono::Datelike;
use yew::prelude::*;

use crate::components::film_grain::FilmGrain;
use crate::content::{Brand, FooterContent};
use crate::scroll::scroll_into_view;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: Brand,
    pub content: FooterContent,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let Brand { name, subtitle, logo, producer } = &props.brand;
    let FooterContent { blurb, columns, rights, motto } = &props.content;
    let year = chrono::Local::now().year();

    let blurb = blurb.iter().enumerate().map(|(i, line)| {
        html! {
            <>
                if i > 0 {
                    <br />
                }
                { line.clone() }
            </>
        }
    });

    let columns = columns.iter().map(|column| {
        html! {
            <div key={column.title.clone()}>
                <h4 class="footer-heading">{ column.title.clone() }</h4>
                <nav class="footer-links">
                    { for column.links.iter().map(|link| {
                        let target = link.target;
                        html! {
                            <button
                                key={target.as_str()}
                                class="footer-link"
                                onclick={Callback::from(move |_: MouseEvent| scroll_into_view(target))}
                            >
                                { link.label.clone() }
                            </button>
                        }
                    }) }
                </nav>
            </div>
        }
    });

    html! {
        <footer class="site-footer">
            <FilmGrain />

            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <img src={logo.src.clone()} alt={logo.alt.clone()} class="brand-logo" />
                            <div class="brand-text">
                                <span class="brand-name">{ name.clone() }</span>
                                <span class="brand-subtitle">{ subtitle.clone() }</span>
                            </div>
                        </div>
                        <p class="footer-blurb">{ for blurb }</p>
                        <p class="footer-credit">
                            {"A "}<span>{ producer.clone() }</span>{" Production"}
                        </p>
                    </div>
                    { for columns }
                </div>

                <div class="footer-bottom">
                    <p>{ format!("© {} {}", year, rights) }</p>
                    <p class="footer-motto">{ motto.clone() }</p>
                </div>
            </div>

            <div class="footer-glow"></div>

            <style>
                {r#"
                .site-footer {
                    position: relative;
                    background: #000;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 5rem 0;
                    overflow: hidden;
                }
                .footer-inner {
                    position: relative;
                    z-index: 10;
                    max-width: 1600px;
                    margin: 0 auto;
                    padding: 0 2rem;
                }
                .footer-grid {
                    display: grid;
                    gap: 4rem;
                    margin-bottom: 4rem;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }
                .footer-blurb {
                    color: rgba(255, 255, 255, 0.5);
                    font-weight: 300;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }
                .footer-credit {
                    font-size: 0.75rem;
                    font-weight: 300;
                    letter-spacing: 0.05em;
                    color: rgba(255, 255, 255, 0.4);
                }
                .footer-credit span { color: rgba(255, 255, 255, 0.6); }
                .footer-heading {
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.875rem;
                    font-weight: 300;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    margin-bottom: 1.5rem;
                }
                .footer-links {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    gap: 0.75rem;
                }
                .footer-link {
                    color: rgba(255, 255, 255, 0.5);
                    font-weight: 300;
                    transition: color 0.2s, transform 0.2s;
                }
                .footer-link:hover {
                    color: #fff;
                    transform: translateX(4px);
                }
                .footer-bottom {
                    padding-top: 3rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 0.875rem;
                    font-weight: 300;
                }
                .footer-motto { letter-spacing: 0.05em; }
                .footer-glow {
                    position: absolute;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 1px;
                    background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.2), transparent);
                }
                @media (min-width: 768px) {
                    .footer-grid { grid-template-columns: repeat(3, 1fr); }
                    .footer-bottom { flex-direction: row; }
                }
                "#}
            </style>
        </footer>
    }
}

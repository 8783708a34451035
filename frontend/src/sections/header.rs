use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::content::{Brand, NavLink};
use crate::scroll::{scroll_into_view, SectionId};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub brand: Brand,
    pub nav: Vec<NavLink>,
    pub inquire: NavLink,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let scrolled = use_state_eq(|| false);
    let menu_open = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            let offset = web_sys::window()
                .and_then(|window| window.scroll_y().ok())
                .unwrap_or(0.0);
            scrolled.set(offset > config::HEADER_SCROLL_OFFSET);
        });
    }

    let go_to = {
        let menu_open = menu_open.clone();
        move |target: SectionId| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                scroll_into_view(target);
                menu_open.set(false);
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_buttons = |class: &'static str| -> Html {
        props
            .nav
            .iter()
            .map(|item| {
                html! {
                    <button key={item.target.as_str()} class={class} onclick={go_to(item.target)}>
                        { item.label.clone() }
                    </button>
                }
            })
            .collect()
    };

    let Brand { name, subtitle, logo, .. } = &props.brand;

    html! {
        <header class={classes!("site-header", (*scrolled).then_some("scrolled"))}>
            <div class="header-inner">
                <button class="brand" onclick={go_to(SectionId::Home)}>
                    <img src={logo.src.clone()} alt={logo.alt.clone()} class="brand-logo" />
                    <span class="brand-text">
                        <span class="brand-name">{ name.clone() }</span>
                        <span class="brand-subtitle">{ subtitle.clone() }</span>
                    </span>
                </button>

                <nav class="desktop-nav">
                    { nav_buttons("nav-link") }
                    <button class="nav-inquire" onclick={go_to(props.inquire.target)}>
                        { props.inquire.label.clone() }
                    </button>
                </nav>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
                        if *menu_open {
                            <path d="M18 6 6 18M6 6l12 12" />
                        } else {
                            <path d="M4 6h16M4 12h16M4 18h16" />
                        }
                    </svg>
                </button>
            </div>

            if *menu_open {
                <nav class="mobile-nav">
                    { nav_buttons("mobile-nav-link") }
                    <button class="mobile-inquire" onclick={go_to(props.inquire.target)}>
                        { props.inquire.label.clone() }
                    </button>
                </nav>
            }

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background-color: transparent;
                    border-bottom: 1px solid rgba(255, 255, 255, 0);
                    transition: background-color 0.3s, backdrop-filter 0.3s, border-color 0.3s;
                }
                .site-header.scrolled {
                    background-color: rgba(10, 10, 10, 0.92);
                    backdrop-filter: blur(16px);
                    border-bottom-color: rgba(255, 255, 255, 0.08);
                }
                .header-inner {
                    max-width: 1600px;
                    margin: 0 auto;
                    padding: 1.5rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    transition: opacity 0.2s;
                }
                .brand:hover { opacity: 0.8; }
                .brand-logo {
                    height: 1.75rem;
                    width: auto;
                    filter: brightness(0) invert(1);
                    opacity: 0.9;
                }
                .brand-text {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    text-transform: uppercase;
                    font-weight: 300;
                }
                .brand-name {
                    font-size: 1.125rem;
                    letter-spacing: 0.3em;
                    color: rgba(255, 255, 255, 0.9);
                }
                .brand-subtitle {
                    font-size: 10px;
                    letter-spacing: 0.4em;
                    color: rgba(255, 255, 255, 0.5);
                }
                .desktop-nav {
                    display: none;
                    align-items: center;
                    gap: 2.5rem;
                }
                .nav-link {
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.6);
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                    font-weight: 300;
                    position: relative;
                    transition: color 0.2s, transform 0.2s;
                }
                .nav-link::after {
                    content: '';
                    position: absolute;
                    left: 0;
                    bottom: -4px;
                    height: 1px;
                    width: 0;
                    background: rgba(255, 255, 255, 0.8);
                    transition: width 0.2s;
                }
                .nav-link:hover {
                    color: #fff;
                    transform: translateY(-1px);
                }
                .nav-link:hover::after { width: 100%; }
                .nav-inquire, .mobile-inquire {
                    padding: 0.625rem 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    font-size: 0.875rem;
                    font-weight: 300;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                    transition: background 0.2s, border-color 0.2s;
                }
                .nav-inquire:hover, .mobile-inquire:hover {
                    background: rgba(255, 255, 255, 0.1);
                    border-color: rgba(255, 255, 255, 0.4);
                }
                .burger-menu { color: #fff; }
                .mobile-nav {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                    padding: 2rem;
                    background: rgba(0, 0, 0, 0.95);
                    backdrop-filter: blur(24px);
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    animation: menu-drop 0.2s ease-out;
                }
                .mobile-nav-link {
                    text-align: left;
                    color: rgba(255, 255, 255, 0.6);
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    font-size: 0.875rem;
                    font-weight: 300;
                }
                .mobile-nav-link:hover { color: #fff; }
                @keyframes menu-drop {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: none; }
                }
                @media (min-width: 768px) {
                    .desktop-nav { display: flex; }
                    .burger-menu, .mobile-nav { display: none; }
                }
                "#}
            </style>
        </header>
    }
}

use yew::prelude::*;

use crate::content::IconKind;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or(32)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Thin-stroke line icons, drawn inline so no icon font is needed.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let glyph = match props.kind {
        IconKind::Film => html! {
            <>
                <rect x="3" y="3" width="18" height="18" rx="2" />
                <path d="M7 3v18M17 3v18M3 7.5h4M3 12h18M3 16.5h4M17 7.5h4M17 16.5h4" />
            </>
        },
        IconKind::Sparkles => html! {
            <path d="M9.94 15.5A2 2 0 0 0 8.5 14.06l-6.14-1.58a.5.5 0 0 1 0-.96L8.5 9.94A2 2 0 0 0 9.94 8.5l1.58-6.14a.5.5 0 0 1 .96 0l1.58 6.14a2 2 0 0 0 1.44 1.44l6.14 1.58a.5.5 0 0 1 0 .96l-6.14 1.58a2 2 0 0 0-1.44 1.44l-1.58 6.14a.5.5 0 0 1-.96 0z" />
        },
        IconKind::Eye => html! {
            <>
                <path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7z" />
                <circle cx="12" cy="12" r="3" />
            </>
        },
        IconKind::MessageSquare => html! {
            <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" />
        },
        IconKind::Palette => html! {
            <>
                <path d="M12 22a10 10 0 1 1 10-10c0 2.8-2.2 4-4 4h-1.8a2 2 0 0 0-1.4 3.4A1.7 1.7 0 0 1 12 22z" />
                <circle cx="13.5" cy="6.5" r=".5" />
                <circle cx="17.5" cy="10.5" r=".5" />
                <circle cx="8.5" cy="7.5" r=".5" />
                <circle cx="6.5" cy="12.5" r=".5" />
            </>
        },
        IconKind::Zap => html! {
            <path d="M13 2 3 14h9l-1 8 10-12h-9l1-8z" />
        },
    };

    let size = props.size.to_string();
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            { glyph }
        </svg>
    }
}

use log::debug;
use serde::Deserialize;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Anchors that navigation can scroll to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Home,
    WhatWeDo,
    WhyLenzeculture,
    Founders,
    HowItWorks,
    UseCases,
    Performance,
    Pricing,
}

impl SectionId {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::WhatWeDo => "what-we-do",
            SectionId::WhyLenzeculture => "why-lenzeculture",
            SectionId::Founders => "founders",
            SectionId::HowItWorks => "how-it-works",
            SectionId::UseCases => "use-cases",
            SectionId::Performance => "performance",
            SectionId::Pricing => "pricing",
        }
    }
}

/// Smooth-scrolls the section with `id` into view. Missing sections are ignored.
pub fn scroll_into_view(id: SectionId) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id.as_str()))
    else {
        debug!("no section '{}' to scroll to", id.as_str());
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_their_serialized_names() {
        let all = [
            SectionId::Home,
            SectionId::WhatWeDo,
            SectionId::WhyLenzeculture,
            SectionId::Founders,
            SectionId::HowItWorks,
            SectionId::UseCases,
            SectionId::Performance,
            SectionId::Pricing,
        ];
        for id in all {
            let parsed: SectionId = serde_json::from_str(&format!("\"{}\"", id.as_str())).unwrap();
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert!(serde_json::from_str::<SectionId>("\"gallery\"").is_err());
    }
}

use serde::Deserialize;
use thiserror::Error;

use crate::scroll::SectionId;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse site content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site content has an empty `{0}` list")]
    EmptyList(&'static str),
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct NavLink {
    pub label: String,
    pub target: SectionId,
}

/// Eyebrow line plus a two-line title, the second line dimmed.
#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Heading {
    pub eyebrow: String,
    pub title: String,
    pub accent: String,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Film,
    Sparkles,
    Eye,
    MessageSquare,
    Palette,
    Zap,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Brand {
    pub name: String,
    pub subtitle: String,
    pub logo: Image,
    pub producer: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct HeroContent {
    pub eyebrow: String,
    pub title: String,
    pub accent: String,
    pub tagline: Vec<String>,
    pub background: Image,
    pub primary: NavLink,
    pub secondary: NavLink,
    pub scroll_cue: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Card {
    pub icon: IconKind,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct CraftContent {
    pub heading: Heading,
    pub intro: String,
    pub background: Image,
    pub cards: Vec<Card>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Feature {
    pub highlight: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct VisionContent {
    pub heading: Heading,
    pub features: Vec<Feature>,
    pub image: Image,
    pub caption: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Founder {
    pub name: String,
    pub role: String,
    pub bio: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct FoundersContent {
    pub heading: Heading,
    pub portrait: Image,
    pub caption: Vec<String>,
    pub people: Vec<Founder>,
    pub quote: Vec<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Step {
    pub numeral: String,
    pub icon: IconKind,
    pub title: String,
    pub summary: String,
    pub details: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ProcessContent {
    pub heading: Heading,
    pub expand_label: String,
    pub steps: Vec<Step>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Work {
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct PortfolioContent {
    pub heading: Heading,
    pub works: Vec<Work>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Metric {
    pub value: u32,
    pub suffix: String,
    pub label: String,
    pub description: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct MetricsContent {
    pub heading: Heading,
    pub items: Vec<Metric>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ContactContent {
    pub heading: Heading,
    pub lead: String,
    pub body: String,
    pub background: Image,
    pub cta: NavLink,
    pub response_note: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct LinkColumn {
    pub title: String,
    pub links: Vec<NavLink>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct FooterContent {
    pub blurb: Vec<String>,
    pub columns: Vec<LinkColumn>,
    pub rights: String,
    pub motto: String,
}

/// Everything the page shows. Read once at startup and never mutated.
#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: Vec<NavLink>,
    pub inquire: NavLink,
    pub hero: HeroContent,
    pub craft: CraftContent,
    pub vision: VisionContent,
    pub founders: FoundersContent,
    pub process: ProcessContent,
    pub portfolio: PortfolioContent,
    pub metrics: MetricsContent,
    pub contact: ContactContent,
    pub footer: FooterContent,
}

impl SiteContent {
    /// Loads the content bundled into the binary.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.check_lists()?;
        Ok(content)
    }

    fn check_lists(&self) -> Result<(), ContentError> {
        let lists = [
            ("nav", self.nav.len()),
            ("craft.cards", self.craft.cards.len()),
            ("vision.features", self.vision.features.len()),
            ("founders.people", self.founders.people.len()),
            ("process.steps", self.process.steps.len()),
            ("portfolio.works", self.portfolio.works.len()),
            ("metrics.items", self.metrics.items.len()),
            ("footer.columns", self.footer.columns.len()),
        ];
        match lists.into_iter().find(|(_, len)| *len == 0) {
            Some((name, _)) => Err(ContentError::EmptyList(name)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn bundled_content_loads() {
        let content = SiteContent::load().expect("bundled content should parse");
        assert_eq!(content.brand.name, "Lenzé");
        assert_eq!(content.nav.len(), 7);
        assert_eq!(content.craft.cards.len(), 3);
        assert_eq!(content.process.steps.len(), 4);
        assert_eq!(content.portfolio.works.len(), 4);
    }

    #[test]
    fn metrics_carry_their_targets() {
        let content = SiteContent::load().unwrap();
        let metrics: Vec<(u32, &str)> = content
            .metrics
            .items
            .iter()
            .map(|metric| (metric.value, metric.suffix.as_str()))
            .collect();
        assert_eq!(metrics, vec![(48, "h"), (100, "%"), (4, "K")]);
    }

    #[test]
    fn nav_targets_are_distinct() {
        let content = SiteContent::load().unwrap();
        let targets: HashSet<SectionId> = content.nav.iter().map(|link| link.target).collect();
        assert_eq!(targets.len(), content.nav.len());
    }

    #[test]
    fn ctas_point_where_they_should() {
        let content = SiteContent::load().unwrap();
        assert_eq!(content.hero.primary.target, SectionId::Pricing);
        assert_eq!(content.hero.secondary.target, SectionId::UseCases);
        assert_eq!(content.contact.cta.target, SectionId::Home);
        assert_eq!(content.inquire.target, SectionId::Pricing);
    }

    #[test]
    fn footer_splits_links_into_two_columns() {
        let content = SiteContent::load().unwrap();
        let sizes: Vec<usize> = content.footer.columns.iter().map(|c| c.links.len()).collect();
        assert_eq!(sizes, vec![3, 3]);
    }

    #[test]
    fn unknown_section_target_is_a_parse_error() {
        let raw = SITE_JSON.replacen("\"target\": \"home\"", "\"target\": \"lobby\"", 1);
        assert!(matches!(SiteContent::from_json(&raw), Err(ContentError::Parse(_))));
    }

    #[test]
    fn empty_list_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(SITE_JSON).unwrap();
        value["metrics"]["items"] = serde_json::json!([]);
        let err = SiteContent::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::EmptyList("metrics.items")));
        assert_eq!(err.to_string(), "site content has an empty `metrics.items` list");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteContent::from_json("{ \"brand\": ").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse site content"));
    }
}

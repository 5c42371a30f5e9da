use dioxus::prelude::*;

/// Tone of a badge pill.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    /// Highlighted pill for pre-release features.
    #[default]
    Beta,
    /// Muted pill for counts.
    Neutral,
}

impl BadgeVariant {
    fn data_style(&self) -> &'static str {
        match self {
            BadgeVariant::Beta => "beta",
            BadgeVariant::Neutral => "neutral",
        }
    }
}

/// Inline pill used for short status markers next to a label.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.data_style(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

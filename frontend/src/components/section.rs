use yew::prelude::*;

use crate::content::{Card, Theme};
use crate::reveal::{reveal_class, use_reveal, RevealOptions};

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or(Theme::Light)]
    pub theme: Theme,
    #[prop_or_default]
    pub children: Children,
}

/// Titled page section that fades in the first time it scrolls into view.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let (node, visible) = use_reveal(RevealOptions {
        root_margin: Some("0px 0px -50px 0px"),
        ..RevealOptions::default()
    });

    html! {
        <section
            id={props.id.clone()}
            ref={node}
            class={classes!("site-section", props.theme.class(), reveal_class(visible))}
        >
            <div class="section-inner">
                <h2 class="section-title">{&props.title}</h2>
                if let Some(subtitle) = &props.subtitle {
                    <p class="section-subtitle">{subtitle}</p>
                }
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    pub cards: Vec<Card>,
    #[prop_or(3)]
    pub columns: u8,
}

#[function_component(CardGrid)]
pub fn card_grid(props: &CardGridProps) -> Html {
    html! {
        <div class="card-grid" style={format!("--columns: {};", props.columns)}>
            { for props.cards.iter().enumerate().map(|(index, card)| html! {
                <article class="card" style={format!("transition-delay: {}ms;", index * 150)}>
                    <div class="card-icon">{card.icon}</div>
                    <h3>{card.title}</h3>
                    <p>{card.body}</p>
                    if let Some(meta) = card.meta {
                        <span class="card-meta">{meta}</span>
                    }
                    if !card.bullets.is_empty() {
                        <ul class="card-bullets">
                            { for card.bullets.iter().map(|bullet| html! { <li>{*bullet}</li> }) }
                        </ul>
                    }
                </article>
            }) }
        </div>
    }
}

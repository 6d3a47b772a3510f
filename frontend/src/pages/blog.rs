use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::newsletter::NewsletterSignup;
use crate::components::section::RevealSection;
use crate::content::{blog_categories, filter_posts, split_featured, BlogPost, Theme, ALL_CATEGORIES};

#[derive(Properties, PartialEq)]
struct PostPreviewProps {
    post: BlogPost,
}

#[function_component(PostPreview)]
fn post_preview(props: &PostPreviewProps) -> Html {
    let post = &props.post;
    html! {
        <article class={classes!("blog-post-preview", post.featured.then(|| "featured"))}>
            <img src={post.image} alt={post.title} loading="lazy" class="blog-preview-image" />
            <div class="blog-preview-body">
                <span class="blog-category">{post.category}</span>
                <h2>{post.title}</h2>
                <p>{post.excerpt}</p>
                <div class="blog-meta">
                    <span class="blog-date">{post.date}</span>
                    <span>{post.read_time}</span>
                </div>
                <div class="blog-tags">
                    { for post.tags.iter().map(|tag| html! { <span class="tag">{format!("#{}", tag)}</span> }) }
                </div>
            </div>
        </article>
    }
}

fn category_label(category: &str) -> &str {
    if category == ALL_CATEGORIES {
        "Tous"
    } else {
        category
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    let search = use_state(String::new);
    let category = use_state(|| ALL_CATEGORIES);

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let posts = filter_posts(&search, *category);
    let (featured, regular) = split_featured(posts);

    html! {
        <div class="blog-list-page">
            <section class="page-hero">
                <h1>{"Blog "}<span class="accent">{"autonomie web"}</span></h1>
                <p>{"Guides, conseils et retours d'expérience pour gérer votre site en toute indépendance."}</p>
            </section>

            <section class="site-section blog-controls">
                <input
                    type="search"
                    class="blog-search"
                    placeholder="Rechercher un article..."
                    value={(*search).clone()}
                    oninput={on_search}
                />
                <div class="filter-bar">
                    { for blog_categories().into_iter().map(|(name, count)| {
                        let category = category.clone();
                        let active = *category == name;
                        let onclick = Callback::from(move |_: MouseEvent| category.set(name));
                        html! {
                            <button class={classes!("filter-button", active.then(|| "active"))} {onclick}>
                                {format!("{} ({})", category_label(name), count)}
                            </button>
                        }
                    }) }
                </div>
            </section>

            if !featured.is_empty() {
                <RevealSection title="À la une">
                    <div class="blog-grid featured-grid">
                        { for featured.into_iter().map(|post| html! { <PostPreview post={*post} /> }) }
                    </div>
                </RevealSection>
            }

            <RevealSection title="Tous les articles">
                if regular.is_empty() {
                    <p class="blog-empty">{"Aucun article ne correspond à votre recherche."}</p>
                } else {
                    <div class="blog-grid">
                        { for regular.into_iter().map(|post| html! { <PostPreview post={*post} /> }) }
                    </div>
                }
            </RevealSection>

            <RevealSection
                title="Restez informé"
                subtitle="Un email par mois, des conseils concrets pour votre site."
                theme={Theme::Green}
            >
                <NewsletterSignup />
            </RevealSection>

            <RevealSection
                title="Une question sur votre site ?"
                subtitle="Écrivez-moi, je vous réponds personnellement."
                theme={Theme::Sand}
            >
                <ContactForm />
            </RevealSection>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_category_is_labelled_in_french() {
        assert_eq!(category_label(ALL_CATEGORIES), "Tous");
        assert_eq!(category_label("Formation"), "Formation");
    }
}

use web_sys::{window, Document};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics::use_telemetry;

#[derive(Debug, PartialEq, Eq)]
pub struct PageMeta {
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
}

pub const PAGES: &[PageMeta] = &[
    PageMeta {
        path: "/",
        title: "Victor Mirault - Sites Web Autonomes | Interface Simple + Formation Incluse",
        description: "Développeur web express spécialisé en sites autonomes. Interface admin simple + formation incluse = autonomie totale. Livraison rapide garantie.",
        keywords: "site web autonome, interface admin simple, développeur web express, formation client incluse",
    },
    PageMeta {
        path: "/services",
        title: "Services Sites Autonomes - Victor Mirault | Formation Incluse",
        description: "Sites vitrine, e-commerce et applications web avec interface admin simple. Formation personnalisée incluse pour votre autonomie complète.",
        keywords: "services web autonomes, site vitrine autonome, e-commerce autonome, application web autonome",
    },
    PageMeta {
        path: "/portfolio",
        title: "Portfolio Sites Autonomes - Victor Mirault | 150+ Projets Livrés",
        description: "Découvrez mes réalisations : sites autonomes avec interface admin simple. 150+ clients formés et autonomes dans la gestion de leur site.",
        keywords: "portfolio sites autonomes, réalisations web autonomes, projets interface admin simple",
    },
    PageMeta {
        path: "/processus",
        title: "Ma Méthode pour Votre Autonomie - Victor Mirault | 6 Étapes",
        description: "Découvrez ma méthode en 6 étapes pour vous rendre totalement autonome dans la gestion de votre site web. Formation incluse jusqu'à maîtrise.",
        keywords: "méthode autonomie web, processus développement autonome, formation site web",
    },
    PageMeta {
        path: "/blog",
        title: "Blog Autonomie Digitale - Victor Mirault | Conseils & Méthodes",
        description: "Conseils, méthodes et retours d'expérience pour votre autonomie web. Apprenez à gérer votre site comme un pro !",
        keywords: "blog autonomie digitale, conseils gestion site web, autonomie web",
    },
    PageMeta {
        path: "/contact",
        title: "Contact Victor Mirault - Devis Site Autonome | Réponse 48h",
        description: "Contactez-moi pour votre projet de site autonome. Devis personnalisé sous 48h. Formation incluse jusqu'à votre autonomie complète.",
        keywords: "contact développeur web autonome, devis site autonome, formation web incluse",
    },
];

/// Metadata for a path; unknown paths get the home page's.
pub fn meta_for_path(path: &str) -> &'static PageMeta {
    let normalized = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    PAGES
        .iter()
        .find(|page| page.path == normalized)
        .unwrap_or(&PAGES[0])
}

/// Page name reported with page views.
pub fn page_name(path: &str) -> &str {
    match path.trim_start_matches('/') {
        "" => "home",
        name => name,
    }
}

/// Selector/content pairs written for a page. Tags absent from the document are skipped.
pub fn meta_updates(meta: &PageMeta) -> [(&'static str, &'static str); 4] {
    [
        ("meta[name=\"description\"]", meta.description),
        ("meta[name=\"keywords\"]", meta.keywords),
        ("meta[property=\"og:title\"]", meta.title),
        ("meta[property=\"og:description\"]", meta.description),
    ]
}

fn set_content(document: &Document, selector: &str, content: &str) {
    if let Ok(Some(tag)) = document.query_selector(selector) {
        if tag.set_attribute("content", content).is_err() {
            log::warn!("Could not update {}", selector);
        }
    }
}

pub fn apply_meta(meta: &PageMeta) {
    let Some(window) = window() else {
        return;
    };
    if let Some(document) = window.document() {
        document.set_title(meta.title);
        for (selector, content) in meta_updates(meta) {
            set_content(&document, selector, content);
        }
    }
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

/// Keeps document metadata in line with the current route.
#[function_component(SeoSync)]
pub fn seo_sync() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());
    let telemetry = use_telemetry();

    use_effect_with_deps(
        move |path: &String| {
            let meta = meta_for_path(path);
            log::debug!("Applying metadata for {}", meta.path);
            apply_meta(meta);
            telemetry.page_view(page_name(path));
            || ()
        },
        path,
    );

    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_has_its_own_metadata() {
        for path in ["/", "/services", "/portfolio", "/processus", "/blog", "/contact"] {
            assert_eq!(meta_for_path(path).path, path);
        }
        let titles: std::collections::HashSet<_> = PAGES.iter().map(|p| p.title).collect();
        assert_eq!(titles.len(), PAGES.len());
    }

    #[test]
    fn trailing_slashes_and_unknown_paths() {
        assert_eq!(meta_for_path("/blog/").path, "/blog");
        assert_eq!(meta_for_path("").path, "/");
        assert_eq!(meta_for_path("/nowhere"), &PAGES[0]);
    }

    #[test]
    fn page_names() {
        assert_eq!(page_name("/"), "home");
        assert_eq!(page_name("/contact"), "contact");
    }

    #[test]
    fn updates_cover_description_keywords_and_open_graph() {
        let meta = meta_for_path("/contact");
        let updates = meta_updates(meta);
        assert_eq!(updates[0], ("meta[name=\"description\"]", meta.description));
        assert_eq!(updates[1].1, meta.keywords);
        assert_eq!(updates[2].1, meta.title);
        // same input, same writes
        assert_eq!(updates, meta_updates(meta_for_path("/contact")));
    }
}

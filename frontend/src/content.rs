//! Static copy for the site's sections. Components take these tables as
//! props so one component renders every variant of a section.

/// Colour scheme of a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Sand,
    Green,
}

impl Theme {
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Sand => "theme-sand",
            Theme::Green => "theme-green",
        }
    }
}

/// Generic card shown in the reveal grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub meta: Option<&'static str>,
    pub bullets: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub delivery_time: &'static str,
    pub features: &'static [&'static str],
}

impl Service {
    pub fn card(&self) -> Card {
        Card {
            icon: self.icon,
            title: self.title,
            body: self.description,
            meta: Some(self.price),
            bullets: self.features,
        }
    }
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "vitrine",
        icon: "🖥️",
        title: "Sites Vitrine Autonomes",
        description: "Site professionnel avec interface admin simple pour gérer votre contenu en toute autonomie",
        price: "À partir de 1 500€",
        delivery_time: "7-10 jours",
        features: &[
            "Design responsive premium",
            "Interface admin ultra-simple",
            "Éditeur de contenu WYSIWYG",
            "SEO optimisé",
            "Formation personnalisée incluse",
            "Hébergement + maintenance 1 an",
        ],
    },
    Service {
        id: "ecommerce",
        icon: "🛒",
        title: "Boutiques E-commerce Autonomes",
        description: "Boutique en ligne complète avec dashboard simple pour gérer produits, commandes et stocks",
        price: "À partir de 2 500€",
        delivery_time: "2-3 semaines",
        features: &[
            "Catalogue produits illimité",
            "Gestion des stocks simplifiée",
            "Paiement sécurisé",
            "Suivi des commandes",
            "Formation e-commerce incluse",
        ],
    },
    Service {
        id: "webapp",
        icon: "⚙️",
        title: "Applications Web Autonomes",
        description: "Application web sur-mesure avec interface admin personnalisée selon vos processus métier",
        price: "À partir de 3 500€",
        delivery_time: "3-4 semaines",
        features: &[
            "Fonctionnalités sur-mesure",
            "Dashboard métier personnalisé",
            "Gestion des utilisateurs",
            "Automatisation des tâches",
            "Formation équipe incluse",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    /// Matches the contact form's project type values.
    pub kind: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub delivery_time: &'static str,
    pub testimonial: &'static str,
    pub client: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Boutique Mode Premium",
        kind: "ecommerce",
        category: "E-commerce",
        image: "https://images.pexels.com/photos/322207/pexels-photo-322207.jpeg?auto=compress&cs=tinysrgb&w=800",
        delivery_time: "2 semaines",
        testimonial: "Je gère mes produits seule maintenant ! L'interface est si simple, j'ajoute de nouveaux articles en 2 minutes.",
        client: "Sarah L., Créatrice Mode",
        description: "Boutique e-commerce complète avec interface admin ultra-simple pour la gestion autonome des produits, stocks et commandes.",
        technologies: &["React", "Node.js", "Stripe", "Admin Dashboard"],
    },
    Project {
        title: "Cabinet Médical Dr. Martin",
        kind: "vitrine",
        category: "Site vitrine",
        image: "https://images.pexels.com/photos/236380/pexels-photo-236380.jpeg?auto=compress&cs=tinysrgb&w=800",
        delivery_time: "10 jours",
        testimonial: "Je mets à jour mes horaires et mes actualités moi-même, sans jamais appeler personne.",
        client: "Dr. Martin, Médecin généraliste",
        description: "Site vitrine médical avec interface admin simplifiée pour la gestion autonome du contenu et des informations pratiques.",
        technologies: &["React", "CMS Personnalisé", "SEO Local"],
    },
    Project {
        title: "App Gestion Projets TechStart",
        kind: "webapp",
        category: "Application web",
        image: "https://images.pexels.com/photos/3184465/pexels-photo-3184465.jpeg?auto=compress&cs=tinysrgb&w=800",
        delivery_time: "3 semaines",
        testimonial: "Toute l'équipe a été formée en une matinée. On ajoute nos propres tableaux sans aide.",
        client: "Marc D., CEO TechStart",
        description: "Application web de gestion de projets avec dashboard admin personnalisé pour l'autonomie complète de l'équipe.",
        technologies: &["React", "Node.js", "Supabase"],
    },
    Project {
        title: "Restaurant Le Gourmet",
        kind: "vitrine",
        category: "Site vitrine",
        image: "https://images.pexels.com/photos/1581384/pexels-photo-1581384.jpeg?auto=compress&cs=tinysrgb&w=800",
        delivery_time: "12 jours",
        testimonial: "Je change la carte chaque semaine en cinq minutes depuis mon téléphone.",
        client: "Chef Antoine, Restaurant gastronomique",
        description: "Site vitrine restaurant avec interface admin spécialisée pour la gestion autonome des menus et réservations.",
        technologies: &["React", "Réservations", "CMS Menus"],
    },
];

/// Projects of one kind, or all of them for `None`.
pub fn projects_of_kind(kind: Option<&str>) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|project| kind.map_or(true, |kind| project.kind == kind))
        .collect()
}

/// A portfolio filter button with the number of projects behind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectFilter {
    pub kind: Option<&'static str>,
    pub label: &'static str,
    pub count: usize,
}

const PROJECT_FILTER_LABELS: &[(&str, &str)] = &[
    ("vitrine", "Sites vitrine"),
    ("ecommerce", "E-commerce"),
    ("webapp", "Applications"),
];

/// "All" first, then every kind that has at least one project.
pub fn project_filters() -> Vec<ProjectFilter> {
    let all = ProjectFilter {
        kind: None,
        label: "Tous les projets",
        count: PROJECTS.len(),
    };
    std::iter::once(all)
        .chain(PROJECT_FILTER_LABELS.iter().map(|(kind, label)| ProjectFilter {
            kind: Some(*kind),
            label: *label,
            count: projects_of_kind(Some(*kind)).len(),
        }))
        .filter(|filter| filter.count > 0)
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub number: u8,
    pub icon: &'static str,
    pub title: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub deliverables: &'static [&'static str],
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        number: 1,
        icon: "💬",
        title: "Brief Express & Analyse",
        duration: "1-2 jours",
        description: "Analyse approfondie de vos besoins d'autonomie digitale",
        deliverables: &["Cahier des charges détaillé", "Plan de formation sur-mesure", "Devis précis avec délais"],
    },
    ProcessStep {
        number: 2,
        icon: "🧭",
        title: "Stratégie & Architecture",
        duration: "2-3 jours",
        description: "Conception de l'architecture technique et de l'interface admin",
        deliverables: &["Architecture technique", "Parcours admin validé"],
    },
    ProcessStep {
        number: 3,
        icon: "🎨",
        title: "Design & Interface Admin",
        duration: "3-4 jours",
        description: "Création du design site + dashboard admin ultra-simple",
        deliverables: &["Maquettes responsive", "Prototype de l'interface admin"],
    },
    ProcessStep {
        number: 4,
        icon: "🛠️",
        title: "Développement + Backend",
        duration: "5-8 jours",
        description: "Développement complet avec CMS personnalisé",
        deliverables: &["Site fonctionnel", "CMS personnalisé", "Accès de test"],
    },
    ProcessStep {
        number: 5,
        icon: "✅",
        title: "Tests & Optimisation",
        duration: "2-3 jours",
        description: "Validation complète de l'interface admin et optimisations",
        deliverables: &["Rapport de performance", "Corrections finales"],
    },
    ProcessStep {
        number: 6,
        icon: "🎓",
        title: "Formation & Autonomie",
        duration: "1-2 jours",
        description: "Formation personnalisée jusqu'à votre maîtrise complète",
        deliverables: &["Formation 1-on-1", "Tutoriels vidéo", "Support illimité"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Competence {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    /// Self-assessed level in percent.
    pub level: u8,
}

pub const COMPETENCES: &[Competence] = &[
    Competence {
        name: "Développement Full-Stack",
        icon: "💻",
        description: "React, Node.js, Supabase",
        level: 95,
    },
    Competence {
        name: "Interface Admin Simple",
        icon: "🎨",
        description: "UX/UI pour non-techniciens",
        level: 98,
    },
    Competence {
        name: "Formation Client",
        icon: "🏅",
        description: "Pédagogie personnalisée",
        level: 100,
    },
    Competence {
        name: "Livraison Express",
        icon: "⚡",
        description: "Méthode optimisée",
        level: 92,
    },
];

pub const AVAILABILITY_POINTS: &[Card] = &[
    Card {
        icon: "✅",
        title: "Réponse garantie sous 48h max",
        body: "Basé en France, je m'adapte à votre planning pour assurer un support optimal et une formation efficace sur tout le territoire.",
        meta: None,
        bullets: &[],
    },
    Card {
        icon: "🏅",
        title: "Couverture France entière",
        body: "150+ sites livrés avec interface admin simple. Méthode éprouvée pour votre autonomie digitale complète.",
        meta: None,
        bullets: &[],
    },
    Card {
        icon: "💬",
        title: "Support formation inclus",
        body: "Après livraison, support illimité pour questions sur l'interface admin. WhatsApp, email, visio : le moyen qui vous convient.",
        meta: None,
        bullets: &[],
    },
];

pub const GUARANTEES: &[Card] = &[
    Card {
        icon: "🎓",
        title: "Formation jusqu'à maîtrise",
        body: "Support inclus jusqu'à votre autonomie complète",
        meta: None,
        bullets: &[],
    },
    Card {
        icon: "⏱️",
        title: "Délais respectés",
        body: "Livraison dans les temps ou remboursement",
        meta: None,
        bullets: &[],
    },
    Card {
        icon: "✨",
        title: "Interface ultra-simple",
        body: "Utilisable même sans compétences techniques",
        meta: None,
        bullets: &[],
    },
    Card {
        icon: "⚡",
        title: "Support réactif",
        body: "Réponse sous 2h garantie 7j/7",
        meta: None,
        bullets: &[],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub featured: bool,
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Interface Admin Simple : Pourquoi C'est Essentiel en 2024",
        excerpt: "Découvrez pourquoi une interface admin intuitive est la clé de votre autonomie digitale et comment elle transforme votre relation avec votre site web.",
        category: "Autonomie",
        date: "2024-01-15",
        read_time: "5 min",
        image: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=800",
        tags: &["Interface Admin", "Autonomie", "UX Design"],
        featured: true,
    },
    BlogPost {
        title: "Gérer Son Site E-commerce en Autonomie : Guide Complet",
        excerpt: "Produits, stocks, commandes : la routine quotidienne d'une boutique autonome, étape par étape.",
        category: "E-commerce",
        date: "2024-01-10",
        read_time: "8 min",
        image: "https://images.pexels.com/photos/230544/pexels-photo-230544.jpeg?auto=compress&cs=tinysrgb&w=800",
        tags: &["E-commerce", "Gestion", "Autonomie"],
        featured: false,
    },
    BlogPost {
        title: "Site Web Autonome Rapidement : Ma Méthode Express",
        excerpt: "Les six étapes qui permettent de livrer un site autonome en quelques semaines sans sacrifier la qualité.",
        category: "Méthode",
        date: "2024-01-05",
        read_time: "6 min",
        image: "https://images.pexels.com/photos/1181671/pexels-photo-1181671.jpeg?auto=compress&cs=tinysrgb&w=800",
        tags: &["Méthode", "Rapidité"],
        featured: false,
    },
    BlogPost {
        title: "Formation Client : La Clé de l'Autonomie Digitale",
        excerpt: "Pourquoi la formation compte autant que le site lui-même, et comment je l'adapte à chaque niveau.",
        category: "Formation",
        date: "2023-12-28",
        read_time: "7 min",
        image: "https://images.pexels.com/photos/5905709/pexels-photo-5905709.jpeg?auto=compress&cs=tinysrgb&w=800",
        tags: &["Formation", "Autonomie"],
        featured: false,
    },
    BlogPost {
        title: "SEO et Autonomie : Optimiser Son Référencement Soi-Même",
        excerpt: "Les réglages SEO que vous pouvez faire vous-même depuis votre interface admin.",
        category: "SEO",
        date: "2023-12-15",
        read_time: "10 min",
        image: "https://images.pexels.com/photos/270637/pexels-photo-270637.jpeg?auto=compress&cs=tinysrgb&w=800",
        tags: &["SEO", "Référencement", "Autonomie"],
        featured: true,
    },
];

pub const ALL_CATEGORIES: &str = "all";

/// Posts matching a case-insensitive search over title and excerpt, within a category.
pub fn filter_posts(search: &str, category: &str) -> Vec<&'static BlogPost> {
    let needle = search.trim().to_lowercase();
    BLOG_POSTS
        .iter()
        .filter(|post| {
            needle.is_empty()
                || post.title.to_lowercase().contains(&needle)
                || post.excerpt.to_lowercase().contains(&needle)
        })
        .filter(|post| category == ALL_CATEGORIES || post.category == category)
        .collect()
}

/// Splits posts into the featured ones and the rest, keeping their order.
pub fn split_featured(
    posts: Vec<&'static BlogPost>,
) -> (Vec<&'static BlogPost>, Vec<&'static BlogPost>) {
    posts.into_iter().partition(|post| post.featured)
}

/// Category filter buttons with their post counts, "all" first.
pub fn blog_categories() -> Vec<(&'static str, usize)> {
    let mut categories: Vec<(&'static str, usize)> = vec![(ALL_CATEGORIES, BLOG_POSTS.len())];
    for post in BLOG_POSTS {
        match categories.iter_mut().find(|(name, _)| *name == post.category) {
            Some((_, count)) => *count += 1,
            None => categories.push((post.category, 1)),
        }
    }
    categories
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const CONTACT_FAQS: &[Faq] = &[
    Faq {
        question: "Combien de temps pour avoir un site autonome ?",
        answer: "Entre 1 et 4 semaines selon la complexité. Site vitrine : 7-10 jours, E-commerce : 2-3 semaines, Application : 3-4 semaines. Formation incluse dans tous les cas.",
    },
    Faq {
        question: "Et si je ne suis pas technique du tout ?",
        answer: "C'est exactement pour ça que j'existe ! Mon interface admin est conçue pour les non-techniciens. Formation personnalisée jusqu'à votre maîtrise complète, support illimité inclus.",
    },
    Faq {
        question: "Que se passe-t-il après la livraison ?",
        answer: "Formation personnalisée 1-on-1, tutoriels vidéo sur-mesure, documentation complète, et support formation illimité. Vous ne serez jamais seul(e) !",
    },
    Faq {
        question: "L'hébergement et la maintenance sont-ils inclus ?",
        answer: "Oui ! 1 an d'hébergement professionnel + maintenance + mises à jour sécurité + sauvegardes automatiques inclus. Puis 15€/mois seulement.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_case_insensitive_and_covers_excerpts() {
        let found = filter_posts("RÉFÉRENCEMENT", ALL_CATEGORIES);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, "SEO");

        assert_eq!(filter_posts("routine quotidienne", ALL_CATEGORIES).len(), 1);
        assert_eq!(filter_posts("  ", ALL_CATEGORIES).len(), BLOG_POSTS.len());
    }

    #[test]
    fn category_and_search_combine() {
        assert_eq!(filter_posts("", "Formation").len(), 1);
        assert!(filter_posts("e-commerce", "Formation").is_empty());
    }

    #[test]
    fn featured_posts_are_split_out() {
        let (featured, regular) = split_featured(filter_posts("", ALL_CATEGORIES));
        assert!(!featured.is_empty());
        assert!(featured.iter().all(|post| post.featured));
        assert!(regular.iter().all(|post| !post.featured));
        assert_eq!(featured.len() + regular.len(), BLOG_POSTS.len());
    }

    #[test]
    fn categories_count_posts() {
        let categories = blog_categories();
        assert_eq!(categories[0], (ALL_CATEGORIES, BLOG_POSTS.len()));
        let total: usize = categories[1..].iter().map(|(_, count)| count).sum();
        assert_eq!(total, BLOG_POSTS.len());
    }

    #[test]
    fn project_kinds_match_contact_choices() {
        use crate::forms::schema::PROJECT_TYPES;
        for project in PROJECTS {
            assert!(PROJECT_TYPES.iter().any(|choice| choice.value == project.kind));
        }
        assert_eq!(projects_of_kind(Some("vitrine")).len(), 2);
        assert_eq!(projects_of_kind(None).len(), PROJECTS.len());
    }

    #[test]
    fn competence_levels_are_percentages() {
        assert!(COMPETENCES.iter().all(|c| c.level <= 100));
    }

    #[test]
    fn filters_only_offer_kinds_with_projects() {
        let filters = project_filters();
        assert_eq!(filters[0].kind, None);
        assert_eq!(filters[0].count, PROJECTS.len());
        assert!(filters.iter().all(|filter| filter.count > 0));
        assert!(filters.iter().all(|filter| filter.kind != Some("autre")));

        let vitrine = filters.iter().find(|f| f.kind == Some("vitrine")).expect("vitrine");
        assert_eq!(vitrine.count, 2);
        let by_kind: usize = filters[1..].iter().map(|f| f.count).sum();
        assert_eq!(by_kind, PROJECTS.len());
    }
}

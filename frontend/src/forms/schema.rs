use super::validation::{Choice, FieldSpec, Rule};

pub const PROJECT_TYPES: &[Choice] = &[
    Choice { value: "vitrine", label: "Site vitrine autonome" },
    Choice { value: "ecommerce", label: "Boutique e-commerce autonome" },
    Choice { value: "webapp", label: "Application web autonome" },
    Choice { value: "autre", label: "Autre projet" },
];

pub const AUTONOMY_LEVELS: &[Choice] = &[
    Choice { value: "debutant", label: "Débutant - J'ai besoin de formation complète" },
    Choice { value: "intermediaire", label: "Intermédiaire - Quelques bases informatiques" },
    Choice { value: "avance", label: "Avancé - Je veux juste l'autonomie" },
];

pub const TIMELINES: &[Choice] = &[
    Choice { value: "urgent", label: "Urgent (1 semaine)" },
    Choice { value: "rapide", label: "Rapide (2 semaines)" },
    Choice { value: "standard", label: "Standard (3-4 semaines)" },
    Choice { value: "flexible", label: "Flexible" },
];

pub const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        rules: &[
            Rule::Required("Le nom est requis"),
            Rule::MinLength(2, "Minimum 2 caractères"),
        ],
    },
    FieldSpec {
        name: "email",
        rules: &[
            Rule::Required("L'email est requis"),
            Rule::Email("Email invalide"),
        ],
    },
    FieldSpec {
        name: "project",
        rules: &[
            Rule::Required("Veuillez choisir un type de projet"),
            Rule::OneOf(PROJECT_TYPES, "Veuillez choisir un type de projet"),
        ],
    },
    FieldSpec {
        name: "autonomyLevel",
        rules: &[
            Rule::Required("Veuillez évaluer votre niveau"),
            Rule::OneOf(AUTONOMY_LEVELS, "Veuillez évaluer votre niveau"),
        ],
    },
    FieldSpec {
        name: "timeline",
        rules: &[
            Rule::Required("Veuillez choisir un délai"),
            Rule::OneOf(TIMELINES, "Veuillez choisir un délai"),
        ],
    },
    FieldSpec {
        name: "message",
        rules: &[Rule::MaxLength(1000, "Maximum 1000 caractères autorisés")],
    },
];

pub const NEWSLETTER_FIELDS: &[FieldSpec] = &[FieldSpec {
    name: "email",
    rules: &[
        Rule::Required("Veuillez entrer un email valide"),
        Rule::Email("Veuillez entrer un email valide"),
    ],
}];

/// Which form a state machine drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Newsletter,
}

impl FormKind {
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            FormKind::Contact => CONTACT_FIELDS,
            FormKind::Newsletter => NEWSLETTER_FIELDS,
        }
    }

    pub fn field(self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|field| field.name == name)
    }

    /// Name reported to analytics.
    pub fn analytics_name(self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::Newsletter => "newsletter",
        }
    }
}

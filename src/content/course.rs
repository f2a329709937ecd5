pub const COURSE_TITLE: &str = "Poética de la Mirada";

pub const COURSE_TAGLINE: &str =
    "Un curso para aprender a ver antes de pintar. Ocho módulos, encuentros virtuales y tiempo de decantación.";

pub const START_DATE: &str = "6 de Octubre 2026";

/// External enrollment form, opened in a new browsing context.
pub const ENROLLMENT_FORM_URL: &str = "https://forms.gle/P2qtnPHpnqpDqjjFA";

pub const CONTACT_EMAIL: &str = "hola@poeticadelamirada.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub glyph: &'static str,
    pub text: &'static str,
}

pub static COURSE_FEATURES: &[Feature] = &[
    Feature { glyph: "▶", text: "1 encuentro virtual por semana" },
    Feature { glyph: "✎", text: "Ejercicios prácticos con feedback" },
    Feature { glyph: "◷", text: "Tiempo de decantación entre sesiones" },
    Feature { glyph: "❏", text: "Material de lectura y referencias" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instructor {
    pub name: &'static str,
    pub bio: &'static str,
    pub portrait: &'static str,
    pub socials: &'static [SocialLink],
}

pub static INSTRUCTOR: Instructor = Instructor {
    name: "Ernesto Hengel",
    bio: "Artista visual y docente. Su trabajo explora el paisaje, la memoria y la pintura como acto de atención.",
    portrait: "/images/instructor_portrait.jpg",
    socials: &[
        SocialLink { label: "X", href: "#" },
        SocialLink { label: "YouTube", href: "#" },
        SocialLink { label: "TikTok", href: "#" },
        SocialLink { label: "Instagram", href: "#" },
    ],
};

//! Static page content.

use crate::section::SectionId;

/// Short name of the association
pub const ACRONYM: &str = "APAC";

/// Full name of the association
pub const FULL_NAME: &str =
    "Associação dos Pais e Amigos dos Patinadores Artísticos de Curitiba";

pub const COPYRIGHT: &str = "© 2025 APAC. Todos os direitos reservados.";

/// Lucide icons used on the page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Menu,
    Close,
    Star,
    Award,
    ChevronDown,
    Target,
    Users,
    Heart,
    BookOpen,
    FileText,
    Mail,
    Phone,
    Instagram,
    Youtube,
    Facebook,
}

/// Accent gradient of a project card.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Accent {
    Rose,
    Ocean,
    Emerald,
}

impl Accent {
    pub fn class(&self) -> &'static str {
        match self {
            Accent::Rose => "accent-rose",
            Accent::Ocean => "accent-ocean",
            Accent::Emerald => "accent-emerald",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Projeto Social",
        description: "Atividades que promovem inclusão e cidadania através do esporte.",
        icon: Icon::Heart,
        accent: Accent::Rose,
    },
    Project {
        title: "Projeto Cultural",
        description: "Eventos e oficinas culturais para fortalecer a comunidade.",
        icon: Icon::Users,
        accent: Accent::Ocean,
    },
    Project {
        title: "Projeto Educacional",
        description: "Cursos e treinamentos para desenvolvimento de jovens e adultos.",
        icon: Icon::BookOpen,
        accent: Accent::Emerald,
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "Instagram",
        href: "#",
        icon: Icon::Instagram,
    },
    SocialLink {
        label: "YouTube",
        href: "#",
        icon: Icon::Youtube,
    },
    SocialLink {
        label: "Facebook",
        href: "#",
        icon: Icon::Facebook,
    },
];

/// A way to reach the association.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: Icon,
}

pub const CONTACT_CHANNELS: [ContactChannel; 2] = [
    ContactChannel {
        label: "Email",
        value: "contato@apac-curitiba.org.br",
        icon: Icon::Mail,
    },
    ContactChannel {
        label: "Telefone",
        value: "(41) 99999-9999",
        icon: Icon::Phone,
    },
];

/// Hero call-to-action button.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CallToAction {
    pub label: &'static str,
    pub target: SectionId,
    pub primary: bool,
}

pub const HERO_ACTIONS: [CallToAction; 2] = [
    CallToAction {
        label: "Conheça Nossa História",
        target: SectionId::About,
        primary: true,
    },
    CallToAction {
        label: "Ver Projetos",
        target: SectionId::Projects,
        primary: false,
    },
];

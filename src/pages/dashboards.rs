//! The five role dashboards.
//!
//! Each dashboard is a static module grid over the shared scaffold; no
//! role-based path restriction exists, the signed-in role only decides which
//! dashboard `/` forwards to. Module screens beyond the assistant are not
//! routed yet, so their tiles render as previews.

use leptos::prelude::*;

use crate::components::dashboard::{DashboardScaffold, ModuleInfo};

const ADMIN_MODULES: &[ModuleInfo] = &[
    ModuleInfo {
        title: "Gestão de Alunos",
        description: "Matrículas, turmas e dados dos estudantes.",
        icon: "🎓",
        href: None,
    },
    ModuleInfo {
        title: "Gestão de Professores",
        description: "Corpo docente, disciplinas e horários.",
        icon: "📋",
        href: None,
    },
    ModuleInfo {
        title: "Relatórios",
        description: "Indicadores de desempenho e frequência.",
        icon: "📊",
        href: None,
    },
    ModuleInfo {
        title: "Merenda Escolar",
        description: "Acompanhe o planejamento da cozinha.",
        icon: "🍽",
        href: None,
    },
    ModuleInfo {
        title: "Biblioteca",
        description: "Acervo e empréstimos da escola.",
        icon: "📚",
        href: None,
    },
    ModuleInfo {
        title: "Assistente SIGEA",
        description: "Tire dúvidas sobre a gestão escolar.",
        icon: "✨",
        href: Some("/sigea-assistant"),
    },
];

const TEACHER_MODULES: &[ModuleInfo] = &[
    ModuleInfo {
        title: "Minhas Turmas",
        description: "Turmas e alunos sob sua responsabilidade.",
        icon: "🏫",
        href: None,
    },
    ModuleInfo {
        title: "Lançamento de Notas",
        description: "Notas e avaliações por disciplina.",
        icon: "📝",
        href: None,
    },
    ModuleInfo {
        title: "Frequência",
        description: "Registro diário de presença.",
        icon: "✅",
        href: None,
    },
    ModuleInfo {
        title: "Assistente SIGEA",
        description: "Apoio ao planejamento de aulas.",
        icon: "✨",
        href: Some("/sigea-assistant"),
    },
];

const STUDENT_MODULES: &[ModuleInfo] = &[
    ModuleInfo {
        title: "Minhas Notas",
        description: "Boletim e avaliações por disciplina.",
        icon: "📈",
        href: None,
    },
    ModuleInfo {
        title: "Horário de Aulas",
        description: "Grade semanal da sua turma.",
        icon: "🕐",
        href: None,
    },
    ModuleInfo {
        title: "Cardápio",
        description: "Merenda da semana.",
        icon: "🍽",
        href: None,
    },
    ModuleInfo {
        title: "Biblioteca",
        description: "Seus empréstimos e reservas.",
        icon: "📚",
        href: None,
    },
];

const KITCHEN_MODULES: &[ModuleInfo] = &[
    ModuleInfo {
        title: "Cardápio da Semana",
        description: "Planejamento das refeições.",
        icon: "🍲",
        href: None,
    },
    ModuleInfo {
        title: "Estoque",
        description: "Insumos e validade dos itens.",
        icon: "📦",
        href: None,
    },
    ModuleInfo {
        title: "Refeições Servidas",
        description: "Registro diário por turno.",
        icon: "🧾",
        href: None,
    },
];

const LIBRARY_MODULES: &[ModuleInfo] = &[
    ModuleInfo {
        title: "Acervo",
        description: "Catálogo de títulos da escola.",
        icon: "📚",
        href: None,
    },
    ModuleInfo {
        title: "Empréstimos",
        description: "Retiradas em aberto e devoluções.",
        icon: "🔁",
        href: None,
    },
    ModuleInfo {
        title: "Reservas",
        description: "Fila de espera por título.",
        icon: "⏳",
        href: None,
    },
];

#[component]
pub fn AdminDashboard() -> impl IntoView {
    view! {
        <DashboardScaffold
            title="Painel Administrativo"
            subtitle="Visão geral da gestão escolar."
            modules=ADMIN_MODULES
        />
    }
}

#[component]
pub fn TeacherDashboard() -> impl IntoView {
    view! {
        <DashboardScaffold
            title="Painel do Professor"
            subtitle="Suas turmas, notas e frequência."
            modules=TEACHER_MODULES
        />
    }
}

#[component]
pub fn StudentPortal() -> impl IntoView {
    view! {
        <DashboardScaffold
            title="Portal do Estudante"
            subtitle="Acompanhe sua vida escolar."
            modules=STUDENT_MODULES
        />
    }
}

#[component]
pub fn KitchenDashboard() -> impl IntoView {
    view! {
        <DashboardScaffold
            title="Painel da Cozinha"
            subtitle="Merenda escolar e estoque."
            modules=KITCHEN_MODULES
        />
    }
}

#[component]
pub fn LibraryDashboard() -> impl IntoView {
    view! {
        <DashboardScaffold
            title="Painel da Biblioteca"
            subtitle="Acervo, empréstimos e reservas."
            modules=LIBRARY_MODULES
        />
    }
}

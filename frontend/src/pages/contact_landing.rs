use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::site_header::{NavLink, SiteHeader};
use crate::pages::landing_styles::BASE_CSS;
use crate::ui::page_state::{PageAction, PageState};
use crate::ui::reveal::{use_reveal, Reveal};
use crate::ui::scroll::{scroll_to_section, scroll_to_top};

const NAV_LINKS: [NavLink; 3] = [
    NavLink { section: "features", label: "Recursos" },
    NavLink { section: "benefits", label: "Benefícios" },
    NavLink { section: "testimonials", label: "Depoimentos" },
];
const NAV_CTA: NavLink = NavLink { section: "contact", label: "Contato" };

const STATS: [(&str, &str); 4] = [
    ("300%", "Aumento em Conversões"),
    ("24/7", "Atendimento Ativo"),
    ("85%", "Leads Recuperados"),
    ("20", "Dias para Implementar"),
];

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
    bullets: [&'static str; 3],
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "💬",
        title: "Atendimento Humanizado 24/7",
        body: "Responde leads instantaneamente, qualifica prospects e agenda reuniões automaticamente, mesmo quando você está dormindo.",
        bullets: [
            "Resposta em menos de 30 segundos",
            "Qualificação automática de leads",
            "Agendamento direto na agenda",
        ],
    },
    Feature {
        icon: "📈",
        title: "Recuperação Inteligente de Leads",
        body: "Identifica leads frios e executa sequências personalizadas de reativação com base no comportamento e histórico de cada prospect.",
        bullets: [
            "Análise comportamental avançada",
            "Sequências de follow-up automáticas",
            "Personalização em massa",
        ],
    },
    Feature {
        icon: "📊",
        title: "Analytics e Otimização Contínua",
        body: "Dashboard completo com métricas de performance, insights de conversão e otimização automática baseada em dados reais.",
        bullets: [
            "Métricas de conversão em tempo real",
            "Otimização automática de scripts",
            "Relatórios detalhados de ROI",
        ],
    },
];

struct Benefit {
    icon: &'static str,
    tone: &'static str,
    figure: &'static str,
    title: &'static str,
    body: &'static str,
}

const BENEFITS: [Benefit; 4] = [
    Benefit {
        icon: "📈",
        tone: "green",
        figure: "+300%",
        title: "Aumento em Conversões",
        body: "Leads qualificados e atendidos instantaneamente resultam em mais vendas",
    },
    Benefit {
        icon: "⏱",
        tone: "blue",
        figure: "90%",
        title: "Redução no Tempo de Resposta",
        body: "De horas para segundos - nunca mais perca um lead por demora",
    },
    Benefit {
        icon: "👥",
        tone: "purple",
        figure: "85%",
        title: "Leads Recuperados",
        body: "Reative prospects frios com sequências inteligentes e personalizadas",
    },
    Benefit {
        icon: "🎯",
        tone: "yellow",
        figure: "24/7",
        title: "Operação Contínua",
        body: "Sua equipe comercial nunca para, mesmo quando você não está trabalhando",
    },
];

struct Testimonial {
    quote: &'static str,
    initials: &'static str,
    name: &'static str,
    role: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Em 30 dias, nossa taxa de conversão aumentou 280%. A IA responde leads mais rápido que nossa equipe e com qualidade superior.",
        initials: "RC",
        name: "Rafael Costa",
        role: "CEO, TechSolutions",
    },
    Testimonial {
        quote: "Recuperamos 85% dos leads que estavam frios. O ROI foi positivo já no primeiro mês de implementação.",
        initials: "MS",
        name: "Mariana Silva",
        role: "Diretora Comercial, InnovaCorp",
    },
    Testimonial {
        quote: "A implementação foi surpreendentemente rápida. Em 20 dias já estávamos operando com a IA totalmente integrada.",
        initials: "CA",
        name: "Carlos Andrade",
        role: "Fundador, StartupXYZ",
    },
];

#[function_component(ContactLanding)]
pub fn contact_landing() -> Html {
    let page = use_reducer(PageState::default);
    use_reveal(page.dispatcher());

    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    let navigate = {
        let page = page.dispatcher();
        Callback::from(move |section: &'static str| {
            scroll_to_section(section);
            page.dispatch(PageAction::CloseMenu);
        })
    };
    let go_to = |section: &'static str| {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(section))
    };
    let toggle_menu = {
        let page = page.dispatcher();
        Callback::from(move |_: ()| page.dispatch(PageAction::ToggleMenu))
    };

    html! {
        <div class="landing-page">
            <div class="grid-background"></div>

            <SiteHeader
                links={NAV_LINKS.to_vec()}
                cta={NAV_CTA}
                menu_open={page.menu_open}
                on_toggle_menu={toggle_menu}
                on_navigate={navigate.clone()}
            />

            <section class="hero">
                <Reveal id="hero" revealed={page.is_revealed("hero")}>
                    <div class="hero-badge">{"⚡ IA Treinada para Vender Mais"}</div>
                    <h1>
                        {"Automatize seu Comercial com "}
                        <span class="gradient-text">{"IA Personalizada"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Transforme seu atendimento e vendas em uma operação 24/7 com performance real. IA treinada especificamente para seu negócio em apenas 20 dias."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="cta-primary" onclick={go_to("contact")}>
                            {"Quero Automatizar Agora"}<span class="arrow">{"→"}</span>
                        </button>
                        <button class="cta-secondary" onclick={go_to("features")}>
                            {"Ver Como Funciona"}
                        </button>
                    </div>
                </Reveal>

                <div class="stats-grid">
                    { for STATS.iter().enumerate().map(|(i, (figure, label))| html! {
                        <Reveal id={format!("stat-{}", i)} index={i} revealed={page.is_revealed(&format!("stat-{}", i))} class={classes!("stat")}>
                            <div class="stat-figure">{*figure}</div>
                            <div class="stat-label">{*label}</div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="features" class="section">
                <div class="section-heading">
                    <h2>{"Como a NOCTA.I SALES AI™ "}<span class="accent">{"Revoluciona"}</span>{" Suas Vendas"}</h2>
                    <p>{"Nossa IA não é genérica. É treinada especificamente para seu negócio, conhece seus produtos e fala como sua equipe."}</p>
                </div>
                <div class="card-grid three">
                    { for FEATURES.iter().enumerate().map(|(i, feature)| html! {
                        <Reveal id={format!("feature-{}", i)} index={i} revealed={page.is_revealed(&format!("feature-{}", i))} class={classes!("card")}>
                            <div class="card-icon">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.body}</p>
                            <ul class="check-list">
                                { for feature.bullets.iter().map(|bullet| html! { <li>{*bullet}</li> }) }
                            </ul>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="benefits" class="section tinted">
                <div class="section-heading">
                    <h2>{"Resultados que Você Pode "}<span class="accent">{"Esperar"}</span></h2>
                    <p>{"Empresas que implementaram nossa solução viram transformações reais em suas operações comerciais."}</p>
                </div>
                <div class="card-grid four">
                    { for BENEFITS.iter().enumerate().map(|(i, benefit)| html! {
                        <Reveal id={format!("benefit-{}", i)} index={i} revealed={page.is_revealed(&format!("benefit-{}", i))} class={classes!("benefit", benefit.tone)}>
                            <div class="benefit-icon">{benefit.icon}</div>
                            <h3 class="benefit-figure">{benefit.figure}</h3>
                            <p class="benefit-title">{benefit.title}</p>
                            <p class="benefit-body">{benefit.body}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="testimonials" class="section">
                <div class="section-heading">
                    <h2>{"O que Nossos Clientes "}<span class="accent">{"Estão Dizendo"}</span></h2>
                    <p>{"Resultados reais de empresas que transformaram suas vendas com nossa IA."}</p>
                </div>
                <div class="card-grid three">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                        <Reveal id={format!("testimonial-{}", i)} index={i} revealed={page.is_revealed(&format!("testimonial-{}", i))} class={classes!("card", "testimonial")}>
                            <div class="stars">{"★★★★★"}</div>
                            <p class="quote">{format!("\"{}\"", t.quote)}</p>
                            <div class="author">
                                <span class="avatar">{t.initials}</span>
                                <div>
                                    <div class="author-name">{t.name}</div>
                                    <div class="author-role">{t.role}</div>
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="contact" class="section tinted">
                <div class="section-heading">
                    <h2>{"Pronto para "}<span class="accent">{"Automatizar"}</span>{" suas Vendas?"}</h2>
                    <p>{"Agende uma demonstração personalizada e veja como nossa IA pode transformar seu comercial em apenas 20 dias."}</p>
                </div>
                <div class="form-wrapper">
                    <ContactForm />
                </div>
            </section>

            <footer class="site-footer">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <span class="nav-logo"><span class="nav-logo-mark">{"◆"}</span>{"NOCTA.I SALES AI™"}</span>
                        <p>{"Automatização comercial inteligente que transforma leads em vendas com IA personalizada para seu negócio."}</p>
                        <p class="footer-contact">{"✉ contato@noctai.com.br"}</p>
                    </div>
                    <div>
                        <h3>{"Soluções"}</h3>
                        <ul>
                            <li>{"Automação de Vendas"}</li>
                            <li>{"Recuperação de Leads"}</li>
                            <li>{"Atendimento 24/7"}</li>
                            <li>{"Analytics Avançado"}</li>
                        </ul>
                    </div>
                    <div>
                        <h3>{"Empresa"}</h3>
                        <ul>
                            <li>{"Sobre Nós"}</li>
                            <li>{"Casos de Sucesso"}</li>
                            <li>{"Suporte"}</li>
                            <li>{"Contato"}</li>
                        </ul>
                    </div>
                </div>
                <p class="footer-legal">{"© 2024 NOCTA.I SALES AI™. Todos os direitos reservados."}</p>
            </footer>

            <style>{BASE_CSS}</style>
        </div>
    }
}

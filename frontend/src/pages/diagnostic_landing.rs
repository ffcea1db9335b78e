use yew::prelude::*;

use crate::components::diagnostic_form::DiagnosticForm;
use crate::components::faq::FaqItem;
use crate::components::site_header::{NavLink, SiteHeader};
use crate::pages::landing_styles::BASE_CSS;
use crate::ui::page_state::{PageAction, PageState};
use crate::ui::reveal::{use_reveal, Reveal};
use crate::ui::scroll::{scroll_to_section, scroll_to_top};

const SOLUTIONS: [NavLink; 2] = [
    NavLink { section: "framework", label: "Método em 4 etapas" },
    NavLink { section: "comparison", label: "Equipe vs. IA" },
];
const NAV_LINKS: [NavLink; 1] = [NavLink { section: "faq", label: "Dúvidas" }];
const NAV_CTA: NavLink = NavLink { section: "diagnostico", label: "Diagnóstico Gratuito" };

const STEPS: [(&str, &str, &str); 4] = [
    (
        "01",
        "Diagnóstico",
        "Mapeamos seu funil, canais de entrada e gargalos de atendimento para entender onde os leads se perdem.",
    ),
    (
        "02",
        "Treinamento",
        "A IA aprende seus produtos, objeções frequentes e o tom de voz da sua marca a partir dos seus próprios materiais.",
    ),
    (
        "03",
        "Integração",
        "Conectamos WhatsApp, CRM e agenda para que a IA qualifique, responda e marque reuniões sem intervenção manual.",
    ),
    (
        "04",
        "Otimização",
        "Acompanhamos métricas de conversão semana a semana e ajustamos scripts e sequências com base nos resultados.",
    ),
];

struct Plan {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    highlight: bool,
    items: [&'static str; 5],
}

const PLANS: [Plan; 2] = [
    Plan {
        name: "Equipe Tradicional",
        price: "R$ 12.000+",
        period: "/mês para 3 SDRs",
        highlight: false,
        items: [
            "Atendimento em horário comercial",
            "Tempo médio de resposta de horas",
            "Leads frios esquecidos no CRM",
            "Turnover e recontratação constantes",
            "Performance varia de pessoa para pessoa",
        ],
    },
    Plan {
        name: "NOCTA.I SALES AI™",
        price: "Fração do custo",
        period: "implantação em 20 dias",
        highlight: true,
        items: [
            "Atendimento 24/7, inclusive fins de semana",
            "Resposta em menos de 30 segundos",
            "Reativação automática de leads frios",
            "Escala sem novas contratações",
            "Qualidade consistente em cada conversa",
        ],
    },
];

const FAQS: [(&str, &str); 5] = [
    (
        "O diagnóstico é realmente gratuito?",
        "Sim. O diagnóstico é uma análise da sua operação comercial feita por um especialista, sem custo e sem compromisso de contratação.",
    ),
    (
        "Em quanto tempo a IA começa a atender?",
        "A implantação completa leva em média 20 dias, incluindo treinamento com seus materiais, integrações e período de validação.",
    ),
    (
        "A IA substitui minha equipe de vendas?",
        "Ela assume o primeiro atendimento, a qualificação e o follow-up. Sua equipe recebe os leads prontos para fechar.",
    ),
    (
        "Quais canais são suportados?",
        "WhatsApp, Instagram, formulários do site e email, todos centralizados e integrados ao seu CRM.",
    ),
    (
        "Meus dados ficam seguros?",
        "Os dados dos seus clientes são usados apenas para o atendimento da sua empresa e nunca compartilhados com terceiros.",
    ),
];

const PAGE_CSS: &str = r#"
.steps-grid .card {
    position: relative;
}

.step-number {
    font-size: 2.5rem;
    font-weight: 900;
    color: rgba(104, 49, 243, 0.5);
    margin-bottom: 1rem;
}

.plan {
    display: flex;
    flex-direction: column;
}

.plan.highlight {
    border-color: #6831f3;
    box-shadow: 0 0 40px rgba(104, 49, 243, 0.3);
}

.plan-price {
    font-size: 2rem;
    font-weight: 800;
    margin-bottom: 0.25rem;
}

.plan-period {
    color: #9ca3af;
    font-size: 0.875rem;
    margin-bottom: 1.5rem;
}

.plan ul {
    list-style: none;
    padding: 0;
    margin: 0;
}

.plan li {
    padding: 0.5rem 0;
    color: #d1d5db;
}

.plan li::before {
    content: '✕';
    color: #f87171;
    margin-right: 0.5rem;
}

.plan.highlight li::before {
    content: '✓';
    color: #4ade80;
}

.faq-list {
    max-width: 48rem;
    margin: 0 auto;
}

.faq-item {
    background: rgba(29, 29, 29, 0.6);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 12px;
    margin-bottom: 1rem;
    overflow: hidden;
    transition: border-color 0.3s ease;
}

.faq-item:hover {
    border-color: rgba(104, 49, 243, 0.4);
}

.faq-question {
    width: 100%;
    padding: 1.5rem;
    background: none;
    border: none;
    color: #ffffff;
    font-size: 1.1rem;
    text-align: left;
    cursor: pointer;
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.toggle-icon {
    font-size: 1.5rem;
    color: #6831f3;
    transition: transform 0.3s ease;
}

.faq-item.open .toggle-icon {
    transform: rotate(180deg);
}

.faq-answer {
    max-height: 0;
    overflow: hidden;
    transition: max-height 0.4s ease;
    padding: 0 1.5rem;
    color: #9ca3af;
    line-height: 1.6;
}

.faq-item.open .faq-answer {
    max-height: 400px;
    padding: 0 1.5rem 1.5rem;
}
"#;

#[function_component(DiagnosticLanding)]
pub fn diagnostic_landing() -> Html {
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
    let toggle_dropdown = {
        let page = page.dispatcher();
        Callback::from(move |_: ()| page.dispatch(PageAction::ToggleDropdown))
    };
    let toggle_faq = {
        let page = page.dispatcher();
        Callback::from(move |index: usize| page.dispatch(PageAction::ToggleFaq(index)))
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
                dropdown={Some(("Soluções", SOLUTIONS.to_vec()))}
                dropdown_open={page.dropdown_open}
                on_toggle_dropdown={toggle_dropdown}
            />

            <section class="hero">
                <Reveal id="hero" revealed={page.is_revealed("hero")}>
                    <div class="hero-badge">{"🔍 Diagnóstico Comercial Gratuito"}</div>
                    <h1>
                        {"Descubra quantas vendas sua empresa "}
                        <span class="gradient-text">{"perde todo mês"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Um especialista analisa seu atendimento, seu funil e seus canais e mostra, com números, onde uma IA de vendas treinada para o seu negócio recupera receita."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="cta-primary" onclick={go_to("diagnostico")}>
                            {"Quero meu Diagnóstico"}<span class="arrow">{"→"}</span>
                        </button>
                        <button class="cta-secondary" onclick={go_to("framework")}>
                            {"Conhecer o Método"}
                        </button>
                    </div>
                </Reveal>
            </section>

            <section id="framework" class="section">
                <div class="section-heading">
                    <h2>{"O Método "}<span class="accent">{"NOCTA.I"}</span>{" em 4 Etapas"}</h2>
                    <p>{"Do primeiro diagnóstico à IA vendendo sozinha em apenas 20 dias."}</p>
                </div>
                <div class="card-grid four steps-grid">
                    { for STEPS.iter().enumerate().map(|(i, (number, title, body))| html! {
                        <Reveal id={format!("step-{}", i)} index={i} revealed={page.is_revealed(&format!("step-{}", i))} class={classes!("card")}>
                            <div class="step-number">{*number}</div>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="comparison" class="section tinted">
                <div class="section-heading">
                    <h2>{"Equipe Tradicional "}<span class="accent">{"vs. IA"}</span></h2>
                    <p>{"Compare o custo e a performance de escalar o comercial contratando pessoas ou treinando uma IA."}</p>
                </div>
                <div class="card-grid two">
                    { for PLANS.iter().enumerate().map(|(i, plan)| html! {
                        <Reveal id={format!("plan-{}", i)} index={i} revealed={page.is_revealed(&format!("plan-{}", i))} class={classes!("card", "plan", plan.highlight.then_some("highlight"))}>
                            <h3>{plan.name}</h3>
                            <div class="plan-price">{plan.price}</div>
                            <div class="plan-period">{plan.period}</div>
                            <ul>
                                { for plan.items.iter().map(|item| html! { <li>{*item}</li> }) }
                            </ul>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="faq" class="section">
                <div class="section-heading">
                    <h2>{"Perguntas "}<span class="accent">{"Frequentes"}</span></h2>
                </div>
                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(i, (question, answer))| html! {
                        <FaqItem
                            index={i}
                            question={*question}
                            open={page.faq_open == Some(i)}
                            on_toggle={toggle_faq.clone()}
                        >
                            <p>{*answer}</p>
                        </FaqItem>
                    }) }
                </div>
            </section>

            <section id="diagnostico" class="section tinted">
                <div class="section-heading">
                    <h2>{"Solicite seu "}<span class="accent">{"Diagnóstico Gratuito"}</span></h2>
                    <p>{"Preencha os dados abaixo e receba uma análise da sua operação comercial pelo WhatsApp."}</p>
                </div>
                <div class="form-wrapper">
                    <DiagnosticForm />
                </div>
            </section>

            <footer class="site-footer">
                <p class="footer-legal">{"© 2024 NOCTA.I SALES AI™. Todos os direitos reservados."}</p>
            </footer>

            <style>{BASE_CSS}{PAGE_CSS}</style>
        </div>
    }
}

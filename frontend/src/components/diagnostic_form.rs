use chrono::Utc;
use web_sys::{HtmlInputElement, HtmlSelectElement, SubmitEvent};
use yew::prelude::*;

use crate::lead::diagnostic::{DiagnosticField, DiagnosticFormState, RevenueBracket, SEGMENTS};
use crate::lead::transport::{LeadTransport, SubmitError, WebhookTransport};

pub enum DiagnosticFormMsg {
    SetField(DiagnosticField, String),
    Submit,
    Submitted(Result<(), SubmitError>),
    DismissFailure,
}

pub struct DiagnosticForm {
    form: DiagnosticFormState,
}

impl Component for DiagnosticForm {
    type Message = DiagnosticFormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: DiagnosticFormState::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DiagnosticFormMsg::SetField(field, value) => {
                self.form.update_field(field, value);
                true
            }
            DiagnosticFormMsg::Submit => {
                if let Some(request) = self.form.begin_submit(Utc::now()) {
                    ctx.link().send_future(async move {
                        DiagnosticFormMsg::Submitted(WebhookTransport.send(request).await)
                    });
                }
                true
            }
            DiagnosticFormMsg::Submitted(outcome) => {
                self.form.finish_submit(outcome);
                true
            }
            DiagnosticFormMsg::DismissFailure => {
                self.form.dismiss_failure();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.form.submitted() {
            return html! {
                <div class="form-card thank-you">
                    <div class="thank-you-icon">{"✓"}</div>
                    <h3>{"Diagnóstico solicitado!"}</h3>
                    <p>
                        {"Recebemos suas informações. Um especialista vai analisar sua operação comercial e falar com você pelo WhatsApp em até 24 horas úteis."}
                    </p>
                </div>
            };
        }

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            DiagnosticFormMsg::Submit
        });

        html! {
            <div class="form-card">
                if self.form.failed() {
                    <div class="banner banner-error">
                        <span class="banner-icon">{"✕"}</span>
                        {"Não foi possível enviar agora. Tente novamente em instantes."}
                        <button class="banner-close" onclick={ctx.link().callback(|_| DiagnosticFormMsg::DismissFailure)}>
                            {"✕"}
                        </button>
                    </div>
                }

                <form {onsubmit} class="lead-form">
                    <div class="form-row">
                        { self.text_input(ctx, DiagnosticField::Name, "Nome *", "text", "Seu nome") }
                        { self.text_input(ctx, DiagnosticField::Whatsapp, "WhatsApp *", "tel", "(11) 99999-9999") }
                    </div>
                    <div class="form-row">
                        { self.text_input(ctx, DiagnosticField::Email, "Email *", "email", "seu@email.com") }
                        { self.text_input(ctx, DiagnosticField::Company, "Empresa *", "text", "Nome da empresa") }
                    </div>
                    <div class="form-row">
                        { self.segment_select(ctx) }
                        { self.text_input(ctx, DiagnosticField::Website, "Site (opcional)", "url", "https://") }
                    </div>
                    { self.revenue_select(ctx) }

                    <button type="submit" class="submit-button" disabled={self.form.is_submitting()}>
                        if self.form.is_submitting() {
                            <span class="submit-label"><span class="pulse">{"⏳"}</span>{"Enviando..."}</span>
                        } else {
                            <span class="submit-label">{"Quero meu Diagnóstico Gratuito"}<span class="arrow">{"→"}</span></span>
                        }
                    </button>
                </form>
            </div>
        }
    }
}

impl DiagnosticForm {
    fn on_select(ctx: &Context<Self>) -> Callback<Event> {
        ctx.link().batch_callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            DiagnosticField::from_name(&select.name())
                .map(|field| DiagnosticFormMsg::SetField(field, select.value()))
        })
    }

    fn text_input(
        &self,
        ctx: &Context<Self>,
        field: DiagnosticField,
        label: &'static str,
        kind: &'static str,
        placeholder: &'static str,
    ) -> Html {
        let oninput = ctx.link().batch_callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            DiagnosticField::from_name(&input.name())
                .map(|field| DiagnosticFormMsg::SetField(field, input.value()))
        });
        let missing = self.form.is_missing(field);

        html! {
            <div class="form-field">
                <label for={field.name()}>{label}</label>
                <input
                    type={kind}
                    id={field.name()}
                    name={field.name()}
                    required={field.is_required()}
                    value={self.form.value(field).to_string()}
                    {oninput}
                    class={classes!(missing.then_some("invalid"))}
                    placeholder={placeholder}
                />
                { Self::missing_note(missing) }
            </div>
        }
    }

    fn segment_select(&self, ctx: &Context<Self>) -> Html {
        let current = self.form.value(DiagnosticField::Segment);
        let missing = self.form.is_missing(DiagnosticField::Segment);
        html! {
            <div class="form-field">
                <label for="segment">{"Segmento *"}</label>
                <select
                    id="segment"
                    name="segment"
                    required={true}
                    class={classes!(missing.then_some("invalid"))}
                    onchange={Self::on_select(ctx)}
                >
                    <option value="" selected={current.is_empty()} disabled={true}>{"Selecione"}</option>
                    { for SEGMENTS.iter().map(|segment| html! {
                        <option value={*segment} selected={current == *segment}>{*segment}</option>
                    }) }
                </select>
                { Self::missing_note(missing) }
            </div>
        }
    }

    fn missing_note(missing: bool) -> Html {
        if missing {
            html! { <p class="field-error">{"Preencha este campo"}</p> }
        } else {
            html! {}
        }
    }

    fn revenue_select(&self, ctx: &Context<Self>) -> Html {
        let current = self.form.lead().revenue;
        html! {
            <div class="form-field">
                <label for="revenue">{"Faturamento mensal (opcional)"}</label>
                <select id="revenue" name="revenue" onchange={Self::on_select(ctx)}>
                    <option value="" selected={current.is_none()}>{"Prefiro não informar"}</option>
                    { for RevenueBracket::ALL.iter().map(|bracket| html! {
                        <option value={bracket.label()} selected={current == Some(*bracket)}>{bracket.label()}</option>
                    }) }
                </select>
            </div>
        }
    }
}

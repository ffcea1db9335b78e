use chrono::Utc;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::lead::contact::{ContactField, ContactFormState, SubmissionStatus};
use crate::lead::transport::{LeadTransport, SubmitError, WebhookTransport};

pub enum ContactFormMsg {
    SetField(ContactField, String),
    Submit,
    Submitted(Result<(), SubmitError>),
}

pub struct ContactForm {
    form: ContactFormState,
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactFormState::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::SetField(field, value) => {
                self.form.update_field(field, value);
                true
            }
            ContactFormMsg::Submit => {
                if let Some(request) = self.form.begin_submit(Utc::now()) {
                    ctx.link().send_future(async move {
                        ContactFormMsg::Submitted(WebhookTransport.send(request).await)
                    });
                }
                true
            }
            ContactFormMsg::Submitted(outcome) => {
                self.form.finish_submit(outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });

        let on_message = ctx.link().callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            ContactFormMsg::SetField(ContactField::Message, area.value())
        });

        html! {
            <div class="form-card">
                { self.status_banner() }

                <form {onsubmit} class="lead-form">
                    <div class="form-row">
                        { self.text_input(ctx, ContactField::Name, "Nome Completo *", "text", "Seu nome completo") }
                        { self.text_input(ctx, ContactField::Email, "Email Profissional *", "email", "seu@email.com") }
                    </div>
                    <div class="form-row">
                        { self.text_input(ctx, ContactField::Phone, "Telefone/WhatsApp *", "tel", "(11) 99999-9999") }
                        { self.text_input(ctx, ContactField::Company, "Empresa *", "text", "Nome da sua empresa") }
                    </div>

                    <div class="form-field">
                        <label for="message">{"Mensagem (Opcional)"}</label>
                        <textarea
                            id="message"
                            name="message"
                            rows="4"
                            value={self.form.value(ContactField::Message).to_string()}
                            oninput={on_message}
                            placeholder="Conte-nos mais sobre seu negócio e como podemos ajudar..."
                        />
                    </div>

                    <button type="submit" class="submit-button" disabled={self.form.is_submitting()}>
                        if self.form.is_submitting() {
                            <span class="submit-label"><span class="pulse">{"⏳"}</span>{"Enviando..."}</span>
                        } else {
                            <span class="submit-label">{"Quero uma Demonstração Gratuita"}<span class="arrow">{"→"}</span></span>
                        }
                    </button>

                    <p class="form-footnote">
                        {"Resposta em até 2 horas úteis • Demonstração personalizada • Sem compromisso"}
                    </p>
                </form>
            </div>
        }
    }
}

impl ContactForm {
    fn status_banner(&self) -> Html {
        match self.form.status() {
            SubmissionStatus::Success => html! {
                <div class="banner banner-success">
                    <span class="banner-icon">{"✓"}</span>
                    {"Mensagem enviada com sucesso! Entraremos em contato em breve."}
                </div>
            },
            SubmissionStatus::Error => html! {
                <div class="banner banner-error">
                    <span class="banner-icon">{"✕"}</span>
                    {"Erro ao enviar mensagem. Tente novamente ou entre em contato diretamente."}
                </div>
            },
            SubmissionStatus::Idle => html! {},
        }
    }

    fn text_input(
        &self,
        ctx: &Context<Self>,
        field: ContactField,
        label: &'static str,
        kind: &'static str,
        placeholder: &'static str,
    ) -> Html {
        let oninput = ctx.link().batch_callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactField::from_name(&input.name()).map(|field| ContactFormMsg::SetField(field, input.value()))
        });
        let error = self.form.error(field);

        html! {
            <div class="form-field">
                <label for={field.name()}>{label}</label>
                <input
                    type={kind}
                    id={field.name()}
                    name={field.name()}
                    value={self.form.value(field).to_string()}
                    {oninput}
                    class={classes!(error.is_some().then_some("invalid"))}
                    placeholder={placeholder}
                />
                if let Some(message) = error {
                    <p class="field-error">{message}</p>
                }
            </div>
        }
    }
}

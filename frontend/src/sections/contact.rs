use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::section_header::SectionHeader;
use crate::config::{
    CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE_DISPLAY, CONTACT_PHONE_HREF, CONTACT_SUCCESS_DISPLAY_MS,
    MAP_EMBED_URL, SITE_NAME,
};
use crate::content::{CONTACT_ID, CONTACT_IMAGE, OPENING_HOURS};
use crate::state::contact_form::{ContactAction, ContactForm, ContactFormData, Field, FormPhase};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    /// Receives each accepted submission. Nothing is sent over the network here.
    pub on_submit: Callback<ContactFormData>,
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Phone => "tel",
        Field::Email => "email",
        _ => "text",
    }
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let form = use_reducer(ContactForm::default);

    // Hand the accepted data to the seam, then hold the thank-you panel for a
    // fixed time before clearing the form.
    {
        let form_for_timer = form.clone();
        let on_submit = props.on_submit.clone();
        use_effect_with_deps(
            move |phase| {
                let timeout = (*phase == FormPhase::Submitted).then(|| {
                    if let Some(data) = form_for_timer.pending_submission() {
                        on_submit.emit(data.clone());
                    }
                    Timeout::new(CONTACT_SUCCESS_DISPLAY_MS, move || {
                        form_for_timer.dispatch(ContactAction::SuccessElapsed);
                    })
                });
                move || drop(timeout)
            },
            form.phase,
        );
    }

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(ContactAction::Submit);
        })
    };

    let field_view = |field: Field| {
        let error = form.errors.get(field);
        let error_id = format!("{}-error", field.id());
        let class = classes!("form-control", error.is_some().then_some("invalid"));
        let value = form.data.value(field).to_string();
        let control = if field == Field::Message {
            let form = form.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                form.dispatch(ContactAction::Edit(field, value));
            });
            html! {
                <textarea
                    id={field.id()}
                    rows="4"
                    {class}
                    {value}
                    {oninput}
                    aria-invalid={error.is_some().to_string()}
                    aria-describedby={error.is_some().then(|| error_id.clone())}
                />
            }
        } else {
            let form = form.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let value = e.target_unchecked_into::<HtmlInputElement>().value();
                form.dispatch(ContactAction::Edit(field, value));
            });
            html! {
                <input
                    id={field.id()}
                    type={input_type(field)}
                    {class}
                    {value}
                    {oninput}
                    aria-invalid={error.is_some().to_string()}
                    aria-describedby={error.is_some().then(|| error_id.clone())}
                />
            }
        };
        html! {
            <div class="form-field">
                <label for={field.id()}>{field.label()}</label>
                { control }
                if let Some(error) = error {
                    <p id={error_id} class="form-error">{error.to_string()}</p>
                }
            </div>
        }
    };

    html! {
        <section id={CONTACT_ID} dir="rtl" class="contact">
            <div class="contact-inner">
                <SectionHeader
                    title="צור קשר"
                    subtitle="אנחנו תמיד שמחים לשמוע מכם. השאירו פרטים ונחזור אליכם בהקדם"
                    decorated={false}
                />

                <div class="contact-grid">
                    <div class="contact-panel">
                        <h3>{"השאירו פרטים"}</h3>
                        if form.phase == FormPhase::Submitted {
                            <div class="contact-success" role="status">
                                <div class="contact-success-badge">{"✓"}</div>
                                <h4>{"תודה על פנייתך!"}</h4>
                                <p>{"נחזור אליך בהקדם האפשרי."}</p>
                            </div>
                        } else {
                            <form class="contact-form" novalidate=true {onsubmit}>
                                { for Field::ALL.into_iter().map(field_view) }
                                <Button
                                    button_type="submit"
                                    variant={ButtonVariant::Secondary}
                                    size={ButtonSize::Lg}
                                    full_width=true
                                >
                                    {"שלח הודעה"}
                                </Button>
                            </form>
                        }
                    </div>

                    <div class="contact-side">
                        <div class="contact-panel contact-info">
                            <h3>{"פרטי התקשרות"}</h3>
                            <div class="info-row">
                                <span class="info-icon" aria-hidden="true">{"☎"}</span>
                                <div>
                                    <h4>{"טלפון"}</h4>
                                    <a href={CONTACT_PHONE_HREF}>{CONTACT_PHONE_DISPLAY}</a>
                                </div>
                            </div>
                            <div class="info-row">
                                <span class="info-icon" aria-hidden="true">{"✉"}</span>
                                <div>
                                    <h4>{"דוא\"ל"}</h4>
                                    <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                                </div>
                            </div>
                            <div class="info-row">
                                <span class="info-icon" aria-hidden="true">{"⌖"}</span>
                                <div>
                                    <h4>{"כתובת"}</h4>
                                    <p>{CONTACT_ADDRESS}</p>
                                </div>
                            </div>
                            <div class="opening-hours">
                                <h4>{"שעות פעילות"}</h4>
                                { for OPENING_HOURS.iter().map(|line| html! { <p>{*line}</p> }) }
                            </div>
                        </div>

                        <div class="contact-map">
                            <iframe
                                src={MAP_EMBED_URL}
                                width="100%"
                                height="100%"
                                style="border: 0; border-radius: 0.75rem;"
                                allowfullscreen=true
                                loading="lazy"
                                referrerpolicy="no-referrer-when-downgrade"
                                title="מיקום המסעדה"
                                aria-label="מפת גוגל המציגה את מיקום המסעדה"
                            ></iframe>
                        </div>
                    </div>
                </div>

                <div class="contact-banner">
                    <img src={CONTACT_IMAGE} alt="מסעדה גמא - חלל המסעדה" loading="lazy" />
                    <div class="contact-banner-shade">
                        <div>
                            <h3>{SITE_NAME}</h3>
                            <p>{"חוויה קולינרית בלתי נשכחת"}</p>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .contact { padding: 4rem 0; background: #f9fafb; }
                .contact-inner { max-width: 80rem; margin: 0 auto; padding: 0 1rem; }
                .contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; }
                .contact-panel {
                    background: #fff;
                    border-radius: 0.75rem;
                    padding: 2rem;
                    text-align: right;
                    box-shadow: 5px 5px 15px #d1d9e6, -5px -5px 15px #ffffff;
                }
                .contact-panel h3 { font-size: 1.5rem; font-weight: 700; color: #1f2937; margin-bottom: 1.5rem; }
                .contact-form { display: flex; flex-direction: column; gap: 1.5rem; }
                .form-field label { display: block; color: #374151; font-weight: 500; margin-bottom: 0.5rem; }
                .form-control {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                    background: #f9fafb;
                    border: 1px solid #d1d5db;
                    text-align: right;
                    font: inherit;
                }
                .form-control:focus { outline: none; box-shadow: 0 0 0 2px var(--primary); }
                .form-control.invalid { border-color: #ef4444; }
                .form-error { margin-top: 0.25rem; color: #ef4444; font-size: 0.875rem; }
                .contact-success {
                    text-align: center;
                    padding: 1.5rem;
                    border-radius: 0.5rem;
                    background: rgba(150,206,180,0.2);
                    border: 1px solid var(--primary);
                    animation: success-in 0.3s ease-out;
                }
                @keyframes success-in { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: none; } }
                .contact-success-badge {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    background: var(--primary);
                    color: #fff;
                    font-size: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .contact-success h4 { font-size: 1.25rem; font-weight: 700; color: #1f2937; margin-bottom: 0.5rem; }
                .contact-success p { color: #4b5563; }
                .contact-side { display: flex; flex-direction: column; gap: 2rem; }
                .contact-info { background: rgba(255,255,255,0.8); backdrop-filter: blur(12px); }
                .info-row { display: flex; align-items: center; gap: 1rem; margin-bottom: 1.5rem; }
                .info-row h4 { font-size: 1.125rem; font-weight: 600; color: #1f2937; }
                .info-row a, .info-row p { color: #4b5563; text-decoration: none; }
                .info-row a:hover { color: var(--accent); }
                .info-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: rgba(150,206,180,0.1);
                    color: var(--primary);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.25rem;
                }
                .opening-hours { margin-top: 2rem; color: #4b5563; }
                .opening-hours h4 { font-size: 1.125rem; font-weight: 600; color: #1f2937; margin-bottom: 0.5rem; }
                .contact-map {
                    height: 300px;
                    padding: 0.5rem;
                    background: #fff;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    box-shadow: 5px 5px 15px #d1d9e6, -5px -5px 15px #ffffff;
                }
                .contact-banner {
                    position: relative;
                    margin-top: 4rem;
                    height: 400px;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    box-shadow: 5px 5px 15px #d1d9e6, -5px -5px 15px #ffffff;
                }
                .contact-banner img { width: 100%; height: 100%; object-fit: cover; }
                .contact-banner-shade {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: flex-end;
                    padding: 2rem;
                    color: #fff;
                    text-align: right;
                    background: linear-gradient(to top, rgba(0,0,0,0.7), transparent);
                }
                .contact-banner-shade h3 { font-size: 1.875rem; font-weight: 700; margin-bottom: 0.5rem; }
                .contact-banner-shade p { font-size: 1.125rem; opacity: 0.9; }
                @media (max-width: 1024px) { .contact-grid { grid-template-columns: 1fr; } }
                @media (max-width: 768px) { .contact-banner { height: 300px; } }
                "#}
            </style>
        </section>
    }
}

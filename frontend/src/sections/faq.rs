use yew::prelude::*;

use crate::components::section_header::{HeaderAlignment, HeaderSize, SectionHeader};
use crate::config::{CONTACT_EMAIL, CONTACT_PHONE_HREF};
use crate::content::{FaqItem, ABOUT_IMAGE, FAQ_ID, FAQ_ITEMS};
use crate::state::accordion::{is_activation_key, Accordion};

#[derive(Properties, PartialEq)]
struct FaqEntryProps {
    item: FaqItem,
    open: bool,
    on_toggle: Callback<&'static str>,
}

#[function_component(FaqEntry)]
fn faq_entry(props: &FaqEntryProps) -> Html {
    let id = props.item.id;
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id);
        })
    };
    let onkeydown = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_activation_key(&e.key()) {
                e.prevent_default();
                on_toggle.emit(id);
            }
        })
    };
    let content_id = format!("{}-content", id);

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button
                {id}
                class="faq-question"
                aria-expanded={props.open.to_string()}
                aria-controls={content_id.clone()}
                {onclick}
                {onkeydown}
            >
                <span class="question-text">{props.item.question}</span>
                <span class="toggle-icon" aria-hidden="true">{"⌄"}</span>
            </button>
            if props.open {
                <div id={content_id} class="faq-answer">
                    <p>{props.item.answer}</p>
                </div>
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_state(Accordion::default);

    let on_toggle = {
        let accordion = accordion.clone();
        Callback::from(move |id: &'static str| {
            let mut next = (*accordion).clone();
            next.toggle(id);
            accordion.set(next);
        })
    };

    html! {
        <section id={FAQ_ID} dir="rtl" class="faq-section">
            <div class="faq-hero">
                <SectionHeader
                    title="שאלות נפוצות"
                    subtitle="כאן תוכלו למצוא תשובות לשאלות הנפוצות ביותר על מסעדה גמא. אם לא מצאתם את התשובה לשאלתכם, אל תהססו ליצור איתנו קשר ישירות."
                    alignment={HeaderAlignment::Start}
                    decorated={false}
                />
                <img src={ABOUT_IMAGE} alt="מסעדה גמא - אווירה" class="faq-hero-image" loading="lazy" />
            </div>

            <div class="faq-list">
                { for FAQ_ITEMS.iter().map(|item| html! {
                    <FaqEntry
                        key={item.id}
                        item={*item}
                        open={accordion.is_open(item.id)}
                        on_toggle={on_toggle.clone()}
                    />
                }) }
            </div>

            <div class="faq-more">
                <SectionHeader
                    title="עדיין יש לכם שאלות?"
                    subtitle="אנחנו כאן כדי לעזור! צרו איתנו קשר באחת מהדרכים הבאות:"
                    alignment={HeaderAlignment::Start}
                    size={HeaderSize::Small}
                    decorated={false}
                />
                <div class="faq-more-links">
                    <a class="faq-call" href={CONTACT_PHONE_HREF}>{"התקשרו אלינו"}</a>
                    <a class="faq-mail" href={format!("mailto:{}", CONTACT_EMAIL)}>{"שלחו לנו מייל"}</a>
                </div>
            </div>

            <style>
                {r#"
                .faq-section {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 3rem 1rem;
                }
                .faq-hero {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1rem;
                    padding: 2rem;
                    margin-bottom: 2.5rem;
                    background: linear-gradient(135deg, rgba(150,206,180,0.3), rgba(255,107,107,0.2));
                    border: 1px solid rgba(255,255,255,0.2);
                    box-shadow: 0 10px 15px rgba(0,0,0,0.1);
                }
                .faq-hero-image {
                    width: 100%;
                    height: 12rem;
                    object-fit: cover;
                    border-radius: 0.75rem;
                    box-shadow: 0 4px 6px rgba(0,0,0,0.1);
                }
                .faq-list { display: flex; flex-direction: column; gap: 1rem; }
                .faq-item {
                    background: rgba(255,255,255,0.8);
                    backdrop-filter: blur(4px);
                    border-radius: 0.75rem;
                    overflow: hidden;
                    border: 1px solid rgba(255,255,255,0.5);
                    box-shadow: 0 4px 15px rgba(0,0,0,0.07);
                    transition: box-shadow 0.3s ease;
                }
                .faq-item:hover { box-shadow: 0 8px 20px rgba(0,0,0,0.1); }
                .faq-question {
                    width: 100%;
                    padding: 1.25rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    text-align: right;
                    background: none;
                    border: none;
                    cursor: pointer;
                    font: inherit;
                }
                .faq-question:focus-visible { outline: 2px solid var(--accent); }
                .question-text { font-weight: 500; font-size: 1.125rem; color: #1f2937; }
                .toggle-icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    background: rgba(150,206,180,0.2);
                    color: var(--accent);
                    transition: transform 0.3s ease;
                }
                .faq-item.open .toggle-icon { transform: rotate(180deg); }
                .faq-answer {
                    padding: 0 1.25rem 1.25rem;
                    border-top: 1px solid #f3f4f6;
                    color: #374151;
                    text-align: right;
                    animation: faq-open 0.3s ease-in-out;
                }
                @keyframes faq-open { from { opacity: 0; } to { opacity: 1; } }
                .faq-more {
                    margin-top: 3rem;
                    padding: 1.5rem;
                    text-align: right;
                    background: rgba(255,255,255,0.8);
                    border-radius: 0.75rem;
                    box-shadow: 0 4px 15px rgba(0,0,0,0.07);
                }
                .faq-more .section-header { margin: 0 0 1rem; }
                .faq-more-links { display: flex; gap: 1rem; justify-content: flex-end; flex-wrap: wrap; }
                .faq-more-links a {
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    text-decoration: none;
                    transition: box-shadow 0.3s ease;
                }
                .faq-call { background: var(--primary); color: #fff; box-shadow: 0 4px 10px rgba(150,206,180,0.3); }
                .faq-mail { background: #fff; color: var(--accent); border: 1px solid rgba(255,107,107,0.3); }
                "#}
            </style>
        </section>
    }
}

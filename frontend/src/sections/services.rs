use yew::prelude::*;

use crate::components::card::{Card, CardAction, CardImage, CardVariant};
use crate::components::section_header::SectionHeader;
use crate::content::{CONTACT_ID, MENU_ID, SERVICES};
use crate::state::navigation::scroll_to_anchor;

#[function_component(Services)]
pub fn services() -> Html {
    let hovered = use_state(|| None::<usize>);

    let book = Callback::from(|_: ()| {
        scroll_to_anchor(CONTACT_ID);
    });

    let cards = SERVICES.iter().enumerate().map(|(index, service)| {
        let on_enter = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
        };
        let on_leave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };
        let active = *hovered == Some(index);
        html! {
            <div
                class={classes!("service-slot", active.then_some("service-active"))}
                onmouseenter={on_enter}
                onmouseleave={on_leave}
            >
                <span class="service-icon" aria-hidden="true">{service.icon}</span>
                <Card
                    variant={CardVariant::Service}
                    image={CardImage { src: service.image_url.into(), alt: service.title.into() }}
                    title={service.title}
                    description={service.description}
                    actions={vec![CardAction {
                        label: "להזמנה".into(),
                        href: None,
                        onclick: Some(book.clone()),
                    }]}
                />
                <span class="service-bar"></span>
            </div>
        }
    });

    html! {
        <section id={MENU_ID} dir="rtl" class="services">
            <div class="services-inner">
                <SectionHeader
                    title="השירותים שלנו"
                    subtitle="במסעדה גמא אנו מציעים מגוון שירותים ייחודיים שיהפכו כל ביקור לחוויה קולינרית בלתי נשכחת"
                />
                <div class="services-grid">
                    { for cards }
                </div>
            </div>
            <style>
                {r#"
                .services { padding: 4rem 1rem; background: #f9fafb; }
                .services-inner { max-width: 80rem; margin: 0 auto; }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .service-slot {
                    position: relative;
                    border-radius: 1rem;
                    box-shadow: 0 5px 15px rgba(0,0,0,0.05);
                    transition: box-shadow 0.3s ease;
                }
                .service-slot .card { height: 100%; }
                .service-active {
                    box-shadow: 0 15px 30px rgba(0,0,0,0.1), 0 8px 15px rgba(0,0,0,0.05);
                }
                .service-icon {
                    position: absolute;
                    top: 168px;
                    right: 1.5rem;
                    z-index: 2;
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                    background: linear-gradient(135deg, #96CEB4, #96CEB4cc);
                    box-shadow: 0 4px 10px rgba(150, 206, 180, 0.5);
                }
                .service-bar {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    height: 4px;
                    background: linear-gradient(to right, var(--primary), var(--accent));
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .service-active .service-bar { opacity: 1; }
                @media (max-width: 1024px) { .services-grid { grid-template-columns: repeat(2, 1fr); } }
                @media (max-width: 768px) { .services-grid { grid-template-columns: 1fr; } }
                "#}
            </style>
        </section>
    }
}

use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::content::{CONTACT_ID, HERO_IMAGE, HOME_ID, MENU_ID, TAGLINE};
use crate::state::navigation::{parallax_offset, scroll_to_anchor};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub scroll_y: f64,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let book = Callback::from(|_: MouseEvent| {
        scroll_to_anchor(CONTACT_ID);
    });
    let see_menu = Callback::from(|_: MouseEvent| {
        scroll_to_anchor(MENU_ID);
    });
    let background_style = format!("transform: translateY({}px);", parallax_offset(props.scroll_y));

    html! {
        <section id={HOME_ID} dir="rtl" class="hero" aria-label="אזור כותרת ראשית">
            <div class="hero-background" style={background_style}>
                <img src={HERO_IMAGE} alt="מסעדה גמא - תמונת רקע" class="hero-image" />
                <div class="hero-shade"></div>
            </div>
            <div class="hero-content">
                <div class="hero-glass">
                    <h1>{"מסעדה מוביל בישראל"}</h1>
                    <p class="hero-subtitle">{"חווית לקוח מושלמת בכל ביקור"}</p>
                    <p class="hero-tagline">{TAGLINE}</p>
                    <Button size={ButtonSize::Lg} class="hero-cta" aria_label="קבע תור עכשיו" onclick={book}>
                        {"קבע תור עכשיו"}
                    </Button>
                    <Button variant={ButtonVariant::Outline} size={ButtonSize::Lg} class="hero-menu" onclick={see_menu}>
                        {"לתפריט"}
                    </Button>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    width: 100%;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                    will-change: transform;
                }
                .hero-image {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0,0,0,0.8), rgba(0,0,0,0.5), rgba(0,0,0,0.3));
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    height: 100%;
                    align-items: center;
                    justify-content: center;
                    padding: 0 1rem;
                }
                .hero-glass {
                    max-width: 48rem;
                    text-align: right;
                    backdrop-filter: blur(12px);
                    background: rgba(255,255,255,0.1);
                    padding: 3rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(255,255,255,0.2);
                    box-shadow: 0 20px 25px rgba(0,0,0,0.15);
                    animation: hero-in 0.6s ease-out both;
                }
                @keyframes hero-in {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: none; }
                }
                .hero-glass h1 {
                    font-size: 3.75rem;
                    font-weight: 700;
                    color: #fff;
                    margin-bottom: 1rem;
                }
                .hero-subtitle {
                    font-size: 1.5rem;
                    color: rgba(255,255,255,0.9);
                    margin-bottom: 2rem;
                }
                .hero-tagline {
                    color: rgba(255,255,255,0.8);
                    margin-bottom: 2rem;
                }
                .hero-cta:hover {
                    transform: scale(1.05);
                    background: var(--accent);
                }
                .hero-menu { margin-inline-start: 1rem; color: #fff; border-color: #fff; }
                @media (max-width: 768px) {
                    .hero-glass { padding: 2rem; }
                    .hero-glass h1 { font-size: 2.25rem; }
                    .hero-subtitle { font-size: 1.25rem; }
                }
                "#}
            </style>
        </section>
    }
}

use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::section_header::{HeaderSize, SectionHeader};
use crate::content::{Feature, ABOUT_ID, ABOUT_IMAGE, CONTACT_ID, FEATURES, STATS, TAGLINE};
use crate::state::navigation::scroll_to_anchor;

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    feature: Feature,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let Feature { icon, title, description } = props.feature;
    html! {
        <div class="feature-card">
            <div class="feature-icon" aria-hidden="true">{icon}</div>
            <div>
                <h3>{title}</h3>
                <p>{description}</p>
            </div>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let reserve = Callback::from(|_: MouseEvent| {
        scroll_to_anchor(CONTACT_ID);
    });

    html! {
        <section id={ABOUT_ID} dir="rtl" class="about">
            <div class="about-blob about-blob-a"></div>
            <div class="about-blob about-blob-b"></div>
            <div class="about-inner">
                <SectionHeader title="אודות מסעדה גמא" subtitle={TAGLINE} size={HeaderSize::Large} />

                <div class="about-grid">
                    <div class="about-features">
                        { for FEATURES.iter().map(|f| html! { <FeatureCard feature={*f} /> }) }
                    </div>
                    <div class="about-photo">
                        <img src={ABOUT_IMAGE} alt="מסעדה גמא - חוויה קולינרית" loading="lazy" />
                        <div class="about-photo-caption">
                            <p>{"שנים של מצוינות קולינרית"}</p>
                        </div>
                    </div>
                </div>

                <div class="about-stats">
                    { for STATS.iter().map(|s| html! {
                        <div class="stat-card">
                            <h3>{s.value}</h3>
                            <p>{s.label}</p>
                        </div>
                    }) }
                </div>

                <div class="about-cta">
                    <Button variant={ButtonVariant::Secondary} onclick={reserve}>
                        {"הזמינו שולחן עכשיו"}
                    </Button>
                </div>
            </div>
            <style>
                {r#"
                .about {
                    position: relative;
                    overflow: hidden;
                    padding: 4rem 1rem;
                    background: linear-gradient(135deg, var(--primary-light) 0%, var(--primary) 100%);
                }
                .about-blob {
                    position: absolute;
                    border-radius: 50%;
                    background: rgba(255, 107, 107, 0.1);
                    filter: blur(64px);
                }
                .about-blob-a { top: -6rem; right: -6rem; width: 16rem; height: 16rem; }
                .about-blob-b { bottom: 3rem; left: -3rem; width: 12rem; height: 12rem; }
                .about-inner { position: relative; z-index: 1; max-width: 72rem; margin: 0 auto; }
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .about-features { display: flex; flex-direction: column; gap: 1.5rem; }
                .feature-card {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                    text-align: right;
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                    background: rgba(255,255,255,0.2);
                    backdrop-filter: blur(16px);
                    border: 1px solid rgba(255,255,255,0.2);
                    box-shadow: var(--neumorphic);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .feature-card:hover { transform: translateY(-5px); box-shadow: 0 10px 20px rgba(0,0,0,0.1); }
                .feature-card h3 { font-size: 1.25rem; font-weight: 700; color: #1f2937; margin-bottom: 0.5rem; }
                .feature-card p { color: #374151; }
                .feature-icon {
                    background: var(--accent);
                    padding: 0.75rem;
                    border-radius: 50%;
                    font-size: 1.5rem;
                    line-height: 1;
                }
                .about-photo {
                    position: relative;
                    height: 500px;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: var(--neumorphic);
                }
                .about-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .about-photo img:hover { transform: scale(1.05); }
                .about-photo-caption {
                    position: absolute;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    background: rgba(255,255,255,0.1);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255,255,255,0.2);
                    color: #fff;
                    font-size: 1.125rem;
                    font-weight: 600;
                }
                .about-stats {
                    margin-top: 5rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .stat-card {
                    text-align: center;
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                    background: rgba(255,255,255,0.2);
                    backdrop-filter: blur(16px);
                    box-shadow: var(--neumorphic);
                }
                .stat-card h3 { font-size: 2.25rem; font-weight: 700; color: var(--accent); margin-bottom: 0.5rem; }
                .stat-card p { color: #374151; }
                .about-cta { margin-top: 5rem; text-align: center; }
                @media (max-width: 768px) {
                    .about-grid, .about-stats { grid-template-columns: 1fr; }
                    .about-photo { height: 320px; order: -1; }
                }
                "#}
            </style>
        </section>
    }
}

use yew::prelude::*;

use crate::content::{CONTACT_ID, CTA_ID, CTA_IMAGE};
use crate::state::navigation::scroll_to_anchor;

#[function_component(Cta)]
pub fn cta() -> Html {
    let hovered = use_state(|| false);

    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let book = Callback::from(|_: MouseEvent| {
        scroll_to_anchor(CONTACT_ID);
    });

    html! {
        <section id={CTA_ID} dir="rtl" class="cta" aria-labelledby="cta-heading">
            <div class="cta-background">
                <img src={CTA_IMAGE} alt="תמונת רקע של מנה מיוחדת במסעדה גמא" />
                <div class="cta-shade"></div>
            </div>
            <div class="cta-inner">
                <div class="cta-glass">
                    <h2 id="cta-heading">{"טעמים שלא תשכחו לעולם"}</h2>
                    <p class="cta-text">
                        {"מקומות מוגבלים לסוף השבוע! הזמינו מקום עכשיו וחוו את החוויה הקולינרית המדוברת ביותר בעיר. תפריט מיוחד מחכה רק לכם."}
                    </p>
                    <div class="cta-actions">
                        <button
                            class={classes!("cta-button", (*hovered).then_some("hovered"))}
                            aria-label="הזמנת מקום במסעדה"
                            onmouseenter={on_enter}
                            onmouseleave={on_leave}
                            onclick={book}
                        >
                            <span class="cta-button-label">{"קבע תור עכשיו"}</span>
                            <span class="cta-button-sweep"></span>
                        </button>
                    </div>
                    <p class="cta-note">{"* ההזמנה מותנית באישור זמינות. שעות פעילות: א׳-ה׳ 12:00-23:00, ו׳-ש׳ 12:00-00:00"}</p>
                </div>
                <div class="cta-orb cta-orb-a"></div>
                <div class="cta-orb cta-orb-b"></div>
            </div>
            <style>
                {r#"
                .cta { position: relative; width: 100%; padding: 6rem 0; overflow: hidden; }
                .cta-background { position: absolute; inset: 0; }
                .cta-background img { width: 100%; height: 100%; object-fit: cover; }
                .cta-shade { position: absolute; inset: 0; background: rgba(0,0,0,0.6); }
                .cta-inner { position: relative; z-index: 2; max-width: 72rem; margin: 0 auto; padding: 0 1rem; }
                .cta-glass {
                    text-align: right;
                    backdrop-filter: blur(4px);
                    background: rgba(255,255,255,0.1);
                    border: 1px solid rgba(255,255,255,0.2);
                    border-radius: 1rem;
                    padding: 3rem;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2), inset 0 1px 2px rgba(255, 255, 255, 0.1);
                }
                .cta-glass h2 { font-size: 3rem; font-weight: 700; color: #fff; margin-bottom: 1rem; }
                .cta-text { font-size: 1.25rem; color: rgba(255,255,255,0.9); margin-bottom: 2rem; max-width: 42rem; }
                .cta-actions { display: flex; justify-content: flex-end; }
                .cta-button {
                    position: relative;
                    overflow: hidden;
                    border: none;
                    border-radius: 0.75rem;
                    padding: 1rem 2rem;
                    font-size: 1.125rem;
                    font-weight: 500;
                    color: #fff;
                    cursor: pointer;
                    background: linear-gradient(135deg, #96CEB4, #88BEA6);
                    box-shadow: 0 6px 12px rgba(150, 206, 180, 0.3), inset 0 -2px 0 rgba(0, 0, 0, 0.1);
                    transition: transform 0.2s ease, box-shadow 0.3s ease;
                }
                .cta-button.hovered {
                    transform: scale(1.05);
                    box-shadow: 0 10px 20px rgba(150, 206, 180, 0.4), inset 0 -2px 0 rgba(0, 0, 0, 0.1);
                }
                .cta-button:active { transform: scale(0.98); }
                .cta-button-label { position: relative; z-index: 1; }
                .cta-button-sweep {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, #FF6B6B, #FF5A5A);
                    transform: translateX(-100%);
                    transition: transform 0.4s ease;
                }
                .cta-button.hovered .cta-button-sweep { transform: none; }
                .cta-note { margin-top: 1.5rem; color: rgba(255,255,255,0.7); font-size: 0.875rem; }
                .cta-orb {
                    position: absolute;
                    width: 10rem;
                    height: 10rem;
                    border-radius: 50%;
                    filter: blur(40px);
                    animation: cta-pulse 8s ease-in-out infinite alternate;
                }
                .cta-orb-a { top: -2.5rem; right: -2.5rem; background: radial-gradient(rgba(150,206,180,0.3), transparent); }
                .cta-orb-b { bottom: -2.5rem; left: -2.5rem; background: radial-gradient(rgba(255,107,107,0.3), transparent); animation-delay: 2s; }
                @keyframes cta-pulse {
                    from { transform: scale(1); opacity: 0.3; }
                    to { transform: scale(1.2); opacity: 0.5; }
                }
                @media (max-width: 768px) {
                    .cta-glass { padding: 2rem; }
                    .cta-glass h2 { font-size: 1.875rem; }
                }
                "#}
            </style>
        </section>
    }
}

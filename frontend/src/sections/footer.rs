use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config::{CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE_DISPLAY, CONTACT_PHONE_HREF, SITE_NAME};
use crate::content::{FOOTER_LOGO, NAV_ITEMS, SOCIAL_LINKS, TAGLINE};
use crate::state::navigation::scroll_to_anchor;

fn social_glyph(id: &str) -> &'static str {
    match id {
        "facebook" => "f",
        "instagram" => "◎",
        _ => "✦",
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    let links = NAV_ITEMS.iter().map(|item| {
        let id = item.id;
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_anchor(id);
        });
        html! {
            <li><a href={format!("#{}", id)} {onclick}>{item.label}</a></li>
        }
    });

    html! {
        <footer dir="rtl" class="site-footer">
            <div class="footer-grid">
                <div class="footer-col">
                    <div class="footer-brand">
                        <img src={FOOTER_LOGO} alt={SITE_NAME} width="40" height="40" />
                        <h3>{SITE_NAME}</h3>
                    </div>
                    <p>{TAGLINE}</p>
                </div>
                <div class="footer-col">
                    <h3>{"קישורים מהירים"}</h3>
                    <ul>{ for links }</ul>
                </div>
                <div class="footer-col">
                    <h3>{"צור קשר"}</h3>
                    <p>{CONTACT_ADDRESS}</p>
                    <p><a href={CONTACT_PHONE_HREF}>{CONTACT_PHONE_DISPLAY}</a></p>
                    <p><a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a></p>
                </div>
                <div class="footer-col">
                    <h3>{"עקבו אחרינו"}</h3>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <a
                                href={link.href}
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label={link.aria_label}
                            >
                                {social_glyph(link.id)}
                            </a>
                        }) }
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {}. כל הזכויות שמורות.", year, SITE_NAME)}</p>
            </div>
            <style>
                {r#"
                .site-footer { background: #1f2937; color: #d1d5db; padding: 3rem 1rem 1.5rem; }
                .footer-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    text-align: right;
                }
                .footer-col h3 { color: #fff; font-size: 1.125rem; font-weight: 700; margin-bottom: 1rem; }
                .footer-col p { margin-bottom: 0.5rem; line-height: 1.6; }
                .footer-col ul { list-style: none; padding: 0; margin: 0; }
                .footer-col li { margin-bottom: 0.5rem; }
                .footer-col a { color: #d1d5db; text-decoration: none; transition: color 0.2s ease; }
                .footer-col a:hover { color: var(--primary); }
                .footer-brand { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem; }
                .footer-brand img { border-radius: 50%; object-fit: cover; }
                .footer-brand h3 { margin: 0; }
                .footer-social { display: flex; gap: 1rem; }
                .footer-social a {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: rgba(255,255,255,0.1);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .footer-social a:hover { background: var(--primary); color: #fff; }
                .footer-bottom {
                    max-width: 80rem;
                    margin: 2rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid #374151;
                    text-align: center;
                    font-size: 0.875rem;
                }
                @media (max-width: 1024px) { .footer-grid { grid-template-columns: repeat(2, 1fr); } }
                @media (max-width: 640px) { .footer-grid { grid-template-columns: 1fr; } }
                "#}
            </style>
        </footer>
    }
}

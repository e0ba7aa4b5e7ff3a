use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::section_header::{HeaderAlignment, SectionHeader};
use crate::content::{GALLERY_ID, GALLERY_IMAGES, GALLERY_SIZES};
use crate::state::lightbox::{GalleryLoad, ImageOutcome, Lightbox, LightboxAction};

fn set_body_overflow(value: &str) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        if body.style().set_property("overflow", value).is_err() {
            log::warn!("Could not set body overflow to {}", value);
        }
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let lightbox = use_reducer(|| Lightbox::new(GALLERY_IMAGES.len()));
    let load = use_reducer(|| GalleryLoad::new(GALLERY_IMAGES.len()));
    let content_ref = use_node_ref();

    // Page scroll stays locked while an image is shown, and is always
    // released when the section goes away.
    {
        use_effect_with_deps(
            move |overflow| {
                set_body_overflow(overflow);
                || set_body_overflow("auto")
            },
            lightbox.body_overflow(),
        );
    }

    {
        let lightbox = lightbox.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            lightbox.dispatch(LightboxAction::Key(e.key()));
        });
    }

    let on_overlay_down = {
        let lightbox = lightbox.clone();
        let content_ref = content_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let inside_content = match (content_ref.cast::<Node>(), e.target()) {
                (Some(content), Some(target)) => target
                    .dyn_ref::<Node>()
                    .map_or(false, |node| content.contains(Some(node))),
                _ => false,
            };
            lightbox.dispatch(LightboxAction::PointerDown { inside_content });
        })
    };

    let on_close = {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| lightbox.dispatch(LightboxAction::Close))
    };

    let tiles = GALLERY_IMAGES.iter().enumerate().map(|(index, image)| {
        let open = {
            let lightbox = lightbox.clone();
            Callback::from(move |_: MouseEvent| {
                log::debug!("Opening gallery image {}", index);
                lightbox.dispatch(LightboxAction::Open(index));
            })
        };
        let onload = {
            let load = load.clone();
            Callback::from(move |_: Event| load.dispatch(ImageOutcome::Loaded))
        };
        let onerror = {
            let load = load.clone();
            let src = image.src;
            Callback::from(move |_: Event| {
                log::warn!("Gallery image failed to load: {}", src);
                load.dispatch(ImageOutcome::Failed);
            })
        };
        let delay = format!("animation-delay: {:.1}s;", index as f64 * 0.1);
        html! {
            <div key={image.id} class="gallery-tile" style={delay}>
                <div class="gallery-tile-shade"></div>
                <img
                    src={image.src}
                    alt={image.alt}
                    width={image.width.to_string()}
                    height={image.height.to_string()}
                    sizes={GALLERY_SIZES}
                    loading="lazy"
                    {onload}
                    {onerror}
                />
                <div class="gallery-tile-overlay">
                    <button class="gallery-expand" aria-label="הגדל תמונה" onclick={open}>{"⤢"}</button>
                </div>
            </div>
        }
    });

    let selected = lightbox.selected().and_then(|i| GALLERY_IMAGES.get(i));

    html! {
        <section id={GALLERY_ID} dir="rtl" class="gallery">
            <div class="gallery-glow gallery-glow-a"></div>
            <div class="gallery-glow gallery-glow-b"></div>
            <div class="gallery-inner">
                <SectionHeader
                    title="הגלריה שלנו"
                    subtitle="צפו בתמונות המציגות את החוויה הקולינרית במסעדה גמא. האווירה, המנות המיוחדות והרגעים הקסומים שיוצרים חוויה שלא תישכח."
                    alignment={HeaderAlignment::Start}
                    decorated={false}
                />

                if !load.complete() {
                    <div class="gallery-progress" role="progressbar" aria-valuenow={load.percent().to_string()} aria-valuemin="0" aria-valuemax="100">
                        <div class="gallery-progress-bar" style={format!("width: {}%;", load.percent())}></div>
                    </div>
                }

                if load.complete() && load.failed() > 0 {
                    <p class="gallery-note" role="status">{"חלק מהתמונות לא נטענו"}</p>
                }

                <div class={classes!("gallery-grid", (!load.complete()).then_some("loading"))}>
                    { for tiles }
                </div>
            </div>

            if let Some(image) = selected {
                <div class="lightbox" onmousedown={on_overlay_down}>
                    <div class="lightbox-content" ref={content_ref}>
                        <div class="lightbox-frame">
                            <img src={image.src} alt={image.alt} sizes="100vw" />
                        </div>
                        <button class="lightbox-close" aria-label="סגור" onclick={on_close}>{"✕"}</button>
                        <div class="lightbox-caption">
                            <p>{image.alt}</p>
                        </div>
                    </div>
                </div>
            }

            <style>
                {r#"
                .gallery {
                    position: relative;
                    overflow: hidden;
                    padding: 4rem 1rem;
                    background: #f9fafb;
                }
                .gallery-glow { position: absolute; border-radius: 50%; filter: blur(64px); }
                .gallery-glow-a {
                    top: -5rem; right: -5rem; width: 16rem; height: 16rem;
                    background: linear-gradient(135deg, rgba(150,206,180,0.3), rgba(255,107,107,0.2));
                }
                .gallery-glow-b {
                    bottom: -5rem; left: -5rem; width: 20rem; height: 20rem;
                    background: linear-gradient(45deg, rgba(255,107,107,0.2), rgba(150,206,180,0.3));
                }
                .gallery-inner { position: relative; z-index: 1; max-width: 80rem; margin: 0 auto; }
                .gallery-note { color: #6b7280; font-size: 0.875rem; margin-bottom: 1rem; text-align: right; }
                .gallery-progress {
                    width: 100%;
                    height: 0.5rem;
                    background: #e5e7eb;
                    border-radius: 9999px;
                    margin-bottom: 2rem;
                    overflow: hidden;
                }
                .gallery-progress-bar {
                    height: 100%;
                    background: var(--primary);
                    border-radius: 9999px;
                    transition: width 0.5s ease;
                }
                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    transition: opacity 0.5s ease;
                }
                .gallery-grid.loading { opacity: 0.5; }
                .gallery-tile {
                    position: relative;
                    height: 350px;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    box-shadow: var(--neumorphic);
                    animation: gallery-rise 0.5s ease-out both;
                    transition: transform 0.3s ease;
                }
                .gallery-tile:hover { transform: translateY(-5px); }
                @keyframes gallery-rise {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: none; }
                }
                .gallery-tile img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .gallery-tile:hover img { transform: scale(1.1); }
                .gallery-tile-shade {
                    position: absolute;
                    inset: 0;
                    z-index: 1;
                    background: rgba(0,0,0,0);
                    transition: background 0.3s ease;
                }
                .gallery-tile:hover .gallery-tile-shade { background: rgba(0,0,0,0.2); }
                .gallery-tile-overlay {
                    position: absolute;
                    inset: 0;
                    z-index: 2;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .gallery-tile:hover .gallery-tile-overlay,
                .gallery-tile:focus-within .gallery-tile-overlay { opacity: 1; }
                .gallery-expand {
                    padding: 0.75rem 1rem;
                    border-radius: 9999px;
                    border: none;
                    color: #fff;
                    font-size: 1.5rem;
                    background: rgba(0,0,0,0.3);
                    backdrop-filter: blur(12px);
                    cursor: pointer;
                }
                .gallery-expand:hover { background: rgba(0,0,0,0.5); }
                .lightbox {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    background: rgba(0,0,0,0.8);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    animation: lightbox-fade 0.2s ease-out;
                }
                @keyframes lightbox-fade { from { opacity: 0; } to { opacity: 1; } }
                .lightbox-content {
                    position: relative;
                    max-width: 64rem;
                    width: 100%;
                    max-height: 90vh;
                    background: #fff;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    animation: lightbox-zoom 0.25s ease-out;
                }
                @keyframes lightbox-zoom { from { transform: scale(0.9); } to { transform: none; } }
                .lightbox-frame { width: 100%; height: 80vh; }
                .lightbox-frame img { width: 100%; height: 100%; object-fit: contain; }
                .lightbox-close {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    padding: 0.5rem 0.75rem;
                    border-radius: 9999px;
                    border: none;
                    background: rgba(0,0,0,0.5);
                    color: #fff;
                    font-size: 1.25rem;
                    cursor: pointer;
                }
                .lightbox-close:hover { background: rgba(0,0,0,0.7); }
                .lightbox-caption {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    padding: 1rem;
                    text-align: right;
                    background: rgba(0,0,0,0.7);
                    color: #fff;
                    font-size: 1.125rem;
                }
                @media (max-width: 1024px) { .gallery-grid { grid-template-columns: repeat(2, 1fr); } }
                @media (max-width: 640px) {
                    .gallery-grid { grid-template-columns: 1fr; }
                    .gallery-tile { height: 300px; }
                }
                "#}
            </style>
        </section>
    }
}

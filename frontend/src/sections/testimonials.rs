use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::config::CAROUSEL_AUTOPLAY_MS;
use crate::content::{Testimonial, TESTIMONIALS, TESTIMONIALS_ID};
use crate::state::carousel::{star_fill, Carousel, CarouselAction, Direction};

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    /// Cards shown side by side at the current viewport width.
    pub visible_count: usize,
}

fn stars(rating: i32) -> Html {
    html! {
        <div class="stars" aria-label={format!("דירוג {} מתוך 5 כוכבים", rating)}>
            { for star_fill(rating).iter().map(|filled| html! {
                <span class={classes!("star", filled.then_some("filled"))} aria-hidden="true">{"★"}</span>
            }) }
        </div>
    }
}

fn testimonial_card(t: &Testimonial) -> Html {
    html! {
        <div key={t.id} class="testimonial-card">
            <div class="testimonial-head">
                <div class="testimonial-avatar">
                    <img src={t.image} alt={t.name} loading="lazy" />
                </div>
                <div>
                    <h3>{t.name}</h3>
                    { stars(t.rating) }
                </div>
            </div>
            <p class="testimonial-comment">{format!("\"{}\"", t.comment)}</p>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let carousel = {
        let visible_count = props.visible_count;
        use_reducer(move || Carousel::new(TESTIMONIALS.len(), visible_count))
    };

    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |count| {
                carousel.dispatch(CarouselAction::Resize(*count));
                || ()
            },
            props.visible_count,
        );
    }

    // A fresh interval per timer key so any manual move or resume waits a
    // full period before the next automatic step.
    {
        let carousel_for_tick = carousel.clone();
        use_effect_with_deps(
            move |(autoplay, _index, _visible)| {
                let interval = autoplay.then(|| {
                    Interval::new(CAROUSEL_AUTOPLAY_MS, move || {
                        carousel_for_tick.dispatch(CarouselAction::Tick);
                    })
                });
                move || drop(interval)
            },
            carousel.autoplay_key(),
        );
    }

    let dispatch = |action: fn() -> CarouselAction| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(action()))
    };
    let on_prev = dispatch(|| CarouselAction::Prev);
    let on_next = dispatch(|| CarouselAction::Next);
    let pause_on_enter = dispatch(|| CarouselAction::Pause);
    let resume_on_leave = dispatch(|| CarouselAction::Resume);

    let pause_on_focus = {
        let carousel = carousel.clone();
        Callback::from(move |_: FocusEvent| carousel.dispatch(CarouselAction::Pause))
    };
    let resume_on_blur = {
        let carousel = carousel.clone();
        Callback::from(move |_: FocusEvent| carousel.dispatch(CarouselAction::Resume))
    };
    let on_keydown = {
        let carousel = carousel.clone();
        Callback::from(move |e: KeyboardEvent| {
            let key = e.key();
            if key == "ArrowLeft" || key == "ArrowRight" {
                e.prevent_default();
            }
            carousel.dispatch(CarouselAction::Key(key));
        })
    };

    let dots = (0..=carousel.max_index()).map(|index| {
        let carousel_for_dot = carousel.clone();
        let onclick = Callback::from(move |_: MouseEvent| carousel_for_dot.dispatch(CarouselAction::GoTo(index)));
        let current = carousel.index() == index;
        html! {
            <button
                key={index}
                class={classes!("carousel-dot", current.then_some("current"))}
                aria-label={format!("עבור לחוות דעת {}", index + 1)}
                aria-current={if current { "true" } else { "false" }}
                {onclick}
            />
        }
    });

    let slide_class = match carousel.direction() {
        Direction::Forward => "slide-forward",
        Direction::Backward => "slide-backward",
    };

    html! {
        <section id={TESTIMONIALS_ID} dir="rtl" class="testimonials" aria-labelledby="testimonials-heading">
            <div class="testimonials-glow testimonials-glow-a"></div>
            <div class="testimonials-glow testimonials-glow-b"></div>
            <div class="testimonials-inner">
                <SectionHeader
                    id="testimonials-heading"
                    title="מה הלקוחות שלנו אומרים"
                    subtitle="הלקוחות שלנו נהנים מחוויה קולינרית מיוחדת במסעדה גמא. הנה כמה מהחוויות שהם שיתפו איתנו."
                />
                <div
                    class="carousel"
                    tabindex="0"
                    aria-roledescription="carousel"
                    aria-label="חוות דעת של לקוחות"
                    onmouseenter={pause_on_enter}
                    onmouseleave={resume_on_leave}
                    onfocusin={pause_on_focus}
                    onfocusout={resume_on_blur}
                    onkeydown={on_keydown}
                >
                    <div class="carousel-viewport">
                        // Keyed on the window start so the slide animation replays on every move.
                        <div
                            key={carousel.index()}
                            class={classes!("carousel-track", slide_class)}
                            style={format!("grid-template-columns: repeat({}, 1fr);", carousel.visible_count())}
                        >
                            { for TESTIMONIALS[carousel.window()].iter().map(testimonial_card) }
                        </div>
                    </div>

                    <div class="carousel-controls">
                        <button class="carousel-arrow" aria-label="הקודם" onclick={on_prev}>{"›"}</button>
                        <div class="carousel-dots">{ for dots }</div>
                        <button class="carousel-arrow" aria-label="הבא" onclick={on_next}>{"‹"}</button>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .testimonials {
                    position: relative;
                    overflow: hidden;
                    padding: 4rem 1rem;
                    background: linear-gradient(135deg, #f8fdfb, #e6f5ef);
                }
                .testimonials-glow { position: absolute; border-radius: 50%; filter: blur(64px); }
                .testimonials-glow-a { top: 5rem; right: 2.5rem; width: 10rem; height: 10rem; background: rgba(150,206,180,0.2); }
                .testimonials-glow-b { bottom: 5rem; left: 2.5rem; width: 15rem; height: 15rem; background: rgba(255,107,107,0.1); }
                .testimonials-inner { position: relative; z-index: 1; max-width: 80rem; margin: 0 auto; }
                .carousel { position: relative; outline: none; }
                .carousel:focus-visible { box-shadow: 0 0 0 2px var(--primary); border-radius: 1rem; }
                .carousel-viewport { overflow: hidden; }
                .carousel-track { display: grid; gap: 1.5rem; }
                .slide-forward { animation: slide-from-left 0.35s ease-out; }
                .slide-backward { animation: slide-from-right 0.35s ease-out; }
                @keyframes slide-from-left {
                    from { opacity: 0; transform: translateX(-100px); }
                    to { opacity: 1; transform: none; }
                }
                @keyframes slide-from-right {
                    from { opacity: 0; transform: translateX(100px); }
                    to { opacity: 1; transform: none; }
                }
                .testimonial-card {
                    background: rgba(255,255,255,0.8);
                    backdrop-filter: blur(12px);
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    border: 1px solid rgba(255,255,255,0.2);
                    box-shadow: 8px 8px 16px rgba(150, 206, 180, 0.1), -8px -8px 16px rgba(255, 255, 255, 0.7);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .testimonial-card:hover { transform: translateY(-5px); box-shadow: 0 10px 40px rgba(0,0,0,0.1); }
                .testimonial-head { display: flex; align-items: center; margin-bottom: 1rem; }
                .testimonial-avatar {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    overflow: hidden;
                    border: 2px solid var(--primary);
                    margin-left: 1rem;
                    flex-shrink: 0;
                }
                .testimonial-avatar img { width: 100%; height: 100%; object-fit: cover; }
                .testimonial-head h3 { font-weight: 700; font-size: 1.125rem; color: #1f2937; text-align: right; }
                .stars { margin-top: 0.25rem; }
                .star { color: #d1d5db; }
                .star.filled { color: var(--accent); }
                .testimonial-comment { color: #4b5563; text-align: right; line-height: 1.7; }
                .carousel-controls { display: flex; justify-content: center; align-items: center; gap: 1rem; margin-top: 2rem; }
                .carousel-arrow {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    border: none;
                    background: #fff;
                    color: var(--primary);
                    font-size: 1.5rem;
                    cursor: pointer;
                    box-shadow: 4px 4px 10px rgba(150, 206, 180, 0.15), -4px -4px 10px rgba(255, 255, 255, 0.8);
                    transition: background 0.3s ease, color 0.3s ease;
                }
                .carousel-arrow:hover { background: var(--primary); color: #fff; }
                .carousel-dots { display: flex; gap: 0.5rem; }
                .carousel-dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 9999px;
                    border: none;
                    cursor: pointer;
                    background: rgba(150,206,180,0.3);
                    transition: all 0.3s ease;
                }
                .carousel-dot:hover { background: rgba(150,206,180,0.5); }
                .carousel-dot.current { width: 2rem; background: var(--accent); }
                "#}
            </style>
        </section>
    }
}

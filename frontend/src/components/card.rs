use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardVariant {
    Service,
    #[cfg(test)]
    Menu,
    #[cfg(test)]
    Team,
    #[default]
    Default,
}

/// Where the image sits relative to the text, in reading order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ImagePosition {
    #[default]
    Top,
    #[cfg(test)]
    Start,
    #[cfg(test)]
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardStyle {
    pub container: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl CardVariant {
    pub const fn style(self) -> CardStyle {
        match self {
            CardVariant::Service => CardStyle {
                container: "card-service",
                title: "card-title-lg",
                description: "card-desc",
            },
            #[cfg(test)]
            CardVariant::Menu => CardStyle {
                container: "card-menu",
                title: "card-title-lg card-title-bold",
                description: "card-desc card-desc-dark",
            },
            #[cfg(test)]
            CardVariant::Team => CardStyle {
                container: "card-service",
                title: "card-title-md",
                description: "card-desc card-desc-sm",
            },
            CardVariant::Default => CardStyle {
                container: "card-service",
                title: "card-title-md",
                description: "card-desc",
            },
        }
    }
}

impl ImagePosition {
    pub fn layout_class(self) -> &'static str {
        match self {
            ImagePosition::Top => "card-col",
            #[cfg(test)]
            ImagePosition::Start => "card-row",
            #[cfg(test)]
            ImagePosition::End => "card-row-reverse",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct CardImage {
    pub src: AttrValue,
    pub alt: AttrValue,
}

#[derive(Clone, PartialEq)]
pub struct CardAction {
    pub label: AttrValue,
    pub href: Option<AttrValue>,
    pub onclick: Option<Callback<()>>,
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub image: Option<CardImage>,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub actions: Vec<CardAction>,
    #[prop_or_default]
    pub variant: CardVariant,
    #[prop_or_default]
    pub image_position: ImagePosition,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let hovered = use_state(|| false);
    let style = props.variant.style();

    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let image = props.image.as_ref().map(|image| {
        let frame = if props.image_position == ImagePosition::Top {
            "card-image card-image-full"
        } else {
            "card-image card-image-side"
        };
        html! {
            <div class={frame}>
                <img
                    src={image.src.clone()}
                    alt={image.alt.clone()}
                    loading="lazy"
                    sizes="(max-width: 768px) 100vw, (max-width: 1200px) 50vw, 33vw"
                    class={classes!("card-img", (*hovered).then_some("zoomed"))}
                />
            </div>
        }
    });

    let actions = props.actions.iter().enumerate().map(|(i, action)| {
        let class = if i == 0 { "card-action card-action-primary" } else { "card-action card-action-secondary" };
        let onclick = action.onclick.clone().map(|cb| Callback::from(move |_: MouseEvent| cb.emit(())));
        match &action.href {
            Some(href) => html! {
                <a {class} href={href.clone()} {onclick}>{ action.label.clone() }{" ←"}</a>
            },
            None => html! {
                <button type="button" {class} {onclick}>{ action.label.clone() }{" ←"}</button>
            },
        }
    });

    html! {
        <div
            id={props.id.clone()}
            dir="rtl"
            class={classes!("card", style.container, props.image_position.layout_class(), props.class.clone())}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
        >
            { for image }
            <div class="card-body">
                <h3 class={classes!(style.title, (*hovered).then_some("nudged"))}>{ props.title.clone() }</h3>
                <p class={style.description}>{ props.description.clone() }</p>
                if !props.actions.is_empty() {
                    <div class="card-actions">{ for actions }</div>
                }
            </div>
        </div>
    }
}

pub const STYLE: &str = r#"
.card {
    display: flex;
    overflow: hidden;
    border-radius: 0.75rem;
    backdrop-filter: blur(12px);
    border: 1px solid rgba(255,255,255,0.2);
    box-shadow: 0 8px 30px rgba(0,0,0,0.12);
    transition: all 0.3s ease-in-out;
}
.card:hover {
    transform: scale(1.02);
    box-shadow: 0 10px 40px rgba(150, 206, 180, 0.4);
}
.card-service { background: linear-gradient(135deg, rgba(255,255,255,0.8), rgba(255,255,255,0.6)); }
.card-menu { background: linear-gradient(135deg, rgba(255,255,255,0.9), rgba(255,255,255,0.7)); }
.card-col { flex-direction: column; }
.card-row { flex-direction: row; }
.card-row-reverse { flex-direction: row-reverse; }
.card-image { position: relative; overflow: hidden; flex-shrink: 0; }
.card-image-full { width: 100%; height: 200px; }
.card-image-side { width: 120px; height: 120px; margin: 1rem; }
.card-img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    border-radius: 0.5rem;
    transition: transform 0.3s ease;
}
.card-img.zoomed { transform: scale(1.05); }
.card-body { display: flex; flex-direction: column; text-align: right; padding: 1rem; flex: 1; }
.card-body h3 { margin-bottom: 0.5rem; color: #1f2937; transition: transform 0.2s ease; }
.card-body h3.nudged { transform: translateX(-5px); }
.card-title-lg { font-size: 1.25rem; }
.card-title-md { font-size: 1.125rem; }
.card-title-bold { font-weight: 700; }
.card-desc { color: #4b5563; margin-bottom: 1rem; }
.card-desc-dark { color: #374151; }
.card-desc-sm { font-size: 0.875rem; }
.card-actions { margin-top: auto; display: flex; flex-wrap: wrap; gap: 0.5rem; }
.card-action {
    padding: 0.5rem 1rem;
    border-radius: 0.5rem;
    font-size: 0.875rem;
    font-weight: 500;
    color: #fff;
    border: none;
    cursor: pointer;
    text-decoration: none;
    box-shadow: 0 4px 10px rgba(0,0,0,0.1);
}
.card-action-primary { background: var(--accent); }
.card-action-primary:hover { background: #ff5252; }
.card-action-secondary { background: var(--primary); }
.card-action-secondary:hover { background: #7ebda3; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_table_classes_exist_in_stylesheet() {
        for variant in [CardVariant::Service, CardVariant::Menu, CardVariant::Team, CardVariant::Default] {
            let style = variant.style();
            for class in [style.container, style.title, style.description]
                .iter()
                .flat_map(|c| c.split_whitespace())
            {
                assert!(STYLE.contains(&format!(".{class}")), "missing .{class}");
            }
        }
    }

    #[test]
    fn image_position_layouts() {
        assert_eq!(ImagePosition::default().layout_class(), "card-col");
        assert_ne!(ImagePosition::Start.layout_class(), ImagePosition::End.layout_class());
    }
}

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HeaderAlignment {
    Start,
    #[default]
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HeaderSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderSizeStyle {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub decoration: &'static str,
}

impl HeaderSize {
    pub const fn style(self) -> HeaderSizeStyle {
        match self {
            HeaderSize::Small => HeaderSizeStyle {
                title: "sh-title-sm",
                subtitle: "sh-sub-sm",
                decoration: "sh-deco-sm",
            },
            HeaderSize::Medium => HeaderSizeStyle {
                title: "sh-title-md",
                subtitle: "sh-sub-md",
                decoration: "sh-deco-md",
            },
            HeaderSize::Large => HeaderSizeStyle {
                title: "sh-title-lg",
                subtitle: "sh-sub-lg",
                decoration: "sh-deco-lg",
            },
        }
    }
}

impl HeaderAlignment {
    pub fn class(self) -> &'static str {
        match self {
            HeaderAlignment::Start => "sh-start",
            HeaderAlignment::Center => "sh-center",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub alignment: HeaderAlignment,
    #[prop_or_default]
    pub size: HeaderSize,
    #[prop_or(true)]
    pub decorated: bool,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

/// Section title with optional subtitle and utensil ornament.
#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let style = props.size.style();

    html! {
        <div id={props.id.clone()} dir="rtl" class={classes!("section-header", props.class.clone())}>
            <div class={classes!("sh-inner", props.alignment.class())}>
                if props.decorated {
                    <div class="sh-ornament">
                        <span class={classes!("sh-line", style.decoration)}></span>
                        <span class="sh-badge" aria-hidden="true">{"🍴"}</span>
                        <span class={classes!("sh-line", style.decoration)}></span>
                    </div>
                }
                <h2 class={classes!("sh-title", style.title)}>{ props.title.clone() }</h2>
                if let Some(subtitle) = props.subtitle.clone() {
                    <p class={classes!("sh-subtitle", style.subtitle)}>{ subtitle }</p>
                }
                if props.decorated {
                    <span class={classes!("sh-underline", style.decoration)}></span>
                }
            </div>
        </div>
    }
}

pub const STYLE: &str = r#"
.section-header { width: 100%; margin: 2rem 0; animation: sh-rise 0.6s ease-out both; }
@keyframes sh-rise { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: none; } }
.sh-inner { display: flex; flex-direction: column; }
.sh-start { text-align: right; align-items: flex-start; }
.sh-center { text-align: center; align-items: center; }
.sh-ornament { display: flex; align-items: center; justify-content: center; margin-bottom: 1rem; }
.sh-line { height: 2px; background: var(--accent); margin: 0 0.5rem; }
.sh-badge {
    border-radius: 9999px;
    padding: 0.5rem;
    background: rgba(150, 206, 180, 0.2);
    border: 1px solid rgba(150, 206, 180, 0.3);
    transition: transform 0.5s ease;
}
.sh-badge:hover { transform: rotate(180deg); }
.sh-title {
    font-weight: 700;
    color: #1f2937;
    margin-bottom: 0.5rem;
    padding: 0.5rem 1rem;
    border-radius: 0.5rem;
    background: rgba(255,255,255,0.5);
    backdrop-filter: blur(4px);
}
.sh-subtitle { color: #4b5563; max-width: 42rem; padding: 0.5rem 1rem; }
.sh-underline {
    display: block;
    height: 4px;
    border-radius: 9999px;
    margin-top: 1rem;
    background: linear-gradient(to right, transparent, var(--primary), transparent);
}
.sh-title-sm { font-size: 1.5rem; }
.sh-title-md { font-size: 1.875rem; }
.sh-title-lg { font-size: 2.25rem; }
.sh-sub-sm { font-size: 0.875rem; }
.sh-sub-md { font-size: 1rem; }
.sh-sub-lg { font-size: 1.125rem; }
.sh-deco-sm { width: 4rem; }
.sh-deco-md { width: 5rem; }
.sh-deco-lg { width: 6rem; }
@media (min-width: 768px) {
    .sh-title-sm { font-size: 1.875rem; }
    .sh-title-md { font-size: 2.25rem; }
    .sh-title-lg { font-size: 3rem; }
    .sh-deco-lg { width: 8rem; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_table_is_distinct() {
        let small = HeaderSize::Small.style();
        let large = HeaderSize::Large.style();
        assert_ne!(small, large);
        assert_eq!(HeaderSize::default().style().title, "sh-title-md");
        assert_eq!(HeaderAlignment::default().class(), "sh-center");
    }
}

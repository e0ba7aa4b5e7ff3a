use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

impl ButtonSize {
    pub fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub full_width: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = classes!(
        "btn",
        props.variant.class(),
        props.size.class(),
        props.full_width.then_some("btn-full"),
        props.class.clone()
    );

    html! {
        <button
            type={props.button_type.clone()}
            dir="rtl"
            {class}
            disabled={props.disabled || props.loading}
            aria-label={props.aria_label.clone()}
            aria-busy={props.loading.then_some("true")}
            onclick={props.onclick.clone()}
        >
            if props.loading {
                <span class="btn-spinner" aria-hidden="true"></span>
            } else {
                <span>{ for props.children.iter() }</span>
            }
        </button>
    }
}

pub const STYLE: &str = r#"
.btn {
    font-weight: 500;
    border-radius: 0.75rem;
    transition: all 0.3s ease;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    cursor: pointer;
    border: 1px solid transparent;
    backdrop-filter: blur(12px);
}
.btn:disabled {
    opacity: 0.6;
    cursor: not-allowed;
}
.btn:focus-visible {
    outline: 2px solid var(--primary);
    outline-offset: 2px;
}
.btn-primary, .btn-secondary {
    color: #fff;
    box-shadow: 5px 5px 10px rgba(0,0,0,0.1), -5px -5px 10px rgba(255,255,255,0.7);
}
.btn-primary:active, .btn-secondary:active {
    box-shadow: inset 5px 5px 10px rgba(0,0,0,0.1), inset -5px -5px 10px rgba(255,255,255,0.7);
}
.btn-primary {
    background: var(--primary);
    border-color: #a7dfc7;
}
.btn-primary:hover { background: #85b9a0; }
.btn-secondary {
    background: var(--accent);
    border-color: #ff8a8a;
}
.btn-secondary:hover { background: #ff5252; }
.btn-outline {
    background: transparent;
    color: var(--primary);
    border-color: var(--primary);
}
.btn-outline:hover { background: rgba(150, 206, 180, 0.1); }
.btn-sm { font-size: 0.875rem; padding: 0.375rem 0.75rem; }
.btn-md { font-size: 1rem; padding: 0.5rem 1rem; }
.btn-lg { font-size: 1.125rem; padding: 0.75rem 1.5rem; }
.btn-full { width: 100%; }
.btn-spinner {
    width: 1.25rem;
    height: 1.25rem;
    border: 2px solid #fff;
    border-top-color: transparent;
    border-radius: 50%;
    animation: btn-spin 1s linear infinite;
}
@keyframes btn-spin { to { transform: rotate(360deg); } }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_and_size_has_its_own_class() {
        let variants = [ButtonVariant::Primary, ButtonVariant::Secondary, ButtonVariant::Outline];
        let sizes = [ButtonSize::Sm, ButtonSize::Md, ButtonSize::Lg];
        for v in variants {
            assert!(STYLE.contains(&format!(".{}", v.class())));
        }
        for s in sizes {
            assert!(STYLE.contains(&format!(".{}", s.class())));
        }
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
    }
}

//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use std::time::Duration;

use dioxus::prelude::*;

use crate::compat;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card with a header row: title on the left, an optional note on the right.
#[component]
pub fn Panel(title: String, #[props(default)] note: Option<String>, children: Element) -> Element {
    rsx! {
        article {
            class: "panel",
            header {
                class: "panel-header",
                strong { "{title}" }
                if let Some(note) = note {
                    small { class: "muted", "{note}" }
                }
            }
            {children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct AccordionProps {
    title: String,
    children: Element,
}

/// An accordion for showing/hiding content, using the <details> element.
pub fn Accordion(props: AccordionProps) -> Element {
    rsx! {
        details {
            summary { role: "button", class: "outline secondary", "{props.title}" }
            {props.children}
        }
    }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
    /// Green, for buy actions and a live connection.
    Positive,
    /// Red, for sell actions.
    Negative,
}

impl ButtonType {
    fn to_class(self) -> &'static str {
        match self {
            ButtonType::Primary => "",
            ButtonType::Secondary => "secondary",
            ButtonType::Contrast => "contrast",
            ButtonType::Positive => "positive",
            ButtonType::Negative => "negative",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    #[props(default = false)]
    submit: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = if props.outline {
        format!("outline {}", props.button_type.to_class())
    } else {
        props.button_type.to_class().to_string()
    };
    rsx! {
        button {
            class: "{class_str}",
            r#type: if props.submit { "submit" } else { "button" },
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    label: String,
    name: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(optional)]
    placeholder: Option<String>,
    /// Shown under the field, which is then marked invalid.
    #[props(optional)]
    error: Option<String>,
}

/// A labeled, controlled numeric input field.
pub fn Input(props: InputProps) -> Element {
    rsx! {
        label {
            "{props.label}",
            input {
                r#type: "text",
                inputmode: "decimal",
                name: "{props.name}",
                value: "{props.value}",
                placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
                "aria-invalid": if props.error.is_some() { "true" },
                oninput: move |evt| props.on_input.call(evt.value()),
            }
            if let Some(error) = &props.error {
                small { "{error}" }
            }
        }
    }
}

/// Copies `text_to_copy` to the clipboard, confirming for two seconds.
#[component]
pub fn CopyButton(text_to_copy: String) -> Element {
    let mut copied = use_signal(|| false);

    rsx! {
        button {
            class: "outline secondary copy-button",
            r#type: "button",
            title: "Copy to clipboard",
            onclick: move |_| {
                let text = text_to_copy.clone();
                spawn(async move {
                    if compat::clipboard_set(text).await {
                        copied.set(true);
                        compat::sleep(Duration::from_secs(2)).await;
                        copied.set(false);
                    } else {
                        dioxus_logger::tracing::warn!("failed to copy to clipboard");
                    }
                });
            },
            if copied() { "✓" } else { "⧉" }
        }
    }
}

use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    #[prop_or_default]
    pub message: Option<AttrValue>,
}

/// Red alert box; renders nothing without a message.
#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div role="alert" class="alert alert-error mb-4">
                <span class="whitespace-pre-line">{message.clone()}</span>
            </div>
        },
        None => html! {},
    }
}

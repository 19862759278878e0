use yew::prelude::*;

/// State of a text input, together with its change callback.
#[hook]
pub fn use_text_input() -> (UseStateHandle<String>, Callback<String>) {
    let value = use_state_eq(String::new);
    let onchange = use_callback(
        |text: String, value| {
            value.set(text);
        },
        value.clone(),
    );
    (value, onchange)
}

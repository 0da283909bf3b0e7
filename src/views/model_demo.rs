use chrono::{ DateTime, Local };
use dioxus::events::FormData;
use dioxus::prelude::*;
use serde::{ Deserialize, Serialize };
use crate::utils::{ random_uuid, use_theme };

pub const MODEL_OPTIONS: [&str; 3] = ["llama3.2", "mistral", "phi3"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "Model",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: random_uuid(),
            role,
            content: content.into(),
            sent_at: Local::now(),
        }
    }
}

/// Local stand-in for a model call; there is no backend.
pub fn mock_reply(model: &str, prompt: &str) -> ChatMessage {
    let words = prompt.split_whitespace().count();
    ChatMessage::new(
        Role::Assistant,
        format!("[{}] received {} word(s): \"{}\"", model, words, prompt.trim())
    )
}

#[component]
pub fn ModelDemoComponent() -> Element {
    let theme = use_theme();
    let mut model = use_signal(|| MODEL_OPTIONS[0].to_string());
    let mut prompt = use_signal(String::new);
    let mut messages = use_signal(Vec::<ChatMessage>::new);

    let send = move |_| {
        let text = prompt.read().trim().to_string();
        if text.is_empty() {
            return;
        }
        let reply = mock_reply(&model.read(), &text);
        let mut history = messages.write();
        history.push(ChatMessage::new(Role::User, text));
        history.push(reply);
        drop(history);
        prompt.set(String::new());
    };

    let bubble_class = |role: Role| -> &'static str {
        match (role, theme.is_dark()) {
            (Role::User, true) => "p-3 rounded bg-blue-900 text-white",
            (Role::User, false) => "p-3 rounded bg-blue-100 text-gray-900",
            (Role::Assistant, true) => "p-3 rounded bg-gray-800 text-gray-100",
            (Role::Assistant, false) => "p-3 rounded bg-gray-100 text-gray-900",
        }
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold mb-4", "Model Demo" }
            div { class: "mb-4 flex items-center gap-4",
                select {
                    class: "input",
                    value: "{model}",
                    onchange: move |evt: Event<FormData>| model.set(evt.value()),
                    {MODEL_OPTIONS.iter().map(|name| rsx! {
                        option { value: "{name}", "{name}" }
                    })}
                }
                input {
                    class: "input flex-1",
                    placeholder: "Ask something",
                    value: "{prompt}",
                    oninput: move |evt: Event<FormData>| prompt.set(evt.value()),
                }
                button { class: "button", disabled: prompt.read().trim().is_empty(), onclick: send, "Send" }
            }
            div { class: "flex flex-col gap-2",
                {messages.read().iter().map(|message| {
                    let header = format!("{} · {}", message.role.label(), message.sent_at.format("%H:%M:%S"));
                    rsx! {
                        div {
                            key: "{message.id}",
                            class: bubble_class(message.role),
                            div { class: "text-xs opacity-70", "{header}" }
                            div { "{message.content}" }
                        }
                    }
                })}
            }
        }
    }
}

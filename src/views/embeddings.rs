use dioxus::events::FormData;
use dioxus::prelude::*;
use serde::{ Deserialize, Serialize };
use crate::utils::{ random_uuid, use_theme };

pub const EMBEDDING_DIMENSIONS: usize = 16;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingEntry {
    pub id: String,
    pub text: String,
    pub vector: Vec<f32>,
}

impl EmbeddingEntry {
    pub fn new(text: String) -> Self {
        let vector = embed(&text);
        Self {
            id: random_uuid(),
            text,
            vector,
        }
    }
}

/// Bag-of-bytes embedding, L2-normalized. Blank text maps to the zero vector.
pub fn embed(text: &str) -> Vec<f32> {
    let mut vector = vec![0.0_f32; EMBEDDING_DIMENSIONS];
    for byte in text.trim().to_lowercase().bytes() {
        vector[(byte as usize) % EMBEDDING_DIMENSIONS] += 1.0;
    }

    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        vector.iter_mut().for_each(|v| *v /= norm);
    }
    vector
}

/// Zero when either side is the zero vector.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|v| v * v).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

#[component]
pub fn EmbeddingsComponent() -> Element {
    let theme = use_theme();
    let mut draft = use_signal(String::new);
    let mut entries = use_signal(Vec::<EmbeddingEntry>::new);
    let mut export = use_signal(|| None::<String>);

    let add_entry = move |_| {
        let text = draft.read().trim().to_string();
        if text.is_empty() {
            return;
        }
        let entry = EmbeddingEntry::new(text);
        log::debug!("Embedded entry {}", entry.id);
        entries.write().push(entry);
        draft.set(String::new());
    };

    let export_json = move |_| {
        match serde_json::to_string_pretty(&*entries.read()) {
            Ok(json) => export.set(Some(json)),
            Err(e) => log::error!("Failed to export embeddings: {}", e),
        }
    };

    let card_class = if theme.is_dark() {
        "p-3 rounded bg-gray-800 text-gray-100"
    } else {
        "p-3 rounded bg-gray-100 text-gray-900"
    };

    let rows = entries.read().iter().enumerate().map(|(idx, entry)| {
        let similarity = idx
            .checked_sub(1)
            .and_then(|prev| entries.read().get(prev).map(|p| cosine_similarity(&p.vector, &entry.vector)));
        let preview = entry.vector
            .iter()
            .take(4)
            .map(|v| format!("{:.3}", v))
            .collect::<Vec<_>>()
            .join(", ");
        rsx!(
            tr {
                key: "{entry.id}",
                td { class: "px-3 py-2 font-mono text-xs", "{entry.id}" }
                td { class: "px-3 py-2", "{entry.text}" }
                td { class: "px-3 py-2 font-mono text-xs", "[{preview}, …]" }
                td { class: "px-3 py-2",
                    {similarity.map(|s| format!("{:.3}", s)).unwrap_or_else(|| "-".to_string())}
                }
            }
        )
    }).collect::<Vec<_>>();

    rsx! {
        div {
            h1 { class: "text-2xl font-bold mb-4", "Embeddings" }
            div { class: "mb-4 flex items-center gap-4",
                input {
                    class: "input flex-1",
                    placeholder: "Text to embed",
                    value: "{draft}",
                    oninput: move |evt: Event<FormData>| draft.set(evt.value()),
                }
                button { class: "button", disabled: draft.read().trim().is_empty(), onclick: add_entry, "Embed" }
                button { class: "button", disabled: entries.read().is_empty(), onclick: export_json, "Export JSON" }
            }
            table { class: "min-w-full border mb-4",
                thead {
                    tr {
                        th { "Id" }
                        th { "Text" }
                        th { "Vector" }
                        th { "Similarity to previous" }
                    }
                }
                tbody { {rows.into_iter()} }
            }
            if let Some(json) = export.read().as_ref() {
                pre { class: card_class, "{json}" }
            }
        }
    }
}

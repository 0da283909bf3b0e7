mod embeddings;
mod layout;
mod model_demo;
mod not_found;

pub use embeddings::{ cosine_similarity, embed, EmbeddingEntry, EmbeddingsComponent, EMBEDDING_DIMENSIONS };
pub use layout::Layout;
pub use model_demo::{ mock_reply, ChatMessage, ModelDemoComponent, Role, MODEL_OPTIONS };
pub use not_found::PageNotFound;

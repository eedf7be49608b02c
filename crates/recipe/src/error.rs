use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("recipe not found: {0}")]
    NotFound(String),

    #[error("malformed recipe data ({context}): {source}")]
    Malformed {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("recipe entry {name:?} has an unsupported shape")]
    UnsupportedShape { name: String },
}

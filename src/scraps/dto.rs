use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapIdea {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ScrapsIdeasRequest {
    pub ingredient: String,
}

#[derive(Debug, Serialize)]
pub struct ScrapsIdeasResponse {
    pub ingredient: String, // echoed verbatim
    pub ideas: Vec<ScrapIdea>,
}

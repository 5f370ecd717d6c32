use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{article::ArticleSummaryDto, suggestion::SuggestionDto};

/// Front-page payload: the newest articles and suggestions.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HomeDto {
    pub latest_articles: Vec<ArticleSummaryDto>,
    pub latest_suggestions: Vec<SuggestionDto>,
}

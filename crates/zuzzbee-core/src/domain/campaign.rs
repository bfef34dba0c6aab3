//! Campaign Entity
//!
//! Fundraiser shown on the campaigns page. Display only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::config::CAMPAIGN_PLACEHOLDER_IMAGE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub title: String,
    pub story: String,
    pub goal_amount: f64,
    pub raised_amount: f64,
    pub currency_symbol: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub creator_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Campaign {
    /// Funded percentage; 0 when there is no goal
    pub fn progress_percent(&self) -> f64 {
        if self.goal_amount > 0.0 {
            self.raised_amount / self.goal_amount * 100.0
        } else {
            0.0
        }
    }

    /// First `max_chars` characters of the story, with "..." when cut
    pub fn excerpt(&self, max_chars: usize) -> String {
        if self.story.chars().count() <= max_chars {
            return self.story.clone();
        }
        let cut: String = self.story.chars().take(max_chars).collect();
        format!("{}...", cut)
    }

    pub fn image(&self) -> &str {
        self.image_url.as_deref().unwrap_or(CAMPAIGN_PLACEHOLDER_IMAGE)
    }
}

impl Entity for Campaign {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_campaign(goal: f64, raised: f64, story: &str) -> Campaign {
        Campaign {
            id: "c1".to_string(),
            title: "Clean the river".to_string(),
            story: story.to_string(),
            goal_amount: goal,
            raised_amount: raised,
            currency_symbol: "$".to_string(),
            category: "Environment".to_string(),
            image_url: None,
            creator_name: "Ravi".to_string(),
            creator_avatar: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(make_campaign(200.0, 50.0, "").progress_percent(), 25.0);
        assert_eq!(make_campaign(0.0, 50.0, "").progress_percent(), 0.0);
    }

    #[test]
    fn test_excerpt_truncates_on_chars() {
        let campaign = make_campaign(1.0, 0.0, "héllo world");
        assert_eq!(campaign.excerpt(5), "héllo...");
        assert_eq!(campaign.excerpt(100), "héllo world");
    }
}

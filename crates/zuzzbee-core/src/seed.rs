//! Demo Content
//!
//! Initial stories, photos and campaigns shown before the user adds anything.

use chrono::{Duration, Utc};

use crate::domain::{Campaign, Comment, Photo, Story, StoryItem, User};

fn placeholder(size: &str, text: &str) -> String {
    format!("https://placehold.co/{}.png?text={}", size, text)
}

fn demo_user(id: &str, username: &str, display_name: &str) -> User {
    let mut user = User::new(id, username);
    user.display_name = Some(display_name.to_string());
    user.profile_image_url = Some(placeholder("100x100", &display_name[..1]));
    user.followers_count = 1_200;
    user.following_count = 180;
    user
}

pub fn users() -> Vec<User> {
    vec![
        demo_user("user_seed_1", "naturelover", "Maya Green"),
        demo_user("user_seed_2", "citysnaps", "Leo Park"),
        demo_user("user_seed_3", "foodie_fi", "Fiona Hart"),
    ]
}

pub fn stories() -> Vec<Story> {
    let now = Utc::now();
    users()
        .into_iter()
        .enumerate()
        .map(|(i, user)| {
            let items = (0..=i + 1)
                .map(|n| StoryItem::image(placeholder("1080x1920", &format!("{}+{}", user.username, n + 1))))
                .collect();
            let mut story = Story::new(user, items, None);
            story.timestamp = now - Duration::hours(i as i64 + 1);
            story.is_seen = i == 2;
            story
        })
        .collect()
}

pub fn photos() -> Vec<Photo> {
    let users = users();
    let captions = [
        ("Morning fog over the ridge #hiking #nature 🌄", "Nature", ""),
        ("Neon nights downtown #city #street", "Street", "saturate-150 contrast-125"),
        ("Homemade ramen 🍜 #food", "Food", "sepia"),
    ];
    captions
        .iter()
        .zip(users.iter().cycle())
        .enumerate()
        .map(|(i, ((caption, category, filter), user))| {
            let mut photo = Photo::new(
                user.clone(),
                placeholder("600x600", category),
                *caption,
                *category,
                *filter,
            );
            photo.likes_count = 120 + 37 * i as u32;
            photo.created_at = Utc::now() - Duration::days(i as i64);
            if i == 0 {
                photo.comments.push(Comment {
                    id: format!("comment_seed_{}", i),
                    photo_id: photo.id.clone(),
                    user_id: users[1].id.clone(),
                    user: Some(users[1].clone()),
                    text: "Stunning light!".to_string(),
                    created_at: Utc::now(),
                });
                photo.comments_count = 4;
            }
            photo
        })
        .collect()
}

pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: "campaign_seed_1".to_string(),
            title: "Community garden for Eastside".to_string(),
            story: "We are turning an empty lot into a shared garden with raised beds, a tool library and weekend workshops for kids.".to_string(),
            goal_amount: 5_000.0,
            raised_amount: 3_250.0,
            currency_symbol: "$".to_string(),
            category: "Community".to_string(),
            image_url: None,
            creator_name: "Maya Green".to_string(),
            creator_avatar: None,
            created_at: Utc::now() - Duration::days(12),
        },
        Campaign {
            id: "campaign_seed_2".to_string(),
            title: "Cameras for young photographers".to_string(),
            story: "Second-hand cameras and a summer course for teenagers who want to document their neighbourhood.".to_string(),
            goal_amount: 80_000.0,
            raised_amount: 12_500.0,
            currency_symbol: "₹".to_string(),
            category: "Education".to_string(),
            image_url: None,
            creator_name: "Leo Park".to_string(),
            creator_avatar: None,
            created_at: Utc::now() - Duration::days(3),
        },
    ]
}

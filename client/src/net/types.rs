//! Wire DTOs returned by the posts/admin backend.
//!
//! DESIGN
//! ======
//! The backend is loose about optional fields, duplicates the id (`_id` and
//! `id`) and the image (`image` and `imgSrc`), and does not always populate
//! `category`. Decoding happens per post through [`RawPost`] with lenient
//! field deserializers, so one odd post is skipped or defaulted instead of
//! failing the whole list. Only a post with no usable id is dropped.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Image shown when a post carries none.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400";

/// A post as displayed by the views.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Post {
    /// Backend identifier, used for `/post/:id` routes.
    pub id: String,
    pub title: Option<String>,
    pub author: Option<String>,
    /// Publication date shown on the lifestyle grid.
    pub date: Option<String>,
    /// Creation timestamp shown on the must-read list.
    pub created_at: Option<String>,
    pub image: Option<String>,
    pub img_src: Option<String>,
    /// Populated category reference; `None` when missing or unpopulated.
    pub category: Option<CategoryRef>,
    pub views: u64,
}

/// Embedded category reference on a post.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CategoryRef {
    pub name: String,
}

/// One element of the `posts` array exactly as the backend sends it.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPost {
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    pub mongo_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub img_src: Option<String>,
    #[serde(default, deserialize_with = "deserialize_category")]
    pub category: Option<CategoryRef>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub views: u64,
}

impl RawPost {
    /// Resolve the id (`_id` first, then `id`). `None` if neither is usable.
    pub fn into_post(self) -> Option<Post> {
        let id = non_empty_owned(self.mongo_id).or_else(|| non_empty_owned(self.id))?;
        Some(Post {
            id,
            title: self.title,
            author: self.author,
            date: self.date,
            created_at: self.created_at,
            image: self.image,
            img_src: self.img_src,
            category: self.category,
            views: self.views,
        })
    }
}

/// Decode one `posts` element. Non-objects and id-less posts yield `None`.
pub fn decode_post(value: Value) -> Option<Post> {
    if !value.is_object() {
        return None;
    }
    match serde_json::from_value::<RawPost>(value) {
        Ok(raw) => raw.into_post(),
        Err(e) => {
            leptos::logging::warn!("skipping undecodable post: {e}");
            None
        }
    }
}

/// Envelope for `GET /api/posts`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PostsEnvelope {
    #[serde(default)]
    pub posts: Option<Vec<Value>>,
}

impl PostsEnvelope {
    /// Decoded posts, skipping entries that cannot be shown.
    pub fn into_posts(self) -> Vec<Post> {
        self.posts
            .unwrap_or_default()
            .into_iter()
            .filter_map(decode_post)
            .collect()
    }
}

/// Body of `GET /api/check-admin`. A missing flag reads as `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatus {
    #[serde(default)]
    pub is_admin: bool,
}

impl Post {
    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or("Untitled")
    }

    pub fn display_author(&self) -> &str {
        non_empty(self.author.as_deref()).unwrap_or("Anonymous")
    }

    /// `image`, then `imgSrc`, then [`PLACEHOLDER_IMAGE`].
    pub fn display_image(&self) -> &str {
        non_empty(self.image.as_deref())
            .or_else(|| non_empty(self.img_src.as_deref()))
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Category name, if the post has one.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    pub fn category_label(&self) -> &str {
        non_empty(self.category_name()).unwrap_or("Uncategorized")
    }

    /// Route for the post detail page.
    pub fn detail_path(&self) -> String {
        format!("/post/{}", self.id)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn non_empty_owned(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Strings pass through, numbers are stringified, anything else is `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Non-negative integers pass through; floats truncate; numeric strings
/// parse; null, negatives and anything else read as 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// Accept `{ "name": "..." }`; anything else (null, bare id string, object
/// without a string name) becomes `None`.
fn deserialize_category<'de, D>(deserializer: D) -> Result<Option<CategoryRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let name = value
        .as_object()
        .and_then(|obj| obj.get("name"))
        .and_then(Value::as_str);
    Ok(name.map(|name| CategoryRef { name: name.to_owned() }))
}

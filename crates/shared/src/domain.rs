use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! key_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

key_newtype!(MenuId);
key_newtype!(DishId);

/// A menu category. `id` is assigned client-side when the wire record is
/// converted; `menu_id` is the server key used to request the category's
/// dishes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub menu_id: MenuId,
    pub image_url: String,
    pub name: String,
    pub sub_menu_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub image_url: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub weight: String,
    pub spicy: Option<String>,
}

impl Dish {
    /// The server marks spicy dishes with the literal flag value "Y".
    pub fn is_spicy(&self) -> bool {
        self.spicy.as_deref() == Some("Y")
    }
}

/// Image paths arrive as absolute paths relative to the API origin.
pub fn resolve_image_url(base_origin: &str, image_path: &str) -> String {
    let base = base_origin.trim_end_matches('/');
    if image_path.starts_with('/') {
        format!("{base}{image_path}")
    } else {
        format!("{base}/{image_path}")
    }
}

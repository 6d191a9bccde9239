use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Category, Dish, DishId, MenuId};

/// Outer JSON object both endpoints wrap their payload in. `status: false`
/// is an application-level failure even when the HTTP exchange succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuEnvelope<T> {
    pub status: bool,
    #[serde(rename = "menuList")]
    pub menu_list: Vec<T>,
}

pub type CategoryResponse = MenuEnvelope<CategoryRecord>;
pub type DishResponse = MenuEnvelope<DishRecord>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(rename = "menuID")]
    pub menu_id: String,
    pub image: String,
    pub name: String,
    #[serde(rename = "subMenuCount")]
    pub sub_menu_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishRecord {
    pub id: String,
    pub image: String,
    pub name: String,
    pub content: String,
    pub price: String,
    pub weight: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spicy: Option<String>,
}

/// Body of the sub-menu request, a single urlencoded field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishListRequest {
    #[serde(rename = "menuID")]
    pub menu_id: String,
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            menu_id: MenuId(record.menu_id),
            image_url: record.image,
            name: record.name,
            sub_menu_count: record.sub_menu_count,
        }
    }
}

impl From<DishRecord> for Dish {
    fn from(record: DishRecord) -> Self {
        Self {
            id: DishId(record.id),
            image_url: record.image,
            name: record.name,
            description: record.content,
            price: record.price,
            weight: record.weight,
            spicy: record.spicy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_category_envelope_with_wire_field_names() {
        let raw = r#"{"status":true,"menuList":[{"menuID":"1","image":"/a.png","name":"Soups","subMenuCount":3}]}"#;
        let envelope: CategoryResponse = serde_json::from_str(raw).expect("decode");
        assert!(envelope.status);
        assert_eq!(envelope.menu_list.len(), 1);
        let record = &envelope.menu_list[0];
        assert_eq!(record.menu_id, "1");
        assert_eq!(record.image, "/a.png");
        assert_eq!(record.name, "Soups");
        assert_eq!(record.sub_menu_count, 3);
    }

    #[test]
    fn dish_envelope_round_trip_preserves_order_and_fields() {
        let raw = r#"{"status":true,"menuList":[
            {"id":"d1","image":"/b.png","name":"Tomato Soup","content":"tomato, cream","price":"250 ₵","weight":"300g","spicy":"Y"},
            {"id":"d2","image":"/c.png","name":"Okroshka","content":"kvass, cucumber","price":"180 ₵","weight":"350g","spicy":null}
        ]}"#;
        let envelope: DishResponse = serde_json::from_str(raw).expect("decode");
        let encoded = serde_json::to_string(&envelope).expect("encode");
        let again: DishResponse = serde_json::from_str(&encoded).expect("re-decode");

        assert_eq!(envelope.status, again.status);
        assert_eq!(envelope.menu_list, again.menu_list);
        assert_eq!(again.menu_list[0].id, "d1");
        assert_eq!(again.menu_list[1].id, "d2");
        assert_eq!(again.menu_list[0].spicy.as_deref(), Some("Y"));
        assert_eq!(again.menu_list[1].spicy, None);
    }

    #[test]
    fn category_conversion_assigns_fresh_client_identity() {
        let record = CategoryRecord {
            menu_id: "1".into(),
            image: "/a.png".into(),
            name: "Soups".into(),
            sub_menu_count: 3,
        };

        let first = Category::from(record.clone());
        let second = Category::from(record);
        assert_eq!(first.menu_id, second.menu_id);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn dish_conversion_maps_content_to_description() {
        let record = DishRecord {
            id: "d1".into(),
            image: "/b.png".into(),
            name: "Tomato Soup".into(),
            content: "tomato, cream".into(),
            price: "250 ₵".into(),
            weight: "300g".into(),
            spicy: Some("Y".into()),
        };

        let dish = Dish::from(record);
        assert_eq!(dish.description, "tomato, cream");
        assert!(dish.is_spicy());
    }

    #[test]
    fn dish_request_serializes_single_urlencoded_field() {
        let request = DishListRequest {
            menu_id: "7".into(),
        };
        let json = serde_json::to_value(&request).expect("encode");
        assert_eq!(json, serde_json::json!({ "menuID": "7" }));
    }
}

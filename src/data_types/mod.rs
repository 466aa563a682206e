pub mod catalog_types;
pub mod join_types;
pub mod menu_types;

use serde::{Deserialize, Serialize};

use catalog_types::Product;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Cook,
    Delivery,
    Client,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Principal {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
    pub coins: u64,
}

/// Which way a favorites toggle went, so a failed background sync
/// can be undone.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub product: Product,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PageMeta {
    pub total: Option<u64>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// List endpoints answer either with a bare JSON array or with a
/// `{data, meta}` page envelope.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Paged { data: Vec<T>, meta: Option<PageMeta> },
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) => items,
            ListEnvelope::Paged { data, .. } => data,
        }
    }
}

/// Record endpoints answer either with the bare object or with `{data}`.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum RecordEnvelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> RecordEnvelope<T> {
    pub fn into_record(self) -> T {
        match self {
            RecordEnvelope::Wrapped { data } => data,
            RecordEnvelope::Bare(record) => record,
        }
    }
}

#[cfg(test)]
mod envelope_tests {
    use super::*;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Thing {
        id: u64,
    }

    #[test]
    fn list_envelope_accepts_bare_array() {
        let parsed: ListEnvelope<Thing> = serde_json::from_str(r#"[{"id":1},{"id":2}]"#).unwrap();
        let items = parsed.into_items();
        assert_eq!(items, vec![Thing { id: 1 }, Thing { id: 2 }]);
    }

    #[test]
    fn list_envelope_accepts_page_envelope() {
        let parsed: ListEnvelope<Thing> =
            serde_json::from_str(r#"{"data":[{"id":7}],"meta":{"total":1,"page":1,"per_page":20}}"#)
                .unwrap();
        assert_eq!(parsed.into_items(), vec![Thing { id: 7 }]);
    }

    #[test]
    fn record_envelope_accepts_both_shapes() {
        let bare: RecordEnvelope<Thing> = serde_json::from_str(r#"{"id":3}"#).unwrap();
        assert_eq!(bare.into_record(), Thing { id: 3 });

        let wrapped: RecordEnvelope<Thing> = serde_json::from_str(r#"{"data":{"id":4}}"#).unwrap();
        assert_eq!(wrapped.into_record(), Thing { id: 4 });
    }
}

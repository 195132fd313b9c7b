use serde::{Deserialize, Serialize};

/// Paging, ordering and filter parameters accepted by the list endpoints.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct QueryFilterDto {
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub desc: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub order_by: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub query: String,
    #[serde(default)]
    pub deleted: bool,
}

impl QueryFilterDto {
    /// Encodes the filter as a URL query string, without the leading `?`.
    ///
    /// Empty `order_by` and `query` values are left out, matching the JSON form.
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        serializer
            .append_pair("offset", &self.offset.to_string())
            .append_pair("limit", &self.limit.to_string())
            .append_pair("desc", &self.desc.to_string());
        if !self.order_by.is_empty() {
            serializer.append_pair("order_by", &self.order_by);
        }
        if !self.query.is_empty() {
            serializer.append_pair("query", &self.query);
        }
        serializer.append_pair("deleted", &self.deleted.to_string());
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests query string encoding of a full filter.
    ///
    /// Expected: every field present, values URL-encoded
    #[test]
    fn encodes_all_fields() {
        let filter = QueryFilterDto {
            offset: 50,
            limit: 25,
            desc: true,
            order_by: "ban_id".to_string(),
            query: "cheat & grief".to_string(),
            deleted: false,
        };

        assert_eq!(
            filter.to_query_string(),
            "offset=50&limit=25&desc=true&order_by=ban_id&query=cheat+%26+grief&deleted=false"
        );
    }

    /// Tests that empty text fields are omitted from the query string.
    ///
    /// Expected: no `order_by` or `query` pairs
    #[test]
    fn omits_empty_text_fields() {
        let filter = QueryFilterDto {
            limit: 10,
            ..Default::default()
        };

        assert_eq!(
            filter.to_query_string(),
            "offset=0&limit=10&desc=false&deleted=false"
        );
    }

    /// Tests that the JSON body form also omits empty text fields.
    ///
    /// Expected: JSON object without `order_by` and `query` keys
    #[test]
    fn json_omits_empty_text_fields() {
        let filter = QueryFilterDto {
            deleted: true,
            ..Default::default()
        };

        let json = serde_json::to_value(&filter).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "offset": 0, "limit": 0, "desc": false, "deleted": true })
        );
    }
}

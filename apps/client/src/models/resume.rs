use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key the import endpoint reads the resume document from.
pub const DATA_FIELD: &str = "data";

/// Server record for an imported resume. `id` keys print and delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResumeResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub visibility: String,
    pub locked: bool,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintResumeResponse {
    pub url: String,
}

/// Builds the import request body from a caller's resume.
///
/// An object that already carries a `data` key is sent as-is. Anything else
/// is nested under a synthesized `data` key. The caller's value is only read.
pub fn import_body<T: Serialize + ?Sized>(resume: &T) -> Result<Value, serde_json::Error> {
    Ok(wrap_data(serde_json::to_value(resume)?))
}

pub fn wrap_data(resume: Value) -> Value {
    match resume {
        Value::Object(ref fields) if fields.contains_key(DATA_FIELD) => resume,
        other => {
            let mut body = Map::new();
            body.insert(DATA_FIELD.to_string(), other);
            Value::Object(body)
        }
    }
}

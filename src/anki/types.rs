use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    NoteId,
    ReigoError,
};

pub const ANKI_CONNECT_VERSION: u32 = 6;

#[derive(Debug, Serialize)]
pub struct ApiRequest<'a> {
    pub action: &'a str,
    pub version: u32,
    pub params: serde_json::Value,
}

impl<'a> ApiRequest<'a> {
    pub fn new(action: &'a str, params: serde_json::Value) -> Self {
        Self { action, version: ANKI_CONNECT_VERSION, params }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// A non-null `error` is always fatal; a null `result` is left to the caller.
    pub fn into_result(self, action: &str) -> Result<Option<T>, ReigoError> {
        match self.error {
            Some(message) => Err(ReigoError::Api { action: action.to_string(), message }),
            None => Ok(self.result),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Field {
    pub value: String,
    #[serde(default)]
    pub order: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub note_id: NoteId,
    pub fields: HashMap<String, Field>,
}

impl Note {
    pub fn field(&self, name: &str) -> Result<&str, ReigoError> {
        self.fields.get(name).map(|f| f.value.as_str()).ok_or_else(|| {
            ReigoError::MissingField { note_id: self.note_id, field: name.to_string() }
        })
    }
}

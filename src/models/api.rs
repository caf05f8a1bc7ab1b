use serde::{Deserialize, Serialize};

/// Response to creating a document with a server-assigned id.
#[derive(Debug, Deserialize)]
pub struct Created {
    pub id: String,
}

/// A stored document: server-assigned id plus the payload fields inline.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Document<T> {
    pub id: String,
    #[serde(flatten)]
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct DocumentList<T> {
    pub documents: Vec<Document<T>>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}

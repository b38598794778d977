use serde::{Deserialize, Serialize};

/// JSON body of a `POST /copy` request, shared by server and client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyRequest {
    pub text: String,
}

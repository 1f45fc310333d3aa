//! JSON envelope for successful resource responses.
//!
//! Resource handlers wrap their payload as `{ "data": ... }`. The login and
//! refresh endpoints return their token bundle unwrapped.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

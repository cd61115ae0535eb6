use crate::UserDto;
use serde::Serialize;

/// Successful registration response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub token: String,
    pub user: UserDto,
}

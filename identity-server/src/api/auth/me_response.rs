use crate::UserDto;
use serde::Serialize;

/// Who-am-I response. Also consumed by the posts service's delegated
/// verifier, which reads `user.id` and `user.email`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserDto,
}

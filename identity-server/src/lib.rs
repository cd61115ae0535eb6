pub mod api;
pub mod health;
pub mod routes;
pub mod state;

pub use api::{
    auth::{
        auth::{login, me, register},
        login_response::LoginResponse,
        me_response::MeResponse,
        register_response::RegisterResponse,
        user_dto::UserDto,
    },
    extractors::current_user::CurrentUser,
};

pub use crate::routes::build_router;
pub use crate::state::AppState;

use test_utils::builder::TestBuilder;
use test_utils::factory::create_user;

use crate::server::error::AppError;
use crate::server::model::user::{GetUsersParams, SetUserRoleParams, UserRole};
use crate::server::service::user::UserService;

mod get_all_users;

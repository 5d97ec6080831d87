use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::token::hash_token;
use test_utils::factory::{create_token, create_token_with_abilities, create_user};

use crate::server::data::token::TokenRepository;
use crate::server::model::auth::Ability;

mod find_principal_by_hash;
mod touch_last_used;

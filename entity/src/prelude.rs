pub use super::access_token::Entity as AccessToken;
pub use super::center::Entity as Center;
pub use super::cycle::Entity as Cycle;
pub use super::enrollment::Entity as Enrollment;
pub use super::player::Entity as Player;
pub use super::study::Entity as Study;
pub use super::team::Entity as Team;
pub use super::token_ability::Entity as TokenAbility;
pub use super::user::Entity as User;
pub use super::user_permission::Entity as UserPermission;

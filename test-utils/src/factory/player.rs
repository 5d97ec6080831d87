//! Player factory for creating test player entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// Players require a team; the study is optional. Use
/// `helpers::create_player_with_dependencies` when the test does not care
/// about the specific team.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player::PlayerFactory;
///
/// let captain = PlayerFactory::new(&db, team.id)
///     .first_name("Ana")
///     .kind("captain")
///     .study_id(study.id)
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    first_surname: String,
    second_surname: Option<String>,
    kind: String,
    national_id: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    team_id: i32,
    study_id: Option<i32>,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Player {id}"` where id is auto-incremented
    /// - first_surname: `"Surname {id}"`
    /// - second_surname / national_id / email / phone: `None`
    /// - kind: `"player"`
    /// - study_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `team_id` - Id of the team the player belongs to
    ///
    /// # Returns
    /// - `PlayerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, team_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("Player {}", id),
            first_surname: format!("Surname {}", id),
            second_surname: None,
            kind: "player".to_string(),
            national_id: None,
            email: None,
            phone: None,
            team_id,
            study_id: None,
        }
    }

    /// Sets the first name.
    ///
    /// # Arguments
    /// - `first_name` - Given name for the player
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the first surname.
    ///
    /// # Arguments
    /// - `first_surname` - First surname for the player
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn first_surname(mut self, first_surname: impl Into<String>) -> Self {
        self.first_surname = first_surname.into();
        self
    }

    /// Sets the second surname.
    ///
    /// # Arguments
    /// - `second_surname` - Second surname for the player
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn second_surname(mut self, second_surname: impl Into<String>) -> Self {
        self.second_surname = Some(second_surname.into());
        self
    }

    /// Sets the player kind.
    ///
    /// # Arguments
    /// - `kind` - Kind string (`"player"`, `"captain"` or `"coach"`)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the national id document.
    ///
    /// # Arguments
    /// - `national_id` - Identity document string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn national_id(mut self, national_id: impl Into<String>) -> Self {
        self.national_id = Some(national_id.into());
        self
    }

    /// Sets the contact email.
    ///
    /// # Arguments
    /// - `email` - Contact email for the player
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the contact phone.
    ///
    /// # Arguments
    /// - `phone` - Contact phone for the player
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the study the player is enrolled in.
    ///
    /// # Arguments
    /// - `study_id` - Id of the study record
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn study_id(mut self, study_id: i32) -> Self {
        self.study_id = Some(study_id);
        self
    }

    /// Builds and inserts the player entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        let now = Utc::now();
        entity::player::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            first_surname: ActiveValue::Set(self.first_surname),
            second_surname: ActiveValue::Set(self.second_surname),
            kind: ActiveValue::Set(self.kind),
            national_id: ActiveValue::Set(self.national_id),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            team_id: ActiveValue::Set(self.team_id),
            study_id: ActiveValue::Set(self.study_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values.
///
/// Shorthand for `PlayerFactory::new(db, team_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `team_id` - Id of the team the player belongs to
///
/// # Returns
/// - `Ok(entity::player::Model)` - Created player entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_player(
    db: &DatabaseConnection,
    team_id: i32,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db, team_id).build().await
}

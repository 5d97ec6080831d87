use crate::server::error::AuthError;
use crate::server::model::user::{User, UserRole};

/// Every ability a token may carry. The wildcard grants all of them.
pub const WILDCARD_ABILITY: &str = "*";

/// Permission required before a user may add players to a roster. Revoked
/// automatically once the roster reaches the cap and granted back when a
/// player is removed.
pub const CREATE_PLAYER_PERMISSION: &str = "create_player";

/// An action guarded by a token ability.
///
/// Mutations on an existing resource are scoped to that resource's id, so a
/// token granted `team:update:3` may update team 3 and nothing else. Player
/// abilities are scoped to the owning team rather than the player itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ability {
    CreateTeam,
    UpdateTeam(i32),
    DeleteTeam(i32),
    CreatePlayer(i32),
    UpdatePlayer(i32),
    DeletePlayer(i32),
}

impl Ability {
    /// The ability string looked up on the access token.
    pub fn scope(&self) -> String {
        match self {
            Ability::CreateTeam => "team:create".to_string(),
            Ability::UpdateTeam(team_id) => format!("team:update:{team_id}"),
            Ability::DeleteTeam(team_id) => format!("team:delete:{team_id}"),
            Ability::CreatePlayer(team_id) => format!("player:create:{team_id}"),
            Ability::UpdatePlayer(team_id) => format!("player:update:{team_id}"),
            Ability::DeletePlayer(team_id) => format!("player:delete:{team_id}"),
        }
    }

    /// Message returned to the client when a token lacks this ability.
    pub fn denial_message(&self) -> &'static str {
        match self {
            Ability::CreateTeam => "Your token is not allowed to create teams",
            Ability::UpdateTeam(_) => "Your token is not allowed to update this team",
            Ability::DeleteTeam(_) => "Your token is not allowed to delete this team",
            Ability::CreatePlayer(_) => "Your token is not allowed to add players to this team",
            Ability::UpdatePlayer(_) => "Your token is not allowed to update players on this team",
            Ability::DeletePlayer(_) => {
                "Your token is not allowed to remove players from this team"
            }
        }
    }
}

/// The authenticated caller of a request.
///
/// Resolved by the auth middleware from the bearer token & carried through
/// the request so controllers can check roles and token abilities without
/// another database round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user: User,
    /// Access token the request authenticated with.
    pub token_id: i32,
    abilities: Vec<String>,
}

impl Principal {
    pub fn new(user: User, token_id: i32, abilities: Vec<String>) -> Self {
        Principal {
            user,
            token_id,
            abilities,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user.role == UserRole::Admin
    }

    /// Whether the token carries the ability, either directly or via the
    /// wildcard.
    pub fn token_can(&self, ability: &Ability) -> bool {
        let scope = ability.scope();

        self.abilities
            .iter()
            .any(|granted| granted == WILDCARD_ABILITY || *granted == scope)
    }

    pub fn require_ability(&self, ability: Ability) -> Result<(), AuthError> {
        if self.token_can(&ability) {
            return Ok(());
        }

        Err(AuthError::AbilityDenied {
            user_id: self.user.id,
            scope: ability.scope(),
            message: ability.denial_message(),
        })
    }

    pub fn require_role(&self, allowed: &[UserRole]) -> Result<(), AuthError> {
        if allowed.contains(&self.user.role) {
            return Ok(());
        }

        Err(AuthError::RoleDenied(self.user.id))
    }
}

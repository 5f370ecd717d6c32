//! Authorization rules for content mutations.
//!
//! Pure predicates over the acting user's effective role and the ownership
//! fields of an already-loaded resource. Callers resolve the resource first;
//! these functions only answer whether the actor may touch it. A banned
//! actor is denied every mutation.

use entity::user::Role;

use crate::server::model::user::User;

/// The acting user, reduced to what the rules need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actor {
    pub id: i32,
    pub role: Role,
}

impl Actor {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            role: user.role,
        }
    }

    fn is_banned(&self) -> bool {
        self.role == Role::Banned
    }

    fn is_staff(&self) -> bool {
        matches!(self.role, Role::Moderator | Role::Admin)
    }
}

/// Any authenticated, non-banned user may post articles, comments,
/// suggestions, and likes.
pub fn can_create_content(actor: Actor) -> bool {
    !actor.is_banned()
}

/// Comments may be edited by their author only.
pub fn can_edit_comment(actor: Actor, author_id: i32) -> bool {
    !actor.is_banned() && actor.id == author_id
}

/// Comments may be deleted by their author, a moderator, or an admin.
pub fn can_delete_comment(actor: Actor, author_id: i32) -> bool {
    !actor.is_banned() && (actor.id == author_id || actor.is_staff())
}

/// Articles and news suggestions may be updated or deleted by moderators
/// and admins. One policy for both operations.
pub fn can_manage_content(actor: Actor) -> bool {
    !actor.is_banned() && actor.is_staff()
}

/// Profiles may be edited by their owner only.
pub fn can_edit_profile(actor: Actor, target_id: i32) -> bool {
    !actor.is_banned() && actor.id == target_id
}

/// Accounts may be deleted by their owner or an admin.
pub fn can_delete_user(actor: Actor, target_id: i32) -> bool {
    !actor.is_banned() && (actor.id == target_id || actor.role == Role::Admin)
}

/// Only admins ban users.
pub fn can_ban_user(actor: Actor) -> bool {
    actor.role == Role::Admin
}

//! The [User Profiles](https://dev.xing.com/docs/resources#user-profiles) resource.
//!
//! Every function accepts a user id; [`ME`] (or [`UserId::me`]) addresses the authorizing user.

use super::new_get_spec;
use crate::domain::{HttpError, ProfileMessage, UserId, XingUser, ME};
use crate::spec::extract::{first, list, list_of, single};
use crate::spec::{BuildError, CallSpec};

type Spec<T> = Result<CallSpec<T, HttpError>, BuildError>;

/// Profiles of the given users, in request order. The data is filtered by the privacy settings
/// of each user.
pub fn get_users_by_id(ids: &[UserId]) -> Spec<Vec<Option<XingUser>>> {
    new_get_spec("/v1/users/{ids}")
        .path_param("ids", ids.iter().map(|id| id.0.clone()).collect::<Vec<_>>())
        .response_as(list_of(&["users"]))
        .build()
}

/// Profile of a single user.
pub fn get_user_by_id(id: &UserId) -> Spec<XingUser> {
    new_get_spec("/v1/users/{id}")
        .path_param("id", id)
        .response_as(first(&["users"]))
        .build()
}

/// Profile of the authorizing user.
pub fn get_own_profile() -> Spec<XingUser> {
    get_user_by_id(&UserId::me())
}

/// Minimal profile of the authorizing user.
pub fn get_own_id_card() -> Spec<XingUser> {
    new_get_spec("/v1/users/me/id_card")
        .response_as(single(&["id_card"]))
        .build()
}

/// Users owning the given email addresses. The output has one entry per address in the same
/// order; addresses without a matching user yield `None`.
///
/// Only user ids are returned unless `user_fields` is added with [`CallSpec::query_param`].
pub fn find_users_by_email(emails: &[&str]) -> Spec<Vec<Option<XingUser>>> {
    new_get_spec("/v1/users/find_by_emails")
        .response_as(list(single(&["user"]), &["results", "items"]))
        .query_param("emails", emails)
        .build()
}

/// Users matching `keywords`.
pub fn find_users_by_keyword(keywords: &str) -> Spec<Vec<Option<XingUser>>> {
    new_get_spec("/v1/users/find")
        .response_as(list(single(&["user"]), &["users", "items"]))
        .query_param("keywords", keywords)
        .experimental()
        .build()
}

/// Most recent profile message of a user.
///
/// The path is the documented `/v1/users/{user_id}/profile_message`. Older clients requested
/// `/v1/{user_id}/profile_message`, which lacks the `users` segment.
pub fn get_user_profile_message(user_id: &UserId) -> Spec<ProfileMessage> {
    new_get_spec("/v1/users/{user_id}/profile_message")
        .path_param("user_id", user_id)
        .response_as(single(&["profile_message"]))
        .build()
}

pub fn get_own_profile_message() -> Spec<ProfileMessage> {
    get_user_profile_message(&UserId::me())
}

/// Legal information (imprint) text of a user.
pub fn get_user_legal_information(user_id: &UserId) -> Spec<String> {
    new_get_spec("/v1/users/{user_id}/legal_information")
        .path_param("user_id", user_id)
        .response_as(single(&["legal_information", "content"]))
        .build()
}

pub fn get_own_legal_information() -> Spec<String> {
    get_user_legal_information(&ME.into())
}

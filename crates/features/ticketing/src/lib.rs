//! # Ticketing vertical
//!
//! | Object    | Providers      |
//! |-----------|----------------|
//! | `team`    | zendesk, front |
//! | `comment` | zendesk, front |

pub mod comment;
pub mod team;

use uhub_kernel::unification::MapperRegistration;

/// Every ticketing mapper.
#[must_use]
pub fn init() -> Vec<MapperRegistration> {
    vec![
        MapperRegistration::new(team::ZendeskTeamMapper),
        MapperRegistration::new(team::FrontTeamMapper),
        MapperRegistration::new(comment::ZendeskCommentMapper),
        MapperRegistration::new(comment::FrontCommentMapper),
    ]
}

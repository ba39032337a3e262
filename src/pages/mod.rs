//! Routed pages. Each page owns its data fetching and renders inside
//! the access guard configured in [`crate::app`].

pub mod auth;
pub mod challenges;
pub mod community;
pub mod create_project;
pub mod dashboard;
pub mod guide_article;
pub mod guides;
pub mod impact;
pub mod map;
pub mod not_found;
pub mod plantings;
pub mod splash;

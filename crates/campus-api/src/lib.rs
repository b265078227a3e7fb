//! JSON REST API for the campus records service.
//!
//! Exposes an axum [`Router`] backed by any [`CampusStore`].
//! Logging, TLS, and transport concerns are the caller's responsibility.
//!
//! | Resource       | Methods                                   |
//! |----------------|-------------------------------------------|
//! | `/addresses`   | `POST`, `GET`, `GET {id}`, `PATCH {id}`   |
//! | `/persons`     | `POST`, `GET`, `GET {id}`, `PATCH {id}`   |
//! | `/courses`     | as above, plus `PUT {id}` and `DELETE {id}` |
//! | `/enrollments` | as above, plus `PUT {id}` and `DELETE {id}` |
//!
//! # Mounting
//!
//! ```rust,ignore
//! .merge(campus_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod extract;
pub mod records;

use std::sync::Arc;

use axum::{Router, routing::get};
use campus_core::{
  address::Address, course::Course, enrollment::Enrollment, person::Person,
  store::CampusStore,
};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be merged into any parent router regardless
/// of its own state type.
pub fn api_router<S: CampusStore>(store: Arc<S>) -> Router<()> {
  Router::new()
    // Addresses
    .route(
      "/addresses",
      get(records::list::<Address, S>).post(records::create::<Address, S>),
    )
    .route(
      "/addresses/{id}",
      get(records::get_one::<Address, S>).patch(records::update::<Address, S>),
    )
    // Persons
    .route(
      "/persons",
      get(records::list::<Person, S>).post(records::create::<Person, S>),
    )
    .route(
      "/persons/{id}",
      get(records::get_one::<Person, S>).patch(records::update::<Person, S>),
    )
    // Courses
    .route(
      "/courses",
      get(records::list::<Course, S>).post(records::create::<Course, S>),
    )
    .route(
      "/courses/{id}",
      get(records::get_one::<Course, S>)
        .patch(records::update::<Course, S>)
        .put(records::replace::<Course, S>)
        .delete(records::delete::<Course, S>),
    )
    // Enrollments
    .route(
      "/enrollments",
      get(records::list::<Enrollment, S>).post(records::create::<Enrollment, S>),
    )
    .route(
      "/enrollments/{id}",
      get(records::get_one::<Enrollment, S>)
        .patch(records::update::<Enrollment, S>)
        .put(records::replace::<Enrollment, S>)
        .delete(records::delete::<Enrollment, S>),
    )
    .with_state(store)
}

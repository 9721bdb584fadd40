//! HTTP handlers and route configuration.

mod health;
mod timers;
mod users;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/users")
                // Public routes
                .route("/register", web::post().to(users::register))
                .route("/login", web::post().to(users::login))
                // Token + ownership gated
                .route("/{user_id}", web::put().to(users::update))
                .route("/{user_id}", web::delete().to(users::delete)),
        )
        .service(
            // Token gated, not ownership gated
            web::scope("/timers")
                .route(
                    "/{user_id}/submit-reaction-time",
                    web::post().to(timers::submit),
                )
                .route(
                    "/{user_id}/get-reaction-times",
                    web::get().to(timers::list),
                ),
        );
}

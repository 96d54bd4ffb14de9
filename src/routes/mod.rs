pub mod assignments;

pub mod grades;

pub mod github;

pub mod roster;

pub use assignments::configure_assignments_routes;
pub use github::configure_github_routes;
pub use grades::configure_grades_routes;
pub use roster::configure_roster_routes;

use actix_web::web;

/// 注册全部 API 路由
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_grades_routes)
        .configure(configure_assignments_routes)
        .configure(configure_roster_routes)
        .configure(configure_github_routes);
}

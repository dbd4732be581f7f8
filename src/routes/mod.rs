use actix_web::web;

pub mod backend_health;
pub mod league;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    // Access control is enforced in front of this service
    cfg.service(
        web::scope("/league")
            .service(league::get_summary)
            .service(league::get_sports)
            .service(league::get_leagues)
            .service(league::get_league_table)
            .service(league::get_teams)
            .service(league::get_team)
            .service(league::get_players)
            .service(league::get_player)
            .service(league::get_matches)
            .service(league::get_match_feed)
            .service(league::get_match)
            .service(league::postpone_match)
            .service(league::resume_match)
            .service(league::record_match_score)
    );
}

pub mod user_stats_postgres;

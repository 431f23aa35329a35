use std::env;

use crate::challenge::rules::RuleSet;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,

    /// Days of contiguous compliance that complete the challenge.
    pub challenge_target_days: u32,

    /// When true, entries with `ate_out` at or over the calorie cap are
    /// rejected at write time instead of merely scoring non-compliant.
    pub strict_eating_out: bool,

    pub eating_out_calorie_cap: i32,
    pub min_calories_burned: i32,
    pub min_steps: i32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .expect("PORT must be a number"),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),

            challenge_target_days: env::var("CHALLENGE_TARGET_DAYS")
                .unwrap_or_else(|_| "75".into())
                .parse()
                .expect("CHALLENGE_TARGET_DAYS must be a number"),

            strict_eating_out: env::var("STRICT_EATING_OUT")
                .unwrap_or_else(|_| "false".into())
                .parse()
                .unwrap_or(false),

            eating_out_calorie_cap: env::var("EATING_OUT_CALORIE_CAP")
                .unwrap_or_else(|_| "500".into())
                .parse()
                .expect("EATING_OUT_CALORIE_CAP must be a number"),
            min_calories_burned: env::var("MIN_CALORIES_BURNED")
                .unwrap_or_else(|_| "350".into())
                .parse()
                .expect("MIN_CALORIES_BURNED must be a number"),
            min_steps: env::var("MIN_STEPS")
                .unwrap_or_else(|_| "8000".into())
                .parse()
                .expect("MIN_STEPS must be a number"),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn rules(&self) -> RuleSet {
        RuleSet {
            eating_out_calorie_cap: self.eating_out_calorie_cap,
            min_calories_burned: self.min_calories_burned,
            min_steps: self.min_steps,
        }
    }
}

use crate::config::Config;
use crate::error::AppError;
use crate::rate_limit::RateLimiter;
use log::debug;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::endpoints;
use super::models::*;
use super::{AramSource, ChampionTable};

const USER_AGENT: &str = "aram_winrate/0.1.0";

pub struct RiotApiClient {
    config: Config,
    agent: ureq::Agent,
    rate_limiter: RateLimiter,
}

/// Error for a non-2xx response. The server's own throttling is reported,
/// never retried.
pub fn status_error(url: &str, code: u16, status_text: &str) -> AppError {
    match code {
        404 => AppError::NotFound(url.to_string()),
        429 => AppError::RateLimited,
        _ => AppError::ApiError(format!("{} returned {} {}", url, code, status_text)),
    }
}

// A 404 from the by-name lookup means the summoner does not exist.
fn summoner_error(err: AppError, name: &str) -> AppError {
    match err {
        AppError::NotFound(_) => AppError::PlayerNotFound(name.to_string()),
        other => other,
    }
}

impl RiotApiClient {
    pub fn new(config: Config, rate_limiter: RateLimiter) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(30))
            .build();
        RiotApiClient {
            config,
            agent,
            rate_limiter,
        }
    }

    // Riot hosts get the API key as a header so it never shows up in a URL or error.
    fn execute_request(&mut self, url: &str, authenticated: bool) -> Result<String, AppError> {
        let agent = &self.agent;
        let api_key = &self.config.api_key;

        let response = self.rate_limiter.call(|| {
            debug!("GET {}", url);
            let request = agent.get(url).set("User-Agent", USER_AGENT);
            let request = if authenticated {
                request.set("X-Riot-Token", api_key)
            } else {
                request
            };
            request.call()
        });

        match response {
            Ok(resp) => resp
                .into_string()
                .map_err(|e| AppError::HttpError(e.to_string())),
            Err(ureq::Error::Status(code, resp)) => Err(status_error(url, code, resp.status_text())),
            Err(e) => Err(AppError::HttpError(e.to_string())),
        }
    }

    fn get_json<T: DeserializeOwned>(&mut self, url: &str, authenticated: bool) -> Result<T, AppError> {
        let body = self.execute_request(url, authenticated)?;
        serde_json::from_str(&body).map_err(|e| {
            AppError::JsonError(format!("{}: {}", url, e))
        })
    }

    pub fn get_summoner(&mut self, name: &str) -> Result<SummonerDto, AppError> {
        let url = endpoints::summoner_by_name(&self.config.region, name)?;
        self.get_json(&url, true)
            .map_err(|e| summoner_error(e, name))
    }

    pub fn get_matchlist(&mut self, account_id: &str, begin: usize, end: usize) -> Result<MatchlistDto, AppError> {
        let url = endpoints::matchlist_by_account(&self.config.region, account_id, begin, end);
        self.get_json(&url, true)
    }

    pub fn get_match(&mut self, game_id: i64) -> Result<MatchDto, AppError> {
        let url = endpoints::match_by_id(&self.config.region, game_id);
        self.get_json(&url, true)
    }

    pub fn get_champion_version(&mut self) -> Result<String, AppError> {
        let url = endpoints::realm_versions(&self.config.region);
        let realm: RealmDto = self.get_json(&url, false)?;
        realm.champion_version().map(str::to_string).ok_or_else(|| {
            AppError::JsonError(format!("{}: no champion version in realm", url))
        })
    }

    pub fn get_champion_data(&mut self, version: &str) -> Result<DataDragonChampions, AppError> {
        let url = endpoints::champions(version);
        self.get_json(&url, false)
    }
}

impl AramSource for RiotApiClient {
    fn resolve_account_id(&mut self, username: &str) -> Result<String, AppError> {
        Ok(self.get_summoner(username)?.account_id)
    }

    fn list_aram_games(&mut self, account_id: &str, begin: usize, end: usize) -> Result<Vec<i64>, AppError> {
        let matchlist = self.get_matchlist(account_id, begin, end)?;
        Ok(matchlist.matches.into_iter().map(|m| m.game_id).collect())
    }

    fn fetch_champion_table(&mut self) -> Result<ChampionTable, AppError> {
        let version = self.get_champion_version()?;
        debug!("champion data version {}", version);
        Ok(self.get_champion_data(&version)?.into_table())
    }

    fn fetch_match(&mut self, game_id: i64) -> Result<MatchDto, AppError> {
        self.get_match(game_id)
    }
}

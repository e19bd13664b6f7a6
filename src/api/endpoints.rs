// URL builders for the Riot and Data Dragon endpoints used by the client.

use crate::error::AppError;
use url::Url;

pub const ARAM_QUEUE: i32 = 450;

const DATA_DRAGON_BASE: &str = "https://ddragon.leagueoflegends.com";

fn platform_host(region: &str) -> String {
    format!("https://{}.api.riotgames.com", region)
}

/// The summoner name is percent-encoded as a single path segment.
pub fn summoner_by_name(region: &str, name: &str) -> Result<String, AppError> {
    let invalid = || AppError::ConfigError(format!("Invalid region: {}", region));

    let mut url = Url::parse(&platform_host(region)).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .pop_if_empty()
        .extend(&["lol", "summoner", "v4", "summoners", "by-name", name]);

    Ok(url.into())
}

pub fn matchlist_by_account(region: &str, account_id: &str, begin: usize, end: usize) -> String {
    format!(
        "{}/lol/match/v4/matchlists/by-account/{}?queue={}&beginIndex={}&endIndex={}",
        platform_host(region),
        account_id,
        ARAM_QUEUE,
        begin,
        end
    )
}

pub fn match_by_id(region: &str, game_id: i64) -> String {
    format!("{}/lol/match/v4/matches/{}", platform_host(region), game_id)
}

pub fn realm_versions(region: &str) -> String {
    format!("{}/realms/{}.json", DATA_DRAGON_BASE, data_dragon_realm(region))
}

pub fn champions(version: &str) -> String {
    format!("{}/cdn/{}/data/en_US/champion.json", DATA_DRAGON_BASE, version)
}

/// Data Dragon names its realms differently from the platform routing values.
pub fn data_dragon_realm(region: &str) -> &str {
    match region {
        "na1" => "na",
        "euw1" => "euw",
        "eun1" => "eune",
        "br1" => "br",
        "la1" => "lan",
        "la2" => "las",
        "oc1" => "oce",
        "tr1" => "tr",
        "jp1" => "jp",
        "kr" => "kr",
        "ru" => "ru",
        _ => "na", // default
    }
}

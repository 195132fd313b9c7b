use crate::{
    client::{constant::API_BASE, model::error::ApiError},
    model::{api::LazyResultDto, ban::SteamBanDto, query::QueryFilterDto},
};

use super::helper::{get, parse_response, send_request};

/// Get one page of Steam bans, sorted and filtered by the server
pub async fn get_steam_bans(
    filter: QueryFilterDto,
) -> Result<LazyResultDto<SteamBanDto>, ApiError> {
    let url = format!("{}/bans/steam?{}", API_BASE, filter.to_query_string());

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Get every ban with an appeal on record
pub async fn get_appeals() -> Result<Vec<SteamBanDto>, ApiError> {
    let url = format!("{}/appeals", API_BASE);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

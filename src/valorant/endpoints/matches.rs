use async_trait::async_trait;
use urlencoding::encode;

use crate::valorant::client::ValorantClient;
use crate::valorant::traits::MatchApi;
use crate::valorant::types::{ApiResult, MatchDto, MatchListDto};

#[async_trait]
impl MatchApi for ValorantClient {
    async fn get_recent_matches(
        &self,
        region: &str,
        puuid: &str,
        size: u32,
    ) -> ApiResult<Vec<MatchDto>> {
        tracing::trace!(
            "[VALORANT::CLIENT] get_recent_matches {} in {} (size {})",
            puuid,
            region,
            size
        );

        let url = format!(
            "{}/valorant/v3/by-puuid/matches/{}/{}?size={}",
            self.base_url(),
            encode(region),
            encode(puuid),
            size
        );

        let list: MatchListDto = self.get(&url).await?;

        Ok(list.data.unwrap_or_default())
    }
}

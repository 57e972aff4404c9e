/*
[INPUT]:  Remote /system/config endpoint
[OUTPUT]: ChainConfig with the short-string-encoded chain id
[POS]:    HTTP layer - unauthenticated system endpoints
[UPDATE]: When the system config schema or encoding changes
*/

use reqwest::Method;
use starknet_core::utils::cairo_short_string_to_felt;

use crate::http::{ParadexClient, ParadexError, Result};
use crate::types::{ChainConfig, SystemConfigResponse};

impl ParadexClient {
    /// Fetch chain parameters needed to parameterize signatures
    ///
    /// GET /system/config
    ///
    /// The remote reports the chain id as a human-readable string; the signing
    /// scheme needs its Cairo short-string felt encoding. Not retried here;
    /// the caller decides whether to retry the whole flow.
    pub async fn get_system_config(&self) -> Result<ChainConfig> {
        let builder = self.api_request(Method::GET, "/system/config")?;
        let response: SystemConfigResponse = self
            .send_json(builder)
            .await
            .map_err(|e| ParadexError::ConfigUnavailable(e.to_string()))?;

        let chain_id = cairo_short_string_to_felt(&response.starknet_chain_id).map_err(|e| {
            ParadexError::ConfigUnavailable(format!(
                "chain id {:?} is not a valid short string: {e}",
                response.starknet_chain_id
            ))
        })?;

        Ok(ChainConfig { chain_id })
    }
}

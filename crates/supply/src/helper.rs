use crate::{
    config::HelperConfig,
    derivation::{derive_dependent_script, derive_supply_lock_script, supply_search_args},
    query::{collect_pages, PagedQuery, QueryError, SearchKey},
};
use rc_lock_codec::{decode_sudt_info, EncodeResult};
use rc_lock_types::{Hash, Identity, ResolvedCell, Script, ScriptType, SudtInfo};

/// Lists and derives RC supply scripts for one deployment.
///
/// The helper holds no mutable state, so independent listings may run
/// concurrently through a shared reference.
#[derive(Debug, Clone)]
pub struct RcSupplyLockHelper<Q> {
    indexer: Q,
    config: HelperConfig,
}

impl<Q> RcSupplyLockHelper<Q> {
    /// Create a helper querying `indexer` for the scripts in `config`.
    pub fn new(indexer: Q, config: HelperConfig) -> Self {
        Self { indexer, config }
    }

    /// The deployment configuration.
    pub fn config(&self) -> &HelperConfig {
        &self.config
    }

    /// The indexer.
    pub fn indexer(&self) -> &Q {
        &self.indexer
    }

    /// The supply lock script guarding the info cell of `issuer_id`.
    pub fn build_supply_lock_script(
        &self,
        identity: &Identity,
        issuer_id: &Hash,
    ) -> EncodeResult<Script> {
        derive_supply_lock_script(&self.config.rc_lock, identity, issuer_id)
    }

    /// The sUDT type script of the tokens issued under the supply lock.
    pub fn build_dependent_script(
        &self,
        identity: &Identity,
        issuer_id: &Hash,
    ) -> EncodeResult<Script> {
        let lock = self.build_supply_lock_script(identity, issuer_id)?;
        Ok(derive_dependent_script(&self.config.sudt_type, &lock))
    }

    /// Search key for the identity's supply info cells. Without an issuer id
    /// every supply cell of the identity matches.
    pub fn search_key(
        &self,
        identity: &Identity,
        issuer_id: Option<&Hash>,
    ) -> EncodeResult<SearchKey> {
        Ok(SearchKey {
            script: self
                .config
                .rc_lock
                .with_args(supply_search_args(identity, issuer_id)?),
            script_type: ScriptType::Lock,
        })
    }
}

impl<Q> RcSupplyLockHelper<Q>
where
    Q: PagedQuery<Item = ResolvedCell>,
{
    /// Every supply info cell of the identity, optionally limited to one issuer.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(identity = %identity)))]
    pub async fn list_supply_info_cells(
        &self,
        identity: &Identity,
        issuer_id: Option<&Hash>,
    ) -> Result<Vec<ResolvedCell>, QueryError<Q::Error>> {
        let search_key = self
            .search_key(identity, issuer_id)
            .map_err(QueryError::SearchKey)?;
        collect_pages(&self.indexer, &search_key).await
    }

    /// Decoded supply info of every supply info cell of the identity.
    ///
    /// Fails if any cell does not decode.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(identity = %identity)))]
    pub async fn list_supply_info(
        &self,
        identity: &Identity,
        issuer_id: Option<&Hash>,
    ) -> Result<Vec<SudtInfo>, QueryError<Q::Error>> {
        let cells = self.list_supply_info_cells(identity, issuer_id).await?;
        cells
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                decode_sudt_info(cell).map_err(|source| {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        "cell 0x{}:{} is not a supply info cell: {}",
                        hex::encode(cell.out_point.tx_hash),
                        cell.out_point.index,
                        source
                    );
                    QueryError::Decode { index, source }
                })
            })
            .collect()
    }
}

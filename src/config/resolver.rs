// Network resolution - bulk overwrite of network-dependent record fields
// Principle: resolution is stateless; resolving n1 -> n2 -> n1 equals
// resolving n1 once.

use tracing::{info, warn};

use crate::config::NodeConfig;
use crate::error::SetupError;
use crate::network::{endpoints, NetworkCatalog, Topology};

/// Outcome of one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Canonical identifier the record now belongs to.
    pub network: String,
    /// False when the network+topology combination had no endpoint table;
    /// the endpoint fields were cleared and deploy-time validation will
    /// reject the record.
    pub endpoints_resolved: bool,
}

/// Applies a chosen network identifier against the catalog to populate every
/// network-dependent field of a record.
pub struct NetworkResolver<'a> {
    catalog: &'a NetworkCatalog,
}

impl<'a> NetworkResolver<'a> {
    pub fn new(catalog: &'a NetworkCatalog) -> Self {
        Self { catalog }
    }

    /// Re-resolve `cfg` for `id` under `topology`.
    ///
    /// Fails with `NotFound` for an unrecognized identifier; the wizard maps
    /// that to a re-prompt instead of propagating it. Mutates only the
    /// passed-in record.
    pub fn resolve(
        &self,
        cfg: &mut NodeConfig,
        id: &str,
        topology: Topology,
    ) -> Result<Resolution, SetupError> {
        let profile = self.catalog.profile(id)?;
        cfg.apply_profile(profile);

        let set = endpoints::endpoints(id, topology);
        let endpoints_resolved = set.is_some();
        cfg.apply_endpoints(set);

        if endpoints_resolved {
            info!(network = %id, %topology, "resolved network profile");
        } else {
            warn!(
                network = %id,
                %topology,
                "no endpoint table for this combination; endpoints left unset"
            );
        }

        Ok(Resolution {
            network: id.to_string(),
            endpoints_resolved,
        })
    }
}

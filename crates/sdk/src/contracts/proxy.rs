use alloy::{primitives::Address, providers::Provider};

use crate::{
    Chain,
    abi::proxy::MasterCopyProxy::{self, MasterCopyProxyInstance},
    error::SwapError,
};

/// Client of the suite's master-copy proxy.
#[derive(Clone)]
pub struct Proxy<P> {
    instance: MasterCopyProxyInstance<P>,
}

impl<P: Provider> Proxy<P> {
    pub fn new(chain: &Chain, provider: P) -> Self {
        Self { instance: MasterCopyProxy::new(chain.proxy(), provider) }
    }

    /// Client of a proxy at an explicit address.
    pub fn at(proxy: Address, provider: P) -> Self {
        Self { instance: MasterCopyProxy::new(proxy, provider) }
    }

    pub fn address(&self) -> Address { *self.instance.address() }

    /// Address of the implementation the proxy delegates to.
    pub async fn master_copy(&self) -> Result<Address, SwapError> {
        Ok(self.instance.masterCopy().call().await?)
    }
}

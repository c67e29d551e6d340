use std::marker::PhantomData;

use crate::{router_data::ConnectorAuthType, types::Connectors};

/// Everything a connector needs to run one flow `F` with request data `Req`.
#[derive(Debug, Clone)]
pub struct RouterDataV2<F, Req> {
    pub flow: PhantomData<F>,
    pub connector_auth_type: ConnectorAuthType,
    pub connectors: Connectors,
    pub request: Req,
}

impl<F, Req> RouterDataV2<F, Req> {
    pub fn new(connector_auth_type: ConnectorAuthType, connectors: Connectors, request: Req) -> Self {
        Self {
            flow: PhantomData,
            connector_auth_type,
            connectors,
            request,
        }
    }

    /// Same credentials and endpoints, different flow and request.
    pub fn for_flow<F2, Req2>(&self, request: Req2) -> RouterDataV2<F2, Req2> {
        RouterDataV2 {
            flow: PhantomData,
            connector_auth_type: self.connector_auth_type.clone(),
            connectors: self.connectors.clone(),
            request,
        }
    }
}

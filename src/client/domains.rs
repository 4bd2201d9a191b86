use std::sync::Arc;

use crate::client::{Shared, UnsendError, decode_error};
use crate::domain::DomainData;
use crate::transport::{decode_domains_json, routes};

#[derive(Clone)]
/// Operations on sending domains.
pub struct DomainsClient {
    shared: Arc<Shared>,
}

impl DomainsClient {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        Self { shared }
    }

    /// List the account's sending domains, in server order.
    pub async fn list(&self) -> Result<Vec<DomainData>, UnsendError> {
        let response = self.shared.dispatch(routes::domains(), None).await?;
        self.shared.check_status(&response)?;
        decode_domains_json(&response.body).map_err(|err| decode_error(err, &response.body))
    }
}

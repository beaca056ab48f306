use crate::core::{LoadResponse, Pipeline};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Fetch, parse and load one source file.
    ///
    /// Missing configuration and fetch failures come back as `Err`; anything
    /// that goes wrong while writing rows is folded into a 500 response.
    pub async fn run(&self) -> Result<LoadResponse> {
        tracing::info!("Starting customer load");

        let rows = self.pipeline.extract().await?;
        let response = self.pipeline.load(rows).await?;

        tracing::info!(status_code = response.status_code, "Customer load finished");
        Ok(response)
    }
}

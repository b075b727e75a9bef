use crate::core::loader::load_source;
use crate::core::matcher::match_sources;
use crate::core::writer::write_codes;
use crate::core::{ConfigProvider, MatchOutcome, Pipeline, SourceCodes, Storage};
use crate::domain::model::SOURCE_COUNT;
use crate::utils::error::{EtlError, Result};
use std::io::BufWriter;

/// Loads every configured source, keeps codes found in at least two of them
/// and writes the sorted result through `Storage`.
pub struct CouponPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CouponPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CouponPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<SourceCodes>> {
        let rules = self.config.code_rules();
        let interval = self.config.progress_interval();
        let mut sources = Vec::with_capacity(self.config.source_files().len());

        // one file at a time: each reader is dropped before the next is opened
        for path in self.config.source_files() {
            let raw = self.storage.open_read(path)?;
            sources.push(load_source(path, raw, &rules, interval)?);
        }

        Ok(sources)
    }

    async fn transform(&self, sources: Vec<SourceCodes>) -> Result<MatchOutcome> {
        let found = sources.len();
        let [first, second, third]: [SourceCodes; SOURCE_COUNT] =
            sources.try_into().map_err(|_| EtlError::ProcessingError {
                message: format!("expected {} sources, got {}", SOURCE_COUNT, found),
            })?;

        tracing::info!("🔎 Finding codes in 2+ files using set intersections...");
        let outcome = match_sources(first.codes, second.codes, third.codes);
        tracing::info!(
            "Total valid codes (in 2+ files): {}",
            outcome.valid_codes.len()
        );

        Ok(outcome)
    }

    async fn load(&self, outcome: MatchOutcome) -> Result<String> {
        let output_path = self.config.output_path().to_string();
        tracing::info!("💾 Writing to {}...", output_path);

        let out = self.storage.open_write(&output_path)?;
        let written = write_codes(&outcome.valid_codes, BufWriter::new(out)).map_err(|e| {
            EtlError::OutputError {
                path: output_path.clone(),
                source: e,
            }
        })?;
        tracing::debug!("Wrote {} codes", written);

        Ok(output_path)
    }
}

use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives a pipeline through extract, transform and load, strictly in sequence.
pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🚀 Starting coupon cross-reference...");
        self.monitor.log_stats("Start");

        tracing::info!("📥 Extracting coupon sources...");
        let sources = self.pipeline.extract().await?;
        let total_lines: u64 = sources.iter().map(|s| s.lines_read).sum();
        tracing::info!("Loaded {} sources ({} lines)", sources.len(), total_lines);
        self.monitor.log_stats("Extract");

        tracing::info!("🔄 Matching codes across sources...");
        let outcome = self.pipeline.transform(sources).await?;
        self.monitor.log_stats("Transform");

        tracing::info!("📤 Writing {} valid codes...", outcome.valid_codes.len());
        let output_path = self.pipeline.load(outcome).await?;
        self.monitor.log_stats("Load");

        tracing::info!("Done! Output saved to: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}

use connectors::source::{CsvRecordSource, RowFetch, SourceError};
use connectors::store::StoreError;
use connectors::transform;
use model::report::TickReport;
use replay_core::{context::ReplayContext, error::ReplayError};
use tracing::info;

/// Runs one tick against the given context.
pub async fn run(ctx: &ReplayContext) -> Result<TickReport, ReplayError> {
    ReplayExecutor { ctx }.execute().await
}

struct ReplayExecutor<'a> {
    ctx: &'a ReplayContext,
}

impl ReplayExecutor<'_> {
    /// One tick: read the cursor, emit every configured source at that
    /// position, then advance the cursor by exactly one. The cursor write is
    /// the single commit point; any failure before it leaves the position
    /// untouched and the next invocation re-runs the same tick. Sources
    /// already published in a failed tick are re-emitted on the re-run
    /// (at-least-once, never silent loss).
    async fn execute(&self) -> Result<TickReport, ReplayError> {
        let cursor = self.ctx.cursor_store.read().await?;
        let position = cursor.position;
        info!(position, "tick started");

        // Configured order, fixed across invocations, so partial-failure
        // re-runs replay the sources in the same sequence.
        for engine in &self.ctx.config.engines {
            self.replay_source(engine, position).await?;
        }

        self.ctx.cursor_store.write(cursor.advanced()).await?;
        info!(position, next = position + 1, "tick committed");

        Ok(TickReport::completed(position))
    }

    async fn replay_source(&self, engine: &str, position: u64) -> Result<(), ReplayError> {
        let source = CsvRecordSource::new(engine, self.ctx.store.clone());
        let fetched = tokio::time::timeout(self.ctx.config.io_timeout, source.fetch_row(position))
            .await
            .map_err(|_| {
                SourceError::Unavailable(
                    engine.to_string(),
                    StoreError::Io(std::io::Error::new(
                        std::io::ErrorKind::TimedOut,
                        format!("fetch exceeded {:?}", self.ctx.config.io_timeout),
                    )),
                )
            })??;

        match fetched {
            RowFetch::Row(row) => {
                let event = transform::transform(
                    &row,
                    &self.ctx.config.identity_column,
                    &self.ctx.config.feature_columns,
                )?;
                self.ctx.sink.publish(&event).await?;
                info!(engine, position, event_id = %event.id, "published");
            }
            RowFetch::EndOfSource => {
                // Exhausted sources sit the tick out; the others keep going
                // and the cursor still advances.
                info!(engine, position, "end of source, skipped");
            }
        }
        Ok(())
    }
}
